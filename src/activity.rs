//! Activity monitoring and the wake signal
//!
//! The sensor reports whether it is in the inactivity (sleep) state through
//! bit 4 of `WAKE_UP_SRC` and, with the default routing, drives the same
//! state onto INT1. The node sees that pin as its wake line.
//!
//! Two things can tell the node that motion started:
//! - the interrupt callback, which only calls [`WakeFlag::signal`]
//! - the pin level, which is what the node trusts
//!
//! [`PinWake`] combines both behind the [`WakeSignal`] trait.

use core::sync::atomic::{AtomicBool, Ordering};

/// `WAKE_UP_SRC` bit that is set while the device is inactive
pub const SLEEP_STATE: u8 = 0x10;

/// True when `WAKE_UP_SRC` reports the inactivity (sleep) state
///
/// A set `SLEEP_STATE` bit means inactive; a clear bit means motion is
/// ongoing and the node should sample.
#[must_use]
pub const fn is_inactive(wake_up_src: u8) -> bool {
    (wake_up_src & SLEEP_STATE) == SLEEP_STATE
}

/// Activity classification from one `WAKE_UP_SRC` read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivityState {
    /// Motion above the wake-up threshold
    Active,
    /// No motion for the configured sleep duration
    Inactive,
}

impl ActivityState {
    /// Classify a raw `WAKE_UP_SRC` value
    #[must_use]
    pub const fn from_wake_up_src(value: u8) -> Self {
        if is_inactive(value) {
            Self::Inactive
        } else {
            Self::Active
        }
    }

    /// Whether the node should be sampling
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Flag set from the wake interrupt
///
/// Meant to live in a `static` shared between the interrupt callback and the
/// node thread. It records that an edge happened; the pin level decides
/// whether the node actually wakes.
///
/// ```ignore
/// static WAKE: WakeFlag = WakeFlag::new();
///
/// fn int1_callback() {
///     WAKE.signal();
/// }
/// ```
#[derive(Debug, Default)]
pub struct WakeFlag {
    raised: AtomicBool,
}

impl WakeFlag {
    /// Create a lowered flag
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Raise the flag (interrupt context)
    pub fn signal(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Lower the flag and return whether it was raised
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::AcqRel)
    }

    /// Whether the flag is raised, without lowering it
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

/// Source of the activity wake-up event
pub trait WakeSignal {
    /// Error reading the underlying line
    type Error: embedded_hal::digital::Error;

    /// Block until an activity event is signalled
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be read.
    fn wait_for_activity(&mut self) -> Result<(), Self::Error>;

    /// Current level of the wake line, `true` while motion is ongoing
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be read.
    fn is_active(&mut self) -> Result<bool, Self::Error>;
}

/// [`WakeSignal`] over an input pin and an interrupt-set [`WakeFlag`]
///
/// The line is active low (INT1 pulled up, falling edge on activity). While
/// waiting, the pin is checked whenever the interrupt flag fires and
/// otherwise once per `idle_check_ms`, so a missed edge cannot strand the
/// node.
pub struct PinWake<'a, P, D> {
    pin: P,
    flag: &'a WakeFlag,
    delay: D,
    idle_check_ms: u32,
}

impl<'a, P, D> PinWake<'a, P, D> {
    /// Default interval between level checks while no edge arrives
    pub const DEFAULT_IDLE_CHECK_MS: u32 = 100;

    /// Create a wake signal over `pin`
    pub const fn new(pin: P, flag: &'a WakeFlag, delay: D) -> Self {
        Self {
            pin,
            flag,
            delay,
            idle_check_ms: Self::DEFAULT_IDLE_CHECK_MS,
        }
    }

    /// Change the interval between level checks while idle
    #[must_use]
    pub fn with_idle_check_ms(mut self, idle_check_ms: u32) -> Self {
        self.idle_check_ms = idle_check_ms;
        self
    }

    /// Consume the wake signal and return the pin and delay
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P, D> WakeSignal for PinWake<'_, P, D>
where
    P: embedded_hal::digital::InputPin,
    D: embedded_hal::delay::DelayNs,
{
    type Error = P::Error;

    fn wait_for_activity(&mut self) -> Result<(), Self::Error> {
        loop {
            let edge = self.flag.take();
            if self.pin.is_low()? {
                return Ok(());
            }
            if edge {
                #[cfg(feature = "defmt")]
                defmt::debug!("Wake edge seen but line already released");
                continue;
            }
            self.delay.delay_ms(self.idle_check_ms);
        }
    }

    fn is_active(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low()
    }
}
