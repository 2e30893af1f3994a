#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod activity;
pub mod config;
pub mod device;
pub mod interface;
pub mod interrupt;
pub mod node;
pub mod power;
pub mod radio;
pub mod registers;
pub mod sensors;
pub mod telemetry;

// Re-export main types
pub use activity::{ActivityState, PinWake, WakeFlag, WakeSignal};
pub use config::{DeviceConfig, NodeConfig};
pub use device::Lsm6dsoxDriver;
pub use interface::SpiInterface;
pub use interrupt::{DataReadyStatus, InterruptRouting, WakeUpSource};
pub use node::{NodeState, SensorNode};
pub use power::{InactivityConfig, InactivityMode};
pub use radio::{
    CommandStatus, DiagnosticPing, Radio, TerminationReason, TransmitOutcome, Transmitter,
};
pub use sensors::{
    AccelConfig, AccelDataG, AccelFullScale, AccelOdr, GyroConfig, GyroDataDps, GyroFullScale,
    GyroOdr, MotionSample, RawTriple,
};
pub use telemetry::{BatteryMonitor, TelemetryReading};

/// Bit 15 of the transmitted word marks a register read
pub const READ_BIT: u16 = 0x8000;

/// Expected value of the `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0x6C;

/// Driver and node errors
///
/// Every variant except [`Error::InvalidPayload`] is a fault the node cannot
/// recover from on its own. The node stops and hands the error to the
/// embedding application, which decides whether to halt or reboot.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error on the register bus
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// Payload length outside `1..=MAX_PAYLOAD_LEN` (contains the length)
    InvalidPayload(usize),
    /// Radio command ended with an unrecognized termination event mask
    RadioTermination(u64),
    /// Radio command reported an unrecognized status code
    RadioStatus(u16),
    /// Reading the wake line failed
    WakeLine(embedded_hal::digital::ErrorKind),
}

impl<E> Error<E> {
    /// Whether the node must stop after this error
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::InvalidPayload(_))
    }
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
