//! Activity/inactivity (sleep) configuration
//!
//! When no motion above the wake-up threshold is seen for the sleep duration,
//! the LSM6DSOX drops into inactivity: the accelerometer falls back to
//! 12.5 Hz low-power and the gyroscope is reconfigured per
//! [`InactivityMode`]. Motion above the threshold for the wake duration
//! brings both back to their configured rates.
//!
//! # Timing
//! - Sleep duration: 1 LSB = 512 / `ODR_XL` (about 2.46 s at 208 Hz)
//! - Wake duration: 1 LSB = 1 / `ODR_XL`
//! - Wake threshold: 1 LSB = `FS_XL` / 64 (or / 256 with the fine weight)
//!
//! # Example
//!
//! ```ignore
//! # use lsm6dsox_node::power::{InactivityConfig, InactivityMode};
//! let config = InactivityConfig {
//!     sleep_duration: 8,
//!     wake_threshold: 2,
//!     mode: InactivityMode::GyroPowerDown,
//!     ..Default::default()
//! };
//! ```

use crate::sensors::AccelOdr;

/// Gyroscope behavior while the device is inactive (`INACT_EN`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InactivityMode {
    /// Inactivity detection disabled
    Disabled = 0b00,
    /// Accelerometer to 12.5 Hz low-power, gyroscope unchanged
    GyroUnchanged = 0b01,
    /// Accelerometer to 12.5 Hz low-power, gyroscope to sleep
    GyroSleep = 0b10,
    /// Accelerometer to 12.5 Hz low-power, gyroscope to power-down
    GyroPowerDown = 0b11,
}

/// Wake-up and inactivity configuration
///
/// Written to `WAKE_UP_DUR`, `WAKE_UP_THS`, `TAP_CFG0` and `TAP_CFG2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InactivityConfig {
    /// Duration before entering inactivity (4 bits)
    pub sleep_duration: u8,
    /// Wake-up duration (2 bits)
    pub wake_duration: u8,
    /// Wake-up threshold (6 bits)
    pub wake_threshold: u8,
    /// Use the fine threshold weight (`FS_XL` / 256)
    pub fine_threshold: bool,
    /// Gyroscope behavior while inactive
    pub mode: InactivityMode,
    /// Drive INT1 with the sleep state as a level instead of a change pulse
    pub sleep_status_on_int: bool,
    /// Use the high-pass filter instead of the slope filter for wake-up
    pub high_pass_filter: bool,
}

impl Default for InactivityConfig {
    /// `WAKE_UP_DUR = 0x68`, `WAKE_UP_THS = 0x02`, `TAP_CFG0 = 0x20`,
    /// `TAP_CFG2 = 0xE0`
    fn default() -> Self {
        Self {
            sleep_duration: 8,
            wake_duration: 3,
            wake_threshold: 2,
            fine_threshold: false,
            mode: InactivityMode::GyroPowerDown,
            sleep_status_on_int: true,
            high_pass_filter: false,
        }
    }
}

impl InactivityConfig {
    /// Check that every field fits its register width
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.sleep_duration <= 0x0F && self.wake_duration <= 0x03 && self.wake_threshold <= 0x3F
    }

    /// Raw `WAKE_UP_DUR` value
    #[must_use]
    pub const fn wake_up_dur_bits(&self) -> u8 {
        ((self.wake_duration & 0x03) << 5)
            | ((self.fine_threshold as u8) << 4)
            | (self.sleep_duration & 0x0F)
    }

    /// Raw `WAKE_UP_THS` value
    #[must_use]
    pub const fn wake_up_ths_bits(&self) -> u8 {
        self.wake_threshold & 0x3F
    }

    /// Raw `TAP_CFG0` value
    #[must_use]
    pub const fn tap_cfg0_bits(&self) -> u8 {
        ((self.sleep_status_on_int as u8) << 5) | ((self.high_pass_filter as u8) << 4)
    }

    /// Raw `TAP_CFG2` value (basic interrupts always enabled)
    #[must_use]
    pub const fn tap_cfg2_bits(&self) -> u8 {
        0x80 | ((self.mode as u8) << 5)
    }

    /// Time without motion before the device goes inactive, in milliseconds
    #[must_use]
    pub fn sleep_after_ms(&self, odr: AccelOdr) -> u32 {
        let hz = odr.hz();
        if hz <= 0.0 {
            return 0;
        }
        // SLEEP_DUR = 0 means 16 ODR periods
        let periods = if self.sleep_duration == 0 {
            16.0
        } else {
            f32::from(self.sleep_duration) * 512.0
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = (periods * 1000.0 / hz) as u32;
        ms
    }
}
