//! Interrupt routing and status decoding
//!
//! The LSM6DSOX has two interrupt pins. This node wires INT1 to the MCU wake
//! line and routes the activity/inactivity change onto it. Data-ready is not
//! routed by default; the node polls `STATUS_REG` instead.
//!
//! # Example
//!
//! ```ignore
//! # use lsm6dsox_node::interrupt::{self, InterruptRouting};
//! let routing = InterruptRouting {
//!     int1_sleep_change: true,
//!     ..Default::default()
//! };
//!
//! // Check whether a fresh gyroscope sample is waiting
//! let ready = interrupt::is_data_ready(status, interrupt::G_DATA_READY);
//! ```

/// `STATUS_REG` bit: new accelerometer sample available
pub const XL_DATA_READY: u8 = 0x01;
/// `STATUS_REG` bit: new gyroscope sample available
pub const G_DATA_READY: u8 = 0x02;
/// `STATUS_REG` bit: new temperature sample available
pub const TEMP_DATA_READY: u8 = 0x04;

/// True iff every bit of `mask` is set in `value`
#[must_use]
pub const fn is_data_ready(value: u8, mask: u8) -> bool {
    (value & mask) == mask
}

/// Decoded `STATUS_REG`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataReadyStatus {
    /// New accelerometer sample available
    pub accel: bool,
    /// New gyroscope sample available
    pub gyro: bool,
    /// New temperature sample available
    pub temperature: bool,
}

impl DataReadyStatus {
    /// Decode a raw `STATUS_REG` value
    #[must_use]
    pub const fn from_bits(value: u8) -> Self {
        Self {
            accel: is_data_ready(value, XL_DATA_READY),
            gyro: is_data_ready(value, G_DATA_READY),
            temperature: is_data_ready(value, TEMP_DATA_READY),
        }
    }

    /// Both motion sub-devices have fresh data
    #[must_use]
    pub const fn motion_ready(&self) -> bool {
        self.accel && self.gyro
    }
}

/// Decoded `WAKE_UP_SRC`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct WakeUpSource {
    /// Wake-up event on Z
    pub z_wake: bool,
    /// Wake-up event on Y
    pub y_wake: bool,
    /// Wake-up event on X
    pub x_wake: bool,
    /// Wake-up event detected
    pub wake_up: bool,
    /// Device is in the inactivity (sleep) state
    pub sleep_state: bool,
    /// Free-fall event detected
    pub free_fall: bool,
    /// Activity/inactivity state changed
    pub sleep_change: bool,
}

impl WakeUpSource {
    /// Decode a raw `WAKE_UP_SRC` value
    #[must_use]
    pub const fn from_bits(value: u8) -> Self {
        Self {
            z_wake: value & 0x01 != 0,
            y_wake: value & 0x02 != 0,
            x_wake: value & 0x04 != 0,
            wake_up: value & 0x08 != 0,
            sleep_state: crate::activity::is_inactive(value),
            free_fall: value & 0x20 != 0,
            sleep_change: value & 0x40 != 0,
        }
    }
}

/// Function and data-ready routing onto the interrupt pins
///
/// Written to `MD1_CFG`, `MD2_CFG` and `INT1_CTRL` at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptRouting {
    /// Activity/inactivity change on INT1
    pub int1_sleep_change: bool,
    /// Wake-up event on INT1
    pub int1_wake_up: bool,
    /// Free-fall on INT1
    pub int1_free_fall: bool,
    /// Activity/inactivity change on INT2
    pub int2_sleep_change: bool,
    /// Wake-up event on INT2
    pub int2_wake_up: bool,
    /// Accelerometer data-ready on INT1
    pub int1_drdy_accel: bool,
    /// Gyroscope data-ready on INT1
    pub int1_drdy_gyro: bool,
}

impl Default for InterruptRouting {
    /// Activity/inactivity on INT1 only (`MD1_CFG = 0x80`, `MD2_CFG = 0x00`,
    /// `INT1_CTRL = 0x00`)
    fn default() -> Self {
        Self::activity_only()
    }
}

impl InterruptRouting {
    /// Route only the activity/inactivity change, to INT1
    pub const fn activity_only() -> Self {
        Self {
            int1_sleep_change: true,
            int1_wake_up: false,
            int1_free_fall: false,
            int2_sleep_change: false,
            int2_wake_up: false,
            int1_drdy_accel: false,
            int1_drdy_gyro: false,
        }
    }

    /// Raw `MD1_CFG` value
    #[must_use]
    pub const fn md1_bits(&self) -> u8 {
        ((self.int1_sleep_change as u8) << 7)
            | ((self.int1_wake_up as u8) << 5)
            | ((self.int1_free_fall as u8) << 4)
    }

    /// Raw `MD2_CFG` value
    #[must_use]
    pub const fn md2_bits(&self) -> u8 {
        ((self.int2_sleep_change as u8) << 7) | ((self.int2_wake_up as u8) << 5)
    }

    /// Raw `INT1_CTRL` value
    #[must_use]
    pub const fn int1_ctrl_bits(&self) -> u8 {
        ((self.int1_drdy_gyro as u8) << 1) | (self.int1_drdy_accel as u8)
    }

    /// Check if any routing is enabled
    pub const fn any_enabled(&self) -> bool {
        self.md1_bits() != 0 || self.md2_bits() != 0 || self.int1_ctrl_bits() != 0
    }
}
