//! Device and node configuration
//!
//! [`DeviceConfig::default`] reproduces the register values the sensor node
//! ships with:
//!
//! | Register      | Value  |
//! |---------------|--------|
//! | `CTRL1_XL`    | `0x50` |
//! | `CTRL2_G`     | `0x38` |
//! | `WAKE_UP_DUR` | `0x68` |
//! | `WAKE_UP_THS` | `0x02` |
//! | `TAP_CFG0`    | `0x20` |
//! | `TAP_CFG2`    | `0xE0` |
//! | `MD1_CFG`     | `0x80` |
//! | `MD2_CFG`     | `0x00` |
//! | `INT1_CTRL`   | `0x00` |

use crate::interrupt::InterruptRouting;
use crate::power::InactivityConfig;
use crate::sensors::{AccelConfig, GyroConfig};

/// Everything written to the sensor during configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// Accelerometer rate and range
    pub accel: AccelConfig,
    /// Gyroscope rate and range
    pub gyro: GyroConfig,
    /// Wake-up and inactivity behavior
    pub inactivity: InactivityConfig,
    /// Interrupt pin routing
    pub routing: InterruptRouting,
}

impl DeviceConfig {
    /// Check that every field fits its register
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.inactivity.is_valid()
    }
}

/// Sensor node configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeConfig {
    /// Sensor configuration
    pub device: DeviceConfig,
    /// Seconds to wait after sending telemetry before listening again
    pub standby_seconds: u32,
}

impl NodeConfig {
    /// Default standby period
    pub const DEFAULT_STANDBY_SECONDS: u32 = 3;
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            device: DeviceConfig::default(),
            standby_seconds: Self::DEFAULT_STANDBY_SECONDS,
        }
    }
}
