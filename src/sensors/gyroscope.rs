//! Gyroscope sensor types and configuration
//!
//! Provides types, enums, and utility functions for the LSM6DSOX's 3-axis gyroscope.

use super::{scale_axis, RawTriple};

/// Gyroscope full-scale range
///
/// The discriminant is the low nibble of `CTRL2_G`: `FS_G` in bits 3:2 and
/// `FS_125` in bit 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroFullScale {
    /// ±125°/s range
    Dps125 = 0b0010,
    /// ±250°/s range
    Dps250 = 0b0000,
    /// ±500°/s range
    Dps500 = 0b0100,
    /// ±1000°/s range
    Dps1000 = 0b1000,
    /// ±2000°/s range
    Dps2000 = 0b1100,
}

impl GyroFullScale {
    /// Get the scale factor in mdps/LSB
    ///
    /// Physical value in °/s is `raw * scale / 1000`.
    #[must_use]
    pub const fn scale_mdps_per_lsb(self) -> f32 {
        match self {
            Self::Dps125 => 4.375,
            Self::Dps250 => 8.75,
            Self::Dps500 => 17.5,
            Self::Dps1000 => 35.0,
            Self::Dps2000 => 70.0,
        }
    }
}

/// Gyroscope output data rate
///
/// The discriminant is the `ODR_G` field code in `CTRL2_G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroOdr {
    /// Gyroscope off
    PowerDown = 0b0000,
    /// 12.5 Hz
    Hz12_5 = 0b0001,
    /// 26 Hz
    Hz26 = 0b0010,
    /// 52 Hz
    Hz52 = 0b0011,
    /// 104 Hz
    Hz104 = 0b0100,
    /// 208 Hz
    Hz208 = 0b0101,
    /// 416 Hz
    Hz416 = 0b0110,
    /// 833 Hz
    Hz833 = 0b0111,
    /// 1.66 kHz
    Hz1660 = 0b1000,
    /// 3.33 kHz
    Hz3330 = 0b1001,
    /// 6.66 kHz
    Hz6660 = 0b1010,
}

/// Gyroscope configuration (`CTRL2_G`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Output data rate
    pub odr: GyroOdr,
    /// Full-scale range
    pub full_scale: GyroFullScale,
}

impl Default for GyroConfig {
    /// 52 Hz, ±1000°/s (`CTRL2_G = 0x38`)
    fn default() -> Self {
        Self {
            odr: GyroOdr::Hz52,
            full_scale: GyroFullScale::Dps1000,
        }
    }
}

impl GyroConfig {
    /// Raw `CTRL2_G` value for this configuration
    #[must_use]
    pub const fn to_bits(&self) -> u8 {
        ((self.odr as u8) << 4) | (self.full_scale as u8)
    }
}

/// Gyroscope data in degrees per second
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataDps {
    /// X-axis rotation rate in °/s
    pub x: f32,
    /// Y-axis rotation rate in °/s
    pub y: f32,
    /// Z-axis rotation rate in °/s
    pub z: f32,
}

impl GyroDataDps {
    /// Create from a raw triple
    ///
    /// # Arguments
    ///
    /// * `raw` - Raw axis values
    /// * `scale` - Scale in mdps/LSB (from `GyroFullScale::scale_mdps_per_lsb()`)
    #[must_use]
    pub fn from_raw(raw: &RawTriple, scale: f32) -> Self {
        let [x, y, z] = raw.values();
        Self {
            x: scale_axis(x, scale),
            y: scale_axis(y, scale),
            z: scale_axis(z, scale),
        }
    }

    /// Get the magnitude of the rotation vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
