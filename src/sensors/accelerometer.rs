//! Accelerometer sensor types and configuration
//!
//! Provides types, enums, and utility functions for the LSM6DSOX's 3-axis accelerometer.

use super::{scale_axis, RawTriple};

/// Accelerometer full-scale range
///
/// The discriminant is the `FS_XL` field code in `CTRL1_XL`. The codes are
/// not in range order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    /// ±2g range (most sensitive, least range)
    G2 = 0b00,
    /// ±16g range (least sensitive, most range)
    G16 = 0b01,
    /// ±4g range
    G4 = 0b10,
    /// ±8g range
    G8 = 0b11,
}

impl AccelFullScale {
    /// Get the scale factor in mg/LSB
    ///
    /// Physical value in g is `raw * scale / 1000`.
    #[must_use]
    pub const fn scale_mg_per_lsb(self) -> f32 {
        match self {
            Self::G2 => 0.061,
            Self::G4 => 0.122,
            Self::G8 => 0.244,
            Self::G16 => 0.488,
        }
    }
}

/// Accelerometer output data rate
///
/// The discriminant is the `ODR_XL` field code in `CTRL1_XL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelOdr {
    /// Accelerometer off
    PowerDown = 0b0000,
    /// 1.6 Hz (low-power mode only)
    Hz1_6 = 0b1011,
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

impl AccelOdr {
    /// Nominal output data rate in Hz (0 when powered down)
    #[must_use]
    pub const fn hz(self) -> f32 {
        match self {
            Self::PowerDown => 0.0,
            Self::Hz1_6 => 1.6,
            Self::Hz12_5 => 12.5,
            Self::Hz26 => 26.0,
            Self::Hz52 => 52.0,
            Self::Hz104 => 104.0,
            Self::Hz208 => 208.0,
            Self::Hz416 => 416.0,
            Self::Hz833 => 833.0,
            Self::Hz1660 => 1660.0,
            Self::Hz3330 => 3330.0,
            Self::Hz6660 => 6660.0,
        }
    }
}

/// Accelerometer configuration (`CTRL1_XL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// Output data rate
    pub odr: AccelOdr,
    /// Full-scale range
    pub full_scale: AccelFullScale,
    /// Route output through the second low-pass filter stage
    pub lpf2_enable: bool,
}

impl Default for AccelConfig {
    /// 208 Hz, ±2g (`CTRL1_XL = 0x50`)
    fn default() -> Self {
        Self {
            odr: AccelOdr::Hz208,
            full_scale: AccelFullScale::G2,
            lpf2_enable: false,
        }
    }
}

impl AccelConfig {
    /// Raw `CTRL1_XL` value for this configuration
    #[must_use]
    pub const fn to_bits(&self) -> u8 {
        ((self.odr as u8) << 4) | ((self.full_scale as u8) << 2) | ((self.lpf2_enable as u8) << 1)
    }
}

/// Accelerometer data in physical units (g-force)
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataG {
    /// X-axis acceleration in g
    pub x: f32,
    /// Y-axis acceleration in g
    pub y: f32,
    /// Z-axis acceleration in g
    pub z: f32,
}

impl AccelDataG {
    /// Create from a raw triple
    ///
    /// # Arguments
    ///
    /// * `raw` - Raw axis values
    /// * `scale` - Scale in mg/LSB (from `AccelFullScale::scale_mg_per_lsb()`)
    #[must_use]
    pub fn from_raw(raw: &RawTriple, scale: f32) -> Self {
        let [x, y, z] = raw.values();
        Self {
            x: scale_axis(x, scale),
            y: scale_axis(y, scale),
            z: scale_axis(z, scale),
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}
