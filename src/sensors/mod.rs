//! Sensor modules for the LSM6DSOX
//!
//! This module provides types, enums, and configuration structures for each sensor
//! in the LSM6DSOX:
//! - Accelerometer (3-axis)
//! - Gyroscope (3-axis)
//!
//! Both sub-devices expose each axis as a low/high register pair holding a
//! 16-bit two's complement word. [`RawTriple`] keeps the three words of one
//! read, and [`scale_axis`] turns a word into physical units.

pub mod accelerometer;
pub mod gyroscope;

// Re-export main types
pub use accelerometer::{AccelConfig, AccelDataG, AccelFullScale, AccelOdr};
pub use gyroscope::{GyroConfig, GyroDataDps, GyroFullScale, GyroOdr};

/// Convert one raw axis word to physical units
///
/// `scale` is in milli-units per LSB, so the result is `raw * scale / 1000`.
#[must_use]
pub fn scale_axis(raw: i16, scale: f32) -> f32 {
    f32::from(raw) * scale / 1000.0
}

/// Raw 16-bit values for X, Y, Z of one sub-device
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawTriple {
    values: [i16; 3],
}

impl RawTriple {
    /// Create from already assembled axis values
    #[must_use]
    pub const fn from_values(values: [i16; 3]) -> Self {
        Self { values }
    }

    /// Assemble from `(low, high)` register bytes per axis
    ///
    /// The high byte is shifted into the upper eight bits and OR-ed with the
    /// low byte; the resulting word is read as two's complement.
    #[must_use]
    pub const fn from_low_high(pairs: [(u8, u8); 3]) -> Self {
        let mut values = [0i16; 3];
        let mut i = 0;
        while i < 3 {
            let (low, high) = pairs[i];
            values[i] = (((high as u16) << 8) | low as u16) as i16;
            i += 1;
        }
        Self { values }
    }

    /// Axis values, X then Y then Z
    #[must_use]
    pub const fn values(&self) -> [i16; 3] {
        self.values
    }

    /// Wire bytes: per axis high byte then low byte, X then Y then Z
    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; 6] {
        let mut out = [0u8; 6];
        for (chunk, value) in out.chunks_exact_mut(2).zip(self.values) {
            chunk.copy_from_slice(&value.to_be_bytes());
        }
        out
    }
}

/// One decoded accelerometer + gyroscope sample
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
    /// Raw accelerometer words
    pub accel_raw: RawTriple,
    /// Raw gyroscope words
    pub gyro_raw: RawTriple,
    /// Acceleration in g
    pub accel: AccelDataG,
    /// Angular rate in °/s
    pub gyro: GyroDataDps,
}

impl MotionSample {
    /// Size of the motion report payload
    pub const PAYLOAD_LEN: usize = 12;

    /// Report payload: 6 accelerometer bytes followed by 6 gyroscope bytes
    #[must_use]
    pub fn to_payload(&self) -> [u8; Self::PAYLOAD_LEN] {
        let mut out = [0u8; Self::PAYLOAD_LEN];
        out[..6].copy_from_slice(&self.accel_raw.to_be_bytes());
        out[6..].copy_from_slice(&self.gyro_raw.to_be_bytes());
        out
    }
}
