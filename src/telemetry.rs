//! Housekeeping telemetry: battery voltage and die temperature
//!
//! The MCU's battery monitor reports the supply voltage as a 3.8 fixed-point
//! value in volts (3 integer bits, 8 fractional bits) and the temperature in
//! whole degrees Celsius. Both are sent big-endian, 16 bits each.

/// Source of battery and temperature readings
pub trait BatteryMonitor {
    /// Raw battery voltage in 3.8 fixed-point volts
    fn battery_voltage_raw(&mut self) -> u32;

    /// Die temperature in degrees Celsius
    fn temperature_celsius(&mut self) -> i32;
}

/// Convert a 3.8 fixed-point voltage to millivolts
#[must_use]
pub const fn battery_millivolts(raw: u32) -> u32 {
    raw.wrapping_mul(125) >> 5
}

/// One battery/temperature reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryReading {
    /// Battery voltage in millivolts
    pub millivolts: u16,
    /// Temperature in degrees Celsius
    pub temperature_c: i16,
}

impl TelemetryReading {
    /// Size of the telemetry payload
    pub const PAYLOAD_LEN: usize = 4;

    /// Take a reading from the monitor
    pub fn read<B: BatteryMonitor>(monitor: &mut B) -> Self {
        let raw = monitor.battery_voltage_raw();
        let temperature = monitor.temperature_celsius();
        Self::from_raw(raw, temperature)
    }

    /// Build a reading from the monitor's raw values
    ///
    /// Both values are truncated to 16 bits, as they are on the wire.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_raw(voltage_raw: u32, temperature_c: i32) -> Self {
        Self {
            millivolts: battery_millivolts(voltage_raw) as u16,
            temperature_c: temperature_c as i16,
        }
    }

    /// Battery voltage in volts
    #[must_use]
    pub fn volts(&self) -> f32 {
        f32::from(self.millivolts) / 1000.0
    }

    /// Payload bytes: `[mv_hi, mv_lo, temp_hi, temp_lo]`
    #[must_use]
    pub const fn to_payload(&self) -> [u8; Self::PAYLOAD_LEN] {
        let [mv_hi, mv_lo] = self.millivolts.to_be_bytes();
        let [t_hi, t_lo] = self.temperature_c.to_be_bytes();
        [mv_hi, mv_lo, t_hi, t_lo]
    }
}
