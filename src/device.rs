//! High-level driver API for the LSM6DSOX
//!
//! This module wraps the register map with the operations the sensor node
//! needs: identity check, one-shot configuration, data-ready and activity
//! checks, and axis reads. Every register access is exactly one bus
//! transaction. Nothing is retried or batched; errors propagate to the
//! caller.

use crate::config::DeviceConfig;
use crate::interrupt::{self, DataReadyStatus, WakeUpSource};
use crate::registers::{addr, AxisBlock, Lsm6dsox as RegisterDevice};
use crate::sensors::{AccelDataG, GyroDataDps, RawTriple};
use crate::{ActivityState, Error, WHO_AM_I_VALUE};
use device_driver::RegisterInterface;

/// Main driver for the LSM6DSOX
pub struct Lsm6dsoxDriver<I> {
    device: RegisterDevice<I>,
    config: DeviceConfig,
}

impl<I> Lsm6dsoxDriver<I>
where
    I: RegisterInterface<AddressType = u16>,
{
    /// Create a new LSM6DSOX driver instance
    ///
    /// No bus traffic happens here. Call [`Self::verify_device`] and
    /// [`Self::configure`] before sampling. Until `configure` runs, scale
    /// factors follow [`DeviceConfig::default`], which is also the sensor's
    /// configuration after the node has set it up.
    pub fn new(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
            config: DeviceConfig::default(),
        }
    }

    /// Read one register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_register(&mut self, address: u16) -> Result<u8, Error<I::Error>> {
        let mut buffer = [0u8; 1];
        self.device
            .interface
            .read_register(address, 8, &mut buffer)?;
        Ok(buffer[0])
    }

    /// Write one register
    ///
    /// Returns the transmitted word, `address | data`.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_register(&mut self, address: u16, data: u8) -> Result<u16, Error<I::Error>> {
        self.device.interface.write_register(address, 8, &[data])?;
        Ok(address | u16::from(data))
    }

    /// Read the `WHO_AM_I` register
    ///
    /// Should return 0x6C for a valid LSM6DSOX
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Check that an LSM6DSOX answers on the bus
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value
    pub fn verify_device(&mut self) -> Result<(), Error<I::Error>> {
        let who_am_i = self.read_who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::error!("Unexpected WHO_AM_I {=u8:#x}", who_am_i);
            return Err(Error::InvalidDevice(who_am_i));
        }
        Ok(())
    }

    /// Apply a complete device configuration
    ///
    /// Writes `CTRL1_XL`, `CTRL2_G`, `WAKE_UP_DUR`, `WAKE_UP_THS`,
    /// `TAP_CFG0`, `TAP_CFG2`, `MD1_CFG`, `MD2_CFG` and `INT1_CTRL` in that
    /// order, one write each. The configuration is recorded only after every
    /// write succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails. Registers
    /// written before the failure keep their new values.
    pub fn configure(&mut self, config: &DeviceConfig) -> Result<(), Error<I::Error>> {
        let accel = config.accel;
        self.device.ctrl_xl().write(|w| {
            w.set_odr_xl(accel.odr as u8);
            w.set_fs_xl(accel.full_scale as u8);
            w.set_lpf_xl_en(accel.lpf2_enable);
        })?;

        let gyro = config.gyro;
        self.device.ctrl_g().write(|w| {
            w.set_odr_g(gyro.odr as u8);
            w.set_fs_g(gyro.full_scale as u8);
        })?;

        // Out-of-range fields are truncated to their register width
        let inactivity = config.inactivity;
        self.device.wake_up_dur().write(|w| {
            w.set_sleep_dur(inactivity.sleep_duration & 0x0F);
            w.set_wake_ths_w(inactivity.fine_threshold);
            w.set_wake_dur(inactivity.wake_duration & 0x03);
        })?;
        self.device.wake_up_ths().write(|w| {
            w.set_wk_ths(inactivity.wake_threshold & 0x3F);
        })?;
        self.device.tap_cfg_zero().write(|w| {
            w.set_sleep_status_on_int(inactivity.sleep_status_on_int);
            w.set_slope_fds(inactivity.high_pass_filter);
        })?;
        self.device.tap_cfg_two().write(|w| {
            w.set_interrupts_enable(true);
            w.set_inact_en(inactivity.mode as u8);
        })?;

        let routing = config.routing;
        self.device.md_one_cfg().write(|w| {
            w.set_sleep_change(routing.int1_sleep_change);
            w.set_wake_up(routing.int1_wake_up);
            w.set_free_fall(routing.int1_free_fall);
        })?;
        self.device.md_two_cfg().write(|w| {
            w.set_sleep_change(routing.int2_sleep_change);
            w.set_wake_up(routing.int2_wake_up);
        })?;
        self.device.int_one_ctrl().write(|w| {
            w.set_drdy_xl(routing.int1_drdy_accel);
            w.set_drdy_g(routing.int1_drdy_gyro);
        })?;

        self.config = *config;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Configured: CTRL1_XL={=u8:#x} CTRL2_G={=u8:#x}",
            accel.to_bits(),
            gyro.to_bits()
        );

        Ok(())
    }

    /// Configuration the scale factors currently follow
    pub const fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Accelerometer scale in mg/LSB
    #[must_use]
    pub const fn accel_scale(&self) -> f32 {
        self.config.accel.full_scale.scale_mg_per_lsb()
    }

    /// Gyroscope scale in mdps/LSB
    #[must_use]
    pub const fn gyro_scale(&self) -> f32 {
        self.config.gyro.full_scale.scale_mdps_per_lsb()
    }

    /// Read the three axes of one sub-device
    ///
    /// Six single-register reads, low byte then high byte per axis, X then Y
    /// then Z.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_axis_triple(&mut self, block: AxisBlock) -> Result<RawTriple, Error<I::Error>> {
        let mut pairs = [(0u8, 0u8); 3];
        for (pair, (low, high)) in pairs.iter_mut().zip(block.pairs) {
            let low = self.read_register(low)?;
            let high = self.read_register(high)?;
            *pair = (low, high);
        }
        Ok(RawTriple::from_low_high(pairs))
    }

    /// Read raw accelerometer words
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_raw(&mut self) -> Result<RawTriple, Error<I::Error>> {
        self.read_axis_triple(AxisBlock::ACCEL)
    }

    /// Read raw gyroscope words
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_raw(&mut self) -> Result<RawTriple, Error<I::Error>> {
        self.read_axis_triple(AxisBlock::GYRO)
    }

    /// Read acceleration in g using the configured full scale
    ///
    /// Does not check data-ready; see [`Self::read_accelerometer_if_ready`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accelerometer(&mut self) -> Result<AccelDataG, Error<I::Error>> {
        let raw = self.read_accel_raw()?;
        Ok(AccelDataG::from_raw(&raw, self.accel_scale()))
    }

    /// Read angular rate in °/s using the configured full scale
    ///
    /// Does not check data-ready; see [`Self::read_gyroscope_if_ready`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyroscope(&mut self) -> Result<GyroDataDps, Error<I::Error>> {
        let raw = self.read_gyro_raw()?;
        Ok(GyroDataDps::from_raw(&raw, self.gyro_scale()))
    }

    /// Read acceleration if a new sample is available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accelerometer_if_ready(&mut self) -> Result<Option<AccelDataG>, Error<I::Error>> {
        if self.is_data_ready(interrupt::XL_DATA_READY)? {
            self.read_accelerometer().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Read angular rate if a new sample is available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyroscope_if_ready(&mut self) -> Result<Option<GyroDataDps>, Error<I::Error>> {
        if self.is_data_ready(interrupt::G_DATA_READY)? {
            self.read_gyroscope().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Read and decode `STATUS_REG`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn data_ready_status(&mut self) -> Result<DataReadyStatus, Error<I::Error>> {
        let status = self.read_register(addr::STATUS_REG)?;
        Ok(DataReadyStatus::from_bits(status))
    }

    /// Check `STATUS_REG` against a data-ready mask
    ///
    /// True only if every bit of `mask` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn is_data_ready(&mut self, mask: u8) -> Result<bool, Error<I::Error>> {
        let status = self.read_register(addr::STATUS_REG)?;
        Ok(interrupt::is_data_ready(status, mask))
    }

    /// Read the activity state from `WAKE_UP_SRC`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn activity_state(&mut self) -> Result<ActivityState, Error<I::Error>> {
        let src = self.read_register(addr::WAKE_UP_SRC)?;
        Ok(ActivityState::from_wake_up_src(src))
    }

    /// Read and decode `WAKE_UP_SRC`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn wake_up_source(&mut self) -> Result<WakeUpSource, Error<I::Error>> {
        let src = self.read_register(addr::WAKE_UP_SRC)?;
        Ok(WakeUpSource::from_bits(src))
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }
}
