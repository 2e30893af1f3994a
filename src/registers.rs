//! Register definitions for the LSM6DSOX
//!
//! The sensor is driven with 16-bit SPI words. The register number occupies
//! the upper byte of the word and the data byte the lower one, so every
//! address below is the datasheet register number shifted left by 8
//! (`CTRL1_XL` 0x10 becomes `0x1000`). Bit 15 ([`crate::READ_BIT`]) turns the
//! word into a read request.
//!
//! Configuration registers are described with the `device-driver` DSL so the
//! driver can write them field by field. Status and output registers are read
//! as raw bytes through [`addr`], since the data-ready and activity checks work
//! on the raw value.

device_driver::create_device!(
    device_name: Lsm6dsox,
    dsl: {
        config {
            type RegisterAddressType = u16;
            type DefaultByteOrder = LE;
        }

        /// WHO_AM_I - Device ID Register (0x0F)
        /// Expected value: 0x6C
        register WhoAmI {
            const ADDRESS = 0x0F00;
            const SIZE_BITS = 8;

            /// Device ID (should read 0x6C)
            who_am_i: uint = 0..8,
        },

        /// INT1_CTRL - INT1 pin control (0x0D)
        register IntOneCtrl {
            const ADDRESS = 0x0D00;
            const SIZE_BITS = 8;

            /// Accelerometer data-ready on INT1
            drdy_xl: bool = 0,
            /// Gyroscope data-ready on INT1
            drdy_g: bool = 1,
            /// Boot status on INT1
            boot: bool = 2,
            /// FIFO threshold on INT1
            fifo_th: bool = 3,
            /// FIFO overrun on INT1
            fifo_ovr: bool = 4,
            /// FIFO full on INT1
            fifo_full: bool = 5,
            /// Batch counter on INT1
            cnt_bdr: bool = 6,
            /// Route DEN_DRDY flag to INT1
            den_drdy_flag: bool = 7,
        },

        /// CTRL1_XL - Accelerometer control (0x10)
        register CtrlXl {
            const ADDRESS = 0x1000;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// Second low-pass filter path enable
            lpf_xl_en: bool = 1,
            /// Full-scale selection
            fs_xl: uint = 2..4,
            /// Output data rate selection
            odr_xl: uint = 4..8,
        },

        /// CTRL2_G - Gyroscope control (0x11)
        register CtrlG {
            const ADDRESS = 0x1100;
            const SIZE_BITS = 8;

            /// Full-scale selection, including the ±125 dps bit (bit 1)
            fs_g: uint = 0..4,
            /// Output data rate selection
            odr_g: uint = 4..8,
        },

        /// TAP_CFG0 - Activity/inactivity functions, filtering, tap recognition (0x56)
        register TapCfgZero {
            const ADDRESS = 0x5600;
            const SIZE_BITS = 8;

            /// Latched interrupt
            lir: bool = 0,
            /// Tap recognition on Z
            tap_z_en: bool = 1,
            /// Tap recognition on Y
            tap_y_en: bool = 2,
            /// Tap recognition on X
            tap_x_en: bool = 3,
            /// Slope filter (false) or high-pass filter (true) for wake-up
            slope_fds: bool = 4,
            /// Drive the sleep status on the interrupt pin as a level
            sleep_status_on_int: bool = 5,
            /// Clear interrupt on status read
            int_clr_on_read: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// TAP_CFG2 - Interrupt enable and inactivity mode (0x58)
        register TapCfgTwo {
            const ADDRESS = 0x5800;
            const SIZE_BITS = 8;

            /// Y-axis tap threshold
            tap_ths_y: uint = 0..5,
            /// Inactivity function mode
            inact_en: uint = 5..7,
            /// Enable basic interrupts
            interrupts_enable: bool = 7,
        },

        /// WAKE_UP_THS - Wake-up threshold (0x5B)
        register WakeUpThs {
            const ADDRESS = 0x5B00;
            const SIZE_BITS = 8;

            /// Wake-up threshold, weight set by `WAKE_UP_DUR.wake_ths_w`
            wk_ths: uint = 0..6,
            /// Apply user offset to the wake-up function
            usr_off_on_wu: bool = 6,
            /// Enable double-tap recognition
            single_double_tap: bool = 7,
        },

        /// WAKE_UP_DUR - Free-fall, wake-up and sleep mode duration (0x5C)
        register WakeUpDur {
            const ADDRESS = 0x5C00;
            const SIZE_BITS = 8;

            /// Duration before entering inactivity, 1 LSB = 512 / ODR_XL
            sleep_dur: uint = 0..4,
            /// Threshold weight (false: FS_XL / 64, true: FS_XL / 256)
            wake_ths_w: bool = 4,
            /// Wake-up duration, 1 LSB = 1 / ODR_XL
            wake_dur: uint = 5..7,
            /// Free-fall duration MSB
            ff_dur_msb: bool = 7,
        },

        /// MD1_CFG - Function routing on INT1 (0x5E)
        register MdOneCfg {
            const ADDRESS = 0x5E00;
            const SIZE_BITS = 8;

            /// Sensor hub communication concluded
            shub: bool = 0,
            /// Embedded functions event
            emb_func: bool = 1,
            /// 6D orientation change
            six_d: bool = 2,
            /// Double tap
            double_tap: bool = 3,
            /// Free-fall
            free_fall: bool = 4,
            /// Wake-up event
            wake_up: bool = 5,
            /// Single tap
            single_tap: bool = 6,
            /// Activity/inactivity change
            sleep_change: bool = 7,
        },

        /// MD2_CFG - Function routing on INT2 (0x5F)
        register MdTwoCfg {
            const ADDRESS = 0x5F00;
            const SIZE_BITS = 8;

            /// Timestamp overflow alert
            timestamp: bool = 0,
            /// Embedded functions event
            emb_func: bool = 1,
            /// 6D orientation change
            six_d: bool = 2,
            /// Double tap
            double_tap: bool = 3,
            /// Free-fall
            free_fall: bool = 4,
            /// Wake-up event
            wake_up: bool = 5,
            /// Single tap
            single_tap: bool = 6,
            /// Activity/inactivity change
            sleep_change: bool = 7,
        },
    }
);

/// Raw register addresses (register number in the upper byte)
pub mod addr {
    /// Embedded functions configuration access
    pub const FUNC_CFG_ACCESS: u16 = 0x0100;
    /// SDO/OCS pull-up control
    pub const PIN_CTRL: u16 = 0x0200;
    /// INT1 pin control
    pub const INT1_CTRL: u16 = 0x0D00;
    /// INT2 pin control
    pub const INT2_CTRL: u16 = 0x0E00;
    /// Chip ID
    pub const WHO_AM_I: u16 = 0x0F00;
    /// Accelerometer control
    pub const CTRL1_XL: u16 = 0x1000;
    /// Gyroscope control
    pub const CTRL2_G: u16 = 0x1100;
    /// Main configuration
    pub const CTRL3_C: u16 = 0x1200;
    /// Interrupt source summary
    pub const ALL_INT_SRC: u16 = 0x1A00;
    /// Wake-up and activity source
    pub const WAKE_UP_SRC: u16 = 0x1B00;
    /// Tap source
    pub const TAP_SRC: u16 = 0x1C00;
    /// Data-ready status
    pub const STATUS_REG: u16 = 0x1E00;
    /// Temperature output, low byte
    pub const OUT_TEMP_L: u16 = 0x2000;
    /// Temperature output, high byte
    pub const OUT_TEMP_H: u16 = 0x2100;
    /// Gyroscope pitch axis, low byte
    pub const OUTX_L_G: u16 = 0x2200;
    /// Gyroscope pitch axis, high byte
    pub const OUTX_H_G: u16 = 0x2300;
    /// Gyroscope roll axis, low byte
    pub const OUTY_L_G: u16 = 0x2400;
    /// Gyroscope roll axis, high byte
    pub const OUTY_H_G: u16 = 0x2500;
    /// Gyroscope yaw axis, low byte
    pub const OUTZ_L_G: u16 = 0x2600;
    /// Gyroscope yaw axis, high byte
    pub const OUTZ_H_G: u16 = 0x2700;
    /// Accelerometer X axis, low byte
    pub const OUTX_L_A: u16 = 0x2800;
    /// Accelerometer X axis, high byte
    pub const OUTX_H_A: u16 = 0x2900;
    /// Accelerometer Y axis, low byte
    pub const OUTY_L_A: u16 = 0x2A00;
    /// Accelerometer Y axis, high byte
    pub const OUTY_H_A: u16 = 0x2B00;
    /// Accelerometer Z axis, low byte
    pub const OUTZ_L_A: u16 = 0x2C00;
    /// Accelerometer Z axis, high byte
    pub const OUTZ_H_A: u16 = 0x2D00;
    /// Activity/inactivity functions, filtering, tap recognition
    pub const TAP_CFG0: u16 = 0x5600;
    /// Tap X threshold and axis priority
    pub const TAP_CFG1: u16 = 0x5700;
    /// Interrupt enable and inactivity mode
    pub const TAP_CFG2: u16 = 0x5800;
    /// Wake-up threshold
    pub const WAKE_UP_THS: u16 = 0x5B00;
    /// Wake-up and sleep duration
    pub const WAKE_UP_DUR: u16 = 0x5C00;
    /// Function routing on INT1
    pub const MD1_CFG: u16 = 0x5E00;
    /// Function routing on INT2
    pub const MD2_CFG: u16 = 0x5F00;
}

/// The six output registers of one 3-axis sub-device, in read order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisBlock {
    /// `(low, high)` register pair per axis, X then Y then Z
    pub pairs: [(u16, u16); 3],
}

impl AxisBlock {
    /// Accelerometer output registers
    pub const ACCEL: Self = Self {
        pairs: [
            (addr::OUTX_L_A, addr::OUTX_H_A),
            (addr::OUTY_L_A, addr::OUTY_H_A),
            (addr::OUTZ_L_A, addr::OUTZ_H_A),
        ],
    };

    /// Gyroscope output registers
    pub const GYRO: Self = Self {
        pairs: [
            (addr::OUTX_L_G, addr::OUTX_H_G),
            (addr::OUTY_L_G, addr::OUTY_H_G),
            (addr::OUTZ_L_G, addr::OUTZ_H_G),
        ],
    };
}
