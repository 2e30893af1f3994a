//! Unit tests for single-register access and device configuration

use crate::common::{create_mock_driver, Operation};
use lsm6dsox_node::registers::addr;
use lsm6dsox_node::sensors::{AccelOdr, GyroOdr};
use lsm6dsox_node::{
    AccelConfig, AccelFullScale, DeviceConfig, Error, GyroConfig, GyroFullScale,
    InactivityConfig, InactivityMode, InterruptRouting,
};

#[test]
fn test_read_register_is_one_transaction() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(addr::WAKE_UP_SRC, 0x18);

    let value = driver.read_register(addr::WAKE_UP_SRC).unwrap();

    assert_eq!(value, 0x18);
    assert_eq!(
        interface.operations(),
        vec![Operation::ReadRegister {
            address: addr::WAKE_UP_SRC,
            value: 0x18,
        }]
    );
}

#[test]
fn test_write_register_returns_transmitted_word() {
    let (mut driver, interface) = create_mock_driver();

    let word = driver.write_register(addr::CTRL1_XL, 0x50).unwrap();

    assert_eq!(word, 0x1050);
    assert_eq!(interface.written(), vec![(addr::CTRL1_XL, 0x50)]);
    assert!(interface.verify_register(addr::CTRL1_XL, 0x50));
}

#[test]
fn test_who_am_i() {
    let (mut driver, _interface) = create_mock_driver();
    assert_eq!(driver.read_who_am_i().unwrap(), 0x6C);
    assert!(driver.verify_device().is_ok());
}

#[test]
fn test_invalid_who_am_i() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_who_am_i(0x6A);

    match driver.verify_device() {
        Err(Error::InvalidDevice(value)) => assert_eq!(value, 0x6A),
        other => panic!("expected InvalidDevice, got {other:?}"),
    }
}

#[test]
fn test_default_configuration_write_order() {
    let (mut driver, interface) = create_mock_driver();

    driver.configure(&DeviceConfig::default()).unwrap();

    assert_eq!(
        interface.written(),
        vec![
            (addr::CTRL1_XL, 0x50),
            (addr::CTRL2_G, 0x38),
            (addr::WAKE_UP_DUR, 0x68),
            (addr::WAKE_UP_THS, 0x02),
            (addr::TAP_CFG0, 0x20),
            (addr::TAP_CFG2, 0xE0),
            (addr::MD1_CFG, 0x80),
            (addr::MD2_CFG, 0x00),
            (addr::INT1_CTRL, 0x00),
        ]
    );
    // Configuration is write-only
    assert!(interface.read_addresses().is_empty());
}

#[test]
fn test_custom_configuration_values() {
    let (mut driver, interface) = create_mock_driver();

    let config = DeviceConfig {
        accel: AccelConfig {
            odr: AccelOdr::Hz104,
            full_scale: AccelFullScale::G8,
            lpf2_enable: true,
        },
        gyro: GyroConfig {
            odr: GyroOdr::Hz208,
            full_scale: GyroFullScale::Dps125,
        },
        inactivity: InactivityConfig {
            sleep_duration: 2,
            wake_duration: 1,
            wake_threshold: 10,
            fine_threshold: true,
            mode: InactivityMode::GyroSleep,
            sleep_status_on_int: false,
            high_pass_filter: true,
        },
        routing: InterruptRouting {
            int1_sleep_change: false,
            int1_wake_up: true,
            int1_free_fall: false,
            int2_sleep_change: true,
            int2_wake_up: false,
            int1_drdy_accel: false,
            int1_drdy_gyro: true,
        },
    };
    driver.configure(&config).unwrap();

    assert_eq!(
        interface.written(),
        vec![
            (addr::CTRL1_XL, 0x4E),
            (addr::CTRL2_G, 0x52),
            (addr::WAKE_UP_DUR, 0x32),
            (addr::WAKE_UP_THS, 0x0A),
            (addr::TAP_CFG0, 0x10),
            (addr::TAP_CFG2, 0xC0),
            (addr::MD1_CFG, 0x20),
            (addr::MD2_CFG, 0x80),
            (addr::INT1_CTRL, 0x02),
        ]
    );
    assert_eq!(driver.config(), &config);
}

#[test]
fn test_configure_encodings_match_bit_helpers() {
    let (mut driver, interface) = create_mock_driver();
    let config = DeviceConfig {
        accel: AccelConfig {
            odr: AccelOdr::Hz833,
            full_scale: AccelFullScale::G16,
            lpf2_enable: false,
        },
        ..Default::default()
    };

    driver.configure(&config).unwrap();

    assert!(interface.verify_register(addr::CTRL1_XL, config.accel.to_bits()));
    assert!(interface.verify_register(addr::CTRL2_G, config.gyro.to_bits()));
    assert!(interface.verify_register(
        addr::WAKE_UP_DUR,
        config.inactivity.wake_up_dur_bits()
    ));
    assert!(interface.verify_register(addr::TAP_CFG2, config.inactivity.tap_cfg2_bits()));
    assert!(interface.verify_register(addr::MD1_CFG, config.routing.md1_bits()));
}

#[test]
fn test_release_returns_interface() {
    let (mut driver, _interface) = create_mock_driver();
    driver.write_register(addr::CTRL3_C, 0x44).unwrap();

    let interface = driver.release();
    assert_eq!(interface.get_register(addr::CTRL3_C), 0x44);
}

#[test]
fn test_read_register_is_idempotent() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_wake_up_src(0x18);
    interface.set_status(0x03);

    for _ in 0..3 {
        assert_eq!(driver.read_register(addr::WAKE_UP_SRC).unwrap(), 0x18);
        assert_eq!(driver.read_register(addr::STATUS_REG).unwrap(), 0x03);
    }

    let operations = interface.operations();
    assert_eq!(operations.len(), 6);
    assert!(operations
        .iter()
        .all(|op| matches!(op, Operation::ReadRegister { .. })));
    assert!(interface.written().is_empty());
    assert_eq!(interface.get_register(addr::WAKE_UP_SRC), 0x18);
    assert_eq!(interface.get_register(addr::STATUS_REG), 0x03);
}
