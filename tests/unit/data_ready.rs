//! Unit tests for data-ready and activity checks

use crate::common::{create_mock_driver, Operation};
use lsm6dsox_node::interrupt::{G_DATA_READY, TEMP_DATA_READY, XL_DATA_READY};
use lsm6dsox_node::registers::addr;
use lsm6dsox_node::ActivityState;

#[test]
fn test_is_data_ready_reads_status_once() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_status(0x05);

    assert!(driver.is_data_ready(XL_DATA_READY).unwrap());
    assert_eq!(
        interface.operations(),
        vec![Operation::ReadRegister {
            address: addr::STATUS_REG,
            value: 0x05,
        }]
    );

    assert!(!driver.is_data_ready(G_DATA_READY).unwrap());
    assert!(driver.is_data_ready(TEMP_DATA_READY).unwrap());
    assert!(!driver.is_data_ready(XL_DATA_READY | G_DATA_READY).unwrap());
}

#[test]
fn test_data_ready_status() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_status(0x02);

    let status = driver.data_ready_status().unwrap();
    assert!(status.gyro);
    assert!(!status.accel);
    assert!(!status.motion_ready());
}

#[test]
fn test_read_if_ready() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_gyro_data(100, 0, 0);
    interface.set_accel_data(100, 0, 0);

    interface.set_status(0x00);
    assert!(driver.read_gyroscope_if_ready().unwrap().is_none());
    assert!(driver.read_accelerometer_if_ready().unwrap().is_none());
    // Only the status register was touched
    assert_eq!(
        interface.read_addresses(),
        vec![addr::STATUS_REG, addr::STATUS_REG]
    );

    interface.set_status(0x03);
    let gyro = driver.read_gyroscope_if_ready().unwrap();
    assert!(gyro.is_some_and(|g| g.x > 0.0));
    let accel = driver.read_accelerometer_if_ready().unwrap();
    assert!(accel.is_some_and(|a| a.x > 0.0));
}

#[test]
fn test_activity_state_polarity() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_wake_up_src(0x10);
    assert_eq!(driver.activity_state().unwrap(), ActivityState::Inactive);

    interface.set_wake_up_src(0x08);
    assert_eq!(driver.activity_state().unwrap(), ActivityState::Active);

    interface.set_wake_up_src(0x00);
    assert!(driver.activity_state().unwrap().is_active());
}

#[test]
fn test_wake_up_source() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_wake_up_src(0x4A);

    let src = driver.wake_up_source().unwrap();
    assert!(src.sleep_change);
    assert!(src.wake_up);
    assert!(src.y_wake);
    assert!(!src.x_wake);
    assert!(!src.sleep_state);
}

#[test]
fn test_queued_status_values() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_status(0x01);
    interface.queue_status(&[0x00, 0x02]);

    assert!(!driver.is_data_ready(G_DATA_READY).unwrap());
    assert!(driver.is_data_ready(G_DATA_READY).unwrap());
    // Queue exhausted, register value again
    assert!(driver.is_data_ready(XL_DATA_READY).unwrap());
}
