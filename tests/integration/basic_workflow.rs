//! Integration test for the documented bring-up sequence

use crate::common::{create_mock_driver, Operation};
use mpu6050::WHO_AM_I_VALUE;

#[test]
fn test_full_bring_up_and_sample() {
    let (mut driver, transport) = create_mock_driver();

    // Identity check is the caller's comparison
    let who = driver.who_am_i().unwrap();
    assert_eq!(who, WHO_AM_I_VALUE);

    // Wake from power-on sleep, select the supported ranges
    driver.wake().unwrap();
    driver.set_accel_range_2g().unwrap();
    driver.set_gyro_range_250dps().unwrap();

    assert_eq!(transport.get_register(0x6B), 0x00);
    assert_eq!(transport.get_register(0x1C), 0x00);
    assert_eq!(transport.get_register(0x1B), 0x00);

    // Device at rest, 1g on Z, slightly warm room
    transport.set_accel_data(12, -34, 16384);
    transport.set_gyro_data(0, 131, -262);
    transport.set_temperature_data(340);

    let accel = driver.read_accel_g().unwrap();
    assert!((accel.z - 1.0).abs() < 1e-6);
    assert!((accel.magnitude() - 1.0).abs() < 0.01);

    let gyro = driver.read_gyro_cdps().unwrap();
    assert_eq!((gyro.x, gyro.y, gyro.z), (0, 100, -200));

    assert_eq!(driver.read_temp_centi_celsius().unwrap(), 3753);
}

#[test]
fn test_bring_up_transaction_sequence() {
    let (mut driver, transport) = create_mock_driver();

    driver.who_am_i().unwrap();
    driver.wake().unwrap();
    driver.set_accel_range_2g().unwrap();
    driver.set_gyro_range_250dps().unwrap();
    driver.read_accel_raw().unwrap();

    let ops = transport.operations();
    assert_eq!(ops.len(), 5);
    assert!(matches!(ops[0], Operation::Read { start: 0x75, len: 1, .. }));
    assert!(matches!(ops[1], Operation::Write { start: 0x6B, .. }));
    assert!(matches!(ops[2], Operation::Write { start: 0x1C, .. }));
    assert!(matches!(ops[3], Operation::Write { start: 0x1B, .. }));
    assert!(matches!(ops[4], Operation::Read { start: 0x3B, len: 6, .. }));
}

#[test]
fn test_foreign_part_detected_by_caller() {
    let (mut driver, transport) = create_mock_driver();

    // Some other device answers on 0x68; bring-up stops at the caller's
    // comparison, with no error from the driver itself
    transport.set_who_am_i(0xEA);

    let who = driver.who_am_i().unwrap();
    assert_ne!(who, WHO_AM_I_VALUE);
}
