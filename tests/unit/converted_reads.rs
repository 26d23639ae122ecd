//! Unit tests for the composed read-and-convert paths
//!
//! The pure conversions are covered exhaustively next to their code; these
//! tests exercise the composition of a bus transaction with a conversion,
//! end to end through the mock transport.

use crate::common::{create_mock_driver, test_utils::assert_float_eq};

#[test]
fn test_temp_centi_celsius_at_offset() {
    let (mut driver, transport) = create_mock_driver();

    // Raw 0 reports exactly the 36.53 °C datasheet offset
    transport.set_temperature_data(0);
    assert_eq!(driver.read_temp_centi_celsius().unwrap(), 3653);
}

#[test]
fn test_temp_centi_celsius_known_points() {
    let (mut driver, transport) = create_mock_driver();

    transport.set_temperature_data(340);
    assert_eq!(driver.read_temp_centi_celsius().unwrap(), 3753);

    transport.set_temperature_data(-26020);
    assert_eq!(driver.read_temp_centi_celsius().unwrap(), -4000);
}

#[test]
fn test_gyro_cdps_unit_rate() {
    let (mut driver, transport) = create_mock_driver();

    // 131 LSB is 1.00 °/s; symmetric on the negative side
    transport.set_gyro_data(131, -131, 19);

    let gyro = driver.read_gyro_cdps().unwrap();
    assert_eq!(gyro.x, 100);
    assert_eq!(gyro.y, -100);
    assert_eq!(gyro.z, 15);
}

#[test]
fn test_accel_g_full_scale() {
    let (mut driver, transport) = create_mock_driver();

    transport.set_accel_data(16384, -16384, 8192);

    let accel = driver.read_accel_g().unwrap();
    assert_eq!(accel.x, 1.0);
    assert_eq!(accel.y, -1.0);
    assert_float_eq(accel.z, 0.5, 1e-6);
}

#[test]
fn test_converted_reads_track_changing_data() {
    let (mut driver, transport) = create_mock_driver();

    transport.set_temperature_data(1000);
    let first = driver.read_temp_centi_celsius().unwrap();

    transport.set_temperature_data(2000);
    let second = driver.read_temp_centi_celsius().unwrap();

    assert!(second > first, "warmer raw sample must read warmer: {first} -> {second}");
}
