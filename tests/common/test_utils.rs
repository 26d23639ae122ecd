//! Test utilities and helper functions

use crate::common::mock_transport::MockTransport;
use mpu6050::Mpu6050Driver;

/// Create a mock driver for testing
///
/// Returns (driver, transport) where the transport handle shares state with
/// the one the driver owns.
pub fn create_mock_driver() -> (Mpu6050Driver<MockTransport>, MockTransport) {
    let transport = MockTransport::new();
    let transport_clone = transport.clone();
    let driver = Mpu6050Driver::new(transport);
    (driver, transport_clone)
}

/// Assert that two floating point values are approximately equal
#[allow(dead_code)]
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    let diff = (a - b).abs();
    assert!(
        diff < epsilon,
        "Values not equal within epsilon: {} vs {} (diff: {}, epsilon: {})",
        a,
        b,
        diff,
        epsilon
    );
}
