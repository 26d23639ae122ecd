//! Common test utilities and mock implementations

pub mod test_utils;

pub use mock_transport::{Fault, MockBusError, MockTransport, Operation};
pub use test_utils::create_mock_driver;
