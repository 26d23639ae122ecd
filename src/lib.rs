#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use device::{AccelData, GyroData, Mpu6050Driver};
pub use interface::{I2cInterface, RegisterTransport};
pub use sensors::{sample16, AccelDataG, AccelFullScale, GyroDataCdps, GyroFullScale};

/// MPU-6050 I2C address when the AD0 pin is low (default: 0x68)
///
/// This is the most common configuration. The AD0 pin is pulled low or left
/// floating on most breakout boards. Use [`Mpu6050Driver::new()`] for this
/// configuration.
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// MPU-6050 I2C address when the AD0 pin is high (alternative: 0x69)
///
/// Use this address when the AD0 pin is explicitly pulled high to VDD.
/// Use [`Mpu6050Driver::alternative()`] for this configuration.
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// Expected value of the `WHO_AM_I` register
///
/// [`Mpu6050Driver::who_am_i()`] reports whatever the device answers; the
/// comparison against this constant is the caller's decision.
pub const WHO_AM_I_VALUE: u8 = 0x68;

/// Default per-transaction timeout bound in milliseconds
pub const DEFAULT_TIMEOUT_MS: u32 = 100;

/// Driver errors
///
/// Every bus transaction fails as a whole with exactly one of these kinds.
/// The driver never retries internally; retry, alarm or degrade decisions
/// belong to the caller, which is why the kinds stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus is currently owned by another transaction
    Busy,
    /// The device did not respond within the timeout bound
    Timeout,
    /// Any other transport-level fault (NACK, bus fault, ...)
    Bus(E),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
