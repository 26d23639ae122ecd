//! Register map for the MPU-6050
//!
//! The MPU-6050 exposes a flat 8-bit register space (no bank switching).
//! Multi-byte sensor blocks are laid out high-byte-first and are read in a
//! single burst starting at the `*_H` register of the X axis.

/// MPU-6050 register addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Gyroscope Configuration register (0x1B)
    /// FS_SEL[4:3] selects the full-scale range
    GyroConfig = 0x1B,

    /// Accelerometer Configuration register (0x1C)
    /// AFS_SEL[4:3] selects the full-scale range
    AccelConfig = 0x1C,

    /// First byte of the accelerometer data block (0x3B)
    /// 6 bytes: X, Y, Z, each big-endian signed 16-bit
    AccelXoutH = 0x3B,

    /// First byte of the temperature data block (0x41)
    /// 2 bytes, big-endian signed 16-bit
    TempOutH = 0x41,

    /// First byte of the gyroscope data block (0x43)
    /// 6 bytes: X, Y, Z, each big-endian signed 16-bit
    GyroXoutH = 0x43,

    /// Power Management 1 register (0x6B)
    /// Controls sleep, reset and clock source selection
    PwrMgmt1 = 0x6B,

    /// WHO_AM_I identity register (0x75)
    /// Reads 0x68 regardless of the AD0 strap
    WhoAmI = 0x75,
}

impl Register {
    /// Register address as an 8-bit offset
    #[must_use]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// `PWR_MGMT_1` value that leaves sleep mode and selects the internal
/// 8 MHz oscillator
pub const PWR_MGMT_1_WAKE: u8 = 0x00;

/// `ACCEL_CONFIG` value for the ±2g range (AFS_SEL = 00, no self-test,
/// no high-pass filter)
pub const ACCEL_CONFIG_2G: u8 = 0x00;

/// `GYRO_CONFIG` value for the ±250 °/s range (FS_SEL = 00, no self-test)
pub const GYRO_CONFIG_250DPS: u8 = 0x00;
