//! High-level driver API for the MPU-6050
//!
//! [`Mpu6050Driver`] performs addressed, bounded-length register
//! transactions against the sensor through an injected
//! [`RegisterTransport`], and pairs the raw reads with the pure
//! conversions in [`crate::sensors`].

use embedded_hal::i2c::SevenBitAddress;

use crate::interface::RegisterTransport;
use crate::registers::{Register, ACCEL_CONFIG_2G, GYRO_CONFIG_250DPS, PWR_MGMT_1_WAKE};
use crate::sensors::{sample16, temperature, AccelDataG, AccelFullScale, GyroDataCdps};
use crate::{Error, DEFAULT_TIMEOUT_MS, I2C_ADDRESS_AD0_HIGH, I2C_ADDRESS_AD0_LOW};

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

/// Main driver for the MPU-6050
///
/// Every operation is a single blocking transaction bounded by the
/// configured timeout, and fails as a whole or succeeds as a whole; a
/// failed read never exposes a partially-filled sample. The driver holds
/// no sensor state and never retries; each method maps to exactly the bus
/// traffic it names.
///
/// The transport is borrowed exclusively (`&mut self`) for the duration of
/// a transaction. Callers sharing the bus between contexts (main loop and
/// interrupt handler, for instance) serialize access around the driver.
pub struct Mpu6050Driver<T> {
    transport: T,
    address: SevenBitAddress,
    timeout_ms: u32,
}

impl<T> Mpu6050Driver<T> {
    /// Create a driver for the default address (0x68, AD0 pin LOW)
    ///
    /// No bus traffic happens here; the first transaction is whichever
    /// operation the caller invokes next.
    pub const fn new(transport: T) -> Self {
        Self::with_address(transport, I2C_ADDRESS_AD0_LOW)
    }

    /// Create a driver for the alternative address (0x69, AD0 pin HIGH)
    pub const fn alternative(transport: T) -> Self {
        Self::with_address(transport, I2C_ADDRESS_AD0_HIGH)
    }

    /// Create a driver for a custom 7-bit device address
    pub const fn with_address(transport: T, address: SevenBitAddress) -> Self {
        Self {
            transport,
            address,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Set the per-transaction timeout bound in milliseconds
    pub fn set_timeout_ms(&mut self, timeout_ms: u32) {
        self.timeout_ms = timeout_ms;
    }

    /// The configured per-transaction timeout bound in milliseconds
    #[must_use]
    pub const fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// The 7-bit device address this driver transacts with
    #[must_use]
    pub const fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Consume the driver and return the underlying transport
    pub fn release(self) -> T {
        self.transport
    }
}

impl<T: RegisterTransport> Mpu6050Driver<T> {
    /// Read the `WHO_AM_I` identity register
    ///
    /// Reports the byte as the device answered it; an unexpected value is
    /// not an error at this layer. Compare against
    /// [`WHO_AM_I_VALUE`](crate::WHO_AM_I_VALUE) (0x68) to decide whether
    /// the right part is on the bus.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn who_am_i(&mut self) -> Result<u8, Error<T::BusError>> {
        let mut buf = [0u8; 1];
        self.transport
            .read_registers(self.address, Register::WhoAmI.addr(), &mut buf, self.timeout_ms)?;
        Ok(buf[0])
    }

    /// Wake the device: clear `PWR_MGMT_1` to exit sleep and select the
    /// internal clock source
    ///
    /// The part powers up asleep, so this is normally the first write after
    /// reset. Writing the same value again has no additional effect.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn wake(&mut self) -> Result<(), Error<T::BusError>> {
        self.write_config(Register::PwrMgmt1, PWR_MGMT_1_WAKE)
    }

    /// Select the ±2g accelerometer range (AFS_SEL = 00)
    ///
    /// Also clears the self-test and high-pass filter bits. 16384 LSB/g
    /// applies to subsequent raw reads.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_accel_range_2g(&mut self) -> Result<(), Error<T::BusError>> {
        self.write_config(Register::AccelConfig, ACCEL_CONFIG_2G)
    }

    /// Select the ±250 °/s gyroscope range (FS_SEL = 00)
    ///
    /// Also clears the self-test bits. 131 LSB/(°/s) applies to subsequent
    /// raw reads.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn set_gyro_range_250dps(&mut self) -> Result<(), Error<T::BusError>> {
        self.write_config(Register::GyroConfig, GYRO_CONFIG_250DPS)
    }

    /// Read the 6-byte accelerometer block as raw X/Y/Z samples
    ///
    /// All three axes come from one burst read, so a sample is never torn
    /// across transactions.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_raw(&mut self) -> Result<AccelData, Error<T::BusError>> {
        let mut buf = [0u8; 6];
        self.transport.read_registers(
            self.address,
            Register::AccelXoutH.addr(),
            &mut buf,
            self.timeout_ms,
        )?;

        Ok(AccelData {
            x: sample16(buf[0], buf[1]),
            y: sample16(buf[2], buf[3]),
            z: sample16(buf[4], buf[5]),
        })
    }

    /// Read the 6-byte gyroscope block as raw X/Y/Z samples
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_raw(&mut self) -> Result<GyroData, Error<T::BusError>> {
        let mut buf = [0u8; 6];
        self.transport.read_registers(
            self.address,
            Register::GyroXoutH.addr(),
            &mut buf,
            self.timeout_ms,
        )?;

        Ok(GyroData {
            x: sample16(buf[0], buf[1]),
            y: sample16(buf[2], buf[3]),
            z: sample16(buf[4], buf[5]),
        })
    }

    /// Read the 2-byte temperature block as a raw signed sample
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temp_raw(&mut self) -> Result<i16, Error<T::BusError>> {
        let mut buf = [0u8; 2];
        self.transport.read_registers(
            self.address,
            Register::TempOutH.addr(),
            &mut buf,
            self.timeout_ms,
        )?;

        Ok(sample16(buf[0], buf[1]))
    }

    /// Read the accelerometer and convert to g at the ±2g range
    ///
    /// Assumes [`set_accel_range_2g`](Self::set_accel_range_2g) has been
    /// applied; the conversion always uses 16384 LSB/g.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_g(&mut self) -> Result<AccelDataG, Error<T::BusError>> {
        let raw = self.read_accel_raw()?;
        Ok(AccelDataG::from_raw(
            raw.x,
            raw.y,
            raw.z,
            AccelFullScale::G2.sensitivity(),
        ))
    }

    /// Read the gyroscope and convert to centi-°/s at the ±250 °/s range
    ///
    /// Assumes [`set_gyro_range_250dps`](Self::set_gyro_range_250dps) has
    /// been applied; the conversion always uses 131 LSB/(°/s).
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_cdps(&mut self) -> Result<GyroDataCdps, Error<T::BusError>> {
        let raw = self.read_gyro_raw()?;
        Ok(GyroDataCdps::from_raw(raw.x, raw.y, raw.z))
    }

    /// Read the thermometer and convert to centi-°C
    ///
    /// 2534 means 25.34 °C. The conversion is integer-only and saturating;
    /// see [`temperature::raw_to_centi_celsius`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temp_centi_celsius(&mut self) -> Result<i16, Error<T::BusError>> {
        let raw = self.read_temp_raw()?;
        Ok(temperature::raw_to_centi_celsius(raw))
    }

    fn write_config(&mut self, register: Register, value: u8) -> Result<(), Error<T::BusError>> {
        self.transport
            .write_registers(self.address, register.addr(), &[value], self.timeout_ms)
    }
}
