//! Bus transport capability for the MPU-6050
//!
//! The driver never talks to hardware directly. All register traffic goes
//! through the [`RegisterTransport`] trait, which a platform implements once
//! for its bus. [`I2cInterface`] is the production implementation over
//! `embedded-hal` blocking I2C; tests substitute a simulated transport.

use embedded_hal::i2c::{Error as I2cError, ErrorKind, I2c, SevenBitAddress};

use crate::Error;

/// Addressed register transport with bounded-latency transactions.
///
/// Device addresses are 7-bit. A transport whose lower layer frames
/// addresses as 8 bits (address in the upper 7 bits, R/W in bit 0) shifts
/// the address left by one internally; callers never pre-shift.
///
/// Both operations are all-or-nothing: exactly `buf.len()` / `data.len()`
/// bytes transfer, or the call fails as a whole. A transport must never
/// report success for a short transfer, and on failure the caller treats
/// the buffer contents as garbage.
pub trait RegisterTransport {
    /// Raw error type of the underlying bus
    type BusError;

    /// Read `buf.len()` bytes starting at register `start`.
    ///
    /// `timeout_ms` bounds the whole transaction; expiry surfaces as
    /// [`Error::Timeout`].
    fn read_registers(
        &mut self,
        address: SevenBitAddress,
        start: u8,
        buf: &mut [u8],
        timeout_ms: u32,
    ) -> Result<(), Error<Self::BusError>>;

    /// Write `data` starting at register `start`, same bounds and
    /// atomicity as [`read_registers`](Self::read_registers).
    fn write_registers(
        &mut self,
        address: SevenBitAddress,
        start: u8,
        data: &[u8],
        timeout_ms: u32,
    ) -> Result<(), Error<Self::BusError>>;
}

/// I2C transport for the MPU-6050, over any `embedded-hal` 1.0 bus.
///
/// Register reads are a write-read transaction (register pointer, repeated
/// start, data); register writes send the pointer and payload in one frame.
///
/// # Note on timeouts
///
/// The blocking `embedded_hal::i2c::I2c` contract carries no deadline
/// parameter, so this adapter cannot enforce `timeout_ms` itself; the bound
/// is honored by HALs whose transfer functions time out internally (most
/// vendor HALs do). Transports wrapping such a HAL directly can surface the
/// expiry as [`Error::Timeout`].
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C transport over the given bus peripheral
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consume the transport and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterTransport for I2cInterface<I2C> {
    type BusError = I2C::Error;

    fn read_registers(
        &mut self,
        address: SevenBitAddress,
        start: u8,
        buf: &mut [u8],
        _timeout_ms: u32,
    ) -> Result<(), Error<Self::BusError>> {
        self.i2c
            .write_read(address, &[start], buf)
            .map_err(classify)
    }

    fn write_registers(
        &mut self,
        address: SevenBitAddress,
        start: u8,
        data: &[u8],
        _timeout_ms: u32,
    ) -> Result<(), Error<Self::BusError>> {
        // Register pointer + payload in a single frame
        let mut frame = [0u8; 8]; // 1 pointer byte + largest block this driver writes
        frame[0] = start;
        let len = data.len().min(frame.len() - 1);
        frame[1..=len].copy_from_slice(&data[..len]);

        self.i2c.write(address, &frame[..=len]).map_err(classify)
    }
}

/// Sort a raw bus fault into the three failure kinds.
///
/// Arbitration loss means another master owns the bus right now, which is
/// the `Busy` case; everything else stays a transport fault carrying the
/// original error.
fn classify<E: I2cError>(error: E) -> Error<E> {
    match error.kind() {
        ErrorKind::ArbitrationLoss => Error::Busy,
        _ => Error::Bus(error),
    }
}
