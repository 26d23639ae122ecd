//! Accelerometer types and conversion
//!
//! Provides the range selector and conversion from raw counts to g-force
//! for the MPU-6050's 3-axis accelerometer. Acceleration is deliberately
//! exposed as floating point: it feeds numeric pipelines that expect
//! fractional precision, unlike the integer-only temperature and angular
//! rate paths.

/// Accelerometer full-scale range
///
/// Only the most sensitive range is supported. The part also offers ±4g,
/// ±8g and ±16g (AFS_SEL 1..3); the enum is non-exhaustive so they can be
/// added without breaking callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum AccelFullScale {
    /// ±2g range (most sensitive)
    G2,
}

impl AccelFullScale {
    /// Get the sensitivity in LSB/g (Least Significant Bit per g)
    ///
    /// This is used to convert raw sensor values to physical units.
    #[must_use]
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::G2 => 16384.0, // LSB/g
        }
    }

    /// Get the maximum value in g
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::G2 => 2,
        }
    }
}

/// Accelerometer data in physical units (g-force)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataG {
    /// X-axis acceleration in g
    pub x: f32,
    /// Y-axis acceleration in g
    pub y: f32,
    /// Z-axis acceleration in g
    pub z: f32,
}

impl AccelDataG {
    /// Create from raw sensor values
    ///
    /// # Arguments
    ///
    /// * `raw_x` - Raw X-axis value
    /// * `raw_y` - Raw Y-axis value
    /// * `raw_z` - Raw Z-axis value
    /// * `sensitivity` - Sensitivity in LSB/g (from [`AccelFullScale::sensitivity()`])
    #[must_use]
    pub fn from_raw(raw_x: i16, raw_y: i16, raw_z: i16, sensitivity: f32) -> Self {
        Self {
            x: f32::from(raw_x) / sensitivity,
            y: f32::from(raw_y) / sensitivity,
            z: f32::from(raw_z) / sensitivity,
        }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Normalize the acceleration vector (make magnitude = 1.0)
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            }
        } else {
            *self
        }
    }
}
