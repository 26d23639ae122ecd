//! Die temperature conversion
//!
//! The datasheet transfer function is `T[°C] = raw/340 + 36.53`. It is
//! evaluated here scaled by 100 in pure integer arithmetic, so the primary
//! reporting path carries no floating-point rounding and works on targets
//! without an FPU. 2534 means 25.34 °C.

/// Temperature sensitivity in LSB per °C
const SENSITIVITY_LSB_PER_DEG: i32 = 340;

/// Datasheet offset of 36.53 °C, in centi-°C
const OFFSET_CENTI_DEG: i32 = 3653;

/// Saturation bounds for the converted value, in centi-°C.
///
/// The lower bound is -32767, not i16::MIN: both clamp sentinels use the
/// maximum representable magnitude. The clamp guards the affine transform
/// against out-of-spec raw inputs and never triggers for the sensor's
/// valid ±32767 range (the reachable output span is [-5985, 13290]).
const CLAMP_MAX: i32 = 32767;
const CLAMP_MIN: i32 = -32767;

/// Convert a raw temperature sample to hundredths of °C, saturating.
///
/// Computes `round(raw * 100 / 340) + 3653` in integer arithmetic with
/// symmetric rounding: the scaled value is biased by half the divisor
/// (170) toward its own sign before the truncating division, so halves
/// round away from zero on both sides.
#[must_use]
pub const fn raw_to_centi_celsius(raw: i16) -> i16 {
    let mut num = raw as i32 * 100;
    if num >= 0 {
        num = (num + SENSITIVITY_LSB_PER_DEG / 2) / SENSITIVITY_LSB_PER_DEG;
    } else {
        num = (num - SENSITIVITY_LSB_PER_DEG / 2) / SENSITIVITY_LSB_PER_DEG;
    }

    let t = num + OFFSET_CENTI_DEG;
    if t > CLAMP_MAX {
        CLAMP_MAX as i16
    } else if t < CLAMP_MIN {
        CLAMP_MIN as i16
    } else {
        t as i16
    }
}
