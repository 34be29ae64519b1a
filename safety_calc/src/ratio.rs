//! Transmission ratio derivation from an encoder fraction.
//!
//! A drive can be parameterised by a numerator/denominator pair instead of a
//! direct mm-per-revolution ratio. When the denominator equals the encoder
//! resolution the numerator already is the ratio; any other denominator is
//! rescaled onto the encoder's native resolution.

use crate::error::{CalcError, CalcResult};

/// Derive a transmission ratio from `numerator / denominator` at the given
/// encoder resolution (counts per revolution).
///
/// - `denominator == encoder_resolution` → `numerator` exactly
/// - otherwise → `numerator * encoder_resolution / denominator`
///
/// # Errors
///
/// Returns [`CalcError::InvalidArgument`] if `denominator == 0`.
pub fn ratio_from_fraction(
    numerator: f64,
    denominator: f64,
    encoder_resolution: f64,
) -> CalcResult<f64> {
    if denominator == 0.0 {
        return Err(CalcError::InvalidArgument("denominator cannot be zero"));
    }
    if denominator == encoder_resolution {
        return Ok(numerator);
    }
    Ok(numerator * encoder_resolution / denominator)
}

/// Encoder counts per revolution for a resolution given in bits (`2^bits`).
///
/// Fractional bit counts are accepted and evaluated with `powf`.
#[inline]
pub fn encoder_resolution_from_bits(bits: f64) -> f64 {
    2.0_f64.powf(bits)
}
