//! Millimeter ↔ revolution conversion.
//!
//! The transmission ratio is the linear travel in millimeters per revolution
//! of the driven element. Rates convert the same way (mm/s → rev/s).

use crate::error::{CalcError, CalcResult};

/// Convert millimeters to revolutions: `mm / ratio`.
///
/// # Errors
///
/// - [`CalcError::DivisionByZero`] if `ratio == 0`
/// - [`CalcError::NonFinite`] if `ratio` is NaN or infinite
#[inline]
pub fn mm_to_rev(mm: f64, ratio: f64) -> CalcResult<f64> {
    if !ratio.is_finite() {
        return Err(CalcError::NonFinite { value: ratio });
    }
    if ratio == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(mm / ratio)
}

/// Convert revolutions to millimeters: `rev * ratio`.
#[inline]
pub fn rev_to_mm(rev: f64, ratio: f64) -> f64 {
    rev * ratio
}
