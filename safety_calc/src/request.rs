//! Tagged calculation input and the full evaluation pipeline.
//!
//! A request pairs one [`SafetyFunction`] with one [`RatioInput`]. Resolving
//! the ratio and dispatching to the formula are the only two steps; any
//! failure is returned to the caller unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalcError, CalcResult};
use crate::increment::SafetyFunction;
use crate::ratio::{encoder_resolution_from_bits, ratio_from_fraction};

/// How the transmission ratio is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RatioInput {
    /// Millimeters per revolution, given directly.
    Direct {
        /// Transmission ratio [mm/rev].
        ratio: f64,
    },
    /// Encoder fraction rescaled onto the encoder resolution.
    Fraction {
        /// Fraction numerator.
        numerator: f64,
        /// Fraction denominator (must be non-zero).
        denominator: f64,
        /// Encoder resolution in bits; counts per revolution is `2^bits`.
        encoder_bits: f64,
    },
}

impl RatioInput {
    /// Resolve to a transmission ratio in mm/rev.
    ///
    /// # Errors
    ///
    /// - [`CalcError::InvalidArgument`] on a zero denominator
    /// - [`CalcError::InvalidArgument`] if the resolved ratio is not finite and positive
    pub fn resolve(&self) -> CalcResult<f64> {
        let ratio = match *self {
            Self::Direct { ratio } => ratio,
            Self::Fraction {
                numerator,
                denominator,
                encoder_bits,
            } => {
                let resolution = encoder_resolution_from_bits(encoder_bits);
                ratio_from_fraction(numerator, denominator, resolution)?
            }
        };

        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(CalcError::InvalidArgument(
                "transmission ratio must be positive",
            ));
        }
        Ok(ratio)
    }
}

/// One increment calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Which threshold to compute.
    pub function: SafetyFunction,
    /// Motor pole-pair count.
    pub pole_pairs: f64,
    /// Max speed [mm/s] for SSR/SCW, max displacement [mm] for SOS.
    pub max_value: f64,
    /// Transmission ratio source.
    pub ratio: RatioInput,
}

/// Outcome of a successful [`CalculationRequest::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Function that produced `value`.
    pub function: SafetyFunction,
    /// Resolved transmission ratio [mm/rev].
    pub transmission_ratio: f64,
    /// Threshold in controller increment units.
    pub value: f64,
}

impl CalculationRequest {
    /// Resolve the ratio and run the selected formula.
    pub fn evaluate(&self) -> CalcResult<CalculationResult> {
        let transmission_ratio = self.ratio.resolve()?;
        let value = self
            .function
            .compute(self.pole_pairs, self.max_value, transmission_ratio)?;

        debug!(
            function = %self.function,
            pole_pairs = self.pole_pairs,
            max_value = self.max_value,
            transmission_ratio,
            value,
            "increment threshold computed"
        );

        Ok(CalculationResult {
            function: self.function,
            transmission_ratio,
            value,
        })
    }

    /// Range check for the drive values.
    ///
    /// The formulas accept anything; callers that take user input run this
    /// first so a zero pole count or a negative speed is reported instead of
    /// producing a meaningless threshold.
    ///
    /// # Errors
    ///
    /// - [`CalcError::InvalidArgument`] if `pole_pairs` is not finite and positive
    /// - [`CalcError::InvalidArgument`] if `max_value` is not finite and non-negative
    pub fn check_ranges(&self) -> CalcResult<()> {
        if !(self.pole_pairs.is_finite() && self.pole_pairs > 0.0) {
            return Err(CalcError::InvalidArgument("pole pairs must be positive"));
        }
        if !(self.max_value.is_finite() && self.max_value >= 0.0) {
            return Err(CalcError::InvalidArgument(
                "max value must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Same inputs, different safety function.
    #[inline]
    pub fn with_function(self, function: SafetyFunction) -> Self {
        Self { function, ..self }
    }
}
