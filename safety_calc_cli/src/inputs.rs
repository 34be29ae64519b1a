//! Request assembly from command-line values and an optional drive profile.
//!
//! Command-line values take precedence over the profile. Choosing direct vs
//! fraction ratio mode is decided by which flags are present; the two groups
//! exclude each other at the argument parser.

use safety_calc::config::{ConfigError, DriveProfile};
use safety_calc::error::CalcError;
use safety_calc::increment::SafetyFunction;
use safety_calc::request::{CalculationRequest, RatioInput};
use thiserror::Error;

/// Errors the shell can hit before or during a calculation.
///
/// All of them are reported to the user as the same generic message.
#[derive(Debug, Error)]
pub enum InputError {
    /// A required value was given neither on the command line nor in the profile.
    #[error("Missing input: {0}")]
    Missing(&'static str),

    /// Profile could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The calculator rejected the input.
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// JSON rendering failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw numeric fields collected from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawInputs {
    /// Selected safety function.
    pub function: Option<SafetyFunction>,
    /// Motor pole pairs.
    pub pole_pairs: Option<f64>,
    /// Max speed [mm/s] or max displacement [mm].
    pub max_value: Option<f64>,
    /// Direct transmission ratio [mm/rev].
    pub ratio: Option<f64>,
    /// Fraction numerator.
    pub numerator: Option<f64>,
    /// Fraction denominator.
    pub denominator: Option<f64>,
    /// Encoder resolution [bits].
    pub encoder_bits: Option<f64>,
}

impl RawInputs {
    fn fraction_given(&self) -> bool {
        self.numerator.is_some() || self.denominator.is_some() || self.encoder_bits.is_some()
    }

    fn ratio_input(&self, profile: Option<&DriveProfile>) -> Result<RatioInput, InputError> {
        if let Some(ratio) = self.ratio {
            return Ok(RatioInput::Direct { ratio });
        }
        if self.fraction_given() {
            return Ok(RatioInput::Fraction {
                numerator: self.numerator.ok_or(InputError::Missing("numerator"))?,
                denominator: self.denominator.ok_or(InputError::Missing("denominator"))?,
                encoder_bits: self.encoder_bits.ok_or(InputError::Missing("encoder bits"))?,
            });
        }
        profile
            .map(|p| p.ratio)
            .ok_or(InputError::Missing("transmission ratio"))
    }

    /// Combine command-line values with the profile into one request.
    ///
    /// Ranges are checked on the merged values, so a flag can replace an
    /// out-of-range profile value.
    pub fn to_request(
        &self,
        profile: Option<&DriveProfile>,
    ) -> Result<CalculationRequest, InputError> {
        let ratio = self.ratio_input(profile)?;
        let pole_pairs = self
            .pole_pairs
            .or(profile.map(|p| p.pole_pairs))
            .ok_or(InputError::Missing("pole pairs"))?;
        let max_value = self
            .max_value
            .or(profile.and_then(|p| p.max_value))
            .ok_or(InputError::Missing("max value"))?;
        let function = self
            .function
            .or(profile.map(|p| p.function))
            .unwrap_or_default();

        let request = CalculationRequest {
            function,
            pole_pairs,
            max_value,
            ratio,
        };
        request.check_ranges()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> DriveProfile {
        DriveProfile {
            function: SafetyFunction::Sos,
            pole_pairs: 4.0,
            max_value: Some(100.0),
            ratio: RatioInput::Direct { ratio: 10.0 },
        }
    }

    #[test]
    fn direct_ratio_from_flags() {
        let raw = RawInputs {
            pole_pairs: Some(4.0),
            max_value: Some(100.0),
            ratio: Some(10.0),
            ..Default::default()
        };
        let req = raw.to_request(None).unwrap();
        assert_eq!(req.function, SafetyFunction::Ssr);
        assert_eq!(req.ratio, RatioInput::Direct { ratio: 10.0 });
    }

    #[test]
    fn fraction_from_flags() {
        let raw = RawInputs {
            pole_pairs: Some(4.0),
            max_value: Some(100.0),
            numerator: Some(10.0),
            denominator: Some(65536.0),
            encoder_bits: Some(16.0),
            ..Default::default()
        };
        let req = raw.to_request(None).unwrap();
        assert_eq!(
            req.ratio,
            RatioInput::Fraction {
                numerator: 10.0,
                denominator: 65536.0,
                encoder_bits: 16.0,
            }
        );
        assert_eq!(req.ratio.resolve(), Ok(10.0));
    }

    #[test]
    fn fraction_without_encoder_bits_is_missing() {
        let raw = RawInputs {
            pole_pairs: Some(4.0),
            max_value: Some(100.0),
            numerator: Some(10.0),
            denominator: Some(1000.0),
            ..Default::default()
        };
        assert!(matches!(
            raw.to_request(None),
            Err(InputError::Missing("encoder bits"))
        ));
    }

    #[test]
    fn incomplete_fraction_is_missing() {
        let raw = RawInputs {
            pole_pairs: Some(4.0),
            max_value: Some(100.0),
            numerator: Some(10.0),
            ..Default::default()
        };
        assert!(matches!(
            raw.to_request(None),
            Err(InputError::Missing("denominator"))
        ));
    }

    #[test]
    fn nothing_given_is_missing_ratio() {
        assert!(matches!(
            RawInputs::default().to_request(None),
            Err(InputError::Missing("transmission ratio"))
        ));
    }

    #[test]
    fn profile_fills_gaps() {
        let raw = RawInputs {
            max_value: Some(50.0),
            ..Default::default()
        };
        let req = raw.to_request(Some(&profile())).unwrap();
        assert_eq!(req.function, SafetyFunction::Sos);
        assert_eq!(req.pole_pairs, 4.0);
        assert_eq!(req.max_value, 50.0);
        assert_eq!(req.ratio, RatioInput::Direct { ratio: 10.0 });
    }

    #[test]
    fn flags_override_profile_ratio_mode() {
        let raw = RawInputs {
            function: Some(SafetyFunction::Scw),
            numerator: Some(5.0),
            denominator: Some(32768.0),
            encoder_bits: Some(16.0),
            ..Default::default()
        };
        let req = raw.to_request(Some(&profile())).unwrap();
        assert_eq!(req.function, SafetyFunction::Scw);
        assert_eq!(req.ratio.resolve(), Ok(10.0));
    }

    #[test]
    fn flag_values_are_range_checked() {
        let raw = RawInputs {
            pole_pairs: Some(0.0),
            max_value: Some(100.0),
            ratio: Some(10.0),
            ..Default::default()
        };
        assert!(matches!(
            raw.to_request(None),
            Err(InputError::Calc(CalcError::InvalidArgument(_)))
        ));

        let raw = RawInputs {
            max_value: Some(-5.0),
            ..Default::default()
        };
        assert!(matches!(
            raw.to_request(Some(&profile())),
            Err(InputError::Calc(CalcError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn flag_replaces_out_of_range_profile_value() {
        let mut stored = profile();
        stored.pole_pairs = -1.0;

        let raw = RawInputs {
            pole_pairs: Some(4.0),
            ..Default::default()
        };
        let req = raw.to_request(Some(&stored)).unwrap();
        assert_eq!(req.pole_pairs, 4.0);

        assert!(RawInputs::default().to_request(Some(&stored)).is_err());
    }
}
