//! Error types for increment calculation.

use thiserror::Error;

/// Errors that can occur while converting units or deriving a ratio.
///
/// All variants are local input errors. None is transient, so callers never
/// retry; the shell reports them as a single generic message.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalcError {
    /// An argument is outside its valid domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Division by a zero transmission ratio
    #[error("Division by zero: transmission ratio is 0")]
    DivisionByZero,

    /// A divisor is NaN or infinite
    #[error("Non-finite value: {value}")]
    NonFinite {
        /// Offending value
        value: f64,
    },
}

/// Convenience result alias for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_carries_reason() {
        let e = CalcError::InvalidArgument("denominator cannot be zero");
        assert_eq!(e.to_string(), "Invalid argument: denominator cannot be zero");
    }

    #[test]
    fn non_finite_message_shows_value() {
        let e = CalcError::NonFinite { value: f64::INFINITY };
        assert_eq!(e.to_string(), "Non-finite value: inf");
    }
}
