//! # Error Types
//!
//! Every failure in the kernel is local to a single evaluation. Errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Domain errors name the offending parameter and the value it carried,
//!   so an integration host can tell an invalid point from a legitimately
//!   near-zero integrand.
//! - An unrecognized direction encoding is an argument error, never a
//!   silent fallback to one of the two directions.

use thiserror::Error;

/// Top-level error type for the SEV kernel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SevError {
    /// An input lies outside the mathematical domain of the integrand.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// An argument is not one of the recognized encodings.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A risk-factor configuration document is structurally invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// YAML/JSON deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// An input outside the domain of a logarithm, square root, or division.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The parameter must be strictly positive.
    #[error("{parameter} must be > 0, got {value}")]
    NonPositive {
        /// Name of the parameter.
        parameter: &'static str,
        /// Value supplied.
        value: f64,
    },

    /// The parameter must be non-negative.
    #[error("{parameter} must be >= 0, got {value}")]
    Negative {
        /// Name of the parameter.
        parameter: &'static str,
        /// Value supplied.
        value: f64,
    },

    /// NaN or infinity.
    #[error("{parameter} must be finite, got {value}")]
    NonFinite {
        /// Name of the parameter.
        parameter: &'static str,
        /// Value supplied.
        value: f64,
    },

    /// The log-space scale is zero, so the density is undefined.
    #[error("log-normal scale is zero (sd_exposure = 0); density is undefined")]
    DegenerateScale,

    /// A ratio whose denominator vanished or whose result is not positive.
    #[error("{quantity} is undefined: {reason}")]
    UndefinedRatio {
        /// Name of the derived quantity.
        quantity: &'static str,
        /// Why it cannot be formed.
        reason: String,
    },
}

impl DomainError {
    /// Name of the offending parameter, when the error concerns one input.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::NonPositive { parameter, .. }
            | Self::Negative { parameter, .. }
            | Self::NonFinite { parameter, .. } => Some(*parameter),
            Self::DegenerateScale | Self::UndefinedRatio { .. } => None,
        }
    }
}

/// Require `value` to be finite.
pub(crate) fn finite(parameter: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { parameter, value })
    }
}

/// Require `value` to be finite and strictly positive.
pub(crate) fn positive(parameter: &'static str, value: f64) -> Result<f64, DomainError> {
    let value = finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NonPositive { parameter, value })
    }
}

/// Require `value` to be finite and non-negative.
pub(crate) fn non_negative(parameter: &'static str, value: f64) -> Result<f64, DomainError> {
    let value = finite(parameter, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::Negative { parameter, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        assert_eq!(
            positive("x", 0.0),
            Err(DomainError::NonPositive { parameter: "x", value: 0.0 })
        );
        assert!(positive("x", -1.0).is_err());
        assert_eq!(positive("x", 2.5), Ok(2.5));
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(non_negative("sd_exposure", 0.0), Ok(0.0));
        assert!(matches!(
            non_negative("sd_exposure", -0.1),
            Err(DomainError::Negative { parameter: "sd_exposure", .. })
        ));
    }

    #[test]
    fn test_nan_and_infinity_are_non_finite() {
        assert!(matches!(
            positive("x", f64::NAN),
            Err(DomainError::NonFinite { .. })
        ));
        assert!(matches!(
            non_negative("x", f64::INFINITY),
            Err(DomainError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_display_names_parameter() {
        let err = SevError::from(DomainError::NonPositive {
            parameter: "mean_exposure",
            value: 0.0,
        });
        assert_eq!(err.to_string(), "domain error: mean_exposure must be > 0, got 0");
    }

    #[test]
    fn test_parameter_accessor() {
        assert_eq!(
            DomainError::Negative { parameter: "sd_exposure", value: -1.0 }.parameter(),
            Some("sd_exposure")
        );
        assert_eq!(DomainError::DegenerateScale.parameter(), None);
    }
}
