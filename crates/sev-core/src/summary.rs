//! # Summary Exposure Value and Attributable Fraction
//!
//! Once the host has integrated the integrand over the exposure range, the
//! resulting expected relative risk `E[RR]` is rescaled onto `[0, 1]`:
//!
//! ```text
//! SEV    = (E[RR] - 1) / (rr_max - 1)
//! scalar = SEV · (rr_max - 1) + 1
//! PAF    = 1 - 1 / scalar
//! ```
//!
//! `SEV = 0` means the population sits at the TMREL; `SEV = 1` means every
//! individual carries the maximum relative risk.

use serde::{Deserialize, Serialize};

use crate::error::{finite, DomainError, SevError};

/// Rescale an expected relative risk into a summary exposure value.
///
/// # Errors
///
/// `rr_max == 1` leaves the ratio undefined.
pub fn summary_exposure_value(expected_rr: f64, rr_max: f64) -> Result<f64, SevError> {
    let expected_rr = finite("expected_rr", expected_rr)?;
    let denominator = finite("rr_max", rr_max)? - 1.0;
    if denominator == 0.0 {
        return Err(DomainError::UndefinedRatio {
            quantity: "summary exposure value",
            reason: "rr_max is 1, so there is no excess risk to scale by".to_string(),
        }
        .into());
    }
    Ok((expected_rr - 1.0) / denominator)
}

/// Relative-risk scalar implied by a summary exposure value.
pub fn risk_scalar(sev: f64, rr_max: f64) -> Result<f64, SevError> {
    let sev = finite("sev", sev)?;
    let rr_max = finite("rr_max", rr_max)?;
    Ok(sev * (rr_max - 1.0) + 1.0)
}

/// Population attributable fraction implied by a summary exposure value.
///
/// # Errors
///
/// The relative-risk scalar must be strictly positive.
pub fn population_attributable_fraction(sev: f64, rr_max: f64) -> Result<f64, SevError> {
    let scalar = risk_scalar(sev, rr_max)?;
    if scalar <= 0.0 {
        return Err(DomainError::UndefinedRatio {
            quantity: "population attributable fraction",
            reason: format!("relative-risk scalar {scalar} is not positive"),
        }
        .into());
    }
    Ok(1.0 - 1.0 / scalar)
}

/// SEV and PAF derived from one integrated expected relative risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SevSummary {
    /// Summary exposure value.
    pub sev: f64,
    /// Population attributable fraction.
    pub paf: f64,
}

impl SevSummary {
    /// Derive both quantities from `E[RR]` and the curve's cap.
    pub fn from_expected_rr(expected_rr: f64, rr_max: f64) -> Result<Self, SevError> {
        let sev = summary_exposure_value(expected_rr, rr_max)?;
        let paf = population_attributable_fraction(sev, rr_max)?;
        Ok(Self { sev, paf })
    }
}
