//! # Integrand Evaluation
//!
//! Combines the exposure density with the relative-risk multiplier:
//!
//! ```text
//! y(x) = p(x) · RR(x)
//! ```
//!
//! Integrating `y` over the exposure range gives the expected relative risk,
//! which [`crate::summary`] turns into a summary exposure value. The
//! integration itself belongs to the host.
//!
//! Two entry points share the same semantics:
//!
//! - [`evaluate`] / [`EvaluationRequest`] validate all seven inputs on every
//!   call.
//! - [`ExposureRisk`] validates the distribution and curve once and then only
//!   checks `x` per point, which is what a quadrature loop wants.

use serde::{Deserialize, Serialize};

use crate::direction::RiskDirection;
use crate::error::{DomainError, SevError};
use crate::lognormal::LogNormal;
use crate::relative_risk::RiskCurve;

/// One point evaluation, with every input named.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Exposure level.
    pub x: f64,
    /// Natural-scale mean of the exposure distribution.
    pub mean_exposure: f64,
    /// Natural-scale standard deviation of the exposure distribution.
    pub sd_exposure: f64,
    /// Theoretical minimum risk exposure level.
    pub tmrel: f64,
    /// Per-unit relative-risk base.
    pub rr_mean: f64,
    /// Cap on the relative-risk multiplier.
    pub rr_max: f64,
    /// Risk-accruing side of the TMREL.
    pub direction: RiskDirection,
}

impl EvaluationRequest {
    /// Evaluate the integrand for this request.
    pub fn evaluate(&self) -> Result<f64, SevError> {
        let kernel = ExposureRisk::new(
            self.mean_exposure,
            self.sd_exposure,
            self.tmrel,
            self.rr_mean,
            self.rr_max,
            self.direction,
        )?;
        kernel.integrand(self.x)
    }
}

/// Evaluate the density-weighted relative risk at exposure `x`.
///
/// Argument order matches the numeric binding used by integration hosts.
///
/// # Errors
///
/// Returns [`SevError::Domain`] when any input is outside its domain (see
/// [`LogNormal::from_moments`], [`LogNormal::density`] and [`RiskCurve::new`]).
pub fn evaluate(
    x: f64,
    mean_exposure: f64,
    sd_exposure: f64,
    tmrel: f64,
    rr_mean: f64,
    rr_max: f64,
    direction: RiskDirection,
) -> Result<f64, SevError> {
    EvaluationRequest {
        x,
        mean_exposure,
        sd_exposure,
        tmrel,
        rr_mean,
        rr_max,
        direction,
    }
    .evaluate()
}

/// A validated exposure distribution paired with a relative-risk curve.
///
/// Both halves validate on deserialization, so a deserialized kernel upholds
/// the same invariants as one built with [`ExposureRisk::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureRisk {
    exposure: LogNormal,
    curve: RiskCurve,
}

impl ExposureRisk {
    /// Validate all parameters except the exposure point.
    pub fn new(
        mean_exposure: f64,
        sd_exposure: f64,
        tmrel: f64,
        rr_mean: f64,
        rr_max: f64,
        direction: RiskDirection,
    ) -> Result<Self, SevError> {
        let exposure = LogNormal::from_moments(mean_exposure, sd_exposure)
            .map_err(rejected)?;
        let curve = RiskCurve::new(tmrel, rr_mean, rr_max, direction).map_err(rejected)?;
        Ok(Self::from_parts(exposure, curve))
    }

    /// Pair an already-built distribution and curve.
    pub fn from_parts(exposure: LogNormal, curve: RiskCurve) -> Self {
        Self { exposure, curve }
    }

    /// Exposure distribution.
    pub fn exposure(&self) -> &LogNormal {
        &self.exposure
    }

    /// Relative-risk curve.
    pub fn curve(&self) -> &RiskCurve {
        &self.curve
    }

    /// Density at `x`.
    pub fn density(&self, x: f64) -> Result<f64, SevError> {
        self.exposure
            .density(x)
            .map_err(|e| SevError::from(rejected(e)))
    }

    /// Relative-risk multiplier at `x`. Exactly `1.0` on the safe side.
    pub fn multiplier(&self, x: f64) -> f64 {
        self.curve.multiplier(x)
    }

    /// Density-weighted relative risk at `x`.
    pub fn integrand(&self, x: f64) -> Result<f64, SevError> {
        let px = self.density(x)?;
        Ok(px * self.curve.multiplier(x))
    }
}

fn rejected(err: DomainError) -> DomainError {
    tracing::debug!(error = %err, "integrand input outside domain");
    err
}
