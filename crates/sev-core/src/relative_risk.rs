//! # Directional Capped Relative Risk
//!
//! Relative risk grows geometrically with distance from the TMREL on the
//! risk-accruing side and is capped at `rr_max`:
//!
//! ```text
//! d  = direction.excess(x, tmrel)       // tmrel - x, or x - tmrel
//! RR = min(rr_mean^d, rr_max)  if d > 0
//! RR = 1                       otherwise
//! ```
//!
//! On the safe side the multiplier is exactly `1.0`, so the integrand equals
//! the bare density there.

use serde::{Deserialize, Serialize};

use crate::direction::RiskDirection;
use crate::error::{finite, positive, DomainError};

/// A validated relative-risk curve.
///
/// Deserialization goes through [`RiskCurve::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveParams")]
pub struct RiskCurve {
    tmrel: f64,
    rr_mean: f64,
    rr_max: f64,
    direction: RiskDirection,
}

/// Unvalidated wire form of [`RiskCurve`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CurveParams {
    tmrel: f64,
    rr_mean: f64,
    rr_max: f64,
    direction: RiskDirection,
}

impl TryFrom<CurveParams> for RiskCurve {
    type Error = DomainError;

    fn try_from(raw: CurveParams) -> Result<Self, Self::Error> {
        Self::new(raw.tmrel, raw.rr_mean, raw.rr_max, raw.direction)
    }
}

impl RiskCurve {
    /// Validate and build a curve.
    ///
    /// # Errors
    ///
    /// - `tmrel` is not finite.
    /// - `rr_mean` or `rr_max` is not finite or not strictly positive.
    pub fn new(
        tmrel: f64,
        rr_mean: f64,
        rr_max: f64,
        direction: RiskDirection,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            tmrel: finite("tmrel", tmrel)?,
            rr_mean: positive("rr_mean", rr_mean)?,
            rr_max: positive("rr_max", rr_max)?,
            direction,
        })
    }

    /// Theoretical minimum risk exposure level.
    pub fn tmrel(&self) -> f64 {
        self.tmrel
    }

    /// Per-unit relative-risk base.
    pub fn rr_mean(&self) -> f64 {
        self.rr_mean
    }

    /// Cap on the multiplier.
    pub fn rr_max(&self) -> f64 {
        self.rr_max
    }

    /// Risk-accruing side of the TMREL.
    pub fn direction(&self) -> RiskDirection {
        self.direction
    }

    /// Relative-risk multiplier at exposure `x`.
    ///
    /// A NaN `x` compares false against the TMREL and lands on the safe
    /// side; callers validate `x` before reaching this point.
    pub fn multiplier(&self, x: f64) -> f64 {
        let excess = self.direction.excess(x, self.tmrel);
        if excess > 0.0 {
            let rr = self.rr_mean.powf(excess);
            if rr < self.rr_max {
                rr
            } else {
                self.rr_max
            }
        } else {
            1.0
        }
    }

    /// Whether `x` lies strictly on the risk-accruing side of the TMREL.
    pub fn is_active(&self, x: f64) -> bool {
        self.direction.excess(x, self.tmrel) > 0.0
    }
}
