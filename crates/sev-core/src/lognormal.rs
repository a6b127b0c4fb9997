//! # Log-Normal Exposure Distribution
//!
//! Exposure is described on its natural scale by a mean and a standard
//! deviation. The density is evaluated on the log scale, so the moments are
//! first converted to the location `mu` and scale `sigma` of the underlying
//! normal distribution:
//!
//! ```text
//! mu    = ln( mean / sqrt(1 + sd² / mean²) )
//! sigma = sqrt( ln(1 + sd² / mean²) )
//! ```
//!
//! and the density at `x > 0` is
//!
//! ```text
//! p(x) = 1 / (x · sigma · sqrt(2π)) · exp( -(ln x - mu)² / (2 sigma²) )
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{non_negative, positive, DomainError};

/// Location/scale of the normal distribution underlying a log-normal exposure.
///
/// Deserialization goes through [`LogNormal::from_log_params`], so a
/// document cannot smuggle in a negative or non-finite scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LogParams")]
pub struct LogNormal {
    mu: f64,
    sigma: f64,
}

/// Unvalidated wire form of [`LogNormal`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LogParams {
    mu: f64,
    sigma: f64,
}

impl TryFrom<LogParams> for LogNormal {
    type Error = DomainError;

    fn try_from(raw: LogParams) -> Result<Self, Self::Error> {
        Self::from_log_params(raw.mu, raw.sigma)
    }
}

impl LogNormal {
    /// Derive `(mu, sigma)` from the natural-scale mean and standard deviation.
    ///
    /// `sd_exposure = 0` is accepted and yields `sigma = 0`; such a
    /// distribution has no density, see [`LogNormal::density`].
    ///
    /// # Errors
    ///
    /// - `mean_exposure` is not finite or not strictly positive.
    /// - `sd_exposure` is not finite or negative.
    pub fn from_moments(mean_exposure: f64, sd_exposure: f64) -> Result<Self, DomainError> {
        let mean = positive("mean_exposure", mean_exposure)?;
        let sd = non_negative("sd_exposure", sd_exposure)?;

        let cv2 = (sd / mean).powi(2);
        let mu = (mean / (1.0 + cv2).sqrt()).ln();
        let sigma = cv2.ln_1p().sqrt();

        if !mu.is_finite() || !sigma.is_finite() {
            return Err(DomainError::UndefinedRatio {
                quantity: "log-normal parameters",
                reason: format!("mean_exposure={mean}, sd_exposure={sd} overflow the log scale"),
            });
        }
        Ok(Self { mu, sigma })
    }

    /// Construct directly from log-scale parameters.
    pub fn from_log_params(mu: f64, sigma: f64) -> Result<Self, DomainError> {
        let mu = crate::error::finite("mu", mu)?;
        let sigma = non_negative("sigma", sigma)?;
        Ok(Self { mu, sigma })
    }

    /// Log-scale location.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Log-scale scale.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Natural-scale mean, `exp(mu + sigma²/2)`.
    pub fn mean(&self) -> f64 {
        (self.mu + self.sigma * self.sigma / 2.0).exp()
    }

    /// Natural-scale standard deviation.
    pub fn sd(&self) -> f64 {
        let s2 = self.sigma * self.sigma;
        (s2.exp_m1() * (2.0 * self.mu + s2).exp()).sqrt()
    }

    /// Probability density at exposure `x`.
    ///
    /// # Errors
    ///
    /// - `x` is not finite or not strictly positive.
    /// - The distribution is degenerate (`sigma = 0`).
    pub fn density(&self, x: f64) -> Result<f64, DomainError> {
        let x = positive("x", x)?;
        if self.sigma == 0.0 {
            return Err(DomainError::DegenerateScale);
        }
        let z = (x.ln() - self.mu) / self.sigma;
        Ok((-0.5 * z * z).exp() / (x * self.sigma * (2.0 * PI).sqrt()))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Composite Simpson's rule on ln(x), where the log-normal is a Gaussian.
    fn integrate_density(d: &LogNormal) -> f64 {
        let lo = d.mu() - 12.0 * d.sigma();
        let hi = d.mu() + 12.0 * d.sigma();
        let n = 2000;
        let h = (hi - lo) / n as f64;
        let mut sum = 0.0;
        for i in 0..=n {
            let t = lo + i as f64 * h;
            let x = t.exp();
            // dx = x dt
            let f = d.density(x).unwrap_or(0.0) * x;
            let w = if i == 0 || i == n {
                1.0
            } else if i % 2 == 1 {
                4.0
            } else {
                2.0
            };
            sum += w * f;
        }
        sum * h / 3.0
    }

    proptest! {
        /// The derived scale is never negative.
        #[test]
        fn sigma_non_negative(mean in 1e-3f64..1e4, sd in 0.0f64..1e4) {
            let d = LogNormal::from_moments(mean, sd).unwrap();
            prop_assert!(d.sigma() >= 0.0);
        }

        /// Density is non-negative and finite across the support.
        #[test]
        fn density_non_negative(
            mean in 0.1f64..500.0,
            sd in 0.01f64..500.0,
            x in 1e-6f64..1e4,
        ) {
            let d = LogNormal::from_moments(mean, sd).unwrap();
            let p = d.density(x).unwrap();
            prop_assert!(p >= 0.0);
            prop_assert!(p.is_finite());
        }

        /// The density integrates to one over (0, ∞).
        #[test]
        fn density_integrates_to_one(mean in 0.5f64..200.0, cv in 0.05f64..2.0) {
            let d = LogNormal::from_moments(mean, mean * cv).unwrap();
            let total = integrate_density(&d);
            prop_assert!((total - 1.0).abs() < 1e-6, "integral = {}", total);
        }

        /// The density vanishes at both ends of the support.
        #[test]
        fn density_vanishes_in_tails(mean in 1.0f64..100.0, cv in 0.1f64..1.0) {
            let d = LogNormal::from_moments(mean, mean * cv).unwrap();
            prop_assert!(d.density(1e-12).unwrap() < 1e-12);
            prop_assert!(d.density(mean * 1e6).unwrap() < 1e-12);
        }
    }
}
