//! # Risk-Factor Configuration
//!
//! Parameter sets for a (risk, cause) pair, loaded from YAML or JSON and
//! validated into an [`ExposureRisk`] kernel:
//!
//! ```yaml
//! name: fruit_intake
//! exposure:
//!   mean: 40.0
//!   sd: 20.0
//! tmrel: 35.0
//! rr_mean: 1.05
//! rr_max: 3.0
//! direction: protective_below
//! ```

use serde::{Deserialize, Serialize};

use crate::direction::RiskDirection;
use crate::error::SevError;
use crate::integrand::ExposureRisk;

/// Natural-scale moments of the exposure distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExposureMoments {
    pub mean: f64,
    pub sd: f64,
}

/// One risk factor's exposure distribution and relative-risk curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiskFactorConfig {
    /// Human-readable risk identifier.
    #[serde(default)]
    pub name: Option<String>,
    pub exposure: ExposureMoments,
    pub tmrel: f64,
    pub rr_mean: f64,
    pub rr_max: f64,
    pub direction: RiskDirection,
}

impl RiskFactorConfig {
    /// Parse a single risk factor from YAML.
    pub fn from_yaml_str(s: &str) -> Result<Self, SevError> {
        serde_yaml::from_str(s)
            .map_err(|e| SevError::Serialization(format!("invalid YAML risk factor: {e}")))
    }

    /// Parse a single risk factor from JSON.
    pub fn from_json_str(s: &str) -> Result<Self, SevError> {
        serde_json::from_str(s)
            .map_err(|e| SevError::Serialization(format!("invalid JSON risk factor: {e}")))
    }

    /// Parse a YAML sequence of risk factors.
    pub fn list_from_yaml_str(s: &str) -> Result<Vec<Self>, SevError> {
        serde_yaml::from_str(s)
            .map_err(|e| SevError::Serialization(format!("invalid YAML risk factor list: {e}")))
    }

    /// Validate the parameters and build the evaluation kernel.
    ///
    /// # Errors
    ///
    /// - [`SevError::Config`] if `name` is present but blank.
    /// - [`SevError::Domain`] if any numeric parameter is out of domain.
    pub fn build(&self) -> Result<ExposureRisk, SevError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(SevError::Config("risk factor name must not be blank".into()));
            }
        }
        ExposureRisk::new(
            self.exposure.mean,
            self.exposure.sd,
            self.tmrel,
            self.rr_mean,
            self.rr_max,
            self.direction,
        )
    }
}

impl From<&ExposureRisk> for RiskFactorConfig {
    fn from(kernel: &ExposureRisk) -> Self {
        let curve = kernel.curve();
        Self {
            name: None,
            exposure: ExposureMoments {
                mean: kernel.exposure().mean(),
                sd: kernel.exposure().sd(),
            },
            tmrel: curve.tmrel(),
            rr_mean: curve.rr_mean(),
            rr_max: curve.rr_max(),
            direction: curve.direction(),
        }
    }
}
