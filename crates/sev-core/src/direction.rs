//! # Risk Direction
//!
//! Selects which side of the TMREL accrues relative risk. Historically the
//! direction travelled as a numeric flag (`1` for protective risk factors,
//! `0` for harmful ones) inside the positional argument array handed to the
//! integration host. [`RiskDirection::from_flag`] decodes that encoding and
//! rejects every other value instead of silently treating it as harmful.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SevError;

/// Which side of the TMREL carries the relative-risk multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDirection {
    /// Exposure below the TMREL raises risk as it falls further below
    /// (beneficial risk factors). Legacy flag `1`.
    ProtectiveBelow,
    /// Exposure above the TMREL raises risk as it climbs further above
    /// (detrimental risk factors). Legacy flag `0`.
    HarmfulAbove,
}

impl RiskDirection {
    /// Both directions.
    pub fn all() -> &'static [RiskDirection] {
        &[Self::ProtectiveBelow, Self::HarmfulAbove]
    }

    /// Decode the legacy numeric flag.
    ///
    /// Only exactly `1.0` and `0.0` are recognized. Fractional values, other
    /// integers and NaN are rejected.
    pub fn from_flag(flag: f64) -> Result<Self, SevError> {
        if flag == 1.0 {
            Ok(Self::ProtectiveBelow)
        } else if flag == 0.0 {
            Ok(Self::HarmfulAbove)
        } else {
            Err(SevError::InvalidArgument(format!(
                "direction flag must be 1 (protective_below) or 0 (harmful_above), got {flag}"
            )))
        }
    }

    /// Encode as the legacy numeric flag.
    pub fn as_flag(&self) -> f64 {
        match self {
            Self::ProtectiveBelow => 1.0,
            Self::HarmfulAbove => 0.0,
        }
    }

    /// Signed distance from the TMREL into the risk-accruing side.
    ///
    /// Positive only when `x` lies strictly on the active side.
    pub fn excess(&self, x: f64, tmrel: f64) -> f64 {
        match self {
            Self::ProtectiveBelow => tmrel - x,
            Self::HarmfulAbove => x - tmrel,
        }
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProtectiveBelow => "protective_below",
            Self::HarmfulAbove => "harmful_above",
        }
    }
}

impl std::fmt::Display for RiskDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskDirection {
    type Err = SevError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protective_below" => Ok(Self::ProtectiveBelow),
            "harmful_above" => Ok(Self::HarmfulAbove),
            other => Err(SevError::InvalidArgument(format!(
                "unknown risk direction: {other:?}"
            ))),
        }
    }
}

impl TryFrom<f64> for RiskDirection {
    type Error = SevError;

    fn try_from(flag: f64) -> Result<Self, Self::Error> {
        Self::from_flag(flag)
    }
}
