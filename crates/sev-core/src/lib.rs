//! # sev-core — Exposure-Weighted Relative-Risk Integrand
//!
//! The evaluation kernel behind summary exposure value (SEV) and population
//! attributable fraction (PAF) calculations. A numerical-integration host
//! calls it at many exposure points to approximate
//!
//! ```text
//! E[RR] = ∫ p(x) · RR(x) dx
//! ```
//!
//! where `p` is a log-normal exposure density and `RR` is a directional,
//! capped relative-risk curve anchored at the theoretical minimum risk
//! exposure level (TMREL).
//!
//! - **Log-normal** (`lognormal.rs`): moment-to-log-scale transform and density.
//! - **Relative risk** (`relative_risk.rs`): `min(rr_mean^d, rr_max)` on the
//!   risk-accruing side of the TMREL, `1` elsewhere.
//! - **Integrand** (`integrand.rs`): density × multiplier, as a free function,
//!   a named request, or a pre-validated kernel.
//! - **Summary** (`summary.rs`): `E[RR]` → SEV → PAF.
//! - **Config** (`config.rs`): YAML/JSON risk-factor parameter sets.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Evaluation never allocates, touches shared state or performs I/O.
//! - Out-of-domain inputs produce a typed [`SevError`], never a bare NaN.

pub mod config;
pub mod direction;
pub mod error;
pub mod integrand;
pub mod lognormal;
pub mod relative_risk;
pub mod summary;

pub use config::{ExposureMoments, RiskFactorConfig};
pub use direction::RiskDirection;
pub use error::{DomainError, SevError};
pub use integrand::{evaluate, EvaluationRequest, ExposureRisk};
pub use lognormal::LogNormal;
pub use relative_risk::RiskCurve;
pub use summary::{
    population_attributable_fraction, risk_scalar, summary_exposure_value, SevSummary,
};
