//! # sev-ffi — C ABI Binding for Integration Hosts
//!
//! Exposes the integrand under the symbol and signature that quadrature
//! hosts already bind against when they load the kernel as a shared object:
//!
//! ```c
//! double f(int n, double args[n]);
//! ```
//!
//! with `args = [x, mean_exposure, sd_exposure, tmrel, rr_mean, rr_max, flag]`
//! and `flag` equal to `1` (protective below the TMREL) or `0` (harmful above
//! it). A host drives it as `quad(f, lo, hi, args=(mean, sd, tmrel, rr_mean,
//! rr_max, flag))`.
//!
//! A C `double` cannot carry a typed error, so every rejected evaluation
//! returns NaN and emits a `tracing` warning. [`evaluate_args`] is the safe
//! Rust core of the binding and keeps the typed error.

use std::os::raw::c_int;

use sev_core::{evaluate, RiskDirection, SevError};

/// Number of leading `args` entries the binding reads.
pub const ARG_COUNT: usize = 7;

/// Decode the positional argument array and evaluate.
///
/// Entries past [`ARG_COUNT`] are ignored.
pub fn evaluate_args(args: &[f64]) -> Result<f64, SevError> {
    let &[x, mean_exposure, sd_exposure, tmrel, rr_mean, rr_max, flag, ..] = args else {
        return Err(SevError::InvalidArgument(format!(
            "expected at least {ARG_COUNT} arguments, got {}",
            args.len()
        )));
    };
    let direction = RiskDirection::from_flag(flag)?;
    evaluate(x, mean_exposure, sd_exposure, tmrel, rr_mean, rr_max, direction)
}

/// Integrand entry point for C callers.
///
/// Returns NaN when `args` is null, `n` is too small, or evaluation fails.
///
/// # Safety
///
/// `args` must be null or point to at least `n` readable, initialized
/// `f64` values for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn f(n: c_int, args: *const f64) -> f64 {
    let len = match usize::try_from(n) {
        Ok(len) if !args.is_null() => len,
        _ => {
            tracing::warn!(n, null = args.is_null(), "rejected integrand argument array");
            return f64::NAN;
        }
    };
    // SAFETY: non-null and `len` elements readable per the contract above.
    let args = unsafe { std::slice::from_raw_parts(args, len) };
    match evaluate_args(args) {
        Ok(y) => y,
        Err(e) => {
            tracing::warn!(error = %e, "integrand evaluation rejected; returning NaN");
            f64::NAN
        }
    }
}

/// Install a `tracing` subscriber for hosts that have none.
///
/// Honors `RUST_LOG`; with `json` non-zero, emits JSON lines. Returns `0` on
/// success and `-1` if a global subscriber was already installed.
#[no_mangle]
pub extern "C" fn sev_init_logging(json: c_int) -> c_int {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    let result = if json != 0 {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    match result {
        Ok(()) => 0,
        Err(_) => -1,
    }
}
