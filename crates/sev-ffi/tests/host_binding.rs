//! Drives the C entry point the way a quadrature host does: a fixed
//! parameter tail with only `x` varying between calls.

use std::os::raw::c_int;

use sev_core::{ExposureRisk, RiskDirection, SevSummary};

fn call(args: &[f64]) -> f64 {
    unsafe { sev_ffi::f(args.len() as c_int, args.as_ptr()) }
}

#[test]
fn test_host_style_quadrature_matches_kernel() {
    let (mean, sd, tmrel, rr_mean, rr_max) = (40.0, 20.0, 35.0, 1.05, 3.0);
    let kernel =
        ExposureRisk::new(mean, sd, tmrel, rr_mean, rr_max, RiskDirection::HarmfulAbove).unwrap();

    let (lo, hi, n) = (0.5, 300.0, 6000);
    let h = (hi - lo) / n as f64;
    let mut via_ffi = 0.0;
    let mut via_kernel = 0.0;
    for i in 0..n {
        let x = lo + (i as f64 + 0.5) * h;
        via_ffi += call(&[x, mean, sd, tmrel, rr_mean, rr_max, 0.0]) * h;
        via_kernel += kernel.integrand(x).unwrap() * h;
    }
    assert_eq!(via_ffi, via_kernel);

    let summary = SevSummary::from_expected_rr(via_ffi, rr_max).unwrap();
    assert!(summary.sev > 0.0 && summary.sev < 1.0);
}

#[test]
fn test_flag_values_outside_zero_and_one_are_nan() {
    for flag in [2.0, -1.0, 0.9999] {
        assert!(call(&[30.0, 40.0, 20.0, 35.0, 1.05, 3.0, flag]).is_nan());
    }
}

#[test]
fn test_init_logging_is_idempotent() {
    let first = sev_ffi::sev_init_logging(0);
    assert!(first == 0 || first == -1);
    assert_eq!(sev_ffi::sev_init_logging(1), -1);
}
