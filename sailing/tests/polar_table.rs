use sailing::{SailCoefficients, SailPolarTable};

const POLAR: SailPolarTable = SailPolarTable;

fn assert_coeffs(awa: f32, expected: (f32, f32, f32)) {
    let c = POLAR.coefficients(awa);
    assert!(
        (c.drive - expected.0).abs() < 1e-6
            && (c.lateral - expected.1).abs() < 1e-6
            && (c.heel - expected.2).abs() < 1e-6,
        "coefficients({}) = {:?}, expected {:?}",
        awa,
        c,
        expected
    );
}

#[test]
fn luff_zone_is_exactly_zero() {
    for awa in [0.0, 5.0, 15.0, 29.9, -10.0, -29.9] {
        assert_eq!(POLAR.coefficients(awa), SailCoefficients::ZERO, "awa={}", awa);
    }
}

#[test]
fn breakpoints_are_returned_exactly() {
    assert_coeffs(45.0, (0.35, 0.65, 0.55));
    assert_coeffs(90.0, (0.85, 0.35, 0.35));
    assert_coeffs(180.0, (0.40, 0.05, 0.05));
}

#[test]
fn interpolation_at_midpoint() {
    // Midpoint of the 45°/60° rows.
    assert_coeffs(52.5, (0.45, 0.625, 0.525));
}

#[test]
fn table_is_symmetric_in_sign() {
    let mut awa = -180.0f32;
    while awa <= 180.0 {
        assert_eq!(POLAR.coefficients(awa), POLAR.coefficients(-awa), "awa={}", awa);
        awa += 2.5;
    }
}

#[test]
fn drive_rises_from_luff_boundary_to_beam_reach() {
    let mut prev = POLAR.coefficients(31.0).drive;
    for awa in [40, 50, 60, 70, 80, 90] {
        let d = POLAR.coefficients(awa as f32).drive;
        assert!(d > prev, "drive should increase up to 90° (awa={})", awa);
        prev = d;
    }
}

#[test]
fn optimal_trim_boundaries() {
    assert!((POLAR.optimal_trim(30.0) - 5.0).abs() < 1e-6, "clamped minimum");
    assert!((POLAR.optimal_trim(180.0) - 83.0).abs() < 1e-4, "unclamped linear result");
    assert!((POLAR.optimal_trim(-180.0) - 83.0).abs() < 1e-4, "sign symmetric");
    // Monotone past the luff boundary.
    let mut prev = POLAR.optimal_trim(40.0);
    for awa in [60.0, 90.0, 120.0, 150.0, 179.0] {
        let t = POLAR.optimal_trim(awa);
        assert!(t > prev, "optimal trim must increase with wind angle");
        prev = t;
    }
}

#[test]
fn trim_efficiency_peaks_at_optimum() {
    for t in [5.0, 20.0, 45.0, 88.0] {
        assert_eq!(POLAR.trim_efficiency(t, t), 1.0, "trim={}", t);
    }
}

#[test]
fn trim_efficiency_decreases_with_deviation_and_is_symmetric() {
    let optimal = 40.0;
    let mut prev = 1.0;
    for dev in 1..=30 {
        let e = POLAR.trim_efficiency(optimal + dev as f32, optimal);
        assert!(e < prev && e > 0.0, "dev={}", dev);
        // Symmetric under trim → 2·optimal − trim.
        let mirrored = POLAR.trim_efficiency(optimal - dev as f32, optimal);
        assert!((e - mirrored).abs() < 1e-7, "dev={}", dev);
        prev = e;
    }
}
