//! Sail polar: non-dimensional aerodynamic coefficients keyed by apparent
//! wind angle, plus the optimal-trim and trim-efficiency helpers.

/// Aerodynamic coefficients at one apparent wind angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SailCoefficients {
    pub drive: f32,
    pub lateral: f32,
    pub heel: f32,
}

impl SailCoefficients {
    pub const ZERO: Self = Self { drive: 0.0, lateral: 0.0, heel: 0.0 };
}

/// Angle below which the sail produces no usable force (dead-ahead wind).
pub const LUFF_ANGLE_DEG: f32 = 30.0;

/// Gaussian width of the trim-efficiency falloff, in degrees of mis-trim.
const TRIM_SIGMA_DEG: f32 = 12.0;

// (angle_deg, drive, lateral, heel). Strictly increasing in angle; the
// first two rows encode the luff zone explicitly.
const BREAKPOINTS: [(f32, f32, f32, f32); 8] = [
    (0.0, 0.0, 0.0, 0.0),
    (30.0, 0.0, 0.0, 0.0),
    (45.0, 0.35, 0.65, 0.55),
    (60.0, 0.55, 0.60, 0.50),
    (90.0, 0.85, 0.35, 0.35),
    (120.0, 0.75, 0.20, 0.20),
    (150.0, 0.55, 0.10, 0.10),
    (180.0, 0.40, 0.05, 0.05),
];

/// Static sail polar table. All methods take the signed apparent wind
/// angle in degrees and are symmetric under sign flip.
#[derive(Debug, Clone, Copy, Default)]
pub struct SailPolarTable;

impl SailPolarTable {
    /// Coefficients at `awa_deg`, linearly interpolated between the
    /// bracketing breakpoints. Exactly zero inside the luff zone.
    pub fn coefficients(&self, awa_deg: f32) -> SailCoefficients {
        let a = awa_deg.abs();
        if a < LUFF_ANGLE_DEG {
            return SailCoefficients::ZERO;
        }
        let last = BREAKPOINTS[BREAKPOINTS.len() - 1];
        if a >= last.0 {
            return SailCoefficients { drive: last.1, lateral: last.2, heel: last.3 };
        }
        // a is within [30, 180) here, so a bracketing pair always exists.
        let mut lo = BREAKPOINTS[0];
        for hi in BREAKPOINTS.iter().skip(1) {
            if a <= hi.0 {
                let t = (a - lo.0) / (hi.0 - lo.0);
                return SailCoefficients {
                    drive: lo.1 + (hi.1 - lo.1) * t,
                    lateral: lo.2 + (hi.2 - lo.2) * t,
                    heel: lo.3 + (hi.3 - lo.3) * t,
                };
            }
            lo = *hi;
        }
        SailCoefficients { drive: last.1, lateral: last.2, heel: last.3 }
    }

    /// Trim angle that maximizes efficiency at `awa_deg`. Linear past the
    /// luff boundary, saturating at 5° close-hauled and 88° downwind.
    pub fn optimal_trim(&self, awa_deg: f32) -> f32 {
        ((awa_deg.abs() - LUFF_ANGLE_DEG) * 83.0 / 150.0).clamp(5.0, 88.0)
    }

    /// Gaussian efficiency falloff with mis-trim; 1.0 at the optimum,
    /// approaching 0 for gross mis-trim, always in (0, 1].
    pub fn trim_efficiency(&self, trim_deg: f32, optimal_deg: f32) -> f32 {
        let dev = trim_deg - optimal_deg;
        (-(dev * dev) / (2.0 * TRIM_SIGMA_DEG * TRIM_SIGMA_DEG)).exp()
    }
}
