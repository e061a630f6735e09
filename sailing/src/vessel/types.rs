use bevy_math::{Vec2, Vec3};

use crate::SailCoefficients;

/// Per-frame input snapshot, polled once per `pre_physics`. `tack` is
/// edge-triggered; the embedder clears it after delivery so a held key
/// does not re-fire.
#[derive(Debug, Clone, Copy, Default)]
pub struct VesselInputs {
    pub trim_in: bool,
    pub trim_out: bool,
    pub steer_left: bool,
    pub steer_right: bool,
    pub tack: bool,
}

/// Read-only outputs recomputed every `post_physics` for rendering,
/// audio and UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivedState {
    /// Signed apparent wind angle, degrees in (−180, 180].
    pub apparent_wind_angle: f32,
    /// |wind − boat velocity| (m/s).
    pub apparent_wind_speed: f32,
    /// Trim efficiency in [0, 1]; 0 while luffing or becalmed.
    pub sail_efficiency: f32,
    /// Angle between heading and track over water, degrees.
    pub leeway_angle: f32,
    /// Speed over ground (m/s).
    pub speed_sog: f32,
    /// Roll angle about the forward axis, degrees.
    pub heel_angle: f32,
    pub luffing: bool,
    pub gybe_warning: bool,
}

/// Probe wetness; the `Dry → Wet` edge fires a splash exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submersion {
    Dry,
    Wet,
}

/// One buoyancy sample point, fixed in boat-local space.
#[derive(Debug, Clone, Copy)]
pub struct BuoyancyProbe {
    pub offset: Vec3,
    pub submersion: Submersion,
}

impl BuoyancyProbe {
    pub fn new(offset: Vec3) -> Self {
        Self { offset, submersion: Submersion::Dry }
    }
}

/// Simulation quality tier. Only the buoyancy probe count depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityTier {
    Low,
    #[default]
    High,
}

impl QualityTier {
    /// Probe layout: a single center probe at low quality; center plus
    /// bow/stern/port/starboard at high quality.
    pub fn probe_offsets(self) -> &'static [Vec3] {
        const CENTER: Vec3 = Vec3::new(0.0, -0.2, 0.0);
        const FULL: [Vec3; 5] = [
            CENTER,
            Vec3::new(0.0, -0.2, 2.2),   // bow
            Vec3::new(0.0, -0.2, -2.2),  // stern
            Vec3::new(-1.1, -0.2, 0.0),  // port
            Vec3::new(1.1, -0.2, 0.0),   // starboard
        ];
        match self {
            QualityTier::Low => &FULL[..1],
            QualityTier::High => &FULL,
        }
    }
}

/// Optional per-step telemetry for debug overlays and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepDebug {
    pub dt: f32,
    pub elapsed: f32,
    // Orientation basis flattened to the world XZ plane
    pub forward_xz: Vec2,
    pub right_xz: Vec2,
    // Wind
    pub wind: Vec2,
    pub apparent: Vec2,
    // Aerodynamics
    pub q_dyn: f32,
    pub coeffs: Option<SailCoefficients>,
    pub optimal_trim: f32,
    pub f_drive: f32,
    pub f_lateral: f32,
    pub tau_heel: f32,
    // Hydrodynamics
    pub surge: f32,
    pub sway: f32,
    pub f_surge_drag: f32,
    pub f_sway_drag: f32,
    pub f_keel: f32,
    pub tau_rudder: f32,
    // Buoyancy
    pub submerged_probes: u32,
    pub buoyancy_total_n: f32,
}
