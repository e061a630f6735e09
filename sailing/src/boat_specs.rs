use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

/// Precomputed physics parameters for a specific sailing hull class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatPhysicsSpec {
    /// Sail area (m²).
    pub sail_area: f32,
    /// Heel lever arm: height of the sail's center of effort (m).
    pub mast_height: f32,
    /// Scale on the heel roll torque.
    pub heel_damping: f32,
    /// Linear drag against surge (fore-aft) velocity (N·s/m).
    pub surge_drag: f32,
    /// Linear drag against sway (sideways) velocity (N·s/m). Much larger
    /// than `surge_drag`: the hull resists slip far harder than headway.
    pub sway_drag: f32,
    /// Keel planform area (m²).
    pub keel_area: f32,
    /// Keel lift coefficient for the quadratic lateral-resistance term.
    pub keel_lift_coeff: f32,
    /// Rudder blade area (m²).
    pub rudder_area: f32,
    /// Rudder lift coefficient.
    pub rudder_lift_coeff: f32,
    /// Rudder lever arm about the yaw axis (m).
    pub rudder_lever_arm: f32,
    /// Full-deflection rudder angle (degrees).
    pub max_rudder_angle: f32,
    /// Trim change per input tick (degrees, unscaled by dt).
    pub trim_step: f32,
    /// Sail trim clamp (degrees).
    pub min_trim: f32,
    pub max_trim: f32,
    /// Yaw torque impulse magnitude applied when a tack starts (N·m·s).
    pub tack_impulse: f32,
    /// Simulation-time duration of a tack (s).
    pub tack_duration: f32,
    /// Displaced-volume fraction credited to each buoyancy probe.
    pub probe_volume_fraction: f32,
    /// Probe depth past which a surfacing transition counts as a splash (m).
    pub splash_threshold: f32,
    /// Stern point in boat-local space, used by wake effects.
    pub stern_offset: Vec3,
}

pub mod boatspecs {
    use super::*;

    // Sensible defaults for a small single-sail sloop (SI units).
    pub fn sloop_spec() -> BoatPhysicsSpec {
        BoatPhysicsSpec {
            sail_area: 48.0,
            mast_height: 9.0,
            heel_damping: 0.3,
            surge_drag: 400.0,
            sway_drag: 1800.0,
            keel_area: 0.45,
            keel_lift_coeff: 1.2,
            rudder_area: 0.35,
            rudder_lift_coeff: 0.8,
            rudder_lever_arm: 0.5,
            max_rudder_angle: 30.0,
            trim_step: 1.5,
            min_trim: 2.0,
            max_trim: 90.0,
            tack_impulse: 800.0,
            tack_duration: 3.0,
            probe_volume_fraction: 0.08,
            splash_threshold: 0.05,
            stern_offset: Vec3::new(0.0, 0.4, -2.6),
        }
    }
}
