use crate::BoatPhysicsSpec;

pub(super) const RHO_AIR: f32 = 1.225; // kg/m^3
pub(super) const RHO_WATER: f32 = 1025.0; // seawater, kg/m^3
pub(super) const GRAVITY: f32 = 9.81;

#[inline]
pub(super) fn dynamic_pressure(rho: f32, speed: f32) -> f32 {
    0.5 * rho * speed * speed
}

// ----- Buoyancy -----

/// Upward point force for a probe at `depth` below the wave surface.
/// Zero for a dry probe; there is no downward suction term.
pub(super) fn force_buoyancy(spec: &BoatPhysicsSpec, depth: f32) -> f32 {
    if depth > 0.0 {
        depth * GRAVITY * RHO_WATER * spec.probe_volume_fraction
    } else {
        0.0
    }
}

// ----- Aerodynamics -----

pub(super) fn force_sail_drive(q_dyn: f32, spec: &BoatPhysicsSpec, c_drive: f32, eff: f32) -> f32 {
    q_dyn * spec.sail_area * c_drive * eff
}

/// Lateral sail force along body-right, signed by the side the wind is
/// coming from (`awa_sign`).
pub(super) fn force_sail_lateral(
    q_dyn: f32,
    spec: &BoatPhysicsSpec,
    c_lateral: f32,
    eff: f32,
    awa_sign: f32,
) -> f32 {
    q_dyn * spec.sail_area * c_lateral * eff * awa_sign
}

/// Heel roll torque about body-forward, signed opposite to the lateral
/// force's side and scaled by the heel damping factor.
pub(super) fn torque_sail_heel(
    q_dyn: f32,
    spec: &BoatPhysicsSpec,
    c_heel: f32,
    eff: f32,
    awa_sign: f32,
) -> f32 {
    -awa_sign * q_dyn * spec.sail_area * c_heel * eff * spec.mast_height * spec.heel_damping
}

// ----- Hydrodynamics -----

pub(super) fn force_surge_drag(spec: &BoatPhysicsSpec, surge: f32) -> f32 {
    -spec.surge_drag * surge
}

pub(super) fn force_sway_drag(spec: &BoatPhysicsSpec, sway: f32) -> f32 {
    -spec.sway_drag * sway
}

/// Quadratic keel lift opposing sway, clamped to at most twice the
/// magnitude the linear sway drag would produce. Both lateral-resistance
/// terms are kept side by side on purpose; see DESIGN.md.
pub(super) fn force_keel_lift(spec: &BoatPhysicsSpec, speed_sog: f32, sway: f32) -> f32 {
    let lift = dynamic_pressure(RHO_WATER, speed_sog) * spec.keel_area * spec.keel_lift_coeff;
    let cap = 2.0 * (sway * spec.sway_drag).abs();
    if sway > 0.0 {
        -lift.min(cap)
    } else if sway < 0.0 {
        lift.min(cap)
    } else {
        0.0
    }
}

/// Yaw torque from the rudder at full dynamic pressure. Positive
/// deflection (steer right) yields positive torque about world +Y, which
/// in this basis turns the nose toward +X (starboard). The caller gates
/// on minimum deflection and speed.
pub(super) fn torque_rudder_yaw(spec: &BoatPhysicsSpec, speed_sog: f32, rudder_deg: f32) -> f32 {
    let force = dynamic_pressure(RHO_WATER, speed_sog) * spec.rudder_area * spec.rudder_lift_coeff;
    force * (rudder_deg / spec.max_rudder_angle) * spec.rudder_lever_arm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boatspecs::sloop_spec;

    #[test]
    fn buoyancy_grows_with_depth_and_never_sucks_down() {
        let spec = sloop_spec();
        let mut prev = 0.0;
        for i in 1..=10 {
            let f = force_buoyancy(&spec, i as f32 * 0.1);
            assert!(f > prev, "buoyancy must increase with depth");
            prev = f;
        }
        assert_eq!(force_buoyancy(&spec, 0.0), 0.0);
        assert_eq!(force_buoyancy(&spec, -0.5), 0.0);
    }

    #[test]
    fn keel_lift_opposes_sway_and_respects_cap() {
        let spec = sloop_spec();
        // Large SOG, tiny sway: the 2x-linear-drag cap binds.
        let f = force_keel_lift(&spec, 8.0, 0.01);
        assert!(f < 0.0, "keel lift must oppose positive sway");
        assert!(f.abs() <= 2.0 * 0.01 * spec.sway_drag + 1e-4);
        // Mirrored sway flips the sign.
        let g = force_keel_lift(&spec, 8.0, -0.01);
        assert!((f + g).abs() < 1e-4);
        // No sway, no lift.
        assert_eq!(force_keel_lift(&spec, 8.0, 0.0), 0.0);
    }

    #[test]
    fn rudder_torque_sign_convention() {
        let spec = sloop_spec();
        // Right rudder at speed turns the nose right: positive yaw torque.
        assert!(torque_rudder_yaw(&spec, 4.0, spec.max_rudder_angle) > 0.0);
        assert!(torque_rudder_yaw(&spec, 4.0, -spec.max_rudder_angle) < 0.0);
    }
}
