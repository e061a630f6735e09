use bevy_math::{Vec2, Vec3};

use super::terms::*;
use super::types::{
    BuoyancyProbe, DerivedState, QualityTier, StepDebug, Submersion, VesselInputs,
};
use super::util::{flat_axis_or, heel_angle_deg, lift_xz, wrap_angle_deg, BODY_FWD, BODY_RIGHT};
use crate::{BoatPhysicsSpec, EffectEvent, EffectSink, RigidBody, SailPolarTable, WaveField, WindField};

/// Apparent wind below this speed is treated as calm: the aerodynamic
/// step is skipped rather than dividing by noise.
const MIN_APPARENT_WIND: f32 = 0.1;
/// Minimum SOG for leeway and rudder authority.
const MIN_STEERAGE_SOG: f32 = 0.1;
/// Rudder deflections below this are treated as centered.
const MIN_RUDDER_DEG: f32 = 0.5;
/// |AWA| beyond this raises the gybe warning.
const GYBE_WARNING_DEG: f32 = 160.0;

/// One playable sailing vessel. Owns its control and derived state and
/// its buoyancy probe memory; borrows the rigid body, wind field, wave
/// field and effects bus each frame.
///
/// Protocol per simulated frame (ordering is a correctness requirement,
/// the body integrates between the two calls):
/// 1. `pre_physics` — consume the input snapshot.
/// 2. external engine integrates the previously accumulated forces.
/// 3. `post_physics` — read the integrated motion, accumulate this
///    frame's forces and torques for the next integration.
#[derive(Debug, Clone)]
pub struct SailingVessel {
    spec: BoatPhysicsSpec,
    polar: SailPolarTable,
    probes: Vec<BuoyancyProbe>,
    // Control state
    sail_trim: f32,
    rudder_angle: f32,
    tacking: bool,
    /// Remaining tack duration in simulation time, advanced by `dt` in
    /// `post_physics` so pausing the simulation pauses the tack.
    tack_timer: f32,
    derived: DerivedState,
}

impl SailingVessel {
    pub fn new(spec: BoatPhysicsSpec, quality: QualityTier) -> Self {
        let probes = quality
            .probe_offsets()
            .iter()
            .copied()
            .map(BuoyancyProbe::new)
            .collect();
        Self {
            spec,
            polar: SailPolarTable,
            probes,
            sail_trim: 45.0,
            rudder_angle: 0.0,
            tacking: false,
            tack_timer: 0.0,
            derived: DerivedState::default(),
        }
    }

    // ----- Read accessors (rendering/audio/UI) -----

    pub fn derived(&self) -> &DerivedState {
        &self.derived
    }

    pub fn sail_trim(&self) -> f32 {
        self.sail_trim
    }

    /// Set trim directly (autopilot or UI slider paths), clamped to the
    /// spec range. Keyboard trim goes through `pre_physics`.
    pub fn set_sail_trim(&mut self, trim_deg: f32) {
        self.sail_trim = trim_deg.clamp(self.spec.min_trim, self.spec.max_trim);
    }

    pub fn rudder_angle(&self) -> f32 {
        self.rudder_angle
    }

    pub fn is_tacking(&self) -> bool {
        self.tacking
    }

    pub fn spec(&self) -> &BoatPhysicsSpec {
        &self.spec
    }

    /// Boat-local stern offset transformed to world space; pure read,
    /// used by external wake effects.
    pub fn stern_world_position<B: RigidBody>(&self, body: &B) -> Vec3 {
        body.translation() + body.rotation() * self.spec.stern_offset
    }

    // ----- Per-frame protocol -----

    /// Consume one input snapshot. Pure input handling: no forces are
    /// produced here except the one-shot tack impulse. Trim and rudder
    /// rates are per invocation, not dt-scaled; the driver is expected to
    /// call this at a fixed step.
    pub fn pre_physics<B: RigidBody>(&mut self, inputs: &VesselInputs, body: &mut B) {
        if inputs.trim_in {
            self.sail_trim = (self.sail_trim - self.spec.trim_step).max(self.spec.min_trim);
        }
        if inputs.trim_out {
            self.sail_trim = (self.sail_trim + self.spec.trim_step).min(self.spec.max_trim);
        }

        let steer = (inputs.steer_right as i32 - inputs.steer_left as i32) as f32;
        self.rudder_angle = steer * self.spec.max_rudder_angle;

        if inputs.tack {
            self.initiate_tack(body);
        }
    }

    /// Begin a tack: a fixed-magnitude yaw impulse toward the side the
    /// wind is not on, expiring after `spec.tack_duration` of simulation
    /// time. A request while already tacking is ignored; there is no
    /// mid-tack cancellation.
    pub fn initiate_tack<B: RigidBody>(&mut self, body: &mut B) {
        if self.tacking {
            return;
        }
        self.tacking = true;
        self.tack_timer = self.spec.tack_duration;
        let dir = if self.derived.apparent_wind_angle > 0.0 { -1.0 } else { 1.0 };
        body.apply_torque_impulse(Vec3::Y * (dir * self.spec.tack_impulse));
    }

    /// Read the integrated motion and accumulate every force contribution
    /// for the next step. `elapsed` is total simulation time, fed to the
    /// wave field.
    pub fn post_physics<B, W, E>(
        &mut self,
        body: &mut B,
        wind: &W,
        waves: &WaveField,
        effects: &mut E,
        dt: f32,
        elapsed: f32,
    ) where
        B: RigidBody,
        W: WindField,
        E: EffectSink,
    {
        self.post_physics_dbg(body, wind, waves, effects, dt, elapsed, None);
    }

    /// Variant of `post_physics` that fills out an optional debug
    /// telemetry struct.
    #[allow(clippy::too_many_arguments)]
    pub fn post_physics_dbg<B, W, E>(
        &mut self,
        body: &mut B,
        wind: &W,
        waves: &WaveField,
        effects: &mut E,
        dt: f32,
        elapsed: f32,
        mut dbg: Option<&mut StepDebug>,
    ) where
        B: RigidBody,
        W: WindField,
        E: EffectSink,
    {
        if dt <= 0.0 {
            return;
        }

        // Tack expiry runs on simulation time, not wall clock.
        if self.tacking {
            self.tack_timer -= dt;
            if self.tack_timer <= 0.0 {
                self.tacking = false;
                self.tack_timer = 0.0;
            }
        }

        let position = body.translation();
        let rotation = body.rotation();
        let velocity = body.linvel_xz();

        self.derived.speed_sog = velocity.length();
        self.derived.heel_angle = heel_angle_deg(rotation);

        // Body axes flattened to the world XZ plane, with safe fallbacks
        // for degenerate orientations.
        let forward = flat_axis_or(rotation * BODY_FWD, Vec2::new(0.0, 1.0));
        let right = flat_axis_or(rotation * BODY_RIGHT, Vec2::new(1.0, 0.0));

        // --- Buoyancy ---
        let mut submerged = 0u32;
        let mut buoyancy_total = 0.0f32;
        for probe in &mut self.probes {
            let world = position + rotation * probe.offset;
            let depth = waves.height(world.x, world.z, elapsed) - world.y;
            let f = force_buoyancy(&self.spec, depth);
            if f > 0.0 {
                body.add_force_at_point(Vec3::Y * f, world);
                submerged += 1;
                buoyancy_total += f;
            }
            // Dry → Wet edge at the splash threshold fires exactly once.
            if depth > self.spec.splash_threshold {
                if probe.submersion == Submersion::Dry {
                    probe.submersion = Submersion::Wet;
                    effects.trigger(EffectEvent::Splash { position: world });
                }
            } else {
                probe.submersion = Submersion::Dry;
            }
        }

        // --- Apparent wind ---
        let true_wind = wind.wind_at(position.x, position.z);
        let apparent = true_wind - velocity;
        let aws = apparent.length();
        self.derived.apparent_wind_speed = aws;
        let boat_heading = forward.x.atan2(forward.y);
        if aws >= MIN_APPARENT_WIND {
            let wind_heading = apparent.x.atan2(apparent.y);
            self.derived.apparent_wind_angle =
                wrap_angle_deg((wind_heading - boat_heading).to_degrees());
        }
        let awa = self.derived.apparent_wind_angle;

        // --- Aerodynamic forces ---
        let mut q_dyn = 0.0;
        let mut coeffs = None;
        let mut optimal = 0.0;
        let mut f_drive = 0.0;
        let mut f_lateral = 0.0;
        let mut tau_heel = 0.0;
        if aws < MIN_APPARENT_WIND {
            // Becalmed: no sail forces, no warnings.
            self.derived.luffing = false;
            self.derived.gybe_warning = false;
            self.derived.sail_efficiency = 0.0;
        } else {
            self.derived.luffing = awa.abs() < crate::LUFF_ANGLE_DEG;
            self.derived.gybe_warning = awa.abs() > GYBE_WARNING_DEG;
            if self.derived.luffing {
                self.derived.sail_efficiency = 0.0;
                effects.trigger(EffectEvent::Luffing);
            } else {
                let c = self.polar.coefficients(awa);
                optimal = self.polar.optimal_trim(awa);
                let eff = self.polar.trim_efficiency(self.sail_trim, optimal);
                self.derived.sail_efficiency = eff;
                q_dyn = dynamic_pressure(RHO_AIR, aws);
                let awa_sign = if awa >= 0.0 { 1.0 } else { -1.0 };
                f_drive = force_sail_drive(q_dyn, &self.spec, c.drive, eff);
                f_lateral = force_sail_lateral(q_dyn, &self.spec, c.lateral, eff, awa_sign);
                tau_heel = torque_sail_heel(q_dyn, &self.spec, c.heel, eff, awa_sign);
                body.add_force(lift_xz(forward * f_drive));
                body.add_force(lift_xz(right * f_lateral));
                // Roll torque about the boat's forward axis.
                body.add_torque(lift_xz(forward * tau_heel));
                coeffs = Some(c);
            }
        }

        // --- Hydrodynamic drag ---
        let surge = velocity.dot(forward);
        let sway = velocity.dot(right);
        let f_surge_drag = force_surge_drag(&self.spec, surge);
        let f_sway_drag = force_sway_drag(&self.spec, sway);
        body.add_force(lift_xz(forward * f_surge_drag));
        body.add_force(lift_xz(right * f_sway_drag));
        self.derived.leeway_angle = if self.derived.speed_sog > MIN_STEERAGE_SOG {
            sway.atan2(surge).to_degrees()
        } else {
            0.0
        };

        // --- Keel lift ---
        let f_keel = force_keel_lift(&self.spec, self.derived.speed_sog, sway);
        if f_keel != 0.0 {
            body.add_force(lift_xz(right * f_keel));
        }

        // --- Rudder ---
        let mut tau_rudder = 0.0;
        if self.rudder_angle.abs() >= MIN_RUDDER_DEG && self.derived.speed_sog > MIN_STEERAGE_SOG {
            tau_rudder = torque_rudder_yaw(&self.spec, self.derived.speed_sog, self.rudder_angle);
            body.add_torque(Vec3::Y * tau_rudder);
        }

        if let Some(d) = dbg.as_mut() {
            d.dt = dt;
            d.elapsed = elapsed;
            d.forward_xz = forward;
            d.right_xz = right;
            d.wind = true_wind;
            d.apparent = apparent;
            d.q_dyn = q_dyn;
            d.coeffs = coeffs;
            d.optimal_trim = optimal;
            d.f_drive = f_drive;
            d.f_lateral = f_lateral;
            d.tau_heel = tau_heel;
            d.surge = surge;
            d.sway = sway;
            d.f_surge_drag = f_surge_drag;
            d.f_sway_drag = f_sway_drag;
            d.f_keel = f_keel;
            d.tau_rudder = tau_rudder;
            d.submerged_probes = submerged;
            d.buoyancy_total_n = buoyancy_total;
        }
    }
}
