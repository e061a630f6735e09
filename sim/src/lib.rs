//! Headless fixed-step driver for the sailing physics core.
//!
//! Owns the pieces the core treats as external collaborators: a minimal
//! rigid-body integrator, the frame loop that guarantees the
//! pre-physics → integrate → post-physics ordering, and the ambient
//! config/logging stack. Rendering and input devices have no place here.

use std::path::Path;

use anyhow::{Context, Result};
use bevy_math::{Quat, Vec2, Vec3};
use clap::Parser;
use serde::Deserialize;
use tracing::{debug, info};

use sailing::{
    boatspecs, ConstantWind, EffectEvent, EffectSink, QualityTier, RigidBody, SailPolarTable,
    SailingVessel, VesselInputs, WaveComponent, WaveField,
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Headless sailing-physics driver")]
pub struct Args {
    /// Path to a TOML config; built-in defaults when omitted.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityCfg {
    Low,
    High,
}

impl From<QualityCfg> for QualityTier {
    fn from(q: QualityCfg) -> Self {
        match q {
            QualityCfg::Low => QualityTier::Low,
            QualityCfg::High => QualityTier::High,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed timestep (s).
    pub dt: f32,
    /// Total simulated time (s).
    pub duration: f32,
    /// Uniform true wind, world (x, z) in m/s.
    pub wind: [f32; 2],
    pub quality: QualityCfg,
    /// Swell components; the builtin open-sea swell when omitted.
    pub waves: Option<Vec<WaveComponent>>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            duration: 60.0,
            wind: [5.0, 0.0],
            quality: QualityCfg::High,
            waves: None,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            toml::from_str(&raw).with_context(|| format!("parsing config {}", p.display()))
        }
        None => Ok(SimConfig::default()),
    }
}

/// Minimal 6-DOF rigid body with diagonal inertia, integrated with
/// semi-implicit Euler. This is the stand-in for the external engine:
/// the vessel only ever talks to it through the `RigidBody` seam.
#[derive(Debug, Clone)]
pub struct DemoBody {
    pub position: Vec3,
    pub rotation: Quat,
    pub linvel: Vec3,
    pub angvel: Vec3,
    pub mass: f32,
    /// Diagonal inertia, world-aligned (demo fidelity).
    pub inertia: Vec3,
    force: Vec3,
    torque: Vec3,
}

const GRAVITY: f32 = 9.81;

impl DemoBody {
    pub fn sloop() -> Self {
        // Mass sized so the probe buoyancy (5 probes × ~800 N/m of
        // depth) floats the hull about half a meter down.
        Self {
            position: Vec3::new(0.0, 0.1, 0.0),
            rotation: Quat::IDENTITY,
            linvel: Vec3::ZERO,
            angvel: Vec3::ZERO,
            mass: 180.0,
            inertia: Vec3::new(900.0, 1200.0, 600.0),
            force: Vec3::ZERO,
            torque: Vec3::ZERO,
        }
    }

    /// Integrate the accumulated forces plus weight, then clear the
    /// accumulators for the next frame.
    pub fn step(&mut self, dt: f32) {
        let accel = self.force / self.mass + Vec3::new(0.0, -GRAVITY, 0.0);
        self.linvel += accel * dt;
        // Heave damping so the float oscillation settles; horizontal
        // drag belongs to the physics core, not the integrator.
        self.linvel.y *= 1.0 - (1.5 * dt).min(0.5);
        self.position += self.linvel * dt;

        self.angvel += self.torque / self.inertia * dt;
        // Mild angular damping keeps the demo's roll/pitch bounded; the
        // core itself only damps through its force terms.
        self.angvel *= 1.0 - (0.8 * dt).min(0.5);
        self.rotation = (Quat::from_scaled_axis(self.angvel * dt) * self.rotation).normalize();

        self.force = Vec3::ZERO;
        self.torque = Vec3::ZERO;
    }
}

impl RigidBody for DemoBody {
    fn translation(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn linvel_xz(&self) -> Vec2 {
        Vec2::new(self.linvel.x, self.linvel.z)
    }

    fn add_force(&mut self, force: Vec3) {
        self.force += force;
    }

    fn add_force_at_point(&mut self, force: Vec3, point: Vec3) {
        self.force += force;
        self.torque += (point - self.position).cross(force);
    }

    fn add_torque(&mut self, torque: Vec3) {
        self.torque += torque;
    }

    fn apply_torque_impulse(&mut self, impulse: Vec3) {
        self.angvel += impulse / self.inertia;
    }
}

/// Routes vessel effects into the log.
#[derive(Debug, Default)]
struct LogEffects;

impl EffectSink for LogEffects {
    fn trigger(&mut self, event: EffectEvent) {
        match event {
            EffectEvent::Splash { position } => debug!(?position, "splash"),
            EffectEvent::Luffing => debug!("sail luffing"),
        }
    }
}

/// Run the fixed-step loop for `cfg.duration` of simulated time,
/// reporting the derived state once per simulated second.
pub fn run_sim(cfg: &SimConfig) -> Result<()> {
    let waves = match &cfg.waves {
        Some(components) => WaveField::new(components.clone())?,
        None => WaveField::open_sea(),
    };
    let wind = ConstantWind(Vec2::new(cfg.wind[0], cfg.wind[1]));
    let mut vessel = SailingVessel::new(boatspecs::sloop_spec(), cfg.quality.into());
    let mut body = DemoBody::sloop();
    let mut effects = LogEffects;

    let steps = (cfg.duration / cfg.dt).ceil() as u64;
    let report_every = (1.0 / cfg.dt).round().max(1.0) as u64;
    let mut elapsed = 0.0f32;
    let inputs = VesselInputs::default();

    for step in 0..steps {
        // Pre-trim to the polar optimum each frame; the demo has no
        // keyboard, so this stands in for a competent crew.
        vessel.set_sail_trim(SailPolarTable.optimal_trim(vessel.derived().apparent_wind_angle));

        vessel.pre_physics(&inputs, &mut body);
        body.step(cfg.dt);
        vessel.post_physics(&mut body, &wind, &waves, &mut effects, cfg.dt, elapsed);
        elapsed += cfg.dt;

        if step % report_every == 0 {
            let d = vessel.derived();
            info!(
                t = elapsed,
                sog = d.speed_sog,
                awa = d.apparent_wind_angle,
                aws = d.apparent_wind_speed,
                heel = d.heel_angle,
                leeway = d.leeway_angle,
                trim = vessel.sail_trim(),
                efficiency = d.sail_efficiency,
                luffing = d.luffing,
                "vessel state"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let cfg: SimConfig = toml::from_str(
            r#"
            dt = 0.02
            duration = 5.0
            wind = [6.0, 1.0]
            quality = "low"

            [[waves]]
            amplitude = 0.4
            wavelength = 30.0
            speed_factor = 1.0
            direction = [1.0, 0.0]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.quality, QualityCfg::Low);
        assert_eq!(cfg.waves.as_ref().unwrap().len(), 1);
        assert!((cfg.dt - 0.02).abs() < 1e-6);
    }

    #[test]
    fn demo_body_floats_on_the_builtin_swell() {
        let cfg = SimConfig { duration: 5.0, ..SimConfig::default() };
        let waves = WaveField::open_sea();
        let wind = ConstantWind(Vec2::new(5.0, 0.0));
        let mut vessel = SailingVessel::new(boatspecs::sloop_spec(), QualityTier::High);
        let mut body = DemoBody::sloop();
        let mut effects = LogEffects;

        let mut elapsed = 0.0;
        for _ in 0..(5.0 / cfg.dt) as u64 {
            vessel.pre_physics(&VesselInputs::default(), &mut body);
            body.step(cfg.dt);
            vessel.post_physics(&mut body, &wind, &waves, &mut effects, cfg.dt, elapsed);
            elapsed += cfg.dt;
        }
        // Buoyancy must keep the hull near the surface rather than
        // letting it sink under gravity.
        assert!(body.position.y > -2.0, "hull sank to y={}", body.position.y);
        assert!(body.position.y.is_finite());
    }
}
