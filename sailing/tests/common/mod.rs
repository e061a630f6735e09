#![allow(dead_code)]

use bevy_math::{Quat, Vec2, Vec3};
use sailing::{EffectEvent, EffectSink, RigidBody, WaveField};

/// Recording rigid-body double. Accumulates what the vessel applies;
/// `step` optionally integrates the planar motion so scenario tests can
/// drive the full pre → integrate → post loop.
pub struct TestBody {
    pub translation: Vec3,
    pub rotation: Quat,
    pub linvel: Vec2,
    pub yaw_rate: f32,
    pub mass: f32,
    pub yaw_inertia: f32,
    // Accumulators, cleared by `step`
    pub force: Vec3,
    pub torque: Vec3,
    pub point_forces: Vec<(Vec3, Vec3)>,
    pub impulses: Vec<Vec3>,
}

impl TestBody {
    pub fn at_rest() -> Self {
        Self {
            translation: Vec3::new(0.0, 1.0, 0.0),
            rotation: Quat::IDENTITY,
            linvel: Vec2::ZERO,
            yaw_rate: 0.0,
            mass: 2000.0,
            yaw_inertia: 8000.0,
            force: Vec3::ZERO,
            torque: Vec3::ZERO,
            point_forces: Vec::new(),
            impulses: Vec::new(),
        }
    }

    /// Boat heading in degrees: 0° faces world +Z, positive toward +X.
    pub fn with_heading(heading_deg: f32) -> Self {
        let mut b = Self::at_rest();
        b.rotation = Quat::from_rotation_y(heading_deg.to_radians());
        b
    }

    pub fn heading_deg(&self) -> f32 {
        let fwd = self.rotation * Vec3::Z;
        fwd.x.atan2(fwd.z).to_degrees()
    }

    pub fn clear_accumulators(&mut self) {
        self.force = Vec3::ZERO;
        self.torque = Vec3::ZERO;
        self.point_forces.clear();
        self.impulses.clear();
    }

    /// Minimal semi-implicit Euler step over the XZ plane and yaw, then
    /// clear the accumulators for the next frame.
    pub fn step(&mut self, dt: f32) {
        self.linvel += Vec2::new(self.force.x, self.force.z) / self.mass * dt;
        self.translation.x += self.linvel.x * dt;
        self.translation.z += self.linvel.y * dt;
        self.yaw_rate += self.torque.y / self.yaw_inertia * dt;
        self.rotation = Quat::from_rotation_y(self.yaw_rate * dt) * self.rotation;
        self.clear_accumulators();
    }
}

impl RigidBody for TestBody {
    fn translation(&self) -> Vec3 {
        self.translation
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn linvel_xz(&self) -> Vec2 {
        self.linvel
    }

    fn add_force(&mut self, force: Vec3) {
        self.force += force;
    }

    fn add_force_at_point(&mut self, force: Vec3, point: Vec3) {
        self.point_forces.push((force, point));
    }

    fn add_torque(&mut self, torque: Vec3) {
        self.torque += torque;
    }

    fn apply_torque_impulse(&mut self, impulse: Vec3) {
        self.impulses.push(impulse);
        self.yaw_rate += impulse.y / self.yaw_inertia;
    }
}

/// Effect sink that keeps every event for assertions.
#[derive(Default)]
pub struct RecordingEffects {
    pub events: Vec<EffectEvent>,
}

impl RecordingEffects {
    pub fn splashes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, EffectEvent::Splash { .. }))
            .count()
    }

    pub fn luffs(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, EffectEvent::Luffing))
            .count()
    }
}

impl EffectSink for RecordingEffects {
    fn trigger(&mut self, event: EffectEvent) {
        self.events.push(event);
    }
}

/// A perfectly flat sea: zero components, zero height everywhere.
pub fn flat_sea() -> WaveField {
    WaveField::new(Vec::new()).expect("empty component list is valid")
}

pub const DT: f32 = 1.0 / 60.0;
