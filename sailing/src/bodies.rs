//! Seams to the embedder: the externally-integrated rigid body, the wind
//! field and the effects bus. The vessel borrows these each frame and
//! never assumes exclusive ownership of the body.

use bevy_math::{Quat, Vec2, Vec3};

/// Handle onto the externally-owned rigid body. Reads are assumed stable
/// for the duration of one `post_physics` call; writes accumulate into
/// the engine's force/torque sums for the next integration step. All
/// vectors are world-space.
pub trait RigidBody {
    fn translation(&self) -> Vec3;
    fn rotation(&self) -> Quat;
    /// Horizontal velocity, (x, z) in world space.
    fn linvel_xz(&self) -> Vec2;
    fn add_force(&mut self, force: Vec3);
    /// Point force; contributes torque about the center of mass.
    fn add_force_at_point(&mut self, force: Vec3, point: Vec3);
    fn add_torque(&mut self, torque: Vec3);
    fn apply_torque_impulse(&mut self, impulse: Vec3);
}

/// Horizontal wind query, (x, z) in world space.
pub trait WindField {
    fn wind_at(&self, x: f32, z: f32) -> Vec2;
}

/// Uniform wind everywhere; also the stand-in when no generator is wired.
#[derive(Debug, Clone, Copy)]
pub struct ConstantWind(pub Vec2);

impl Default for ConstantWind {
    fn default() -> Self {
        Self(Vec2::new(5.0, 0.0))
    }
}

impl WindField for ConstantWind {
    fn wind_at(&self, _x: f32, _z: f32) -> Vec2 {
        self.0
    }
}

/// Events the vessel raises for the visual/audio layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectEvent {
    /// A buoyancy probe crossed into the water; world position attached.
    Splash { position: Vec3 },
    /// The sail is flogging inside the no-drive zone.
    Luffing,
}

/// Fire-and-forget event sink; no acknowledgment expected.
pub trait EffectSink {
    fn trigger(&mut self, event: EffectEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEffects;

impl EffectSink for NullEffects {
    fn trigger(&mut self, _event: EffectEvent) {}
}
