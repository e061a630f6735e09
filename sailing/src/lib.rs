//! Sailing physics shared between the headless driver and any client.
//!
//! This crate intentionally avoids any engine types. It produces forces
//! and torques against a narrow rigid-body seam each frame; integration,
//! rendering and input devices live with the embedder.

mod waves;
pub use waves::{WaveComponent, WaveField, WaveFieldError};

mod polar;
pub use polar::{SailCoefficients, SailPolarTable, LUFF_ANGLE_DEG};

mod boat_specs;
pub use boat_specs::{boatspecs, BoatPhysicsSpec};

mod bodies;
pub use bodies::{ConstantWind, EffectEvent, EffectSink, NullEffects, RigidBody, WindField};

pub mod vessel;
pub use vessel::{
    BuoyancyProbe, DerivedState, QualityTier, SailingVessel, StepDebug, Submersion, VesselInputs,
};
