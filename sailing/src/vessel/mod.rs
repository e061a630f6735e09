mod dynamics;
mod terms;
mod types;
mod util;

pub use dynamics::SailingVessel;
pub use types::{BuoyancyProbe, DerivedState, QualityTier, StepDebug, Submersion, VesselInputs};
