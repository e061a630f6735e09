use bevy_math::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GRAVITY: f32 = 9.81;

/// One sinusoidal swell component. `direction` does not need to be
/// pre-normalized; the field normalizes it at construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaveComponent {
    pub amplitude: f32,
    pub wavelength: f32,
    pub speed_factor: f32,
    pub direction: Vec2,
}

#[derive(Debug, Error)]
pub enum WaveFieldError {
    #[error("wave component {index}: amplitude must be > 0 (got {value})")]
    NonPositiveAmplitude { index: usize, value: f32 },
    #[error("wave component {index}: wavelength must be > 0 (got {value})")]
    NonPositiveWavelength { index: usize, value: f32 },
    #[error("wave component {index}: speed_factor must be > 0 (got {value})")]
    NonPositiveSpeedFactor { index: usize, value: f32 },
    #[error("wave component {index}: direction is degenerate")]
    DegenerateDirection { index: usize },
}

/// Precomputed per-component terms so `height` is a bare sum of sines.
#[derive(Debug, Clone, Copy)]
struct WaveTerm {
    amplitude: f32,
    wave_number: f32,
    direction: Vec2,
    phase_speed: f32,
}

/// Procedural ocean surface height. Stateless after construction; safe to
/// query from any number of readers concurrently.
///
/// `height(x, z, t) = Σ aᵢ·sin(kᵢ·(dᵢ·(x,z)) − cᵢ·t)` with the deep-water
/// dispersion relation `cᵢ = sqrt(g/kᵢ)·speed_factorᵢ`. Component order is
/// preserved from construction so the floating-point sum is reproducible.
#[derive(Debug, Clone)]
pub struct WaveField {
    terms: Vec<WaveTerm>,
}

impl WaveField {
    /// Validate and bake a component list. A malformed component is the
    /// one genuine precondition violation in this crate; it is rejected
    /// here so simulation-time code never has to check.
    pub fn new(components: Vec<WaveComponent>) -> Result<Self, WaveFieldError> {
        let mut terms = Vec::with_capacity(components.len());
        for (index, c) in components.iter().enumerate() {
            if !(c.amplitude > 0.0) {
                return Err(WaveFieldError::NonPositiveAmplitude { index, value: c.amplitude });
            }
            if !(c.wavelength > 0.0) {
                return Err(WaveFieldError::NonPositiveWavelength { index, value: c.wavelength });
            }
            if !(c.speed_factor > 0.0) {
                return Err(WaveFieldError::NonPositiveSpeedFactor { index, value: c.speed_factor });
            }
            let len2 = c.direction.length_squared();
            if !(len2 > 1e-8) || !len2.is_finite() {
                return Err(WaveFieldError::DegenerateDirection { index });
            }
            let wave_number = std::f32::consts::TAU / c.wavelength;
            terms.push(WaveTerm {
                amplitude: c.amplitude,
                wave_number,
                direction: c.direction / len2.sqrt(),
                phase_speed: (GRAVITY / wave_number).sqrt() * c.speed_factor,
            });
        }
        Ok(Self { terms })
    }

    /// Surface height at world (x, z) and elapsed time `t`. Bounded by the
    /// sum of amplitudes for any finite input.
    pub fn height(&self, x: f32, z: f32, t: f32) -> f32 {
        let mut h = 0.0f32;
        for term in &self.terms {
            let along = term.direction.x * x + term.direction.y * z;
            h += term.amplitude * (term.wave_number * along - term.phase_speed * t).sin();
        }
        h
    }

    /// Worst-case surface excursion; useful for camera/audio heuristics.
    pub fn max_amplitude(&self) -> f32 {
        self.terms.iter().map(|t| t.amplitude).sum()
    }

    /// Reference open-sea swell: one long primary swell, a shorter cross
    /// swell and two wind-chop components.
    pub fn open_sea() -> Self {
        Self::new(vec![
            WaveComponent {
                amplitude: 0.6,
                wavelength: 42.0,
                speed_factor: 1.0,
                direction: Vec2::new(1.0, 0.2),
            },
            WaveComponent {
                amplitude: 0.3,
                wavelength: 23.0,
                speed_factor: 1.1,
                direction: Vec2::new(0.6, -0.8),
            },
            WaveComponent {
                amplitude: 0.15,
                wavelength: 9.0,
                speed_factor: 1.3,
                direction: Vec2::new(-0.3, 1.0),
            },
            WaveComponent {
                amplitude: 0.08,
                wavelength: 4.5,
                speed_factor: 1.5,
                direction: Vec2::new(1.0, 1.0),
            },
        ])
        .expect("builtin swell components are valid")
    }
}
