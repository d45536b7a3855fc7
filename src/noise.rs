//! Noise generation for the wave surface.
//!
//! Wraps OpenSimplex noise behind a seeded sampler. OpenSimplex is smooth and
//! artifact-free, which is what makes the displacement read as rolling waves
//! rather than jitter.

use noise::{NoiseFn, OpenSimplex};

/// Seeded coherent noise field
pub struct NoiseField {
    simplex: OpenSimplex,
}

impl NoiseField {
    /// Create new noise field with seed
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: OpenSimplex::new(seed),
        }
    }

    /// Sample 2D noise at position
    ///
    /// Returns value in range [-1, 1]
    pub fn sample_2d(&self, x: f32, y: f32) -> f32 {
        self.simplex.get([x as f64, y as f64]) as f32
    }
}
