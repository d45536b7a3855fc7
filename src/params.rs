//! Parameter definitions with physical units and documented semantics.

/// Per-frame wave displacement parameters.
///
/// Read fresh each frame and never validated: negative or zero values are
/// legal and simply produce a flat or inverted surface.
#[derive(Debug, Clone, Copy)]
pub struct WaveParams {
    /// Spatial frequency (noise-space units per world meter)
    pub scale: f32,

    /// Temporal scroll rate (noise-space units per second)
    pub offset_speed: f32,

    /// Vertical wave amplitude in meters
    pub height: f32,

    /// Fixed vertical bias added after amplitude scaling (meters).
    /// Compensates for the scene's base water-plane height.
    pub base_offset: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            scale: 0.1,
            offset_speed: 0.5,
            height: 2.0,
            base_offset: 0.3,
        }
    }
}

/// Construction-time updater configuration.
#[derive(Debug, Clone, Copy)]
pub struct UpdaterConfig {
    /// OpenSimplex noise seed
    pub noise_seed: u32,

    /// Vertices per dispatch batch. Amortizes per-task overhead against
    /// parallelism granularity; any positive value gives identical results.
    pub batch_size: usize,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            noise_seed: 42,
            batch_size: 64,
        }
    }
}

/// Demo water-plane mesh parameters.
#[derive(Debug, Clone)]
pub struct PlaneConfig {
    /// Grid resolution (quads per side; vertices per side is grid_size + 1)
    pub grid_size: usize,

    /// Spacing between grid vertices in world units (meters)
    pub grid_spacing_m: f32,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            grid_size: 128,    // 16,641 vertices, comfortable for a CPU demo
            grid_spacing_m: 1.0,
        }
    }
}
