//! Command-line argument parsing.

use clap::Parser;

use crate::params::{PlaneConfig, UpdaterConfig, WaveParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Swell")]
#[command(about = "Noise-driven water surface animation demo", long_about = None)]
pub struct Args {
    /// Quads per side of the demo water plane
    #[arg(long, value_name = "N", default_value_t = PlaneConfig::default().grid_size)]
    pub grid_size: usize,

    /// Vertex spacing (meters)
    #[arg(long, value_name = "METERS", default_value_t = PlaneConfig::default().grid_spacing_m)]
    pub spacing: f32,

    /// Spatial noise frequency (noise units per meter)
    #[arg(long, default_value_t = WaveParams::default().scale)]
    pub scale: f32,

    /// Temporal scroll rate (noise units per second)
    #[arg(long, default_value_t = WaveParams::default().offset_speed)]
    pub offset_speed: f32,

    /// Wave amplitude (meters)
    #[arg(long, default_value_t = WaveParams::default().height)]
    pub height: f32,

    /// Vertical bias added to displaced vertices (meters)
    #[arg(long, default_value_t = WaveParams::default().base_offset)]
    pub base_offset: f32,

    /// Noise seed
    #[arg(long, default_value_t = UpdaterConfig::default().noise_seed)]
    pub seed: u32,

    /// Vertices per dispatch batch
    #[arg(long, default_value_t = UpdaterConfig::default().batch_size)]
    pub batch_size: usize,

    /// Number of frames to simulate
    #[arg(long, value_name = "COUNT", default_value_t = 300)]
    pub frames: u32,
}

impl Args {
    /// Per-frame wave parameters from the command line
    pub fn wave_params(&self) -> WaveParams {
        WaveParams {
            scale: self.scale,
            offset_speed: self.offset_speed,
            height: self.height,
            base_offset: self.base_offset,
        }
    }

    /// Updater construction parameters from the command line
    pub fn updater_config(&self) -> UpdaterConfig {
        UpdaterConfig {
            noise_seed: self.seed,
            batch_size: self.batch_size,
        }
    }

    /// Demo plane parameters from the command line
    pub fn plane_config(&self) -> PlaneConfig {
        PlaneConfig {
            grid_size: self.grid_size,
            grid_spacing_m: self.spacing,
        }
    }
}
