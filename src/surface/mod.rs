//! Wave surface animation: per-frame noise displacement of a mesh's
//! upward-facing vertices.

mod updater;

pub use updater::WaveSurfaceUpdater;
