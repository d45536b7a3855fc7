//! Per-frame displacement of a water mesh driven by coherent noise.

use std::sync::Arc;

use glam::Vec3;
use log::debug;

use crate::jobs::{self, JobHandle};
use crate::mesh::SurfaceMesh;
use crate::noise::NoiseField;
use crate::params::{UpdaterConfig, WaveParams};

/// Everything one frame's dispatch needs, snapshotted at `update` time.
struct FrameJob {
    normals: Arc<[Vec3]>,
    noise: Arc<NoiseField>,
    scale: f32,
    offset_speed: f32,
    height: f32,
    base_offset: f32,
    time_s: f32,
}

impl FrameJob {
    /// Displace vertex `i` in place.
    ///
    /// Depends only on this vertex's own position and normal plus the frame
    /// snapshot, so vertices can run in any order. Vertices whose normal does
    /// not face +Z are left untouched: only the visible top surface waves.
    fn displace(&self, i: usize, position: &mut Vec3) {
        if self.normals[i].z > 0.0 {
            let nx = position.x * self.scale + self.offset_speed * self.time_s;
            let ny = position.y * self.scale + self.offset_speed * self.time_s;
            let noise_value = self.noise.sample_2d(nx, ny);

            position.z = noise_value * self.height + self.base_offset;
        }
    }
}

/// Animates a mesh's upward-facing vertices with scrolling 2D noise.
///
/// Owns a working copy of the mesh's positions and a read-only snapshot of
/// its normals, both taken once at construction. The per-frame call order is
/// fixed:
///
/// 1. [`update`](Self::update) snapshots the parameters and time, dispatches
///    the per-vertex work and returns without blocking, so the frame's other
///    work overlaps with the displacement.
/// 2. [`commit`](Self::commit) joins the dispatch, writes the displaced
///    positions back to the mesh and asks it to recalculate normals.
///
/// Calling these out of order is a programming error and panics. Dropping
/// the updater joins any in-flight dispatch before releasing the buffers.
pub struct WaveSurfaceUpdater {
    /// Working position buffer; `None` exactly while a dispatch is in flight.
    positions: Option<Vec<Vec3>>,
    /// Normal snapshot from construction, never mutated afterwards.
    normals: Arc<[Vec3]>,
    noise: Arc<NoiseField>,
    in_flight: Option<JobHandle<Vec<Vec3>>>,
    batch_size: usize,
    vertex_count: usize,
}

impl WaveSurfaceUpdater {
    /// Copy the mesh's vertex and normal streams into owned buffers and mark
    /// the mesh as frequently updated.
    ///
    /// The two streams must be index-aligned; a mesh with zero vertices is
    /// valid and every frame is then a no-op.
    pub fn new<M: SurfaceMesh>(mesh: &mut M, config: &UpdaterConfig) -> Self {
        mesh.mark_dynamic();

        let positions = mesh.vertices();
        let normals = mesh.normals();
        assert_eq!(
            positions.len(),
            normals.len(),
            "mesh vertex and normal streams must be index-aligned"
        );

        let vertex_count = positions.len();
        debug!(
            "wave updater: {} vertices, batch size {}",
            vertex_count, config.batch_size
        );

        Self {
            positions: Some(positions),
            normals: normals.into(),
            noise: Arc::new(NoiseField::new(config.noise_seed)),
            in_flight: None,
            batch_size: config.batch_size,
            vertex_count,
        }
    }

    /// Number of vertices under animation.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Dispatch this frame's displacement and return immediately.
    ///
    /// `time_s` is elapsed seconds from the host clock; `params` is read
    /// fresh each frame. Panics if the previous frame was never committed.
    pub fn update(&mut self, params: &WaveParams, time_s: f32) {
        assert!(
            self.in_flight.is_none(),
            "update called again before the previous frame was committed"
        );

        let positions = self
            .positions
            .take()
            .expect("position buffer is resident while no dispatch is in flight");

        let job = FrameJob {
            normals: Arc::clone(&self.normals),
            noise: Arc::clone(&self.noise),
            scale: params.scale,
            offset_speed: params.offset_speed,
            height: params.height,
            base_offset: params.base_offset,
            time_s,
        };

        self.in_flight = Some(jobs::dispatch(positions, self.batch_size, move |i, p| {
            job.displace(i, p)
        }));
    }

    /// Join this frame's dispatch and commit the result to the mesh.
    ///
    /// Blocks until every batch has finished, then uploads the displaced
    /// positions and triggers normal recalculation. Panics if no update was
    /// dispatched for this frame.
    pub fn commit<M: SurfaceMesh>(&mut self, mesh: &mut M) {
        let handle = self
            .in_flight
            .take()
            .expect("commit called without a pending update dispatch");

        let positions = handle.join();
        debug_assert_eq!(positions.len(), self.vertex_count);

        mesh.set_vertices(&positions);
        mesh.recalculate_normals();

        self.positions = Some(positions);
    }
}

impl Drop for WaveSurfaceUpdater {
    fn drop(&mut self) {
        // A dispatched frame always runs to completion; wait for the buffer
        // hand-off so teardown never races the worker.
        if let Some(handle) = self.in_flight.take() {
            let _ = handle.join();
        }
    }
}
