//! Host-mesh contract and the demo water plane.

use glam::Vec3;

use crate::params::PlaneConfig;

/// Contract the wave updater needs from a host mesh resource.
///
/// Mirrors the usual engine mesh surface: snapshot accessors for the vertex
/// and normal streams, a setter for displaced positions, and normal
/// recalculation after displacement. The two streams are index-aligned and
/// equal-length for the lifetime of the mesh.
pub trait SurfaceMesh {
    /// Current vertex positions, index-aligned with `normals`.
    fn vertices(&self) -> Vec<Vec3>;

    /// Current vertex normals, index-aligned with `vertices`.
    fn normals(&self) -> Vec<Vec3>;

    /// Replace all vertex positions. `positions` has the same length as the
    /// mesh's vertex stream.
    fn set_vertices(&mut self, positions: &[Vec3]);

    /// Recompute normals from the current positions, for correct lighting
    /// after displacement.
    fn recalculate_normals(&mut self);

    /// Hint that positions will change every frame. Purely a performance
    /// hint; the default is a no-op.
    fn mark_dynamic(&mut self) {}
}

/// Flat water plane in the XY plane (+Z up), triangulated as a regular grid.
///
/// Stands in for an engine mesh in the demo and in tests.
pub struct PlaneMesh {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl PlaneMesh {
    /// Create a new water plane centered on the origin
    pub fn new(config: &PlaneConfig) -> Self {
        let grid_size = config.grid_size;
        let grid_spacing = config.grid_spacing_m;
        let half_size = (grid_size as f32 * grid_spacing) / 2.0;

        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        // Generate flat XY plane grid
        for y in 0..=grid_size {
            for x in 0..=grid_size {
                let x_pos = x as f32 * grid_spacing - half_size;
                let y_pos = y as f32 * grid_spacing - half_size;

                vertices.push(Vec3::new(x_pos, y_pos, 0.0));
            }
        }

        // Generate triangle indices (counter-clockwise seen from +Z)
        for y in 0..grid_size {
            for x in 0..grid_size {
                let bottom_left = (y * (grid_size + 1) + x) as u32;
                let bottom_right = bottom_left + 1;
                let top_left = ((y + 1) * (grid_size + 1) + x) as u32;
                let top_right = top_left + 1;

                indices.extend_from_slice(&[
                    bottom_left,
                    bottom_right,
                    top_left,
                    bottom_right,
                    top_right,
                    top_left,
                ]);
            }
        }

        let normals = vec![Vec3::Z; vertices.len()];

        Self {
            vertices,
            normals,
            indices,
        }
    }
}

impl SurfaceMesh for PlaneMesh {
    fn vertices(&self) -> Vec<Vec3> {
        self.vertices.clone()
    }

    fn normals(&self) -> Vec<Vec3> {
        self.normals.clone()
    }

    fn set_vertices(&mut self, positions: &[Vec3]) {
        debug_assert_eq!(positions.len(), self.vertices.len());
        self.vertices.copy_from_slice(positions);
    }

    fn recalculate_normals(&mut self) {
        for normal in &mut self.normals {
            *normal = Vec3::ZERO;
        }

        // Accumulate area-weighted face normals per vertex
        for tri in self.indices.chunks_exact(3) {
            let i0 = tri[0] as usize;
            let i1 = tri[1] as usize;
            let i2 = tri[2] as usize;

            let face = (self.vertices[i1] - self.vertices[i0])
                .cross(self.vertices[i2] - self.vertices[i0]);

            self.normals[i0] += face;
            self.normals[i1] += face;
            self.normals[i2] += face;
        }

        for normal in &mut self.normals {
            *normal = normal.normalize_or_zero();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_mesh_creation() {
        let config = PlaneConfig::default();
        let mesh = PlaneMesh::new(&config);

        // Check vertex count: (grid_size + 1)^2
        assert_eq!(mesh.vertices.len(), (config.grid_size + 1).pow(2));
        assert_eq!(mesh.normals.len(), mesh.vertices.len());

        // Check triangle count: grid_size^2 * 2 triangles * 3 indices
        assert_eq!(mesh.indices.len(), config.grid_size.pow(2) * 6);
    }

    #[test]
    fn test_flat_plane_normals_point_up() {
        let mut mesh = PlaneMesh::new(&PlaneConfig {
            grid_size: 8,
            grid_spacing_m: 1.0,
        });

        assert!(mesh.normals.iter().all(|n| n.z > 0.0));

        // Recalculating from the flat geometry must agree with the winding.
        mesh.recalculate_normals();
        for normal in &mesh.normals {
            assert!((normal.z - 1.0).abs() < 1e-6, "normal {:?}", normal);
        }
    }

    #[test]
    fn test_recalculated_normals_are_unit_length() {
        let mut mesh = PlaneMesh::new(&PlaneConfig {
            grid_size: 8,
            grid_spacing_m: 1.0,
        });

        // Tilt the surface so faces are no longer coplanar.
        for (i, vertex) in mesh.vertices.iter_mut().enumerate() {
            vertex.z = (i % 5) as f32 * 0.2;
        }
        mesh.recalculate_normals();

        for normal in &mesh.normals {
            assert!((normal.length() - 1.0).abs() < 1e-5, "normal {:?}", normal);
        }
    }

    #[test]
    fn test_set_vertices_replaces_positions() {
        let mut mesh = PlaneMesh::new(&PlaneConfig {
            grid_size: 2,
            grid_spacing_m: 1.0,
        });

        let mut displaced = mesh.vertices();
        for vertex in &mut displaced {
            vertex.z = 1.5;
        }
        mesh.set_vertices(&displaced);

        assert!(mesh.vertices.iter().all(|v| v.z == 1.5));
    }
}
