//! Swell - real-time procedural water surface animation
//!
//! Displaces the upward-facing vertices of a mesh with scrolling coherent
//! noise: one parallel dispatch per frame, one join point before the result
//! is committed back to the mesh.

pub mod cli;
pub mod jobs;
pub mod mesh;
pub mod noise;
pub mod params;
pub mod surface;
