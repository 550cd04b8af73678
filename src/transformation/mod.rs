//! Mesh generation from the analytic bodies and export to standard formats.

pub use self::to_trimesh::robin_face_indices;

mod to_trimesh;
pub mod utils;

mod wavefront;

#[cfg(feature = "ply")]
mod ply;
#[cfg(feature = "stl")]
mod stl;
