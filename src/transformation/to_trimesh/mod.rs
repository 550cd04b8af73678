//! Triangle mesh generation from the analytic ROBIN bodies.
//!
//! A mesh is represented as a pair of buffers, `(Vec<Point<Real>>,
//! Vec<[u32; 3]>)`, holding the vertices in ring-major order and the triangle
//! indices with a counter-clockwise (outward-facing) winding.

pub use self::robin_to_trimesh::robin_face_indices;

mod robin_to_trimesh;
