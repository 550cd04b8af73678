use crate::math::{Point, Real};
use crate::shape::{RobinBody, SamplingError};
use crate::transformation::utils;
use crate::utils::chebyshev_nodes;
use na::RealField;

impl RobinBody {
    /// Discretizes the boundary of this body as a triangle-mesh.
    ///
    /// The surface is sampled at `nx + 1` Chebyshev stations along the body
    /// axis and `nt` uniform circumferential angles per station. The rings at
    /// the first and last station degenerate to the body tips and are kept as
    /// single points, so for `nx > 1` the result holds `2 + nt·(nx − 1)`
    /// vertices and `2·nt·(nx − 1)` triangles forming a closed surface.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use robin3d::shape::RobinBody;
    ///
    /// let (vertices, indices) = RobinBody::Fuselage.to_trimesh(12, 8).unwrap();
    /// assert_eq!(vertices.len(), 90);
    /// assert_eq!(indices.len(), 176);
    /// # }
    /// ```
    pub fn to_trimesh(
        self,
        nx: u32,
        nt: u32,
    ) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), SamplingError> {
        if nx == 0 || nt == 0 {
            return Err(SamplingError::InvalidSubdivisions { nx, nt });
        }

        let [begin, end] = self.axial_range();
        let stations = chebyshev_nodes(begin, end, nx);
        let dtheta = Real::two_pi() / (nt as Real);

        let mut vertices = Vec::with_capacity(2 + (nt as usize) * (nx as usize - 1));
        for (ix, &x) in stations.iter().enumerate() {
            let section = self.cross_section(x)?;

            if ix == 0 || ix == nx as usize {
                // The ring collapses at the tips; keep one representative point.
                vertices.push(section.surface_point(x, 0.0));
            } else {
                for it in 0..nt {
                    vertices.push(section.surface_point(x, dtheta * (it as Real)));
                }
            }
        }

        let indices = robin_face_indices(nx, nt, 0);

        log::debug!(
            "sampled {:?} into {} vertices and {} triangles",
            self,
            vertices.len(),
            indices.len()
        );

        Ok((vertices, indices))
    }
}

/// Builds the face list of the ring-major ROBIN point grid: a nose fan, a
/// quad-split band per pair of adjacent interior rings, and a tail fan with
/// mirrored vertex order so the winding stays outward-facing throughout.
///
/// `base` is the index of the first vertex (the nose tip) in the target
/// buffer: 0 for in-memory meshes, 1 for writers with 1-based indexing.
/// Returns `2·nt·(nx − 1)` triangles for `nx > 1` and an empty list for
/// `nx == 1` (the grid is just the two tip points).
///
/// # Panics
///
/// Panics if `nx` or `nt` is 0.
pub fn robin_face_indices(nx: u32, nt: u32, base: u32) -> Vec<[u32; 3]> {
    assert!(nx > 0 && nt > 0);

    let mut indices = Vec::new();
    if nx == 1 {
        return indices;
    }

    let nose = base;
    let first_ring = base + 1;
    let tail = base + 1 + nt * (nx - 1);

    utils::push_degenerate_ring_indices(first_ring, nose, nt, &mut indices);

    for band in 0..nx - 2 {
        utils::push_ring_indices(
            first_ring + band * nt,
            first_ring + (band + 1) * nt,
            nt,
            &mut indices,
        );
    }

    let tail_fan = indices.len();
    utils::push_degenerate_ring_indices(first_ring + (nx - 2) * nt, tail, nt, &mut indices);
    utils::reverse_clockwising(&mut indices[tail_fan..]);

    indices
}
