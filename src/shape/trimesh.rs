use crate::math::{Point, Real};

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("a triangle mesh must contain at least one triangle")]
    EmptyIndices,
    /// A triangle referenced a vertex missing from the vertex buffer.
    #[error(
        "triangle {triangle} references the vertex {index} but the mesh only has {num_vertices} vertices"
    )]
    OutOfBoundsVertexIndex {
        /// Index of the offending triangle.
        triangle: u32,
        /// The out-of-bounds vertex index it contains.
        index: u32,
        /// Size of the vertex buffer.
        num_vertices: u32,
    },
}

/// A triangle mesh stored as raw vertex and triangle-index buffers.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Creates a mesh from a vertex buffer and an index buffer, checking that
    /// every triangle references an existing vertex.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<TriMesh, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        let num_vertices = vertices.len() as u32;
        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(&index) = idx.iter().find(|i| **i >= num_vertices) {
                return Err(TriMeshBuilderError::OutOfBoundsVertexIndex {
                    triangle: triangle as u32,
                    index,
                    num_vertices,
                });
            }
        }

        Ok(TriMesh { vertices, indices })
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }
}
