use crate::math::Vector;
use crate::shape::TriMesh;
use std::fs::File;
use std::io;
use std::path::Path;

impl TriMesh {
    /// Outputs a binary STL file at the given path.
    ///
    /// This function is enabled by the `stl` feature flag. STL stores
    /// single-precision facets with per-facet normals; the normals are
    /// recomputed from the triangle corners, with a zero normal on
    /// degenerate facets.
    pub fn to_stl_file(&self, path: &Path) -> io::Result<()> {
        let triangles: Vec<stl_io::Triangle> = self
            .indices()
            .iter()
            .map(|tri| {
                let a = self.vertices()[tri[0] as usize];
                let b = self.vertices()[tri[1] as usize];
                let c = self.vertices()[tri[2] as usize];
                let normal = (b - a).cross(&(c - a)).try_normalize(0.0).unwrap_or_else(Vector::zeros);

                stl_io::Triangle {
                    normal: stl_io::Normal::new([normal.x as f32, normal.y as f32, normal.z as f32]),
                    vertices: [a, b, c]
                        .map(|p| stl_io::Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
                }
            })
            .collect();

        let mut out = File::create(path)?;
        stl_io::write_stl(&mut out, triangles.iter())
    }
}
