use crate::shape::TriMesh;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

impl TriMesh {
    /// Outputs a Wavefront (`.obj`) file at the given path.
    pub fn to_obj_file(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_obj(&mut out)
    }

    /// Writes this mesh in Wavefront text form: one `v x y z` line per
    /// vertex in storage order, then one `f i1 i2 i3` line per triangle.
    /// OBJ vertex indexing starts at 1.
    pub fn write_obj<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "# Vertices")?;
        for v in self.vertices() {
            writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
        }

        writeln!(out)?;
        writeln!(out, "# Faces")?;
        for tri in self.indices() {
            writeln!(out, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
        }

        Ok(())
    }
}
