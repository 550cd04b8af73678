use crate::shape::TriMesh;
use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
    ScalarType,
};
use ply_rs::writer::Writer;
use std::fs::File;
use std::io;
use std::path::Path;

impl TriMesh {
    /// Outputs an ascii PLY file at the given path.
    ///
    /// This function is enabled by the `ply` feature flag. The file carries a
    /// `vertex` element with double-precision `x`/`y`/`z` properties and a
    /// `face` element with the usual `vertex_indices` list.
    pub fn to_ply_file(&self, path: &Path) -> io::Result<()> {
        let mut ply = Ply::<DefaultElement>::new();
        ply.header.encoding = Encoding::Ascii;

        let mut vertex_element = ElementDef::new("vertex".to_string());
        for name in ["x", "y", "z"] {
            let p = PropertyDef::new(name.to_string(), PropertyType::Scalar(ScalarType::Double));
            vertex_element.properties.add(p);
        }
        ply.header.elements.add(vertex_element);

        let mut face_element = ElementDef::new("face".to_string());
        let p = PropertyDef::new(
            "vertex_indices".to_string(),
            PropertyType::List(ScalarType::UChar, ScalarType::Int),
        );
        face_element.properties.add(p);
        ply.header.elements.add(face_element);

        let mut vertices = Vec::with_capacity(self.vertices().len());
        for v in self.vertices() {
            let mut vertex = DefaultElement::new();
            let _ = vertex.insert("x".to_string(), Property::Double(v.x as f64));
            let _ = vertex.insert("y".to_string(), Property::Double(v.y as f64));
            let _ = vertex.insert("z".to_string(), Property::Double(v.z as f64));
            vertices.push(vertex);
        }
        let _ = ply.payload.insert("vertex".to_string(), vertices);

        let mut faces = Vec::with_capacity(self.num_triangles());
        for tri in self.indices() {
            let mut face = DefaultElement::new();
            let _ = face.insert(
                "vertex_indices".to_string(),
                Property::ListInt(tri.iter().map(|&i| i as i32).collect()),
            );
            faces.push(face);
        }
        let _ = ply.payload.insert("face".to_string(), faces);

        let mut file = File::create(path)?;
        let writer = Writer::new();
        let _ = writer.write_ply(&mut file, &mut ply)?;
        Ok(())
    }
}
