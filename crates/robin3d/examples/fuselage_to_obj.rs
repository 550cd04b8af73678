use robin3d::shape::{RobinBody, TriMesh};
use std::path::Path;

fn main() {
    let (vertices, indices) = RobinBody::Fuselage.to_trimesh(64, 32).unwrap();
    let mesh = TriMesh::new(vertices, indices).unwrap();

    mesh.to_obj_file(Path::new("robinFuselage.obj")).unwrap();
    println!(
        "robinFuselage.obj: {} vertices, {} triangles",
        mesh.vertices().len(),
        mesh.num_triangles()
    );
}
