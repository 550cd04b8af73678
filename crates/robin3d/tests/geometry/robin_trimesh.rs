use std::collections::HashSet;

use robin3d::shape::{RobinBody, SamplingError, TriMesh, TriMeshBuilderError};
use robin3d::transformation::robin_face_indices;

#[test]
fn fuselage_grid_has_the_expected_size() {
    let (vertices, indices) = RobinBody::Fuselage.to_trimesh(12, 8).unwrap();

    assert_eq!(vertices.len(), 90);
    assert_eq!(indices.len(), 176);
    assert!(TriMesh::new(vertices, indices).is_ok());
}

#[test]
fn grid_size_follows_the_subdivision_counts() {
    for (nx, nt) in [(2, 3), (5, 7), (9, 4)] {
        let (vertices, indices) = RobinBody::Fuselage.to_trimesh(nx, nt).unwrap();
        assert_eq!(vertices.len(), (2 + nt * (nx - 1)) as usize);
        assert_eq!(indices.len(), (2 * nt * (nx - 1)) as usize);
    }
}

#[test]
fn pylon_mesh_generates_without_sampling_errors() {
    let (vertices, indices) = RobinBody::Pylon.to_trimesh(4, 4).unwrap();

    assert_eq!(vertices.len(), 14);
    assert_eq!(indices.len(), 24);
}

#[test]
fn generation_is_deterministic() {
    let first = RobinBody::Fuselage.to_trimesh(12, 8).unwrap();
    let second = RobinBody::Fuselage.to_trimesh(12, 8).unwrap();
    assert_eq!(first, second);
}

#[test]
fn tips_are_single_points() {
    let (vertices, _) = RobinBody::Fuselage.to_trimesh(6, 9).unwrap();

    // Nose and tail are stored once each, at the ends of the buffer.
    assert_eq!(vertices[0].x, 0.0);
    assert_eq!(vertices.last().unwrap().x, 2.0);
    let on_nose_station = vertices.iter().filter(|v| v.x == 0.0).count();
    let on_tail_station = vertices.iter().filter(|v| v.x == 2.0).count();
    assert_eq!(on_nose_station, 1);
    assert_eq!(on_tail_station, 1);
}

#[test]
fn surface_is_closed_and_consistently_wound() {
    // In a closed, consistently oriented triangulation every directed edge
    // appears exactly once and its opposite exactly once.
    let (_, indices) = RobinBody::Fuselage.to_trimesh(6, 5).unwrap();

    let mut edges = HashSet::new();
    for tri in &indices {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            assert!(edges.insert((a, b)), "duplicate directed edge {:?}", (a, b));
        }
    }
    for &(a, b) in &edges {
        assert!(edges.contains(&(b, a)), "unmatched edge {:?}", (a, b));
    }
}

#[test]
fn single_band_body_has_no_interior_ring_pairs() {
    let (vertices, indices) = RobinBody::Pylon.to_trimesh(2, 6).unwrap();
    assert_eq!(vertices.len(), 8);
    // Only the two tip fans remain.
    assert_eq!(indices.len(), 12);
}

#[test]
fn degenerate_axial_count_yields_tip_points_only() {
    let (vertices, indices) = RobinBody::Fuselage.to_trimesh(1, 8).unwrap();

    assert_eq!(vertices.len(), 2);
    assert!(indices.is_empty());
    assert_eq!(
        TriMesh::new(vertices, indices),
        Err(TriMeshBuilderError::EmptyIndices)
    );
}

#[test]
fn zero_subdivisions_are_rejected() {
    assert!(matches!(
        RobinBody::Fuselage.to_trimesh(0, 8),
        Err(SamplingError::InvalidSubdivisions { .. })
    ));
    assert!(matches!(
        RobinBody::Pylon.to_trimesh(4, 0),
        Err(SamplingError::InvalidSubdivisions { .. })
    ));
}

#[test]
fn face_indices_shift_uniformly_with_the_base() {
    let zero_based = robin_face_indices(5, 6, 0);
    let one_based = robin_face_indices(5, 6, 1);

    assert_eq!(zero_based.len(), one_based.len());
    for (z, o) in zero_based.iter().zip(one_based.iter()) {
        assert_eq!([z[0] + 1, z[1] + 1, z[2] + 1], *o);
    }

    let num_points = 2 + 6 * 4;
    assert!(zero_based.iter().flatten().all(|&i| i < num_points));
    assert!(one_based.iter().flatten().all(|&i| i >= 1 && i <= num_points));
}
