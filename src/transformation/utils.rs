//! Low-level index-buffer building blocks for the grid triangulation.
//!
//! All functions work with explicit base offsets into the caller's vertex
//! buffer, so bands and fans can be emitted incrementally and the same
//! builders serve 0-based and 1-based output conventions.

use crate::math::DIM;

/// Creates the triangle faces connecting two rings with the same
/// discretization.
///
/// The band wraps around circumferentially: the last segment connects back to
/// the first point of each ring. Pushes `2 * nsubdiv` triangles to `out`.
#[inline]
pub fn push_ring_indices(
    base_lower_ring: u32,
    base_upper_ring: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; DIM]>,
) {
    push_open_ring_indices(base_lower_ring, base_upper_ring, nsubdiv, out);

    // Close the band.
    push_rectangle_indices(
        base_upper_ring + nsubdiv - 1,
        base_upper_ring,
        base_lower_ring + nsubdiv - 1,
        base_lower_ring,
        out,
    );
}

/// Creates the triangle faces connecting two rings, leaving the band open.
///
/// # Panics
///
/// Panics if `nsubdiv` is 0.
#[inline]
pub fn push_open_ring_indices(
    base_lower_ring: u32,
    base_upper_ring: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; DIM]>,
) {
    assert!(nsubdiv > 0);

    for i in 0..nsubdiv - 1 {
        push_rectangle_indices(
            base_upper_ring + i,
            base_upper_ring + i + 1,
            base_lower_ring + i,
            base_lower_ring + i + 1,
            out,
        );
    }
}

/// Pushes two triangles forming the quad
///
/// ```text
/// ul --- ur
/// |       |
/// dl --- dr
/// ```
///
/// split along the `ul`–`dr` diagonal, keeping the winding used by the ring
/// bands.
#[inline]
pub fn push_rectangle_indices(ul: u32, ur: u32, dl: u32, dr: u32, out: &mut Vec<[u32; DIM]>) {
    out.push([dl, ul, dr]);
    out.push([ul, ur, dr]);
}

/// Creates the fan of faces connecting a ring to a single tip point, wrapping
/// the last pair back to the ring start. Pushes `nsubdiv` triangles to `out`.
#[inline]
pub fn push_degenerate_ring_indices(
    base_ring: u32,
    point: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; DIM]>,
) {
    push_degenerate_open_ring_indices(base_ring, point, nsubdiv, out);

    out.push([point, base_ring + nsubdiv - 1, base_ring]);
}

/// Creates the fan of faces connecting a ring to a single tip point, without
/// the wrap-around face.
///
/// # Panics
///
/// Panics if `nsubdiv` is 0.
#[inline]
pub fn push_degenerate_open_ring_indices(
    base_ring: u32,
    point: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; DIM]>,
) {
    assert!(nsubdiv > 0);

    for i in 0..nsubdiv - 1 {
        out.push([point, base_ring + i, base_ring + i + 1]);
    }
}

/// Reverses the winding order of the given triangles (flips their normals).
#[inline]
pub fn reverse_clockwising(indices: &mut [[u32; DIM]]) {
    indices.iter_mut().for_each(|idx| idx.swap(0, 1));
}
