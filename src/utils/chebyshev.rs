use crate::math::Real;
use na::RealField;

/// Computes the `n + 1` Chebyshev nodes covering `[a, b]`.
///
/// Node `k` is `0.5·(a+b) + 0.5·(b−a)·cos((2(n−k))·π/(2n))`, so the nodes
/// increase monotonically from `a` to `b` and cluster toward both interval
/// ends. The two endpoints are snapped exactly to `a` and `b`: the cosine
/// form drifts by a few ulps there, and downstream consumers rely on the end
/// stations being exact.
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use robin3d::utils::chebyshev_nodes;
///
/// let nodes = chebyshev_nodes(0.0, 2.0, 8);
/// assert_eq!(nodes.len(), 9);
/// assert_eq!(nodes[0], 0.0);
/// assert_eq!(nodes[8], 2.0);
/// # }
/// ```
pub fn chebyshev_nodes(a: Real, b: Real, n: u32) -> Vec<Real> {
    assert!(n > 0);

    let mid = 0.5 * (a + b);
    let half_span = 0.5 * (b - a);
    let mut nodes: Vec<Real> = (0..=n)
        .map(|k| {
            let angle = (2 * (n - k)) as Real * Real::pi() * 0.5 / (n as Real);
            mid + half_span * angle.cos()
        })
        .collect();

    nodes[0] = a;
    nodes[n as usize] = b;
    nodes
}
