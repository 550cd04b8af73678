//! Piecewise superquadric evaluation of the ROBIN shape parameters.
//!
//! Each of the four cross-section quantities (half-height, half-width,
//! vertical offset, roundness exponent) follows the same eight-coefficient
//! analytic form, with a different coefficient row per axial section. Rows
//! 0–3 cover the fuselage sections, rows 4–5 the pylon sections.

use crate::math::Real;

/// Number of axial sections across both bodies (4 fuselage + 2 pylon).
pub(crate) const NUM_SECTIONS: usize = 6;

// The tables carry the corrections from the Applied-Scientific-Research
// robin-surface-mesh revision of the published NASA coefficients: negated c4
// in the leading fuselage/pylon sections, the c1 -> c6 move for the 0.4..0.8
// row, and unit c3/c7 placeholders on constant rows to keep the power terms
// away from NaN/inf.

/// Coefficients of the cross-section half-height `H`.
pub(crate) const HALF_HEIGHT_COEFFS: [[Real; 8]; NUM_SECTIONS] = [
    [1.0, -1.0, -0.4, -0.4, 1.8, 0.0, 0.25, 1.8],
    [0.0, 0.0, 0.0, 1.0, 0.0, 0.25, 0.0, 1.0],
    [1.0, -1.0, -0.8, 1.1, 1.5, 0.05, 0.2, 0.6],
    [1.0, -1.0, -1.9, 0.1, 2.0, 0.0, 0.05, 2.0],
    [1.0, -1.0, -0.8, -0.4, 3.0, 0.0, 0.145, 3.0],
    [1.0, -1.0, -0.8, 0.218, 2.0, 0.0, 0.145, 2.0],
];

/// Coefficients of the cross-section half-width `W`.
pub(crate) const HALF_WIDTH_COEFFS: [[Real; 8]; NUM_SECTIONS] = [
    [1.0, -1.0, -0.4, -0.4, 2.0, 0.0, 0.25, 2.0],
    [0.0, 0.0, 0.0, 1.0, 0.0, 0.25, 0.0, 1.0],
    [1.0, -1.0, -0.8, 1.1, 1.5, 0.05, 0.2, 0.6],
    [1.0, -1.0, -1.9, 0.1, 2.0, 0.0, 0.05, 2.0],
    [1.0, -1.0, -0.8, -0.4, 3.0, 0.0, 0.166, 3.0],
    [1.0, -1.0, -0.8, 0.218, 2.0, 0.0, 0.166, 2.0],
];

/// Coefficients of the vertical section-center offset `Z0`.
pub(crate) const VERTICAL_OFFSET_COEFFS: [[Real; 8]; NUM_SECTIONS] = [
    [1.0, -1.0, -0.4, -0.4, 1.8, -0.08, 0.08, 1.8],
    [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    [1.0, -1.0, -0.8, 1.1, 1.5, 0.04, -0.04, 0.6],
    [0.0, 0.0, 0.0, 1.0, 0.0, 0.04, 0.0, 1.0],
    [0.0, 0.0, 0.0, 1.0, 0.0, 0.125, 0.0, 1.0],
    [1.0, -1.0, -0.8, 1.1, 1.5, 0.065, 0.06, 0.6],
];

/// Coefficients of the superellipse roundness exponent `N`.
pub(crate) const EXPONENT_COEFFS: [[Real; 8]; NUM_SECTIONS] = [
    [2.0, 3.0, 0.0, 0.4, 1.0, 0.0, 1.0, 1.0],
    [0.0, 0.0, 0.0, 1.0, 0.0, 5.0, 0.0, 1.0],
    [5.0, -3.0, -0.8, 1.1, 1.0, 0.0, 1.0, 1.0],
    [0.0, 0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 1.0],
    [0.0, 0.0, 0.0, 1.0, 0.0, 5.0, 0.0, 1.0],
    [0.0, 0.0, 0.0, 1.0, 0.0, 5.0, 0.0, 1.0],
];

/// Evaluates the eight-coefficient superquadric form at the axial station `x`:
///
/// `c5 + c6 · max(0, c0 + c1·sign(b)·|b|^c4)^(1/c7)` with `b = (x + c2) / c3`.
///
/// The base `b` can be negative while `c4` is fractional, so the power is
/// taken as `sign(b)·|b|^c4` instead of `b^c4`. The inner term can dip below
/// zero near section boundaries and is clamped before the outer fractional
/// power; the derivative kink at the clamp is part of the model.
pub fn superquadric_value(x: Real, c: &[Real; 8]) -> Real {
    let base = (x + c[2]) / c[3];
    let term = c[0] + c[1] * base.signum() * base.abs().powf(c[4]);
    c[5] + c[6] * term.max(0.0).powf(1.0 / c[7])
}
