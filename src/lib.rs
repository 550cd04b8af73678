/*!
robin3d
========

**robin3d** generates triangulated surface meshes for the ROBIN (ROtor Body
INteraction) generic helicopter fuselage and pylon, written with the rust
programming language.

The boundary of each body is described by a closed-form piecewise
superquadric cross-section model. Sampling it on Chebyshev stations along the
body axis and uniform circumferential angles, then stitching the resulting
grid of rings, produces a closed, pole-free triangle mesh ready for export to
Wavefront OBJ, PLY or STL.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

#[cfg(not(any(feature = "f32", feature = "f64")))]
std::compile_error!("robin3d requires either the `f32` or the `f64` feature to be enabled.");

#[macro_use]
extern crate approx;
#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
