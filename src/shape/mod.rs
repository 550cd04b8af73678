//! The ROBIN analytic bodies and the triangle-mesh container.

pub use self::cross_section::CrossSection;
pub use self::robin::{RobinBody, SamplingError};
pub use self::superquadric::superquadric_value;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod cross_section;
mod robin;
mod superquadric;
mod trimesh;
