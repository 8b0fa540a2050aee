//! Conversions to and from `nalgebra` vectors.
//!
//! Lets physics code that stores `nalgebra::Vector3<f32>` hand positions and
//! velocities to this crate without copying component by component.

use crate::core_types::Vector3;

impl From<nalgebra::Vector3<f32>> for Vector3 {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f32> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
