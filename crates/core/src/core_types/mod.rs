//! Vector value type and the functions built on it

pub mod angle;
pub mod ops;
pub mod random;
pub mod vector3;

pub use angle::{
    from_angle, from_angle_into, random_2d, random_2d_into, random_2d_with, random_3d,
    random_3d_into, random_3d_with,
};
pub use random::RandomSource;
pub use vector3::Vector3;
