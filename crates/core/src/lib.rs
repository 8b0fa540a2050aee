//! Vector Math Core Library
//!
//! A mutable 2D/3D Euclidean vector for position, velocity, acceleration and
//! direction in animation, physics and graphics code.
//!
//! ## API Surface
//!
//! - [`Vector3`] methods mutate the receiver and return it for chaining
//! - [`ops`] holds pure two-operand functions plus `_into` variants that
//!   write into a caller-supplied target instead of producing a new value
//! - [`angle`] builds unit vectors from an angle or an injected [`RandomSource`]
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`Vector3`]
//! - `nalgebra` (default): conversions to and from `nalgebra::Vector3<f32>`

// Core types and utilities
pub mod core_types;
pub mod error;

#[cfg(feature = "nalgebra")]
mod interop;

pub use core_types::{angle, ops};
pub use core_types::{RandomSource, Vector3};
pub use error::VectorError;
