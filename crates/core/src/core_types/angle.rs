//! Direction helpers: unit vectors from an angle or from a random source.
//!
//! # Sampling
//! - 2D: heading drawn uniformly from `[0, 2π)`.
//! - 3D: heading from `[0, 2π)` and height `z` from `[-1, 1)`, both uniform.
//!   By Archimedes' hat-box theorem a uniform height gives an area-uniform
//!   point on the unit sphere, so no rejection loop or renormalization is
//!   needed.
//!
//! The bare `random_*` functions draw from `rand`'s thread-local generator.
//! Pass an explicit [`RandomSource`] through the `_with`/`_into` forms for
//! reproducible results.

use super::random::RandomSource;
use super::vector3::Vector3;
use std::f32::consts::TAU;
use tracing::trace;

/// 2D unit vector `(cos(angle), sin(angle), 0)`.
pub fn from_angle(angle: f32) -> Vector3 {
    let mut target = Vector3::ZERO;
    from_angle_into(angle, &mut target);
    target
}

pub fn from_angle_into(angle: f32, target: &mut Vector3) -> &mut Vector3 {
    let (sin, cos) = angle.sin_cos();
    target.set(cos, sin, 0.0)
}

/// Random 2D unit vector from the thread-local generator.
pub fn random_2d() -> Vector3 {
    random_2d_with(&mut rand::rng())
}

pub fn random_2d_with<R: RandomSource + ?Sized>(source: &mut R) -> Vector3 {
    let mut target = Vector3::ZERO;
    random_2d_into(&mut target, source);
    target
}

pub fn random_2d_into<'a, R: RandomSource + ?Sized>(
    target: &'a mut Vector3,
    source: &mut R,
) -> &'a mut Vector3 {
    let angle = source.uniform_range(0.0, TAU);
    trace!(angle, "random 2D direction");
    from_angle_into(angle, target)
}

/// Random 3D unit vector from the thread-local generator.
pub fn random_3d() -> Vector3 {
    random_3d_with(&mut rand::rng())
}

pub fn random_3d_with<R: RandomSource + ?Sized>(source: &mut R) -> Vector3 {
    let mut target = Vector3::ZERO;
    random_3d_into(&mut target, source);
    target
}

pub fn random_3d_into<'a, R: RandomSource + ?Sized>(
    target: &'a mut Vector3,
    source: &mut R,
) -> &'a mut Vector3 {
    let angle = source.uniform_range(0.0, TAU);
    let vz = source.uniform_range(-1.0, 1.0);
    trace!(angle, vz, "random 3D direction");

    let radius = (1.0 - vz * vz).sqrt();
    let (sin, cos) = angle.sin_cos();
    target.set(radius * cos, radius * sin, vz)
}
