//! Two-operand vector functions.
//!
//! Each operation comes in two forms:
//! - a pure function returning a new [`Vector3`] (`add(&a, &b)`)
//! - an `_into` function writing into a caller-owned target and returning it
//!   (`add_into(&a, &b, &mut out)`), for loops that reuse one buffer
//!
//! Operands are never modified. The target is only borrowed for the call.

use super::vector3::{lerp_component, Vector3};
use std::f32::consts::PI;
use tracing::trace;

pub fn add(v1: &Vector3, v2: &Vector3) -> Vector3 {
    Vector3::new(v1.x + v2.x, v1.y + v2.y, v1.z + v2.z)
}

pub fn add_into<'a>(v1: &Vector3, v2: &Vector3, target: &'a mut Vector3) -> &'a mut Vector3 {
    target.set(v1.x + v2.x, v1.y + v2.y, v1.z + v2.z)
}

pub fn sub(v1: &Vector3, v2: &Vector3) -> Vector3 {
    Vector3::new(v1.x - v2.x, v1.y - v2.y, v1.z - v2.z)
}

pub fn sub_into<'a>(v1: &Vector3, v2: &Vector3, target: &'a mut Vector3) -> &'a mut Vector3 {
    target.set(v1.x - v2.x, v1.y - v2.y, v1.z - v2.z)
}

pub fn mult(v: &Vector3, n: f32) -> Vector3 {
    *v * n
}

pub fn mult_into<'a>(v: &Vector3, n: f32, target: &'a mut Vector3) -> &'a mut Vector3 {
    target.set(v.x * n, v.y * n, v.z * n)
}

/// Component-wise division. A zero divisor yields `±inf`/`NaN`.
pub fn div(v: &Vector3, n: f32) -> Vector3 {
    Vector3::new(v.x / n, v.y / n, v.z / n)
}

pub fn div_into<'a>(v: &Vector3, n: f32, target: &'a mut Vector3) -> &'a mut Vector3 {
    target.set(v.x / n, v.y / n, v.z / n)
}

pub fn dist(v1: &Vector3, v2: &Vector3) -> f32 {
    v1.dist(v2)
}

pub fn dot(v1: &Vector3, v2: &Vector3) -> f32 {
    v1.dot(v2)
}

/// `v1 × v2`.
pub fn cross(v1: &Vector3, v2: &Vector3) -> Vector3 {
    v1.cross(v2)
}

pub fn cross_into<'a>(v1: &Vector3, v2: &Vector3, target: &'a mut Vector3) -> &'a mut Vector3 {
    v1.cross_into(v2, target)
}

/// Unit vector in the direction of `v`; the zero vector maps to itself.
pub fn normalize(v: &Vector3) -> Vector3 {
    let mut target = *v;
    target.normalize();
    target
}

pub fn normalize_into<'a>(v: &Vector3, target: &'a mut Vector3) -> &'a mut Vector3 {
    v.normalize_into(target)
}

pub fn set_mag(v: &Vector3, len: f32) -> Vector3 {
    let mut target = *v;
    target.set_mag(len);
    target
}

pub fn set_mag_into<'a>(v: &Vector3, len: f32, target: &'a mut Vector3) -> &'a mut Vector3 {
    v.set_mag_into(len, target)
}

/// Linear interpolation from `v1` (`amt = 0`) to `v2` (`amt = 1`).
/// `amt` is not clamped.
pub fn lerp(v1: &Vector3, v2: &Vector3, amt: f32) -> Vector3 {
    let mut target = Vector3::ZERO;
    lerp_into(v1, v2, amt, &mut target);
    target
}

pub fn lerp_into<'a>(
    v1: &Vector3,
    v2: &Vector3,
    amt: f32,
    target: &'a mut Vector3,
) -> &'a mut Vector3 {
    target.set(
        lerp_component(v1.x, v2.x, amt),
        lerp_component(v1.y, v2.y, amt),
        lerp_component(v1.z, v2.z, amt),
    )
}

/// Unsigned angle between two vectors, in `[0, π]`.
///
/// Returns 0 when either operand is the zero vector. The cosine is computed
/// in `f64` and clamped to `[-1, 1]` so rounding can never produce `NaN`.
pub fn angle_between(v1: &Vector3, v2: &Vector3) -> f32 {
    if *v1 == Vector3::ZERO || *v2 == Vector3::ZERO {
        trace!("angle_between: zero vector operand, returning 0");
        return 0.0;
    }

    let (x1, y1, z1) = (f64::from(v1.x), f64::from(v1.y), f64::from(v1.z));
    let (x2, y2, z2) = (f64::from(v2.x), f64::from(v2.y), f64::from(v2.z));

    let dot = x1 * x2 + y1 * y2 + z1 * z2;
    let v1_mag = (x1 * x1 + y1 * y1 + z1 * z1).sqrt();
    let v2_mag = (x2 * x2 + y2 * y2 + z2 * z2).sqrt();
    let amt = dot / (v1_mag * v2_mag);

    if amt <= -1.0 {
        PI
    } else if amt >= 1.0 {
        0.0
    } else {
        amt.acos() as f32
    }
}
