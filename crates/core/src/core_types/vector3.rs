//! Mutable 3-component vector for positions, velocities and directions.
//!
//! A 2D vector is a [`Vector3`] with `z == 0`; dimensionality is a usage
//! convention, not a separate type.
//!
//! # API shape
//! - Mutators take `&mut self`, change the receiver and return it for chaining
//!   (`v.add(&w).mult(2.0)`).
//! - Queries take `&self` and return a scalar or a new vector.
//! - `*_into` methods write their result into a caller-owned target so hot loops
//!   can reuse one buffer. Pure two-operand forms live in [`super::ops`].
//!
//! # Numeric policy
//! - No hidden normalization; any finite value (including all-zero) is valid.
//! - Division by zero is not checked: components become `±inf`/`NaN` per IEEE-754.
//! - Normalizing a zero vector leaves it unchanged.
//!
//! # Usage
//! ```
//! use vecmath_core::Vector3;
//!
//! let mut v = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.mag(), 5.0);
//!
//! v.normalize().mult(10.0);
//! assert!((v.x - 6.0).abs() < 1e-5);
//! ```

use crate::error::{Result, VectorError};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{AddAssign, DivAssign, Mul, MulAssign, Neg, SubAssign};
use tracing::debug;

/// Three `f32` components; `z` is 0 for 2D use.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }

    /// Create a 2D vector (`z = 0`).
    #[inline]
    #[must_use]
    pub const fn new_2d(x: f32, y: f32) -> Self {
        Vector3 { x, y, z: 0.0 }
    }

    // ========================================================================
    // ASSIGNMENT
    // ========================================================================

    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Set x and y only; z keeps its current value.
    #[inline]
    pub fn set_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Copy all three components from `v`.
    #[inline]
    pub fn set_from(&mut self, v: &Vector3) -> &mut Self {
        self.set(v.x, v.y, v.z)
    }

    /// Set components from a float slice.
    ///
    /// A 2-element slice sets x, y and resets z to 0. Three or more elements
    /// set x, y, z from the first three; extra elements are ignored.
    ///
    /// # Errors
    /// Returns [`VectorError::SourceTooShort`] for slices shorter than 2,
    /// leaving the receiver untouched.
    pub fn set_from_slice(&mut self, source: &[f32]) -> Result<&mut Self> {
        match *source {
            [x, y] => Ok(self.set(x, y, 0.0)),
            [x, y, z, ..] => Ok(self.set(x, y, z)),
            _ => {
                debug!(len = source.len(), "rejecting short source slice");
                Err(VectorError::SourceTooShort { len: source.len() })
            }
        }
    }

    // ========================================================================
    // ARITHMETIC MUTATORS
    // ========================================================================

    #[inline]
    pub fn add(&mut self, v: &Vector3) -> &mut Self {
        self.add_xyz(v.x, v.y, v.z)
    }

    /// 2D convenience: z is untouched.
    #[inline]
    pub fn add_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x += x;
        self.y += y;
        self
    }

    #[inline]
    pub fn add_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x += x;
        self.y += y;
        self.z += z;
        self
    }

    #[inline]
    pub fn sub(&mut self, v: &Vector3) -> &mut Self {
        self.sub_xyz(v.x, v.y, v.z)
    }

    /// 2D convenience: z is untouched.
    #[inline]
    pub fn sub_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.x -= x;
        self.y -= y;
        self
    }

    #[inline]
    pub fn sub_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x -= x;
        self.y -= y;
        self.z -= z;
        self
    }

    /// Scale every component by `n`.
    #[inline]
    pub fn mult(&mut self, n: f32) -> &mut Self {
        self.x *= n;
        self.y *= n;
        self.z *= n;
        self
    }

    /// Divide every component by `n`. Dividing by zero yields `±inf`/`NaN`.
    #[inline]
    pub fn div(&mut self, n: f32) -> &mut Self {
        self.x /= n;
        self.y /= n;
        self.z /= n;
        self
    }

    // ========================================================================
    // MAGNITUDE & PRODUCTS
    // ========================================================================

    #[inline]
    pub fn mag(&self) -> f32 {
        self.mag_sq().sqrt()
    }

    /// Squared magnitude, for comparisons that don't need the square root.
    #[inline]
    pub fn mag_sq(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean distance to `v`.
    #[inline]
    pub fn dist(&self, v: &Vector3) -> f32 {
        let dx = self.x - v.x;
        let dy = self.y - v.y;
        let dz = self.z - v.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    #[inline]
    pub fn dot(&self, v: &Vector3) -> f32 {
        self.dot_xyz(v.x, v.y, v.z)
    }

    #[inline]
    pub fn dot_xyz(&self, x: f32, y: f32, z: f32) -> f32 {
        self.x * x + self.y * y + self.z * z
    }

    /// `self × v` as a new vector.
    #[inline]
    #[must_use]
    pub fn cross(&self, v: &Vector3) -> Vector3 {
        let mut target = Vector3::ZERO;
        self.cross_into(v, &mut target);
        target
    }

    /// Write `self × v` into `target`.
    #[inline]
    pub fn cross_into<'a>(&self, v: &Vector3, target: &'a mut Vector3) -> &'a mut Vector3 {
        target.set(
            self.y * v.z - v.y * self.z,
            self.z * v.x - v.z * self.x,
            self.x * v.y - v.x * self.y,
        )
    }

    // ========================================================================
    // LENGTH CONTROL
    // ========================================================================

    /// Scale to unit length in place.
    ///
    /// A zero vector stays zero and a vector already of magnitude exactly 1
    /// is left as is.
    pub fn normalize(&mut self) -> &mut Self {
        let m = self.mag();
        if m != 0.0 && m != 1.0 {
            self.div(m);
        }
        self
    }

    /// Write the unit vector of `self` into `target`, leaving `self` untouched.
    /// Same zero/unit policy as [`Vector3::normalize`].
    pub fn normalize_into<'a>(&self, target: &'a mut Vector3) -> &'a mut Vector3 {
        target.set_from(self).normalize()
    }

    /// Clamp the magnitude to `max`.
    pub fn limit(&mut self, max: f32) -> &mut Self {
        if self.mag_sq() > max * max {
            self.normalize().mult(max);
        }
        self
    }

    /// Rescale to magnitude `len`. A zero vector stays zero.
    pub fn set_mag(&mut self, len: f32) -> &mut Self {
        self.normalize().mult(len)
    }

    /// Write `self` rescaled to magnitude `len` into `target`.
    pub fn set_mag_into<'a>(&self, len: f32, target: &'a mut Vector3) -> &'a mut Vector3 {
        self.normalize_into(target).mult(len)
    }

    // ========================================================================
    // 2D ORIENTATION
    // ========================================================================

    /// Angle of the (x, y) projection from the positive x-axis, in `(-π, π]`.
    #[inline]
    pub fn heading(&self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Point the (x, y) projection at `angle` keeping the full magnitude.
    /// z is not modified.
    pub fn set_heading(&mut self, angle: f32) -> &mut Self {
        let m = self.mag();
        let (sin, cos) = angle.sin_cos();
        self.set_xy(m * cos, m * sin)
    }

    /// Rotate (x, y) by `theta` radians. z is not modified.
    pub fn rotate(&mut self, theta: f32) -> &mut Self {
        let (sin, cos) = theta.sin_cos();
        let x = self.x;
        self.x = x * cos - self.y * sin;
        self.y = x * sin + self.y * cos;
        self
    }

    // ========================================================================
    // INTERPOLATION
    // ========================================================================

    /// Move towards `v` by `amt`. `amt` is not clamped, so values outside
    /// `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(&mut self, v: &Vector3, amt: f32) -> &mut Self {
        self.lerp_xyz(v.x, v.y, v.z, amt)
    }

    #[inline]
    pub fn lerp_xyz(&mut self, x: f32, y: f32, z: f32, amt: f32) -> &mut Self {
        self.set(
            lerp_component(self.x, x, amt),
            lerp_component(self.y, y, amt),
            lerp_component(self.z, z, amt),
        )
    }

    // ========================================================================
    // EXPORT
    // ========================================================================

    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Copy the components into `buffer`: two slots for a 2-element buffer,
    /// three for anything longer. Slots past the third are not touched.
    ///
    /// # Errors
    /// Returns [`VectorError::BufferTooShort`] for buffers shorter than 2.
    pub fn write_to<'a>(&self, buffer: &'a mut [f32]) -> Result<&'a mut [f32]> {
        let len = buffer.len();
        match &mut *buffer {
            [x, y] => {
                *x = self.x;
                *y = self.y;
            }
            [x, y, z, ..] => {
                *x = self.x;
                *y = self.y;
                *z = self.z;
            }
            _ => {
                debug!(len, "rejecting short export buffer");
                return Err(VectorError::BufferTooShort { len });
            }
        }
        Ok(buffer)
    }
}

/// Interpolate one component; exact at `amt == 0` and `amt == 1`.
#[inline]
pub(crate) fn lerp_component(start: f32, stop: f32, amt: f32) -> f32 {
    start * (1.0 - amt) + stop * amt
}

/// Bit pattern used for hashing. `-0.0` hashes like `0.0` and every NaN
/// hashes alike, so vectors that compare equal always hash equal.
#[inline]
fn canonical_bits(v: f32) -> u32 {
    if v.is_nan() {
        f32::NAN.to_bits()
    } else if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
        canonical_bits(self.z).hash(state);
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Vector3::new(v[0], v[1], v[2])
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> [f32; 3] {
        v.to_array()
    }
}

impl TryFrom<&[f32]> for Vector3 {
    type Error = VectorError;

    fn try_from(source: &[f32]) -> Result<Self> {
        let mut v = Vector3::ZERO;
        v.set_from_slice(source)?;
        Ok(v)
    }
}

// ============================================================================
// OPERATOR TRAITS
// ============================================================================
//
// No `Add`, `Sub` or `Div` impls: their by-value `add`/`sub`/`div` methods
// would be picked over the `&mut self` mutators of the same name whenever the
// trait is in scope. Use the compound-assignment operators or `ops::*`.

impl Mul<f32> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.add(&rhs);
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.sub(&rhs);
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.mult(rhs);
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, rhs: f32) {
        self.div(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::hash_map::DefaultHasher;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn hash_of(v: &Vector3) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Vector3::default(), Vector3::ZERO);
        assert_eq!(Vector3::new_2d(1.0, 2.0), Vector3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_set_variants() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.set_xy(5.0, 6.0);
        assert_eq!(v, Vector3::new(5.0, 6.0, 3.0));

        v.set_from(&Vector3::X);
        assert_eq!(v, Vector3::X);
    }

    #[test]
    fn test_set_from_slice() {
        let mut v = Vector3::new(9.0, 9.0, 9.0);
        v.set_from_slice(&[1.0, 2.0]).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 0.0));

        v.set_from_slice(&[4.0, 5.0, 6.0, 7.0]).unwrap();
        assert_eq!(v, Vector3::new(4.0, 5.0, 6.0));

        let err = v.set_from_slice(&[1.0]).unwrap_err();
        assert_eq!(err, VectorError::SourceTooShort { len: 1 });
        assert_eq!(v, Vector3::new(4.0, 5.0, 6.0), "failed set must not modify");
    }

    #[test]
    fn test_two_component_add_sub_leave_z() {
        let mut v = Vector3::new(1.0, 1.0, 7.0);
        v.add_xy(2.0, 3.0);
        assert_eq!(v, Vector3::new(3.0, 4.0, 7.0));
        v.sub_xy(1.0, 1.0);
        assert_eq!(v, Vector3::new(2.0, 3.0, 7.0));
    }

    #[test]
    fn test_chained_mutation() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.add(&Vector3::new(1.0, 1.0, 1.0)).mult(2.0).sub_xyz(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3::new(3.0, 5.0, 7.0));
    }

    #[test]
    fn test_div_by_zero_follows_ieee() {
        let mut v = Vector3::new(1.0, -1.0, 0.0);
        v.div(0.0);
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn test_mag_and_dist() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.mag(), 5.0);
        assert_eq!(v.mag_sq(), 25.0);
        assert_eq!(v.dist(&Vector3::ZERO), 5.0);
        assert_eq!(Vector3::new(1.0, 1.0, 1.0).dist(&Vector3::new(1.0, 1.0, 3.0)), 2.0);
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a.dot(&Vector3::new(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(a.dot_xyz(4.0, 5.0, 6.0), 32.0);

        assert_eq!(Vector3::X.cross(&Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(&Vector3::X), -Vector3::Z);
    }

    #[test]
    fn test_cross_into_reuses_target() {
        let mut target = Vector3::new(9.0, 9.0, 9.0);
        let written = Vector3::Y.cross_into(&Vector3::Z, &mut target);
        assert_eq!(*written, Vector3::X);
        assert_eq!(target, Vector3::X);
    }

    #[test]
    fn test_normalize_policy() {
        let mut v = Vector3::new(0.0, 3.0, 4.0);
        v.normalize();
        assert_relative_eq!(v.mag(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 0.6, epsilon = 1e-6);

        let mut zero = Vector3::ZERO;
        zero.normalize();
        assert_eq!(zero, Vector3::ZERO);

        let mut unit = Vector3::X;
        unit.normalize();
        assert_eq!(unit, Vector3::X);
    }

    #[test]
    fn test_normalize_into_leaves_receiver() {
        let v = Vector3::new(10.0, 0.0, 0.0);
        let mut target = Vector3::ZERO;
        v.normalize_into(&mut target);
        assert_eq!(target, Vector3::X);
        assert_eq!(v, Vector3::new(10.0, 0.0, 0.0));

        let mut target = Vector3::new(5.0, 5.0, 5.0);
        Vector3::ZERO.normalize_into(&mut target);
        assert_eq!(target, Vector3::ZERO, "zero copies through");
    }

    #[test]
    fn test_limit() {
        let mut v = Vector3::new(30.0, 40.0, 0.0);
        v.limit(5.0);
        assert_relative_eq!(v.mag(), 5.0, epsilon = 1e-5);
        assert_relative_eq!(v.x, 3.0, epsilon = 1e-5);

        let mut small = Vector3::new(1.0, 1.0, 0.0);
        small.limit(5.0);
        assert_eq!(small, Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_set_mag() {
        let mut v = Vector3::new(0.0, 2.0, 0.0);
        v.set_mag(7.0);
        assert_eq!(v, Vector3::new(0.0, 7.0, 0.0));

        let src = Vector3::new(0.0, 0.0, 2.0);
        let mut target = Vector3::ZERO;
        src.set_mag_into(3.0, &mut target);
        assert_eq!(target, Vector3::new(0.0, 0.0, 3.0));
        assert_eq!(src, Vector3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_set_mag_and_limit_keep_zero() {
        let mut v = Vector3::ZERO;
        v.set_mag(4.0);
        assert_eq!(v, Vector3::ZERO);
        assert!(!v.x.is_nan());

        let mut v = Vector3::ZERO;
        v.limit(1.0);
        assert_eq!(v, Vector3::ZERO);

        let mut target = Vector3::new(1.0, 2.0, 3.0);
        Vector3::ZERO.set_mag_into(4.0, &mut target);
        assert_eq!(target, Vector3::ZERO);
    }

    #[test]
    fn test_heading() {
        assert_eq!(Vector3::X.heading(), 0.0);
        assert_relative_eq!(Vector3::Y.heading(), FRAC_PI_2);
        assert_relative_eq!(Vector3::new(-1.0, 0.0, 0.0).heading(), PI);
        // z is ignored
        assert_eq!(Vector3::new(1.0, 0.0, 100.0).heading(), 0.0);
    }

    #[test]
    fn test_set_heading_keeps_z() {
        let mut v = Vector3::new(3.0, 4.0, 0.0);
        v.set_heading(0.0);
        assert_relative_eq!(v.x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-5);

        let mut v = Vector3::new(1.0, 0.0, 2.0);
        v.set_heading(FRAC_PI_2);
        assert_eq!(v.z, 2.0);
    }

    #[test]
    fn test_rotate() {
        let mut v = Vector3::new(1.0, 0.0, 5.0);
        v.rotate(FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
        assert_eq!(v.z, 5.0);

        // uses the pre-rotation x for y
        let mut v = Vector3::new(1.0, 1.0, 0.0);
        v.rotate(PI);
        assert_relative_eq!(v.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_lerp_endpoints_and_extrapolation() {
        let a = Vector3::new(0.1, -2.5, 7.3);
        let b = Vector3::new(0.3, 4.25, -1.9);

        let mut v = a;
        v.lerp(&b, 0.0);
        assert_eq!(v, a);

        let mut v = a;
        v.lerp(&b, 1.0);
        assert_eq!(v, b);

        let mut v = Vector3::ZERO;
        v.lerp_xyz(10.0, 0.0, 0.0, 2.0);
        assert_eq!(v, Vector3::new(20.0, 0.0, 0.0));
    }

    #[test]
    fn test_write_to() {
        let v = Vector3::new(1.0, 2.0, 3.0);

        let mut two = [0.0; 2];
        v.write_to(&mut two).unwrap();
        assert_eq!(two, [1.0, 2.0]);

        let mut four = [9.0; 4];
        v.write_to(&mut four).unwrap();
        assert_eq!(four, [1.0, 2.0, 3.0, 9.0]);

        let mut one = [0.0; 1];
        assert_eq!(
            v.write_to(&mut one).unwrap_err(),
            VectorError::BufferTooShort { len: 1 }
        );
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, 2.5, -3.0).to_string(), "[ 1, 2.5, -3 ]");
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Vector3::new(0.1, 0.2, 0.3);
        assert_eq!(a, Vector3::new(0.1, 0.2, 0.3));
        assert_ne!(a, Vector3::new(0.1, 0.2, 0.300_001));
    }

    #[test]
    fn test_hash_canonicalizes_zero_and_nan() {
        assert_eq!(
            hash_of(&Vector3::new(0.0, 1.0, 2.0)),
            hash_of(&Vector3::new(-0.0, 1.0, 2.0))
        );
        let nan_a = Vector3::new(f32::NAN, 0.0, 0.0);
        let nan_b = Vector3::new(f32::from_bits(0x7fc0_0001), 0.0, 0.0);
        assert_eq!(hash_of(&nan_a), hash_of(&nan_b));
        assert_ne!(hash_of(&Vector3::X), hash_of(&Vector3::Y));
    }

    #[test]
    fn test_operator_traits() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vector3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_conversions() {
        let v: Vector3 = [1.0, 2.0, 3.0].into();
        let arr: [f32; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);

        let slice: &[f32] = &[1.0, 2.0];
        assert_eq!(Vector3::try_from(slice).unwrap(), Vector3::new_2d(1.0, 2.0));
        let empty: &[f32] = &[];
        assert!(Vector3::try_from(empty).is_err());
    }
}
