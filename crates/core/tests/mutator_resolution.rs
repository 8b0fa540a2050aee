//! Mutator methods must stay in-place when the std operator traits are imported
//!
//! `add`, `sub` and `div` share names with `std::ops` trait methods; these tests
//! pin that calling them on an owned vector still mutates it.

#[allow(unused_imports)]
use std::ops::{Add, Div, Sub};
use vecmath_core::Vector3;

#[test]
fn test_add_mutates_with_ops_in_scope() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    v.add(&Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
}

#[test]
fn test_sub_mutates_with_ops_in_scope() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    v.sub(&Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(v, Vector3::new(0.0, 1.0, 2.0));
}

#[test]
fn test_div_mutates_with_ops_in_scope() {
    let mut v = Vector3::new(2.0, 4.0, 6.0);
    v.div(2.0);
    assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_chained_mutators_with_ops_in_scope() {
    let mut v = Vector3::new(2.0, 4.0, 6.0);
    v.add(&Vector3::X).sub(&Vector3::Y).div(2.0);
    assert_eq!(v, Vector3::new(1.5, 1.5, 3.0));
}
