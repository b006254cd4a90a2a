// Helpers and proptest strategies shared by the unit tests.
//
// Coordinates are kept small so that generated shapes often share points,
// lie on common lines or touch envelope boundaries.
use crate::data::{Envelope, LineSegment, Point, Vector};

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

pub type Rational = BigRational;

pub fn int(n: i64) -> Rational {
  BigRational::from_integer(BigInt::from(n))
}

pub fn q(numer: i64, denom: i64) -> Rational {
  BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

pub fn pt(x: i64, y: i64) -> Point<Rational> {
  Point::new([int(x), int(y)])
}

pub fn vector(dx: i64, dy: i64) -> Vector<Rational> {
  Vector::new(int(dx), int(dy))
}

// Arguments in (x_min, x_max, y_min, y_max) order.
pub fn envelope(x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Envelope<Rational> {
  Envelope::new(int(x_min), int(x_max), int(y_min), int(y_max)).unwrap()
}

///////////////////////////////////////////////////////////////////////////////
// Strategies

/// Small integers, or halves and quarters of them.
pub fn any_coord() -> impl Strategy<Value = Rational> {
  prop_oneof![
    3 => (-8i64..=8).prop_map(int),
    1 => (-32i64..=32, prop_oneof![Just(2i64), Just(4i64)]).prop_map(|(n, d)| q(n, d)),
  ]
}

pub fn any_point() -> impl Strategy<Value = Point<Rational>> {
  (any_coord(), any_coord()).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn any_vector() -> impl Strategy<Value = Vector<Rational>> {
  (any_coord(), any_coord()).prop_map(|(dx, dy)| Vector::new(dx, dy))
}

/// Segments, including the occasional degenerate one.
pub fn any_segment() -> impl Strategy<Value = LineSegment<Rational>> {
  (any_point(), any_point()).prop_map(|(start, end)| LineSegment::new(start, end))
}

/// Envelopes, including zero-width and zero-height ones.
pub fn any_envelope() -> impl Strategy<Value = Envelope<Rational>> {
  (any_point(), any_point()).prop_map(|(a, b)| Envelope::from_corners(&a, &b))
}
