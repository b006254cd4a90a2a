// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Exact planar geometry.
//!
//! Points, vectors, lines, line segments and envelopes over an exact number
//! type. Predicates (orientation, containment, intersection) never round.
//! Operations whose result is generally not representable (square roots,
//! trigonometry, decimal division) take a [`PrecisionSpec`] and return a
//! correctly rounded value.
//!
//! ```rust
//! # use planar_kernel::data::{LineSegment, Point};
//! # use planar_kernel::{PrecisionSpec, RoundingMode};
//! # use num_rational::BigRational;
//! let int = |v: i64| BigRational::from_integer(v.into());
//! let seg = LineSegment::new(Point::new([int(0), int(0)]), Point::new([int(1), int(1)]));
//! let precision = PrecisionSpec::new(-10, RoundingMode::HalfUp);
//! let expected = BigRational::new(14142135624_i64.into(), 10000000000_i64.into());
//! assert_eq!(seg.length(&precision).unwrap(), expected);
//! ```
use num_rational::BigRational;
use num_traits::*;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Sum;
use std::ops::*;

pub mod algorithms;
pub mod data;
mod intersection;
mod log;
mod orientation;
mod precision;
mod transcendental;

pub use intersection::Intersects;
pub use orientation::Orientation;
pub use precision::{PrecisionSpec, RoundingMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// Coincident points or a zero vector where a direction is required.
  #[error("Degenerate input: a non-zero direction is required")]
  DegenerateInput,
  #[error("Inverted envelope: minimum exceeds maximum")]
  InvertedEnvelope,
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Square root of a negative number")]
  NegativeSquareRoot,
  /// A single scalar distance only exists between parallel lines.
  #[error("Lines are not parallel")]
  NotParallel,
  #[error("Insufficient points")]
  InsufficientPoints,
  #[error("Precision refinement exhausted before the result could be rounded")]
  PrecisionExhausted,
  #[error("Invalid precision specification")]
  InvalidPrecision,
}

/// Exact number type the kernel computes with.
///
/// Addition, subtraction, multiplication, division and comparison are exact.
/// Everything else goes through a [`PrecisionSpec`]. The provided methods
/// evaluate through [`BigRational`]; a backend only has to convert to and
/// from it.
pub trait ExactNumber:
  Debug
  + Clone
  + Ord
  + Hash
  + Neg<Output = Self>
  + NumOps<Self, Self>
  + NumAssignOps
  + Zero
  + One
  + Signed
  + Sum
{
  fn from_constant(val: i8) -> Self;
  fn to_rational(&self) -> BigRational;
  fn from_rational(val: BigRational) -> Self;

  fn round_to(&self, precision: &PrecisionSpec) -> Self {
    Self::from_rational(precision.round(&self.to_rational()))
  }

  fn div_rounded(&self, rhs: &Self, precision: &PrecisionSpec) -> Result<Self, Error> {
    precision::div_rounded(&self.to_rational(), &rhs.to_rational(), precision)
      .map(Self::from_rational)
  }

  fn sqrt_rounded(&self, precision: &PrecisionSpec) -> Result<Self, Error> {
    precision::sqrt_rounded(&self.to_rational(), precision).map(Self::from_rational)
  }

  fn sin(&self, precision: &PrecisionSpec) -> Result<Self, Error> {
    transcendental::sin(&self.to_rational(), precision).map(Self::from_rational)
  }

  fn cos(&self, precision: &PrecisionSpec) -> Result<Self, Error> {
    transcendental::cos(&self.to_rational(), precision).map(Self::from_rational)
  }

  fn tan(&self, precision: &PrecisionSpec) -> Result<Self, Error> {
    transcendental::tan(&self.to_rational(), precision).map(Self::from_rational)
  }

  /// Quadrant-aware arc tangent of `self / x`, in `(-pi, pi]`.
  fn atan2(&self, x: &Self, precision: &PrecisionSpec) -> Result<Self, Error> {
    transcendental::atan2(&self.to_rational(), &x.to_rational(), precision)
      .map(Self::from_rational)
  }

  fn pi(precision: &PrecisionSpec) -> Result<Self, Error> {
    transcendental::pi(precision).map(Self::from_rational)
  }

  fn to_degrees(&self, precision: &PrecisionSpec) -> Result<Self, Error> {
    transcendental::to_degrees(&self.to_rational(), precision).map(Self::from_rational)
  }

  fn to_radians(&self, precision: &PrecisionSpec) -> Result<Self, Error> {
    transcendental::to_radians(&self.to_rational(), precision).map(Self::from_rational)
  }
}

impl ExactNumber for BigRational {
  fn from_constant(val: i8) -> Self {
    BigRational::from_integer(val.into())
  }
  fn to_rational(&self) -> BigRational {
    self.clone()
  }
  fn from_rational(val: BigRational) -> Self {
    val
  }
}

#[cfg(test)]
pub mod testing;
