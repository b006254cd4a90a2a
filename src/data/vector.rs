use array_init::array_init;
use num_traits::*;
use std::iter::Sum;
use std::ops::Index;
use std::ops::Neg;

use crate::data::Point;
use crate::{Error, ExactNumber, Orientation, PrecisionSpec};

/// A displacement `(dx, dy)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Vector<T>(pub [T; 2]);

impl<T> Vector<T> {
  pub const fn new(dx: T, dy: T) -> Vector<T> {
    Vector([dx, dy])
  }

  pub fn dx(&self) -> &T {
    &self.0[0]
  }

  pub fn dy(&self) -> &T {
    &self.0[1]
  }
}

impl<T: ExactNumber> Vector<T> {
  #[must_use]
  pub fn scale(&self, factor: &T) -> Vector<T> {
    self * factor
  }

  #[must_use]
  pub fn reverse(&self) -> Vector<T> {
    -self.clone()
  }

  /// The vector rotated a quarter turn counter-clockwise.
  #[must_use]
  pub fn perpendicular(&self) -> Vector<T> {
    Vector::new(-self.dy().clone(), self.dx().clone())
  }

  pub fn dot(&self, other: &Vector<T>) -> T {
    self.dx().clone() * other.dx().clone() + self.dy().clone() * other.dy().clone()
  }

  /// The z component of the 3D cross product, `dx1*dy2 - dx2*dy1`.
  pub fn cross(&self, other: &Vector<T>) -> T {
    self.dx().clone() * other.dy().clone() - other.dx().clone() * self.dy().clone()
  }

  /// Sign of [`Vector::cross`]: counter-clockwise when `other` turns left of
  /// `self`.
  pub fn cross_product_sign(&self, other: &Vector<T>) -> Orientation {
    Orientation::of_vectors(self, other)
  }

  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }

  pub fn magnitude(&self, precision: &PrecisionSpec) -> Result<T, Error> {
    self.squared_magnitude().sqrt_rounded(precision)
  }

  /// Unit vector in the same direction. Each component is rounded on its own,
  /// computed as `±sqrt(c^2 / |v|^2)` so that it is correctly rounded.
  pub fn normalize(&self, precision: &PrecisionSpec) -> Result<Vector<T>, Error> {
    let squared = self.squared_magnitude();
    if squared.is_zero() {
      crate::log::debug!("cannot normalize the zero vector");
      return Err(Error::DegenerateInput);
    }
    let component = |c: &T| -> Result<T, Error> {
      let ratio = c.clone() * c.clone() / squared.clone();
      if c.is_negative() {
        Ok(-ratio.sqrt_rounded(&precision.negated())?)
      } else {
        ratio.sqrt_rounded(precision)
      }
    };
    Ok(Vector::new(component(self.dx())?, component(self.dy())?))
  }

  /// Angle from the positive x axis, in `(-pi, pi]`.
  pub fn angle(&self, precision: &PrecisionSpec) -> Result<T, Error> {
    if self.is_zero() {
      return Err(Error::DegenerateInput);
    }
    self.dy().atan2(self.dx(), precision)
  }

  /// Signed angle turning `self` onto `other`, in `(-pi, pi]`. Positive when
  /// the turn is counter-clockwise.
  pub fn angle_to(&self, other: &Vector<T>, precision: &PrecisionSpec) -> Result<T, Error> {
    if self.is_zero() || other.is_zero() {
      return Err(Error::DegenerateInput);
    }
    self.cross(other).atan2(&self.dot(other), precision)
  }
}

impl<T> Index<usize> for Vector<T> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T> From<Point<T>> for Vector<T> {
  fn from(point: Point<T>) -> Vector<T> {
    Vector(point.array)
  }
}

mod add;
mod div;
mod mul;
mod sub;

impl<T> Zero for Vector<T>
where
  T: NumOps + Zero + Clone,
{
  fn zero() -> Vector<T> {
    Vector(array_init(|_| Zero::zero()))
  }
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl<T> Sum for Vector<T>
where
  T: NumOps + Zero + Clone,
{
  fn sum<I>(iter: I) -> Vector<T>
  where
    I: Iterator<Item = Vector<T>>,
  {
    iter.fold(Zero::zero(), |acc, vec| acc + vec)
  }
}

impl<T> Neg for Vector<T>
where
  T: Neg<Output = T> + Clone,
{
  type Output = Self;
  fn neg(self) -> Self {
    Vector(array_init(|i| self.0.index(i).clone().neg()))
  }
}
