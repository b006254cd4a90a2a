use array_init::array_init;
use num_traits::*;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use super::{Envelope, Vector};
use crate::{Error, ExactNumber, Orientation, PrecisionSpec};

/// An absolute position in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }

  // Similar to num_traits::identities::Zero but doesn't require an Add impl.
  pub fn zero() -> Self
  where
    T: Zero,
  {
    Point {
      array: array_init(|_| Zero::zero()),
    }
  }
}

impl<T: ExactNumber> Point<T> {
  /// The point whose coordinates are those of `self` multiplied by `factor`.
  #[must_use]
  pub fn scale(&self, factor: &T) -> Point<T> {
    self.cast(|c| c * factor.clone())
  }

  #[must_use]
  pub fn translate(&self, offset: &Vector<T>) -> Point<T> {
    self + offset
  }

  /// Displacement from `self` to `other`.
  pub fn vector_to(&self, other: &Point<T>) -> Vector<T> {
    other - self
  }

  pub fn squared_distance(&self, other: &Point<T>) -> T {
    self.vector_to(other).squared_magnitude()
  }

  pub fn distance(&self, other: &Point<T>, precision: &PrecisionSpec) -> Result<T, Error> {
    self.squared_distance(other).sqrt_rounded(precision)
  }

  /// Compare the distances from `self` to `p` and to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    self.squared_distance(p).cmp(&self.squared_distance(q))
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(self, q, r)
  }

  /// Compare `p` and `q` by counter-clockwise angle around `self`, starting
  /// from the positive x axis.
  pub fn ccw_cmp_around(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    self.ccw_cmp_around_with(&Vector::new(T::one(), T::zero()), p, q)
  }

  pub fn ccw_cmp_around_with(&self, z: &Vector<T>, p: &Point<T>, q: &Point<T>) -> Ordering {
    Orientation::ccw_cmp_around_with(z, self, p, q)
  }

  /// Arithmetic mean of a set of points.
  pub fn centroid<'a, I>(points: I) -> Result<Point<T>, Error>
  where
    I: IntoIterator<Item = &'a Point<T>>,
    T: 'a,
  {
    let mut count = T::zero();
    let mut sum = Vector::zero();
    for pt in points {
      sum = sum + Vector::from(pt.clone());
      count += T::one();
    }
    if count.is_zero() {
      return Err(Error::InsufficientPoints);
    }
    Ok(Point::from(sum / count))
  }

  /// The zero-area envelope holding only this point.
  pub fn envelope(&self) -> Envelope<T> {
    Envelope::from_point(self)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<Vector<T>> for Point<T> {
  fn from(vector: Vector<T>) -> Point<T> {
    Point { array: vector.0 }
  }
}

mod add;
mod sub;
