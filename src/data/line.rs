use num_traits::*;

use super::{ILineSegment, LineSegment, Point, Vector};
use crate::{Error, ExactNumber, Intersects, Orientation, PrecisionSpec};

///////////////////////////////////////////////////////////////////////////////
// Line

/// An infinite line through `origin` with a non-zero `direction`.
///
/// Two lines are equal (`==`) when they cover the same points, regardless of
/// how they were constructed. [`Line::eq_directed`] also requires the
/// directions to agree.
#[derive(Debug, Clone)]
pub struct Line<T> {
  origin: Point<T>,
  through: Point<T>,
  direction: Vector<T>,
}

impl<T: ExactNumber> Line<T> {
  /// The line through `origin` and `through`. The points must differ.
  pub fn new(origin: Point<T>, through: Point<T>) -> Result<Line<T>, Error> {
    if origin == through {
      crate::log::debug!("line through a single point");
      return Err(Error::DegenerateInput);
    }
    let direction = &through - &origin;
    Ok(Line {
      origin,
      through,
      direction,
    })
  }

  /// The line through `origin` heading along `direction`.
  pub fn from_direction(origin: Point<T>, direction: Vector<T>) -> Result<Line<T>, Error> {
    if direction.is_zero() {
      crate::log::debug!("line with a zero direction");
      return Err(Error::DegenerateInput);
    }
    let through = &origin + &direction;
    Ok(Line {
      origin,
      through,
      direction,
    })
  }

  pub fn origin(&self) -> &Point<T> {
    &self.origin
  }

  pub fn through(&self) -> &Point<T> {
    &self.through
  }

  pub fn direction(&self) -> &Vector<T> {
    &self.direction
  }

  /// The same points traversed the other way.
  #[must_use]
  pub fn reverse(&self) -> Line<T> {
    Line {
      origin: self.through.clone(),
      through: self.origin.clone(),
      direction: self.direction.reverse(),
    }
  }

  #[must_use]
  pub fn translate(&self, offset: &Vector<T>) -> Line<T> {
    Line {
      origin: &self.origin + offset,
      through: &self.through + offset,
      direction: self.direction.clone(),
    }
  }

  /// Which side of the line `pt` is on when walking along the direction.
  pub fn side_of(&self, pt: &Point<T>) -> Orientation {
    Orientation::along_vector(&self.origin, &self.direction, pt)
  }

  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.side_of(pt).is_colinear()
  }

  pub fn is_parallel(&self, other: &Line<T>) -> bool {
    self.direction.cross(&other.direction).is_zero()
  }

  /// Equal as point sets and heading the same way.
  pub fn eq_directed(&self, other: &Line<T>) -> bool {
    self == other && self.direction.dot(&other.direction).is_positive()
  }

  /// The `t` for which `point_at(t)` is the projection of `pt` on the line.
  pub fn parameter_of(&self, pt: &Point<T>) -> T {
    (pt - &self.origin).dot(&self.direction) / self.direction.squared_magnitude()
  }

  /// `origin + t * direction`.
  pub fn point_at(&self, t: &T) -> Point<T> {
    &self.origin + &(&self.direction * t)
  }

  /// Orthogonal projection of `pt` onto the line.
  pub fn project(&self, pt: &Point<T>) -> Point<T> {
    self.point_at(&self.parameter_of(pt))
  }

  pub fn distance_to_point(&self, pt: &Point<T>, precision: &PrecisionSpec) -> Result<T, Error> {
    let cross = self.direction.cross(&(pt - &self.origin));
    (cross.clone() * cross / self.direction.squared_magnitude()).sqrt_rounded(precision)
  }

  /// Distance between two parallel lines.
  pub fn distance(&self, other: &Line<T>, precision: &PrecisionSpec) -> Result<T, Error> {
    if !self.is_parallel(other) {
      return Err(Error::NotParallel);
    }
    self.distance_to_point(&other.origin, precision)
  }

  pub fn intersection(&self, other: &Line<T>) -> Option<ILine<T>> {
    let denom = self.direction.cross(&other.direction);
    if denom.is_zero() {
      return if self.contains(&other.origin) {
        Some(ILine::Coincident(self.clone()))
      } else {
        None
      };
    }
    let t = (&other.origin - &self.origin).cross(&other.direction) / denom;
    Some(ILine::Crossing(self.point_at(&t)))
  }

  /// Intersection with a closed segment. A segment lying on the line is
  /// returned whole.
  pub fn intersection_with_segment(&self, segment: &LineSegment<T>) -> Option<ILineSegment<T>> {
    let start = segment.start();
    let end = segment.end();
    match (self.side_of(start), self.side_of(end)) {
      (Orientation::CoLinear, Orientation::CoLinear) => {
        if segment.is_degenerate() {
          Some(ILineSegment::Crossing(start.clone()))
        } else {
          Some(ILineSegment::Overlap(segment.clone()))
        }
      }
      (Orientation::CoLinear, _) => Some(ILineSegment::Crossing(start.clone())),
      (_, Orientation::CoLinear) => Some(ILineSegment::Crossing(end.clone())),
      (a, b) if a == b => None,
      _ => {
        let d = segment.direction();
        let u = (&self.origin - start).cross(&self.direction) / d.cross(&self.direction);
        Some(ILineSegment::Crossing(segment.point_at(&u)))
      }
    }
  }
}

impl<T: ExactNumber> PartialEq for Line<T> {
  fn eq(&self, other: &Line<T>) -> bool {
    self.is_parallel(other) && self.contains(&other.origin)
  }
}

impl<T: ExactNumber> Eq for Line<T> {}

///////////////////////////////////////////////////////////////////////////////
// ILine

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ILine<T: ExactNumber> {
  Crossing(Point<T>),
  Coincident(Line<T>),
}

impl<'a, T> Intersects for &'a Line<T>
where
  T: ExactNumber,
{
  type Result = ILine<T>;
  fn intersect(self, other: &'a Line<T>) -> Option<Self::Result> {
    self.intersection(other)
  }
}

impl<'a, T> Intersects<&'a LineSegment<T>> for &'a Line<T>
where
  T: ExactNumber,
{
  type Result = ILineSegment<T>;
  fn intersect(self, other: &'a LineSegment<T>) -> Option<Self::Result> {
    self.intersection_with_segment(other)
  }
}

impl<'a, T> Intersects<&'a Line<T>> for &'a LineSegment<T>
where
  T: ExactNumber,
{
  type Result = ILineSegment<T>;
  fn intersect(self, other: &'a Line<T>) -> Option<Self::Result> {
    other.intersection_with_segment(self)
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;
  use crate::RoundingMode;
  use claims::{assert_err, assert_ok};

  use proptest::prelude::*;
  use test_strategy::proptest;

  fn line(x1: i64, y1: i64, x2: i64, y2: i64) -> Line<Rational> {
    Line::new(pt(x1, y1), pt(x2, y2)).unwrap()
  }

  #[test]
  fn construction() {
    assert_eq!(assert_err!(Line::new(pt(1, 1), pt(1, 1))), Error::DegenerateInput);
    assert_eq!(
      assert_err!(Line::from_direction(pt(1, 1), vector(0, 0))),
      Error::DegenerateInput
    );
    let l = assert_ok!(Line::from_direction(pt(1, 1), vector(2, 0)));
    assert_eq!(l.through(), &pt(3, 1));
    assert_eq!(l, line(0, 1, 5, 1));
  }

  #[test]
  fn support_equality() {
    let l = line(0, 0, 1, 1);
    assert_eq!(l, line(5, 5, -2, -2));
    assert_eq!(l, l.reverse());
    assert!(!l.eq_directed(&l.reverse()));
    assert!(l.eq_directed(&line(3, 3, 7, 7)));
    assert_ne!(l, line(0, 1, 1, 2));
    assert_ne!(l, line(0, 0, 1, 2));
  }

  #[test]
  fn crossing() {
    let l1 = line(0, 0, 1, 1);
    let l2 = line(0, 1, 1, 0);
    assert_eq!(
      l1.intersect(&l2),
      Some(ILine::Crossing(Point::new([q(1, 2), q(1, 2)])))
    );
    assert_eq!(l1.intersect(&line(0, 1, 1, 2)), None);
    assert_eq!(l1.intersect(&line(-1, -1, 4, 4)), Some(ILine::Coincident(l1.clone())));
  }

  #[test]
  fn parameters() {
    let l = line(1, 1, 3, 1);
    assert_eq!(l.parameter_of(&pt(2, 7)), q(1, 2));
    assert_eq!(l.point_at(&q(1, 2)), pt(2, 1));
    assert_eq!(l.project(&pt(5, -4)), pt(5, 1));
    assert!(l.contains(&pt(-10, 1)));
    assert_eq!(l.side_of(&pt(0, 2)), Orientation::CounterClockWise);
  }

  #[test]
  fn distances() {
    let precision = PrecisionSpec::new(-5, RoundingMode::HalfUp);
    let l = line(0, 0, 1, 1);
    assert_eq!(l.distance_to_point(&pt(1, 0), &precision), Ok(q(70711, 100000)));
    assert_eq!(l.distance(&line(0, 2, 2, 4), &precision), Ok(q(141421, 100000)));
    assert_eq!(
      assert_err!(l.distance(&line(0, 0, 1, 0), &precision)),
      Error::NotParallel
    );
    assert_eq!(l.distance(&l.reverse(), &precision), Ok(int(0)));
  }

  #[test]
  fn with_segment() {
    let l = line(0, 0, 1, 0);
    let across = LineSegment::new(pt(1, -1), pt(3, 3));
    assert_eq!(
      l.intersect(&across),
      Some(ILineSegment::Crossing(Point::new([q(3, 2), int(0)])))
    );
    let above = LineSegment::new(pt(0, 1), pt(5, 2));
    assert_eq!(l.intersect(&above), None);
    let touching = LineSegment::new(pt(4, 0), pt(5, 2));
    assert_eq!(l.intersect(&touching), Some(ILineSegment::Crossing(pt(4, 0))));
    let on = LineSegment::new(pt(7, 0), pt(-1, 0));
    assert_eq!(l.intersect(&on), Some(ILineSegment::Overlap(on.clone())));
    assert_eq!(on.intersect(&l), Some(ILineSegment::Overlap(on.clone())));
  }

  #[proptest]
  fn crossing_on_both(
    #[strategy(any_point())] a: Point<Rational>,
    #[strategy(any_point())] b: Point<Rational>,
    #[strategy(any_point())] c: Point<Rational>,
    #[strategy(any_point())] d: Point<Rational>,
  ) {
    prop_assume!(a != b && c != d);
    let l1 = Line::new(a, b).unwrap();
    let l2 = Line::new(c, d).unwrap();
    if let Some(ILine::Crossing(p)) = l1.intersect(&l2) {
      prop_assert!(l1.contains(&p));
      prop_assert!(l2.contains(&p));
    }
  }

  #[proptest]
  fn segment_crossing_on_both(
    #[strategy(any_point())] a: Point<Rational>,
    #[strategy(any_point())] b: Point<Rational>,
    #[strategy(any_segment())] s: LineSegment<Rational>,
  ) {
    prop_assume!(a != b);
    let l = Line::new(a, b).unwrap();
    if let Some(ILineSegment::Crossing(p)) = l.intersect(&s) {
      prop_assert!(l.contains(&p));
      prop_assert!(s.contains(&p));
    }
  }
}
