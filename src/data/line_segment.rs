use num_traits::*;
use std::cmp::Ordering;
use std::ops::RangeInclusive;

use super::{Envelope, Line, Point, Vector};
use crate::{Error, ExactNumber, Intersects, Orientation, PrecisionSpec};

///////////////////////////////////////////////////////////////////////////////
// EndPoint

/// A bound that either includes or excludes its value.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndPoint<T> {
  Exclusive(T),
  Inclusive(T),
}

use EndPoint::*;

impl<T> EndPoint<T> {
  pub fn inner(&self) -> &T {
    match self {
      Exclusive(t) => t,
      Inclusive(t) => t,
    }
  }

  pub fn take(self) -> T {
    match self {
      Exclusive(t) => t,
      Inclusive(t) => t,
    }
  }

  pub fn is_exclusive(&self) -> bool {
    match self {
      Exclusive(_) => true,
      Inclusive(_) => false,
    }
  }

  pub fn is_inclusive(&self) -> bool {
    !self.is_exclusive()
  }

  /// The smaller bound. Exclusive wins ties.
  #[must_use]
  pub fn leftmost(self, other: EndPoint<T>) -> EndPoint<T>
  where
    T: Ord,
  {
    match self.inner().cmp(other.inner()) {
      Ordering::Equal => {
        if self.is_exclusive() {
          self
        } else {
          other
        }
      }
      Ordering::Less => self,
      Ordering::Greater => other,
    }
  }

  /// The larger bound. Exclusive wins ties.
  #[must_use]
  pub fn rightmost(self, other: EndPoint<T>) -> EndPoint<T>
  where
    T: Ord,
  {
    match self.inner().cmp(other.inner()) {
      Ordering::Equal => {
        if self.is_exclusive() || other.is_exclusive() {
          Exclusive(self.take())
        } else {
          other
        }
      }
      Ordering::Less => other,
      Ordering::Greater => self,
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// The closed segment from `start` to `end`.
///
/// Segments are directed: `(p, q)` and `(q, p)` are different values that
/// cover the same points (see [`LineSegment::eq_ignore_direction`]). A
/// segment with `start == end` is allowed and behaves as a single point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment<T> {
  start: Point<T>,
  end: Point<T>,
}

impl<T> LineSegment<T> {
  pub fn new(start: Point<T>, end: Point<T>) -> LineSegment<T> {
    LineSegment { start, end }
  }

  pub fn start(&self) -> &Point<T> {
    &self.start
  }

  pub fn end(&self) -> &Point<T> {
    &self.end
  }
}

impl<T: ExactNumber> LineSegment<T> {
  pub fn is_degenerate(&self) -> bool {
    self.start == self.end
  }

  /// `end - start`. Zero for degenerate segments.
  pub fn direction(&self) -> Vector<T> {
    &self.end - &self.start
  }

  /// The infinite line through both endpoints.
  pub fn support_line(&self) -> Result<Line<T>, Error> {
    Line::new(self.start.clone(), self.end.clone())
  }

  #[must_use]
  pub fn reverse(&self) -> LineSegment<T> {
    LineSegment::new(self.end.clone(), self.start.clone())
  }

  #[must_use]
  pub fn translate(&self, offset: &Vector<T>) -> LineSegment<T> {
    LineSegment::new(&self.start + offset, &self.end + offset)
  }

  pub fn eq_ignore_direction(&self, other: &LineSegment<T>) -> bool {
    self == other || (self.start == other.end && self.end == other.start)
  }

  pub fn length_squared(&self) -> T {
    self.direction().squared_magnitude()
  }

  pub fn length(&self, precision: &PrecisionSpec) -> Result<T, Error> {
    self.length_squared().sqrt_rounded(precision)
  }

  pub fn midpoint(&self) -> Point<T> {
    self.point_at(&(T::one() / T::from_constant(2)))
  }

  /// `start + t * (end - start)`.
  pub fn point_at(&self, t: &T) -> Point<T> {
    &self.start + &(&self.direction() * t)
  }

  pub fn envelope(&self) -> Envelope<T> {
    Envelope::from_corners(&self.start, &self.end)
  }

  /// Parallel segments have colinear directions. Degenerate segments are
  /// parallel to everything.
  pub fn is_parallel(&self, other: &LineSegment<T>) -> bool {
    self.direction().cross(&other.direction()).is_zero()
  }

  /// True if `pt` lies on the closed segment.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    let d = self.direction();
    let offset = pt - &self.start;
    if !Orientation::of_vectors(&d, &offset).is_colinear() {
      return false;
    }
    let along = d.dot(&offset);
    !along.is_negative() && along <= d.squared_magnitude()
  }

  /// Distance from `pt` to the closest point of the segment.
  pub fn distance_to_point(&self, pt: &Point<T>, precision: &PrecisionSpec) -> Result<T, Error> {
    let d = self.direction();
    let len = d.squared_magnitude();
    if len.is_zero() {
      return self.start.distance(pt, precision);
    }
    let t = (pt - &self.start).dot(&d) / len;
    let t = t.max(T::zero()).min(T::one());
    self.point_at(&t).distance(pt, precision)
  }

  /// Intersection of two closed segments.
  ///
  /// Crossing or touching segments meet in a point. Colinear segments that
  /// share more than a point overlap in a segment oriented like `self`.
  pub fn intersection(&self, other: &LineSegment<T>) -> Option<ILineSegment<T>> {
    if self.is_degenerate() {
      return if other.contains(&self.start) {
        Some(ILineSegment::Crossing(self.start.clone()))
      } else {
        None
      };
    }
    if other.is_degenerate() {
      return if self.contains(&other.start) {
        Some(ILineSegment::Crossing(other.start.clone()))
      } else {
        None
      };
    }
    let d1 = self.direction();
    let d2 = other.direction();
    let offset = &other.start - &self.start;
    let denom = d1.cross(&d2);
    if denom.is_zero() {
      if !d1.cross(&offset).is_zero() {
        // Parallel but on different lines.
        return None;
      }
      let len = d1.squared_magnitude();
      let t0 = offset.dot(&d1) / len.clone();
      let t1 = (&other.end - &self.start).dot(&d1) / len;
      let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
      let lo = lo.max(T::zero());
      let hi = hi.min(T::one());
      match lo.cmp(&hi) {
        Ordering::Greater => None,
        Ordering::Equal => Some(ILineSegment::Crossing(self.point_at(&lo))),
        Ordering::Less => Some(ILineSegment::Overlap(LineSegment::new(
          self.point_at(&lo),
          self.point_at(&hi),
        ))),
      }
    } else {
      // Cramer's rule on start1 + t*d1 = start2 + u*d2.
      let t = offset.cross(&d2) / denom.clone();
      let u = offset.cross(&d1) / denom;
      let in_unit = |v: &T| !v.is_negative() && v <= &T::one();
      if in_unit(&t) && in_unit(&u) {
        Some(ILineSegment::Crossing(self.point_at(&t)))
      } else {
        None
      }
    }
  }
}

impl<T> From<(Point<T>, Point<T>)> for LineSegment<T> {
  fn from((start, end): (Point<T>, Point<T>)) -> LineSegment<T> {
    LineSegment::new(start, end)
  }
}

impl<T> From<RangeInclusive<Point<T>>> for LineSegment<T> {
  fn from(range: RangeInclusive<Point<T>>) -> LineSegment<T> {
    let (start, end) = range.into_inner();
    LineSegment::new(start, end)
  }
}

///////////////////////////////////////////////////////////////////////////////
// ILineSegment

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ILineSegment<T> {
  Crossing(Point<T>),         // Segments meet in exactly one point.
  Overlap(LineSegment<T>),    // Segments are colinear and share a segment.
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

impl<'a, T> Intersects for &'a LineSegment<T>
where
  T: ExactNumber,
{
  type Result = ILineSegment<T>;
  fn intersect(self, other: &'a LineSegment<T>) -> Option<Self::Result> {
    self.intersection(other)
  }
}

impl<'a, T> Intersects for &'a RangeInclusive<Point<T>>
where
  T: ExactNumber,
{
  type Result = ILineSegment<T>;
  fn intersect(self, other: &'a RangeInclusive<Point<T>>) -> Option<Self::Result> {
    let this = LineSegment::new(self.start().clone(), self.end().clone());
    this.intersection(&LineSegment::new(other.start().clone(), other.end().clone()))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;
  use crate::RoundingMode;
  use claims::{assert_none, assert_ok};
  use ILineSegment::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  fn same(a: &Option<ILineSegment<Rational>>, b: &Option<ILineSegment<Rational>>) -> bool {
    match (a, b) {
      (Some(Overlap(x)), Some(Overlap(y))) => x.eq_ignore_direction(y),
      _ => a == b,
    }
  }

  #[proptest]
  fn flip_intersects_prop(
    #[strategy(any_segment())] l1: LineSegment<Rational>,
    #[strategy(any_segment())] l2: LineSegment<Rational>,
  ) {
    prop_assert!(same(&l1.intersect(&l2), &l2.intersect(&l1)));
  }

  #[proptest]
  fn crossing_lies_on_both(
    #[strategy(any_segment())] l1: LineSegment<Rational>,
    #[strategy(any_segment())] l2: LineSegment<Rational>,
  ) {
    match l1.intersection(&l2) {
      Some(Crossing(pt)) => {
        prop_assert!(l1.contains(&pt));
        prop_assert!(l2.contains(&pt));
      }
      Some(Overlap(seg)) => {
        prop_assert!(l1.contains(seg.start()) && l1.contains(seg.end()));
        prop_assert!(l2.contains(seg.start()) && l2.contains(seg.end()));
      }
      None => {}
    }
  }

  #[proptest]
  fn direction_equality(
    #[strategy(any_point())] p: Point<Rational>,
    #[strategy(any_point())] q: Point<Rational>,
  ) {
    let pq = LineSegment::new(p.clone(), q.clone());
    let qp = LineSegment::new(q.clone(), p.clone());
    prop_assert!(pq.eq_ignore_direction(&qp));
    prop_assert_eq!(pq == qp, p == q);
  }

  //             P6
  //
  // P7      P5
  //
  // P4  P2
  //
  // P1  P3
  //
  fn p1() -> Point<Rational> {
    pt(0, 0)
  }
  fn p2() -> Point<Rational> {
    pt(1, 1)
  }
  fn p3() -> Point<Rational> {
    pt(1, 0)
  }
  fn p4() -> Point<Rational> {
    pt(0, 1)
  }
  fn p5() -> Point<Rational> {
    pt(2, 2)
  }
  fn p6() -> Point<Rational> {
    pt(3, 3)
  }
  fn p7() -> Point<Rational> {
    pt(0, 2)
  }

  #[test]
  fn line_crossing() {
    let half = q(1, 2);
    assert_eq!(
      (p1()..=p2()).intersect(&(p3()..=p4())),
      Some(Crossing(Point::new([half.clone(), half])))
    )
  }

  #[test]
  fn line_not_crossing() {
    assert_eq!((p1()..=p3()).intersect(&(p2()..=p4())), None)
  }

  #[test]
  fn endpoints_touch() {
    assert_eq!((p1()..=p2()).intersect(&(p2()..=p3())), Some(Crossing(p2())));
    assert_eq!((p1()..=p2()).intersect(&(p1()..=p3())), Some(Crossing(p1())));
  }

  #[test]
  fn colinear_touch_is_a_point() {
    assert_eq!((p1()..=p2()).intersect(&(p2()..=p5())), Some(Crossing(p2())));
  }

  #[test]
  fn edges_overlap_1() {
    assert_eq!(
      (p1()..=p5()).intersect(&(p2()..=p6())),
      Some(Overlap(LineSegment::new(p2(), p5())))
    )
  }

  #[test]
  fn edges_overlap_2() {
    assert_eq!(
      (p1()..=p6()).intersect(&(p2()..=p6())),
      Some(Overlap(LineSegment::new(p2(), p6())))
    )
  }

  #[test]
  fn edges_overlap_reversed() {
    // The overlap follows the direction of the receiver.
    assert_eq!(
      (p6()..=p1()).intersect(&(p2()..=p6())),
      Some(Overlap(LineSegment::new(p6(), p2())))
    )
  }

  #[test]
  fn overlap_clamped() {
    let half = q(1, 2);
    let l1 = LineSegment::new(pt(0, 0), pt(1, 1));
    let l2 = LineSegment::new(Point::new([half.clone(), half.clone()]), pt(2, 2));
    assert_eq!(
      l1.intersection(&l2),
      Some(Overlap(LineSegment::new(Point::new([half.clone(), half]), pt(1, 1))))
    );
  }

  #[test]
  fn edge_touch() {
    assert_eq!((p1()..=p7()).intersect(&(p4()..=p2())), Some(Crossing(p4())))
  }

  #[test]
  fn edge_no_touch() {
    assert_eq!((p1()..=p7()).intersect(&(p2()..=p5())), None)
  }

  #[test]
  fn parallel_apart() {
    assert_none!((p1()..=p3()).intersect(&(p4()..=p2())));
  }

  #[test]
  fn unit_1() {
    let l1 = LineSegment::from(pt(1, 0)..=pt(1, 1));
    let l2 = LineSegment::from(pt(0, 1)..=pt(2, 3));
    assert_eq!(l1.intersect(&l2), None)
  }

  #[test]
  fn unit_6() {
    let l1 = LineSegment::from(pt(4, 0)..=pt(3, 0));
    let l2 = LineSegment::from(pt(2, 0)..=pt(1, 0));
    assert_eq!(l1.intersect(&l2), None)
  }

  #[test]
  fn unit_7() {
    let l1 = LineSegment::from(pt(0, 0)..=pt(0, 1));
    let l2 = LineSegment::from(pt(1, 2)..=pt(2, 1));
    assert_eq!(l1.intersect(&l2), None)
  }

  #[test]
  fn unit_8() {
    let l1 = LineSegment::from(pt(-106, 0)..=pt(54, -128));
    let l2 = LineSegment::from(pt(-71, -28)..=pt(31, -8));
    assert_eq!(l1.intersect(&l2), l2.intersect(&l1));
  }

  #[test]
  fn degenerate_segments() {
    let dot = LineSegment::new(p2(), p2());
    assert!(dot.is_degenerate());
    assert_eq!(dot.intersection(&LineSegment::from(p1()..=p5())), Some(Crossing(p2())));
    assert_eq!(LineSegment::from(p1()..=p5()).intersection(&dot), Some(Crossing(p2())));
    assert_eq!(dot.intersection(&LineSegment::from(p1()..=p3())), None);
    assert_eq!(dot.intersection(&dot), Some(Crossing(p2())));
    assert_eq!(dot.support_line(), Err(Error::DegenerateInput));
  }

  #[test]
  fn contains() {
    let seg = LineSegment::new(pt(0, 0), pt(4, 2));
    assert!(seg.contains(&pt(2, 1)));
    assert!(seg.contains(&pt(0, 0)));
    assert!(seg.contains(&pt(4, 2)));
    assert!(!seg.contains(&pt(6, 3)));
    assert!(!seg.contains(&pt(-2, -1)));
    assert!(!seg.contains(&pt(2, 2)));
  }

  #[test]
  fn length() {
    let precision = PrecisionSpec::new(-10, RoundingMode::HalfUp);
    let seg = LineSegment::new(pt(0, 0), pt(1, 1));
    assert_eq!(
      assert_ok!(seg.length(&precision)),
      q(14142135624, 10000000000)
    );
    assert_eq!(seg.length_squared(), int(2));
    assert_eq!(seg.midpoint(), Point::new([q(1, 2), q(1, 2)]));
  }

  #[test]
  fn distance_to_point() {
    let precision = PrecisionSpec::new(-4, RoundingMode::HalfEven);
    let seg = LineSegment::new(pt(0, 0), pt(4, 0));
    assert_eq!(seg.distance_to_point(&pt(2, 3), &precision), Ok(int(3)));
    assert_eq!(seg.distance_to_point(&pt(7, 4), &precision), Ok(int(5)));
    assert_eq!(seg.distance_to_point(&pt(-1, -1), &precision), Ok(q(14142, 10000)));
  }

  #[test]
  fn translate_and_envelope() {
    let seg = LineSegment::new(pt(3, 0), pt(1, 2));
    let moved = seg.translate(&vector(1, 1));
    assert_eq!(moved, LineSegment::new(pt(4, 1), pt(2, 3)));
    assert_eq!(seg.envelope(), envelope(1, 3, 0, 2));
    assert!(seg.reverse().eq_ignore_direction(&seg));
    assert_ne!(seg.reverse(), seg);
  }
}
