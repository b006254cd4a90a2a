use num_traits::*;
use std::cmp::Ordering;

use super::{Boundary, EndPoint, Line, LineSegment, Point, Vector};
use crate::{Error, ExactNumber, Intersects};

/// An axis-aligned rectangle `[x_min, x_max] x [y_min, y_max]`.
///
/// Envelopes may have zero width or height. Containment is always
/// boundary-inclusive; the intersection tests take a [`Boundary`] that
/// decides whether touching the boundary counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Envelope<T> {
  x_min: T,
  x_max: T,
  y_min: T,
  y_max: T,
}

impl<T: ExactNumber> Envelope<T> {
  pub fn new(x_min: T, x_max: T, y_min: T, y_max: T) -> Result<Envelope<T>, Error> {
    if x_min > x_max || y_min > y_max {
      crate::log::debug!("inverted envelope bounds");
      return Err(Error::InvertedEnvelope);
    }
    Ok(Envelope {
      x_min,
      x_max,
      y_min,
      y_max,
    })
  }

  /// The smallest envelope holding two opposite corners, given in any order.
  pub fn from_corners(a: &Point<T>, b: &Point<T>) -> Envelope<T> {
    let (x_min, x_max) = min_max(a.x_coord(), b.x_coord());
    let (y_min, y_max) = min_max(a.y_coord(), b.y_coord());
    Envelope {
      x_min,
      x_max,
      y_min,
      y_max,
    }
  }

  pub fn from_point(pt: &Point<T>) -> Envelope<T> {
    Envelope::from_corners(pt, pt)
  }

  pub fn from_points<'a, I>(points: I) -> Result<Envelope<T>, Error>
  where
    I: IntoIterator<Item = &'a Point<T>>,
    T: 'a,
  {
    let mut iter = points.into_iter();
    let first = iter.next().ok_or(Error::InsufficientPoints)?;
    Ok(iter.fold(Envelope::from_point(first), |env, pt| {
      env.expand_to_include(pt)
    }))
  }

  pub fn x_min(&self) -> &T {
    &self.x_min
  }

  pub fn x_max(&self) -> &T {
    &self.x_max
  }

  pub fn y_min(&self) -> &T {
    &self.y_min
  }

  pub fn y_max(&self) -> &T {
    &self.y_max
  }

  pub fn min_point(&self) -> Point<T> {
    Point::new([self.x_min.clone(), self.y_min.clone()])
  }

  pub fn max_point(&self) -> Point<T> {
    Point::new([self.x_max.clone(), self.y_max.clone()])
  }

  pub fn width(&self) -> T {
    self.x_max.clone() - self.x_min.clone()
  }

  pub fn height(&self) -> T {
    self.y_max.clone() - self.y_min.clone()
  }

  pub fn area(&self) -> T {
    self.width() * self.height()
  }

  pub fn center(&self) -> Point<T> {
    let two = T::from_constant(2);
    Point::new([
      (self.x_min.clone() + self.x_max.clone()) / two.clone(),
      (self.y_min.clone() + self.y_max.clone()) / two,
    ])
  }

  /// True if the envelope has no interior.
  pub fn is_degenerate(&self) -> bool {
    self.x_min == self.x_max || self.y_min == self.y_max
  }

  /// Corners in counter-clockwise order starting at the minimum corner.
  pub fn corners(&self) -> [Point<T>; 4] {
    [
      Point::new([self.x_min.clone(), self.y_min.clone()]),
      Point::new([self.x_max.clone(), self.y_min.clone()]),
      Point::new([self.x_max.clone(), self.y_max.clone()]),
      Point::new([self.x_min.clone(), self.y_max.clone()]),
    ]
  }

  /// The four sides, counter-clockwise. Degenerate envelopes produce
  /// degenerate sides.
  pub fn edges(&self) -> [LineSegment<T>; 4] {
    let [a, b, c, d] = self.corners();
    [
      LineSegment::new(a.clone(), b.clone()),
      LineSegment::new(b, c.clone()),
      LineSegment::new(c, d.clone()),
      LineSegment::new(d, a),
    ]
  }

  #[must_use]
  pub fn translate(&self, offset: &Vector<T>) -> Envelope<T> {
    Envelope {
      x_min: self.x_min.clone() + offset.dx().clone(),
      x_max: self.x_max.clone() + offset.dx().clone(),
      y_min: self.y_min.clone() + offset.dy().clone(),
      y_max: self.y_max.clone() + offset.dy().clone(),
    }
  }

  #[must_use]
  pub fn union(&self, other: &Envelope<T>) -> Envelope<T> {
    Envelope {
      x_min: self.x_min.clone().min(other.x_min.clone()),
      x_max: self.x_max.clone().max(other.x_max.clone()),
      y_min: self.y_min.clone().min(other.y_min.clone()),
      y_max: self.y_max.clone().max(other.y_max.clone()),
    }
  }

  #[must_use]
  pub fn expand_to_include(&self, pt: &Point<T>) -> Envelope<T> {
    self.union(&Envelope::from_point(pt))
  }

  /// The shared region, if any. Envelopes that only touch share a
  /// degenerate envelope.
  pub fn intersection(&self, other: &Envelope<T>) -> Option<Envelope<T>> {
    let x_min = self.x_min.clone().max(other.x_min.clone());
    let x_max = self.x_max.clone().min(other.x_max.clone());
    let y_min = self.y_min.clone().max(other.y_min.clone());
    let y_max = self.y_max.clone().min(other.y_max.clone());
    Envelope::new(x_min, x_max, y_min, y_max).ok()
  }

  /// Inclusive: the closed envelopes share a point. Exclusive: they share a
  /// point off the boundary of both.
  ///
  /// On an axis where an envelope has zero extent its single value counts as
  /// interior, so a point or a flat envelope strictly inside another one
  /// still intersects it exclusively.
  pub fn intersects(&self, other: &Envelope<T>, boundary: Boundary) -> bool {
    overlaps(
      (&self.x_min, &self.x_max),
      (&other.x_min, &other.x_max),
      boundary,
    ) && overlaps(
      (&self.y_min, &self.y_max),
      (&other.y_min, &other.y_max),
      boundary,
    )
  }

  pub fn contains_point(&self, pt: &Point<T>) -> bool {
    self.intersects_point(pt, Boundary::Inclusive)
  }

  pub fn contains_envelope(&self, other: &Envelope<T>) -> bool {
    self.x_min <= other.x_min
      && other.x_max <= self.x_max
      && self.y_min <= other.y_min
      && other.y_max <= self.y_max
  }

  /// Inclusive: `pt` is in the closed envelope. Exclusive: `pt` is off the
  /// boundary, with zero-extent axes counted as in [`Envelope::intersects`].
  pub fn intersects_point(&self, pt: &Point<T>, boundary: Boundary) -> bool {
    let (x, y) = (pt.x_coord(), pt.y_coord());
    overlaps((&self.x_min, &self.x_max), (x, x), boundary)
      && overlaps((&self.y_min, &self.y_max), (y, y), boundary)
  }

  /// Inclusive: the closed segment meets the closed envelope. Exclusive: the
  /// segment passes through the interior.
  pub fn intersects_segment(&self, segment: &LineSegment<T>, boundary: Boundary) -> bool {
    let start = segment.start();
    let direction = segment.direction();
    // Parameter range of the part of the segment inside the envelope.
    let mut enter = EndPoint::Inclusive(T::zero());
    let mut leave = EndPoint::Inclusive(T::one());
    let ranges = [(&self.x_min, &self.x_max), (&self.y_min, &self.y_max)];
    for (axis, &(min, max)) in ranges.iter().enumerate() {
      // A zero-extent axis has no boundary of its own to avoid.
      let boundary = if min == max {
        Boundary::Inclusive
      } else {
        boundary
      };
      let bound = |t: T| {
        if boundary.is_inclusive() {
          EndPoint::Inclusive(t)
        } else {
          EndPoint::Exclusive(t)
        }
      };
      let origin = &start[axis];
      let delta = &direction[axis];
      if delta.is_zero() {
        if !(within(min, origin, boundary) && within(origin, max, boundary)) {
          return false;
        }
        continue;
      }
      let t_min = (min.clone() - origin.clone()) / delta.clone();
      let t_max = (max.clone() - origin.clone()) / delta.clone();
      let (t_enter, t_leave) = if delta.is_positive() {
        (t_min, t_max)
      } else {
        (t_max, t_min)
      };
      enter = enter.rightmost(bound(t_enter));
      leave = leave.leftmost(bound(t_leave));
    }
    match enter.inner().cmp(leave.inner()) {
      Ordering::Less => true,
      Ordering::Equal => enter.is_inclusive() && leave.is_inclusive(),
      Ordering::Greater => false,
    }
  }

  /// Inclusive: the line meets the closed envelope. Exclusive: the line
  /// passes through the interior. A flat envelope is a segment whose interior
  /// excludes its two ends, and a single point is its own interior.
  pub fn intersects_line(&self, line: &Line<T>, boundary: Boundary) -> bool {
    let sides = self.corners().map(|corner| line.side_of(&corner));
    let left = sides.iter().any(|s| s.is_ccw());
    let right = sides.iter().any(|s| s.is_cw());
    match boundary {
      Boundary::Inclusive => (left && right) || sides.iter().any(|s| s.is_colinear()),
      Boundary::Exclusive if self.is_degenerate() => {
        (left && right) || sides.iter().all(|s| s.is_colinear())
      }
      Boundary::Exclusive => left && right,
    }
  }
}

// `lo <= hi` when inclusive, `lo < hi` when exclusive.
fn within<T: Ord>(lo: &T, hi: &T, boundary: Boundary) -> bool {
  match boundary {
    Boundary::Inclusive => lo <= hi,
    Boundary::Exclusive => lo < hi,
  }
}

// Overlap of two closed ranges. Exclusive mode skips overlap that only sits
// on an end of either range, unless that range is a single value.
fn overlaps<T: Ord>(a: (&T, &T), b: (&T, &T), boundary: Boundary) -> bool {
  let lo = std::cmp::max(a.0, b.0);
  let hi = std::cmp::min(a.1, b.1);
  match lo.cmp(hi) {
    Ordering::Greater => false,
    Ordering::Less => true,
    Ordering::Equal => match boundary {
      Boundary::Inclusive => true,
      Boundary::Exclusive => inside(a, lo) && inside(b, lo),
    },
  }
}

fn inside<T: Ord>((min, max): (&T, &T), value: &T) -> bool {
  min == max || (min < value && value < max)
}

fn min_max<T: Ord + Clone>(a: &T, b: &T) -> (T, T) {
  if a <= b {
    (a.clone(), b.clone())
  } else {
    (b.clone(), a.clone())
  }
}

impl<'a, T> Intersects for &'a Envelope<T>
where
  T: ExactNumber,
{
  type Result = Envelope<T>;
  fn intersect(self, other: &'a Envelope<T>) -> Option<Self::Result> {
    self.intersection(other)
  }
}
