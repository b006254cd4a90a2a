use std::cmp::Ordering;

use crate::data::{Point, Vector};
use crate::ExactNumber;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use planar_kernel::data::Point;
  /// # use planar_kernel::Orientation;
  /// # use num_rational::BigRational;
  /// let pt = |x: i64, y: i64| Point::new([BigRational::from_integer(x.into()), BigRational::from_integer(y.into())]);
  /// let p1 = pt(0, 0);
  /// let p2 = pt(0, 1); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &pt(0, 2)).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &pt(-1, 2)).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &pt(1, 2)).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation
  where
    T: ExactNumber,
  {
    Orientation::of_vectors(&(p2 - p1), &(p3 - p1))
  }

  /// Locate `p2` in relation to the line through `p1` with the given direction.
  ///
  /// Identical to [`Orientation::new`]`(p1, p1+v, p2)`.
  pub fn along_vector<T>(p1: &Point<T>, vector: &Vector<T>, p2: &Point<T>) -> Orientation
  where
    T: ExactNumber,
  {
    Orientation::of_vectors(vector, &(p2 - p1))
  }

  /// Like [`Orientation::along_vector`] but for the vector rotated a quarter
  /// turn counter-clockwise.
  pub fn along_perp_vector<T>(p1: &Point<T>, vector: &Vector<T>, p2: &Point<T>) -> Orientation
  where
    T: ExactNumber,
  {
    Orientation::of_vectors(&vector.perpendicular(), &(p2 - p1))
  }

  /// Sign of the cross product `u.dx * v.dy - v.dx * u.dy`.
  pub fn of_vectors<T>(u: &Vector<T>, v: &Vector<T>) -> Orientation
  where
    T: ExactNumber,
  {
    let lhs = u.dx().clone() * v.dy().clone();
    let rhs = v.dx().clone() * u.dy().clone();
    match lhs.cmp(&rhs) {
      Ordering::Less => ClockWise,
      Ordering::Equal => CoLinear,
      Ordering::Greater => CounterClockWise,
    }
  }

  /// `1` for counter-clockwise, `-1` for clockwise, `0` for colinear.
  pub fn sign(self) -> i8 {
    match self {
      CounterClockWise => 1,
      ClockWise => -1,
      CoLinear => 0,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Orientation::CoLinear => other,
      _ => self,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }

  /// Compare the counter-clockwise angles of `p2` and `p3` around `p1`,
  /// measured from `vector`. Angles lie in `[0, 2pi)`; a point equal to `p1`
  /// has angle zero. Points at the same angle compare equal.
  pub fn ccw_cmp_around_with<T>(
    vector: &Vector<T>,
    p1: &Point<T>,
    p2: &Point<T>,
    p3: &Point<T>,
  ) -> Ordering
  where
    T: ExactNumber,
  {
    let aq = Orientation::along_vector(p1, vector, p2);
    let ar = Orientation::along_vector(p1, vector, p3);
    let on_zero = |d: &Point<T>| match Orientation::along_perp_vector(p1, vector, d) {
      CounterClockWise => false,
      ClockWise => true,
      CoLinear => true,
    };
    let cmp = || match Orientation::new(p1, p2, p3) {
      CounterClockWise => Ordering::Less,
      ClockWise => Ordering::Greater,
      CoLinear => Ordering::Equal,
    };
    match (aq, ar) {
      // Easy cases: Q and R are on either side of the line p->z:
      (CounterClockWise, ClockWise) => Ordering::Less,
      (ClockWise, CounterClockWise) => Ordering::Greater,
      // A CoLinear point may be in front of p->z (0 degree angle) or behind
      // it (180 degree angle). If the other point is clockwise, it must have an
      // angle greater than 180 degrees and must therefore be greater than the
      // colinear point.
      (CoLinear, ClockWise) => Ordering::Less,
      (ClockWise, CoLinear) => Ordering::Greater,

      // if Q and R are on the same side of P->Z then the most clockwise point
      // will have the smallest angle.
      (CounterClockWise, CounterClockWise) => cmp(),
      (ClockWise, ClockWise) => cmp(),

      // CoLinear points have an angle of either 0 degrees or 180 degrees. on_zero
      // can distinguish these two cases:
      //    on_zero(p) => 0 degrees.
      //   !on_zero(p) => 180 degrees.
      (CounterClockWise, CoLinear) => {
        if on_zero(p3) {
          Ordering::Greater // angle(r) = 0 & 0 < angle(q) < 180. Thus: Q > R
        } else {
          Ordering::Less // angle(r) = 180 & 0 < angle(q) < 180. Thus: Q < R
        }
      }
      (CoLinear, CounterClockWise) => {
        if on_zero(p2) {
          Ordering::Less
        } else {
          Ordering::Greater
        }
      }
      (CoLinear, CoLinear) => match (on_zero(p2), on_zero(p3)) {
        (true, true) => Ordering::Equal,
        (false, false) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
      },
    }
  }
}
