use num_traits::*;
use std::cmp::Ordering;

use crate::data::{Point, Vector};
use crate::{Error, ExactNumber, Orientation};

///////////////////////////////////////////////////////////////////////////////
// CentroidOrder

/// Counter-clockwise order of points around a pivot, usually the centroid of
/// the set being sorted.
///
/// Angles are measured from the positive x axis through the pivot. Points at
/// the same angle are ordered by distance, farther points comparing greater.
/// The pivot itself is smaller than every other point.
///
/// # Examples
///
/// ```rust
/// # use planar_kernel::algorithms::CentroidOrder;
/// # use planar_kernel::data::Point;
/// # use num_rational::BigRational;
/// let pt = |x: i64, y: i64| Point::new([BigRational::from_integer(x.into()), BigRational::from_integer(y.into())]);
/// let mut square = vec![pt(0, 0), pt(2, 2), pt(2, 0), pt(0, 2)];
/// let order = CentroidOrder::new(&square).unwrap();
/// square.sort_by(|a, b| order.compare(a, b));
/// assert_eq!(square, vec![pt(2, 2), pt(0, 2), pt(0, 0), pt(2, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct CentroidOrder<T> {
  centroid: Point<T>,
}

impl<T: ExactNumber> CentroidOrder<T> {
  /// Order around the centroid of `points`.
  ///
  /// # Errors
  /// [`Error::InsufficientPoints`] if `points` is empty.
  pub fn new<'a, I>(points: I) -> Result<CentroidOrder<T>, Error>
  where
    I: IntoIterator<Item = &'a Point<T>>,
    T: 'a,
  {
    Ok(CentroidOrder::around(Point::centroid(points)?))
  }

  pub fn around(centroid: Point<T>) -> CentroidOrder<T> {
    CentroidOrder { centroid }
  }

  pub fn centroid(&self) -> &Point<T> {
    &self.centroid
  }

  pub fn compare(&self, a: &Point<T>, b: &Point<T>) -> Ordering {
    let da = a - &self.centroid;
    let db = b - &self.centroid;
    upper_half(&db).cmp(&upper_half(&da)).then_with(|| {
      match Orientation::of_vectors(&da, &db) {
        Orientation::CounterClockWise => Ordering::Less,
        Orientation::ClockWise => Ordering::Greater,
        Orientation::CoLinear => da.squared_magnitude().cmp(&db.squared_magnitude()),
      }
    })
  }
}

// Angles in [0, pi) belong to the upper half.
fn upper_half<T: ExactNumber>(v: &Vector<T>) -> bool {
  v.dy().is_positive() || (v.dy().is_zero() && !v.dx().is_negative())
}

/// Sort `points` counter-clockwise around their own centroid.
pub fn sort_by_centroid<T: ExactNumber>(points: &mut [Point<T>]) {
  if let Ok(order) = CentroidOrder::new(points.iter()) {
    points.sort_by(|a, b| order.compare(a, b));
  }
}

///////////////////////////////////////////////////////////////////////////////
// AngleOrder

/// Counter-clockwise order of points around `center`, starting at the ray
/// through `reference`.
///
/// Points at the same angle are ordered by distance, nearer points first.
/// `center` itself sits at angle zero.
#[derive(Debug, Clone)]
pub struct AngleOrder<T> {
  center: Point<T>,
  direction: Vector<T>,
}

impl<T: ExactNumber> AngleOrder<T> {
  /// # Errors
  /// [`Error::DegenerateInput`] if `reference` equals `center`.
  pub fn new(center: Point<T>, reference: &Point<T>) -> Result<AngleOrder<T>, Error> {
    let direction = reference - &center;
    if direction.is_zero() {
      return Err(Error::DegenerateInput);
    }
    Ok(AngleOrder { center, direction })
  }

  pub fn center(&self) -> &Point<T> {
    &self.center
  }

  pub fn compare(&self, a: &Point<T>, b: &Point<T>) -> Ordering {
    self
      .center
      .ccw_cmp_around_with(&self.direction, a, b)
      .then_with(|| self.center.cmp_distance_to(a, b))
  }
}

/// Sort `points` counter-clockwise around `center`, starting at `reference`.
pub fn sort_by_angle<T: ExactNumber>(
  points: &mut [Point<T>],
  center: &Point<T>,
  reference: &Point<T>,
) -> Result<(), Error> {
  let order = AngleOrder::new(center.clone(), reference)?;
  points.sort_by(|a, b| order.compare(a, b));
  Ok(())
}
