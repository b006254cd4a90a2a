use super::{Boundary, Envelope, Line, LineSegment, Point};
use crate::ExactNumber;

/// Shapes with an axis-aligned bounding box. Unbounded shapes have none.
pub trait HasEnvelope<T> {
  fn bounding_box(&self) -> Option<Envelope<T>>;
}

impl<T: ExactNumber> HasEnvelope<T> for Point<T> {
  fn bounding_box(&self) -> Option<Envelope<T>> {
    Some(self.envelope())
  }
}

impl<T: ExactNumber> HasEnvelope<T> for LineSegment<T> {
  fn bounding_box(&self) -> Option<Envelope<T>> {
    Some(self.envelope())
  }
}

impl<T: ExactNumber> HasEnvelope<T> for Line<T> {
  fn bounding_box(&self) -> Option<Envelope<T>> {
    None
  }
}

impl<T: ExactNumber> HasEnvelope<T> for Envelope<T> {
  fn bounding_box(&self) -> Option<Envelope<T>> {
    Some(self.clone())
  }
}

/// Any of the kernel's shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Geometry<T: ExactNumber> {
  Point(Point<T>),
  Line(Line<T>),
  LineSegment(LineSegment<T>),
  Envelope(Envelope<T>),
}

impl<T: ExactNumber> Geometry<T> {
  pub fn envelope(&self) -> Option<Envelope<T>> {
    self.bounding_box()
  }

  /// Closed-set intersection test: shapes that merely touch intersect.
  pub fn intersects(&self, other: &Geometry<T>) -> bool {
    self.intersects_with(other, Boundary::Inclusive)
  }

  /// Intersection test where `boundary` decides whether touching an
  /// envelope's boundary counts. Pairs without an envelope are closed sets.
  pub fn intersects_with(&self, other: &Geometry<T>, boundary: Boundary) -> bool {
    use Geometry as G;
    match (self, other) {
      (G::Point(a), G::Point(b)) => a == b,
      (G::Point(p), G::Line(l)) | (G::Line(l), G::Point(p)) => l.contains(p),
      (G::Point(p), G::LineSegment(s)) | (G::LineSegment(s), G::Point(p)) => s.contains(p),
      (G::Point(p), G::Envelope(e)) | (G::Envelope(e), G::Point(p)) => {
        e.intersects_point(p, boundary)
      }
      (G::Line(a), G::Line(b)) => a.intersection(b).is_some(),
      (G::Line(l), G::LineSegment(s)) | (G::LineSegment(s), G::Line(l)) => {
        l.intersection_with_segment(s).is_some()
      }
      (G::Line(l), G::Envelope(e)) | (G::Envelope(e), G::Line(l)) => {
        e.intersects_line(l, boundary)
      }
      (G::LineSegment(a), G::LineSegment(b)) => a.intersection(b).is_some(),
      (G::LineSegment(s), G::Envelope(e)) | (G::Envelope(e), G::LineSegment(s)) => {
        e.intersects_segment(s, boundary)
      }
      (G::Envelope(a), G::Envelope(b)) => a.intersects(b, boundary),
    }
  }
}

impl<T: ExactNumber> HasEnvelope<T> for Geometry<T> {
  fn bounding_box(&self) -> Option<Envelope<T>> {
    match self {
      Geometry::Point(p) => p.bounding_box(),
      Geometry::Line(l) => l.bounding_box(),
      Geometry::LineSegment(s) => s.bounding_box(),
      Geometry::Envelope(e) => e.bounding_box(),
    }
  }
}

impl<T: ExactNumber> From<Point<T>> for Geometry<T> {
  fn from(pt: Point<T>) -> Geometry<T> {
    Geometry::Point(pt)
  }
}

impl<T: ExactNumber> From<Line<T>> for Geometry<T> {
  fn from(line: Line<T>) -> Geometry<T> {
    Geometry::Line(line)
  }
}

impl<T: ExactNumber> From<LineSegment<T>> for Geometry<T> {
  fn from(segment: LineSegment<T>) -> Geometry<T> {
    Geometry::LineSegment(segment)
  }
}

impl<T: ExactNumber> From<Envelope<T>> for Geometry<T> {
  fn from(envelope: Envelope<T>) -> Geometry<T> {
    Geometry::Envelope(envelope)
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  fn shapes() -> Vec<Geometry<Rational>> {
    vec![
      pt(1, 1).into(),
      Line::new(pt(0, 2), pt(2, 0)).unwrap().into(),
      LineSegment::new(pt(0, 0), pt(2, 2)).into(),
      envelope(1, 3, 1, 3).into(),
      pt(9, 9).into(),
      Line::new(pt(0, -5), pt(1, -5)).unwrap().into(),
    ]
  }

  #[test]
  fn envelopes() {
    let shapes = shapes();
    assert_eq!(shapes[0].envelope(), Some(envelope(1, 1, 1, 1)));
    assert_eq!(shapes[1].envelope(), None);
    assert_eq!(shapes[2].envelope(), Some(envelope(0, 2, 0, 2)));
    assert_eq!(shapes[3].envelope(), Some(envelope(1, 3, 1, 3)));
  }

  #[test]
  fn dispatch() {
    let shapes = shapes();
    // The first four shapes all pass through (1, 1).
    for a in &shapes[..4] {
      for b in &shapes[..4] {
        assert!(a.intersects(b), "{:?} {:?}", a, b);
      }
    }
    assert!(!shapes[4].intersects(&shapes[0]));
    assert!(!shapes[4].intersects(&shapes[1]));
    assert!(!shapes[5].intersects(&shapes[3]));
    assert!(!shapes[5].intersects(&shapes[2]));
    assert!(shapes[5].intersects(&shapes[1]));
  }

  #[test]
  fn touching_flag_reaches_envelopes() {
    let square: Geometry<Rational> = envelope(0, 1, 0, 1).into();
    let corner: Geometry<Rational> = envelope(1, 2, 1, 2).into();
    assert!(square.intersects(&corner));
    assert!(square.intersects_with(&corner, Boundary::Inclusive));
    assert!(!square.intersects_with(&corner, Boundary::Exclusive));

    let big: Geometry<Rational> = envelope(0, 2, 0, 2).into();
    let inner: Geometry<Rational> = pt(1, 1).into();
    let on_edge: Geometry<Rational> = pt(0, 1).into();
    assert!(big.intersects_with(&inner, Boundary::Exclusive));
    assert!(inner.intersects_with(&big, Boundary::Exclusive));
    assert!(big.intersects_with(&on_edge, Boundary::Inclusive));
    assert!(!on_edge.intersects_with(&big, Boundary::Exclusive));

    let along_edge: Geometry<Rational> = LineSegment::new(pt(-1, 0), pt(3, 0)).into();
    assert!(big.intersects(&along_edge));
    assert!(!along_edge.intersects_with(&big, Boundary::Exclusive));
    let edge_line: Geometry<Rational> = Line::new(pt(0, 2), pt(1, 2)).unwrap().into();
    assert!(big.intersects(&edge_line));
    assert!(!big.intersects_with(&edge_line, Boundary::Exclusive));

    // Pairs without an envelope ignore the flag.
    let segment: Geometry<Rational> = LineSegment::new(pt(0, 0), pt(1, 1)).into();
    assert!(segment.intersects_with(&inner, Boundary::Exclusive));
    assert!(!segment.intersects_with(&on_edge, Boundary::Inclusive));
  }

  #[proptest]
  fn intersects_symmetric(
    #[strategy(any_segment())] s: LineSegment<Rational>,
    #[strategy(any_envelope())] e: Envelope<Rational>,
    #[strategy(any_point())] p: Point<Rational>,
  ) {
    let shapes: Vec<Geometry<Rational>> = vec![s.into(), e.into(), p.into()];
    for a in &shapes {
      for b in &shapes {
        prop_assert_eq!(a.intersects(b), b.intersects(a));
        prop_assert_eq!(
          a.intersects_with(b, Boundary::Exclusive),
          b.intersects_with(a, Boundary::Exclusive)
        );
        if a.intersects_with(b, Boundary::Exclusive) {
          prop_assert!(a.intersects(b));
        }
      }
    }
  }
}
