mod envelope;
mod geometry;
mod line;
mod line_segment;
pub(crate) mod point;
mod vector;

pub use envelope::*;
pub use geometry::*;
pub use line::*;
pub use line_segment::*;
pub use point::Point;
pub use vector::Vector;

/// Whether boundary-only contact counts as an intersection.
///
/// `Inclusive` treats shared edges and corners (zero-area overlap) as
/// intersecting, `Exclusive` requires overlap off the boundary. A shape with
/// zero extent along an axis has no boundary along that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
  Inclusive,
  Exclusive,
}

impl Boundary {
  pub fn is_inclusive(self) -> bool {
    matches!(self, Boundary::Inclusive)
  }
}

impl From<bool> for Boundary {
  fn from(touching_counts: bool) -> Boundary {
    if touching_counts {
      Boundary::Inclusive
    } else {
      Boundary::Exclusive
    }
  }
}
