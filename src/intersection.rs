/// Pairwise intersection between shapes.
///
/// Implemented for references so that neither operand is consumed.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
