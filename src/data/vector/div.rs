use array_init::array_init;
use num_traits::NumOps;
use std::ops::Div;

use super::Vector;

// Exact for rational scalars.
impl<T> Div<T> for Vector<T>
where
  T: NumOps + Clone,
{
  type Output = Vector<T>;

  fn div(self: Vector<T>, other: T) -> Self::Output {
    Vector(array_init(|i| self.0[i].clone() / other.clone()))
  }
}
