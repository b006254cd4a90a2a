use array_init::array_init;
use num_traits::NumOps;
use std::ops::Mul;

use super::Vector;

impl<T> Mul<T> for Vector<T>
where
  T: NumOps + Clone,
{
  type Output = Vector<T>;

  fn mul(self: Vector<T>, other: T) -> Self::Output {
    Vector(array_init(|i| self.0[i].clone() * other.clone()))
  }
}

impl<T> Mul<&T> for &Vector<T>
where
  T: NumOps + Clone,
{
  type Output = Vector<T>;

  fn mul(self, other: &T) -> Vector<T> {
    Vector(array_init(|i| self.0[i].clone() * other.clone()))
  }
}
