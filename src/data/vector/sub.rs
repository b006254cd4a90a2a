use array_init::array_init;
use std::ops::Index;
use std::ops::Sub;

use super::Vector;

impl<'a, 'b, T> Sub<&'a Vector<T>> for &'b Vector<T>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T>;

  fn sub(self: &'b Vector<T>, other: &'a Vector<T>) -> Self::Output {
    Vector(array_init(|i| {
      self.0.index(i).clone() - other.0.index(i).clone()
    }))
  }
}

impl<T> Sub<Vector<T>> for Vector<T>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T>;

  fn sub(self: Vector<T>, other: Vector<T>) -> Self::Output {
    Sub::sub(&self, &other)
  }
}
