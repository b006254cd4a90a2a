use array_init::array_init;
use std::ops::Add;
use std::ops::Index;

use super::Vector;

impl<'a, 'b, T> Add<&'a Vector<T>> for &'b Vector<T>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Vector<T>;

  fn add(self: &'b Vector<T>, other: &'a Vector<T>) -> Self::Output {
    Vector(array_init(|i| {
      self.0.index(i).clone() + other.0.index(i).clone()
    }))
  }
}

impl<T> Add<Vector<T>> for Vector<T>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Vector<T>;

  fn add(self: Vector<T>, other: Vector<T>) -> Self::Output {
    Add::add(&self, &other)
  }
}
