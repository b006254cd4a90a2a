use super::Point;
use crate::data::Vector;
use array_init::array_init;
use std::ops::Add;
use std::ops::Index;

// &point + &vector = point
impl<'a, 'b, T> Add<&'a Vector<T>> for &'b Point<T>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Point<T>;

  fn add(self: &'b Point<T>, other: &'a Vector<T>) -> Self::Output {
    Point {
      array: array_init(|i| self.array.index(i).clone() + other.0.index(i).clone()),
    }
  }
}

// point + vector = point
impl<T> Add<Vector<T>> for Point<T>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Point<T>;

  fn add(self: Point<T>, other: Vector<T>) -> Self::Output {
    Add::add(&self, &other)
  }
}

// point + &vector = point
impl<T> Add<&Vector<T>> for Point<T>
where
  T: Add<T, Output = T> + Clone,
{
  type Output = Point<T>;

  fn add(self: Point<T>, other: &Vector<T>) -> Self::Output {
    Add::add(&self, other)
  }
}
