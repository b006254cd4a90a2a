pub mod angular_sort;

#[doc(inline)]
pub use angular_sort::{sort_by_angle, sort_by_centroid, AngleOrder, CentroidOrder};
