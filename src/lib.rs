//! A naive stable bubble sort and an immutable 2D point with Euclidean distances.

pub mod point;
pub mod sort;

pub use self::{
    point::Point,
    sort::{bubble_sort, bubble_sorted},
};
