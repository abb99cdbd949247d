//! Geometric queries built on the generic point algebra.
//!
//! Distances under assorted metrics, point/line/segment/ray queries,
//! triangle and polygon measures, barycentric coordinates, and Plücker
//! line coordinates. Everything is generic over the point-access
//! capability traits; see [`algebra`](crate::algebra) for the primitives.

mod distance;
mod plucker;
mod point_line;
mod polygon;
mod triangle;

pub use distance::{distance, DistanceMetric};
pub use plucker::plucker3;
pub use point_line::{
    distance_point_line, distance_point_line2, distance_point_ray, distance_point_segment,
    is_point_on_line,
};
pub use polygon::polygon_area2;
pub use triangle::{barycentric2, barycentric3, triangle_area2, triangle_area3, triangle_normal3};
