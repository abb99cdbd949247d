//! # mathkit
//!
//! Numerical math toolkit: dimension-parametric point/vector algebra,
//! geometric queries, descriptive statistics, robust floating-point
//! comparison, quaternion rotations, and a dense runtime-sized matrix
//! with LU/SVD-based linear algebra.
//!
//! ## Quick start
//!
//! ```
//! use mathkit::Matrix;
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::from_rows(3, 3, &[
//!     2.0, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]);
//! let b = Matrix::from_rows(3, 1, &[8.0, -11.0, -3.0]);
//! let x = Matrix::solve_axb(&a, &b).unwrap(); // x = [2, 3, -1]
//! assert!((x[(0, 0)] - 2.0).abs() < 1e-12);
//! ```
//!
//! ```
//! use mathkit::algebra::{dot, magnitude};
//! use mathkit::geometry::triangle_area2;
//!
//! // The algebra layer works on anything with indexed coordinates.
//! assert_eq!(magnitude(&[3.0, 4.0], 2), 5.0);
//! assert_eq!(dot(&vec![1.0, 2.0], &vec![3.0, 4.0], 2), 11.0);
//! assert_eq!(triangle_area2(&[0.0, 0.0], &[4.0, 0.0], &[0.0, 3.0]), 6.0);
//! ```
//!
//! ## Modules
//!
//! - [`traits`] — the scalar hierarchy ([`traits::Scalar`],
//!   [`traits::FloatScalar`]) and the point-access capability
//!   ([`traits::PointRef`] / [`traits::PointMut`] / [`traits::PointAlloc`])
//!   that every algebra and geometry function is generic over.
//!
//! - [`compare`] — tolerance-based floating point comparison
//!   ([`compare::approx_eq`] and the array variants), the equality
//!   primitive the rest of the crate builds on.
//!
//! - [`algebra`] — magnitude, dot and cross products, normalization,
//!   tolerant vector equality, point distances, and vector angles, all
//!   parametric over the point capability and an explicit dimension.
//!
//! - [`geometry`] — metric distances ([`geometry::DistanceMetric`]),
//!   point/line/segment/ray queries, triangle areas and normals,
//!   barycentric coordinates, polygon area, Plücker line coordinates.
//!
//! - [`stats`] — Kahan-compensated mean, biased/unbiased variance,
//!   min/max summaries, and NIST-style percentile interpolation.
//!
//! - [`matrix`] — [`Matrix`], a dense row-major runtime-sized matrix:
//!   arithmetic operators, submatrix read/write, transpose, row averages,
//!   exact and tolerant equality, and whitespace-delimited text IO.
//!
//! - [`linalg`] — the decomposition backend behind
//!   [`Matrix::determinant`], [`Matrix::inverse`], [`Matrix::svd`], and
//!   [`Matrix::solve_axb`]: LU with partial pivoting and Golub-Kahan SVD.
//!
//! - [`points`] — concrete [`points::Point2`] / [`points::Point3`] types
//!   implementing the capability traits.
//!
//! - [`quaternion`] — [`Quaternion`] rotations built on `Point3`.
//!
//! - [`trig`] — angle units, degree/radian conversion, and guarded
//!   `acos`/`atan2`.

pub mod algebra;
pub mod compare;
pub mod geometry;
pub mod linalg;
pub mod matrix;
pub mod points;
pub mod quaternion;
pub mod stats;
pub mod traits;
pub mod trig;

pub use linalg::{LinalgError, Lu, Svd};
pub use matrix::{Matrix, MatrixKind, ParseMatrixError, ReadError};
pub use points::{Point2, Point3};
pub use quaternion::Quaternion;
pub use stats::{Bias, KahanSum, Summary};
pub use traits::{FloatScalar, PointAlloc, PointMut, PointRef, Scalar};
