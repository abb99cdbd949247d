//! Dimension-parametric vector and point algebra.
//!
//! Every function here is generic over the [`PointRef`] family of
//! capability traits with the logical dimension supplied explicitly, so
//! the same code serves `[f64; 3]`, `Vec<f32>`, slices, and the concrete
//! [`Point2`](crate::points::Point2) / [`Point3`](crate::points::Point3)
//! types. The geometric queries in [`geometry`](crate::geometry) and the
//! quaternion type are built on these primitives.

use num_traits::{Float as _, One as _, Zero as _};

use crate::compare::{approx_eq, Checks};
use crate::traits::{FloatScalar, PointAlloc, PointMut, PointRef};
use crate::trig::{acos_checked, rad_to_deg, AngleUnit, TrigError};

/// Squared magnitude: the sum of squared coordinates.
///
/// Exactly equal to `dot(v, v, dim)`.
///
/// ```
/// use mathkit::algebra::magnitude2;
/// assert_eq!(magnitude2(&[3.0, 4.0], 2), 25.0);
/// ```
pub fn magnitude2<P: PointRef + ?Sized>(v: &P, dim: usize) -> P::Coord {
    let mut sum = P::Coord::zero();
    for i in 0..dim {
        sum = sum + v.coord(i) * v.coord(i);
    }
    sum
}

/// Magnitude (Euclidean length).
///
/// ```
/// use mathkit::algebra::magnitude;
/// assert_eq!(magnitude(&[3.0, 4.0], 2), 5.0);
/// ```
pub fn magnitude<P: PointRef + ?Sized>(v: &P, dim: usize) -> P::Coord
where
    P::Coord: FloatScalar,
{
    magnitude2(v, dim).sqrt()
}

/// Normalize a vector in place.
///
/// A vector of exactly zero magnitude is left unchanged; there is no error
/// signal for that case.
///
/// ```
/// use mathkit::algebra::{magnitude, normalize};
///
/// let mut v = [3.0, 4.0];
/// normalize(&mut v, 2);
/// assert!((magnitude(&v, 2) - 1.0).abs() < 1e-15);
///
/// let mut zero = [0.0, 0.0];
/// normalize(&mut zero, 2);
/// assert_eq!(zero, [0.0, 0.0]);
/// ```
pub fn normalize<P: PointMut + ?Sized>(v: &mut P, dim: usize)
where
    P::Coord: FloatScalar,
{
    let mag = magnitude(v, dim);
    if mag != P::Coord::zero() {
        for i in 0..dim {
            v.set_coord(i, v.coord(i) / mag);
        }
    }
}

/// Dot product of two vectors.
///
/// ```
/// use mathkit::algebra::dot;
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], 3), 32.0);
/// ```
pub fn dot<P: PointRef + ?Sized>(v1: &P, v2: &P, dim: usize) -> P::Coord {
    let mut sum = P::Coord::zero();
    for i in 0..dim {
        sum = sum + v1.coord(i) * v2.coord(i);
    }
    sum
}

/// Cross product of two 3D vectors.
///
/// Fixed 3D formula; the inputs must have at least three coordinates.
///
/// ```
/// use mathkit::algebra::cross3;
/// let c: [f64; 3] = cross3(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
/// assert_eq!(c, [0.0, 0.0, 1.0]);
/// ```
pub fn cross3<P: PointAlloc>(v1: &P, v2: &P) -> P {
    // Determinant expansion of
    //   | i   j   k   |
    //   | a0  a1  a2  |
    //   | b0  b1  b2  |
    let x = v1.coord(1) * v2.coord(2) - v2.coord(1) * v1.coord(2);
    let y = v2.coord(0) * v1.coord(2) - v1.coord(0) * v2.coord(2);
    let z = v1.coord(0) * v2.coord(1) - v2.coord(0) * v1.coord(1);

    let mut cp = P::with_dim(3);
    cp.set_coord(0, x);
    cp.set_coord(1, y);
    cp.set_coord(2, z);
    cp
}

/// Squared Euclidean distance between two points.
pub fn points_distance2<P: PointRef + ?Sized>(p1: &P, p2: &P, dim: usize) -> P::Coord {
    let mut sum = P::Coord::zero();
    for i in 0..dim {
        let d = p2.coord(i) - p1.coord(i);
        sum = sum + d * d;
    }
    sum
}

/// Euclidean distance between two points.
///
/// ```
/// use mathkit::algebra::points_distance;
/// assert_eq!(points_distance(&[0.0, 0.0], &[3.0, 4.0], 2), 5.0);
/// ```
pub fn points_distance<P: PointRef + ?Sized>(p1: &P, p2: &P, dim: usize) -> P::Coord
where
    P::Coord: FloatScalar,
{
    points_distance2(p1, p2, dim).sqrt()
}

/// Compare two vectors coordinatewise with tolerances.
///
/// True when every coordinate pair passes the robust comparison.
///
/// ```
/// use mathkit::algebra::vector_eq;
/// assert!(vector_eq(&[1.0, 2.0], &[1.0, 2.0 + 1e-12], 2, 1e-9, 1e-9));
/// ```
pub fn vector_eq<P: PointRef + ?Sized>(
    v1: &P,
    v2: &P,
    dim: usize,
    rel_err: P::Coord,
    abs_err: P::Coord,
) -> bool
where
    P::Coord: FloatScalar,
{
    for i in 0..dim {
        if !approx_eq(v1.coord(i), v2.coord(i), rel_err, abs_err, Checks::NONE) {
            return false;
        }
    }
    true
}

/// Coordinatewise inequality test with tolerances.
///
/// True as soon as one coordinate pair fails the robust comparison. Kept
/// as its own loop rather than `!vector_eq(..)`, preserving the legacy
/// pair of entry points.
pub fn vector_ne<P: PointRef + ?Sized>(
    v1: &P,
    v2: &P,
    dim: usize,
    rel_err: P::Coord,
    abs_err: P::Coord,
) -> bool
where
    P::Coord: FloatScalar,
{
    for i in 0..dim {
        if !approx_eq(v1.coord(i), v2.coord(i), rel_err, abs_err, Checks::NONE) {
            return true;
        }
    }
    false
}

/// Smaller angle between two vectors.
///
/// The cosine is obtained from the dot product and the magnitudes; pass
/// `normalized = true` to skip the magnitude computation for unit vectors.
/// A cosine outside `[-1, 1]` by more than `1e-8` is an error; within that
/// band it is clamped before `acos`.
///
/// ```
/// use mathkit::algebra::smaller_angle;
/// use mathkit::trig::AngleUnit;
///
/// let a = smaller_angle(&[1.0, 0.0], &[0.0, 1.0], 2, AngleUnit::Degrees, false).unwrap();
/// assert!((a - 90.0).abs() < 1e-12);
/// ```
pub fn smaller_angle<P: PointRef + ?Sized>(
    v1: &P,
    v2: &P,
    dim: usize,
    unit: AngleUnit,
    normalized: bool,
) -> Result<P::Coord, TrigError>
where
    P::Coord: FloatScalar,
{
    let one = P::Coord::one();
    let mag1 = if normalized { one } else { magnitude(v1, dim) };
    let mag2 = if normalized { one } else { magnitude(v2, dim) };
    let cos_angle = dot(v1, v2, dim) / (mag1 * mag2);

    let angle = acos_checked(cos_angle, P::Coord::from_f64(1e-8))?;
    Ok(match unit {
        AngleUnit::Radians => angle,
        AngleUnit::Degrees => rad_to_deg(angle),
    })
}
