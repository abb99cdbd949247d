use num_traits::{Float as _, One as _, Zero as _};

use crate::algebra::points_distance;
use crate::compare::{approx_eq, Checks};
use crate::traits::{FloatScalar, PointRef};

/// Projection parameter of `point` onto the line through `ln1` and `ln2`.
///
/// `t = dot(point - ln1, ln2 - ln1) / |ln2 - ln1|²`; `t = 0` lands on
/// `ln1`, `t = 1` on `ln2`. Coincident line points divide by zero and
/// yield NaN, matching the garbage-in/NaN-out contract of the rest of the
/// line family.
fn projection_param<P: PointRef + ?Sized>(ln1: &P, ln2: &P, point: &P, dim: usize) -> P::Coord
where
    P::Coord: FloatScalar,
{
    let mut wv = P::Coord::zero();
    let mut vv = P::Coord::zero();
    for i in 0..dim {
        let w = point.coord(i) - ln1.coord(i);
        let v = ln2.coord(i) - ln1.coord(i);
        wv = wv + w * v;
        vv = vv + v * v;
    }
    wv / vv
}

/// Squared distance from `point` to the infinite line through `ln1`, `ln2`.
pub fn distance_point_line2<P: PointRef + ?Sized>(
    ln1: &P,
    ln2: &P,
    point: &P,
    dim: usize,
) -> P::Coord
where
    P::Coord: FloatScalar,
{
    let t = projection_param(ln1, ln2, point, dim);
    let mut sum = P::Coord::zero();
    for i in 0..dim {
        let w = point.coord(i) - ln1.coord(i);
        let v = ln2.coord(i) - ln1.coord(i);
        let r = w - v * t;
        sum = sum + r * r;
    }
    sum
}

/// Distance from `point` to the infinite line through `ln1`, `ln2`.
///
/// The point is projected onto the line direction and the magnitude of the
/// residual is returned.
///
/// ```
/// use mathkit::geometry::distance_point_line;
///
/// let d = distance_point_line(&[0.0, 0.0], &[10.0, 0.0], &[5.0, 3.0], 2);
/// assert!((d - 3.0).abs() < 1e-12);
/// ```
pub fn distance_point_line<P: PointRef + ?Sized>(ln1: &P, ln2: &P, point: &P, dim: usize) -> P::Coord
where
    P::Coord: FloatScalar,
{
    distance_point_line2(ln1, ln2, point, dim).sqrt()
}

/// Approximate test for `point` lying on the line through `ln1`, `ln2`.
///
/// Each coordinate of `point - ln1` is robustly compared (in absolute
/// value) against the corresponding coordinate of the projection onto the
/// line direction. The outcome is sensitive to the supplied tolerances;
/// this is a tolerance test, not an exact incidence predicate.
///
/// ```
/// use mathkit::geometry::is_point_on_line;
///
/// let a = [0.0, 0.0];
/// let b = [2.0, 2.0];
/// assert!(is_point_on_line(&a, &b, &[5.0, 5.0], 2, 1e-9, 1e-9));
/// assert!(!is_point_on_line(&a, &b, &[5.0, 4.0], 2, 1e-9, 1e-9));
/// ```
pub fn is_point_on_line<P: PointRef + ?Sized>(
    ln1: &P,
    ln2: &P,
    point: &P,
    dim: usize,
    max_rel_err: P::Coord,
    max_abs_err: P::Coord,
) -> bool
where
    P::Coord: FloatScalar,
{
    let t = projection_param(ln1, ln2, point, dim);
    for i in 0..dim {
        let w = point.coord(i) - ln1.coord(i);
        let proj = (ln2.coord(i) - ln1.coord(i)) * t;
        if !approx_eq(w.abs(), proj.abs(), max_rel_err, max_abs_err, Checks::NONE) {
            return false;
        }
    }
    true
}

/// Distance from `point` to the segment `ls1`–`ls2`.
///
/// Returns `(distance, t)` where `t` is the raw (unclamped) projection
/// parameter. The distance itself clamps `t` to `[0, 1]`: outside that
/// range the nearest endpoint wins.
///
/// ```
/// use mathkit::geometry::distance_point_segment;
///
/// // Beyond the far endpoint: distance is to the endpoint itself.
/// let (d, t) = distance_point_segment(&[0.0, 0.0], &[1.0, 0.0], &[3.0, 0.0], 2);
/// assert!((d - 2.0).abs() < 1e-12);
/// assert!((t - 3.0).abs() < 1e-12);
/// ```
pub fn distance_point_segment<P: PointRef + ?Sized>(
    ls1: &P,
    ls2: &P,
    point: &P,
    dim: usize,
) -> (P::Coord, P::Coord)
where
    P::Coord: FloatScalar,
{
    let t = projection_param(ls1, ls2, point, dim);

    let d = if t <= P::Coord::zero() {
        points_distance(point, ls1, dim)
    } else if t >= P::Coord::one() {
        points_distance(point, ls2, dim)
    } else {
        distance_to_projection(ls1, ls2, point, dim, t)
    };
    (d, t)
}

/// Distance from `point` to the ray from `ls1` through `ls2`.
///
/// Returns `(distance, t)` with the raw projection parameter; the
/// distance clamps `t` to `[0, ∞)`.
///
/// ```
/// use mathkit::geometry::distance_point_ray;
///
/// // Behind the ray origin: distance is to the origin.
/// let (d, _) = distance_point_ray(&[0.0, 0.0], &[1.0, 0.0], &[-2.0, 0.0], 2);
/// assert!((d - 2.0).abs() < 1e-12);
///
/// // Ahead of the through-point the ray keeps going.
/// let (d, t) = distance_point_ray(&[0.0, 0.0], &[1.0, 0.0], &[5.0, 1.0], 2);
/// assert!((d - 1.0).abs() < 1e-12);
/// assert!((t - 5.0).abs() < 1e-12);
/// ```
pub fn distance_point_ray<P: PointRef + ?Sized>(
    ls1: &P,
    ls2: &P,
    point: &P,
    dim: usize,
) -> (P::Coord, P::Coord)
where
    P::Coord: FloatScalar,
{
    let t = projection_param(ls1, ls2, point, dim);

    let d = if t <= P::Coord::zero() {
        points_distance(point, ls1, dim)
    } else {
        distance_to_projection(ls1, ls2, point, dim, t)
    };
    (d, t)
}

/// Distance from `point` to `ls1 + (ls2 - ls1) * t`.
fn distance_to_projection<P: PointRef + ?Sized>(
    ls1: &P,
    ls2: &P,
    point: &P,
    dim: usize,
    t: P::Coord,
) -> P::Coord
where
    P::Coord: FloatScalar,
{
    let mut sum = P::Coord::zero();
    for i in 0..dim {
        let proj = ls1.coord(i) + (ls2.coord(i) - ls1.coord(i)) * t;
        let d = point.coord(i) - proj;
        sum = sum + d * d;
    }
    sum.sqrt()
}
