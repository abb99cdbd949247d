use num_traits::{One as _, Zero as _};

use crate::algebra::{cross3, dot, magnitude, normalize};
use crate::traits::{FloatScalar, PointAlloc, PointRef};

/// Difference `b - a` of the first three coordinates, as a plain array.
#[inline]
fn edge3<P: PointRef + ?Sized>(a: &P, b: &P) -> [P::Coord; 3] {
    [
        b.coord(0) - a.coord(0),
        b.coord(1) - a.coord(1),
        b.coord(2) - a.coord(2),
    ]
}

/// Signed area of a 2D triangle.
///
/// Computed from the 2×2 determinant expansion; the sign follows the
/// winding of the vertices (positive for counter-clockwise).
///
/// ```
/// use mathkit::geometry::triangle_area2;
///
/// let area = triangle_area2(&[0.0, 0.0], &[4.0, 0.0], &[0.0, 3.0]);
/// assert_eq!(area, 6.0);
///
/// // Reversed winding flips the sign.
/// let area = triangle_area2(&[0.0, 0.0], &[0.0, 3.0], &[4.0, 0.0]);
/// assert_eq!(area, -6.0);
/// ```
pub fn triangle_area2<P: PointRef + ?Sized>(v1: &P, v2: &P, v3: &P) -> P::Coord
where
    P::Coord: FloatScalar,
{
    let (v1x, v1y) = (v1.coord(0), v1.coord(1));
    let (v2x, v2y) = (v2.coord(0), v2.coord(1));
    let (v3x, v3y) = (v3.coord(0), v3.coord(1));

    //            | v1x v1y 1 |
    // 2 * area = | v2x v2y 1 |
    //            | v3x v3y 1 |
    let mut area = P::Coord::zero();
    area = area + v1x * v2y - v1x * v3y;
    area = area + v1y * v3x - v1y * v2x;
    area = area + v2x * v3y - v3x * v2y;
    area / P::Coord::from_f64(2.0)
}

/// Area of a 3D triangle (unsigned).
///
/// Half the magnitude of the cross product of two edges; a single triangle
/// in 3D has no orientation, so no sign.
///
/// ```
/// use mathkit::geometry::triangle_area3;
///
/// let area = triangle_area3(&[0.0, 0.0, 0.0], &[4.0, 0.0, 0.0], &[0.0, 3.0, 0.0]);
/// assert!((area - 6.0).abs() < 1e-12);
/// ```
pub fn triangle_area3<P: PointRef + ?Sized>(v1: &P, v2: &P, v3: &P) -> P::Coord
where
    P::Coord: FloatScalar,
{
    let cp: [P::Coord; 3] = cross3(&edge3(v1, v2), &edge3(v1, v3));
    P::Coord::from_f64(0.5) * magnitude(&cp, 3)
}

/// Normal of a 3D triangle, optionally normalized.
///
/// The direction follows the right-hand rule over the vertex order.
///
/// ```
/// use mathkit::geometry::triangle_normal3;
///
/// let n: [f64; 3] = triangle_normal3(
///     &[0.0, 0.0, 0.0],
///     &[2.0, 0.0, 0.0],
///     &[0.0, 2.0, 0.0],
///     true,
/// );
/// assert_eq!(n, [0.0, 0.0, 1.0]);
/// ```
pub fn triangle_normal3<P: PointAlloc>(v1: &P, v2: &P, v3: &P, unit: bool) -> P
where
    P::Coord: FloatScalar,
{
    let cp: [P::Coord; 3] = cross3(&edge3(v1, v2), &edge3(v1, v3));

    let mut normal = P::with_dim(3);
    for (i, &c) in cp.iter().enumerate() {
        normal.set_coord(i, c);
    }
    if unit {
        normalize(&mut normal, 3);
    }
    normal
}

/// Barycentric coordinates of a 2D point with respect to a triangle.
///
/// Each coordinate is the ratio of a sub-triangle's signed area to the
/// full triangle's signed area; they sum to one, and a coordinate is
/// negative when the point lies outside the corresponding edge. A
/// degenerate (zero-area) triangle divides by zero.
///
/// ```
/// use mathkit::geometry::barycentric2;
///
/// let v1 = [0.0, 0.0];
/// let v2 = [1.0, 0.0];
/// let v3 = [0.0, 1.0];
/// let bc = barycentric2(&v1, &v1, &v2, &v3);
/// assert_eq!(bc, [1.0, 0.0, 0.0]);
/// ```
pub fn barycentric2<P: PointRef + ?Sized>(p: &P, v1: &P, v2: &P, v3: &P) -> [P::Coord; 3]
where
    P::Coord: FloatScalar,
{
    let a = triangle_area2(v1, v2, v3);
    let a1 = triangle_area2(p, v2, v3);
    let a2 = triangle_area2(v1, p, v3);
    let a3 = triangle_area2(v1, v2, p);

    [a1 / a, a2 / a, a3 / a]
}

/// Barycentric coordinates of a 3D point with respect to a 3D triangle.
///
/// Sub-triangle areas in 3D are unsigned, so each coordinate's sign is
/// recovered by comparing the sub-triangle's normal against the full
/// triangle's normal. The point is assumed to lie (approximately) in the
/// triangle's plane.
///
/// ```
/// use mathkit::geometry::barycentric3;
///
/// let v1 = [0.0, 0.0, 1.0];
/// let v2 = [1.0, 0.0, 1.0];
/// let v3 = [0.0, 1.0, 1.0];
/// let centroid = [1.0 / 3.0, 1.0 / 3.0, 1.0];
/// let bc = barycentric3(&centroid, &v1, &v2, &v3);
/// for c in bc {
///     assert!((c - 1.0 / 3.0).abs() < 1e-12);
/// }
/// ```
pub fn barycentric3<P: PointRef + ?Sized>(p: &P, v1: &P, v2: &P, v3: &P) -> [P::Coord; 3]
where
    P::Coord: FloatScalar,
{
    let one = P::Coord::one();

    // Reference normal for orientation.
    let cp: [P::Coord; 3] = cross3(&edge3(v1, v2), &edge3(v1, v3));

    let a = triangle_area3(v1, v2, v3);
    let a1 = triangle_area3(p, v2, v3);
    let a2 = triangle_area3(p, v3, v1);
    let a3 = triangle_area3(p, v1, v2);

    // Sub-triangle normals decide the sign of each coordinate.
    let cp1: [P::Coord; 3] = cross3(&edge3(p, v2), &edge3(p, v3));
    let cp2: [P::Coord; 3] = cross3(&edge3(p, v3), &edge3(p, v1));
    let cp3: [P::Coord; 3] = cross3(&edge3(p, v1), &edge3(p, v2));

    let sign = |n: &[P::Coord; 3]| {
        if dot(&cp, n, 3) >= P::Coord::zero() {
            one
        } else {
            -one
        }
    };

    [
        sign(&cp1) * a1 / a,
        sign(&cp2) * a2 / a,
        sign(&cp3) * a3 / a,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::{Point2, Point3};

    #[test]
    fn area2_right_triangle() {
        assert_eq!(triangle_area2(&[0.0, 0.0], &[4.0, 0.0], &[0.0, 3.0]), 6.0);
    }

    #[test]
    fn area2_signed_by_winding() {
        let ccw = triangle_area2(&[0.0, 0.0], &[1.0, 0.0], &[0.0, 1.0]);
        let cw = triangle_area2(&[0.0, 0.0], &[0.0, 1.0], &[1.0, 0.0]);
        assert_eq!(ccw, -cw);
        assert!(ccw > 0.0);
    }

    #[test]
    fn area2_degenerate() {
        assert_eq!(triangle_area2(&[0.0, 0.0], &[1.0, 1.0], &[2.0, 2.0]), 0.0);
    }

    #[test]
    fn area3_matches_2d_in_plane() {
        let a = triangle_area3(&[0.0, 0.0, 5.0], &[4.0, 0.0, 5.0], &[0.0, 3.0, 5.0]);
        assert!((a - 6.0).abs() < 1e-12);
    }

    #[test]
    fn area3_unsigned() {
        let a = triangle_area3(&[0.0, 0.0, 0.0], &[0.0, 3.0, 0.0], &[4.0, 0.0, 0.0]);
        assert!(a > 0.0);
    }

    #[test]
    fn normal_direction_and_length() {
        // Unnormalized: cross product of the edges, length 2 * area.
        let n: [f64; 3] =
            triangle_normal3(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], false);
        assert_eq!(n, [0.0, 0.0, 1.0]);

        let n: [f64; 3] =
            triangle_normal3(&[0.0, 0.0, 0.0], &[3.0, 0.0, 0.0], &[0.0, 3.0, 0.0], false);
        assert_eq!(n, [0.0, 0.0, 9.0]);
    }

    #[test]
    fn normal_normalized() {
        let n: [f64; 3] =
            triangle_normal3(&[0.0, 0.0, 0.0], &[3.0, 0.0, 0.0], &[0.0, 3.0, 0.0], true);
        assert_eq!(n, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn barycentric2_vertices_and_centroid() {
        let v1 = Point2::new(0.0, 0.0);
        let v2 = Point2::new(2.0, 0.0);
        let v3 = Point2::new(0.0, 2.0);

        assert_eq!(barycentric2(&v2, &v1, &v2, &v3), [0.0, 1.0, 0.0]);

        let centroid = Point2::new(2.0 / 3.0, 2.0 / 3.0);
        let bc = barycentric2(&centroid, &v1, &v2, &v3);
        for c in bc {
            assert!((c - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn barycentric2_sums_to_one() {
        let v1 = [0.0, 0.0];
        let v2 = [3.0, 1.0];
        let v3 = [1.0, 4.0];
        let bc = barycentric2(&[0.5, 0.5], &v1, &v2, &v3);
        assert!((bc[0] + bc[1] + bc[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn barycentric2_outside_is_negative() {
        let v1 = [0.0, 0.0];
        let v2 = [1.0, 0.0];
        let v3 = [0.0, 1.0];
        let bc = barycentric2(&[-1.0, 0.5], &v1, &v2, &v3);
        assert!(bc.iter().any(|&c| c < 0.0));
    }

    #[test]
    fn barycentric3_interior() {
        let v1 = Point3::new(0.0, 0.0, 0.0);
        let v2 = Point3::new(4.0, 0.0, 0.0);
        let v3 = Point3::new(0.0, 4.0, 0.0);
        let p = Point3::new(1.0, 1.0, 0.0);
        let bc = barycentric3(&p, &v1, &v2, &v3);
        assert!((bc[0] + bc[1] + bc[2] - 1.0).abs() < 1e-12);
        assert!((bc[0] - 0.5).abs() < 1e-12);
        assert!((bc[1] - 0.25).abs() < 1e-12);
        assert!((bc[2] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn barycentric3_outside_gets_sign() {
        let v1 = [0.0, 0.0, 0.0];
        let v2 = [1.0, 0.0, 0.0];
        let v3 = [0.0, 1.0, 0.0];
        let bc = barycentric3(&[-0.5, 0.25, 0.0], &v1, &v2, &v3);
        assert!(bc.iter().any(|&c| c < 0.0));
        assert!((bc[0] + bc[1] + bc[2] - 1.0).abs() < 1e-12);
    }
}
