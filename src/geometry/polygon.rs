use num_traits::Zero as _;

use crate::traits::{FloatScalar, PointRef};

/// Signed area of a simple 2D polygon.
///
/// Shoelace summation over the cyclic vertex sequence:
/// `2 * area = Σ xᵢ * (yᵢ₊₁ - yᵢ₋₁)`. The sign follows the winding
/// (positive for counter-clockwise). Fewer than three vertices yield
/// zero area.
///
/// ```
/// use mathkit::geometry::polygon_area2;
///
/// // Unit square, counter-clockwise.
/// let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
/// assert_eq!(polygon_area2(&square), 1.0);
///
/// assert_eq!(polygon_area2::<[f64; 2]>(&[[0.0, 0.0], [1.0, 0.0]]), 0.0);
/// ```
pub fn polygon_area2<P: PointRef>(points: &[P]) -> P::Coord
where
    P::Coord: FloatScalar,
{
    let n = points.len();
    if n < 3 {
        return P::Coord::zero();
    }

    let mut area = P::Coord::zero();
    for i in 0..n {
        let prev = points[(i + n - 1) % n].coord(1);
        let next = points[(i + 1) % n].coord(1);
        area = area + points[i].coord(0) * (next - prev);
    }
    area / P::Coord::from_f64(2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::Point2;

    #[test]
    fn unit_square() {
        let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        assert_eq!(polygon_area2(&square), 1.0);
    }

    #[test]
    fn winding_flips_sign() {
        let cw = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
        assert_eq!(polygon_area2(&cw), -1.0);
    }

    #[test]
    fn triangle_matches_triangle_area() {
        let tri = [[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]];
        assert_eq!(polygon_area2(&tri), 6.0);
    }

    #[test]
    fn translated_polygon_same_area() {
        let hex: Vec<Point2<f64>> = (0..6)
            .map(|k| {
                let a = std::f64::consts::PI / 3.0 * k as f64;
                Point2::new(a.cos() + 10.0, a.sin() - 20.0)
            })
            .collect();
        let expected = 3.0 * 3.0_f64.sqrt() / 2.0;
        assert!((polygon_area2(&hex) - expected).abs() < 1e-12);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(polygon_area2::<[f64; 2]>(&[]), 0.0);
        assert_eq!(polygon_area2(&[[1.0, 2.0]]), 0.0);
        assert_eq!(polygon_area2(&[[1.0, 2.0], [3.0, 4.0]]), 0.0);
    }

    #[test]
    fn concave_polygon() {
        // L-shape of area 3.
        let l = [
            [0.0, 0.0],
            [2.0, 0.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 2.0],
            [0.0, 2.0],
        ];
        assert_eq!(polygon_area2(&l), 3.0);
    }
}
