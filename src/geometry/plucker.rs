use num_traits::{Float as _, Zero as _};

use crate::traits::{FloatScalar, PointRef};

/// Plücker coordinates of the directed line through `p1` and `p2`.
///
/// The six components are the 2×2 determinants of
///
/// ```text
/// | px  py  pz  1 |
/// | qx  qy  qz  1 |
/// ```
///
/// With `unit` set, all six components are divided by the absolute value
/// of the largest-magnitude component, which ends up at `±1`. This keeps
/// later sign/side computations away from huge intermediate values.
///
/// ```
/// use mathkit::geometry::plucker3;
///
/// let l = plucker3(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], false);
/// assert_eq!(l, [0.0, 0.0, -1.0, 0.0, 0.0, 0.0]);
/// ```
pub fn plucker3<P: PointRef + ?Sized>(p1: &P, p2: &P, unit: bool) -> [P::Coord; 6]
where
    P::Coord: FloatScalar,
{
    let (px, py, pz) = (p1.coord(0), p1.coord(1), p1.coord(2));
    let (qx, qy, qz) = (p2.coord(0), p2.coord(1), p2.coord(2));

    let mut plucker = [
        px * qy - qx * py,
        px * qz - qx * pz,
        px - qx,
        py * qz - qy * pz,
        pz - qz,
        qy - py,
    ];

    if unit {
        let mut max_val = P::Coord::zero();
        let mut max_index = None;
        for (i, &c) in plucker.iter().enumerate() {
            if max_val.abs() < c.abs() {
                max_index = Some(i);
                max_val = c;
            }
        }

        // All-zero coordinates (coincident points) are left as-is.
        if max_index.is_some() {
            let scale = max_val.abs();
            for c in plucker.iter_mut() {
                *c = *c / scale;
            }
        }
    }

    plucker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_axis_line() {
        let l = plucker3(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], false);
        assert_eq!(l, [0.0, 0.0, -1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn general_line() {
        let l = plucker3(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], false);
        // px*qy - qx*py = 5 - 8 = -3, etc.
        assert_eq!(l, [-3.0, -6.0, -3.0, -3.0, -3.0, 3.0]);
    }

    #[test]
    fn direction_reversal_negates() {
        let fwd = plucker3(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], false);
        let rev = plucker3(&[4.0, 5.0, 6.0], &[1.0, 2.0, 3.0], false);
        for i in 0..6 {
            assert_eq!(fwd[i], -rev[i]);
        }
    }

    #[test]
    fn normalized_max_component_is_unit() {
        let l = plucker3(&[1.0, 2.0, 3.0], &[4.0, 5.0, 7.0], true);
        let max = l.iter().fold(0.0_f64, |m, &c| m.max(c.abs()));
        assert!((max - 1.0).abs() < 1e-15);
    }

    #[test]
    fn normalized_preserves_signs() {
        let raw = plucker3(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], false);
        let unit = plucker3(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], true);
        for i in 0..6 {
            assert_eq!(raw[i].signum(), unit[i].signum());
        }
    }

    #[test]
    fn coincident_points_all_zero() {
        let l = plucker3(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0], true);
        assert_eq!(l, [0.0; 6]);
    }
}
