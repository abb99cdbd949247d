//! Rotation quaternion over 3D points.
//!
//! Stored scalar-last as `(x, y, z, w)` where the vector part is
//! `axis * sin(angle/2)` and `w = cos(angle/2)`. Rotation composition is
//! the Hamilton product; [`Quaternion::inverse`] is the conjugate and
//! assumes unit norm, which every constructor here produces.

use std::ops::{Mul, MulAssign, Neg};

use crate::points::Point3;
use crate::traits::FloatScalar;
use crate::Matrix;

/// A rotation quaternion.
///
/// # Examples
///
/// ```
/// use mathkit::points::Point3;
/// use mathkit::Quaternion;
/// use std::f64::consts::PI;
///
/// // Quarter turn about the z axis takes x onto y.
/// let q = Quaternion::from_axis_angle(Point3::new(0.0, 0.0, 1.0), PI / 2.0);
/// let r = q.rotate(Point3::new(1.0, 0.0, 0.0));
/// assert!(r.approx_eq(&Point3::new(0.0, 1.0, 0.0), 1e-12, 1e-12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: FloatScalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatScalar> Quaternion<T> {
    /// Construct from raw components: vector part `(x, y, z)` is
    /// `axis * sin(angle/2)`, scalar part `w` is `cos(angle/2)`.
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The identity rotation.
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
            w: T::one(),
        }
    }

    /// Construct from a rotation axis and an angle in radians.
    ///
    /// The axis need not be normalized. An axis of near-zero magnitude
    /// yields the identity (normalizing it would be unstable).
    pub fn from_axis_angle(axis: Point3<T>, angle: T) -> Self {
        let mag = axis.norm();
        if mag < T::from_f64(1e-8) {
            return Self::identity();
        }

        let two = T::from_f64(2.0);
        let sin_half = (angle / two).sin();
        Self {
            x: sin_half * axis.x / mag,
            y: sin_half * axis.y / mag,
            z: sin_half * axis.z / mag,
            w: (angle / two).cos(),
        }
    }

    /// Construct the rotation taking the direction of `v1` onto the
    /// direction of `v2`.
    ///
    /// The axis is the cross product of the inputs, so it is orthogonal
    /// to both and the rotation angle is minimal. Near-zero inputs yield
    /// the identity; for nearly parallel inputs the axis degenerates and
    /// the result collapses toward the identity as well.
    pub fn rotation_between(v1: &Point3<T>, v2: &Point3<T>) -> Self {
        let epsilon = T::from_f64(1e-8);
        let v1_mag2 = v1.norm2();
        let v2_mag2 = v2.norm2();

        if v1_mag2 < epsilon || v2_mag2 < epsilon {
            return Self::identity();
        }

        let axis = v1.cross(v2);
        let axis_mag2 = axis.norm2();

        let mut angle = (axis_mag2 / (v1_mag2 * v2_mag2)).sqrt().asin();
        if v1.dot(v2) < T::zero() {
            angle = T::from_f64(std::f64::consts::PI) - angle;
        }

        Self::from_axis_angle(axis, angle)
    }

    /// Squared norm over all four components.
    #[inline]
    pub fn norm2(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Norm over all four components.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm2().sqrt()
    }

    /// Normalize in place and return the pre-normalization magnitude.
    pub fn normalize(&mut self) -> T {
        let mag = self.norm();
        self.x = self.x / mag;
        self.y = self.y / mag;
        self.z = self.z / mag;
        self.w = self.w / mag;
        mag
    }

    /// A normalized copy.
    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// The inverse rotation: the conjugate, assuming unit norm.
    ///
    /// The axis direction flips while the angle is unchanged.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Invert in place.
    #[inline]
    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// Dot product over all four components.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Rotate a vector by this quaternion.
    pub fn rotate(&self, v: Point3<T>) -> Point3<T> {
        let two = T::from_f64(2.0);
        let q00 = two * self.x * self.x;
        let q01 = two * self.x * self.y;
        let q02 = two * self.x * self.z;
        let q03 = two * self.x * self.w;
        let q11 = two * self.y * self.y;
        let q12 = two * self.y * self.z;
        let q13 = two * self.y * self.w;
        let q22 = two * self.z * self.z;
        let q23 = two * self.z * self.w;
        let one = T::one();

        Point3::new(
            (one - q11 - q22) * v.x + (q01 - q23) * v.y + (q02 + q13) * v.z,
            (q01 + q23) * v.x + (one - q22 - q00) * v.y + (q12 - q03) * v.z,
            (q02 - q13) * v.x + (q12 + q03) * v.y + (one - q11 - q00) * v.z,
        )
    }

    /// Rotate a vector by the inverse of this quaternion.
    #[inline]
    pub fn inverse_rotate(&self, v: Point3<T>) -> Point3<T> {
        self.inverse().rotate(v)
    }

    /// The rotation axis, normalized.
    ///
    /// When the encoded angle exceeds π the axis is flipped so the
    /// reported rotation stays in `[0, π]`, pairing with
    /// [`Quaternion::angle`].
    pub fn axis(&self) -> Point3<T> {
        let mut axis = Point3::new(self.x, self.y, self.z);
        let mag = axis.norm();
        if mag > T::from_f64(1e-8) {
            axis = axis / mag;
        }

        let half_pi = T::from_f64(std::f64::consts::FRAC_PI_2);
        if self.w.acos() <= half_pi {
            axis
        } else {
            -axis
        }
    }

    /// The rotation angle in `[0, π]`.
    pub fn angle(&self) -> T {
        let two = T::from_f64(2.0);
        let angle = two * self.w.acos();
        let pi = T::from_f64(std::f64::consts::PI);
        if angle <= pi {
            angle
        } else {
            two * pi - angle
        }
    }

    /// Axis and angle together.
    pub fn axis_angle(&self) -> (Point3<T>, T) {
        (self.axis(), self.angle())
    }

    /// The equivalent 3×3 rotation matrix.
    ///
    /// Columns are the images of the basis vectors, so
    /// `m * v == self.rotate(v)` for column vectors `v`.
    pub fn rotation_matrix(&self) -> Matrix<T> {
        let two = T::from_f64(2.0);
        let q00 = two * self.x * self.x;
        let q01 = two * self.x * self.y;
        let q02 = two * self.x * self.z;
        let q03 = two * self.x * self.w;
        let q11 = two * self.y * self.y;
        let q12 = two * self.y * self.z;
        let q13 = two * self.y * self.w;
        let q22 = two * self.z * self.z;
        let q23 = two * self.z * self.w;
        let one = T::one();

        Matrix::from_rows(
            3,
            3,
            &[
                one - q11 - q22,
                q01 - q23,
                q02 + q13,
                q01 + q23,
                one - q22 - q00,
                q12 - q03,
                q02 - q13,
                q12 + q03,
                one - q11 - q00,
            ],
        )
    }

    /// Spherical linear interpolation from `q1` to `q2` at parameter
    /// `t ∈ [0, 1]`.
    ///
    /// Near-identical orientations fall back to linear interpolation.
    /// With `allow_flip` set, antipodal representations are flipped so
    /// interpolation takes the shorter of the two arcs.
    pub fn slerp(q1: &Self, q2: &Self, t: T, allow_flip: bool) -> Self {
        let cos_angle = q1.dot(q2);
        let one = T::one();

        let (mut c1, c2) = if (one - cos_angle.abs()) < T::from_f64(0.01) {
            (one - t, t)
        } else {
            let angle = cos_angle.abs().acos();
            let sin_angle = angle.sin();
            (
                ((one - t) * angle).sin() / sin_angle,
                (t * angle).sin() / sin_angle,
            )
        };

        if allow_flip && cos_angle < T::zero() {
            c1 = -c1;
        }

        Self {
            x: c1 * q1.x + c2 * q2.x,
            y: c1 * q1.y + c2 * q2.y,
            z: c1 * q1.z + c2 * q2.z,
            w: c1 * q1.w + c2 * q2.w,
        }
    }
}

// ── Operators ───────────────────────────────────────────────────────

impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    /// Hamilton product: `a * b` applies `b` first, then `a`.
    fn mul(self, rhs: Self) -> Self {
        let (x0, y0, z0, w0) = (self.x, self.y, self.z, self.w);
        let (x1, y1, z1, w1) = (rhs.x, rhs.y, rhs.z, rhs.w);

        Self {
            x: w0 * x1 + x0 * w1 + y0 * z1 - z0 * y1,
            y: w0 * y1 - x0 * z1 + y0 * w1 + z0 * x1,
            z: w0 * z1 + x0 * y1 - y0 * x1 + z0 * w1,
            w: w0 * w1 - x0 * x1 - y0 * y1 - z0 * z1,
        }
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;

    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        *self * *rhs
    }
}

impl<T: FloatScalar> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    /// Negate all four components; the represented rotation is the same,
    /// with axis direction and angle sign both reversed.
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}
