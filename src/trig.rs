//! Angle units and guarded inverse trigonometric functions.
//!
//! `acos` and `atan2` sit at the end of chains of floating point
//! arithmetic; rounding can push a cosine slightly past `±1`, and near-zero
//! components make quadrant determination ambiguous. The helpers here
//! absorb rounding within a caller-supplied tolerance and report anything
//! beyond it as an error instead of silently producing NaN.

use std::f64::consts::PI;

use crate::traits::FloatScalar;

/// Unit for angle-valued results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    /// Radians.
    Radians,
    /// Degrees.
    Degrees,
}

/// Errors from the guarded inverse trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigError {
    /// The `acos` argument is outside `[-1, 1]` by more than the tolerance.
    OutOfDomain,
    /// Both `atan2` arguments are on a tolerance boundary where no
    /// quadrant can be assigned.
    UndeterminedQuadrant,
}

impl std::fmt::Display for TrigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrigError::OutOfDomain => write!(f, "inverse cosine argument out of [-1, 1]"),
            TrigError::UndeterminedQuadrant => {
                write!(f, "quadrant of atan2 argument could not be determined")
            }
        }
    }
}

impl std::error::Error for TrigError {}

/// Convert an angle in degrees to radians.
///
/// ```
/// use mathkit::trig::deg_to_rad;
/// assert!((deg_to_rad(180.0_f64) - std::f64::consts::PI).abs() < 1e-15);
/// ```
#[inline]
pub fn deg_to_rad<T: FloatScalar>(x: T) -> T {
    x * T::from_f64(PI) / T::from_f64(180.0)
}

/// Convert an angle in radians to degrees.
///
/// ```
/// use mathkit::trig::rad_to_deg;
/// assert!((rad_to_deg(std::f64::consts::PI) - 180.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rad_to_deg<T: FloatScalar>(x: T) -> T {
    x * T::from_f64(180.0) / T::from_f64(PI)
}

/// Inverse cosine with a tolerance band around the domain boundary.
///
/// Arguments within `epsilon` of `±1` are clamped before calling `acos`;
/// arguments beyond the band are an error. The result is in `[0, π]`.
///
/// ```
/// use mathkit::trig::acos_checked;
///
/// // A cosine nudged past 1 by rounding still resolves to 0.
/// assert_eq!(acos_checked(1.0 + 1e-9, 1e-6).unwrap(), 0.0);
/// assert!(acos_checked(1.5, 1e-6).is_err());
/// ```
pub fn acos_checked<T: FloatScalar>(x: T, epsilon: T) -> Result<T, TrigError> {
    let one = T::one();
    let mut x = x;
    if x > one && x <= one + epsilon {
        x = one;
    }
    if x < -one && x >= -one - epsilon {
        x = -one;
    }
    if x > one || x < -one {
        return Err(TrigError::OutOfDomain);
    }
    Ok(x.acos())
}

/// Inverse tangent of `y/x` with the result in `[0, 2π)`.
///
/// Components with magnitude below `epsilon` are treated as exactly zero,
/// which pins points on the axes to `0`, `π/2`, `π`, or `3π/2` rather than
/// letting a tiny residual pick the quadrant. The origin maps to `0`.
///
/// ```
/// use mathkit::trig::atan2_full;
/// use std::f64::consts::PI;
///
/// assert!((atan2_full(1.0, 1.0, 1e-9).unwrap() - PI / 4.0).abs() < 1e-12);
/// assert!((atan2_full(1e-12, -1.0, 1e-9).unwrap() - PI).abs() < 1e-12);
/// ```
pub fn atan2_full<T: FloatScalar>(y: T, x: T, epsilon: T) -> Result<T, TrigError> {
    let zero = T::zero();
    let pi = T::from_f64(PI);
    let pi_2 = T::from_f64(PI / 2.0);
    let pi_3_2 = T::from_f64(3.0 * PI / 2.0);
    let two_pi = T::from_f64(2.0 * PI);

    // Origin and on-axis cases first.
    if x.abs() < epsilon && y.abs() < epsilon {
        return Ok(zero);
    }
    if x > epsilon && y.abs() < epsilon {
        return Ok(zero);
    }
    if x.abs() < epsilon && y > epsilon {
        return Ok(pi_2);
    }
    if x < -epsilon && y.abs() < epsilon {
        return Ok(pi);
    }
    if x.abs() < epsilon && y < -epsilon {
        return Ok(pi_3_2);
    }

    let t = (y / x).abs().atan();

    if x > epsilon && y > epsilon {
        return Ok(t);
    }
    if x < -epsilon && y > epsilon {
        return Ok(pi - t);
    }
    if x < -epsilon && y < -epsilon {
        return Ok(pi + t);
    }
    if x > epsilon && y < -epsilon {
        return Ok(two_pi - t);
    }

    // A component sitting exactly on the tolerance boundary falls through
    // every case above.
    Err(TrigError::UndeterminedQuadrant)
}
