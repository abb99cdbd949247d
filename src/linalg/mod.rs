//! Dense linear-algebra backend for [`Matrix`].
//!
//! The decompositions are free functions operating on a matrix through its
//! plain row-major storage: LU with partial pivoting, and SVD via
//! Householder bidiagonalization followed by Golub-Kahan implicit-shift
//! QR. [`Matrix::determinant`], [`Matrix::inverse`], [`Matrix::svd`], and
//! [`Matrix::solve_axb`] are thin adapters over these primitives; any
//! backend providing the same four operations over dense matrices could
//! stand in behind the same method signatures.

pub(crate) mod lu;
pub(crate) mod svd;

pub use lu::Lu;
pub use svd::Svd;

use crate::traits::FloatScalar;
use crate::Matrix;

/// Errors from linear algebra operations.
///
/// Returned by decomposition constructors and the convenience methods on
/// [`Matrix`] (`inverse`, `svd`, `solve_axb`).
///
/// ```
/// use mathkit::{LinalgError, Matrix};
///
/// let singular = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Matrix is singular or nearly singular.
    Singular,
    /// Iterative algorithm did not converge within the iteration budget.
    ConvergenceFailure,
}

impl std::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::ConvergenceFailure => {
                write!(f, "iterative algorithm did not converge")
            }
        }
    }
}

impl std::error::Error for LinalgError {}

// ── Convenience methods on Matrix ───────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Determinant of a square matrix via LU decomposition.
    ///
    /// A singular matrix has determinant zero. Panics if the matrix is
    /// not square.
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let a = Matrix::from_rows(2, 2, &[4.0, 7.0, 2.0, 6.0]);
    /// assert!((a.determinant() - 10.0).abs() < 1e-9);
    /// ```
    pub fn determinant(&self) -> T {
        assert!(
            self.is_square(),
            "determinant requires a square matrix, got {}x{}",
            self.nrows,
            self.ncols,
        );
        match Lu::new(self) {
            Ok(lu) => lu.det(),
            Err(_) => T::zero(),
        }
    }

    /// Inverse of a square matrix via LU decomposition.
    ///
    /// Panics if the matrix is not square; returns
    /// [`LinalgError::Singular`] when no inverse exists.
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let a = Matrix::from_rows(2, 2, &[4.0, 7.0, 2.0, 6.0]);
    /// let inv = a.inverse().unwrap();
    /// let expected = Matrix::from_rows(2, 2, &[0.6, -0.7, -0.2, 0.4]);
    /// assert!(inv.is_equal(&expected, 1e-12));
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        assert!(
            self.is_square(),
            "inverse requires a square matrix, got {}x{}",
            self.nrows,
            self.ncols,
        );
        Ok(Lu::new(self)?.inverse())
    }

    /// Singular value decomposition.
    ///
    /// Returns the full decomposition `A = U · diag(σ) · Vᵀ` with `U`
    /// (M×M), the singular values as a min(M,N)×1 column sorted
    /// descending, and `V` (N×N, not transposed). Wide matrices are
    /// handled by decomposing the transpose and swapping the roles of `U`
    /// and `V`.
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let a = Matrix::from_rows(2, 2, &[3.0, 0.0, 0.0, -4.0]);
    /// let svd = a.svd().unwrap();
    /// assert!((svd.s[(0, 0)] - 4.0).abs() < 1e-10);
    /// assert!((svd.s[(1, 0)] - 3.0).abs() < 1e-10);
    /// ```
    pub fn svd(&self) -> Result<Svd<T>, LinalgError> {
        Svd::new(self)
    }

    /// Solve the linear system `A · X = B` by LU with partial pivoting.
    ///
    /// `B` may carry multiple right-hand sides as columns; the result has
    /// the same column count. Panics if `A` is not square or the row
    /// counts differ.
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let a = Matrix::from_rows(2, 2, &[3.0, 2.0, 1.0, 4.0]);
    /// let b = Matrix::from_rows(2, 1, &[7.0, 9.0]);
    /// let x = Matrix::solve_axb(&a, &b).unwrap();
    /// assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!((x[(1, 0)] - 2.0).abs() < 1e-12);
    /// ```
    pub fn solve_axb(a: &Self, b: &Self) -> Result<Self, LinalgError> {
        assert!(
            a.is_square(),
            "solve requires a square coefficient matrix, got {}x{}",
            a.nrows,
            a.ncols,
        );
        assert_eq!(
            a.nrows, b.nrows,
            "right-hand side has {} rows, expected {}",
            b.nrows, a.nrows,
        );
        Ok(Lu::new(a)?.solve(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinant_2x2() {
        let a = Matrix::from_rows(2, 2, &[4.0, 7.0, 2.0, 6.0]);
        assert!((a.determinant() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn determinant_3x3() {
        let a = Matrix::from_rows(3, 3, &[6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0]);
        assert!((a.determinant() - (-306.0)).abs() < 1e-10);
    }

    #[test]
    fn determinant_singular_is_zero() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        assert_eq!(a.determinant(), 0.0);
    }

    #[test]
    fn determinant_of_transpose() {
        let a = Matrix::from_rows(3, 3, &[2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0]);
        assert!((a.determinant() - a.transpose().determinant()).abs() < 1e-10);
    }

    #[test]
    #[should_panic(expected = "square")]
    fn determinant_non_square() {
        let _ = Matrix::<f64>::zeros(2, 3).determinant();
    }

    #[test]
    fn inverse_2x2_known() {
        let a = Matrix::from_rows(2, 2, &[4.0, 7.0, 2.0, 6.0]);
        let inv = a.inverse().unwrap();
        let expected = Matrix::from_rows(2, 2, &[0.6, -0.7, -0.2, 0.4]);
        assert!(inv.is_equal(&expected, 1e-12));

        let id = &a * &inv;
        assert!(id.is_equal(&Matrix::eye(2, 2), 1e-9));
    }

    #[test]
    fn inverse_3x3_product_is_identity() {
        let a = Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]);
        let inv = a.inverse().unwrap();
        assert!((&inv * &a).is_equal(&Matrix::eye(3, 3), 1e-9));
        assert!((&a * &inv).is_equal(&Matrix::eye(3, 3), 1e-9));
    }

    #[test]
    fn inverse_singular_errors() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        assert_eq!(a.inverse().unwrap_err(), LinalgError::Singular);
    }

    #[test]
    fn solve_single_rhs() {
        let a = Matrix::from_rows(
            3,
            3,
            &[2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0],
        );
        let b = Matrix::from_rows(3, 1, &[8.0, -11.0, -3.0]);
        let x = Matrix::solve_axb(&a, &b).unwrap();
        assert!((x[(0, 0)] - 2.0).abs() < 1e-12);
        assert!((x[(1, 0)] - 3.0).abs() < 1e-12);
        assert!((x[(2, 0)] - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn solve_multiple_rhs() {
        let a = Matrix::from_rows(2, 2, &[2.0, 0.0, 0.0, 4.0]);
        let b = Matrix::from_rows(2, 2, &[2.0, 4.0, 8.0, 12.0]);
        let x = Matrix::solve_axb(&a, &b).unwrap();
        let expected = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 3.0]);
        assert!(x.is_equal(&expected, 1e-12));
    }

    #[test]
    fn solve_residual() {
        let a = Matrix::from_rows(
            4,
            4,
            &[
                1.0, 2.0, 3.0, 4.0, //
                5.0, 6.0, 7.0, 8.0, //
                2.0, 6.0, 4.0, 1.0, //
                3.0, 1.0, 9.0, 2.0,
            ],
        );
        let b = Matrix::from_rows(4, 1, &[10.0, 26.0, 13.0, 15.0]);
        let x = Matrix::solve_axb(&a, &b).unwrap();
        let residual = &(&a * &x) - &b;
        assert!(residual.as_slice().iter().all(|&r| r.abs() < 1e-10));
    }

    #[test]
    fn solve_singular_errors() {
        let a = Matrix::from_rows(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        let b = Matrix::from_rows(2, 1, &[1.0, 2.0]);
        assert_eq!(
            Matrix::solve_axb(&a, &b).unwrap_err(),
            LinalgError::Singular
        );
    }
}
