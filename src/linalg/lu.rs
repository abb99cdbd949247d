use crate::traits::FloatScalar;
use crate::Matrix;

use super::LinalgError;

/// LU decomposition with partial pivoting, in place.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `perm` is filled with the row permutation indices.
/// Returns `true` if the number of row swaps was even.
pub(crate) fn lu_in_place<T: FloatScalar>(
    a: &mut Matrix<T>,
    perm: &mut [usize],
) -> Result<bool, LinalgError> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "LU decomposition requires a square matrix");
    assert_eq!(
        n,
        perm.len(),
        "permutation slice length must match matrix size"
    );

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let mut even = true;

    for col in 0..n {
        // Partial pivoting: pick the row with the largest magnitude in
        // this column.
        let mut max_row = col;
        let mut max_val = a[(col, col)].abs();
        for row in (col + 1)..n {
            let val = a[(row, col)].abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val < T::eps() {
            return Err(LinalgError::Singular);
        }

        if max_row != col {
            perm.swap(col, max_row);
            for j in 0..n {
                let tmp = a[(col, j)];
                a[(col, j)] = a[(max_row, j)];
                a[(max_row, j)] = tmp;
            }
            even = !even;
        }

        // Row-major dgetrf-style elimination: scale the sub-column by
        // 1/pivot, then rank-1 update the trailing block one contiguous
        // row at a time.
        let pivot = a[(col, col)];
        let inv_pivot = T::one() / pivot;

        for row in (col + 1)..n {
            let factor = a[(row, col)] * inv_pivot;
            a[(row, col)] = factor;
            for j in (col + 1)..n {
                a[(row, j)] = a[(row, j)] - factor * a[(col, j)];
            }
        }
    }

    Ok(even)
}

/// Solve Ax = b given the packed LU decomposition and permutation.
///
/// `lu` is the packed L/U matrix from [`lu_in_place`], `perm` the row
/// permutation. `b` (input) and `x` (output) are separate slices of
/// length n.
pub(crate) fn lu_solve<T: FloatScalar>(lu: &Matrix<T>, perm: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.nrows();

    // Apply the permutation and forward-substitute (solve Ly = Pb).
    for i in 0..n {
        let mut sum = b[perm[i]];
        for j in 0..i {
            sum = sum - lu[(i, j)] * x[j];
        }
        x[i] = sum;
    }

    // Back substitution (solve Ux = y).
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - lu[(i, j)] * x[j];
        }
        x[i] = sum / lu[(i, i)];
    }
}

/// LU decomposition of a square matrix.
///
/// Stores the packed L/U factors and permutation vector. Use
/// [`Lu::solve`], [`Lu::inverse`], or [`Lu::det`] to work with the
/// decomposition; the convenience methods on [`Matrix`] construct one
/// internally.
///
/// # Example
///
/// ```
/// use mathkit::linalg::Lu;
/// use mathkit::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[2.0, 1.0, 5.0, 3.0]);
/// let lu = Lu::new(&a).unwrap();
///
/// let b = Matrix::from_rows(2, 1, &[4.0, 11.0]);
/// let x = lu.solve(&b);
/// assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!((x[(1, 0)] - 2.0).abs() < 1e-12);
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct Lu<T> {
    lu: Matrix<T>,
    perm: Vec<usize>,
    even: bool,
}

impl<T: FloatScalar> Lu<T> {
    /// Decompose a matrix. Returns an error if the matrix is singular.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinalgError> {
        assert!(a.is_square(), "LU decomposition requires a square matrix");
        let n = a.nrows();
        let mut lu = a.clone();
        let mut perm = vec![0usize; n];
        let even = lu_in_place(&mut lu, &mut perm)?;
        Ok(Self { lu, perm, even })
    }

    /// Solve `A · X = B`, one column of `B` at a time.
    pub fn solve(&self, b: &Matrix<T>) -> Matrix<T> {
        let n = self.lu.nrows();
        assert_eq!(b.nrows(), n, "right-hand side row count mismatch");

        let mut x = Matrix::zeros(n, b.ncols());
        let mut col_in = vec![T::zero(); n];
        let mut col_out = vec![T::zero(); n];

        for col in 0..b.ncols() {
            for i in 0..n {
                col_in[i] = b[(i, col)];
            }
            lu_solve(&self.lu, &self.perm, &col_in, &mut col_out);
            for i in 0..n {
                x[(i, col)] = col_out[i];
            }
        }

        x
    }

    /// Compute the matrix inverse by solving against the identity columns.
    pub fn inverse(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        let mut inv = Matrix::zeros(n, n);
        let mut e = vec![T::zero(); n];
        let mut col_buf = vec![T::zero(); n];

        for col in 0..n {
            if col > 0 {
                e[col - 1] = T::zero();
            }
            e[col] = T::one();

            lu_solve(&self.lu, &self.perm, &e, &mut col_buf);

            for row in 0..n {
                inv[(row, col)] = col_buf[row];
            }
        }

        inv
    }

    /// Compute the determinant from the diagonal of U and the swap parity.
    pub fn det(&self) -> T {
        let n = self.lu.nrows();
        let mut d = if self.even { T::one() } else { -T::one() };
        for i in 0..n {
            d = d * self.lu[(i, i)];
        }
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lu_solve_2x2() {
        // 3x + 2y = 7
        // x + 4y = 9
        let a = Matrix::from_rows(2, 2, &[3.0, 2.0, 1.0, 4.0]);
        let b = Matrix::from_rows(2, 1, &[7.0, 9.0]);

        let x = Lu::new(&a).unwrap().solve(&b);
        assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
        assert!((x[(1, 0)] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn lu_requires_pivoting() {
        // Zero in the leading position forces a row swap.
        let a = Matrix::from_rows(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let b = Matrix::from_rows(2, 1, &[3.0, 5.0]);
        let x = Lu::new(&a).unwrap().solve(&b);
        assert!((x[(0, 0)] - 5.0).abs() < 1e-12);
        assert!((x[(1, 0)] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn lu_det() {
        let a = Matrix::from_rows(2, 2, &[3.0, 8.0, 4.0, 6.0]);
        let lu = Lu::new(&a).unwrap();
        assert!((lu.det() - (-14.0)).abs() < 1e-12);
    }

    #[test]
    fn lu_det_odd_permutation() {
        let a = Matrix::from_rows(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let lu = Lu::new(&a).unwrap();
        assert!((lu.det() - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn lu_inverse_3x3() {
        let a = Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]);
        let inv = Lu::new(&a).unwrap().inverse();
        let id = &a * &inv;
        assert!(id.is_equal(&Matrix::eye(3, 3), 1e-10));
    }

    #[test]
    fn lu_singular() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        assert!(matches!(Lu::new(&a), Err(LinalgError::Singular)));
    }

    #[test]
    fn lu_in_place_parity() {
        let mut a = Matrix::from_rows(2, 2, &[2.0, 1.0, 4.0, 3.0]);
        let mut perm = [0usize; 2];
        let even = lu_in_place(&mut a, &mut perm).unwrap();
        // Pivot search swaps rows 0 and 1 once.
        assert!(!even);
        assert_eq!(perm, [1, 0]);
    }
}
