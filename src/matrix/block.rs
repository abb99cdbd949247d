use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

// ── Submatrix read/write ────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Copy of the closed range `[r1, r2] × [c1, c2]` as a new matrix.
    ///
    /// Both corners are inclusive. Panics if the range exceeds the shape
    /// or is reversed.
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let m = Matrix::from_rows(3, 3, &[
    ///     1.0, 2.0, 3.0,
    ///     4.0, 5.0, 6.0,
    ///     7.0, 8.0, 9.0,
    /// ]);
    /// let s = m.submatrix(1, 1, 2, 2);
    /// assert_eq!(s, Matrix::from_rows(2, 2, &[5.0, 6.0, 8.0, 9.0]));
    /// ```
    pub fn submatrix(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> Self {
        assert!(
            r1 <= r2 && r2 < self.nrows && c1 <= c2 && c2 < self.ncols,
            "submatrix range ({},{})..=({},{}) invalid for {}x{} matrix",
            r1, c1, r2, c2, self.nrows, self.ncols,
        );

        let mut sub = Matrix::zeros(r2 - r1 + 1, c2 - c1 + 1);
        for i in r1..=r2 {
            for j in c1..=c2 {
                sub[(i - r1, j - c1)] = self[(i, j)];
            }
        }
        sub
    }

    /// Overwrite the closed range `[r1, r2] × [c1, c2]` from `b`.
    ///
    /// The inverse of [`Matrix::submatrix`]; `b` must be at least
    /// `(r2 - r1 + 1) × (c2 - c1 + 1)`.
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let mut m = Matrix::<f64>::zeros(3, 3);
    /// m.set_submatrix(0, 0, 1, 1, &Matrix::ones(2, 2));
    /// assert_eq!(m[(1, 1)], 1.0);
    /// assert_eq!(m[(2, 2)], 0.0);
    /// ```
    pub fn set_submatrix(&mut self, r1: usize, c1: usize, r2: usize, c2: usize, b: &Self) {
        assert!(
            r1 <= r2 && r2 < self.nrows && c1 <= c2 && c2 < self.ncols,
            "submatrix range ({},{})..=({},{}) invalid for {}x{} matrix",
            r1, c1, r2, c2, self.nrows, self.ncols,
        );
        assert!(
            b.nrows >= r2 - r1 + 1 && b.ncols >= c2 - c1 + 1,
            "source matrix {}x{} too small for submatrix range",
            b.nrows, b.ncols,
        );

        for i in r1..=r2 {
            for j in c1..=c2 {
                self[(i, j)] = b[(i - r1, j - c1)];
            }
        }
    }

    /// Overwrite row `r` from a row-shaped matrix with `ncols` elements.
    pub fn set_row(&mut self, r: usize, b: &Self) {
        assert!(r < self.nrows, "row {} out of range", r);
        assert_eq!(
            b.data.len(),
            self.ncols,
            "source has {} elements, row needs {}",
            b.data.len(),
            self.ncols,
        );

        for j in 0..self.ncols {
            self[(r, j)] = b.data[j];
        }
    }

    /// Overwrite column `c` from a column-shaped matrix with `nrows`
    /// elements.
    pub fn set_col(&mut self, c: usize, b: &Self) {
        assert!(c < self.ncols, "column {} out of range", c);
        assert_eq!(
            b.data.len(),
            self.nrows,
            "source has {} elements, column needs {}",
            b.data.len(),
            self.nrows,
        );

        for i in 0..self.nrows {
            self[(i, c)] = b.data[i];
        }
    }

    /// The main diagonal of a square matrix, as a column vector.
    ///
    /// Panics if the matrix is not square.
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.diagonal(), Matrix::from_rows(2, 1, &[1.0, 4.0]));
    /// ```
    pub fn diagonal(&self) -> Self {
        assert!(
            self.is_square(),
            "diagonal requires a square matrix, got {}x{}",
            self.nrows,
            self.ncols,
        );

        let mut d = Matrix::zeros(self.nrows, 1);
        for i in 0..self.nrows {
            d.data[i] = self[(i, i)];
        }
        d
    }
}

// ── Row averaging ───────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Column vector whose entry `i` is the arithmetic mean of row `i`.
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.avg_rows(), Matrix::from_rows(2, 1, &[2.0, 5.0]));
    /// ```
    pub fn avg_rows(&self) -> Self {
        let cols = T::from_f64(self.ncols as f64);
        let mut avg = Matrix::zeros(self.nrows, 1);
        for i in 0..self.nrows {
            let mut sum = T::zero();
            for j in 0..self.ncols {
                sum = sum + self[(i, j)];
            }
            avg.data[i] = sum / cols;
        }
        avg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<f64> {
        Matrix::from_rows(
            3,
            4,
            &[
                1.0, 2.0, 3.0, 4.0, //
                5.0, 6.0, 7.0, 8.0, //
                9.0, 10.0, 11.0, 12.0,
            ],
        )
    }

    #[test]
    fn submatrix_interior() {
        let m = sample();
        let s = m.submatrix(0, 1, 1, 2);
        assert_eq!(s, Matrix::from_rows(2, 2, &[2.0, 3.0, 6.0, 7.0]));
    }

    #[test]
    fn submatrix_single_element() {
        let m = sample();
        let s = m.submatrix(2, 3, 2, 3);
        assert_eq!(s, Matrix::from_rows(1, 1, &[12.0]));
    }

    #[test]
    fn submatrix_full() {
        let m = sample();
        assert_eq!(m.submatrix(0, 0, 2, 3), m);
    }

    #[test]
    #[should_panic(expected = "invalid")]
    fn submatrix_out_of_range() {
        let _ = sample().submatrix(0, 0, 3, 0);
    }

    #[test]
    fn set_submatrix_round_trip() {
        let mut m = sample();
        let block = Matrix::from_rows(2, 2, &[0.0, -1.0, -2.0, -3.0]);
        m.set_submatrix(1, 1, 2, 2, &block);
        assert_eq!(m.submatrix(1, 1, 2, 2), block);
        assert_eq!(m[(0, 0)], 1.0);
    }

    #[test]
    fn set_row_and_col() {
        let mut m = Matrix::<f64>::zeros(3, 3);
        m.set_row(1, &Matrix::from_rows(1, 3, &[1.0, 2.0, 3.0]));
        assert_eq!(m.row_slice(1), &[1.0, 2.0, 3.0]);

        m.set_col(2, &Matrix::from_rows(3, 1, &[7.0, 8.0, 9.0]));
        assert_eq!(m[(0, 2)], 7.0);
        assert_eq!(m[(1, 2)], 8.0);
        assert_eq!(m[(2, 2)], 9.0);
        // The earlier row write outside the column is untouched.
        assert_eq!(m[(1, 0)], 1.0);
    }

    #[test]
    #[should_panic(expected = "source has")]
    fn set_row_wrong_length() {
        let mut m = Matrix::<f64>::zeros(2, 3);
        m.set_row(0, &Matrix::from_rows(1, 2, &[1.0, 2.0]));
    }

    #[test]
    fn diagonal_square() {
        let m = Matrix::from_rows(3, 3, &[1.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 9.0]);
        assert_eq!(m.diagonal(), Matrix::from_rows(3, 1, &[1.0, 5.0, 9.0]));
    }

    #[test]
    #[should_panic(expected = "square")]
    fn diagonal_non_square() {
        let _ = sample().diagonal();
    }

    #[test]
    fn avg_rows_means() {
        let m = sample();
        assert_eq!(m.avg_rows(), Matrix::from_rows(3, 1, &[2.5, 6.5, 10.5]));
    }

    #[test]
    fn avg_rows_shape() {
        let m = Matrix::<f64>::ones(4, 2);
        let avg = m.avg_rows();
        assert_eq!(avg.nrows(), 4);
        assert_eq!(avg.ncols(), 1);
        assert!(avg.as_slice().iter().all(|&x| x == 1.0));
    }
}
