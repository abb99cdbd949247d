use crate::traits::FloatScalar;

use super::Matrix;

impl<T: FloatScalar> Matrix<T> {
    /// Euclidean norm of a row- or column-shaped matrix.
    ///
    /// Returns the sentinel `-1` when the matrix is neither a single row
    /// nor a single column; this is the one place the legacy contract
    /// signals failure through a value rather than a panic or a `Result`,
    /// so callers must check for it explicitly. A 1×1 matrix returns its
    /// bare element, not the element's absolute value.
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let v = Matrix::from_rows(1, 2, &[3.0, 4.0]);
    /// assert_eq!(v.vector_norm(), 5.0);
    ///
    /// let m = Matrix::<f64>::zeros(2, 2);
    /// assert_eq!(m.vector_norm(), -1.0);
    /// ```
    pub fn vector_norm(&self) -> T {
        if self.nrows != 1 && self.ncols != 1 {
            return -T::one();
        }

        if self.nrows == 1 && self.ncols == 1 {
            return self.data[0];
        }

        let mut norm = T::zero();
        for &x in &self.data {
            norm = norm + x * x;
        }
        norm.sqrt()
    }

    /// Squared Euclidean norm of a row- or column-shaped matrix.
    ///
    /// Same sentinel contract as [`Matrix::vector_norm`].
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let v = Matrix::from_rows(2, 1, &[3.0, 4.0]);
    /// assert_eq!(v.vector_norm2(), 25.0);
    /// ```
    pub fn vector_norm2(&self) -> T {
        if self.nrows != 1 && self.ncols != 1 {
            return -T::one();
        }

        if self.nrows == 1 && self.ncols == 1 {
            return self.data[0];
        }

        let mut norm = T::zero();
        for &x in &self.data {
            norm = norm + x * x;
        }
        norm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_vector_norm() {
        let v = Matrix::from_rows(1, 3, &[1.0, 2.0, 2.0]);
        assert_eq!(v.vector_norm(), 3.0);
        assert_eq!(v.vector_norm2(), 9.0);
    }

    #[test]
    fn column_vector_norm() {
        let v = Matrix::from_rows(4, 1, &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(v.vector_norm(), 2.0);
        assert_eq!(v.vector_norm2(), 4.0);
    }

    #[test]
    fn non_vector_sentinel() {
        let m = Matrix::<f64>::ones(2, 2);
        assert_eq!(m.vector_norm(), -1.0);
        assert_eq!(m.vector_norm2(), -1.0);

        let r = Matrix::<f64>::ones(3, 2);
        assert_eq!(r.vector_norm(), -1.0);
    }

    #[test]
    fn one_by_one_returns_element() {
        // The scalar case hands back the element itself, sign included.
        let m = Matrix::from_rows(1, 1, &[-5.0]);
        assert_eq!(m.vector_norm(), -5.0);
        assert_eq!(m.vector_norm2(), -5.0);
    }

    #[test]
    fn negative_components() {
        let v = Matrix::from_rows(1, 2, &[-3.0, -4.0]);
        assert_eq!(v.vector_norm(), 5.0);
    }
}
