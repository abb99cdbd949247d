mod block;
mod io;
mod norm;
mod ops;

pub use io::{ParseMatrixError, ReadError};

use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::compare::{approx_eq, Checks};
use crate::traits::{FloatScalar, Scalar};

/// Shape classification of a [`Matrix`], derived on demand from the
/// dimensions.
///
/// Advisory metadata only: arithmetic and decompositions never consult it,
/// and it cannot be set independently of the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    /// The empty 0×0 matrix.
    Null,
    /// Rows equal columns.
    Square,
    /// A single row with more than one column.
    RowVector,
    /// A single column with more than one row.
    ColumnVector,
    /// Anything else.
    Rectangular,
}

/// Dense heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage. The default-constructed value is the empty
/// 0×0 matrix, which also serves as the "null" state the text format
/// spells out as `Null Matrix`. Ownership of the buffer is exclusive;
/// clones are deep copies.
///
/// # Examples
///
/// ```
/// use mathkit::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a[3], 4.0);
///
/// let id = Matrix::<f64>::eye(2, 2);
/// assert_eq!(&a * &id, a);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// The empty 0×0 matrix.
    ///
    /// ```
    /// use mathkit::Matrix;
    /// let m = Matrix::<f64>::empty();
    /// assert!(m.is_empty());
    /// ```
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            nrows: 0,
            ncols: 0,
        }
    }

    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use mathkit::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `nrows x ncols` matrix of ones.
    pub fn ones(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::one(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix filled with `value`.
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix with ones on the main diagonal.
    ///
    /// Identity when square; for rectangular shapes the diagonal simply
    /// stops at the shorter dimension (no shape requirement is enforced).
    ///
    /// ```
    /// use mathkit::Matrix;
    /// let id = Matrix::<f64>::eye(3, 3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// ```
    pub fn eye(nrows: usize, ncols: usize) -> Self {
        let mut m = Self::zeros(nrows, ncols);
        for i in 0..nrows.min(ncols) {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// The buffer is copied, never aliased. Panics if
    /// `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use mathkit::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, data: &[T]) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self {
            data: data.to_vec(),
            nrows,
            ncols,
        }
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use mathkit::Matrix;
    /// let m = Matrix::from_fn(2, 2, |i, j| (i * 2 + j) as f64);
    /// assert_eq!(m[(1, 1)], 3.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Create a matrix of uniform random values in `[0, 1)` with two
    /// decimal digits of resolution (integers 0–99 scaled down).
    ///
    /// The generator is supplied by the caller; pass a seeded generator
    /// for reproducibility, or a fresh `rand::thread_rng()` to match the
    /// smoke-test character of this fill mode.
    ///
    /// ```
    /// use mathkit::Matrix;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let m = Matrix::<f64>::random(3, 3, &mut rng);
    /// assert!(m.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn random(nrows: usize, ncols: usize, rng: &mut impl Rng) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for _ in 0..nrows * ncols {
            data.push(T::from_f64(rng.gen_range(0..100) as f64 / 100.0));
        }
        Self { data, nrows, ncols }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether this is the empty 0×0 matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 && self.ncols == 0
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Shape classification, derived from the dimensions.
    ///
    /// ```
    /// use mathkit::{Matrix, MatrixKind};
    /// assert_eq!(Matrix::<f64>::zeros(3, 3).kind(), MatrixKind::Square);
    /// assert_eq!(Matrix::<f64>::zeros(1, 4).kind(), MatrixKind::RowVector);
    /// assert_eq!(Matrix::<f64>::zeros(4, 1).kind(), MatrixKind::ColumnVector);
    /// assert_eq!(Matrix::<f64>::empty().kind(), MatrixKind::Null);
    /// ```
    pub fn kind(&self) -> MatrixKind {
        if self.nrows == 0 && self.ncols == 0 {
            MatrixKind::Null
        } else if self.nrows == self.ncols {
            MatrixKind::Square
        } else if self.nrows == 1 {
            MatrixKind::RowVector
        } else if self.ncols == 1 {
            MatrixKind::ColumnVector
        } else {
            MatrixKind::Rectangular
        }
    }

    /// Reference to element `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }

    /// Mutable reference to element `(row, col)`.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }

    /// View the row-major data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the row-major data as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Row `i` as a contiguous slice.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }
}

// ── Tolerant equality ───────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Elementwise tolerant equality.
    ///
    /// `tolerance` is used as both the relative and the absolute bound of
    /// the robust comparison. Distinct from `==`, which is exact. Panics
    /// if the shapes differ.
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let b = Matrix::from_rows(2, 2, &[1.0 + 1e-12, 2.0, 3.0, 4.0]);
    /// assert!(a != b);
    /// assert!(a.is_equal(&b, 1e-9));
    /// ```
    pub fn is_equal(&self, other: &Self, tolerance: T) -> bool {
        assert_eq!(
            (self.nrows, self.ncols),
            (other.nrows, other.ncols),
            "dimension mismatch: {}x{} vs {}x{}",
            self.nrows,
            self.ncols,
            other.nrows,
            other.ncols,
        );
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| approx_eq(a, b, tolerance, tolerance, Checks::NONE))
    }

    /// Negation of [`Matrix::is_equal`].
    pub fn is_not_equal(&self, other: &Self, tolerance: T) -> bool {
        !self.is_equal(other, tolerance)
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = T;

    /// Linear row-major indexing.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_is_default() {
        let m = Matrix::<f64>::default();
        assert!(m.is_empty());
        assert_eq!(m.nrows(), 0);
        assert_eq!(m.ncols(), 0);
        assert_eq!(m, Matrix::empty());
    }

    #[test]
    fn zeros_and_ones() {
        let z = Matrix::<f64>::zeros(2, 3);
        assert!(z.as_slice().iter().all(|&x| x == 0.0));
        let o = Matrix::<f64>::ones(2, 3);
        assert!(o.as_slice().iter().all(|&x| x == 1.0));
    }

    #[test]
    fn eye_square() {
        let id = Matrix::<f64>::eye(3, 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(id[(i, j)], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn eye_rectangular() {
        let m = Matrix::<f64>::eye(2, 3);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 1)], 1.0);
        assert_eq!(m[(1, 2)], 0.0);
    }

    #[test]
    fn from_rows_layout() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[4], 5.0);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_fn_values() {
        let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0 } else { 0.0 });
        assert_eq!(m, Matrix::eye(3, 3));
    }

    #[test]
    fn random_range_and_determinism() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = Matrix::<f64>::random(4, 4, &mut rng);
        assert!(a.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));

        let mut rng2 = StdRng::seed_from_u64(42);
        let b = Matrix::<f64>::random(4, 4, &mut rng2);
        assert_eq!(a, b);
    }

    #[test]
    fn kind_classification() {
        assert_eq!(Matrix::<f64>::empty().kind(), MatrixKind::Null);
        assert_eq!(Matrix::<f64>::zeros(2, 2).kind(), MatrixKind::Square);
        assert_eq!(Matrix::<f64>::zeros(1, 1).kind(), MatrixKind::Square);
        assert_eq!(Matrix::<f64>::zeros(1, 5).kind(), MatrixKind::RowVector);
        assert_eq!(Matrix::<f64>::zeros(5, 1).kind(), MatrixKind::ColumnVector);
        assert_eq!(Matrix::<f64>::zeros(2, 3).kind(), MatrixKind::Rectangular);
    }

    #[test]
    fn index_mut_writes() {
        let mut m = Matrix::<f64>::zeros(2, 2);
        m[(0, 1)] = 5.0;
        m[2] = 7.0;
        assert_eq!(m[(0, 1)], 5.0);
        assert_eq!(m[(1, 0)], 7.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let m = Matrix::<f64>::zeros(2, 2);
        let _ = m[(2, 0)];
    }

    #[test]
    fn clone_is_deep() {
        let mut a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = a.clone();
        a[(0, 0)] = 9.0;
        assert_eq!(b[(0, 0)], 1.0);
    }

    #[test]
    fn exact_vs_tolerant_equality() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_rows(2, 2, &[1.0 + 1e-13, 2.0, 3.0, 4.0]);
        assert!(a != b);
        assert!(a.is_equal(&b, 1e-9));
        assert!(!a.is_not_equal(&b, 1e-9));

        let c = Matrix::from_rows(2, 2, &[1.5, 2.0, 3.0, 4.0]);
        assert!(a.is_not_equal(&c, 1e-9));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn is_equal_shape_mismatch() {
        let a = Matrix::<f64>::zeros(2, 2);
        let b = Matrix::<f64>::zeros(2, 3);
        let _ = a.is_equal(&b, 1e-9);
    }

    #[test]
    fn exact_equality_differs_by_shape() {
        let a = Matrix::from_rows(1, 4, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_rows(4, 1, &[1.0, 2.0, 3.0, 4.0]);
        assert!(a != b);
    }

    #[test]
    fn row_slice_contiguous() {
        let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
    }
}
