use crate::traits::FloatScalar;
use crate::Matrix;

use super::LinalgError;

/// Givens rotation `(c, s)` zeroing `b` against `a`.
fn givens<T: FloatScalar>(a: T, b: T) -> (T, T) {
    if b == T::zero() {
        (T::one(), T::zero())
    } else if b.abs() > a.abs() {
        let t = a / b;
        let s = T::one() / (T::one() + t * t).sqrt();
        (s * t, s)
    } else {
        let t = b / a;
        let c = T::one() / (T::one() + t * t).sqrt();
        (c, c * t)
    }
}

/// Householder bidiagonalization: reduce an M×N matrix (M ≥ N) to upper
/// bidiagonal form via orthogonal transforms.
///
/// On return:
/// - `diag[0..n]` contains the bidiagonal diagonal
/// - `off_diag[0..n-1]` contains the bidiagonal superdiagonal
/// - `u` (M×M) accumulates the left orthogonal transform
/// - `v` (N×N) accumulates the right orthogonal transform
///
/// The result satisfies `A = U · B · Vᵀ` where B = bidiag(diag, off_diag).
pub(crate) fn bidiagonalize<T: FloatScalar>(
    a: &mut Matrix<T>,
    diag: &mut [T],
    off_diag: &mut [T],
    u: &mut Matrix<T>,
    v: &mut Matrix<T>,
    compute_u: bool,
    compute_v: bool,
) {
    let m = a.nrows();
    let n = a.ncols();
    assert!(m >= n, "bidiagonalize requires M >= N");
    assert!(diag.len() >= n);
    assert!(off_diag.len() + 1 >= n);

    if compute_u {
        *u = Matrix::eye(m, m);
    }
    if compute_v {
        *v = Matrix::eye(n, n);
    }

    for k in 0..n {
        // ── Left Householder: zero out a[k+1..m, k] ──
        let mut norm_sq = T::zero();
        for i in k..m {
            norm_sq = norm_sq + a[(i, k)] * a[(i, k)];
        }

        if norm_sq > T::eps() * T::eps() {
            let norm = norm_sq.sqrt();
            let akk = a[(k, k)];

            let sigma = if akk.abs() < T::eps() {
                norm
            } else {
                norm * akk.signum()
            };

            let v0 = akk + sigma;
            a[(k, k)] = v0;

            // Scale sub-diagonal entries so v[0] = 1 implicitly.
            for i in (k + 1)..m {
                a[(i, k)] = a[(i, k)] / v0;
            }

            let tau = v0 / sigma;

            // Apply to trailing columns: A[k.., k+1..] -= tau * v * (vᵀ A)
            for j in (k + 1)..n {
                let mut dot = a[(k, j)];
                for i in (k + 1)..m {
                    dot = dot + a[(i, k)] * a[(i, j)];
                }
                dot = dot * tau;

                a[(k, j)] = a[(k, j)] - dot;
                for i in (k + 1)..m {
                    let vi = a[(i, k)];
                    a[(i, j)] = a[(i, j)] - dot * vi;
                }
            }

            // Accumulate U: U = U * (I - tau * v * vᵀ)
            if compute_u {
                for row in 0..m {
                    let mut dot = u[(row, k)];
                    for i in (k + 1)..m {
                        dot = dot + u[(row, i)] * a[(i, k)];
                    }
                    dot = dot * tau;

                    u[(row, k)] = u[(row, k)] - dot;
                    for i in (k + 1)..m {
                        let vi = a[(i, k)];
                        u[(row, i)] = u[(row, i)] - dot * vi;
                    }
                }
            }

            diag[k] = -sigma;
        } else {
            diag[k] = a[(k, k)];
        }

        // ── Right Householder: zero out a[k, k+2..n] ──
        if k + 2 <= n.saturating_sub(1) {
            let mut norm_sq = T::zero();
            for j in (k + 1)..n {
                norm_sq = norm_sq + a[(k, j)] * a[(k, j)];
            }

            if norm_sq > T::eps() * T::eps() {
                let norm = norm_sq.sqrt();
                let ak_k1 = a[(k, k + 1)];

                let sigma = if ak_k1.abs() < T::eps() {
                    norm
                } else {
                    norm * ak_k1.signum()
                };

                let v0 = ak_k1 + sigma;
                a[(k, k + 1)] = v0;

                for j in (k + 2)..n {
                    a[(k, j)] = a[(k, j)] / v0;
                }

                let tau = v0 / sigma;

                // Apply from the right to rows k+1..m.
                for i in (k + 1)..m {
                    let mut dot = a[(i, k + 1)];
                    for j in (k + 2)..n {
                        dot = dot + a[(i, j)] * a[(k, j)];
                    }
                    dot = dot * tau;

                    a[(i, k + 1)] = a[(i, k + 1)] - dot;
                    for j in (k + 2)..n {
                        let vj = a[(k, j)];
                        a[(i, j)] = a[(i, j)] - dot * vj;
                    }
                }

                // Accumulate V.
                if compute_v {
                    for row in 0..n {
                        let mut dot = v[(row, k + 1)];
                        for j in (k + 2)..n {
                            dot = dot + v[(row, j)] * a[(k, j)];
                        }
                        dot = dot * tau;

                        v[(row, k + 1)] = v[(row, k + 1)] - dot;
                        for j in (k + 2)..n {
                            let vj = a[(k, j)];
                            v[(row, j)] = v[(row, j)] - dot * vj;
                        }
                    }
                }

                off_diag[k] = -sigma;
            } else {
                off_diag[k] = a[(k, k + 1)];
            }
        } else if k + 1 < n {
            off_diag[k] = a[(k, k + 1)];
        }
    }
}

/// Golub-Kahan implicit-shift QR iteration on a bidiagonal matrix.
///
/// On entry `diag`/`off_diag` hold the bidiagonal form; on return `diag`
/// contains the non-negative singular values sorted descending and
/// `off_diag` is zeroed. Rotations are accumulated into `u` and `v` when
/// requested.
pub(crate) fn bidiagonal_qr<T: FloatScalar>(
    diag: &mut [T],
    off_diag: &mut [T],
    u: &mut Matrix<T>,
    v: &mut Matrix<T>,
    compute_u: bool,
    compute_v: bool,
    max_iter: usize,
) -> Result<(), LinalgError> {
    let n = diag.len();
    if n <= 1 {
        if n == 1 && diag[0] < T::zero() {
            diag[0] = -diag[0];
            if compute_u {
                for i in 0..u.nrows() {
                    u[(i, 0)] = -u[(i, 0)];
                }
            }
        }
        return Ok(());
    }

    let eps = T::eps();
    let mut iter = 0usize;
    let mut hi = n - 1;

    while hi > 0 {
        // Deflation: negligible trailing off-diagonal entries split off a
        // converged singular value.
        {
            let threshold = eps * (diag[hi - 1].abs() + diag[hi].abs());
            if off_diag[hi - 1].abs() <= threshold {
                off_diag[hi - 1] = T::zero();
                hi -= 1;
                continue;
            }
        }

        // Find lo: start of the unreduced block.
        let mut lo = hi - 1;
        while lo > 0 {
            let threshold = eps * (diag[lo - 1].abs() + diag[lo].abs());
            if off_diag[lo - 1].abs() <= threshold {
                off_diag[lo - 1] = T::zero();
                break;
            }
            lo -= 1;
        }

        iter += 1;
        if iter > max_iter {
            return Err(LinalgError::ConvergenceFailure);
        }

        // A zero diagonal entry breaks the Wilkinson shift; chase the
        // corresponding off-diagonal entry off the bottom with left
        // Givens rotations, which decouples the problem.
        {
            let mut found_zero = false;
            for idx in lo..hi {
                if diag[idx].abs() <= eps {
                    diag[idx] = T::zero();
                    let mut z = off_diag[idx];
                    off_diag[idx] = T::zero();
                    for j in (idx + 1)..=hi {
                        let (c, s) = givens(diag[j], z);
                        diag[j] = c * diag[j] + s * z;
                        if j < hi {
                            z = -s * off_diag[j];
                            off_diag[j] = c * off_diag[j];
                        }
                        if compute_u {
                            for row in 0..u.nrows() {
                                let uj = u[(row, j)];
                                let ui = u[(row, idx)];
                                u[(row, j)] = c * uj + s * ui;
                                u[(row, idx)] = c * ui - s * uj;
                            }
                        }
                    }
                    found_zero = true;
                    break;
                }
            }
            if found_zero {
                continue;
            }
        }

        // Wilkinson shift from the trailing 2×2 of BᵀB.
        let d_hi = diag[hi];
        let d_hi1 = diag[hi - 1];
        let e_hi1 = off_diag[hi - 1];
        let e_hi2 = if hi >= 2 && hi - 2 >= lo {
            off_diag[hi - 2]
        } else {
            T::zero()
        };

        let t11 = d_hi1 * d_hi1 + e_hi2 * e_hi2;
        let t12 = d_hi1 * e_hi1;
        let t22 = d_hi * d_hi + e_hi1 * e_hi1;

        let two = T::from_f64(2.0);
        let d = (t11 - t22) / two;
        let sign_d = if d >= T::zero() { T::one() } else { -T::one() };
        let mu = t22 - t12 * t12 / (d + sign_d * (d * d + t12 * t12).sqrt());

        // Implicit QR chase.
        let mut x = diag[lo] * diag[lo] - mu;
        let mut z = diag[lo] * off_diag[lo];

        for k in lo..hi {
            // Right Givens rotation: zero z.
            let (c, s) = givens(x, z);

            if k > lo {
                off_diag[k - 1] = c * x + s * z;
            }

            let dk = diag[k];
            let ek = off_diag[k];
            let dk1 = diag[k + 1];

            diag[k] = c * dk + s * ek;
            off_diag[k] = c * ek - s * dk;
            let bulge = s * dk1;
            diag[k + 1] = c * dk1;

            if compute_v {
                for row in 0..v.nrows() {
                    let vk = v[(row, k)];
                    let vk1 = v[(row, k + 1)];
                    v[(row, k)] = c * vk + s * vk1;
                    v[(row, k + 1)] = c * vk1 - s * vk;
                }
            }

            // Left Givens rotation: zero the bulge at B[k+1, k].
            let (c2, s2) = givens(diag[k], bulge);

            diag[k] = c2 * diag[k] + s2 * bulge;
            let old_ek = off_diag[k];
            let old_dk1 = diag[k + 1];
            off_diag[k] = c2 * old_ek + s2 * old_dk1;
            diag[k + 1] = c2 * old_dk1 - s2 * old_ek;

            if k + 1 < hi {
                let old_ek1 = off_diag[k + 1];
                // Fill-in at B[k, k+2] drives the next right rotation.
                x = off_diag[k];
                z = s2 * old_ek1;
                off_diag[k + 1] = c2 * old_ek1;
            }

            if compute_u {
                for row in 0..u.nrows() {
                    let uk = u[(row, k)];
                    let uk1 = u[(row, k + 1)];
                    u[(row, k)] = c2 * uk + s2 * uk1;
                    u[(row, k + 1)] = c2 * uk1 - s2 * uk;
                }
            }
        }
    }

    // Make all singular values non-negative.
    for i in 0..n {
        if diag[i] < T::zero() {
            diag[i] = -diag[i];
            if compute_u {
                for row in 0..u.nrows() {
                    u[(row, i)] = -u[(row, i)];
                }
            }
        }
    }

    // Sort singular values descending, permuting U and V columns along.
    for i in 0..n {
        let mut max_idx = i;
        for j in (i + 1)..n {
            if diag[j] > diag[max_idx] {
                max_idx = j;
            }
        }
        if max_idx != i {
            diag.swap(i, max_idx);
            if compute_u {
                for row in 0..u.nrows() {
                    let tmp = u[(row, i)];
                    u[(row, i)] = u[(row, max_idx)];
                    u[(row, max_idx)] = tmp;
                }
            }
            if compute_v {
                for row in 0..v.nrows() {
                    let tmp = v[(row, i)];
                    v[(row, i)] = v[(row, max_idx)];
                    v[(row, max_idx)] = tmp;
                }
            }
        }
    }

    Ok(())
}

/// Singular value decomposition `A = U · diag(σ) · Vᵀ`.
///
/// `u` is M×M orthogonal, `s` a min(M,N)×1 column of singular values
/// sorted descending, and `v` N×N orthogonal (the right singular vectors
/// as columns, not transposed).
///
/// # Example
///
/// ```
/// use mathkit::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[3.0, 2.0, 2.0, 3.0]);
/// let svd = a.svd().unwrap();
/// assert!((svd.s[(0, 0)] - 5.0).abs() < 1e-10);
/// assert!((svd.s[(1, 0)] - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Svd<T> {
    /// Left singular vectors (M×M).
    pub u: Matrix<T>,
    /// Singular values as a min(M,N)×1 column, descending.
    pub s: Matrix<T>,
    /// Right singular vectors (N×N).
    pub v: Matrix<T>,
}

impl<T: FloatScalar> Svd<T> {
    /// Compute the full SVD of a matrix of any shape.
    ///
    /// Returns [`LinalgError::ConvergenceFailure`] if the iterative
    /// bidiagonal QR does not converge within its iteration budget.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinalgError> {
        let m = a.nrows();
        let n = a.ncols();

        // Wide matrices: decompose the transpose and swap U and V.
        if m < n {
            let t = Svd::new(&a.transpose())?;
            return Ok(Svd {
                u: t.v,
                s: t.s,
                v: t.u,
            });
        }

        if n == 0 {
            return Ok(Svd {
                u: Matrix::eye(m, m),
                s: Matrix::zeros(0, 1),
                v: Matrix::empty(),
            });
        }

        let mut work = a.clone();
        let mut u = Matrix::zeros(m, m);
        let mut v = Matrix::zeros(n, n);
        let mut diag = vec![T::zero(); n];
        let mut off_diag = vec![T::zero(); n];

        bidiagonalize(&mut work, &mut diag, &mut off_diag, &mut u, &mut v, true, true);
        bidiagonal_qr(
            &mut diag,
            &mut off_diag[..n - 1],
            &mut u,
            &mut v,
            true,
            true,
            30 * m.max(n),
        )?;

        Ok(Svd {
            u,
            s: Matrix::from_vec(n, 1, diag),
            v,
        })
    }

    /// Numerical rank: number of singular values above `tol`.
    pub fn rank(&self, tol: T) -> usize {
        self.s.as_slice().iter().filter(|&&s| s > tol).count()
    }

    /// Condition number σ_max / σ_min; infinity when σ_min is zero.
    pub fn condition_number(&self) -> T {
        let s = self.s.as_slice();
        if s.is_empty() {
            return T::one();
        }
        let s_min = s[s.len() - 1];
        if s_min == T::zero() {
            T::infinity()
        } else {
            s[0] / s_min
        }
    }
}
