//! Bridge between ndarray matrices and faer's SVD routine.
//!
//! The crate never implements the decomposition itself; [`reduced_svd`] hands
//! the matrix to `faer`'s thin SVD and returns the economy-size factors as
//! ndarray values with singular values ordered from largest to smallest.
//! The factors are checked against the input before they are returned.

use crate::error::{Result, SvdError};
use crate::metrics::frobenius_norm;
use crate::{Matrix, Vector};
use faer::linalg::solvers::Svd;
use faer::Mat;
use std::cmp::Ordering;

/// Relative bound on `||u * diag(s) * vt - x||_F` accepted from the routine.
const RESIDUAL_TOLERANCE: f64 = 1e-8;

fn to_faer(x: &Matrix) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols(), |i, j| x[[i, j]])
}

/// Computes the reduced SVD `x = u * diag(s) * vt`.
///
/// For an `m x n` input with `k = min(m, n)`, `u` is `m x k`, `s` has length
/// `k` and `vt` is `k x n`. Empty input is [`SvdError::InvalidInput`];
/// non-finite entries, non-convergence and factors that do not reproduce `x`
/// are [`SvdError::Numerical`].
pub fn reduced_svd(x: &Matrix) -> Result<(Matrix, Vector, Matrix)> {
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(SvdError::InvalidInput(
            "Input matrix must have at least one row and one column".to_string(),
        ));
    }

    if let Some(((i, j), value)) = x.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(SvdError::Numerical(format!(
            "Input matrix contains a non-finite value {} at ({}, {})",
            value, i, j
        )));
    }

    let mat = to_faer(x);
    let svd = Svd::new_thin(mat.as_ref())
        .map_err(|e| SvdError::Numerical(format!("SVD failed: {:?}", e)))?;

    let u = svd.U();
    let s = svd.S();
    // faer returns V, not V^T.
    let v = svd.V();
    let k = x.nrows().min(x.ncols());

    // A negative value moves its sign onto the matching right vector.
    let sign = |c: usize| if s[c] < 0.0 { -1.0 } else { 1.0 };

    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&a, &b| s[b].abs().partial_cmp(&s[a].abs()).unwrap_or(Ordering::Equal));

    let sigma = Vector::from_shape_fn(k, |c| s[order[c]].abs());
    let left = Matrix::from_shape_fn((x.nrows(), k), |(i, c)| u[(i, order[c])]);
    let right = Matrix::from_shape_fn((k, x.ncols()), |(r, j)| sign(order[r]) * v[(j, order[r])]);

    check_factors(x, &left, &sigma, &right)?;

    Ok((left, sigma, right))
}

/// Rejects factors that are non-finite, carry negative singular values, or
/// do not rebuild `x` within [`RESIDUAL_TOLERANCE`].
fn check_factors(x: &Matrix, u: &Matrix, s: &Vector, vt: &Matrix) -> Result<()> {
    let finite = u.iter().chain(s.iter()).chain(vt.iter()).all(|v| v.is_finite());
    if !finite {
        return Err(SvdError::Numerical(
            "SVD returned non-finite factors".to_string(),
        ));
    }

    if s.iter().any(|&v| v < 0.0) {
        return Err(SvdError::Numerical(
            "SVD returned a negative singular value".to_string(),
        ));
    }

    let residual = frobenius_norm(&((u * s).dot(vt) - x));
    let bound = RESIDUAL_TOLERANCE * (1.0 + frobenius_norm(x));
    if residual > bound {
        return Err(SvdError::Numerical(format!(
            "SVD factors do not reproduce the input: residual {:e} exceeds {:e}",
            residual, bound
        )));
    }

    Ok(())
}
