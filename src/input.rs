//! Conversion of caller data into the 2-D [`Matrix`] the decomposer works on.

use crate::error::{Result, SvdError};
use crate::Matrix;
use ndarray::{ArrayD, Ix2};

/// Builds a matrix from row slices, rejecting empty and ragged input.
pub fn matrix_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Matrix> {
    let n_rows = rows.len();
    let n_cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

    if n_rows == 0 || n_cols == 0 {
        return Err(SvdError::InvalidInput(
            "Input matrix must have at least one row and one column".to_string(),
        ));
    }

    let mut data = Vec::with_capacity(n_rows * n_cols);
    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != n_cols {
            return Err(SvdError::InvalidInput(format!(
                "Row {} has {} columns, expected {}",
                i,
                row.len(),
                n_cols
            )));
        }
        data.extend_from_slice(row);
    }

    Matrix::from_shape_vec((n_rows, n_cols), data)
        .map_err(|e| SvdError::InvalidInput(e.to_string()))
}

/// Narrows a dynamic-dimensional array to a matrix.
pub fn matrix_from_dyn(x: ArrayD<f64>) -> Result<Matrix> {
    let ndim = x.ndim();
    x.into_dimensionality::<Ix2>().map_err(|_| {
        SvdError::InvalidInput(format!("Expected a 2-D array, got {} dimension(s)", ndim))
    })
}
