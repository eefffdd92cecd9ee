use crate::error::Result;
use crate::linalg;
use crate::{Matrix, Vector};
use ndarray::s;

/// Economy-size SVD of one fitted matrix: `x = u * diag(sigma) * vt`.
#[derive(Clone, Debug, PartialEq)]
pub struct Factors {
    u: Matrix,
    sigma: Vector,
    vt: Matrix,
}

impl Factors {
    pub fn from_matrix(x: &Matrix) -> Result<Self> {
        let (u, sigma, vt) = linalg::reduced_svd(x)?;
        Ok(Self { u, sigma, vt })
    }

    /// Left singular vectors, one per column.
    pub fn left(&self) -> &Matrix {
        &self.u
    }

    /// Non-negative, in non-increasing order.
    pub fn singular_values(&self) -> &Vector {
        &self.sigma
    }

    /// Right singular vectors, one per row (`V^T`).
    pub fn right(&self) -> &Matrix {
        &self.vt
    }

    pub fn len(&self) -> usize {
        self.sigma.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sigma.is_empty()
    }

    /// Shape of the matrix these factors were computed from.
    pub fn shape(&self) -> (usize, usize) {
        (self.u.nrows(), self.vt.ncols())
    }

    /// Rebuilds the matrix from the leading `n_components` singular triplets.
    ///
    /// Callers validate the rank; it is clamped to `len()` here so the slices
    /// stay in bounds.
    pub fn reconstruct(&self, n_components: usize) -> Matrix {
        let k = n_components.min(self.len());
        let u = self.u.slice(s![.., ..k]);
        let sigma = self.sigma.slice(s![..k]);
        let vt = self.vt.slice(s![..k, ..]);

        (&u * &sigma).dot(&vt)
    }

    pub fn reconstruct_all(&self) -> Matrix {
        self.reconstruct(self.len())
    }

    /// Share of the total squared singular value mass held by each component.
    pub fn explained_variance_ratio(&self) -> Vector {
        let energy = self.sigma.mapv(|s| s * s);
        let total = energy.sum();

        if total > 0.0 {
            energy / total
        } else {
            Vector::zeros(self.len())
        }
    }
}
