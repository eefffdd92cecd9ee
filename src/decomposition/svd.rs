use super::factors::Factors;
use crate::error::{Result, SvdError};
use crate::input;
use crate::{Matrix, Vector};
use ndarray::ArrayD;
use std::num::NonZeroUsize;
use tracing::{debug, trace, warn};

#[derive(Clone, Debug, PartialEq)]
enum State {
    Unfitted,
    Fitted(Factors),
}

/// Low-rank approximation through the singular value decomposition.
///
/// `fit` stores the full economy-size decomposition; `transform` rebuilds the
/// fitted matrix from the leading `n_components` singular triplets, or from
/// all of them when no rank is configured.
#[derive(Clone, Debug, PartialEq)]
pub struct SVD {
    n_components: Option<NonZeroUsize>,
    state: State,
}

impl Default for SVD {
    fn default() -> Self {
        Self::new()
    }
}

impl SVD {
    /// A decomposer that keeps every component.
    pub fn new() -> Self {
        Self {
            n_components: None,
            state: State::Unfitted,
        }
    }

    /// `None` keeps every component. `Some(0)` is rejected: zero is never
    /// read as "all components".
    pub fn with_n_components(n_components: Option<usize>) -> Result<Self> {
        Ok(Self {
            n_components: n_components.map(validate_rank).transpose()?,
            state: State::Unfitted,
        })
    }

    pub fn n_components(mut self, n_components: usize) -> Result<Self> {
        self.set_n_components(Some(n_components))?;
        Ok(self)
    }

    /// Changes the target rank without refitting.
    ///
    /// Once fitted, the rank may not exceed the number of singular values.
    /// On error the previous rank is kept.
    pub fn set_n_components(&mut self, n_components: Option<usize>) -> Result<()> {
        let rank = n_components.map(validate_rank).transpose()?;
        if let (Some(k), State::Fitted(factors)) = (rank, &self.state) {
            check_rank_fits(k, factors.len())?;
        }
        self.n_components = rank;
        Ok(())
    }

    pub fn get_n_components(&self) -> Option<usize> {
        self.n_components.map(NonZeroUsize::get)
    }

    pub fn is_fitted(&self) -> bool {
        matches!(self.state, State::Fitted(_))
    }

    pub fn factors(&self) -> Option<&Factors> {
        match &self.state {
            State::Fitted(factors) => Some(factors),
            State::Unfitted => None,
        }
    }

    pub fn left_factors(&self) -> Option<&Matrix> {
        self.factors().map(Factors::left)
    }

    pub fn singular_values(&self) -> Option<&Vector> {
        self.factors().map(Factors::singular_values)
    }

    pub fn right_factors(&self) -> Option<&Matrix> {
        self.factors().map(Factors::right)
    }

    pub fn n_singular_values(&self) -> Option<usize> {
        self.factors().map(Factors::len)
    }

    pub fn explained_variance_ratio(&self) -> Option<Vector> {
        self.factors().map(Factors::explained_variance_ratio)
    }

    /// Computes and stores the economy-size SVD of `x`, replacing any
    /// previous fit. A failed fit leaves the decomposer unchanged.
    pub fn fit(&mut self, x: &Matrix) -> Result<()> {
        let factors = Factors::from_matrix(x).inspect_err(|e| {
            warn!(shape = ?x.shape(), error = %e, "decomposition failed");
        })?;

        if let Some(k) = self.n_components {
            check_rank_fits(k, factors.len())?;
        }

        debug!(
            rows = x.nrows(),
            cols = x.ncols(),
            singular_values = factors.len(),
            "fitted SVD"
        );

        self.state = State::Fitted(factors);
        Ok(())
    }

    /// Fits an n-dimensional array, which must be 2-D.
    pub fn fit_dyn(&mut self, x: ArrayD<f64>) -> Result<()> {
        let x = input::matrix_from_dyn(x)?;
        self.fit(&x)
    }

    /// Reconstructs the fitted matrix from the configured number of
    /// components. The result has the fitted input's shape.
    pub fn transform(&self) -> Result<Matrix> {
        let factors = self.factors().ok_or(SvdError::NotFitted)?;

        let reconstructed = match self.n_components {
            Some(k) => factors.reconstruct(k.get()),
            None => factors.reconstruct_all(),
        };

        trace!(
            n_components = ?self.get_n_components(),
            available = factors.len(),
            "reconstructed matrix"
        );

        Ok(reconstructed)
    }

    /// Reconstructs with an explicit rank, leaving the configured one alone.
    pub fn transform_with_rank(&self, n_components: usize) -> Result<Matrix> {
        let factors = self.factors().ok_or(SvdError::NotFitted)?;
        let k = validate_rank(n_components)?;
        check_rank_fits(k, factors.len())?;

        Ok(factors.reconstruct(k.get()))
    }

    pub fn fit_transform(&mut self, x: &Matrix) -> Result<Matrix> {
        self.fit(x)?;
        self.transform()
    }
}

fn validate_rank(n_components: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(n_components).ok_or_else(|| {
        SvdError::InvalidConfiguration(
            "n_components must be positive; use None to keep every component".to_string(),
        )
    })
}

fn check_rank_fits(n_components: NonZeroUsize, available: usize) -> Result<()> {
    if n_components.get() > available {
        return Err(SvdError::InvalidConfiguration(format!(
            "n_components={} cannot be larger than min(n_rows, n_cols)={}",
            n_components, available
        )));
    }
    Ok(())
}
