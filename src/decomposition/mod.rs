//! Dimensionality reduction through the singular value decomposition.
//!
//! This module provides:
//! - `SVD`: fits the economy-size decomposition of a matrix and rebuilds a
//!   low-rank approximation from its leading singular triplets
//! - `Factors`: the fitted left singular vectors, singular values and right
//!   singular vectors
//!
//! # Examples
//!
//! ## Low-rank approximation
//! ```rust
//! use unsupervised::{SVD, Matrix};
//! use ndarray::array;
//!
//! let x: Matrix = array![
//!     [1.0, 2.0, 3.0, 4.0],
//!     [5.0, 6.0, 7.0, 8.0],
//!     [9.0, 10.0, 11.0, 12.0]
//! ];
//!
//! let mut svd = SVD::new().n_components(2).unwrap();
//! let approx = svd.fit_transform(&x).unwrap();
//! assert_eq!(approx.shape(), x.shape());
//!
//! // Singular values are kept in full, largest first
//! let sigma = svd.singular_values().unwrap();
//! println!("Singular values: {:?}", sigma);
//! ```
//!
//! ## Comparing ranks without refitting
//! ```rust
//! use unsupervised::{SVD, Matrix};
//! use unsupervised::metrics::reconstruction_error;
//! use ndarray::array;
//!
//! let x: Matrix = array![[4.0, 0.0], [3.0, -5.0]];
//!
//! let mut svd = SVD::new();
//! svd.fit(&x).unwrap();
//!
//! let rank_one = svd.transform_with_rank(1).unwrap();
//! let error = reconstruction_error(&x, &rank_one).unwrap();
//! assert!((error - 10.0_f64.sqrt()).abs() < 1e-10);
//! ```

mod factors;
mod svd;

pub use factors::Factors;
pub use svd::SVD;
