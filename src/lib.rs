pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod decomposition;
pub mod error;
pub mod input;
pub mod linalg;
pub mod metrics;

pub use decomposition::SVD;
pub use error::{Result, SvdError};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
