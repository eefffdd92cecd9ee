use crate::error::{Result, SvdError};
use crate::Matrix;

pub fn frobenius_norm(x: &Matrix) -> f64 {
    x.mapv(|v| v * v).sum().sqrt()
}

pub fn reconstruction_error(original: &Matrix, reconstructed: &Matrix) -> Result<f64> {
    if original.shape() != reconstructed.shape() {
        return Err(SvdError::InvalidInput(format!(
            "Shapes differ: {:?} vs {:?}",
            original.shape(),
            reconstructed.shape()
        )));
    }

    Ok(frobenius_norm(&(original - reconstructed)))
}

pub fn reconstruction_mse(original: &Matrix, reconstructed: &Matrix) -> Result<f64> {
    if original.shape() != reconstructed.shape() {
        return Err(SvdError::InvalidInput(format!(
            "Shapes differ: {:?} vs {:?}",
            original.shape(),
            reconstructed.shape()
        )));
    }

    let diff = original - reconstructed;
    diff.mapv(|v| v * v)
        .mean()
        .ok_or_else(|| SvdError::InvalidInput("Cannot compute MSE of an empty matrix".to_string()))
}
