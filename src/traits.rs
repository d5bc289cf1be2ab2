//! Core traits for fitted transformers.

use crate::error::Result;
use crate::primitives::Matrix;

/// Trait for fitted data transformers (scalers).
///
/// Fitting happens at construction time, so a `Transformer` value is always
/// ready to use and never mutates afterwards.
///
/// # Examples
///
/// ```
/// use sonance::prelude::*;
///
/// let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
/// let scaler = StandardScaler::fit(&x).unwrap();
/// let z = scaler.transform(&x).unwrap();
/// let back = scaler.inverse_transform(&z).unwrap();
/// assert!((back.get(2, 0) - 3.0).abs() < 1e-5);
/// ```
pub trait Transformer {
    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the column count differs from the fitted one.
    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>>;

    /// Maps transformed data back to the original scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the column count differs from the fitted one.
    fn inverse_transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>>;
}
