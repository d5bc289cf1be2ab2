//! Preprocessing transformers for feature standardization.
//!
//! # Example
//!
//! ```
//! use sonance::prelude::*;
//!
//! // Features on very different scales
//! let data = Matrix::from_vec(4, 2, vec![
//!     0.5, 90.0,
//!     0.6, 120.0,
//!     0.7, 150.0,
//!     0.8, 180.0,
//! ]).expect("valid matrix dimensions");
//!
//! let scaler = StandardScaler::fit(&data).expect("no constant columns");
//! let scaled = scaler.transform(&data).expect("same column count");
//!
//! // Each column now has mean ≈ 0 and std ≈ 1
//! assert!(scaled.get(0, 1) < 0.0);
//! ```

use crate::error::{Result, SonanceError};
use crate::primitives::Matrix;
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Current version of the persisted scaler artifact.
pub const SCALER_ARTIFACT_VERSION: u32 = 1;

/// Standardizes features by removing the mean and scaling to unit variance.
///
/// The standard score of a sample x is: z = (x - mean) / std, with the
/// population standard deviation (divide by n).
///
/// A scaler is constructed already fitted and never changes afterwards, so a
/// single instance can be shared by every query against a catalog.
///
/// # Example
///
/// ```
/// use sonance::prelude::*;
///
/// let data = Matrix::from_vec(3, 2, vec![
///     0.0, 0.0,
///     1.0, 10.0,
///     2.0, 20.0,
/// ]).expect("valid matrix dimensions");
///
/// let scaler = StandardScaler::fit(&data).expect("fit should succeed");
/// let scaled = scaler.transform(&data).expect("transform should succeed");
///
/// let (n_rows, n_cols) = scaled.shape();
/// for j in 0..n_cols {
///     let mean: f32 = (0..n_rows).map(|i| scaled.get(i, j)).sum::<f32>() / n_rows as f32;
///     assert!(mean.abs() < 1e-5, "Mean should be ~0");
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    feature_names: Vec<String>,
    mean: Vec<f32>,
    std: Vec<f32>,
}

/// On-disk form of a fitted scaler. Only the fitted parameters are stored.
#[derive(Debug, Serialize, Deserialize)]
struct ScalerArtifact {
    version: u32,
    features: Vec<String>,
    mean: Vec<f32>,
    std: Vec<f32>,
}

impl StandardScaler {
    /// Fits a scaler, naming the columns `x0`, `x1`, ...
    ///
    /// # Errors
    ///
    /// Returns [`SonanceError::EmptyCatalog`] for a matrix with no rows and
    /// [`SonanceError::DegenerateFeature`] if any column is constant.
    pub fn fit(x: &Matrix<f32>) -> Result<Self> {
        let names: Vec<String> = (0..x.n_cols()).map(|j| format!("x{j}")).collect();
        Self::fit_with_names(x, &names)
    }

    /// Fits a scaler with explicit feature names (used in error messages and
    /// the persisted artifact).
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix has no rows, the name count differs
    /// from the column count, or any column is constant.
    pub fn fit_with_names<S: AsRef<str>>(x: &Matrix<f32>, feature_names: &[S]) -> Result<Self> {
        let (n_samples, n_features) = x.shape();

        if n_samples == 0 {
            return Err(SonanceError::EmptyCatalog);
        }
        if feature_names.len() != n_features {
            return Err(SonanceError::dimension_mismatch(
                "feature_names",
                n_features,
                feature_names.len(),
            ));
        }

        let mut mean = Vec::with_capacity(n_features);
        let mut std = Vec::with_capacity(n_features);

        for (j, name) in feature_names.iter().enumerate() {
            let column = x.column(j);
            let values = column.as_slice();

            let sum: f64 = values.iter().map(|&v| f64::from(v)).sum();
            let mean_j = sum / n_samples as f64;

            let sum_sq: f64 = values
                .iter()
                .map(|&v| {
                    let diff = f64::from(v) - mean_j;
                    diff * diff
                })
                .sum();
            // Population std (divide by n, not n-1)
            let std_j = (sum_sq / n_samples as f64).sqrt() as f32;

            // A constant column can leave a rounding residue in std, so
            // constancy is checked on the raw values as well.
            let constant = values.iter().all(|&v| v == values[0]);
            if constant || !is_valid_std(std_j) {
                return Err(SonanceError::DegenerateFeature {
                    feature: name.as_ref().to_string(),
                    index: j,
                });
            }

            mean.push(mean_j as f32);
            std.push(std_j);
        }

        Ok(Self {
            feature_names: feature_names
                .iter()
                .map(|n| n.as_ref().to_string())
                .collect(),
            mean,
            std,
        })
    }

    /// Builds a scaler from already-known parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the three slices differ in length, any mean is
    /// non-finite, or any std is not a finite positive number.
    pub fn from_parts(feature_names: Vec<String>, mean: Vec<f32>, std: Vec<f32>) -> Result<Self> {
        if mean.len() != feature_names.len() {
            return Err(SonanceError::dimension_mismatch(
                "mean",
                feature_names.len(),
                mean.len(),
            ));
        }
        if std.len() != feature_names.len() {
            return Err(SonanceError::dimension_mismatch(
                "std",
                feature_names.len(),
                std.len(),
            ));
        }
        for (index, ((name, &m), &s)) in feature_names.iter().zip(&mean).zip(&std).enumerate() {
            if !m.is_finite() || !is_valid_std(s) {
                return Err(SonanceError::DegenerateFeature {
                    feature: name.clone(),
                    index,
                });
            }
        }
        Ok(Self {
            feature_names,
            mean,
            std,
        })
    }

    /// A pass-through scaler (mean 0, std 1) over the given features.
    #[must_use]
    pub fn identity<S: AsRef<str>>(feature_names: &[S]) -> Self {
        let n = feature_names.len();
        Self {
            feature_names: feature_names
                .iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            mean: vec![0.0; n],
            std: vec![1.0; n],
        }
    }

    /// Returns the mean of each feature.
    #[must_use]
    pub fn mean(&self) -> &[f32] {
        &self.mean
    }

    /// Returns the standard deviation of each feature.
    #[must_use]
    pub fn std(&self) -> &[f32] {
        &self.std
    }

    /// Returns the feature names, in column order.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of features the scaler was fitted on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Saves the fitted parameters as a versioned JSON artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let artifact = ScalerArtifact {
            version: SCALER_ARTIFACT_VERSION,
            features: self.feature_names.clone(),
            mean: self.mean.clone(),
            std: self.std.clone(),
        };
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &artifact)?;
        writer.flush()?;
        Ok(())
    }

    /// Loads a scaler previously written by [`StandardScaler::save_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, the version is
    /// newer than [`SCALER_ARTIFACT_VERSION`], or the parameters are invalid.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let artifact: ScalerArtifact = serde_json::from_reader(reader)?;

        if artifact.version == 0 || artifact.version > SCALER_ARTIFACT_VERSION {
            return Err(SonanceError::UnsupportedVersion {
                found: artifact.version,
                supported: SCALER_ARTIFACT_VERSION,
            });
        }

        Self::from_parts(artifact.features, artifact.mean, artifact.std)
    }

    fn check_width(&self, x: &Matrix<f32>) -> Result<()> {
        if x.n_cols() != self.n_features() {
            return Err(SonanceError::dimension_mismatch(
                "features",
                self.n_features(),
                x.n_cols(),
            ));
        }
        Ok(())
    }
}

fn is_valid_std(s: f32) -> bool {
    s.is_finite() && s > 0.0
}

impl Transformer for StandardScaler {
    /// Standardizes the data using fitted mean and std.
    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        self.check_width(x)?;

        let (n_samples, n_features) = x.shape();
        let mut result = Vec::with_capacity(n_samples * n_features);

        for row in x.rows_iter() {
            for (j, &val) in row.iter().enumerate() {
                result.push((val - self.mean[j]) / self.std[j]);
            }
        }

        Matrix::from_vec(n_samples, n_features, result)
    }

    fn inverse_transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        self.check_width(x)?;

        let (n_samples, n_features) = x.shape();
        let mut result = Vec::with_capacity(n_samples * n_features);

        for row in x.rows_iter() {
            for (j, &val) in row.iter().enumerate() {
                result.push(val * self.std[j] + self.mean[j]);
            }
        }

        Matrix::from_vec(n_samples, n_features, result)
    }
}
