//! Error types for sonance operations.
//!
//! Every variant carries enough structured detail (offending identifiers,
//! offending feature name) for a front end to produce a precise message.

use thiserror::Error;

/// Main error type for sonance operations.
///
/// # Examples
///
/// ```
/// use sonance::error::SonanceError;
///
/// let err = SonanceError::UnknownItem {
///     ids: vec!["missing-track".to_string()],
/// };
/// assert!(err.to_string().contains("missing-track"));
/// ```
#[derive(Debug, Error)]
pub enum SonanceError {
    /// A feature column has zero (or non-finite) variance, so it cannot be
    /// standardized.
    #[error("Degenerate feature '{feature}' (column {index}): standard deviation must be > 0")]
    DegenerateFeature {
        /// Feature name
        feature: String,
        /// Column position
        index: usize,
    },

    /// One or more seed identifiers are not in the catalog.
    #[error("Unknown item(s): {}", .ids.join(", "))]
    UnknownItem {
        /// Identifiers that could not be resolved, in first-seen order
        ids: Vec<String>,
    },

    /// Invalid argument value provided by the caller.
    #[error("Invalid argument: {param} = {value}, expected {constraint}")]
    InvalidArgument {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// The catalog holds no items.
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// The taste vector has zero norm, so cosine similarity is undefined.
    #[error("Taste vector has zero norm; cosine similarity is undefined")]
    ZeroVector,

    /// Matrix/vector dimensions don't match for the operation.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// The same identifier appears twice in a catalog.
    #[error("Duplicate item identifier: {id}")]
    DuplicateItem {
        /// Repeated identifier
        id: String,
    },

    /// A feature value is NaN or infinite.
    #[error("Non-finite value {value} for feature '{feature}' of item '{id}'")]
    NonFiniteFeature {
        /// Item identifier
        id: String,
        /// Feature name
        feature: String,
        /// Offending value
        value: f32,
    },

    /// A required input column is absent.
    #[error("Missing column '{column}' (available: {})", .available.join(", "))]
    MissingColumn {
        /// Required column name
        column: String,
        /// Columns that were present
        available: Vec<String>,
    },

    /// CSV reader error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Unsupported artifact version.
    #[error("Unsupported format version: found {found}, max supported {supported}")]
    UnsupportedVersion {
        /// Version found
        found: u32,
        /// Maximum supported version
        supported: u32,
    },
}

impl From<serde_json::Error> for SonanceError {
    fn from(err: serde_json::Error) -> Self {
        SonanceError::Serialization(err.to_string())
    }
}

impl SonanceError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(param: &str, value: impl ToString, constraint: &str) -> Self {
        Self::InvalidArgument {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SonanceError>;
