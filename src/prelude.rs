//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sonance::prelude::*;
//! ```

pub use crate::catalog::{Catalog, FeatureStats, Item, FEATURE_COLUMNS};
pub use crate::data::{CsvCatalogLoader, LoadReport, LoaderConfig, MissingPolicy};
pub use crate::error::{Result, SonanceError};
pub use crate::preprocessing::StandardScaler;
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::{Recommendation, Recommender, SharedRecommender};
pub use crate::search::{FuzzyIndex, SearchConfig, SearchMatch, TextResolver};
pub use crate::traits::Transformer;
