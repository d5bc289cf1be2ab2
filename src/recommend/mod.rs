//! Recommendation engine.
//!
//! Content-based, item-to-item similarity: seed items are averaged into a
//! taste vector in standardized feature space and every catalog item is
//! ranked by cosine similarity to it.
//!
//! # Quick Start
//!
//! ```
//! use sonance::prelude::*;
//!
//! let catalog = Catalog::with_default_features(vec![
//!     Item::new("a", vec![0.8, 0.9, 128.0, 0.7, 0.05, -4.0]),
//!     Item::new("b", vec![0.7, 0.8, 122.0, 0.6, 0.10, -5.0]),
//!     Item::new("c", vec![0.3, 0.2, 70.0, 0.2, 0.90, -14.0]),
//! ]).expect("valid catalog");
//!
//! let recommender = Recommender::fit(catalog).expect("no constant features");
//! let recs = recommender.recommend(&["a"], 10).expect("known seed");
//!
//! // The seed never comes back, and "b" is the closer match
//! assert_eq!(recs.len(), 2);
//! assert_eq!(recs[0].id, "b");
//! ```

pub mod content_based;
pub mod shared;
pub mod similarity;

pub use content_based::{Recommendation, Recommender};
pub use shared::SharedRecommender;
pub use similarity::{cosine_similarities, cosine_similarity, ZERO_NORM_TOLERANCE};
