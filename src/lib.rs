//! Sonance: content-based item similarity over standardized audio features.
//!
//! Given a catalog of items described by numeric features (danceability,
//! energy, tempo, ...) and a few seed items a user likes, sonance ranks the
//! rest of the catalog by how closely each item matches the seeds' average
//! profile. Features are z-score standardized first so that tempo in BPM and
//! loudness in dB weigh the same as the unit-interval features.
//!
//! # Quick Start
//!
//! ```
//! use sonance::prelude::*;
//!
//! let catalog = Catalog::with_default_features(vec![
//!     Item::new("t1", vec![0.80, 0.90, 128.0, 0.70, 0.05, -4.0]).with_title("Upbeat"),
//!     Item::new("t2", vec![0.75, 0.85, 124.0, 0.65, 0.10, -5.0]).with_title("Also Upbeat"),
//!     Item::new("t3", vec![0.30, 0.20, 70.0, 0.20, 0.90, -14.0]).with_title("Ballad"),
//!     Item::new("t4", vec![0.35, 0.25, 76.0, 0.25, 0.85, -12.0]).with_title("Slow One"),
//! ]).unwrap();
//!
//! let recommender = Recommender::fit(catalog).unwrap();
//! let recs = recommender.recommend(&["t1"], 2).unwrap();
//!
//! assert_eq!(recs[0].id, "t2");
//! assert!(recs.iter().all(|r| r.id != "t1"));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`catalog`]: Items, feature columns and identifier lookup
//! - [`data`]: CSV catalog loading with missing-value policies
//! - [`preprocessing`]: Z-score standardization and the scaler artifact
//! - [`recommend`]: Taste vectors, cosine ranking and hot-swappable engines
//! - [`search`]: Fuzzy title/artist lookup for free-text seeds

pub mod catalog;
pub mod data;
pub mod error;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod recommend;
pub mod search;
pub mod traits;

pub use error::{Result, SonanceError};
pub use primitives::{Matrix, Vector};
pub use traits::Transformer;
