//! Content-based recommender over standardized feature vectors.

use super::similarity::cosine_similarities;
use crate::catalog::Catalog;
use crate::error::{Result, SonanceError};
use crate::preprocessing::StandardScaler;
use crate::primitives::{Matrix, Vector};
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

/// One ranked result: an item identifier and its cosine similarity to the
/// taste vector, in [-1, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Item identifier
    pub id: String,
    /// Cosine similarity to the taste vector
    pub score: f32,
}

/// Ranks catalog items by cosine similarity to the mean of a set of seed
/// items, in standardized feature space.
///
/// The scaler is fitted (or supplied) once at construction; queries never
/// mutate the recommender, so one instance can serve any number of readers.
///
/// # Examples
///
/// ```
/// use sonance::prelude::*;
///
/// let catalog = Catalog::new(
///     vec!["energy".to_string(), "tempo".to_string()],
///     vec![
///         Item::new("club", vec![0.9, 128.0]),
///         Item::new("dance", vec![0.85, 124.0]),
///         Item::new("ballad", vec![0.2, 70.0]),
///         Item::new("lullaby", vec![0.1, 60.0]),
///     ],
/// ).unwrap();
///
/// let recommender = Recommender::fit(catalog).unwrap();
/// let recs = recommender.recommend(&["club"], 2).unwrap();
///
/// assert_eq!(recs.len(), 2);
/// assert_eq!(recs[0].id, "dance");
/// ```
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    scaler: StandardScaler,
    standardized: Matrix<f32>,
}

impl Recommender {
    /// Fits a scaler over the whole catalog and standardizes it.
    ///
    /// # Errors
    ///
    /// Returns [`SonanceError::DegenerateFeature`] if any feature column is
    /// constant across the catalog.
    pub fn fit(catalog: Catalog) -> Result<Self> {
        let scaler = StandardScaler::fit_with_names(catalog.features(), catalog.feature_names())?;
        Self::with_scaler(catalog, scaler)
    }

    /// Builds a recommender from an externally supplied scaler (for example
    /// one loaded with [`StandardScaler::load_json`]).
    ///
    /// # Errors
    ///
    /// Returns [`SonanceError::DimensionMismatch`] if the scaler was fitted on
    /// a different number of features than the catalog has.
    pub fn with_scaler(catalog: Catalog, scaler: StandardScaler) -> Result<Self> {
        if scaler.n_features() != catalog.dimension() {
            return Err(SonanceError::dimension_mismatch(
                "scaler features",
                catalog.dimension(),
                scaler.n_features(),
            ));
        }
        let standardized = scaler.transform(catalog.features())?;
        Ok(Self {
            catalog,
            scaler,
            standardized,
        })
    }

    /// The catalog being served.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The fitted scaler.
    #[must_use]
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Standardized feature matrix, rows in catalog order.
    #[must_use]
    pub fn standardized(&self) -> &Matrix<f32> {
        &self.standardized
    }

    /// Mean of the standardized rows of the seeds.
    ///
    /// A seed listed twice contributes its row twice.
    ///
    /// # Errors
    ///
    /// - [`SonanceError::InvalidArgument`] if `seed_ids` is empty
    /// - [`SonanceError::UnknownItem`] if any seed is not in the catalog
    pub fn taste_vector<S: AsRef<str>>(&self, seed_ids: &[S]) -> Result<Vector<f32>> {
        if seed_ids.is_empty() {
            return Err(SonanceError::invalid_argument(
                "seed_ids",
                "[]",
                "at least one identifier",
            ));
        }
        let rows = self.catalog.resolve(seed_ids)?;
        self.standardized
            .select_rows(&rows)
            .mean_rows()
            .ok_or_else(|| {
                SonanceError::invalid_argument("seed_ids", "[]", "at least one identifier")
            })
    }

    /// Top `top_n` items most similar to the seeds' taste vector, seeds
    /// excluded.
    ///
    /// Results are ordered by non-increasing score; equal scores keep catalog
    /// order. Fewer than `top_n` results are returned when the catalog runs
    /// out of candidates. A taste vector with (near) zero norm, from seeds
    /// that cancel out in standardized space, yields an empty result.
    ///
    /// # Errors
    ///
    /// - [`SonanceError::InvalidArgument`] if `top_n == 0` or `seed_ids` is
    ///   empty
    /// - [`SonanceError::UnknownItem`] naming every seed not in the catalog
    pub fn recommend<S: AsRef<str>>(
        &self,
        seed_ids: &[S],
        top_n: usize,
    ) -> Result<Vec<Recommendation>> {
        match self.recommend_strict(seed_ids, top_n) {
            Err(SonanceError::ZeroVector) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Like [`Recommender::recommend`], but reports a zero-norm taste vector
    /// as [`SonanceError::ZeroVector`] instead of returning an empty result.
    ///
    /// # Errors
    ///
    /// As for [`Recommender::recommend`], plus [`SonanceError::ZeroVector`].
    pub fn recommend_strict<S: AsRef<str>>(
        &self,
        seed_ids: &[S],
        top_n: usize,
    ) -> Result<Vec<Recommendation>> {
        if top_n == 0 {
            return Err(SonanceError::invalid_argument("top_n", top_n, ">= 1"));
        }

        let taste = self.taste_vector(seed_ids)?;
        let sims = cosine_similarities(&taste, &self.standardized)?;

        let seeds: HashSet<&str> = seed_ids.iter().map(|s| s.as_ref()).collect();
        let mut ranked: Vec<(usize, f32)> = sims
            .into_iter()
            .enumerate()
            .filter(|&(row, _)| !seeds.contains(self.catalog.items()[row].id.as_str()))
            .collect();

        // Stable: equal scores (0.0 and -0.0 included) stay in catalog order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        Ok(ranked
            .into_iter()
            .take(top_n)
            .map(|(row, score)| Recommendation {
                id: self.catalog.items()[row].id.clone(),
                score,
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "content_based_tests.rs"]
mod tests;
