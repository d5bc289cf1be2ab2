//! Item catalog and identifier index.
//!
//! A [`Catalog`] is an ordered, validated collection of [`Item`]s. Insertion
//! order is significant: it breaks ties when ranking.

use crate::error::{Result, SonanceError};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The six audio features, in column order.
pub const FEATURE_COLUMNS: [&str; 6] = [
    "danceability",
    "energy",
    "tempo",
    "valence",
    "acousticness",
    "loudness",
];

/// A catalog entry: identifier, feature vector and display metadata.
///
/// Title and artist are carried for presentation only and never enter any
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Display artist
    pub artist: String,
    /// Raw feature values, one per catalog feature
    pub features: Vec<f32>,
}

impl Item {
    /// Creates an item with empty display metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, features: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            artist: String::new(),
            features,
        }
    }

    /// Sets the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the display artist.
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    /// `"title - artist"`, or just the title when the artist is empty.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.artist.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.artist)
        }
    }
}

/// Raw (unstandardized) summary statistics for one feature column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureStats {
    /// Feature name
    pub name: String,
    /// Arithmetic mean
    pub mean: f32,
    /// Population standard deviation
    pub std: f32,
    /// Smallest value
    pub min: f32,
    /// Largest value
    pub max: f32,
}

/// An ordered, non-empty collection of items with unique identifiers.
///
/// # Examples
///
/// ```
/// use sonance::catalog::{Catalog, Item};
///
/// let catalog = Catalog::new(
///     vec!["energy".to_string(), "tempo".to_string()],
///     vec![
///         Item::new("a", vec![0.9, 128.0]),
///         Item::new("b", vec![0.2, 72.0]),
///     ],
/// ).unwrap();
///
/// assert_eq!(catalog.resolve(&["b", "a"]).unwrap(), vec![1, 0]);
/// assert!(catalog.resolve(&["zzz"]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    feature_names: Vec<String>,
    items: Vec<Item>,
    index: HashMap<String, usize>,
    features: Matrix<f32>,
}

impl Catalog {
    /// Builds a catalog, validating every item.
    ///
    /// # Errors
    ///
    /// - [`SonanceError::EmptyCatalog`] if `items` is empty
    /// - [`SonanceError::DimensionMismatch`] if an item has the wrong number
    ///   of features
    /// - [`SonanceError::NonFiniteFeature`] for NaN or infinite values
    /// - [`SonanceError::DuplicateItem`] if an identifier repeats
    pub fn new(feature_names: Vec<String>, items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(SonanceError::EmptyCatalog);
        }

        let d = feature_names.len();
        let mut index = HashMap::with_capacity(items.len());
        let mut data = Vec::with_capacity(items.len() * d);

        for (row, item) in items.iter().enumerate() {
            if item.features.len() != d {
                return Err(SonanceError::DimensionMismatch {
                    expected: format!("{d} features"),
                    actual: format!("{} for item '{}'", item.features.len(), item.id),
                });
            }
            if let Some((j, &value)) = item
                .features
                .iter()
                .enumerate()
                .find(|(_, v)| !v.is_finite())
            {
                return Err(SonanceError::NonFiniteFeature {
                    id: item.id.clone(),
                    feature: feature_names[j].clone(),
                    value,
                });
            }
            if index.insert(item.id.clone(), row).is_some() {
                return Err(SonanceError::DuplicateItem {
                    id: item.id.clone(),
                });
            }
            data.extend_from_slice(&item.features);
        }

        let features = Matrix::from_vec(items.len(), d, data)?;

        Ok(Self {
            feature_names,
            items,
            index,
            features,
        })
    }

    /// Builds a catalog over the six default audio features.
    ///
    /// # Errors
    ///
    /// Same as [`Catalog::new`].
    pub fn with_default_features(items: Vec<Item>) -> Result<Self> {
        Self::new(
            FEATURE_COLUMNS.iter().map(|s| (*s).to_string()).collect(),
            items,
        )
    }

    /// Maps identifiers to row positions, keeping order and repeats.
    ///
    /// # Errors
    ///
    /// Returns [`SonanceError::UnknownItem`] listing every identifier that is
    /// not in the catalog (each once, in first-seen order). No partial result
    /// is returned.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<usize>> {
        let mut rows = Vec::with_capacity(ids.len());
        let mut missing: Vec<String> = Vec::new();
        let mut seen_missing = HashSet::new();

        for id in ids {
            let id = id.as_ref();
            match self.index.get(id) {
                Some(&row) => rows.push(row),
                None => {
                    if seen_missing.insert(id) {
                        missing.push(id.to_string());
                    }
                }
            }
        }

        if missing.is_empty() {
            Ok(rows)
        } else {
            Err(SonanceError::UnknownItem { ids: missing })
        }
    }

    /// Row position of an identifier.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Looks up an item by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.index_of(id).map(|row| &self.items[row])
    }

    /// Returns true if the identifier is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed catalog; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Feature names, in column order.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Feature dimension d.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.feature_names.len()
    }

    /// Raw feature matrix (n × d), rows in insertion order.
    #[must_use]
    pub fn features(&self) -> &Matrix<f32> {
        &self.features
    }

    /// Per-feature summary statistics over the raw values.
    #[must_use]
    pub fn describe(&self) -> Vec<FeatureStats> {
        let n = self.features.n_rows() as f64;
        self.feature_names
            .iter()
            .enumerate()
            .map(|(j, name)| {
                let column = self.features.column(j);
                let values = column.as_slice();
                let mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
                let var = values
                    .iter()
                    .map(|&v| (f64::from(v) - mean).powi(2))
                    .sum::<f64>()
                    / n;
                FeatureStats {
                    name: name.clone(),
                    mean: mean as f32,
                    std: var.sqrt() as f32,
                    min: values.iter().copied().fold(f32::INFINITY, f32::min),
                    max: values.iter().copied().fold(f32::NEG_INFINITY, f32::max),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
