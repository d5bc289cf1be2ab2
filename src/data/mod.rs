//! CSV catalog loading.
//!
//! Turns a tabular dataset (one row per item, arbitrary extra columns) into a
//! validated [`Catalog`]. Missing-value handling happens here, before rows
//! reach the catalog:
//!
//! - a row with an empty identifier is always dropped
//! - a feature cell that is empty, unparsable or non-finite is *missing*;
//!   [`MissingPolicy`] decides whether the row is dropped or the cell imputed
//! - a repeated identifier keeps its first occurrence
//!
//! # Example
//!
//! ```
//! use sonance::data::{CsvCatalogLoader, LoaderConfig};
//!
//! let csv = "\
//! track_id,track_name,track_artist,danceability,energy,tempo,valence,acousticness,loudness
//! t1,Song One,Someone,0.8,0.9,128,0.7,0.05,-4.0
//! t2,Song Two,Someone,0.3,0.2,70,0.2,0.90,-14.0
//! t3,Broken,Nobody,,0.5,100,0.5,0.5,-8.0
//! ";
//!
//! let loader = CsvCatalogLoader::new(LoaderConfig::default());
//! let (catalog, report) = loader.load_reader(csv.as_bytes()).unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(report.rows_dropped, 1);
//! ```

use crate::catalog::{Catalog, Item, FEATURE_COLUMNS};
use crate::error::{Result, SonanceError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// What to do with a row whose feature cell is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Skip the row.
    #[default]
    Drop,
    /// Replace the cell with the mean of the column's present values.
    ImputeMean,
}

/// Column mapping and missing-value policy for [`CsvCatalogLoader`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Identifier column (required)
    pub id_column: String,
    /// Title column (optional in the file)
    pub title_column: String,
    /// Artist column (optional in the file)
    pub artist_column: String,
    /// Feature columns, in catalog order (all required)
    pub feature_columns: Vec<String>,
    /// Missing-value policy
    pub missing: MissingPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            id_column: "track_id".to_string(),
            title_column: "track_name".to_string(),
            artist_column: "track_artist".to_string(),
            feature_columns: FEATURE_COLUMNS.iter().map(|s| (*s).to_string()).collect(),
            missing: MissingPolicy::Drop,
        }
    }
}

impl LoaderConfig {
    /// Sets the identifier column.
    #[must_use]
    pub fn with_id_column(mut self, column: impl Into<String>) -> Self {
        self.id_column = column.into();
        self
    }

    /// Sets the title and artist columns.
    #[must_use]
    pub fn with_display_columns(
        mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        self.title_column = title.into();
        self.artist_column = artist.into();
        self
    }

    /// Sets the feature columns.
    #[must_use]
    pub fn with_feature_columns<S: Into<String>>(mut self, columns: Vec<S>) -> Self {
        self.feature_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the missing-value policy.
    #[must_use]
    pub fn with_missing(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }
}

/// What happened while loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Rows dropped for a missing identifier or missing features
    pub rows_dropped: usize,
    /// Feature cells filled by imputation
    pub cells_imputed: usize,
    /// Rows dropped because their identifier was already seen
    pub duplicates_dropped: usize,
}

/// Loads a [`Catalog`] from CSV.
#[derive(Debug, Clone, Default)]
pub struct CsvCatalogLoader {
    config: LoaderConfig,
}

/// A parsed row before imputation.
struct RawRow {
    id: String,
    title: String,
    artist: String,
    features: Vec<Option<f32>>,
}

impl CsvCatalogLoader {
    /// Creates a loader with the given configuration.
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// The loader configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads a catalog from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, a required column is
    /// absent, the CSV is malformed, or no usable rows remain.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<(Catalog, LoadReport)> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        tracing::debug!(path = %path.display(), "loading catalog");
        self.load_reader(file)
    }

    /// Loads a catalog from any reader producing CSV text.
    ///
    /// # Errors
    ///
    /// Same as [`CsvCatalogLoader::load_path`], minus file opening.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<(Catalog, LoadReport)> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let available: Vec<String> = headers.iter().map(str::to_string).collect();
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| SonanceError::MissingColumn {
                column: name.to_string(),
                available: available.clone(),
            })
        };

        let id_idx = require(self.config.id_column.as_str())?;
        let feature_idx = self
            .config
            .feature_columns
            .iter()
            .map(|c| require(c.as_str()))
            .collect::<Result<Vec<_>>>()?;
        let title_idx = find(self.config.title_column.as_str());
        let artist_idx = find(self.config.artist_column.as_str());

        let mut report = LoadReport::default();
        let mut seen = HashSet::new();
        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;
            report.rows_read += 1;
            let line = record.position().map_or(0, csv::Position::line);

            let id = record.get(id_idx).unwrap_or("");
            if id.is_empty() {
                tracing::debug!(line, "dropping row without identifier");
                report.rows_dropped += 1;
                continue;
            }

            let features: Vec<Option<f32>> = feature_idx
                .iter()
                .map(|&j| parse_feature(record.get(j)))
                .collect();

            if self.config.missing == MissingPolicy::Drop && features.iter().any(Option::is_none) {
                tracing::debug!(line, id, "dropping row with missing features");
                report.rows_dropped += 1;
                continue;
            }

            if !seen.insert(id.to_string()) {
                tracing::warn!(line, id, "duplicate identifier; keeping first occurrence");
                report.duplicates_dropped += 1;
                continue;
            }

            let text = |idx: Option<usize>| {
                idx.and_then(|j| record.get(j))
                    .unwrap_or_default()
                    .to_string()
            };
            rows.push(RawRow {
                id: id.to_string(),
                title: text(title_idx),
                artist: text(artist_idx),
                features,
            });
        }

        let items = self.complete_rows(rows, &mut report);

        tracing::info!(
            items = items.len(),
            rows_read = report.rows_read,
            rows_dropped = report.rows_dropped,
            cells_imputed = report.cells_imputed,
            duplicates_dropped = report.duplicates_dropped,
            "catalog loaded"
        );

        let catalog = Catalog::new(self.config.feature_columns.clone(), items)?;
        Ok((catalog, report))
    }

    /// Fills missing cells with column means; rows that still have a gap
    /// (the whole column was missing) are dropped.
    fn complete_rows(&self, rows: Vec<RawRow>, report: &mut LoadReport) -> Vec<Item> {
        let d = self.config.feature_columns.len();
        let means: Vec<Option<f32>> = (0..d)
            .map(|j| {
                let present: Vec<f64> = rows
                    .iter()
                    .filter_map(|r| r.features[j])
                    .map(f64::from)
                    .collect();
                (!present.is_empty())
                    .then(|| (present.iter().sum::<f64>() / present.len() as f64) as f32)
            })
            .collect();

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let mut imputed = 0;
            let features: Option<Vec<f32>> = row
                .features
                .iter()
                .zip(&means)
                .map(|(value, mean)| {
                    value.or_else(|| {
                        imputed += 1;
                        *mean
                    })
                })
                .collect();

            match features {
                Some(features) => {
                    report.cells_imputed += imputed;
                    items.push(
                        Item::new(row.id, features)
                            .with_title(row.title)
                            .with_artist(row.artist),
                    );
                }
                None => {
                    tracing::debug!(id = %row.id, "dropping row: nothing to impute from");
                    report.rows_dropped += 1;
                }
            }
        }
        items
    }
}

fn parse_feature(cell: Option<&str>) -> Option<f32> {
    cell.and_then(|s| s.parse::<f32>().ok())
        .filter(|v| v.is_finite())
}
