//! Subcommand implementations.

pub(crate) mod describe;
pub(crate) mod export_scaler;
pub(crate) mod recommend;
pub(crate) mod search;

use crate::error::{CliError, Result};
use sonance::catalog::Catalog;
use sonance::data::{CsvCatalogLoader, LoaderConfig, MissingPolicy};
use std::path::Path;

/// Fails with the matching exit code unless `path` is an existing file.
pub(crate) fn require_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::InvalidArgument(format!(
            "not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Loads the catalog named by `--catalog`, honouring `--impute`.
pub(crate) fn load_catalog(path: &Path, impute: bool) -> Result<Catalog> {
    require_file(path)?;

    let missing = if impute {
        MissingPolicy::ImputeMean
    } else {
        MissingPolicy::Drop
    };
    let loader = CsvCatalogLoader::new(LoaderConfig::default().with_missing(missing));
    let (catalog, report) = loader.load_path(path)?;
    if report.rows_dropped > 0 || report.duplicates_dropped > 0 {
        tracing::warn!(
            dropped = report.rows_dropped,
            duplicates = report.duplicates_dropped,
            "some catalog rows were skipped"
        );
    }
    Ok(catalog)
}
