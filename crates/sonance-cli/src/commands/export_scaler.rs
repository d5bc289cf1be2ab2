//! `sonance export-scaler`: fit the standardizer and write it as JSON.

use super::load_catalog;
use crate::error::Result;
use crate::output;
use sonance::preprocessing::StandardScaler;
use std::path::Path;

pub(crate) fn run(catalog: &Path, impute: bool, out: &Path, json: bool) -> Result<()> {
    let scaler = compute(catalog, impute, out)?;
    if json {
        return output::json(&serde_json::json!({
            "path": out.display().to_string(),
            "features": scaler.feature_names(),
        }));
    }
    output::section("Scaler");
    output::kv("Written", out.display());
    output::kv("Features", scaler.feature_names().join(", "));
    Ok(())
}

pub(crate) fn compute(catalog: &Path, impute: bool, out: &Path) -> Result<StandardScaler> {
    let catalog = load_catalog(catalog, impute)?;
    let scaler = StandardScaler::fit_with_names(catalog.features(), catalog.feature_names())?;
    scaler.save_json(out)?;
    tracing::info!(path = %out.display(), "scaler written");
    Ok(scaler)
}
