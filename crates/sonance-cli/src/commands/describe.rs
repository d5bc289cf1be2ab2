//! `sonance describe`: catalog size and per-feature statistics.

use super::load_catalog;
use crate::error::Result;
use crate::output;
use serde::Serialize;
use sonance::catalog::FeatureStats;
use std::path::Path;

#[derive(Debug, Serialize)]
pub(crate) struct Summary {
    pub(crate) items: usize,
    pub(crate) features: Vec<FeatureStats>,
}

pub(crate) fn run(catalog: &Path, impute: bool, json: bool) -> Result<()> {
    let summary = compute(catalog, impute)?;
    if json {
        return output::json(&summary);
    }

    output::section("Catalog");
    output::kv("Path", catalog.display());
    output::kv("Items", summary.items);

    output::section("Features");
    println!(
        "  {:<14} {:>10} {:>10} {:>10} {:>10}",
        "name", "mean", "std", "min", "max"
    );
    for f in &summary.features {
        println!(
            "  {:<14} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            f.name, f.mean, f.std, f.min, f.max
        );
    }
    Ok(())
}

pub(crate) fn compute(catalog: &Path, impute: bool) -> Result<Summary> {
    let catalog = load_catalog(catalog, impute)?;
    Ok(Summary {
        items: catalog.len(),
        features: catalog.describe(),
    })
}
