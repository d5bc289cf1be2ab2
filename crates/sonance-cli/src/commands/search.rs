//! `sonance search`: fuzzy title/artist lookup.

use super::load_catalog;
use crate::error::{CliError, Result};
use crate::output;
use colored::Colorize;
use sonance::search::{FuzzyIndex, SearchMatch};
use std::path::Path;

pub(crate) fn run(
    catalog: &Path,
    impute: bool,
    query: &str,
    limit: usize,
    cutoff: f32,
    json: bool,
) -> Result<()> {
    let matches = compute(catalog, impute, query, limit, cutoff)?;

    if json {
        return output::json(&matches);
    }
    if matches.is_empty() {
        output::warning(&format!("no match for {query:?} at cutoff {cutoff}"));
        return Ok(());
    }

    output::section("Matches");
    for m in &matches {
        println!(
            "  {:>5.1}  {}  {}",
            m.score,
            m.id.dimmed(),
            m.display.bold()
        );
    }
    Ok(())
}

pub(crate) fn compute(
    catalog: &Path,
    impute: bool,
    query: &str,
    limit: usize,
    cutoff: f32,
) -> Result<Vec<SearchMatch>> {
    if !(0.0..=100.0).contains(&cutoff) {
        return Err(CliError::InvalidArgument(format!(
            "cutoff must be within [0, 100], got {cutoff}"
        )));
    }
    let catalog = load_catalog(catalog, impute)?;
    Ok(FuzzyIndex::build(&catalog).search(query, limit, cutoff))
}
