//! `sonance recommend`: rank the catalog against seed items.

use super::{load_catalog, require_file};
use crate::error::{CliError, Result};
use crate::output;
use colored::Colorize;
use serde::Serialize;
use sonance::preprocessing::StandardScaler;
use sonance::recommend::{Recommendation, Recommender};
use sonance::search::{FuzzyIndex, TextResolver};
use std::path::Path;

/// One printed recommendation.
#[derive(Debug, Serialize)]
pub(crate) struct Row {
    pub(crate) rank: usize,
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) score: f32,
}

/// Options for [`run`].
pub(crate) struct Options<'a> {
    pub(crate) catalog: &'a Path,
    pub(crate) impute: bool,
    pub(crate) seeds: &'a [String],
    pub(crate) query: Option<&'a str>,
    pub(crate) top_n: usize,
    pub(crate) scaler: Option<&'a Path>,
    pub(crate) json: bool,
}

pub(crate) fn run(opts: &Options<'_>) -> Result<()> {
    let rows = compute(opts)?;

    if opts.json {
        return output::json(&rows);
    }

    if rows.is_empty() {
        output::warning("no recommendations: the seeds cover the catalog or cancel each other out");
        return Ok(());
    }

    output::section("Recommendations");
    for row in &rows {
        println!(
            "  {:>3}. {}  {}",
            row.rank,
            output::display_name(&row.id, &row.title, &row.artist).bold(),
            format!("(sim {})", output::score(row.score)).dimmed()
        );
    }
    Ok(())
}

/// Loads, resolves seeds and ranks; no printing.
pub(crate) fn compute(opts: &Options<'_>) -> Result<Vec<Row>> {
    let catalog = load_catalog(opts.catalog, opts.impute)?;

    let mut seeds: Vec<String> = opts.seeds.to_vec();
    if let Some(query) = opts.query {
        let resolved = FuzzyIndex::build(&catalog).resolve_text(query);
        if resolved.is_empty() {
            tracing::warn!(query, "nothing in the catalog matched the query");
        }
        for id in resolved {
            tracing::info!(%id, "resolved seed from query");
            if !seeds.contains(&id) {
                seeds.push(id);
            }
        }
    }
    if seeds.is_empty() {
        return Err(CliError::InvalidArgument(
            "no seeds: pass --seed <ID> or a --query that matches the catalog".to_string(),
        ));
    }

    let recommender = match opts.scaler {
        Some(path) => {
            require_file(path)?;
            let scaler = StandardScaler::load_json(path)?;
            Recommender::with_scaler(catalog, scaler)?
        }
        None => Recommender::fit(catalog)?,
    };

    let recs = recommender.recommend(&seeds, opts.top_n)?;
    Ok(to_rows(&recommender, recs))
}

fn to_rows(recommender: &Recommender, recs: Vec<Recommendation>) -> Vec<Row> {
    recs.into_iter()
        .enumerate()
        .map(|(i, rec)| {
            let (title, artist) = recommender
                .catalog()
                .get(&rec.id)
                .map(|item| (item.title.clone(), item.artist.clone()))
                .unwrap_or_default();
            Row {
                rank: i + 1,
                id: rec.id,
                title,
                artist,
                score: rec.score,
            }
        })
        .collect()
}
