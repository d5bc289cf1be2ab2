//! Integration tests for sonance.
//!
//! These tests verify end-to-end workflows combining multiple components.

use sonance::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const SONGS: &str = "\
track_id,track_name,track_artist,danceability,energy,tempo,valence,acousticness,loudness,playlist_genre
t1,Blinding Lights,The Weeknd,0.80,0.90,128,0.70,0.05,-4.0,pop
t2,Save Your Tears,The Weeknd,0.75,0.85,124,0.65,0.10,-5.0,pop
t3,Someone Like You,Adele,0.30,0.20,70,0.20,0.90,-14.0,pop
t4,Hello,Adele,0.35,0.25,76,0.25,0.85,-12.0,pop
t5,Midnight City,M83,0.60,0.55,100,0.50,0.40,-8.0,rock
t6,Starboy,The Weeknd,0.82,0.88,130,0.72,0.04,-3.5,r&b
t7,Broken Row,Nobody,,0.50,100,0.50,0.50,-8.0,rock
";

fn songs_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(SONGS.as_bytes()).expect("write csv");
    file
}

#[test]
fn test_csv_to_recommendations_workflow() {
    let file = songs_file();
    let (catalog, report) = CsvCatalogLoader::default()
        .load_path(file.path())
        .expect("catalog loads");
    assert_eq!(catalog.len(), 6);
    assert_eq!(report.rows_dropped, 1);

    let recommender = Recommender::fit(catalog).expect("fit");
    let recs = recommender.recommend(&["t3"], 3).expect("known seed");

    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0].id, "t4", "the other ballad ranks first");
    assert!(recs[0].score > 0.99);
    assert!(recs.iter().all(|r| r.id != "t3"));
}

#[test]
fn test_imputed_row_takes_part_in_ranking() {
    let file = songs_file();
    let loader =
        CsvCatalogLoader::new(LoaderConfig::default().with_missing(MissingPolicy::ImputeMean));
    let (catalog, report) = loader.load_path(file.path()).expect("catalog loads");
    assert_eq!(catalog.len(), 7);
    assert_eq!(report.cells_imputed, 1);

    let recommender = Recommender::fit(catalog).expect("fit");
    let recs = recommender.recommend(&["t1"], 10).expect("known seed");
    assert_eq!(recs.len(), 6);
    assert!(recs.iter().any(|r| r.id == "t7"));
}

#[test]
fn test_free_text_seeds_workflow() {
    let file = songs_file();
    let (catalog, _) = CsvCatalogLoader::default()
        .load_path(file.path())
        .expect("catalog loads");

    let seeds = FuzzyIndex::build(&catalog).resolve_text("Blinding Lights by The Weeknd");
    assert_eq!(seeds, vec!["t1"]);

    let recommender = Recommender::fit(catalog).expect("fit");
    let recs = recommender.recommend(&seeds, 2).expect("resolved seeds");
    let top: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
    assert!(top.contains(&"t2"));
    assert!(top.contains(&"t6"));
}

#[test]
fn test_scaler_artifact_round_trip_preserves_ranking() {
    let file = songs_file();
    let (catalog, _) = CsvCatalogLoader::default()
        .load_path(file.path())
        .expect("catalog loads");

    let fitted = Recommender::fit(catalog.clone()).expect("fit");
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("scaler.json");
    fitted.scaler().save_json(&path).expect("save");

    let scaler = StandardScaler::load_json(&path).expect("load");
    assert_eq!(&scaler, fitted.scaler());

    let reloaded = Recommender::with_scaler(catalog, scaler).expect("same width");
    assert_eq!(
        fitted.recommend(&["t2", "t5"], 4).expect("query"),
        reloaded.recommend(&["t2", "t5"], 4).expect("query")
    );
}

#[test]
fn test_transformer_inverse_recovers_catalog_features() {
    let file = songs_file();
    let (catalog, _) = CsvCatalogLoader::default()
        .load_path(file.path())
        .expect("catalog loads");
    let recommender = Recommender::fit(catalog).expect("fit");

    let restored = recommender
        .scaler()
        .inverse_transform(recommender.standardized())
        .expect("same width");
    let original = recommender.catalog().features();
    for (a, b) in restored.as_slice().iter().zip(original.as_slice()) {
        assert!((a - b).abs() < 1e-3, "{a} vs {b}");
    }
}

#[test]
fn test_shared_recommender_hot_swap() {
    let file = songs_file();
    let (catalog, _) = CsvCatalogLoader::default()
        .load_path(file.path())
        .expect("catalog loads");
    let shared = SharedRecommender::new(Recommender::fit(catalog).expect("fit"));

    let in_flight = shared.snapshot();

    let smaller = Catalog::with_default_features(vec![
        Item::new("x", vec![0.1, 0.2, 90.0, 0.3, 0.4, -9.0]),
        Item::new("y", vec![0.9, 0.8, 140.0, 0.7, 0.1, -3.0]),
    ])
    .expect("valid");
    let previous = shared.replace(Recommender::fit(smaller).expect("fit"));

    assert_eq!(previous.catalog().len(), 6);
    assert_eq!(in_flight.recommend(&["t1"], 10).expect("old snapshot").len(), 5);
    assert!(matches!(
        shared.snapshot().recommend(&["t1"], 10),
        Err(SonanceError::UnknownItem { .. })
    ));
}

#[test]
fn test_describe_reports_raw_statistics() {
    let file = songs_file();
    let (catalog, _) = CsvCatalogLoader::default()
        .load_path(file.path())
        .expect("catalog loads");
    let stats = catalog.describe();
    let loudness = stats.iter().find(|s| s.name == "loudness").expect("column");
    assert!((loudness.min + 14.0).abs() < 1e-5);
    assert!((loudness.max + 3.5).abs() < 1e-5);
}
