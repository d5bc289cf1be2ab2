use super::*;
use crate::catalog::{Item, FEATURE_COLUMNS};
use crate::recommend::similarity::ZERO_NORM_TOLERANCE;

fn unit_catalog(rows: &[(&str, [f32; 6])]) -> Catalog {
    Catalog::with_default_features(
        rows.iter()
            .map(|(id, f)| Item::new(*id, f.to_vec()))
            .collect(),
    )
    .expect("valid catalog")
}

fn identity_recommender(rows: &[(&str, [f32; 6])]) -> Recommender {
    Recommender::with_scaler(unit_catalog(rows), StandardScaler::identity(&FEATURE_COLUMNS))
        .expect("scaler width matches")
}

fn planar_recommender(rows: &[(&str, [f32; 2])]) -> Recommender {
    let catalog = Catalog::new(
        vec!["x".to_string(), "y".to_string()],
        rows.iter().map(|(id, f)| Item::new(*id, f.to_vec())).collect(),
    )
    .expect("valid catalog");
    Recommender::with_scaler(catalog, StandardScaler::identity(&["x", "y"]))
        .expect("scaler width matches")
}

fn fitted_recommender() -> Recommender {
    let items = vec![
        Item::new("t1", vec![0.80, 0.90, 128.0, 0.70, 0.05, -4.0]),
        Item::new("t2", vec![0.75, 0.85, 124.0, 0.65, 0.10, -5.0]),
        Item::new("t3", vec![0.30, 0.20, 70.0, 0.20, 0.90, -14.0]),
        Item::new("t4", vec![0.35, 0.25, 76.0, 0.25, 0.85, -12.0]),
        Item::new("t5", vec![0.60, 0.55, 100.0, 0.50, 0.40, -8.0]),
        Item::new("t6", vec![0.82, 0.88, 130.0, 0.72, 0.04, -3.5]),
    ];
    Recommender::fit(Catalog::with_default_features(items).expect("valid")).expect("fit")
}

#[test]
fn test_three_item_scenario() {
    let rec = identity_recommender(&[
        ("A", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ("B", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ("C", [-1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    ]);

    let recs = rec.recommend(&["A"], 2).expect("valid query");

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].id, "B");
    assert!((recs[0].score - 1.0).abs() < 1e-6);
    assert_eq!(recs[1].id, "C");
    assert!((recs[1].score + 1.0).abs() < 1e-6);
}

#[test]
fn test_unknown_seed_is_error() {
    let rec = fitted_recommender();
    let err = rec.recommend(&["t1", "nope"], 3).expect_err("unknown seed");
    match err {
        SonanceError::UnknownItem { ids } => assert_eq!(ids, vec!["nope"]),
        other => panic!("expected UnknownItem, got {other:?}"),
    }
}

#[test]
fn test_top_n_zero_is_error() {
    let rec = fitted_recommender();
    let err = rec.recommend(&["t1"], 0).expect_err("top_n = 0");
    assert!(matches!(err, SonanceError::InvalidArgument { ref param, .. } if param == "top_n"));
}

#[test]
fn test_empty_seed_set_is_error() {
    let rec = fitted_recommender();
    let none: [&str; 0] = [];
    let err = rec.recommend(&none, 3).expect_err("no seeds");
    assert!(matches!(err, SonanceError::InvalidArgument { ref param, .. } if param == "seed_ids"));
}

#[test]
fn test_catalog_of_only_seeds_gives_empty_result() {
    let rec = planar_recommender(&[("a", [1.0, 0.0]), ("b", [0.0, 1.0])]);
    let recs = rec.recommend(&["a", "b"], 5).expect("valid query");
    assert!(recs.is_empty());
}

#[test]
fn test_short_catalog_is_not_padded() {
    let rec = fitted_recommender();
    let recs = rec.recommend(&["t1", "t2"], 100).expect("valid query");
    assert_eq!(recs.len(), rec.catalog().len() - 2);
}

#[test]
fn test_seeds_are_excluded() {
    let rec = fitted_recommender();
    let recs = rec.recommend(&["t1", "t3"], 10).expect("valid query");
    assert!(recs.iter().all(|r| r.id != "t1" && r.id != "t3"));
}

#[test]
fn test_results_sorted_descending() {
    let rec = fitted_recommender();
    let recs = rec.recommend(&["t5"], 10).expect("valid query");
    for pair in recs.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_nearest_neighbour_ranks_first() {
    let rec = fitted_recommender();
    let recs = rec.recommend(&["t1"], 2).expect("valid query");
    // t6 and t2 are the other upbeat tracks
    let top: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
    assert!(top.contains(&"t6"));
    assert!(top.contains(&"t2"));
}

#[test]
fn test_self_similarity_is_one() {
    let rec = fitted_recommender();
    let taste = rec.taste_vector(&["t4"]).expect("known seed");
    let row = rec.catalog().index_of("t4").expect("present");
    let sims = cosine_similarities(&taste, rec.standardized()).expect("non-zero taste");
    assert!((sims[row] - 1.0).abs() < 1e-5);
}

#[test]
fn test_duplicate_seeds_are_weighted_per_occurrence() {
    // d lies at 2:1 towards y, c at 2:1 towards x; with equal weights on a
    // and b the two tie and catalog order puts d first.
    let rec = planar_recommender(&[
        ("a", [1.0, 0.0]),
        ("b", [0.0, 1.0]),
        ("d", [1.0, 2.0]),
        ("c", [2.0, 1.0]),
    ]);

    let balanced = rec.recommend(&["a", "b"], 2).expect("valid query");
    assert_eq!(balanced[0].id, "d");
    assert!((balanced[0].score - balanced[1].score).abs() < 1e-6);

    let weighted = rec.recommend(&["a", "a", "b"], 2).expect("valid query");
    assert_eq!(weighted[0].id, "c");
    assert!((weighted[0].score - 1.0).abs() < 1e-6);

    let taste = rec.taste_vector(&["a", "a", "b"]).expect("known seeds");
    assert!((taste[0] - 2.0 / 3.0).abs() < 1e-6);
    assert!((taste[1] - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_ties_keep_catalog_order() {
    let rec = planar_recommender(&[
        ("seed", [1.0, 0.0]),
        ("z", [0.0, 1.0]),
        ("y", [0.0, -1.0]),
        ("x", [0.0, 2.0]),
    ]);
    let recs = rec.recommend(&["seed"], 3).expect("valid query");
    let ids: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "y", "x"]);
}

#[test]
fn test_zero_taste_vector_degrades_to_empty() {
    let rec = planar_recommender(&[
        ("up", [1.0, 0.0]),
        ("down", [-1.0, 0.0]),
        ("side", [0.0, 1.0]),
    ]);

    let recs = rec.recommend(&["up", "down"], 3).expect("degrades, not fails");
    assert!(recs.is_empty());

    let strict = rec.recommend_strict(&["up", "down"], 3);
    assert!(matches!(strict, Err(SonanceError::ZeroVector)));
}

#[test]
fn test_fitted_seeds_cancelling_at_catalog_mean_degrade_to_empty() {
    // a and b average to the catalog mean (0.2, 0.4), so the standardized
    // taste vector is only f32 rounding noise
    let catalog = Catalog::new(
        vec!["x".to_string(), "y".to_string()],
        vec![
            Item::new("a", vec![0.1, 0.7]),
            Item::new("b", vec![0.3, 0.1]),
            Item::new("c", vec![0.15, 0.3]),
            Item::new("d", vec![0.25, 0.5]),
        ],
    )
    .expect("valid catalog");
    let rec = Recommender::fit(catalog).expect("fit");

    let taste = rec.taste_vector(&["a", "b"]).expect("known seeds");
    assert!(taste.norm() <= ZERO_NORM_TOLERANCE);

    let recs = rec.recommend(&["a", "b"], 3).expect("degrades, not fails");
    assert!(recs.is_empty());
    assert!(matches!(
        rec.recommend_strict(&["a", "b"], 3),
        Err(SonanceError::ZeroVector)
    ));
}

#[test]
fn test_zero_norm_catalog_row_scores_zero() {
    let rec = planar_recommender(&[("seed", [1.0, 1.0]), ("origin", [0.0, 0.0])]);
    let recs = rec.recommend(&["seed"], 1).expect("valid query");
    assert_eq!(recs[0].id, "origin");
    assert!(recs[0].score.abs() < 1e-12);
}

#[test]
fn test_idempotent() {
    let rec = fitted_recommender();
    let first = rec.recommend(&["t2", "t5"], 4).expect("valid query");
    let second = rec.recommend(&["t2", "t5"], 4).expect("valid query");
    assert_eq!(first, second);
    let bits = |v: &[Recommendation]| v.iter().map(|r| r.score.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn test_fit_rejects_constant_feature() {
    let items = vec![
        Item::new("a", vec![0.1, 0.5, 120.0, 0.3, 0.2, -6.0]),
        Item::new("b", vec![0.2, 0.5, 100.0, 0.4, 0.1, -7.0]),
    ];
    let err = Recommender::fit(Catalog::with_default_features(items).expect("valid"))
        .expect_err("energy is constant");
    assert!(matches!(
        err,
        SonanceError::DegenerateFeature { ref feature, index: 1 } if feature == "energy"
    ));
}

#[test]
fn test_with_scaler_width_mismatch() {
    let catalog = unit_catalog(&[("a", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0])]);
    let err = Recommender::with_scaler(catalog, StandardScaler::identity(&["x", "y"]))
        .expect_err("2 vs 6 features");
    assert!(matches!(err, SonanceError::DimensionMismatch { .. }));
}

#[test]
fn test_standardized_matrix_matches_catalog_shape() {
    let rec = fitted_recommender();
    assert_eq!(rec.standardized().shape(), rec.catalog().features().shape());
    assert_eq!(rec.scaler().n_features(), 6);
}
