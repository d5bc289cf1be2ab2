use super::*;

fn two_feature_catalog() -> Catalog {
    Catalog::new(
        vec!["energy".to_string(), "tempo".to_string()],
        vec![
            Item::new("a", vec![0.9, 128.0]).with_title("Alpha").with_artist("Ann"),
            Item::new("b", vec![0.2, 72.0]).with_title("Beta"),
            Item::new("c", vec![0.5, 100.0]),
        ],
    )
    .expect("valid catalog")
}

#[test]
fn test_new_and_accessors() {
    let catalog = two_feature_catalog();
    assert_eq!(catalog.len(), 3);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.dimension(), 2);
    assert_eq!(catalog.features().shape(), (3, 2));
    assert_eq!(catalog.index_of("c"), Some(2));
    assert!(catalog.contains("b"));
    assert!(!catalog.contains("z"));
    assert_eq!(catalog.get("a").map(|i| i.title.as_str()), Some("Alpha"));
}

#[test]
fn test_empty_catalog_rejected() {
    let err = Catalog::with_default_features(Vec::new()).expect_err("empty");
    assert!(matches!(err, SonanceError::EmptyCatalog));
}

#[test]
fn test_duplicate_id_rejected() {
    let err = Catalog::new(
        vec!["x".to_string()],
        vec![Item::new("a", vec![1.0]), Item::new("a", vec![2.0])],
    )
    .expect_err("duplicate");
    assert!(matches!(err, SonanceError::DuplicateItem { id } if id == "a"));
}

#[test]
fn test_wrong_dimension_rejected() {
    let err = Catalog::with_default_features(vec![Item::new("a", vec![1.0, 2.0])])
        .expect_err("only 2 of 6 features");
    assert!(matches!(err, SonanceError::DimensionMismatch { .. }));
}

#[test]
fn test_non_finite_rejected() {
    let err = Catalog::new(
        vec!["energy".to_string(), "tempo".to_string()],
        vec![Item::new("a", vec![0.5, f32::NAN])],
    )
    .expect_err("NaN feature");
    match err {
        SonanceError::NonFiniteFeature { id, feature, .. } => {
            assert_eq!(id, "a");
            assert_eq!(feature, "tempo");
        }
        other => panic!("expected NonFiniteFeature, got {other:?}"),
    }
}

#[test]
fn test_resolve_keeps_order_and_duplicates() {
    let catalog = two_feature_catalog();
    let rows = catalog.resolve(&["c", "a", "c"]).expect("all known");
    assert_eq!(rows, vec![2, 0, 2]);
}

#[test]
fn test_resolve_lists_every_unknown_once() {
    let catalog = two_feature_catalog();
    let err = catalog
        .resolve(&["x", "a", "y", "x"])
        .expect_err("unknown ids");
    match err {
        SonanceError::UnknownItem { ids } => assert_eq!(ids, vec!["x", "y"]),
        other => panic!("expected UnknownItem, got {other:?}"),
    }
}

#[test]
fn test_resolve_empty_input() {
    let catalog = two_feature_catalog();
    let none: [&str; 0] = [];
    assert!(catalog.resolve(&none).expect("nothing to resolve").is_empty());
}

#[test]
fn test_display_name() {
    let catalog = two_feature_catalog();
    assert_eq!(catalog.items()[0].display_name(), "Alpha - Ann");
    assert_eq!(catalog.items()[1].display_name(), "Beta");
}

#[test]
fn test_describe() {
    let catalog = two_feature_catalog();
    let stats = catalog.describe();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].name, "energy");
    assert!((stats[0].min - 0.2).abs() < 1e-6);
    assert!((stats[0].max - 0.9).abs() < 1e-6);
    assert!((stats[1].mean - 100.0).abs() < 1e-4);
    assert!(stats[1].std > 0.0);
}

#[test]
fn test_default_feature_columns() {
    let catalog =
        Catalog::with_default_features(vec![Item::new("a", vec![0.1, 0.2, 120.0, 0.4, 0.5, -6.0])])
            .expect("six features");
    assert_eq!(catalog.feature_names()[2], "tempo");
    assert_eq!(catalog.dimension(), FEATURE_COLUMNS.len());
}
