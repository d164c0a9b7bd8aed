use series_summary::ingestion::{load_from_path, LoadOptions};
use series_summary::processing::analyze;
use series_summary::types::{DataType, Dataset};
use series_summary::SeriesError;

#[test]
fn rotate_swaps_series_and_category_keys() {
    let ds = load_from_path("tests/fixtures/multi_series.json", &LoadOptions::default()).unwrap();
    let rotated = analyze(&ds).rotate().unwrap();

    assert_eq!(rotated.data_type(), DataType::MultiSeries);
    let keys: Vec<&str> = rotated.series().iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["Apples", "Oranges", "Pears"]);

    let pears = &rotated.series()[2];
    assert_eq!(pears.values[0].key, "UK");
    assert_eq!(pears.values[0].value, 12.0);
    assert_eq!(pears.values[0].x, Some(3.0));
    assert_eq!(pears.values[0].extra["label"], "peak");
    assert_eq!(pears.values[1].key, "France");
    assert_eq!(pears.values[1].value, 1.0);
}

#[test]
fn rotate_twice_restores_the_dataset() {
    let ds = load_from_path("tests/fixtures/multi_series.json", &LoadOptions::default()).unwrap();
    let rotated = analyze(&ds).rotate().unwrap();
    let back = analyze(&rotated).rotate().unwrap();
    assert_eq!(back, ds);
}

#[test]
fn rotated_summary_swaps_row_and_column_totals() {
    let ds = load_from_path("tests/fixtures/multi_series.json", &LoadOptions::default()).unwrap();
    let before = analyze(&ds).summary().unwrap();
    let rotated = analyze(&ds).rotate().unwrap();
    let after = analyze(&rotated).summary().unwrap();

    assert_eq!(after.row_totals, before.column_totals);
    assert_eq!(after.column_totals, before.row_totals);
    assert_eq!(after.value_extent, before.value_extent);
}

#[test]
fn rotate_rejects_ragged_rows() {
    let ds = load_from_path("tests/fixtures/regions.csv", &LoadOptions::default()).unwrap();
    let err = analyze(&ds).rotate().unwrap_err();
    assert!(matches!(err, SeriesError::MisalignedRotate { .. }));
    assert!(err.to_string().contains("South"));
}

#[test]
fn rotate_rejects_single_series() {
    let ds = load_from_path("tests/fixtures/single_series.json", &LoadOptions::default()).unwrap();
    let err = analyze(&ds).rotate().unwrap_err();
    assert!(matches!(err, SeriesError::MisalignedRotate { .. }));
}

#[test]
fn rotate_empty_multi_series_is_empty() {
    let rotated = analyze(&Dataset::Multi(vec![])).rotate().unwrap();
    assert_eq!(rotated, Dataset::Multi(vec![]));
}
