use series_summary::ingestion::json::{load_json_from_path, load_json_from_str};
use series_summary::types::{DataType, Dataset};
use series_summary::SeriesError;

#[test]
fn load_multi_series_from_path_happy_path() {
    let ds = load_json_from_path("tests/fixtures/multi_series.json").unwrap();

    assert_eq!(ds.data_type(), DataType::MultiSeries);
    assert_eq!(ds.series().len(), 2);
    assert_eq!(ds.series()[0].key, "UK");
    assert_eq!(ds.series()[1].values[1].value, 6.25);
    assert_eq!(ds.series()[0].values[0].x, Some(1.0));
    assert_eq!(ds.series()[0].values[2].extra["label"], "peak");
    assert_eq!(ds.point_count(), 6);
}

#[test]
fn load_single_series_coerces_numeric_strings() {
    let ds = load_json_from_path("tests/fixtures/single_series.json").unwrap();

    let Dataset::Single(series) = &ds else {
        panic!("expected a single series, got {ds:?}");
    };
    assert_eq!(series.key, "Sales");
    assert_eq!(series.values[0].value, 4.0);
    assert_eq!(series.values[0].x, None);
}

#[test]
fn load_ndjson_as_multi_series() {
    let ds = load_json_from_path("tests/fixtures/series.ndjson").unwrap();

    assert_eq!(ds.data_type(), DataType::MultiSeries);
    let keys: Vec<&str> = ds.series().iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["A", "B"]);
}

#[test]
fn object_without_key_is_malformed() {
    let err = load_json_from_path("tests/fixtures/not_a_dataset.json").unwrap_err();
    assert!(matches!(err, SeriesError::MalformedDataset { .. }));
}

#[test]
fn non_numeric_value_names_series_and_point() {
    let input = r#"[{"key":"A","values":[{"key":"x","value":1},{"key":"y","value":true}]}]"#;
    let err = load_json_from_str(input).unwrap_err();

    match &err {
        SeriesError::NonNumeric { series, index, field, .. } => {
            assert_eq!(series, "A");
            assert_eq!(*index, 1);
            assert_eq!(field, "value");
        }
        other => panic!("expected NonNumeric, got {other:?}"),
    }
    assert!(err.to_string().contains("series 'A'"));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_json_from_path("tests/fixtures/does_not_exist.json").unwrap_err();
    assert!(matches!(err, SeriesError::Io(_)));
}

#[test]
fn dataset_round_trips_through_serde() {
    let ds = load_json_from_path("tests/fixtures/multi_series.json").unwrap();
    let text = ds.to_json_string().unwrap();
    let back: Dataset = serde_json::from_str(&text).unwrap();
    assert_eq!(back, ds);
    assert!(text.contains(r#""label":"peak""#));
}
