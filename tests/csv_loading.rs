use series_summary::ingestion::csv::load_csv_from_path;
use series_summary::types::DataType;
use series_summary::SeriesError;

#[test]
fn load_wide_csv_happy_path() {
    let ds = load_csv_from_path("tests/fixtures/regions.csv").unwrap();

    assert_eq!(ds.data_type(), DataType::MultiSeries);
    let keys: Vec<&str> = ds.series().iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["North", "South", "East"]);
    assert_eq!(ds.series()[0].values[2].key, "Q3");
    assert_eq!(ds.series()[0].values[2].value, 30.0);
    assert_eq!(ds.series()[2].values[0].value, 1.5);
}

#[test]
fn empty_cell_leaves_a_gap() {
    let ds = load_csv_from_path("tests/fixtures/regions.csv").unwrap();
    let south: Vec<&str> = ds.series()[1].values.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(south, vec!["Q1", "Q3"]);
}

#[test]
fn non_numeric_cell_reports_row_and_column() {
    let err = load_csv_from_path("tests/fixtures/bad_value.csv").unwrap_err();
    assert!(matches!(err, SeriesError::NonNumeric { .. }));
    let msg = err.to_string();
    assert!(msg.contains("series 'North'"));
    assert!(msg.contains("column 'Q2'"));
    assert!(msg.contains("raw=lots"));
}

#[test]
fn missing_file_is_csv_error() {
    let err = load_csv_from_path("tests/fixtures/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, SeriesError::Csv(_)));
}
