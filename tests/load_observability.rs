use std::sync::{Arc, Mutex};

use series_summary::ingestion::{
    load_from_path, LoadContext, LoadFormat, LoadObserver, LoadOptions, LoadSeverity, LoadStats,
};
use series_summary::SeriesError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<LoadStats>>,
    failures: Mutex<Vec<LoadSeverity>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &SeriesError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &SeriesError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options(obs: &Arc<RecordingObserver>, format: Option<LoadFormat>) -> LoadOptions {
    LoadOptions {
        format,
        observer: Some(obs.clone()),
        alert_at_or_above: LoadSeverity::Critical,
    }
}

#[test]
fn observer_receives_success_with_counts() {
    let obs = Arc::new(RecordingObserver::default());
    let _ = load_from_path("tests/fixtures/regions.csv", &options(&obs, None)).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(successes, vec![LoadStats { series: 3, points: 8 }]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options(&obs, Some(LoadFormat::Json));

    // Missing file -> Io error -> Critical
    let _ = load_from_path("tests/fixtures/does_not_exist.json", &opts).unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![LoadSeverity::Critical]);
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![LoadSeverity::Critical]);
}

#[test]
fn missing_csv_is_also_critical() {
    let obs = Arc::new(RecordingObserver::default());
    let _ = load_from_path("tests/fixtures/does_not_exist.csv", &options(&obs, None)).unwrap_err();
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![LoadSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_bad_data() {
    let obs = Arc::new(RecordingObserver::default());
    let _ = load_from_path("tests/fixtures/bad_value.csv", &options(&obs, None)).unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![LoadSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn unknown_extension_needs_an_explicit_format() {
    let err = load_from_path("tests/fixtures/regions.txt", &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, SeriesError::MalformedDataset { .. }));
}
