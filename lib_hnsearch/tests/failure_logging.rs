//! Checks the log records emitted by `search_news`.
//!
//! Lives in its own test binary because it installs the global logger.

mod common;

use std::sync::Mutex;
use std::time::Duration;

use common::{Behavior, MockApi};
use lib_hnsearch::NewsSearchClient;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl CaptureLogger {
    fn take(&self) -> Vec<(Level, String)> {
        std::mem::take(&mut *self.records.lock().unwrap())
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if record.target().starts_with("lib_hnsearch") {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

#[tokio::test]
async fn each_search_emits_exactly_one_record() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let ok = MockApi::start(Behavior::Json(json!({"hits": []}))).await;
    let client = NewsSearchClient::new(&ok.options(2_000)).unwrap();
    assert!(client.search_news("rust").await.is_some());

    let records = LOGGER.take();
    assert_eq!(records.len(), 1, "expected only the result record, got {records:?}");
    assert_eq!(records[0].0, Level::Debug);
    assert!(records[0].1.contains(r#"{"hits":[]}"#));

    let stalled = MockApi::start(Behavior::Stall(Duration::from_secs(5))).await;
    let client = NewsSearchClient::new(&stalled.options(200)).unwrap();
    assert_eq!(client.search_news("rust").await, None);

    let records = LOGGER.take();
    assert_eq!(records.len(), 1, "expected one diagnostic, got {records:?}");
    assert_eq!(records[0].0, Level::Error);
    assert!(records[0].1.contains("Timeout"));
}
