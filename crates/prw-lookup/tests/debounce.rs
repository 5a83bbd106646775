use std::sync::{Arc, Mutex};
use std::time::Duration;

use prw_lookup::{DebouncedLookup, LookupError, LookupSettings, OptionSearch};
use prw_model::SelectOption;
use tokio::sync::mpsc;
use tokio::time;

/// Search source that records every query it receives.
#[derive(Clone, Default)]
struct RecordingSearch {
    queries: Arc<Mutex<Vec<String>>>,
    fail: bool,
    latency: Duration,
}

impl RecordingSearch {
    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl OptionSearch for RecordingSearch {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = prw_lookup::Result<Vec<SelectOption>>> + Send {
        self.queries.lock().unwrap().push(query.to_string());
        let fail = self.fail;
        let latency = self.latency;
        let query = query.to_string();
        async move {
            time::sleep(latency).await;
            if fail {
                Err(LookupError::remote("connection reset"))
            } else {
                Ok(vec![SelectOption::new(query.clone(), query.as_str(), query.as_str())])
            }
        }
    }
}

fn lookup(
    source: RecordingSearch,
    settings: LookupSettings,
) -> (
    DebouncedLookup<RecordingSearch>,
    mpsc::UnboundedReceiver<Vec<SelectOption>>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let lookup = DebouncedLookup::new(source, settings, move |options| {
        let _ = tx.send(options);
    })
    .unwrap();
    (lookup, rx)
}

#[tokio::test(start_paused = true)]
async fn burst_within_window_dispatches_last_query_once() {
    let source = RecordingSearch::default();
    let (mut lookup, mut rx) = lookup(source.clone(), LookupSettings::default());

    for query in ["b", "bs", "bsb", "bsbw"] {
        lookup.schedule(query);
        time::sleep(Duration::from_millis(100)).await;
    }
    time::sleep(Duration::from_millis(600)).await;

    assert_eq!(source.queries(), vec!["bsbw".to_string()]);
    let delivered = rx.try_recv().unwrap();
    assert_eq!(delivered[0].label, "bsbw");
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn separate_windows_dispatch_separately() {
    let source = RecordingSearch::default();
    let (mut lookup, mut rx) = lookup(source.clone(), LookupSettings::default());

    lookup.schedule("tae");
    time::sleep(Duration::from_millis(700)).await;
    lookup.schedule("bsb");
    time::sleep(Duration::from_millis(700)).await;

    assert_eq!(source.queries(), vec!["tae".to_string(), "bsb".to_string()]);
    assert_eq!(rx.try_recv().unwrap()[0].label, "tae");
    assert_eq!(rx.try_recv().unwrap()[0].label, "bsb");
}

#[tokio::test(start_paused = true)]
async fn nothing_dispatched_before_quiet_interval() {
    let source = RecordingSearch::default();
    let (mut lookup, mut rx) = lookup(source.clone(), LookupSettings::default());

    lookup.schedule("cert");
    time::sleep(Duration::from_millis(499)).await;
    assert!(source.queries().is_empty());
    assert!(lookup.is_pending());
    assert!(rx.try_recv().is_err());

    time::sleep(Duration::from_millis(10)).await;
    assert_eq!(source.queries().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_search_delivers_no_options() {
    let source = RecordingSearch {
        fail: true,
        ..RecordingSearch::default()
    };
    let (mut lookup, mut rx) = lookup(source, LookupSettings::default());

    lookup.schedule("hlt");
    time::sleep(Duration::from_millis(600)).await;

    assert!(rx.try_recv().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn result_superseded_in_flight_is_not_delivered() {
    let source = RecordingSearch {
        latency: Duration::from_millis(1_000),
        ..RecordingSearch::default()
    };
    let (mut lookup, mut rx) = lookup(source.clone(), LookupSettings::default());

    lookup.schedule("first");
    // Dispatched at 500ms, still in flight at 700ms
    time::sleep(Duration::from_millis(700)).await;
    lookup.schedule("second");
    time::sleep(Duration::from_millis(3_000)).await;

    assert_eq!(
        source.queries(),
        vec!["first".to_string(), "second".to_string()]
    );
    assert_eq!(rx.try_recv().unwrap()[0].label, "second");
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn short_queries_settle_empty_without_dispatch() {
    let source = RecordingSearch::default();
    let settings = LookupSettings {
        min_query_len: 3,
        ..LookupSettings::default()
    };
    let (mut lookup, mut rx) = lookup(source.clone(), settings);

    lookup.schedule("ab");
    time::sleep(Duration::from_millis(600)).await;

    assert!(source.queries().is_empty());
    assert!(rx.try_recv().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancel_drops_pending_query() {
    let source = RecordingSearch::default();
    let (mut lookup, mut rx) = lookup(source.clone(), LookupSettings::default());

    lookup.schedule("sit");
    lookup.cancel();
    time::sleep(Duration::from_millis(600)).await;

    assert!(source.queries().is_empty());
    assert!(rx.try_recv().is_err());
    assert!(!lookup.is_pending());
}
