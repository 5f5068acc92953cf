//! End-to-end flow: keystrokes → debouncer → npms client (mocked) → reducer.

use std::sync::{Arc, mpsc};
use std::time::Duration;

use npmsearch::ResponseOrdering;
use npmsearch::api::{NpmsClient, SuggestionFetcher};
use npmsearch::core::action::Action;
use npmsearch::core::debounce::Debouncer;
use npmsearch::core::state::SearchState;
use npmsearch::core::view::{ERROR_MESSAGE, render_results};
use npmsearch::tui::event::TuiEvent;
use npmsearch::tui::{TuiState, apply_action, debounced_fetcher, route_event};
use serde_json::{Value, json};
use tokio::time::{Instant, sleep};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Time allowed for debounce + network before a scenario counts as failed.
const SETTLE_TIMEOUT: Duration = Duration::from_millis(1500);

fn suggestions_body(names: &[&str]) -> Value {
    Value::Array(
        names
            .iter()
            .map(|name| {
                json!({
                    "package": {
                        "name": name,
                        "version": "1.0.0",
                        "description": "x".repeat(80),
                        "links": { "npm": format!("https://www.npmjs.com/package/{name}") }
                    }
                })
            })
            .collect(),
    )
}

struct Harness {
    state: SearchState,
    tui: TuiState,
    debouncer: Debouncer<String>,
    rx: mpsc::Receiver<Action>,
}

impl Harness {
    fn new(server: &MockServer, ordering: ResponseOrdering) -> Self {
        let client = Arc::new(NpmsClient::new(Some(format!("{}/suggestions", server.uri()))));
        let (tx, rx) = mpsc::channel();
        Self {
            state: SearchState::new(ordering),
            tui: TuiState::new(),
            debouncer: debounced_fetcher(SuggestionFetcher::new(client, tx)),
            rx,
        }
    }

    fn send(&mut self, event: TuiEvent) {
        if let Some(action) = route_event(&mut self.tui, &event) {
            apply_action(&mut self.state, &mut self.debouncer, action);
        }
    }

    fn drain(&mut self) {
        while let Ok(action) = self.rx.try_recv() {
            apply_action(&mut self.state, &mut self.debouncer, action);
        }
    }

    /// Pumps background actions until `done` holds or `timeout` elapses.
    async fn pump_until(&mut self, timeout: Duration, done: impl Fn(&SearchState) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.drain();
            if done(&self.state) {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            sleep(Duration::from_millis(10)).await;
        }
    }
}

// ============================================================================
// Flow Tests
// ============================================================================

#[tokio::test]
async fn test_typing_burst_sends_one_request_and_shows_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "react"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suggestions_body(&["react", "react-dom"])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suggestions_body(&[])))
        .with_priority(10)
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut harness = Harness::new(&mock_server, ResponseOrdering::LatestDispatched);
    for c in "react".chars() {
        harness.send(TuiEvent::InputChar(c));
        sleep(Duration::from_millis(40)).await;
    }
    assert_eq!(harness.state.query, "react");

    let shown = harness
        .pump_until(SETTLE_TIMEOUT, |s| !render_results(s).rows.is_empty())
        .await;
    assert!(shown, "suggestions should be visible within the settle window");

    let view = render_results(&harness.state);
    assert_eq!(view.rows[0].name, "react");
    assert_eq!(view.rows[0].description, format!("{}...", "x".repeat(50)));
    assert!(!harness.state.is_loading);

    mock_server.verify().await;
}

#[tokio::test]
async fn test_bad_request_shows_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "&*()"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let mut harness = Harness::new(&mock_server, ResponseOrdering::LatestDispatched);
    harness.send(TuiEvent::Paste("&*()".to_string()));

    let errored = harness
        .pump_until(SETTLE_TIMEOUT, |s| render_results(s).error.is_some())
        .await;
    assert!(errored, "error message should appear within the settle window");
    assert_eq!(render_results(&harness.state).error, Some(ERROR_MESSAGE));
    assert!(!harness.state.is_loading);
}

#[tokio::test]
async fn test_clearing_input_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suggestions_body(&["a"])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut harness = Harness::new(&mock_server, ResponseOrdering::LatestDispatched);
    harness.send(TuiEvent::InputChar('a'));
    harness.send(TuiEvent::Backspace);

    sleep(Duration::from_millis(800)).await;
    harness.drain();

    assert!(harness.state.query.is_empty());
    assert!(!harness.state.is_loading);
    assert!(!harness.state.has_error);
    assert!(harness.state.suggestions.is_empty());
    mock_server.verify().await;
}

#[tokio::test]
async fn test_blur_hides_without_clearing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suggestions_body(&["vue"])))
        .mount(&mock_server)
        .await;

    let mut harness = Harness::new(&mock_server, ResponseOrdering::LatestDispatched);
    harness.send(TuiEvent::Paste("vue".to_string()));
    assert!(harness.pump_until(SETTLE_TIMEOUT, |s| s.is_visible).await);

    harness.send(TuiEvent::FocusLost);

    assert!(!harness.state.is_visible);
    assert!(render_results(&harness.state).rows.is_empty());
    assert_eq!(harness.state.suggestions.len(), 1);
    assert_eq!(harness.state.query, "vue");
}

/// Dispatches `slow` (delayed response), then `fast` once `slow` is in flight.
async fn overlapping_lookups(ordering: ResponseOrdering) -> SearchState {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(suggestions_body(&["slow-result"]))
                .set_delay(Duration::from_millis(900)),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "fast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(suggestions_body(&["fast-result"])))
        .mount(&mock_server)
        .await;

    let mut harness = Harness::new(&mock_server, ordering);
    harness.send(TuiEvent::Paste("slow".to_string()));
    assert!(harness.pump_until(SETTLE_TIMEOUT, |s| s.is_loading).await);

    apply_action(
        &mut harness.state,
        &mut harness.debouncer,
        Action::QueryChanged("fast".to_string()),
    );

    // Long enough for both lookups to settle
    sleep(Duration::from_millis(1500)).await;
    harness.drain();
    harness.state
}

#[tokio::test]
async fn test_latest_dispatched_discards_late_older_response() {
    let state = overlapping_lookups(ResponseOrdering::LatestDispatched).await;
    assert!(!state.is_loading);
    assert_eq!(state.suggestions[0].package_name, "fast-result");
}

#[tokio::test]
async fn test_last_to_settle_lets_late_response_win() {
    let state = overlapping_lookups(ResponseOrdering::LastToSettle).await;
    assert!(!state.is_loading);
    assert_eq!(state.suggestions[0].package_name, "slow-result");
}
