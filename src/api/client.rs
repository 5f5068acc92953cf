use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::Suggestion;
use crate::ResponseOrdering;
use crate::core::action::{Action, update};
use crate::core::state::SearchState;

/// Failures of a single suggestion lookup.
///
/// All variants collapse into the same error state once they reach the
/// reducer; the distinction only shows up in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    Request { status: u16, reason: String },
    /// The body did not decode into a list of suggestions.
    Parse(String),
    /// Transport-level failure (DNS, connection refused, reset).
    Network(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request { status, reason } => {
                write!(f, "request error (HTTP {status}): {reason}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait SuggestionClient: Send + Sync {
    /// Returns the name of the backing service.
    fn name(&self) -> &str;

    /// Issues exactly one lookup for `query`. No retries.
    async fn suggestions(&self, query: &str) -> Result<Vec<Suggestion>, FetchError>;
}

/// Runs one lookup and reports its lifecycle as actions:
/// `FetchStarted`, then exactly one of `FetchSucceeded` / `FetchFailed`.
///
/// An empty query sends nothing and makes no request.
pub async fn fetch_suggestions(
    client: &dyn SuggestionClient,
    query: &str,
    request_id: u64,
    tx: &mpsc::Sender<Action>,
) {
    if query.is_empty() {
        debug!("Skipping lookup for empty query");
        return;
    }

    if tx.send(Action::FetchStarted { request_id }).is_err() {
        warn!("Failed to send FetchStarted: receiver dropped");
        return;
    }

    info!(
        "Lookup #{} via {}: q={:?}",
        request_id,
        client.name(),
        query
    );

    let settled = match client.suggestions(query).await {
        Ok(suggestions) => {
            info!(
                "Lookup #{} returned {} suggestions",
                request_id,
                suggestions.len()
            );
            Action::FetchSucceeded {
                request_id,
                suggestions,
            }
        }
        Err(error) => {
            warn!("Lookup #{} failed: {}", request_id, error);
            Action::FetchFailed { request_id, error }
        }
    };

    if tx.send(settled).is_err() {
        warn!("Failed to send lookup #{} result: receiver dropped", request_id);
    }
}

/// The function the debouncer wraps: tags each lookup with the next request
/// id and forwards its lifecycle to the event loop.
#[derive(Clone)]
pub struct SuggestionFetcher {
    client: Arc<dyn SuggestionClient>,
    next_request_id: Arc<AtomicU64>,
    tx: mpsc::Sender<Action>,
}

impl SuggestionFetcher {
    pub fn new(client: Arc<dyn SuggestionClient>, tx: mpsc::Sender<Action>) -> Self {
        Self {
            client,
            next_request_id: Arc::new(AtomicU64::new(1)),
            tx,
        }
    }

    pub async fn fetch(&self, query: String) {
        if query.is_empty() {
            debug!("Skipping lookup for empty query");
            return;
        }
        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        fetch_suggestions(self.client.as_ref(), &query, request_id, &self.tx).await;
    }
}

/// Runs a single lookup with no debounce and folds its lifecycle into a
/// fresh state. Used by the one-shot print mode.
pub async fn search_once(
    client: &dyn SuggestionClient,
    query: &str,
    ordering: ResponseOrdering,
) -> SearchState {
    let (tx, rx) = mpsc::channel();
    let mut state = SearchState::new(ordering);
    update(&mut state, Action::QueryChanged(query.to_string()));

    fetch_suggestions(client, query, 1, &tx).await;
    drop(tx);

    for action in rx.try_iter() {
        update(&mut state, action);
    }
    state
}
