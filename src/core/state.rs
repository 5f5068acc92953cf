//! # Search State
//!
//! Everything the search widget knows, in one place. No terminal types.
//!
//! ```text
//! SearchState
//! ├── query: String                  // raw input, updated on every keystroke
//! ├── suggestions: Vec<Suggestion>   // replaced wholesale on each success
//! ├── is_loading: bool               // a lookup is in flight
//! ├── has_error: bool                // the last settled lookup failed
//! ├── is_visible: bool               // results may be shown (false after blur)
//! ├── ordering: ResponseOrdering     // how overlapping lookups are resolved
//! └── latest_request: Option<u64>    // newest lookup id seen starting
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::ResponseOrdering;
use crate::api::Suggestion;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    pub is_loading: bool,
    pub has_error: bool,
    pub is_visible: bool,
    pub ordering: ResponseOrdering,
    pub latest_request: Option<u64>,
}

impl SearchState {
    pub fn new(ordering: ResponseOrdering) -> Self {
        Self {
            ordering,
            ..Default::default()
        }
    }

    /// True when a completion for `request_id` should be dropped because a
    /// newer lookup has already started.
    pub fn is_stale(&self, request_id: u64) -> bool {
        match self.ordering {
            ResponseOrdering::LastToSettle => false,
            ResponseOrdering::LatestDispatched => {
                self.latest_request.is_some_and(|latest| request_id < latest)
            }
        }
    }
}
