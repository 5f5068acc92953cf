//! # Actions
//!
//! Everything that can happen in the widget becomes an `Action`.
//! User types a character? That's `Action::QueryChanged(text)`.
//! A lookup settles? That's `Action::FetchSucceeded { .. }` or `FetchFailed`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the
//! caller must perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Implicit state machine over (loading, error, visible):
//!
//! ```text
//! Idle(F,F,F) ──lookup starts──▶ Loading(T,F,prev)
//! Loading     ──success───────▶ Idle(F,F,T), list replaced
//! Loading     ──failure───────▶ Idle(F,T,prev), list kept
//! any         ──blur──────────▶ same, visible = F
//! ```

use log::{debug, info};

use crate::api::{FetchError, Suggestion};
use crate::core::state::SearchState;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The input's raw value changed (any edit, including to empty).
    QueryChanged(String),
    /// The input lost focus.
    Blur,
    /// A lookup for a non-empty query has been issued.
    FetchStarted { request_id: u64 },
    FetchSucceeded {
        request_id: u64,
        suggestions: Vec<Suggestion>,
    },
    FetchFailed { request_id: u64, error: FetchError },
    Quit,
}

/// Work the caller must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Hand the raw query to the debounced dispatcher.
    Dispatch(String),
    Quit,
}

pub fn update(state: &mut SearchState, action: Action) -> Effect {
    match action {
        Action::QueryChanged(raw) => {
            state.query.clone_from(&raw);
            Effect::Dispatch(raw)
        }
        Action::Blur => {
            debug!("Input blurred, hiding results");
            state.is_visible = false;
            Effect::None
        }
        Action::FetchStarted { request_id } => {
            state.latest_request = Some(
                state
                    .latest_request
                    .map_or(request_id, |latest| latest.max(request_id)),
            );
            state.is_loading = true;
            state.has_error = false;
            Effect::None
        }
        Action::FetchSucceeded {
            request_id,
            suggestions,
        } => {
            if state.is_stale(request_id) {
                info!("Discarding stale result for lookup #{}", request_id);
                return Effect::None;
            }
            state.suggestions = suggestions;
            state.is_visible = true;
            state.is_loading = false;
            Effect::None
        }
        Action::FetchFailed { request_id, error } => {
            if state.is_stale(request_id) {
                info!(
                    "Discarding stale failure for lookup #{}: {}",
                    request_id, error
                );
                return Effect::None;
            }
            state.has_error = true;
            state.is_loading = false;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
