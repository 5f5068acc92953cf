//! # Core Search Logic
//!
//! Everything the widget does, independent of any UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (flags, list)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • view (result model)  │
//!                    │  • debounce (timer)     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │    API     │
//!     │  Adapter   │                          │  (npms.io) │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `SearchState`, every flag and the suggestion list
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`view`]: derives the visible result region from state
//! - [`debounce`]: cancellable scheduling and the debounced dispatcher
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod debounce;
pub mod state;
pub mod view;
