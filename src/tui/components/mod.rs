//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: tool name and key hint
//! - `SearchButton`: focusable button beside the input
//! - `ResultList`: draws a `core::view::ResultsView`
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchInput`: the query field; emits `InputEvent::Changed`
//!
//! Components receive external data as props (struct fields), never by
//! reaching into `SearchState` themselves.

pub mod result_list;
pub mod search_button;
pub mod search_input;
pub mod title_bar;

pub use result_list::ResultList;
pub use search_button::SearchButton;
pub use search_input::{InputEvent, SearchInput};
pub use title_bar::TitleBar;
