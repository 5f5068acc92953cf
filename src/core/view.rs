//! # Result View
//!
//! Derives what the result region shows from the four display inputs
//! (loading, error, visible, suggestions). Pure and terminal-agnostic; the
//! TUI draws whatever `render_results` returns.

use crate::api::Suggestion;
use crate::core::state::SearchState;

/// At most this many suggestions are shown.
pub const MAX_RESULTS: usize = 10;
/// Descriptions longer than this many characters are cut.
pub const MAX_DESCRIPTION_LEN: usize = 50;
pub const ELLIPSIS: &str = "...";
pub const LOADING_INDICATOR: &str = "...";
pub const ERROR_MESSAGE: &str = "Error getting results, please try again!";

/// One rendered suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    pub name: String,
    pub description: String,
    pub version: String,
    pub link: String,
}

impl From<&Suggestion> for SuggestionRow {
    fn from(suggestion: &Suggestion) -> Self {
        Self {
            name: suggestion.package_name.clone(),
            description: truncate_description(suggestion.description.as_deref()),
            version: suggestion.version.clone(),
            link: suggestion.npm_link.clone(),
        }
    }
}

/// Contents of the result region.
///
/// `loading` and `error` are independent; `rows` is empty whenever either
/// is set or the results are hidden.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsView {
    pub loading: bool,
    pub error: Option<&'static str>,
    pub rows: Vec<SuggestionRow>,
}

impl ResultsView {
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.rows.is_empty()
    }

    /// Plain-text rendering, one line per element.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.loading {
            lines.push(LOADING_INDICATOR.to_string());
        }
        if let Some(error) = self.error {
            lines.push(error.to_string());
        }
        for row in &self.rows {
            lines.push(format!("{} {}", row.name, row.version));
            if !row.description.is_empty() {
                lines.push(format!("  {}", row.description));
            }
            lines.push(format!("  {}", row.link));
        }
        lines
    }
}

pub fn render_results(state: &SearchState) -> ResultsView {
    let show_rows = !state.is_loading
        && !state.has_error
        && state.is_visible
        && !state.suggestions.is_empty();

    ResultsView {
        loading: state.is_loading,
        error: state.has_error.then_some(ERROR_MESSAGE),
        rows: if show_rows {
            state
                .suggestions
                .iter()
                .take(MAX_RESULTS)
                .map(SuggestionRow::from)
                .collect()
        } else {
            Vec::new()
        },
    }
}

/// Cuts descriptions longer than `MAX_DESCRIPTION_LEN` characters and marks
/// the cut with `ELLIPSIS`. Absent descriptions render as empty.
pub fn truncate_description(description: Option<&str>) -> String {
    let Some(description) = description else {
        return String::new();
    };
    match description.char_indices().nth(MAX_DESCRIPTION_LEN) {
        Some((cut, _)) => format!("{}{}", &description[..cut], ELLIPSIS),
        None => description.to_string(),
    }
}
