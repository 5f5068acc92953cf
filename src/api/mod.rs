pub mod client;
pub mod npms;
pub mod types;

pub use client::{FetchError, SuggestionClient, SuggestionFetcher, fetch_suggestions, search_once};
pub use npms::NpmsClient;
pub use types::Suggestion;
