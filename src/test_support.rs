//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{FetchError, Suggestion, SuggestionClient};

/// A suggestion with predictable fields derived from `name`.
pub fn suggestion(name: &str) -> Suggestion {
    Suggestion {
        package_name: name.to_string(),
        version: "1.0.0".to_string(),
        description: Some(format!("Description of {name}")),
        npm_link: format!("https://www.npmjs.com/package/{name}"),
    }
}

/// A client that answers every lookup with the same canned result and
/// records the queries it was asked for.
pub struct StaticClient {
    result: Result<Vec<Suggestion>, FetchError>,
    queries: Mutex<Vec<String>>,
}

impl StaticClient {
    pub fn ok(suggestions: Vec<Suggestion>) -> Self {
        Self {
            result: Ok(suggestions),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn err(error: FetchError) -> Self {
        Self {
            result: Err(error),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuggestionClient for StaticClient {
    fn name(&self) -> &str {
        "static"
    }

    async fn suggestions(&self, query: &str) -> Result<Vec<Suggestion>, FetchError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.result.clone()
    }
}
