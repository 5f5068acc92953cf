//! npmsearch library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How completions of overlapping lookups are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// Drop completions of lookups older than the newest one started.
    #[default]
    LatestDispatched,
    /// Apply every completion as it settles; the last to settle wins.
    LastToSettle,
}

impl ResponseOrdering {
    /// Parses the kebab-case name used in config files and env vars.
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }
}
