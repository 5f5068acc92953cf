use serde::{Deserialize, Serialize};

// ============================================================================
// npms.io Suggestions API Types
// ============================================================================

/// One element of the suggestions array. npms.io also sends `score`,
/// `searchScore` and `highlight`; those are ignored.
#[derive(Deserialize, Debug)]
pub struct SuggestionEntry {
    pub package: PackageInfo,
}

/// The nested `package` object of a suggestion entry.
#[derive(Deserialize, Debug)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    pub links: PackageLinks,
}

#[derive(Deserialize, Debug)]
pub struct PackageLinks {
    pub npm: String,
}

// ============================================================================
// Domain Types
// ============================================================================

/// One candidate package returned by the suggestion endpoint.
///
/// Immutable once received; fields are taken verbatim from the response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub package_name: String,
    pub version: String,
    pub description: Option<String>,
    pub npm_link: String,
}

impl From<SuggestionEntry> for Suggestion {
    fn from(entry: SuggestionEntry) -> Self {
        let PackageInfo {
            name,
            version,
            description,
            links,
        } = entry.package;
        Suggestion {
            package_name: name,
            version,
            description,
            npm_link: links.npm,
        }
    }
}

/// Decodes a suggestions response body, preserving server order.
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, serde_json::Error> {
    let entries: Vec<SuggestionEntry> = serde_json::from_str(body)?;
    Ok(entries.into_iter().map(Suggestion::from).collect())
}
