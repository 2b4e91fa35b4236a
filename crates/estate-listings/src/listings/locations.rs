use serde::{Deserialize, Serialize};

const BUNDLED_LOCATIONS: &str = include_str!("../../data/locations.json");

const DEFAULT_SUGGESTIONS: usize = 8;
const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    pub name: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub search_terms: Vec<String>,
}

impl LocationEntry {
    fn matches(&self, normalized_query: &str) -> bool {
        self.search_terms.iter().any(|term| {
            let term = term.to_lowercase();
            term.contains(normalized_query) || normalized_query.contains(&term)
        })
    }
}

/// Lookup table backing the location autocomplete.
#[derive(Debug, Clone, Default)]
pub struct LocationDirectory {
    entries: Vec<LocationEntry>,
}

impl LocationDirectory {
    pub fn new(entries: Vec<LocationEntry>) -> Self {
        Self { entries }
    }

    pub fn bundled() -> Result<Self, serde_json::Error> {
        serde_json::from_str(BUNDLED_LOCATIONS).map(Self::new)
    }

    /// A blank query returns the first few entries. Otherwise an entry matches
    /// when a search term contains the query or the query contains the term.
    pub fn suggest(&self, query: &str) -> Vec<LocationEntry> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return self.entries.iter().take(DEFAULT_SUGGESTIONS).cloned().collect();
        }

        self.entries
            .iter()
            .filter(|entry| entry.matches(&normalized))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }
}
