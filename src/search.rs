//! City search by name.

use serde::Serialize;

use crate::config::SearchConfig;
use crate::map::CityCollection;
use crate::types::FeatureId;

/// State of the search result panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", content = "hits", rename_all = "snake_case")]
pub enum SearchResults {
    /// Query too short, or panel dismissed.
    #[default]
    Hidden,
    /// Panel shows "No cities found".
    NoMatches,
    Matches(Vec<SearchHit>),
}

impl SearchResults {
    #[inline] pub fn is_hidden(&self) -> bool { matches!(self, SearchResults::Hidden) }

    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchResults::Matches(hits) => hits,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: FeatureId,
    pub label: String,
}

/// Case-insensitive substring search over "name" and "name, state".
///
/// Matches keep collection order and are capped at `config.max_results`.
pub fn search(collection: &CityCollection, query: &str, config: &SearchConfig) -> SearchResults {
    if query.chars().count() < config.min_query_len { return SearchResults::Hidden }

    let needle = query.to_lowercase();
    let hits: Vec<SearchHit> = collection.iter()
        .filter_map(|feature| {
            let label = feature.label();
            let matched = feature.name().to_lowercase().contains(&needle)
                || label.to_lowercase().contains(&needle);
            matched.then_some(SearchHit { id: feature.id, label })
        })
        .take(config.max_results)
        .collect();

    if hits.is_empty() { SearchResults::NoMatches } else { SearchResults::Matches(hits) }
}
