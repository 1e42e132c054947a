use super::prelude::*;
use crate::util::filter::text_matches;

/// Searching starts with queries of this length (after trimming),
/// counted in UTF-16 code units like a browser input field does.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of results per catalog.
pub const MAX_RESULTS_PER_CATALOG: usize = 3;

#[derive(Debug, Default, Clone)]
pub struct SearchResults<'a> {
    pub locations: Vec<&'a Location>,
    pub routes: Vec<&'a Route>,
    pub recommendations: Vec<&'a Recommendation>,
}

impl SearchResults<'_> {
    pub fn len(&self) -> usize {
        self.locations.len() + self.routes.len() + self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn find<'a, T: CatalogItem>(items: &'a [T], lowercase_query: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| text_matches(*item, lowercase_query))
        .take(MAX_RESULTS_PER_CATALOG)
        .collect()
}

/// Search-as-you-type over all catalogs.
///
/// Queries that are too short yield no results instead of an error.
pub fn search<'a, R: CatalogRepo>(repo: &'a R, text: &str) -> SearchResults<'a> {
    if text.trim().encode_utf16().count() < MIN_QUERY_LEN {
        return SearchResults::default();
    }
    let query = text.to_lowercase();
    SearchResults {
        locations: find(repo.all_locations(), &query),
        routes: find(repo.all_routes(), &query),
        recommendations: find(repo.all_recommendations(), &query),
    }
}
