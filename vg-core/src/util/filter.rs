use crate::entities::*;

/// The pseudo category that matches everything.
pub const ALL: &str = "all";

pub fn category_matches(filter: Option<&str>, category: &str) -> bool {
    match filter {
        None | Some(ALL) => true,
        Some(filter) => filter == category,
    }
}

pub fn price_matches(filter: Option<PriceTier>, price: PriceTier) -> bool {
    filter.map_or(true, |filter| filter == price)
}

/// Case-insensitive substring match on title, description and category.
///
/// The query must already be converted to lower case.
pub fn text_matches<T: CatalogItem>(item: &T, lowercase_query: &str) -> bool {
    [item.title(), item.description(), item.category()]
        .iter()
        .any(|field| field.to_lowercase().contains(lowercase_query))
}
