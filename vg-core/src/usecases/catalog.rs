use std::collections::HashSet;

use super::prelude::*;
use crate::util::filter::{self, category_matches, price_matches};

/// Parameters of the list filters.
///
/// `None` and the pseudo category `all` match every item.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogFilter<'a> {
    pub category: Option<&'a str>,
    pub price: Option<PriceTier>,
}

pub fn parse_price_filter(price: Option<&str>) -> Result<Option<PriceTier>> {
    match price.map(str::trim) {
        None | Some("") | Some(filter::ALL) => Ok(None),
        Some(price) => price.parse().map(Some).map_err(|_| Error::PriceTier),
    }
}

pub fn filter_locations<'a, R: CatalogRepo>(
    repo: &'a R,
    filter: &CatalogFilter,
) -> Vec<&'a Location> {
    repo.all_locations()
        .iter()
        .filter(|l| category_matches(filter.category, &l.category))
        .filter(|l| price_matches(filter.price, l.price))
        .collect()
}

pub fn filter_routes<'a, R: CatalogRepo>(repo: &'a R, filter: &CatalogFilter) -> Vec<&'a Route> {
    repo.all_routes()
        .iter()
        .filter(|r| category_matches(filter.category, &r.category))
        .filter(|r| price_matches(filter.price, r.price))
        .collect()
}

pub fn filter_recommendations<'a, R: CatalogRepo>(
    repo: &'a R,
    filter: &CatalogFilter,
) -> Vec<&'a Recommendation> {
    repo.all_recommendations()
        .iter()
        .filter(|r| category_matches(filter.category, &r.category))
        .filter(|r| price_matches(filter.price, r.price))
        .collect()
}

fn distinct_categories<T: CatalogItem>(items: &[T]) -> Vec<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(CatalogItem::category)
        .filter(|c| seen.insert(*c))
        .collect()
}

/// All categories of a catalog in the order of their first occurrence.
pub fn categories<R: CatalogRepo>(repo: &R, kind: ItemKind) -> Vec<&str> {
    match kind {
        ItemKind::Location => distinct_categories(repo.all_locations()),
        ItemKind::Route => distinct_categories(repo.all_routes()),
        ItemKind::Recommendation => distinct_categories(repo.all_recommendations()),
    }
}

#[derive(Debug, Clone)]
pub struct RouteDetail<'a> {
    pub route: &'a Route,
    pub path: Vec<MapPoint>,
    pub center: MapPoint,
    pub distance: Distance,
}

pub fn route_detail<R: CatalogRepo>(repo: &R, id: ItemId) -> Result<RouteDetail<'_>> {
    let route = repo.get_route(id)?;
    Ok(RouteDetail {
        route,
        path: route.path(),
        center: route.map_center(),
        distance: route.total_distance(),
    })
}

/// A copy of a catalog entry as it is stored in the favorites.
pub fn catalog_item<R: CatalogRepo>(repo: &R, kind: ItemKind, id: ItemId) -> Result<FavoriteItem> {
    let item = match kind {
        ItemKind::Location => repo.get_location(id)?.clone().into(),
        ItemKind::Route => repo.get_route(id)?.clone().into(),
        ItemKind::Recommendation => repo.get_recommendation(id)?.clone().into(),
    };
    Ok(item)
}

pub fn item_exists<R: CatalogRepo>(repo: &R, kind: ItemKind, id: ItemId) -> bool {
    match kind {
        ItemKind::Location => repo.get_location(id).is_ok(),
        ItemKind::Route => repo.get_route(id).is_ok(),
        ItemKind::Recommendation => repo.get_recommendation(id).is_ok(),
    }
}
