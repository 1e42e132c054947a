use itertools::chain;

use crate::{item::*, location::*, recommendation::*, route::*};

/// A saved copy of a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteItem {
    Location(Location),
    Route(Route),
    Recommendation(Recommendation),
}

impl FavoriteItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Location(_) => ItemKind::Location,
            Self::Route(_) => ItemKind::Route,
            Self::Recommendation(_) => ItemKind::Recommendation,
        }
    }

    pub fn id(&self) -> ItemId {
        match self {
            Self::Location(x) => x.id,
            Self::Route(x) => x.id,
            Self::Recommendation(x) => x.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Location(x) => x.title(),
            Self::Route(x) => x.title(),
            Self::Recommendation(x) => x.title(),
        }
    }
}

impl From<Location> for FavoriteItem {
    fn from(from: Location) -> Self {
        Self::Location(from)
    }
}

impl From<Route> for FavoriteItem {
    fn from(from: Route) -> Self {
        Self::Route(from)
    }
}

impl From<Recommendation> for FavoriteItem {
    fn from(from: Recommendation) -> Self {
        Self::Recommendation(from)
    }
}

/// Favorites of a single client, one bucket per catalog.
///
/// Every bucket contains each id at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    pub locations: Vec<Location>,
    pub routes: Vec<Route>,
    pub recommendations: Vec<Recommendation>,
}

fn bucket_contains<T: CatalogItem>(bucket: &[T], id: ItemId) -> bool {
    bucket.iter().any(|x| x.id() == id)
}

fn add_to_bucket<T: CatalogItem>(bucket: &mut Vec<T>, item: T) -> bool {
    if bucket_contains(bucket, item.id()) {
        return false;
    }
    bucket.push(item);
    true
}

fn remove_from_bucket<T: CatalogItem>(bucket: &mut Vec<T>, id: ItemId) -> bool {
    let len_before = bucket.len();
    bucket.retain(|x| x.id() != id);
    bucket.len() < len_before
}

impl Favorites {
    pub fn contains(&self, kind: ItemKind, id: ItemId) -> bool {
        match kind {
            ItemKind::Location => bucket_contains(&self.locations, id),
            ItemKind::Route => bucket_contains(&self.routes, id),
            ItemKind::Recommendation => bucket_contains(&self.recommendations, id),
        }
    }

    /// Returns `false` if an item with the same id has already been added.
    pub fn add(&mut self, item: FavoriteItem) -> bool {
        match item {
            FavoriteItem::Location(x) => add_to_bucket(&mut self.locations, x),
            FavoriteItem::Route(x) => add_to_bucket(&mut self.routes, x),
            FavoriteItem::Recommendation(x) => add_to_bucket(&mut self.recommendations, x),
        }
    }

    /// Returns `false` if there was nothing to remove.
    pub fn remove(&mut self, kind: ItemKind, id: ItemId) -> bool {
        match kind {
            ItemKind::Location => remove_from_bucket(&mut self.locations, id),
            ItemKind::Route => remove_from_bucket(&mut self.routes, id),
            ItemKind::Recommendation => remove_from_bucket(&mut self.recommendations, id),
        }
    }

    /// Adds a missing or removes an existing item and returns
    /// whether the item is a favorite afterwards.
    pub fn toggle(&mut self, item: FavoriteItem) -> bool {
        if self.remove(item.kind(), item.id()) {
            false
        } else {
            self.add(item)
        }
    }

    pub fn count(&self) -> usize {
        self.locations.len() + self.routes.len() + self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// All items of a single bucket or of all buckets if `kind` is `None`.
    pub fn items(&self, kind: Option<ItemKind>) -> Vec<FavoriteItem> {
        let locations = self.locations.iter().cloned().map(FavoriteItem::from);
        let routes = self.routes.iter().cloned().map(FavoriteItem::from);
        let recommendations = self
            .recommendations
            .iter()
            .cloned()
            .map(FavoriteItem::from);
        match kind {
            None => chain!(locations, routes, recommendations).collect(),
            Some(ItemKind::Location) => locations.collect(),
            Some(ItemKind::Route) => routes.collect(),
            Some(ItemKind::Recommendation) => recommendations.collect(),
        }
    }
}
