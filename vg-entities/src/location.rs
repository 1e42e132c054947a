use crate::{geo::*, item::*, price::*};

/// A point of interest shown on the map.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id          : ItemId,
    pub name        : String,
    pub category    : String,
    pub price       : PriceTier,
    pub pos         : MapPoint,
    pub description : String,
    pub tips        : Option<String>,
    pub image       : Option<String>,
}

impl CatalogItem for Location {
    const KIND: ItemKind = ItemKind::Location;

    fn id(&self) -> ItemId {
        self.id
    }
    fn title(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn category(&self) -> &str {
        &self.category
    }
}
