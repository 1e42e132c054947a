use crate::{geo::*, item::*, price::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id          : ItemId,
    pub name        : String,
    pub category    : String,
    pub subcategory : String,
    pub price       : PriceTier,
    /// Curated rating, independent of user reviews.
    pub rating      : f64,
    pub description : String,
    pub address     : Option<String>,
    pub pos         : Option<MapPoint>,
    pub image       : Option<String>,
    pub highlights  : Vec<String>,
    pub tips        : Option<String>,
}

impl CatalogItem for Recommendation {
    const KIND: ItemKind = ItemKind::Recommendation;

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
