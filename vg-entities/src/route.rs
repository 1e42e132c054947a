use strum::{Display, EnumString};

use crate::{geo::*, item::*, price::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

/// An ordered waypoint within a [`Route`].
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub order       : u32,
    pub name        : String,
    pub pos         : MapPoint,
    pub description : String,
    pub duration    : Option<String>,
    pub tips        : Option<String>,
}

/// A curated walking itinerary.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id          : ItemId,
    pub title       : String,
    pub description : String,
    pub category    : String,
    pub difficulty  : Difficulty,
    pub duration    : String,
    pub price       : PriceTier,
    pub image       : Option<String>,
    pub highlights  : Vec<String>,
    pub stops       : Vec<Stop>,
}

impl Route {
    /// The stops sorted by their order number.
    pub fn ordered_stops(&self) -> Vec<&Stop> {
        let mut stops: Vec<_> = self.stops.iter().collect();
        stops.sort_by_key(|s| s.order);
        stops
    }

    /// The polyline connecting all stops.
    pub fn path(&self) -> Vec<MapPoint> {
        self.ordered_stops().into_iter().map(|s| s.pos).collect()
    }

    /// The first stop or the center of Venice for routes without stops.
    pub fn map_center(&self) -> MapPoint {
        self.ordered_stops()
            .first()
            .map(|s| s.pos)
            .unwrap_or(VENICE_CENTER)
    }

    /// Sum of the great-circle distances between consecutive stops.
    pub fn total_distance(&self) -> Distance {
        self.path()
            .windows(2)
            .filter_map(|w| MapPoint::distance(w[0], w[1]))
            .sum()
    }
}

impl CatalogItem for Route {
    const KIND: ItemKind = ItemKind::Route;

    fn id(&self) -> ItemId {
        self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn category(&self) -> &str {
        &self.category
    }
}
