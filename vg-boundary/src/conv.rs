use super::*;
use vg_entities as e;

#[derive(Debug)]
#[cfg_attr(feature = "extra-derive", derive(thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("Invalid catalog entry {id}: {reason}"))]
pub struct InvalidCatalogEntry {
    pub id: u32,
    pub reason: &'static str,
}

fn try_map_point(id: u32, lat: f64, lng: f64) -> Result<e::geo::MapPoint, InvalidCatalogEntry> {
    e::geo::MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(InvalidCatalogEntry {
        id,
        reason: "coordinates out of range",
    })
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        Self {
            lat: from.lat(),
            lng: from.lng(),
        }
    }
}

impl From<e::item::ItemKind> for ItemKind {
    fn from(from: e::item::ItemKind) -> Self {
        use e::item::ItemKind as E;
        match from {
            E::Location => Self::Location,
            E::Route => Self::Route,
            E::Recommendation => Self::Recommendation,
        }
    }
}

impl From<ItemKind> for e::item::ItemKind {
    fn from(from: ItemKind) -> Self {
        match from {
            ItemKind::Location => Self::Location,
            ItemKind::Route => Self::Route,
            ItemKind::Recommendation => Self::Recommendation,
        }
    }
}

impl From<e::price::PriceTier> for PriceTier {
    fn from(from: e::price::PriceTier) -> Self {
        use e::price::PriceTier as E;
        match from {
            E::Free => Self::Free,
            E::Budget => Self::Budget,
            E::Premium => Self::Premium,
        }
    }
}

impl From<PriceTier> for e::price::PriceTier {
    fn from(from: PriceTier) -> Self {
        match from {
            PriceTier::Free => Self::Free,
            PriceTier::Budget => Self::Budget,
            PriceTier::Premium => Self::Premium,
        }
    }
}

impl From<e::route::Difficulty> for Difficulty {
    fn from(from: e::route::Difficulty) -> Self {
        use e::route::Difficulty as E;
        match from {
            E::Easy => Self::Easy,
            E::Moderate => Self::Moderate,
            E::Hard => Self::Hard,
        }
    }
}

impl From<Difficulty> for e::route::Difficulty {
    fn from(from: Difficulty) -> Self {
        match from {
            Difficulty::Easy => Self::Easy,
            Difficulty::Moderate => Self::Moderate,
            Difficulty::Hard => Self::Hard,
        }
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            name,
            category,
            price,
            pos,
            description,
            tips,
            image,
        } = from;
        Self {
            id: id.into(),
            name,
            category,
            price: price.into(),
            price_label: price.label().to_owned(),
            lat: pos.lat(),
            lng: pos.lng(),
            description,
            tips,
            image,
        }
    }
}

impl TryFrom<Location> for e::location::Location {
    type Error = InvalidCatalogEntry;

    fn try_from(from: Location) -> Result<Self, Self::Error> {
        let Location {
            id,
            name,
            category,
            price,
            price_label: _,
            lat,
            lng,
            description,
            tips,
            image,
        } = from;
        Ok(Self {
            id: id.into(),
            name,
            category,
            price: price.into(),
            pos: try_map_point(id, lat, lng)?,
            description,
            tips,
            image,
        })
    }
}

impl From<e::route::Stop> for Stop {
    fn from(from: e::route::Stop) -> Self {
        let e::route::Stop {
            order,
            name,
            pos,
            description,
            duration,
            tips,
        } = from;
        Self {
            order,
            name,
            lat: pos.lat(),
            lng: pos.lng(),
            description,
            duration,
            tips,
        }
    }
}

impl From<e::route::Route> for Route {
    fn from(from: e::route::Route) -> Self {
        let e::route::Route {
            id,
            title,
            description,
            category,
            difficulty,
            duration,
            price,
            image,
            highlights,
            stops,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            category,
            difficulty: difficulty.into(),
            duration,
            price: price.into(),
            price_label: price.label().to_owned(),
            image,
            highlights,
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<Route> for e::route::Route {
    type Error = InvalidCatalogEntry;

    fn try_from(from: Route) -> Result<Self, Self::Error> {
        let Route {
            id,
            title,
            description,
            category,
            difficulty,
            duration,
            price,
            price_label: _,
            image,
            highlights,
            stops,
        } = from;
        let stops = stops
            .into_iter()
            .map(|s| -> Result<_, InvalidCatalogEntry> {
                Ok(e::route::Stop {
                    order: s.order,
                    pos: try_map_point(id, s.lat, s.lng)?,
                    name: s.name,
                    description: s.description,
                    duration: s.duration,
                    tips: s.tips,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            id: id.into(),
            title,
            description,
            category,
            difficulty: difficulty.into(),
            duration,
            price: price.into(),
            image,
            highlights,
            stops,
        })
    }
}

impl From<e::recommendation::Recommendation> for Recommendation {
    fn from(from: e::recommendation::Recommendation) -> Self {
        let e::recommendation::Recommendation {
            id,
            name,
            category,
            subcategory,
            price,
            rating,
            description,
            address,
            pos,
            image,
            highlights,
            tips,
        } = from;
        Self {
            id: id.into(),
            name,
            category,
            subcategory,
            price: price.into(),
            price_label: price.label().to_owned(),
            rating,
            description,
            address,
            coordinates: pos.map(Into::into),
            image,
            highlights,
            tips,
        }
    }
}

impl TryFrom<Recommendation> for e::recommendation::Recommendation {
    type Error = InvalidCatalogEntry;

    fn try_from(from: Recommendation) -> Result<Self, Self::Error> {
        let Recommendation {
            id,
            name,
            category,
            subcategory,
            price,
            price_label: _,
            rating,
            description,
            address,
            coordinates,
            image,
            highlights,
            tips,
        } = from;
        if !(0.0..=5.0).contains(&rating) {
            return Err(InvalidCatalogEntry {
                id,
                reason: "rating out of range",
            });
        }
        let pos = coordinates
            .map(|Coordinate { lat, lng }| try_map_point(id, lat, lng))
            .transpose()?;
        Ok(Self {
            id: id.into(),
            name,
            category,
            subcategory,
            price: price.into(),
            rating,
            description,
            address,
            pos,
            image,
            highlights,
            tips,
        })
    }
}

impl From<e::favorite::FavoriteItem> for FavoriteItem {
    fn from(from: e::favorite::FavoriteItem) -> Self {
        use e::favorite::FavoriteItem as E;
        match from {
            E::Location(x) => Self::Location(x.into()),
            E::Route(x) => Self::Route(x.into()),
            E::Recommendation(x) => Self::Recommendation(x.into()),
        }
    }
}

impl From<e::favorite::Favorites> for Favorites {
    fn from(from: e::favorite::Favorites) -> Self {
        let e::favorite::Favorites {
            locations,
            routes,
            recommendations,
        } = from;
        Self {
            locations: locations.into_iter().map(Into::into).collect(),
            routes: routes.into_iter().map(Into::into).collect(),
            recommendations: recommendations.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<Favorites> for e::favorite::Favorites {
    type Error = InvalidCatalogEntry;

    fn try_from(from: Favorites) -> Result<Self, Self::Error> {
        let Favorites {
            locations,
            routes,
            recommendations,
        } = from;
        // Re-adding deduplicates stored entries by id
        let mut favorites = Self::default();
        for x in locations {
            favorites.add(e::location::Location::try_from(x)?.into());
        }
        for x in routes {
            favorites.add(e::route::Route::try_from(x)?.into());
        }
        for x in recommendations {
            favorites.add(e::recommendation::Recommendation::try_from(x)?.into());
        }
        Ok(favorites)
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            display_name,
            password: _password,
        } = from;
        Self {
            id: id.into(),
            email: email.into_string(),
            display_name,
        }
    }
}

impl From<e::review::ReviewStats> for ReviewSummary {
    fn from(from: e::review::ReviewStats) -> Self {
        let e::review::ReviewStats { count, average } = from;
        Self {
            count,
            average: average.into(),
            stars: average.stars(),
        }
    }
}

impl Review {
    pub fn from_entity(review: e::review::Review, deletable: bool) -> Self {
        let e::review::Review {
            id,
            user_id,
            user_name,
            item_kind,
            item_id,
            rating,
            comment,
            created_at,
        } = review;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            user_name,
            item_type: item_kind.into(),
            item_id: item_id.into(),
            rating: rating.into(),
            comment,
            created_at: created_at.as_millis(),
            deletable,
        }
    }
}

impl From<e::weather::WeatherCondition> for WeatherCondition {
    fn from(from: e::weather::WeatherCondition) -> Self {
        use e::weather::WeatherCondition as E;
        match from {
            E::Sunny => Self::Sunny,
            E::Rainy => Self::Rainy,
            E::Cloudy => Self::Cloudy,
        }
    }
}

impl From<e::weather::Weather> for Weather {
    fn from(from: e::weather::Weather) -> Self {
        let condition = from.condition().into();
        let e::weather::Weather {
            temperature,
            feels_like,
            humidity,
            wind_speed,
            visibility,
            description,
            icon,
        } = from;
        Self {
            temperature,
            feels_like,
            humidity,
            wind_speed,
            visibility,
            description,
            icon,
            condition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_catalog_location() {
        let json = r#"{
            "id": 4,
            "name": "Ponte di Rialto",
            "category": "landmark",
            "price": "free",
            "price_label": "ignored",
            "lat": 45.438,
            "lng": 12.3358,
            "description": "The oldest bridge across the Grand Canal"
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert!(location.price_label.is_empty());
        let location = e::location::Location::try_from(location).unwrap();
        assert_eq!(e::item::ItemId::new(4), location.id);
        assert_eq!(None, location.tips);
        let location = Location::from(location);
        assert_eq!("Free", location.price_label);
    }

    #[test]
    fn reject_invalid_coordinates() {
        let route = Route {
            id: 2,
            title: "Nowhere".into(),
            description: String::new(),
            category: "culture".into(),
            difficulty: Difficulty::Easy,
            duration: "2h".into(),
            price: PriceTier::Free,
            price_label: String::new(),
            image: None,
            highlights: vec![],
            stops: vec![Stop {
                order: 1,
                name: "Pole".into(),
                lat: 91.0,
                lng: 12.0,
                description: String::new(),
                duration: None,
                tips: None,
            }],
        };
        let err = e::route::Route::try_from(route).unwrap_err();
        assert_eq!(2, err.id);
    }

    #[test]
    fn serialize_tagged_favorite() {
        let item = e::favorite::FavoriteItem::Location(e::location::Location {
            id: 1.into(),
            name: "Ca' Pesaro".into(),
            category: "museum".into(),
            price: e::price::PriceTier::Budget,
            pos: e::geo::VENICE_CENTER,
            description: String::new(),
            tips: None,
            image: None,
        });
        let json = serde_json::to_value(FavoriteItem::from(item)).unwrap();
        assert_eq!("location", json["kind"]);
        assert_eq!("budget", json["price"]);
        assert_eq!("€ Budget", json["price_label"]);
    }

    #[test]
    fn stored_favorites_are_deduplicated() {
        let json = r#"{
            "locations": [
                {"id": 1, "name": "A", "category": "c", "price": "free", "lat": 45.0, "lng": 12.0, "description": ""},
                {"id": 1, "name": "B", "category": "c", "price": "free", "lat": 45.0, "lng": 12.0, "description": ""}
            ]
        }"#;
        let favorites: Favorites = serde_json::from_str(json).unwrap();
        let favorites = e::favorite::Favorites::try_from(favorites).unwrap();
        assert_eq!(1, favorites.count());
        assert_eq!("A", favorites.locations[0].name);
    }
}
