use std::{fmt, num::ParseIntError, str::FromStr};

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Identifier of an entry in one of the static catalogs.
///
/// Ids are only unique within a single catalog, i.e. a location
/// and a route may share the same id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u32);

impl ItemId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(from: u32) -> Self {
        Self(from)
    }
}

impl From<ItemId> for u32 {
    fn from(from: ItemId) -> Self {
        from.0
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The catalog an item belongs to.
///
/// Parses both the singular (`route`) and the plural
/// (`routes`) name, displays as singular.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum ItemKind {
    #[strum(to_string = "location", serialize = "locations")]
    Location,
    #[strum(to_string = "route", serialize = "routes")]
    Route,
    #[strum(to_string = "recommendation", serialize = "recommendations")]
    Recommendation,
}

impl ItemKind {
    /// Name of the favorites bucket.
    pub const fn bucket_name(self) -> &'static str {
        match self {
            Self::Location => "locations",
            Self::Route => "routes",
            Self::Recommendation => "recommendations",
        }
    }
}

/// Common read access to the searchable fields of catalog entries.
pub trait CatalogItem {
    const KIND: ItemKind;

    fn id(&self) -> ItemId;

    /// The name or title.
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    fn category(&self) -> &str;
}
