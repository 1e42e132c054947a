use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PriceTier {
    Free,
    Budget,
    Premium,
}

impl PriceTier {
    /// Human readable label for lists and map popups.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Budget => "€ Budget",
            Self::Premium => "€€€ Premium",
        }
    }
}
