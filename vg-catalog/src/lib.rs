//! The curated catalogs of locations, routes and recommendations.
//!
//! The catalog files are embedded into the binary and parsed
//! once on startup.

use std::{borrow::Cow, collections::HashSet};

use anyhow::{anyhow, bail, Context as _, Result as Fallible};
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use vg_boundary as json;
use vg_core::{entities::*, repositories::CatalogRepo};

#[derive(RustEmbed)]
#[folder = "data/"]
struct CatalogAsset;

const LOCATIONS_FILE: &str = "locations.json";
const ROUTES_FILE: &str = "routes.json";
const RECOMMENDATIONS_FILE: &str = "recommendations.json";

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    locations: Vec<Location>,
    routes: Vec<Route>,
    recommendations: Vec<Recommendation>,
}

impl StaticCatalog {
    /// Parse the embedded catalog files.
    pub fn load() -> Fallible<Self> {
        let catalog = Self::from_json(
            &embedded_file(LOCATIONS_FILE)?,
            &embedded_file(ROUTES_FILE)?,
            &embedded_file(RECOMMENDATIONS_FILE)?,
        )?;
        log::info!(
            "Loaded catalog with {} locations, {} routes and {} recommendations",
            catalog.locations.len(),
            catalog.routes.len(),
            catalog.recommendations.len()
        );
        Ok(catalog)
    }

    pub fn from_json(locations: &[u8], routes: &[u8], recommendations: &[u8]) -> Fallible<Self> {
        let locations = parse_entries::<json::Location, Location>(locations)
            .with_context(|| format!("Invalid catalog {LOCATIONS_FILE}"))?;
        let routes = parse_entries::<json::Route, Route>(routes)
            .with_context(|| format!("Invalid catalog {ROUTES_FILE}"))?;
        let recommendations =
            parse_entries::<json::Recommendation, Recommendation>(recommendations)
                .with_context(|| format!("Invalid catalog {RECOMMENDATIONS_FILE}"))?;
        Ok(Self {
            locations,
            routes,
            recommendations,
        })
    }
}

fn embedded_file(name: &str) -> Fallible<Cow<'static, [u8]>> {
    CatalogAsset::get(name)
        .map(|file| file.data)
        .ok_or_else(|| anyhow!("Missing catalog file {name}"))
}

fn parse_entries<J, E>(data: &[u8]) -> Fallible<Vec<E>>
where
    J: DeserializeOwned,
    E: CatalogItem + TryFrom<J, Error = json::InvalidCatalogEntry>,
{
    let entries: Vec<J> = serde_json::from_slice(data)?;
    let entries = entries
        .into_iter()
        .map(E::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let mut ids = HashSet::new();
    for e in &entries {
        if !ids.insert(e.id()) {
            bail!("Duplicate {} id {}", E::KIND, e.id());
        }
    }
    Ok(entries)
}

impl CatalogRepo for StaticCatalog {
    fn all_locations(&self) -> &[Location] {
        &self.locations
    }
    fn all_routes(&self) -> &[Route] {
        &self.routes
    }
    fn all_recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }
}
