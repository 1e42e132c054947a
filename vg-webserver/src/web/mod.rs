use std::{sync::Arc, time::Duration};

use rocket::{figment::Figment, Rocket, Route};
use vg_catalog::StaticCatalog;
use vg_core::{gateways::weather::WeatherGateway, repositories::CatalogRepo as _};
use vg_gateways::local_storage::LocalStorage;

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;
mod weather_cache;


use weather_cache::WeatherCache;

#[derive(Debug, Clone)]
pub struct Cfg {
    /// How long fetched weather data is served from the cache.
    pub weather_max_cache_age: Duration,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            weather_max_cache_age: Duration::from_secs(30 * 60),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<Figment>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    weather: Arc<dyn WeatherGateway + Send + Sync>,
}

pub(crate) struct Connections {
    db: sqlite::Connections,
    catalog: StaticCatalog,
    local_storage: LocalStorage,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    connections: Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Connections {
        db,
        catalog,
        local_storage,
    } = connections;
    let Gateways { weather } = gateways;

    info!(
        "Serving {} locations, {} routes and {} recommendations",
        catalog.all_locations().len(),
        catalog.all_routes().len(),
        catalog.all_recommendations().len(),
    );
    info!("Storing client data in {}", local_storage.path().display());

    let weather_cache = WeatherCache::new(cfg.weather_max_cache_age);
    let session_tokens = jwt::SessionTokens::new();

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let weather_gw = guards::Weather(weather);
    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(catalog)
        .manage(local_storage)
        .manage(weather_cache)
        .manage(session_tokens)
        .manage(weather_gw)
        .manage(cfg)
        .manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance.register("/", api::catchers())
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

#[allow(clippy::too_many_arguments)]
pub async fn run(
    db: sqlite::Connections,
    catalog: StaticCatalog,
    local_storage: LocalStorage,
    weather: Box<dyn WeatherGateway + Send + Sync>,
    enable_cors: bool,
    port: Option<u16>,
    cfg: Cfg,
    version: &'static str,
) {
    let mounts = mounts();
    // Keep the ROCKET_* environment and only override the port
    let rocket_cfg = port.map(|port| rocket::Config::figment().merge(("port", port)));
    let options = InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    };
    let connections = Connections {
        db,
        catalog,
        local_storage,
    };
    let gateways = Gateways {
        weather: Arc::from(weather),
    };

    let instance = rocket_instance(options, connections, gateways);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                log::error!("Invalid CORS configuration: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
