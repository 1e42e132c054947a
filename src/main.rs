use anyhow::Result;
use clap::Parser as _;
use vg_catalog::StaticCatalog;
use vg_core::{entities::VENICE_CENTER, gateways::weather::WeatherGateway};
use vg_gateways::{
    local_storage::LocalStorage,
    weather::{mock::MockWeather, openweathermap::OpenWeatherMap},
};

mod cli;
mod config;

fn weather_gateway(cfg: &config::WeatherGateway) -> Box<dyn WeatherGateway + Send + Sync> {
    if let Some((api_key, api_base_url)) = cfg.openweathermap_with_key() {
        log::info!("Use OpenWeatherMap gateway ({api_base_url})");
        return Box::new(OpenWeatherMap {
            api_key: api_key.to_owned(),
            api_base_url: api_base_url.to_owned(),
            pos: VENICE_CENTER,
        });
    }
    if matches!(cfg, config::WeatherGateway::OpenWeatherMap { .. }) {
        log::warn!("No OpenWeatherMap API key configured => serve mock weather data");
    } else {
        log::info!("Use mock weather gateway");
    }
    Box::new(MockWeather)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config_file.as_deref())?;

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections =
        vg_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    vg_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    log::info!("Loading catalogs");
    let catalog = StaticCatalog::load()?;

    log::info!(
        "Opening local storage in {}",
        cfg.storage.local_storage_dir.display()
    );
    let local_storage = LocalStorage::try_new(&cfg.storage.local_storage_dir)?;

    let weather_gw = weather_gateway(&cfg.weather.gateway);
    let web_cfg = vg_webserver::Cfg {
        weather_max_cache_age: cfg.weather.max_cache_age,
    };

    vg_webserver::run(
        connections,
        catalog,
        local_storage,
        weather_gw,
        args.enable_cors || cfg.webserver.enable_cors,
        args.port,
        web_cfg,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}
