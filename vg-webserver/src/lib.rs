#[macro_use]
extern crate log;

use vg_catalog::StaticCatalog;
use vg_core::gateways::weather::WeatherGateway;
use vg_db_sqlite::Connections;
use vg_gateways::local_storage::LocalStorage;

mod web;

pub use web::Cfg;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    connections: Connections,
    catalog: StaticCatalog,
    local_storage: LocalStorage,
    weather_gw: Box<dyn WeatherGateway + Send + Sync>,
    enable_cors: bool,
    port: Option<u16>,
    cfg: Cfg,
    version: &'static str,
) {
    web::run(
        connections.into(),
        catalog,
        local_storage,
        weather_gw,
        enable_cors,
        port,
        cfg,
        version,
    )
    .await;
}
