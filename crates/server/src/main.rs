mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::get;
use std::{path::Path, sync::Arc, time::Instant};
use tracing::{error, info};
use yatri::{
    network::Network,
    source::{self, JsonSource, RouteSource, TableSource},
};

const PORT: u32 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing route data path (routes.json, table directory or zip)");
        std::process::exit(1);
    }

    info!("Loading data...");
    let now = Instant::now();
    let source = open_source(Path::new(&args[1]));
    let network = match Network::load(&*source) {
        Ok(network) => network,
        Err(err) => {
            error!("Failed to load route data: {err}");
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} routes in {:?}",
        network.routes().len(),
        now.elapsed()
    );
    let state = Arc::new(AppState::new(network));

    let app = axum::Router::new()
        .route("/stops", get(api::stops))
        .route("/stops/search", get(api::search))
        .route("/buses", get(api::buses))
        .route("/buses/{id}", get(api::bus))
        .route("/fare", get(api::fare))
        .route("/journey", get(api::journey))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {PORT}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {PORT}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}

/// Zip archives and CSV directories are table dumps, anything else a route document.
fn open_source(path: &Path) -> Box<dyn RouteSource> {
    let config = source::Config::default();
    let is_zip = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("zip"));
    if is_zip {
        Box::new(TableSource::from_zip(config, path))
    } else if path.is_dir() && path.join(&config.buses_file_name).is_file() {
        Box::new(TableSource::from_dir(config, path))
    } else {
        Box::new(JsonSource::new(config, path))
    }
}
