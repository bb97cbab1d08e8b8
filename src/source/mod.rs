//! Data access. Loosely typed backend records come in here and leave as
//! validated [`Route`]s; nothing downstream talks to storage.

use std::io;
use thiserror::Error;

mod config;
pub(crate) mod convert;
pub mod json;
pub mod models;
pub mod tables;
pub use config::*;
pub use json::JsonSource;
pub use tables::TableSource;

use crate::network::Route;
use models::RawRoute;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Route entry of bus {bus_id} references unknown stop {stop_id}")]
    UnknownStop { bus_id: String, stop_id: String },
    #[error("Route entry references unknown bus {0}")]
    UnknownRoute(String),
}

/// Handle to wherever route records live. Passed into whatever builds the
/// network so tests can hand in fixtures instead of files.
pub trait RouteSource {
    fn fetch_routes(&self) -> Result<Vec<Route>, self::Error>;
}

/// Routes already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    routes: Vec<RawRoute>,
}

impl MemorySource {
    pub fn new(routes: Vec<RawRoute>) -> Self {
        Self { routes }
    }
}

impl RouteSource for MemorySource {
    fn fetch_routes(&self) -> Result<Vec<Route>, self::Error> {
        Ok(active_routes(self.routes.clone()))
    }
}

pub(crate) fn active_routes(routes: Vec<RawRoute>) -> Vec<Route> {
    routes
        .into_iter()
        .filter(|route| route.is_active.unwrap_or(true))
        .map(Into::into)
        .collect()
}
