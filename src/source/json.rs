use std::{fs::File, io::BufReader, path::PathBuf};

use tracing::debug;

use crate::{
    network::Route,
    source::{self, Config, RouteSource, active_routes, models::RawRoute},
};

/// Reads the nested route document, either from a file or from a directory
/// holding [`Config::routes_file_name`].
pub struct JsonSource {
    config: Config,
    path: PathBuf,
}

impl JsonSource {
    pub fn new(config: Config, path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            path: path.into(),
        }
    }

    fn file_path(&self) -> PathBuf {
        if self.path.is_dir() {
            self.path.join(&self.config.routes_file_name)
        } else {
            self.path.clone()
        }
    }
}

impl RouteSource for JsonSource {
    fn fetch_routes(&self) -> Result<Vec<Route>, source::Error> {
        let path = self.file_path();
        if !path.is_file() {
            return Err(source::Error::FileNotFound(path.display().to_string()));
        }
        debug!("Reading route document {}", path.display());
        let reader = BufReader::new(File::open(&path)?);
        let routes: Vec<RawRoute> = serde_json::from_reader(reader)?;
        Ok(active_routes(routes))
    }
}

/// Parses a route document held in memory.
pub fn routes_from_str(document: &str) -> Result<Vec<Route>, source::Error> {
    let routes: Vec<RawRoute> = serde_json::from_str(document)?;
    Ok(active_routes(routes))
}
