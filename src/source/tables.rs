use serde::de::DeserializeOwned;
use std::{
    collections::HashMap,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::{
    network::Route,
    source::{
        self, Config, RouteSource, active_routes,
        models::{BusRouteRow, BusRow, RawRoute, RawRouteStop, RawStop, StopRow},
    },
};

pub enum StorageType {
    Directory(PathBuf),
    Zip(PathBuf),
}

/// Relational dump of the `buses`, `bus_stops` and `bus_routes` tables as
/// CSV files, loose in a directory or packed into a zip archive.
pub struct TableSource {
    config: Config,
    storage: StorageType,
}

impl TableSource {
    pub fn from_dir(config: Config, path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            storage: StorageType::Directory(path.into()),
        }
    }

    pub fn from_zip(config: Config, path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            storage: StorageType::Zip(path.into()),
        }
    }

    fn read_table<T>(&self, file_name: &str) -> Result<Vec<T>, source::Error>
    where
        T: DeserializeOwned,
    {
        match &self.storage {
            StorageType::Directory(dir) => {
                let path = dir.join(file_name);
                if !path.is_file() {
                    return Err(source::Error::FileNotFound(file_name.to_string()));
                }
                read_rows(File::open(path)?, file_name)
            }
            StorageType::Zip(path) => read_rows_from_zip(path, file_name),
        }
    }
}

impl RouteSource for TableSource {
    fn fetch_routes(&self) -> Result<Vec<Route>, source::Error> {
        let now = Instant::now();
        let stops: HashMap<String, RawStop> = self
            .read_table::<StopRow>(&self.config.stops_file_name)?
            .into_iter()
            .map(|row| (row.id.clone(), row.into()))
            .collect();

        let mut routes: Vec<RawRoute> = self
            .read_table::<BusRow>(&self.config.buses_file_name)?
            .into_iter()
            .map(Into::into)
            .collect();
        let route_lookup: HashMap<String, usize> = routes
            .iter()
            .enumerate()
            .map(|(i, route)| (route.id.clone(), i))
            .collect();

        for row in self.read_table::<BusRouteRow>(&self.config.bus_routes_file_name)? {
            let route_index = *route_lookup
                .get(&row.bus_id)
                .ok_or_else(|| source::Error::UnknownRoute(row.bus_id.clone()))?;
            let stop = stops
                .get(&row.stop_id)
                .ok_or_else(|| source::Error::UnknownStop {
                    bus_id: row.bus_id.clone(),
                    stop_id: row.stop_id.clone(),
                })?;
            routes[route_index]
                .bus_routes
                .get_or_insert_with(Vec::new)
                .push(RawRouteStop {
                    bus_stops: Some(stop.clone()),
                    stop_order: row.stop_order.map(Into::into),
                    arrival_time: row.arrival_time,
                    departure_time: row.departure_time,
                });
        }

        debug!("Joining route tables took {:?}", now.elapsed());
        Ok(active_routes(routes))
    }
}

fn read_rows<T, R>(reader: R, file_name: &str) -> Result<Vec<T>, source::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::Reader::from_reader(reader);
    let rows = reader
        .deserialize()
        .enumerate()
        .filter_map(|(i, row)| match row {
            Ok(row) => Some(row),
            Err(err) => {
                warn!("Skipping row {i} of {file_name}: {err}");
                None
            }
        })
        .collect();
    Ok(rows)
}

fn read_rows_from_zip<T>(zip_path: &Path, file_name: &str) -> Result<Vec<T>, source::Error>
where
    T: DeserializeOwned,
{
    let zip_file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(zip_file)?;
    let index = archive
        .index_for_name(file_name)
        .ok_or(source::Error::FileNotFound(file_name.to_string()))?;
    let file = archive.by_index(index)?;
    read_rows(file, file_name)
}
