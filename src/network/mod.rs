use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    time::Instant,
};

mod models;
pub use models::*;
use tracing::debug;

use crate::{
    shared,
    source::{self, RouteSource},
};

pub struct Config {
    /// Route whose stops, in order, feed the stop picker.
    pub picker_route: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            picker_route: "Bus No. 15".into(),
        }
    }
}

/// Immutable catalogue of every route the app knows about.
#[derive(Debug, Clone, Default)]
pub struct Network {
    routes: Box<[Route]>,
    route_lookup: HashMap<Arc<str>, u32>,
    stops: Box<[Stop]>,
}

impl Network {
    pub fn new() -> Self {
        Default::default()
    }

    /// Pulls every route out of `source` and indexes it.
    pub fn load<S>(source: &S) -> Result<Self, source::Error>
    where
        S: RouteSource + ?Sized,
    {
        debug!("Loading routes...");
        let now = Instant::now();
        let network = Self::from_routes(source.fetch_routes()?);
        debug!(
            "Loading {} routes and {} stops took {:?}",
            network.routes.len(),
            network.stops.len(),
            now.elapsed()
        );
        Ok(network)
    }

    pub fn from_routes(routes: Vec<Route>) -> Self {
        let mut route_lookup = HashMap::new();
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut stops: Vec<Stop> = Vec::new();
        let routes: Box<[Route]> = routes
            .into_iter()
            .enumerate()
            .map(|(i, mut route)| {
                route.index = i as u32;
                route_lookup.insert(route.id.clone(), i as u32);
                for entry in route.stops.iter() {
                    if seen.insert(entry.stop.id.clone()) {
                        stops.push(entry.stop.clone());
                    }
                }
                route
            })
            .collect();
        stops.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            routes,
            route_lookup,
            stops: stops.into(),
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Every distinct stop, sorted by primary name.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn route_by_id(&self, id: &str) -> Option<&Route> {
        self.route_lookup
            .get(id)
            .map(|index| &self.routes[*index as usize])
    }

    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| {
            &*route.name.primary == name || route.name.alternate.as_deref() == Some(name)
        })
    }

    /// Routes that serve both stops, matched by either language's name.
    pub fn routes_between(&self, source: &str, destination: &str) -> Vec<&Route> {
        let routes: Vec<&Route> = self
            .routes
            .iter()
            .filter(|route| route.serves(source) && route.serves(destination))
            .collect();
        debug!(
            "Found {} routes between {source} and {destination}",
            routes.len()
        );
        routes
    }

    /// Stops for the picker: the configured route's stops in travel order,
    /// or every stop by name when that route is missing or empty.
    pub fn picker_stops(&self, config: &Config) -> Vec<&Stop> {
        match self.route_by_name(&config.picker_route) {
            Some(route) if !route.stops.is_empty() => {
                let mut seen: HashSet<Arc<str>> = HashSet::new();
                route
                    .stops
                    .iter()
                    .map(|entry| &entry.stop)
                    .filter(|stop| seen.insert(stop.id.clone()))
                    .collect()
            }
            _ => {
                debug!(
                    "Picker route {} not found, falling back to all stops",
                    config.picker_route
                );
                self.stops.iter().collect()
            }
        }
    }

    pub fn search_stops(&self, query: &str) -> Vec<&Stop> {
        shared::search(query, &self.stops)
    }
}
