use yatri::{
    fare::FareEstimator,
    journey::{MapRegion, MapsLinks},
    network::{self, Network},
};

/// Shown when a ride has no distance to derive a travel time from.
pub const TRAVEL_TIME_FALLBACK: &str = "15-20 min";

pub struct AppState {
    pub network: Network,
    pub estimator: FareEstimator,
    pub maps: MapsLinks,
    pub picker: network::Config,
    pub fallback_region: MapRegion,
}

impl AppState {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            estimator: FareEstimator::default(),
            maps: MapsLinks::default(),
            picker: network::Config::default(),
            fallback_region: MapRegion::default(),
        }
    }
}
