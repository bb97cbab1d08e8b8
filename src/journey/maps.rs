use crate::{fare::extract_segment, network::Route, shared::Coordinate};

const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

pub struct MapsConfig {
    /// Appended to stop names so the maps search stays inside the city.
    pub city: String,
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            city: "Jodhpur, Rajasthan".into(),
        }
    }
}

/// One point of a directions link.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint<'a> {
    pub name: &'a str,
    pub coordinate: Option<Coordinate>,
}

/// Builds transit directions links for the external maps app.
#[derive(Default)]
pub struct MapsLinks {
    config: MapsConfig,
}

impl MapsLinks {
    pub fn new(config: MapsConfig) -> Self {
        Self { config }
    }

    /// Directions through every stop of the ride. Falls back to a two-point
    /// link by name when either stop is not on the route.
    pub fn journey_url(&self, route: &Route, source: &str, destination: &str) -> String {
        let bus_name = Some(&*route.name.primary).filter(|name| !name.is_empty());
        match extract_segment(&route.stops, source, destination) {
            Some(segment) => {
                let waypoints: Vec<Waypoint> = segment
                    .stops()
                    .map(|stop| Waypoint {
                        name: &stop.name,
                        coordinate: stop.coordinate,
                    })
                    .collect();
                self.route_url(&waypoints, bus_name)
            }
            None => {
                let waypoints = [
                    Waypoint {
                        name: source,
                        coordinate: None,
                    },
                    Waypoint {
                        name: destination,
                        coordinate: None,
                    },
                ];
                self.route_url(&waypoints, bus_name)
            }
        }
    }

    /// Empty string for an empty waypoint list.
    pub fn route_url(&self, waypoints: &[Waypoint<'_>], bus_name: Option<&str>) -> String {
        if waypoints.is_empty() {
            return String::new();
        }
        let path = waypoints
            .iter()
            .map(|waypoint| match waypoint.coordinate {
                Some(coordinate) => coordinate.to_string(),
                None => urlencoding::encode(&format!("{}, {}", waypoint.name, self.config.city))
                    .into_owned(),
            })
            .collect::<Vec<_>>()
            .join("/");

        let mut url = format!("{DIRECTIONS_URL}{path}?hl=en&entry=ttu&travelmode=transit");
        if let Some(bus_name) = bus_name {
            url.push_str("&bus=");
            url.push_str(&urlencoding::encode(bus_name));
        }
        url.push_str("&transit_routing_preference=fewer_transfers");
        url
    }
}
