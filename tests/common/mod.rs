#![allow(dead_code)]

use yatri::{
    network::{Route, RouteStopEntry, Stop},
    shared::{Coordinate, normalize},
};

pub fn data_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

pub fn stop(id: &str, name: &str, alternate_name: Option<&str>, coordinate: Option<(f64, f64)>) -> Stop {
    Stop {
        id: id.into(),
        name: name.into(),
        alternate_name: alternate_name.map(Into::into),
        normalized_name: normalize(name).into(),
        normalized_alternate_name: alternate_name.map(|name| normalize(name).into()),
        coordinate: coordinate.and_then(|(latitude, longitude)| Coordinate::new(latitude, longitude)),
        ..Default::default()
    }
}

pub fn entry(name: &str, stop_order: i64, coordinate: Option<(f64, f64)>) -> RouteStopEntry {
    RouteStopEntry {
        stop: stop(&name.to_lowercase(), name, None, coordinate),
        stop_order,
        ..Default::default()
    }
}

pub fn route(id: &str, stops: Vec<RouteStopEntry>) -> Route {
    let mut route = Route {
        id: id.into(),
        stops: stops.into(),
        ..Default::default()
    };
    route.name.primary = id.into();
    route
}

/// Three stops, one hundredth of a degree apart.
pub fn abc_route() -> Route {
    route(
        "abc",
        vec![
            entry("A", 1, Some((26.2, 73.0))),
            entry("B", 2, Some((26.21, 73.01))),
            entry("C", 3, Some((26.22, 73.02))),
        ],
    )
}

pub fn abc_route_without_coordinates() -> Route {
    route(
        "abc",
        vec![entry("A", 1, None), entry("B", 2, None), entry("C", 3, None)],
    )
}
