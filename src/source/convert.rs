//! Normalization of backend records into the validated network model.
//!
//! Everything loose is settled here: numeric strings, out-of-range
//! coordinates, missing orders, array columns. Nothing past this point
//! re-checks its input.

use std::sync::Arc;

use tracing::warn;

use crate::{
    network::{FareInfo, Localized, Route, RouteStopEntry, Stop, StopDetails},
    shared::{Coordinate, Time, normalize},
    source::models::*,
};

pub(crate) fn coordinate(
    stop_id: &str,
    latitude: Option<&LooseNumber>,
    longitude: Option<&LooseNumber>,
) -> Option<Coordinate> {
    if latitude.is_none() && longitude.is_none() {
        return None;
    }
    let parsed = latitude
        .and_then(LooseNumber::as_f64)
        .zip(longitude.and_then(LooseNumber::as_f64))
        .and_then(|(latitude, longitude)| Coordinate::new(latitude, longitude));
    if parsed.is_none() {
        warn!("Dropping invalid coordinate {latitude:?}, {longitude:?} of stop {stop_id}");
    }
    parsed
}

/// Boolean column as a SQL dump writes it. Absent means active.
pub(crate) fn parse_flag(value: Option<&str>) -> bool {
    match value.map(|value| value.trim().to_ascii_lowercase()) {
        Some(value) => !matches!(value.as_str(), "false" | "f" | "0" | "no"),
        None => true,
    }
}

/// Array column, either as a JSON array or as a Postgres `{a,"b c"}` literal.
pub(crate) fn parse_list(value: Option<String>) -> Option<Vec<String>> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('[') {
        return match serde_json::from_str(trimmed) {
            Ok(list) => Some(list),
            Err(err) => {
                warn!("Ignoring malformed list column {trimmed}: {err}");
                None
            }
        };
    }
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
        .unwrap_or(trimmed);

    let mut items = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => quoted = !quoted,
            '\\' if quoted => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            ',' if !quoted => items.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    items.push(current);
    Some(
        items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
    )
}

pub(crate) fn parse_fare_info(value: Option<String>) -> Option<FareInfo> {
    let value = value?;
    match serde_json::from_str(&value) {
        Ok(info) => Some(info),
        Err(err) => {
            warn!("Ignoring malformed fare info {value}: {err}");
            None
        }
    }
}

fn parse_time(value: Option<String>) -> Option<Time> {
    let value = value?;
    let time = Time::from_hms(&value);
    if time.is_none() && !value.trim().is_empty() {
        warn!("Ignoring unparsable schedule time {value}");
    }
    time
}

impl From<RawStop> for Stop {
    fn from(value: RawStop) -> Self {
        let coordinate = coordinate(&value.id, value.latitude.as_ref(), value.longitude.as_ref());
        let alternate_name: Option<Arc<str>> =
            value.name_hi.filter(|name| !name.is_empty()).map(Into::into);
        Self {
            normalized_name: normalize(&value.name).into(),
            normalized_alternate_name: alternate_name.as_deref().map(|name| normalize(name).into()),
            id: value.id.into(),
            name: value.name.into(),
            alternate_name,
            coordinate,
            details: StopDetails {
                address: Localized::from_columns(value.address, value.address_hi),
                description: Localized::from_columns(value.description, value.description_hi),
                attractions: Localized::from_lists(value.attractions, value.attractions_hi),
                facilities: Localized::from_lists(value.facilities, value.facilities_hi),
                nearby_landmarks: Localized::from_lists(
                    value.nearby_landmarks,
                    value.nearby_landmarks_hi,
                ),
            },
        }
    }
}

impl From<RawRouteStop> for RouteStopEntry {
    fn from(value: RawRouteStop) -> Self {
        let stop: Stop = match value.bus_stops {
            Some(stop) => stop.into(),
            None => {
                warn!("Route entry without a stop record, keeping it as a blank stop");
                Stop::default()
            }
        };
        let stop_order = match &value.stop_order {
            Some(order) => order.as_i64().unwrap_or_else(|| {
                warn!("Stop {} has non-integer order {order:?}", stop.id);
                0
            }),
            None => 0,
        };
        Self {
            stop,
            stop_order,
            arrival_time: parse_time(value.arrival_time),
            departure_time: parse_time(value.departure_time),
        }
    }
}

impl From<RawRoute> for Route {
    fn from(value: RawRoute) -> Self {
        let mut stops: Vec<RouteStopEntry> = value
            .bus_routes
            .unwrap_or_default()
            .into_iter()
            .filter(|entry| {
                entry
                    .bus_stops
                    .as_ref()
                    .is_none_or(|stop| stop.is_active.unwrap_or(true))
            })
            .map(Into::into)
            .collect();
        stops.sort_by_key(|entry| entry.stop_order);

        let name = Localized::from_columns(Some(value.name), value.name_hi)
            .unwrap_or_else(|| Localized::new(Arc::from(""), None));
        Self {
            index: 0,
            id: value.id.into(),
            name,
            description: Localized::from_columns(value.description, value.description_hi),
            overview: Localized::from_columns(value.route_overview, value.route_overview_hi),
            highlights: Localized::from_lists(value.highlights, value.highlights_hi),
            travel_tips: Localized::from_lists(value.travel_tips, value.travel_tips_hi),
            fare_info: value.fare_info,
            stops: stops.into(),
        }
    }
}

impl From<StopRow> for RawStop {
    fn from(row: StopRow) -> Self {
        Self {
            is_active: Some(parse_flag(row.is_active.as_deref())),
            id: row.id,
            name: row.name,
            name_hi: row.name_hi,
            latitude: row.latitude.map(Into::into),
            longitude: row.longitude.map(Into::into),
            address: row.address,
            address_hi: row.address_hi,
            description: row.description,
            description_hi: row.description_hi,
            attractions: parse_list(row.attractions),
            attractions_hi: parse_list(row.attractions_hi),
            facilities: parse_list(row.facilities),
            facilities_hi: parse_list(row.facilities_hi),
            nearby_landmarks: parse_list(row.nearby_landmarks),
            nearby_landmarks_hi: parse_list(row.nearby_landmarks_hi),
        }
    }
}

impl From<BusRow> for RawRoute {
    fn from(row: BusRow) -> Self {
        Self {
            is_active: Some(parse_flag(row.is_active.as_deref())),
            id: row.id,
            name: row.name,
            name_hi: row.name_hi,
            description: row.description,
            description_hi: row.description_hi,
            route_overview: row.route_overview,
            route_overview_hi: row.route_overview_hi,
            highlights: parse_list(row.highlights),
            highlights_hi: parse_list(row.highlights_hi),
            travel_tips: parse_list(row.travel_tips),
            travel_tips_hi: parse_list(row.travel_tips_hi),
            fare_info: parse_fare_info(row.fare_info),
            bus_routes: Some(Vec::new()),
        }
    }
}

#[test]
fn parse_postgres_list() {
    let list = parse_list(Some(r#"{Fort,"Clock Tower","Say \"hi\""}"#.into())).unwrap();
    assert_eq!(list, vec!["Fort", "Clock Tower", "Say \"hi\""]);
}

#[test]
fn parse_json_list() {
    let list = parse_list(Some(r#"["Fort", "Market"]"#.into())).unwrap();
    assert_eq!(list, vec!["Fort", "Market"]);
}

#[test]
fn parse_empty_list() {
    assert_eq!(parse_list(Some("{}".into())), Some(vec![]));
    assert_eq!(parse_list(None), None);
}

#[test]
fn coordinate_from_strings() {
    let latitude = LooseNumber::Text(" 26.2 ".into());
    let longitude = LooseNumber::Number(73.0);
    assert_eq!(
        coordinate("s1", Some(&latitude), Some(&longitude)),
        Some(Coordinate::from((26.2, 73.0)))
    );
}

#[test]
fn coordinate_out_of_range_is_dropped() {
    let latitude = LooseNumber::Number(126.2);
    let longitude = LooseNumber::Number(73.0);
    assert_eq!(coordinate("s1", Some(&latitude), Some(&longitude)), None);
    assert_eq!(coordinate("s1", Some(&longitude), None), None);
}
