mod common;

use std::fs;

use common::data_path;
use yatri::{
    fare::{CalculationMethod, FareEstimator},
    network::Route,
    shared::{Coordinate, Time},
    source::{self, JsonSource, MemorySource, RouteSource, TableSource, json::routes_from_str},
};

fn find<'a>(routes: &'a [Route], id: &str) -> &'a Route {
    routes.iter().find(|route| &*route.id == id).unwrap()
}

fn stop_names(route: &Route) -> Vec<&str> {
    route.stops.iter().map(|entry| &*entry.stop.name).collect()
}

#[test]
fn json_document_is_normalized() {
    let routes = JsonSource::new(source::Config::default(), data_path("routes.json"))
        .fetch_routes()
        .unwrap();
    assert_eq!(routes.len(), 2, "inactive bus must be dropped");

    let bus_15 = find(&routes, "bus-15");
    assert_eq!(
        stop_names(bus_15),
        vec!["Paota Circle", "Jalori Gate", "Sardarpura", "Ratanada", "Airport"]
    );
    assert_eq!(
        bus_15.stops[1].stop.coordinate,
        Some(Coordinate::from((26.2877, 73.0153)))
    );
    assert_eq!(bus_15.stops[0].arrival_time, Time::from_hms("08:00:00"));
    assert_eq!(bus_15.stops[2].arrival_time, Time::from_hms("08:20"));
    assert_eq!(bus_15.stops[3].arrival_time, None);
    assert_eq!(
        bus_15.fare_info.as_ref().and_then(|info| info.regular_fare.as_deref()),
        Some("₹10")
    );
    assert_eq!(bus_15.name.alternate.as_deref(), Some("बस नं. 15"));

    let bus_7 = find(&routes, "bus-7");
    assert_eq!(
        stop_names(bus_7),
        vec!["Railway Station", "Clock Tower", "Paota Circle", "Mandore"]
    );
    assert_eq!(bus_7.stops[2].stop_order, 30);
    assert_eq!(bus_7.stops[3].stop.coordinate, None, "latitude 126 is out of range");
    assert_eq!(bus_7.stops[1].stop.coordinate, None);
}

#[test]
fn json_directory_uses_configured_file_name() {
    let routes = JsonSource::new(source::Config::default(), data_path(""))
        .fetch_routes()
        .unwrap();
    assert_eq!(routes.len(), 2);
}

#[test]
fn missing_json_file_is_an_error() {
    let result = JsonSource::new(source::Config::default(), data_path("missing.json")).fetch_routes();
    assert!(matches!(result, Err(source::Error::FileNotFound(_))));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(
        routes_from_str("{ not json"),
        Err(source::Error::Json(_))
    ));
}

#[test]
fn missing_collections_are_empty() {
    let routes = routes_from_str(r#"[{ "id": "bare", "name": "Bare" }, { "id": "null", "bus_routes": null }]"#)
        .unwrap();
    assert_eq!(routes.len(), 2);
    assert!(routes.iter().all(|route| route.stops.is_empty()));

    let estimator = FareEstimator::default();
    let fare = estimator.calculate(&routes[0], "A", "B");
    assert_eq!(fare.calculation_method, CalculationMethod::Default);
    assert_eq!(fare.fare_amount, 5);
}

#[test]
fn entry_without_stop_keeps_its_position() {
    let routes = routes_from_str(
        r#"[{
            "id": "holey",
            "name": "Holey",
            "bus_routes": [
                { "stop_order": 1, "bus_stops": { "id": "a", "name": "A", "latitude": 26.2, "longitude": 73.0 } },
                { "stop_order": 2 },
                { "stop_order": 3, "bus_stops": { "id": "c", "name": "C", "latitude": 26.22, "longitude": 73.02 } }
            ]
        }]"#,
    )
    .unwrap();
    assert_eq!(routes[0].stops.len(), 3);
    let fare = FareEstimator::default().calculate(&routes[0], "A", "C");
    assert_eq!(fare.calculation_method, CalculationMethod::StopCount);
    assert_eq!(fare.fare_amount, 7);
}

#[test]
fn null_names_are_blank() {
    let routes = routes_from_str(
        r#"[{
            "id": "nulls",
            "name": null,
            "bus_routes": [
                { "stop_order": 1, "bus_stops": { "id": "a", "name": "A", "latitude": 26.2, "longitude": 73.0 } },
                { "stop_order": 2, "bus_stops": { "id": "s1", "name": null } },
                { "stop_order": 3, "bus_stops": { "id": null, "name": "C", "latitude": 26.22, "longitude": 73.02 } }
            ]
        }]"#,
    )
    .unwrap();
    let route = &routes[0];
    assert_eq!(&*route.name.primary, "");
    assert_eq!(stop_names(route), vec!["A", "", "C"]);
    assert_eq!(&*route.stops[2].stop.id, "");

    let fare = FareEstimator::default().calculate(route, "A", "C");
    assert_eq!(fare.calculation_method, CalculationMethod::StopCount);
    assert_eq!(fare.fare_amount, 7);
}

#[test]
fn overflowing_schedule_time_is_dropped() {
    let routes = routes_from_str(
        r#"[{
            "id": "late",
            "name": "Late",
            "bus_routes": [
                { "stop_order": 1, "arrival_time": "2000000:00", "departure_time": "08:05",
                  "bus_stops": { "id": "a", "name": "A" } }
            ]
        }]"#,
    )
    .unwrap();
    let entry = &routes[0].stops[0];
    assert_eq!(entry.arrival_time, None);
    assert_eq!(entry.departure_time, Time::from_hms("08:05"));
}

#[test]
fn json_fares_match_expectations() {
    let routes = JsonSource::new(source::Config::default(), data_path("routes.json"))
        .fetch_routes()
        .unwrap();
    let estimator = FareEstimator::default();

    let fare = estimator.calculate(find(&routes, "bus-15"), "Paota Circle", "Sardarpura");
    assert_eq!(fare.calculation_method, CalculationMethod::Geo);
    assert_eq!(fare.distance_km, 3.99);
    assert_eq!(fare.fare_amount, 17);

    let fare = estimator.calculate(find(&routes, "bus-15"), "हवाई अड्डा", "पावटा चौराहा");
    assert_eq!(fare.calculation_method, CalculationMethod::Geo);
    assert_eq!(fare.distance_km, 9.92);
    assert_eq!(fare.fare_amount, 35);
    assert_eq!(fare.distance_stops, 4);

    let fare = estimator.calculate(find(&routes, "bus-7"), "Railway Station", "Paota Circle");
    assert_eq!(fare.calculation_method, CalculationMethod::StopCount);
    assert_eq!(fare.distance_stops, 20);
    assert_eq!(fare.fare_amount, 5 + 19 * 2);
}

#[test]
fn table_directory_is_joined() {
    let routes = TableSource::from_dir(source::Config::default(), data_path("tables"))
        .fetch_routes()
        .unwrap();
    assert_eq!(routes.len(), 1);
    let bus_15 = &routes[0];
    assert_eq!(
        stop_names(bus_15),
        vec!["Paota Circle", "Jalori Gate", "Sardarpura", "Ratanada"],
        "inactive stops are dropped and the rest sorted by order"
    );
    assert_eq!(
        bus_15.highlights.primary.iter().map(|item| &**item).collect::<Vec<_>>(),
        vec!["Old city gates", "Ratanada palace road"]
    );
    assert_eq!(
        bus_15.stops[0]
            .stop
            .details
            .facilities
            .primary
            .iter()
            .map(|item| &**item)
            .collect::<Vec<_>>(),
        vec!["Shelter", "Water"]
    );
    assert_eq!(
        bus_15.fare_info.as_ref().and_then(|info| info.regular_fare.as_deref()),
        Some("₹10")
    );
    assert_eq!(bus_15.stops[0].departure_time, Time::from_hms("08:02"));

    let estimator = FareEstimator::default();
    let fare = estimator.calculate(bus_15, "Paota Circle", "Sardarpura");
    assert_eq!(fare.fare_amount, 17);
    let fare = estimator.calculate(bus_15, "Paota Circle", "Ratanada");
    assert_eq!(fare.calculation_method, CalculationMethod::StopCount);
    assert_eq!(fare.fare_amount, 9);
}

#[test]
fn table_zip_matches_directory() {
    let from_zip = TableSource::from_zip(source::Config::default(), data_path("tables.zip"))
        .fetch_routes()
        .unwrap();
    let from_dir = TableSource::from_dir(source::Config::default(), data_path("tables"))
        .fetch_routes()
        .unwrap();
    assert_eq!(from_zip.len(), from_dir.len());
    assert_eq!(stop_names(&from_zip[0]), stop_names(&from_dir[0]));
}

#[test]
fn dangling_stop_reference_is_an_error() {
    let dir = std::env::temp_dir().join(format!("yatri-dangling-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("buses.csv"), "id,name\nbus-1,Bus 1\n").unwrap();
    fs::write(dir.join("bus_stops.csv"), "id,name\na,A\n").unwrap();
    fs::write(dir.join("bus_routes.csv"), "bus_id,stop_id,stop_order\nbus-1,ghost,1\n").unwrap();

    let result = TableSource::from_dir(source::Config::default(), &dir).fetch_routes();
    fs::remove_dir_all(&dir).unwrap();
    match result {
        Err(source::Error::UnknownStop { bus_id, stop_id }) => {
            assert_eq!(bus_id, "bus-1");
            assert_eq!(stop_id, "ghost");
        }
        other => panic!("expected UnknownStop, got {other:?}"),
    }
}

#[test]
fn missing_table_is_an_error() {
    let result = TableSource::from_dir(source::Config::default(), data_path("")).fetch_routes();
    assert!(matches!(result, Err(source::Error::FileNotFound(_))));
}

#[test]
fn memory_source_drops_inactive_routes() {
    let document = fs::read_to_string(data_path("routes.json")).unwrap();
    let raw = serde_json::from_str(&document).unwrap();
    let routes = MemorySource::new(raw).fetch_routes().unwrap();
    assert_eq!(routes.len(), 2);
}
