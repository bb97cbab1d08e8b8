mod common;

use common::{abc_route, abc_route_without_coordinates, entry, route};
use yatri::{
    fare::{CalculationMethod, FareConfig, FareEstimator},
    network::Route,
    shared::Coordinate,
};

fn sample_routes() -> Vec<Route> {
    vec![
        abc_route(),
        abc_route_without_coordinates(),
        route("empty", vec![]),
        route(
            "sparse",
            vec![
                entry("A", 7, Some((26.2, 73.0))),
                entry("B", 3, None),
                entry("C", -4, Some((95.0, 73.0))),
                entry("D", 12, Some((26.3, 73.1))),
            ],
        ),
    ]
}

#[test]
fn geo_scenario() {
    let estimator = FareEstimator::default();
    let route = abc_route();
    let fare = estimator.calculate(&route, "A", "C");

    let a = Coordinate::from((26.2, 73.0));
    let b = Coordinate::from((26.21, 73.01));
    let c = Coordinate::from((26.22, 73.02));
    let km = a.haversine_distance(&b).as_kilometers() + b.haversine_distance(&c).as_kilometers();

    assert_eq!(fare.calculation_method, CalculationMethod::Geo);
    assert!(!fare.is_approximate);
    assert_eq!(fare.distance_km, (km * 100.0).round() / 100.0);
    assert_eq!(fare.distance_km, 2.99);
    assert_eq!(fare.fare_amount, 5 + (km * 3.0).ceil() as u32);
    assert_eq!(fare.fare_amount, 14);
    assert_eq!(fare.distance_stops, 2);
}

#[test]
fn stop_count_scenario() {
    let estimator = FareEstimator::default();
    let fare = estimator.calculate(&abc_route_without_coordinates(), "A", "C");
    assert_eq!(fare.calculation_method, CalculationMethod::StopCount);
    assert!(fare.is_approximate);
    assert_eq!(fare.distance_stops, 2);
    assert_eq!(fare.distance_km, 0.0);
    assert_eq!(fare.fare_amount, 7);
}

#[test]
fn unmatched_names_scenario() {
    let estimator = FareEstimator::default();
    let fare = estimator.calculate(&abc_route(), "X", "Y");
    assert_eq!(fare.calculation_method, CalculationMethod::Default);
    assert!(fare.is_approximate);
    assert_eq!(fare.fare_amount, 5);
    assert_eq!(fare.distance_stops, 0);
}

#[test]
fn same_stop_scenario() {
    let estimator = FareEstimator::default();
    let fare = estimator.calculate(&abc_route(), "B", "B");
    assert_eq!(fare.distance_stops, 0);
    assert_eq!(fare.calculation_method, CalculationMethod::Default);
    assert_eq!(fare.fare_amount, 5);
}

#[test]
fn one_unmatched_end_uses_order_zero() {
    let estimator = FareEstimator::default();
    // "C" has order 3, the missing end counts as order 0.
    let fare = estimator.calculate(&abc_route(), "Nowhere", "C");
    assert_eq!(fare.calculation_method, CalculationMethod::StopCount);
    assert_eq!(fare.distance_stops, 3);
    assert_eq!(fare.fare_amount, 5 + 2 * 2);
}

#[test]
fn adjacent_stops_without_coordinates_cost_base_fare() {
    let estimator = FareEstimator::default();
    let fare = estimator.calculate(&abc_route_without_coordinates(), "A", "B");
    assert_eq!(fare.calculation_method, CalculationMethod::StopCount);
    assert_eq!(fare.fare_amount, 5);
}

#[test]
fn one_missing_coordinate_falls_back_to_stop_count() {
    let estimator = FareEstimator::default();
    let route = route(
        "gap",
        vec![
            entry("A", 1, Some((26.2, 73.0))),
            entry("B", 2, None),
            entry("C", 3, Some((26.22, 73.02))),
            entry("D", 4, Some((26.23, 73.03))),
        ],
    );
    let fare = estimator.calculate(&route, "A", "D");
    assert_eq!(fare.calculation_method, CalculationMethod::StopCount);
    assert_eq!(fare.distance_km, 0.0);
    assert_eq!(fare.fare_amount, 5 + 2 * 2);

    let fare = estimator.calculate(&route, "C", "D");
    assert_eq!(fare.calculation_method, CalculationMethod::Geo);
}

#[test]
fn reversed_query_costs_the_same() {
    let estimator = FareEstimator::default();
    for route in sample_routes() {
        let forward = estimator.calculate(&route, "A", "D");
        let reverse = estimator.calculate(&route, "D", "A");
        assert_eq!(forward, reverse);
    }
}

#[test]
fn stop_count_uses_stop_order_not_position() {
    let estimator = FareEstimator::default();
    let route = route(
        "gappy-orders",
        vec![entry("A", 10, None), entry("B", 20, None), entry("C", 30, None)],
    );
    let fare = estimator.calculate(&route, "A", "B");
    assert_eq!(fare.distance_stops, 10);
    assert_eq!(fare.fare_amount, 5 + 9 * 2);
}

#[test]
fn fare_never_below_base() {
    let estimator = FareEstimator::default();
    let names = ["A", "B", "C", "D", "X", ""];
    for route in sample_routes() {
        for source in names {
            for destination in names {
                let fare = estimator.calculate(&route, source, destination);
                assert!(fare.fare_amount >= 5, "{source} -> {destination} on {}", route.id);
                if fare.calculation_method != CalculationMethod::Geo {
                    assert!(fare.is_approximate);
                    assert_eq!(fare.distance_km, 0.0);
                }
            }
        }
    }
}

#[test]
fn empty_route_costs_base_fare() {
    let estimator = FareEstimator::default();
    let fare = estimator.calculate(&route("empty", vec![]), "A", "B");
    assert_eq!(fare.calculation_method, CalculationMethod::Default);
    assert_eq!(fare.fare_amount, 5);
}

#[test]
fn rates_are_configurable() {
    let estimator = FareEstimator::new(FareConfig {
        base_fare: 10,
        per_km_rate: 4,
        per_stop_rate: 5,
        ..Default::default()
    });
    let fare = estimator.calculate(&abc_route_without_coordinates(), "A", "C");
    assert_eq!(fare.fare_amount, 15);
    let fare = estimator.calculate(&abc_route(), "A", "C");
    assert_eq!(fare.fare_amount, 10 + 12);
    let fare = estimator.calculate(&abc_route(), "X", "C");
    assert_eq!(fare.calculation_method, CalculationMethod::StopCount);
}

#[test]
fn travel_time_from_distance() {
    let estimator = FareEstimator::default();
    let fare = estimator.calculate(&abc_route(), "A", "C");
    assert_eq!(estimator.travel_time(&fare).unwrap().as_minutes(), 9);
    assert_eq!(estimator.travel_time_text(&fare, "15-20 min"), "~9 min");
}

#[test]
fn travel_time_falls_back_without_distance() {
    let estimator = FareEstimator::default();
    let fare = estimator.calculate(&abc_route_without_coordinates(), "A", "C");
    assert!(estimator.travel_time(&fare).is_none());
    assert_eq!(estimator.travel_time_text(&fare, "15-20 min"), "15-20 min");
}

#[test]
fn formatting_helpers() {
    let estimator = FareEstimator::default();
    assert_eq!(estimator.format_fare(7), "₹7");
    assert_eq!(estimator.format_distance(0.45), "450m");
    assert_eq!(estimator.format_distance(2.3), "2.3km");
    assert_eq!(estimator.format_distance(0.0), "0m");
    assert_eq!(estimator.format_distance(12.96), "13.0km");
}

#[test]
fn calculation_serializes_with_method_tag() {
    let estimator = FareEstimator::default();
    let fare = estimator.calculate(&abc_route_without_coordinates(), "A", "C");
    let json = serde_json::to_value(fare).unwrap();
    assert_eq!(json["calculation_method"], "stopCount");
    assert_eq!(json["fare_amount"], 7);
}
