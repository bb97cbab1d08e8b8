//! Display strings handed to the presentation layer.

use crate::shared::{Distance, Duration};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// `₹7` style amount.
pub fn format_fare(symbol: &str, amount: u32) -> String {
    format!("{symbol}{amount}")
}

/// Meters below one kilometer, otherwise kilometers to one decimal.
pub fn format_distance(distance: Distance) -> String {
    let km = distance.as_kilometers();
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else {
        format!("{:.1}km", km)
    }
}

pub fn format_minutes(duration: Duration) -> String {
    format!("~{} min", duration.as_minutes())
}

#[test]
fn format_fare_test() {
    assert_eq!(format_fare(DEFAULT_CURRENCY_SYMBOL, 7), "₹7");
}

#[test]
fn format_distance_test() {
    assert_eq!(format_distance(Distance::from_kilometers(0.45)), "450m");
    assert_eq!(format_distance(Distance::from_kilometers(2.3)), "2.3km");
    assert_eq!(format_distance(Distance::from_kilometers(1.0)), "1.0km");
}
