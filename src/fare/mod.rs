//! Fare, distance and travel time estimates for one ride on one route.
//!
//! Three tiers are tried in order and the first usable one wins:
//!
//! 1. [`CalculationMethod::Geo`]: every stop of the segment has a coordinate,
//!    so the consecutive haversine legs are summed and charged per km.
//! 2. [`CalculationMethod::StopCount`]: no usable geometry, but the stop
//!    orders of the two ends differ, so stops past the first are charged.
//! 3. [`CalculationMethod::Default`]: nothing to go on; the base fare.
//!
//! The estimator never fails. Unknown names, empty routes and missing
//! coordinates all just push the calculation down a tier.

mod segment;
pub use segment::*;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    network::{Route, RouteStopEntry},
    shared::{self, DEFAULT_CURRENCY_SYMBOL, Distance, Duration},
};

pub struct FareConfig {
    /// Charged on every ride, and the floor of every estimate.
    pub base_fare: u32,
    pub per_km_rate: u32,
    /// Charged for each stop beyond the first in the stop-count tier.
    pub per_stop_rate: u32,
    /// Assumed average pace used for travel time estimates.
    pub minutes_per_km: f64,
    pub currency_symbol: String,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            base_fare: 5,
            per_km_rate: 3,
            per_stop_rate: 2,
            minutes_per_km: 3.0,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculationMethod {
    Geo,
    StopCount,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareCalculation {
    pub fare_amount: u32,
    /// Absolute difference of the two ends' stop orders.
    pub distance_stops: u32,
    /// Rounded to two decimals; zero outside the geo tier.
    pub distance_km: f64,
    pub is_approximate: bool,
    pub calculation_method: CalculationMethod,
}

impl FareCalculation {
    pub fn distance(&self) -> Distance {
        Distance::from_kilometers(self.distance_km)
    }
}

#[derive(Default)]
pub struct FareEstimator {
    config: FareConfig,
}

impl FareEstimator {
    pub fn new(config: FareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FareConfig {
        &self.config
    }

    pub fn calculate(&self, route: &Route, source: &str, destination: &str) -> FareCalculation {
        self.calculate_for_entries(&route.stops, source, destination)
    }

    /// Same as [`Self::calculate`] for a bare stop sequence in travel order.
    pub fn calculate_for_entries(
        &self,
        entries: &[RouteStopEntry],
        source: &str,
        destination: &str,
    ) -> FareCalculation {
        let FareConfig {
            base_fare,
            per_km_rate,
            per_stop_rate,
            ..
        } = self.config;

        let order_of = |name: &str| {
            find_stop(entries, name)
                .map(|i| entries[i].stop_order)
                .unwrap_or(0)
        };
        let distance_stops =
            u32::try_from(order_of(destination).abs_diff(order_of(source))).unwrap_or(u32::MAX);

        let geo_distance = extract_segment(entries, source, destination)
            .and_then(|segment| segment.geo_distance());

        let (fare_amount, distance_km, calculation_method) = match geo_distance {
            Some(distance) => {
                let km = distance.as_kilometers();
                let charge = (km * f64::from(per_km_rate)).ceil() as u32;
                (base_fare.saturating_add(charge), km, CalculationMethod::Geo)
            }
            None if distance_stops > 0 => {
                let charge = (distance_stops - 1).saturating_mul(per_stop_rate);
                (
                    base_fare.saturating_add(charge),
                    0.0,
                    CalculationMethod::StopCount,
                )
            }
            None => (base_fare, 0.0, CalculationMethod::Default),
        };
        trace!(
            "Fare {source} -> {destination}: {calculation_method:?}, {distance_stops} stops, {distance_km} km"
        );

        FareCalculation {
            fare_amount: fare_amount.max(base_fare),
            distance_stops,
            distance_km: (distance_km * 100.0).round() / 100.0,
            is_approximate: calculation_method != CalculationMethod::Geo,
            calculation_method,
        }
    }

    /// Riding time at the configured pace; `None` when there is no distance,
    /// in which case the caller shows its own fallback range.
    pub fn travel_time(&self, fare: &FareCalculation) -> Option<Duration> {
        if fare.distance_km > 0.0 {
            let minutes = (fare.distance_km * self.config.minutes_per_km).ceil() as u32;
            Some(Duration::from_minutes(minutes))
        } else {
            None
        }
    }

    pub fn travel_time_text(&self, fare: &FareCalculation, fallback: &str) -> String {
        self.travel_time(fare)
            .map(shared::format_minutes)
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn format_fare(&self, amount: u32) -> String {
        shared::format_fare(&self.config.currency_symbol, amount)
    }

    pub fn format_distance(&self, distance_km: f64) -> String {
        shared::format_distance(Distance::from_kilometers(distance_km))
    }
}
