use serde::Serialize;
use yatri::{
    fare::{FareCalculation, FareEstimator},
    journey::{Highlights, MapRegion},
};

use crate::{dto::StopDto, state::TRAVEL_TIME_FALLBACK};

#[derive(Debug, Clone, Serialize)]
pub struct FareDto {
    #[serde(flatten)]
    pub calculation: FareCalculation,
    pub fare_text: String,
    /// Only present when the estimate came with a distance.
    pub distance_text: Option<String>,
    pub travel_time_text: String,
}

impl FareDto {
    pub fn from(calculation: FareCalculation, estimator: &FareEstimator) -> Self {
        Self {
            fare_text: estimator.format_fare(calculation.fare_amount),
            distance_text: (calculation.distance_km > 0.0)
                .then(|| estimator.format_distance(calculation.distance_km)),
            travel_time_text: estimator.travel_time_text(&calculation, TRAVEL_TIME_FALLBACK),
            calculation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JourneyDto {
    pub bus_id: String,
    pub source: StopDto,
    pub destination: StopDto,
    pub stops: Vec<StopDto>,
    pub total_stops: usize,
    pub intermediate_stops: usize,
    pub highlights: Highlights,
    pub fare: FareDto,
    pub tips: Vec<String>,
    pub region: MapRegion,
    pub maps_url: String,
}
