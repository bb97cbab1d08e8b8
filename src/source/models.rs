use serde::{Deserialize, Deserializer, Serialize};

use crate::network::FareInfo;

/// Numbers the backend sends either as JSON numbers or as numeric strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(value) => value.trim().parse().ok(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(value) if value.fract() == 0.0 => Some(*value as i64),
            Self::Number(_) => None,
            Self::Text(value) => value.trim().parse().ok(),
        }
    }
}

impl From<String> for LooseNumber {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Reads a JSON `null` as the type's default, for nullable text columns.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RawStop {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub name_hi: Option<String>,
    pub latitude: Option<LooseNumber>,
    pub longitude: Option<LooseNumber>,
    pub address: Option<String>,
    pub address_hi: Option<String>,
    pub description: Option<String>,
    pub description_hi: Option<String>,
    pub attractions: Option<Vec<String>>,
    pub attractions_hi: Option<Vec<String>>,
    pub facilities: Option<Vec<String>>,
    pub facilities_hi: Option<Vec<String>>,
    pub nearby_landmarks: Option<Vec<String>>,
    pub nearby_landmarks_hi: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RawRouteStop {
    pub bus_stops: Option<RawStop>,
    pub stop_order: Option<LooseNumber>,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
}

/// A bus record with its stop sequence embedded, as the route-detail query returns it.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct RawRoute {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub name_hi: Option<String>,
    pub description: Option<String>,
    pub description_hi: Option<String>,
    pub route_overview: Option<String>,
    pub route_overview_hi: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub highlights_hi: Option<Vec<String>>,
    pub travel_tips: Option<Vec<String>>,
    pub travel_tips_hi: Option<Vec<String>>,
    pub fare_info: Option<FareInfo>,
    pub is_active: Option<bool>,
    pub bus_routes: Option<Vec<RawRouteStop>>,
}

/// Row of the `buses` table dump.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BusRow {
    pub id: String,
    pub name: String,
    pub name_hi: Option<String>,
    pub description: Option<String>,
    pub description_hi: Option<String>,
    pub route_overview: Option<String>,
    pub route_overview_hi: Option<String>,
    pub highlights: Option<String>,
    pub highlights_hi: Option<String>,
    pub travel_tips: Option<String>,
    pub travel_tips_hi: Option<String>,
    pub fare_info: Option<String>,
    pub is_active: Option<String>,
}

/// Row of the `bus_stops` table dump.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StopRow {
    pub id: String,
    pub name: String,
    pub name_hi: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub address: Option<String>,
    pub address_hi: Option<String>,
    pub description: Option<String>,
    pub description_hi: Option<String>,
    pub attractions: Option<String>,
    pub attractions_hi: Option<String>,
    pub facilities: Option<String>,
    pub facilities_hi: Option<String>,
    pub nearby_landmarks: Option<String>,
    pub nearby_landmarks_hi: Option<String>,
    pub is_active: Option<String>,
}

/// Row of the `bus_routes` join table.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BusRouteRow {
    pub bus_id: String,
    pub stop_id: String,
    pub stop_order: Option<String>,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
}
