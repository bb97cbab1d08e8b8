use serde::Serialize;
use yatri::network::{FareInfo, Language, Localized, Route, RouteStopEntry};

use crate::dto::StopDto;

#[derive(Debug, Clone, Serialize)]
pub struct BusDto {
    pub id: String,
    pub name: String,
}

impl BusDto {
    pub fn from(route: &Route, language: Language) -> Self {
        Self {
            id: route.id.to_string(),
            name: route.name.get(language).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteStopDto {
    pub stop: StopDto,
    pub stop_order: i64,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
}

impl RouteStopDto {
    pub fn from(entry: &RouteStopEntry, language: Language) -> Self {
        Self {
            stop: StopDto::from(&entry.stop, language),
            stop_order: entry.stop_order,
            arrival_time: entry.arrival_time.map(|time| time.to_hm_string()),
            departure_time: entry.departure_time.map(|time| time.to_hm_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub route_overview: Option<String>,
    pub highlights: Vec<String>,
    pub travel_tips: Vec<String>,
    pub fare_info: Option<FareInfo>,
    pub stops: Vec<RouteStopDto>,
}

impl RouteDto {
    pub fn from(route: &Route, language: Language) -> Self {
        let text = |value: &Option<Localized<std::sync::Arc<str>>>| {
            value.as_ref().map(|value| value.get(language).to_string())
        };
        Self {
            id: route.id.to_string(),
            name: route.name.get(language).to_string(),
            description: text(&route.description),
            route_overview: text(&route.overview),
            highlights: route
                .highlights
                .get(language)
                .iter()
                .map(|item| item.to_string())
                .collect(),
            travel_tips: route
                .travel_tips
                .get(language)
                .iter()
                .map(|item| item.to_string())
                .collect(),
            fare_info: route.fare_info.clone(),
            stops: route
                .stops
                .iter()
                .map(|entry| RouteStopDto::from(entry, language))
                .collect(),
        }
    }
}
