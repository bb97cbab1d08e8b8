use serde::Serialize;
use yatri::{
    network::{Language, Stop},
    shared::Coordinate,
};

#[derive(Debug, Clone, Serialize)]
pub struct StopDto {
    pub id: String,
    pub name: String,
    pub alternate_name: Option<String>,
    pub coordinate: Option<Coordinate>,
    pub address: Option<String>,
}

impl StopDto {
    pub fn from(stop: &Stop, language: Language) -> Self {
        Self {
            id: stop.id.to_string(),
            name: stop.display_name(language).to_string(),
            alternate_name: stop.alternate_name.as_deref().map(str::to_string),
            coordinate: stop.coordinate,
            address: stop
                .details
                .address
                .as_ref()
                .map(|address| address.get(language).to_string()),
        }
    }
}
