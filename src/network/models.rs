use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    fare::find_stop,
    shared::{Coordinate, Identifiable, Time},
};

/// Display language of the app.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "hi")]
    Hindi,
}

impl Language {
    /// Accepts ISO codes as well as full names; unknown values fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "hi" | "hindi" => Self::Hindi,
            _ => Self::English,
        }
    }
}

/// A value in the primary language with an optional secondary-language variant.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub primary: T,
    pub alternate: Option<T>,
}

impl<T> Localized<T> {
    pub fn new(primary: T, alternate: Option<T>) -> Self {
        Self { primary, alternate }
    }

    pub fn get(&self, language: Language) -> &T {
        match (language, &self.alternate) {
            (Language::Hindi, Some(alternate)) => alternate,
            _ => &self.primary,
        }
    }
}

impl Localized<Arc<str>> {
    /// Builds from two loose columns; `None` when both are empty.
    pub fn from_columns(primary: Option<String>, alternate: Option<String>) -> Option<Self> {
        let primary = primary.filter(|value| !value.is_empty());
        let alternate = alternate.filter(|value| !value.is_empty());
        match (primary, alternate) {
            (Some(primary), alternate) => Some(Self::new(primary.into(), alternate.map(Into::into))),
            (None, Some(alternate)) => Some(Self::new(alternate.into(), None)),
            (None, None) => None,
        }
    }
}

impl Localized<Box<[Arc<str>]>> {
    pub fn from_lists(primary: Option<Vec<String>>, alternate: Option<Vec<String>>) -> Self {
        let into_list =
            |values: Vec<String>| -> Box<[Arc<str>]> { values.into_iter().map(Into::into).collect() };
        Self {
            primary: primary.map(into_list).unwrap_or_default(),
            alternate: alternate.filter(|values| !values.is_empty()).map(into_list),
        }
    }
}

/// Descriptive extras shown on the stop and info screens.
#[derive(Debug, Default, Clone)]
pub struct StopDetails {
    pub address: Option<Localized<Arc<str>>>,
    pub description: Option<Localized<Arc<str>>>,
    pub attractions: Localized<Box<[Arc<str>]>>,
    pub facilities: Localized<Box<[Arc<str>]>>,
    pub nearby_landmarks: Localized<Box<[Arc<str>]>>,
}

/// A physical point where passengers board or alight.
#[derive(Debug, Default, Clone)]
pub struct Stop {
    /// Unique external identifier.
    pub id: Arc<str>,
    /// Name in the primary language.
    pub name: Arc<str>,
    /// Name in the secondary language, matched just like `name`.
    pub alternate_name: Option<Arc<str>>,
    pub normalized_name: Arc<str>,
    pub normalized_alternate_name: Option<Arc<str>>,
    /// Only ever holds a coordinate that passed [`Coordinate::new`].
    pub coordinate: Option<Coordinate>,
    pub details: StopDetails,
}

impl Stop {
    /// Exact, case-sensitive match on either name. Empty names match nothing.
    pub fn matches(&self, name: &str) -> bool {
        !name.is_empty() && (&*self.name == name || self.alternate_name.as_deref() == Some(name))
    }

    pub fn display_name(&self, language: Language) -> &str {
        match (language, &self.alternate_name) {
            (Language::Hindi, Some(alternate)) => alternate,
            _ => &self.name,
        }
    }
}

impl Identifiable for Stop {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    fn normalized_alternate_name(&self) -> Option<&str> {
        self.normalized_alternate_name.as_deref()
    }
}

/// One row of a route's ordered stop sequence.
#[derive(Debug, Default, Clone)]
pub struct RouteStopEntry {
    pub stop: Stop,
    /// Position hint from the backend; not contiguous, not an index.
    pub stop_order: i64,
    pub arrival_time: Option<Time>,
    pub departure_time: Option<Time>,
}

/// Printed fares as published by the operator, kept verbatim.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareInfo {
    pub regular_fare: Option<String>,
    pub student_fare: Option<String>,
    pub senior_citizen_fare: Option<String>,
    pub ac_bus_fare: Option<String>,
}

/// A bus line and the ordered stops it serves.
#[derive(Debug, Default, Clone)]
pub struct Route {
    pub index: u32,
    pub id: Arc<str>,
    pub name: Localized<Arc<str>>,
    pub description: Option<Localized<Arc<str>>>,
    pub overview: Option<Localized<Arc<str>>>,
    pub highlights: Localized<Box<[Arc<str>]>>,
    pub travel_tips: Localized<Box<[Arc<str>]>>,
    pub fare_info: Option<FareInfo>,
    /// Physical traversal order.
    pub stops: Box<[RouteStopEntry]>,
}

impl Route {
    /// Index of the first entry whose stop matches `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        find_stop(&self.stops, name)
    }

    pub fn serves(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }
}
