mod maps;
mod region;
mod tips;
pub use maps::*;
pub use region::*;
pub use tips::*;

use std::{collections::HashSet, sync::Arc};

use serde::Serialize;

use crate::{
    fare::{Segment, extract_segment},
    network::{Language, Localized, Route, Stop},
};

/// What the info screen shows about one ride.
#[derive(Debug, Clone, Copy)]
pub struct JourneyInfo<'a> {
    pub source: &'a Stop,
    pub destination: &'a Stop,
    pub segment: Segment<'a>,
}

/// Unique attractions, facilities and landmarks along a ride, first seen first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Highlights {
    pub attractions: Vec<String>,
    pub facilities: Vec<String>,
    pub landmarks: Vec<String>,
}

impl<'a> JourneyInfo<'a> {
    pub fn new(route: &'a Route, source: &str, destination: &str) -> Option<Self> {
        let segment = extract_segment(&route.stops, source, destination)?;
        Some(Self {
            source: &segment.source().stop,
            destination: &segment.destination().stop,
            segment,
        })
    }

    pub fn total_stops(&self) -> usize {
        self.segment.len()
    }

    /// Stops between the two ends, excluding both.
    pub fn intermediate_stops(&self) -> usize {
        self.segment.len().saturating_sub(2)
    }

    pub fn highlights(&self, language: Language) -> Highlights {
        let collect = |pick: fn(&'a Stop) -> &'a Localized<Box<[Arc<str>]>>| {
            let mut seen = HashSet::new();
            self.segment
                .stops()
                .flat_map(|stop| pick(stop).get(language).iter())
                .filter(|item| seen.insert(Arc::clone(item)))
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
        };
        Highlights {
            attractions: collect(|stop| &stop.details.attractions),
            facilities: collect(|stop| &stop.details.facilities),
            landmarks: collect(|stop| &stop.details.nearby_landmarks),
        }
    }
}
