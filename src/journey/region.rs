use serde::{Deserialize, Serialize};

use crate::{fare::Segment, shared::Coordinate};

const PADDING: f64 = 1.4;
const MIN_DELTA: f64 = 0.01;

/// Map viewport: a centre and the span shown around it, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for MapRegion {
    /// Jodhpur city centre.
    fn default() -> Self {
        Self {
            latitude: 26.2389,
            longitude: 73.0243,
            latitude_delta: 0.05,
            longitude_delta: 0.05,
        }
    }
}

impl MapRegion {
    /// Padded bounding box of the given points, or `fallback` when there are none.
    pub fn bounding<'a, I>(points: I, fallback: MapRegion) -> Self
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut points = points.into_iter().peekable();
        if points.peek().is_none() {
            return fallback;
        }
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
        for point in points {
            min_lat = min_lat.min(point.latitude);
            max_lat = max_lat.max(point.latitude);
            min_lon = min_lon.min(point.longitude);
            max_lon = max_lon.max(point.longitude);
        }
        Self {
            latitude: (min_lat + max_lat) / 2.0,
            longitude: (min_lon + max_lon) / 2.0,
            latitude_delta: ((max_lat - min_lat) * PADDING).max(MIN_DELTA),
            longitude_delta: ((max_lon - min_lon) * PADDING).max(MIN_DELTA),
        }
    }

    /// Frames every stop of the segment that has a coordinate; stops
    /// without one are skipped rather than voiding the region.
    pub fn for_segment(segment: &Segment<'_>, fallback: MapRegion) -> Self {
        Self::bounding(segment.stops().filter_map(|stop| stop.coordinate.as_ref()), fallback)
    }
}
