use std::ops::RangeInclusive;

use crate::{
    network::{RouteStopEntry, Stop},
    shared::{Coordinate, Distance, path_distance},
};

/// Index of the first entry whose stop carries `name` in either language.
/// Empty names never match.
pub fn find_stop(entries: &[RouteStopEntry], name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    entries.iter().position(|entry| entry.stop.matches(name))
}

/// The inclusive run of a route's stops between two named stops.
///
/// The run always keeps the route's own travel direction: asking for
/// `(B, A)` yields the same slice as `(A, B)`. `source_index` and
/// `destination_index` still record which end the caller meant.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub source_index: usize,
    pub destination_index: usize,
    pub entries: &'a [RouteStopEntry],
}

impl<'a> Segment<'a> {
    pub fn start(&self) -> usize {
        self.source_index.min(self.destination_index)
    }

    pub fn end(&self) -> usize {
        self.source_index.max(self.destination_index)
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.start()..=self.end()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for an extracted segment; present for slice parity.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_single_stop(&self) -> bool {
        self.entries.len() == 1
    }

    /// Whether the source sits after the destination in travel order.
    pub fn is_reversed(&self) -> bool {
        self.source_index > self.destination_index
    }

    pub fn source(&self) -> &'a RouteStopEntry {
        &self.entries[self.source_index - self.start()]
    }

    pub fn destination(&self) -> &'a RouteStopEntry {
        &self.entries[self.destination_index - self.start()]
    }

    pub fn stops(&self) -> impl Iterator<Item = &'a Stop> + 'a {
        self.entries.iter().map(|entry| &entry.stop)
    }

    /// Every coordinate in travel order, or `None` as soon as one stop lacks one.
    pub fn coordinates(&self) -> Option<Vec<Coordinate>> {
        self.entries
            .iter()
            .map(|entry| entry.stop.coordinate)
            .collect()
    }

    /// Sum of consecutive haversine legs. Needs at least two stops and a
    /// coordinate on every one of them; partial sums are never produced.
    pub fn geo_distance(&self) -> Option<Distance> {
        if self.entries.len() < 2 {
            return None;
        }
        let coordinates = self.coordinates()?;
        Some(path_distance(&coordinates))
    }
}

/// Cuts the segment between `source` and `destination` out of `entries`.
/// `None` when either name has no match, which is an answer, not a failure.
pub fn extract_segment<'a>(
    entries: &'a [RouteStopEntry],
    source: &str,
    destination: &str,
) -> Option<Segment<'a>> {
    let source_index = find_stop(entries, source)?;
    let destination_index = find_stop(entries, destination)?;
    let lo = source_index.min(destination_index);
    let hi = source_index.max(destination_index);
    Some(Segment {
        source_index,
        destination_index,
        entries: &entries[lo..=hi],
    })
}
