//! # yatri
//!
//! Pure computation behind a city bus lookup app: pick a source and a
//! destination stop, find the buses that serve both, and estimate what the
//! ride costs, how far it goes and how long it takes.
//!
//! Data enters through [`source::RouteSource`], is validated into the
//! [`network`] model, and is consumed by [`fare`] and [`journey`].

pub mod fare;
pub mod journey;
pub mod network;
pub mod shared;
pub mod source;

pub mod prelude {
    pub use crate::fare::{
        CalculationMethod, FareCalculation, FareConfig, FareEstimator, Segment,
        extract_segment,
    };
    pub use crate::journey::{JourneyInfo, MapRegion, MapsConfig, MapsLinks, journey_tips};
    pub use crate::network::{Language, Localized, Network, Route, RouteStopEntry, Stop};
    pub use crate::shared::{Coordinate, Distance, Duration, Time};
    pub use crate::source::RouteSource;
}
