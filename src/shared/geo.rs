use std::{cmp, fmt::Display, iter::Sum, ops::Add};

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS: Distance = Distance::from_kilometers(6371.0);

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, distance| acc + distance)
    }
}

impl Distance {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

/// A latitude/longitude pair in degrees.
///
/// Construct through [`Coordinate::new`] when the values come from outside
/// the crate; it rejects anything that is not a finite point on the globe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{},{}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        coordinate.is_valid().then_some(coordinate)
    }

    /// Both components finite and inside [-90, 90] / [-180, 180], bounds inclusive.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance on a spherical earth.
    pub fn haversine_distance(&self, coord: &Self) -> Distance {
        let dist_lat = f64::to_radians(coord.latitude - self.latitude);
        let dist_lon = f64::to_radians(coord.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(coord.latitude))
                * f64::powi(f64::sin(dist_lon / 2.0), 2);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        Distance::from_kilometers(EARTH_RADIUS.as_kilometers() * c)
    }
}

/// Sum of the haversine distances between consecutive points.
pub fn path_distance<'a, I>(points: I) -> Distance
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    let points: Vec<&Coordinate> = points.into_iter().collect();
    points
        .windows(2)
        .map(|pair| pair[0].haversine_distance(pair[1]))
        .sum()
}

#[test]
fn distance_test() {
    let coord_a = Coordinate {
        latitude: 48.85800943005911,
        longitude: 2.3514350059357927,
    };

    let coord_b = Coordinate {
        latitude: 51.5052389927712,
        longitude: -0.12495407345099824,
    };
    let d = coord_a.haversine_distance(&coord_b);
    assert!((d.as_kilometers() - 343.0).abs() < 1.0);
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn coordinate_bounds_are_inclusive() {
    assert!(Coordinate::new(90.0, 180.0).is_some());
    assert!(Coordinate::new(-90.0, -180.0).is_some());
    assert!(Coordinate::new(90.0001, 0.0).is_none());
    assert!(Coordinate::new(0.0, -180.5).is_none());
    assert!(Coordinate::new(f64::NAN, 0.0).is_none());
}
