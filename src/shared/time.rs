use std::ops::Add;

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// Seconds since midnight of the service day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Time(u32);

impl Time {
    pub fn now() -> Self {
        let now = Local::now();
        Self(now.num_seconds_from_midnight())
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    /// Hour of the day, wrapping schedules that run past midnight.
    pub const fn hour(&self) -> u32 {
        (self.0 / 3600) % 24
    }

    pub fn to_hm_string(&self) -> String {
        let h = self.0 / 3600;
        let m = (self.0 % 3600) / 60;
        format!("{:02}:{:02}", h, m)
    }

    /// Parses `HH:MM` or `HH:MM:SS`, the two shapes schedule columns come in.
    /// Hours past the `u32` seconds range yield `None`.
    pub fn from_hms(time: &str) -> Option<Self> {
        const HOUR_TO_SEC: u32 = 60 * 60;
        const MINUTE_TO_SEC: u32 = 60;
        let mut split = time.trim().split(':');
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        let seconds: u32 = match split.next() {
            Some(seconds) => seconds.parse().ok()?,
            None => 0,
        };
        if split.next().is_some() || minutes >= 60 || seconds >= 60 {
            return None;
        }
        let secs = hours
            .checked_mul(HOUR_TO_SEC)?
            .checked_add(minutes * MINUTE_TO_SEC + seconds)?;
        Some(Self(secs))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Duration(u32);

impl Duration {
    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    /// Saturates at `u32::MAX` seconds.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes.saturating_mul(60))
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    /// Whole minutes, rounded up.
    pub const fn as_minutes(&self) -> u32 {
        self.0.div_ceil(60)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

#[test]
fn parse_unparse_1() {
    let stime = Time::from_hms("08:30:00").unwrap();
    assert_eq!("08:30", stime.to_hm_string())
}

#[test]
fn parse_without_seconds() {
    let stime = Time::from_hms("17:05").unwrap();
    assert_eq!(stime.as_seconds(), 17 * 3600 + 5 * 60);
    assert_eq!(stime.hour(), 17);
}

#[test]
fn hour_wraps_past_midnight() {
    assert_eq!(Time::from_hms("25:10:00").unwrap().hour(), 1);
}

#[test]
fn duration_minutes_round_up() {
    assert_eq!(Duration::from_seconds(61).as_minutes(), 2);
    assert_eq!(Duration::from_minutes(9).as_minutes(), 9);
}

#[test]
fn huge_minutes_saturate() {
    assert_eq!(Duration::from_minutes(u32::MAX).as_seconds(), u32::MAX);
    let sum = Duration::from_seconds(u32::MAX) + Duration::from_seconds(1);
    assert_eq!(sum.as_seconds(), u32::MAX);
}
