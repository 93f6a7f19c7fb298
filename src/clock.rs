//! Source of "today" for every date-dependent computation.

use crate::error::{PlannerError, Result};
use chrono::{FixedOffset, Local, NaiveDate, Offset, Utc};
use std::{fmt, str::FromStr};

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The single zone the planner counts days in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The host's local time zone.
    #[default]
    Local,
    /// A fixed UTC offset such as `-05:00`. `utc` parses to a zero offset.
    Fixed(FixedOffset),
}

impl FromStr for Zone {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "" | "local" => return Ok(Zone::Local),
            "utc" | "z" => return Ok(Zone::Fixed(Utc.fix())),
            _ => {}
        }
        parse_offset(s).map(Zone::Fixed).ok_or_else(|| {
            PlannerError::Config(format!(
                "Invalid timezone '{}'. Use 'local', 'utc' or an offset like '-05:00'",
                s
            ))
        })
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => write!(f, "local"),
            Zone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

/// Parses `+HH:MM` or `+HHMM`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    s.parse::<FixedOffset>().ok()
}

/// Reads the wall clock in a configured zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    zone: Zone,
}

impl SystemClock {
    pub fn new(zone: Zone) -> Self {
        Self { zone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.zone {
            Zone::Local => Local::now().date_naive(),
            Zone::Fixed(offset) => Utc::now().with_timezone(&offset).date_naive(),
        }
    }
}

/// A clock pinned to one date, for tests and `--today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_parsing() {
        assert_eq!("local".parse::<Zone>().unwrap(), Zone::Local);
        assert_eq!(
            "UTC".parse::<Zone>().unwrap(),
            Zone::Fixed(FixedOffset::east_opt(0).unwrap())
        );
        assert_eq!(
            "-05:00".parse::<Zone>().unwrap(),
            Zone::Fixed(FixedOffset::west_opt(5 * 3600).unwrap())
        );
        assert_eq!(
            "+0530".parse::<Zone>().unwrap(),
            Zone::Fixed(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap())
        );
    }

    #[test]
    fn test_zone_rejects_names() {
        assert!("America/New_York".parse::<Zone>().is_err());
        assert!("+25:00".parse::<Zone>().is_err());
        assert!("5".parse::<Zone>().is_err());
    }

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
