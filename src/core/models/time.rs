//! Wall-clock time of day with minute granularity

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minutes in a day; every valid `ClockTime` is below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day stored as minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build a time from 24-hour components, returning `None` when out of range
    #[must_use]
    pub const fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Build a time from minutes since midnight, returning `None` past the end of the day
    #[must_use]
    pub const fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Minutes since midnight
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Absolute distance between two times in minutes
    #[must_use]
    pub const fn minutes_between(self, other: Self) -> u16 {
        self.0.abs_diff(other.0)
    }

    /// Parse a catalog time string.
    ///
    /// Accepts `"H:MM AM"`/`"H:MM PM"` (case-insensitive, space before the
    /// meridiem optional, `12:00 AM` is midnight and `12:00 PM` is noon) and a
    /// bare 24-hour `"HH:MM"`. Anything else, including `"TBA"` and the empty
    /// string, yields `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let upper = trimmed.to_ascii_uppercase();
        let (clock, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
            (rest.trim_end(), Some(false))
        } else if let Some(rest) = upper.strip_suffix("PM") {
            (rest.trim_end(), Some(true))
        } else {
            (upper.as_str(), None)
        };

        let (hour_str, minute_str) = clock.split_once(':')?;
        if minute_str.len() != 2 || hour_str.is_empty() || hour_str.len() > 2 {
            return None;
        }
        let hour: u16 = hour_str.parse().ok()?;
        let minute: u16 = minute_str.parse().ok()?;

        match meridiem {
            Some(is_pm) => {
                if !(1..=12).contains(&hour) {
                    return None;
                }
                let hour24 = match (hour, is_pm) {
                    (12, false) => 0,
                    (12, true) => 12,
                    (h, false) => h,
                    (h, true) => h + 12,
                };
                Self::from_hm(hour24, minute)
            }
            None => Self::from_hm(hour, minute),
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour24 = self.0 / 60;
        let minute = self.0 % 60;
        let period = if hour24 < 12 { "AM" } else { "PM" };
        let hour12 = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{hour12}:{minute:02} {period}")
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time of day: '{raw}'")))
    }
}

/// Serde adapter for optional times: `None` is written as `"TBA"`, and any
/// unparseable string reads back as `None`.
pub mod optional_time {
    use super::ClockTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Text written for an absent time
    pub const ABSENT: &str = "TBA";

    /// Serialize an optional time
    ///
    /// # Errors
    /// Propagates serializer errors
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<ClockTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.collect_str(time),
            None => serializer.serialize_str(ABSENT),
        }
    }

    /// Deserialize an optional time, treating unparseable text as absent
    ///
    /// # Errors
    /// Propagates deserializer errors for non-string input
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ClockTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(ClockTime::parse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meridiem_times() {
        assert_eq!(ClockTime::parse("9:15 AM").map(ClockTime::minutes), Some(555));
        assert_eq!(ClockTime::parse("2:30 PM").map(ClockTime::minutes), Some(870));
        assert_eq!(ClockTime::parse("5:30 pm").map(ClockTime::minutes), Some(1050));
        assert_eq!(ClockTime::parse("10:00AM").map(ClockTime::minutes), Some(600));
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(ClockTime::parse("12:00 AM").map(ClockTime::minutes), Some(0));
        assert_eq!(ClockTime::parse("12:00 PM").map(ClockTime::minutes), Some(720));
        assert_eq!(ClockTime::parse("12:45 AM").map(ClockTime::minutes), Some(45));
    }

    #[test]
    fn test_parse_twenty_four_hour() {
        assert_eq!(ClockTime::parse("14:05").map(ClockTime::minutes), Some(845));
        assert_eq!(ClockTime::parse("00:00").map(ClockTime::minutes), Some(0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "TBA", "badtime", "13:00 PM", "0:30 AM", "9:5 AM", "9:60 AM", "24:00", ":30"] {
            assert!(ClockTime::parse(bad).is_none(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ClockTime::parse("9:15 AM").unwrap().to_string(), "9:15 AM");
        assert_eq!(ClockTime::parse("12:00 PM").unwrap().to_string(), "12:00 PM");
        assert_eq!(ClockTime::parse("00:05").unwrap().to_string(), "12:05 AM");
        assert_eq!(ClockTime::parse("19:10").unwrap().to_string(), "7:10 PM");
    }

    #[test]
    fn test_minutes_between() {
        let early = ClockTime::parse("9:15 AM").unwrap();
        let late = ClockTime::parse("10:00 AM").unwrap();
        assert_eq!(early.minutes_between(late), 45);
        assert_eq!(late.minutes_between(early), 45);
    }

    #[test]
    fn test_serde_as_string() {
        let time = ClockTime::parse("1:00 PM").unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"1:00 PM\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, time);
        assert!(serde_json::from_str::<ClockTime>("\"noonish\"").is_err());
    }
}
