use std::{borrow::Cow, fmt, str::FromStr};

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Wall-clock label expressed as minutes past midnight, rendered `HH:MM`.
///
/// The hour component is allowed to run past 23: an overloaded day keeps
/// accumulating into `25:10` rather than wrapping, so the end-of-day
/// feasibility check still sees hours >= 22.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Every day's first activity starts here.
    pub const DAY_START: ClockTime = ClockTime(10 * 60);

    /// Threshold after which a day without a meal stop looks for one.
    pub const LUNCH: ClockTime = ClockTime(13 * 60);

    pub fn from_hm(hour: u32, minute: u32) -> Self {
        ClockTime(hour * 60 + minute)
    }

    pub fn hour(&self) -> u32 {
        self.0 / 60
    }

    pub fn minute(&self) -> u32 {
        self.0 % 60
    }

    pub fn minutes_past_midnight(&self) -> u32 {
        self.0
    }

    pub fn plus_minutes(&self, minutes: u32) -> Self {
        ClockTime(self.0 + minutes)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("invalid clock time {0:?}, expected HH:MM")]
pub struct ParseClockTimeError(String);

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| ParseClockTimeError(s.to_owned()))?;

        let hour: u32 = hour
            .parse()
            .map_err(|_| ParseClockTimeError(s.to_owned()))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| ParseClockTimeError(s.to_owned()))?;

        if minute >= 60 {
            return Err(ParseClockTimeError(s.to_owned()));
        }

        Ok(ClockTime::from_hm(hour, minute))
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for ClockTime {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("ClockTime")
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^[0-9]{2,}:[0-9]{2}$"
        })
    }
}
