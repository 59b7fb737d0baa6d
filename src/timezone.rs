use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::{ConvertError, TIMEZONE_OFFSETS, prelude::*};

/// A named fixed offset from UTC, drawn from `TIMEZONE_OFFSETS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{name}")]
pub struct TimeZone {
    name: &'static str,
    offset_minutes: i32,
}

impl TimeZone {
    /// Looks up a supported timezone by its exact name.
    ///
    /// # Errors
    /// Returns `ConvertError::UnsupportedTimezone` if the name is not configured.
    pub fn lookup(name: &str) -> Result<Self, ConvertError> {
        let trimmed = name.trim();
        Self::all()
            .find(|tz| tz.name == trimmed)
            .ok_or_else(|| ConvertError::UnsupportedTimezone(trimmed.to_owned()))
    }

    /// Every supported timezone, in configuration order
    pub fn all() -> impl Iterator<Item = Self> {
        TIMEZONE_OFFSETS
            .into_iter()
            .map(|(name, offset_minutes)| Self {
                name,
                offset_minutes,
            })
    }

    /// Names of every supported timezone, comma separated
    pub fn supported_names() -> String {
        TIMEZONE_OFFSETS
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub const fn name(self) -> &'static str {
        self.name
    }

    pub const fn offset_minutes(self) -> i32 {
        self.offset_minutes
    }

    /// Offset east of UTC
    pub fn utc_offset(self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.offset_minutes))
    }

    /// Converts a wall-clock time in this zone to UTC.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the result leaves chrono's range.
    pub fn to_utc(self, local: NaiveDateTime) -> Result<NaiveDateTime, ConvertError> {
        local
            .checked_sub_signed(self.utc_offset())
            .ok_or(ConvertError::OutOfRange)
    }

    /// Converts a UTC time to wall-clock time in this zone.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the result leaves chrono's range.
    pub fn to_local(self, utc: NaiveDateTime) -> Result<NaiveDateTime, ConvertError> {
        utc.checked_add_signed(self.utc_offset())
            .ok_or(ConvertError::OutOfRange)
    }
}
