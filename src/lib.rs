//! Conversion between real-world time and Universal Civ Time (UCT).
//!
//! UCT is a fixed calendar of 500-day years, each split into twelve named
//! months: eleven of 42 days followed by Thandris with 38. UCT year 1, day 1,
//! hour 0 is 2022-06-02 00:00 UTC, and UCT hours are UTC clock hours.
//!
//! ```
//! use uct_converter::{UctMonth, convert_real_to_uct};
//!
//! let uct = convert_real_to_uct("PST", 2022, 6, 2, 12, "PM").unwrap();
//! assert_eq!(uct.year().get(), 1);
//! assert_eq!(uct.month(), UctMonth::Norya);
//! assert_eq!(uct.day(), 1);
//! assert_eq!(uct.hour().get(), 20);
//! ```

mod consts;
mod convert;
mod prelude;
pub mod prompt;
mod timezone;
mod types;

pub use consts::*;
pub use convert::{RealTime, UctDate, convert_real_to_uct, convert_uct_to_real};
pub use timezone::TimeZone;
pub use types::{DayOfYear, Hour, Meridiem, UctMonth, UctYear};

use crate::prelude::*;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::Serialize;

/// Real-world instant (UTC) of UCT year 1, day 1, hour 0
pub const UCT_EPOCH: NaiveDateTime = match (
    NaiveDate::from_ymd_opt(UCT_EPOCH_YEAR, UCT_EPOCH_MONTH, UCT_EPOCH_DAY),
    NaiveTime::from_hms_opt(UCT_EPOCH_HOUR, 0, 0),
) {
    (Some(date), Some(time)) => NaiveDateTime::new(date, time),
    _ => panic!("UCT epoch constants do not form a valid date"),
};

const SECONDS_PER_DAY: i64 = 86_400;

/// Broad classification of a [`ConvertError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied a value that can never be valid.
    Validation,
    /// The value is well formed but outside what the calendars support.
    Domain,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Unsupported timezone: {0} (supported: {supported})", supported = TimeZone::supported_names())]
    UnsupportedTimezone(String),

    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid hour: {0} (must be {min}-{max})", min = MIN_HOUR_12, max = MAX_HOUR_12)]
    InvalidHour12(u32),

    #[error("Invalid hour period: {0:?} (expected AM or PM)")]
    InvalidHourPeriod(String),

    #[error("Invalid UCT year: {0} (must be at least 1)")]
    InvalidUctYear(u32),

    #[error("Unknown UCT month: {0}")]
    UnknownUctMonth(String),

    #[error("Invalid day {day} for {month} (must be 1-{max})", max = .month.days())]
    InvalidUctDay { month: UctMonth, day: u16 },

    #[error("Invalid day of UCT year: {0} (must be 1-{max})", max = UCT_DAYS_PER_YEAR)]
    InvalidDayOfYear(u16),

    #[error("Invalid UCT hour: {0} (must be 0-{max})", max = MAX_HOUR_24)]
    InvalidHour(u8),

    #[error("{0} UTC is before the UCT epoch")]
    BeforeEpoch(NaiveDateTime),

    #[error("Date is outside the supported range")]
    OutOfRange,
}

impl ConvertError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedTimezone(_) | Self::BeforeEpoch(_) | Self::OutOfRange => {
                ErrorKind::Domain
            }
            Self::InvalidDate { .. }
            | Self::InvalidHour12(_)
            | Self::InvalidHourPeriod(_)
            | Self::InvalidUctYear(_)
            | Self::UnknownUctMonth(_)
            | Self::InvalidUctDay { .. }
            | Self::InvalidDayOfYear(_)
            | Self::InvalidHour(_) => ErrorKind::Validation,
        }
    }
}

/// A point on the UCT calendar at hour precision.
///
/// The day is always within `1..=month.days()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "Year {year}, Month {month}, Day {day}, Hour {hour}:00 UCT")]
pub struct UctTimestamp {
    year: UctYear,
    month: UctMonth,
    day: u16,
    hour: Hour,
}

impl UctTimestamp {
    /// Creates a timestamp from a month and day of month.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidUctDay` if the day is 0 or past the end of the month.
    pub const fn new(
        year: UctYear,
        month: UctMonth,
        day: u16,
        hour: Hour,
    ) -> Result<Self, ConvertError> {
        if day == 0 || day > month.days() {
            return Err(ConvertError::InvalidUctDay { month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
        })
    }

    /// Creates a timestamp from a day of the year
    pub fn from_day_of_year(year: UctYear, day_of_year: DayOfYear, hour: Hour) -> Self {
        let (month, day) = UctMonth::from_day_of_year(day_of_year);
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Locates a UTC instant on the UCT calendar.
    ///
    /// Whole days are counted by floor division from [`UCT_EPOCH`]; the hour
    /// is the UTC clock hour of `utc`.
    ///
    /// # Errors
    /// Returns `ConvertError::BeforeEpoch` for instants earlier than the epoch,
    /// or `ConvertError::OutOfRange` if the year does not fit.
    pub fn from_utc(utc: NaiveDateTime) -> Result<Self, ConvertError> {
        if utc < UCT_EPOCH {
            return Err(ConvertError::BeforeEpoch(utc));
        }
        let days_since_epoch = utc
            .signed_duration_since(UCT_EPOCH)
            .num_seconds()
            .div_euclid(SECONDS_PER_DAY);
        let days_per_year = i64::from(UCT_DAYS_PER_YEAR);

        let year = u32::try_from(days_since_epoch.div_euclid(days_per_year) + 1)
            .map_err(|_| ConvertError::OutOfRange)?;
        let day_of_year = u16::try_from(days_since_epoch.rem_euclid(days_per_year) + 1)
            .map_err(|_| ConvertError::OutOfRange)?;
        let hour = u8::try_from(utc.hour()).map_err(|_| ConvertError::OutOfRange)?;

        Ok(Self::from_day_of_year(
            UctYear::new(year)?,
            DayOfYear::new(day_of_year)?,
            Hour::new(hour)?,
        ))
    }

    /// The UTC instant at which this UCT hour begins.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the instant is beyond chrono's range.
    pub fn to_utc(&self) -> Result<NaiveDateTime, ConvertError> {
        let days_since_epoch = (i64::from(self.year.get()) - 1) * i64::from(UCT_DAYS_PER_YEAR)
            + i64::from(self.day_of_year().get())
            - 1;
        let days = TimeDelta::try_days(days_since_epoch).ok_or(ConvertError::OutOfRange)?;
        UCT_EPOCH
            .checked_add_signed(days)
            .and_then(|midnight| {
                midnight.checked_add_signed(TimeDelta::hours(i64::from(self.hour.get())))
            })
            .ok_or(ConvertError::OutOfRange)
    }

    pub const fn year(&self) -> UctYear {
        self.year
    }

    pub const fn month(&self) -> UctMonth {
        self.month
    }

    /// Day of the month, 1-based
    pub const fn day(&self) -> u16 {
        self.day
    }

    pub const fn hour(&self) -> Hour {
        self.hour
    }

    /// Day of the year, 1-based
    pub fn day_of_year(&self) -> DayOfYear {
        let first = self.month.first_day_of_year().get();
        // day is bounded by the month length, so this stays within the year
        DayOfYear::new(first + self.day - 1).unwrap_or_else(|_| self.month.first_day_of_year())
    }
}
