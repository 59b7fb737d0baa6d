use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::debug;

use crate::{
    ConvertError, DayOfYear, Hour, Meridiem, REAL_TIME_FORMAT, TimeZone, UctMonth, UctTimestamp,
    UctYear, prelude::*,
};

/// How a day is identified within a UCT year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UctDate {
    /// A named month and a 1-based day within it
    MonthDay { month: UctMonth, day: u16 },
    /// A 1-based day of the 500-day year
    DayOfYear(DayOfYear),
}

/// A wall-clock time in one of the supported timezones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{}: {}", zone, "local.format(REAL_TIME_FORMAT)")]
pub struct RealTime {
    pub zone: TimeZone,
    pub local: NaiveDateTime,
}

/// Converts a real-world 12-hour clock reading to UCT.
///
/// The reading is interpreted in `timezone`, shifted to UTC, and placed on
/// the UCT calendar by whole days elapsed since the epoch. The UCT hour is
/// the UTC clock hour.
///
/// # Errors
/// - `UnsupportedTimezone` if `timezone` is not configured
/// - `InvalidHourPeriod` if `meridiem` is not AM or PM
/// - `InvalidHour12` if `hour12` is outside 1-12
/// - `InvalidDate` if year, month and day are not a real calendar date
/// - `BeforeEpoch` if the instant precedes UCT year 1
#[tracing::instrument]
pub fn convert_real_to_uct(
    timezone: &str,
    year: i32,
    month: u32,
    day: u32,
    hour12: u32,
    meridiem: &str,
) -> Result<UctTimestamp, ConvertError> {
    let zone = TimeZone::lookup(timezone)?;
    let hour = meridiem.parse::<Meridiem>()?.to_24_hour(hour12)?;
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ConvertError::InvalidDate { year, month, day })?;
    let local = date.and_time(
        NaiveTime::from_hms_opt(u32::from(hour.get()), 0, 0).ok_or(ConvertError::OutOfRange)?,
    );

    let utc = zone.to_utc(local)?;
    debug!(%local, %utc, offset_minutes = zone.offset_minutes(), "normalized to UTC");

    let uct = UctTimestamp::from_utc(utc)?;
    debug!(%uct, day_of_year = uct.day_of_year().get(), "converted to UCT");
    Ok(uct)
}

/// Converts a UCT hour to the matching wall-clock time in every supported
/// timezone, in configuration order.
///
/// # Errors
/// - `InvalidUctDay` if a month-day pair does not exist
/// - `OutOfRange` if the instant is beyond the real calendar's range
#[tracing::instrument]
pub fn convert_uct_to_real(
    year: UctYear,
    date: UctDate,
    hour: Hour,
) -> Result<Vec<RealTime>, ConvertError> {
    let uct = match date {
        UctDate::MonthDay { month, day } => UctTimestamp::new(year, month, day, hour)?,
        UctDate::DayOfYear(day_of_year) => UctTimestamp::from_day_of_year(year, day_of_year, hour),
    };
    let utc = uct.to_utc()?;
    debug!(%uct, %utc, "located UCT hour");

    TimeZone::all()
        .map(|zone| zone.to_local(utc).map(|local| RealTime { zone, local }))
        .collect()
}
