use crate::ConvertError;
use crate::consts::{MAX_HOUR_12, MAX_HOUR_24, MIN_HOUR_12, UCT_DAYS_PER_YEAR, UCT_MONTHS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU32;
use std::str::FromStr;

/// A UCT year, counted from 1 at the epoch.
/// Uses `NonZeroU32` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct UctYear(NonZeroU32);

impl UctYear {
    /// The year containing the epoch
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a new `UctYear`, rejecting 0
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidUctYear` if the value is 0.
    pub fn new(value: u32) -> Result<Self, ConvertError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(ConvertError::InvalidUctYear(value))
    }

    /// Returns the year value as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for UctYear {
    type Error = ConvertError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UctYear> for u32 {
    fn from(year: UctYear) -> Self {
        year.0.get()
    }
}

impl fmt::Display for UctYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 1-based day within a UCT year, guaranteed to be in `1..=UCT_DAYS_PER_YEAR`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct DayOfYear(NonZeroU16);

impl DayOfYear {
    /// Creates a new `DayOfYear`, validating that it's within the year
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidDayOfYear` if the value is 0 or > `UCT_DAYS_PER_YEAR`.
    pub fn new(value: u16) -> Result<Self, ConvertError> {
        let non_zero = NonZeroU16::new(value).ok_or(ConvertError::InvalidDayOfYear(value))?;
        if value > UCT_DAYS_PER_YEAR {
            return Err(ConvertError::InvalidDayOfYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for DayOfYear {
    type Error = ConvertError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfYear> for u16 {
    fn from(day: DayOfYear) -> Self {
        day.0.get()
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An hour of the day on a 24-hour clock (`0..=23`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    /// Midnight
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a new Hour
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidHour` if the value is > 23.
    pub const fn new(value: u8) -> Result<Self, ConvertError> {
        if value > MAX_HOUR_24 {
            return Err(ConvertError::InvalidHour(value));
        }
        Ok(Self(value))
    }

    /// Returns the hour value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Hour {
    type Error = ConvertError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half of a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Converts an hour on a 12-hour clock to a 24-hour [`Hour`].
    ///
    /// 12 AM is midnight and 12 PM is noon; every other PM hour gains 12.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidHour12` if `hour12` is outside `1..=12`.
    pub fn to_24_hour(self, hour12: u32) -> Result<Hour, ConvertError> {
        if !(MIN_HOUR_12..=MAX_HOUR_12).contains(&hour12) {
            return Err(ConvertError::InvalidHour12(hour12));
        }
        let hour = match (self, hour12) {
            (Self::Am, MAX_HOUR_12) => 0,
            (Self::Pm, MAX_HOUR_12) | (Self::Am, _) => hour12,
            (Self::Pm, _) => hour12 + MAX_HOUR_12,
        };
        u8::try_from(hour)
            .map_err(|_| ConvertError::InvalidHour12(hour12))
            .and_then(Hour::new)
    }
}

impl FromStr for Meridiem {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("am") {
            Ok(Self::Am)
        } else if trimmed.eq_ignore_ascii_case("pm") {
            Ok(Self::Pm)
        } else {
            Err(ConvertError::InvalidHourPeriod(s.to_owned()))
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Am => f.write_str("AM"),
            Self::Pm => f.write_str("PM"),
        }
    }
}

/// One of the twelve UCT months, in calendar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UctMonth {
    Norya,
    Solstara,
    Yrennis,
    Veldra,
    Zirath,
    Gorrath,
    Lathorim,
    Meldrith,
    Fensira,
    Ardenis,
    Phelora,
    Thandris,
}

impl UctMonth {
    /// Every month in calendar order, index-aligned with `UCT_MONTHS`
    pub const ALL: [Self; 12] = [
        Self::Norya,
        Self::Solstara,
        Self::Yrennis,
        Self::Veldra,
        Self::Zirath,
        Self::Gorrath,
        Self::Lathorim,
        Self::Meldrith,
        Self::Fensira,
        Self::Ardenis,
        Self::Phelora,
        Self::Thandris,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        UCT_MONTHS[self.index()].0
    }

    /// Length of the month in days
    pub const fn days(self) -> u16 {
        UCT_MONTHS[self.index()].1
    }

    /// Day of the year on which this month starts
    pub const fn first_day_of_year(self) -> DayOfYear {
        let mut before = 0;
        let mut i = 0;
        while i < self.index() {
            before += UCT_MONTHS[i].1;
            i += 1;
        }
        // before + 1 is at most 463, never zero
        match NonZeroU16::new(before + 1) {
            Some(day) => DayOfYear(day),
            None => DayOfYear(NonZeroU16::MIN),
        }
    }

    /// Locates a day of the year, returning its month and 1-based day of month.
    pub fn from_day_of_year(day_of_year: DayOfYear) -> (Self, u16) {
        let target = day_of_year.get();
        let mut cumulative = 0;
        for month in Self::ALL {
            if target <= cumulative + month.days() {
                return (month, target - cumulative);
            }
            cumulative += month.days();
        }
        // DayOfYear never exceeds the table total, which is checked at compile time
        (Self::Thandris, target - (UCT_DAYS_PER_YEAR - Self::Thandris.days()))
    }
}

impl FromStr for UctMonth {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|month| month.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConvertError::UnknownUctMonth(s.to_owned()))
    }
}

impl fmt::Display for UctMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doy(value: u16) -> DayOfYear {
        DayOfYear::new(value).unwrap()
    }

    #[test]
    fn test_uct_year_new() {
        assert_eq!(UctYear::new(1).unwrap(), UctYear::FIRST);
        assert_eq!(UctYear::new(7).unwrap().get(), 7);
        assert!(matches!(UctYear::new(0), Err(ConvertError::InvalidUctYear(0))));
    }

    #[test]
    fn test_uct_year_serde() {
        let year = UctYear::new(3).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "3");
        assert_eq!(serde_json::from_str::<UctYear>(&json).unwrap(), year);
        assert!(serde_json::from_str::<UctYear>("0").is_err());
    }

    #[test]
    fn test_day_of_year_bounds() {
        assert!(DayOfYear::new(1).is_ok());
        assert!(DayOfYear::new(500).is_ok());
        assert!(matches!(
            DayOfYear::new(0),
            Err(ConvertError::InvalidDayOfYear(0))
        ));
        assert!(matches!(
            DayOfYear::new(501),
            Err(ConvertError::InvalidDayOfYear(501))
        ));
    }

    #[test]
    fn test_day_of_year_serde() {
        let day = DayOfYear::new(463).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "463");
        assert_eq!(serde_json::from_str::<DayOfYear>(&json).unwrap(), day);

        assert!(serde_json::from_str::<DayOfYear>("0").is_err());
        assert!(serde_json::from_str::<DayOfYear>("501").is_err());
    }

    #[test]
    fn test_hour_serde() {
        let hour = Hour::new(23).unwrap();
        let json = serde_json::to_string(&hour).unwrap();
        assert_eq!(json, "23");
        assert_eq!(serde_json::from_str::<Hour>(&json).unwrap(), hour);
        assert_eq!(serde_json::from_str::<Hour>("0").unwrap(), Hour::MIDNIGHT);

        assert!(serde_json::from_str::<Hour>("24").is_err());
    }

    #[test]
    fn test_hour_bounds() {
        assert_eq!(Hour::new(0).unwrap(), Hour::MIDNIGHT);
        assert_eq!(Hour::new(23).unwrap().get(), 23);
        assert!(matches!(Hour::new(24), Err(ConvertError::InvalidHour(24))));

        let result: Result<Hour, _> = 30.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_meridiem_parse_is_case_insensitive() {
        assert_eq!("am".parse::<Meridiem>().unwrap(), Meridiem::Am);
        assert_eq!("AM".parse::<Meridiem>().unwrap(), Meridiem::Am);
        assert_eq!(" Pm ".parse::<Meridiem>().unwrap(), Meridiem::Pm);
    }

    #[test]
    fn test_meridiem_parse_rejects_garbage() {
        for input in ["", "a.m.", "noon", "p"] {
            assert!(
                matches!(
                    input.parse::<Meridiem>(),
                    Err(ConvertError::InvalidHourPeriod(_))
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_meridiem_display_and_serde() {
        for meridiem in [Meridiem::Am, Meridiem::Pm] {
            let shown = meridiem.to_string();
            assert_eq!(shown.parse::<Meridiem>().unwrap(), meridiem);

            let json = serde_json::to_string(&meridiem).unwrap();
            assert_eq!(json, format!("\"{shown}\""));
            assert_eq!(serde_json::from_str::<Meridiem>(&json).unwrap(), meridiem);
        }
        assert_eq!(Meridiem::Pm.to_string(), "PM");
        assert!(serde_json::from_str::<Meridiem>("\"Noon\"").is_err());
    }

    #[test]
    fn test_to_24_hour() {
        assert_eq!(Meridiem::Am.to_24_hour(12).unwrap().get(), 0);
        assert_eq!(Meridiem::Pm.to_24_hour(12).unwrap().get(), 12);
        assert_eq!(Meridiem::Am.to_24_hour(1).unwrap().get(), 1);
        assert_eq!(Meridiem::Pm.to_24_hour(1).unwrap().get(), 13);
        assert_eq!(Meridiem::Am.to_24_hour(11).unwrap().get(), 11);
        assert_eq!(Meridiem::Pm.to_24_hour(11).unwrap().get(), 23);
    }

    #[test]
    fn test_to_24_hour_rejects_out_of_range() {
        assert!(matches!(
            Meridiem::Am.to_24_hour(0),
            Err(ConvertError::InvalidHour12(0))
        ));
        assert!(matches!(
            Meridiem::Pm.to_24_hour(13),
            Err(ConvertError::InvalidHour12(13))
        ));
        assert!(matches!(
            Meridiem::Am.to_24_hour(256),
            Err(ConvertError::InvalidHour12(256))
        ));
    }

    #[test]
    fn test_month_table_sums_to_year() {
        let total: u16 = UctMonth::ALL.iter().map(|m| m.days()).sum();
        assert_eq!(total, UCT_DAYS_PER_YEAR);
        assert_eq!(
            UctMonth::ALL.iter().filter(|m| m.days() == 42).count(),
            11
        );
        assert_eq!(UctMonth::Thandris.days(), 38);
    }

    #[test]
    fn test_month_names_match_table() {
        for (month, (name, days)) in UctMonth::ALL.iter().zip(UCT_MONTHS) {
            assert_eq!(month.name(), name);
            assert_eq!(month.days(), days);
        }
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(UctMonth::from_day_of_year(doy(1)), (UctMonth::Norya, 1));
        assert_eq!(UctMonth::from_day_of_year(doy(42)), (UctMonth::Norya, 42));
        assert_eq!(UctMonth::from_day_of_year(doy(43)), (UctMonth::Solstara, 1));
        assert_eq!(UctMonth::from_day_of_year(doy(462)), (UctMonth::Phelora, 42));
        assert_eq!(UctMonth::from_day_of_year(doy(463)), (UctMonth::Thandris, 1));
        assert_eq!(
            UctMonth::from_day_of_year(doy(500)),
            (UctMonth::Thandris, 38)
        );
    }

    #[test]
    fn test_month_partition_is_exhaustive() {
        let mut expected = (UctMonth::Norya, 0);
        for value in 1..=UCT_DAYS_PER_YEAR {
            let (month, day) = UctMonth::from_day_of_year(doy(value));
            if month == expected.0 {
                assert_eq!(day, expected.1 + 1, "day {value} skipped or repeated");
            } else {
                assert!(month > expected.0, "day {value} went backwards");
                assert_eq!(day, 1, "day {value} should open {month}");
            }
            assert!((1..=month.days()).contains(&day));
            expected = (month, day);
        }
        assert_eq!(expected, (UctMonth::Thandris, 38));
    }

    #[test]
    fn test_first_day_of_year_inverts_lookup() {
        for month in UctMonth::ALL {
            let first = month.first_day_of_year();
            assert_eq!(UctMonth::from_day_of_year(first), (month, 1));
        }
        assert_eq!(UctMonth::Norya.first_day_of_year().get(), 1);
        assert_eq!(UctMonth::Thandris.first_day_of_year().get(), 463);
    }

    #[test]
    fn test_month_parse() {
        assert_eq!("Norya".parse::<UctMonth>().unwrap(), UctMonth::Norya);
        assert_eq!("solstara".parse::<UctMonth>().unwrap(), UctMonth::Solstara);
        assert_eq!(" THANDRIS".parse::<UctMonth>().unwrap(), UctMonth::Thandris);
        assert!(matches!(
            "Smarch".parse::<UctMonth>(),
            Err(ConvertError::UnknownUctMonth(_))
        ));
    }

    #[test]
    fn test_month_display_and_serde() {
        assert_eq!(UctMonth::Veldra.to_string(), "Veldra");
        let json = serde_json::to_string(&UctMonth::Veldra).unwrap();
        assert_eq!(json, "\"Veldra\"");
        assert_eq!(
            serde_json::from_str::<UctMonth>(&json).unwrap(),
            UctMonth::Veldra
        );
    }
}
