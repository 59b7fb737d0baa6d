/// Real-world year of the UCT epoch (UCT year 1, day 1, hour 0)
pub const UCT_EPOCH_YEAR: i32 = 2022;
/// Real-world month of the UCT epoch
pub const UCT_EPOCH_MONTH: u32 = 6;
/// Real-world day of the UCT epoch
pub const UCT_EPOCH_DAY: u32 = 2;
/// UTC hour of the UCT epoch
pub const UCT_EPOCH_HOUR: u32 = 0;

/// Length of every UCT year
pub const UCT_DAYS_PER_YEAR: u16 = 500;

/// Number of months in a UCT year
pub const UCT_MONTH_COUNT: usize = 12;

/// UCT months in calendar order with their fixed lengths in days
pub const UCT_MONTHS: [(&str, u16); UCT_MONTH_COUNT] = [
    ("Norya", 42),
    ("Solstara", 42),
    ("Yrennis", 42),
    ("Veldra", 42),
    ("Zirath", 42),
    ("Gorrath", 42),
    ("Lathorim", 42),
    ("Meldrith", 42),
    ("Fensira", 42),
    ("Ardenis", 42),
    ("Phelora", 42),
    ("Thandris", 38),
];

const fn month_table_total() -> u16 {
    let mut total = 0;
    let mut i = 0;
    while i < UCT_MONTH_COUNT {
        total += UCT_MONTHS[i].1;
        i += 1;
    }
    total
}

const _: () = assert!(month_table_total() == UCT_DAYS_PER_YEAR);

/// Supported timezones as (name, minutes east of UTC)
pub const TIMEZONE_OFFSETS: [(&str, i32); 5] = [
    ("UTC", 0),
    ("EST", -5 * 60),
    ("CST", -6 * 60),
    ("PST", -8 * 60),
    ("IST", 5 * 60 + 30),
];

/// Lowest hour on a 12-hour clock
pub const MIN_HOUR_12: u32 = 1;
/// Highest hour on a 12-hour clock, also the hour that flips at AM/PM
pub const MAX_HOUR_12: u32 = 12;
/// Highest hour on a 24-hour clock
pub const MAX_HOUR_24: u8 = 23;

/// Local time format used when listing real-world times
pub const REAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
