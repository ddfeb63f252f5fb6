//! View-state and navigation engine for an embeddable calendar date picker.
//!
//! The engine owns which grid is shown (days of a month, months of a year,
//! years of a decade), turns navigation intents into new states, and
//! produces a [`RenderModel`] that a rendering layer can draw without doing
//! any date arithmetic of its own.
//!
//! ```
//! use datepicker_core::{CalendarDate, Datepicker, DatepickerConfig, FixedClock, Intent, LocaleRegistry};
//!
//! let today = CalendarDate::from_ymd(2024, 2, 14)?;
//! let picker = Datepicker::with_clock(DatepickerConfig::default(), &LocaleRegistry::default(), FixedClock(today))?;
//! let (state, model) = picker.initialize();
//! assert_eq!(model.header_label, "February 2024");
//!
//! let (state, _) = picker.dispatch(&state, Intent::StepNext);
//! assert_eq!(state.anchor().to_string(), "2024-03");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod clock;
mod config;
mod constraint;
mod consts;
mod grid;
mod locale;
mod navigation;
mod prelude;
mod range;
mod render;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, DatepickerConfig, Settings};
pub use constraint::{is_day_selectable, is_month_in_range, is_year_in_range};
pub use consts::*;
pub use grid::{
    Cell, CellTarget, DayGridContext, Decoration, Row, build_day_grid, build_month_grid, build_year_grid,
    decade_start, week_number, weekday_header_labels,
};
pub use locale::{Locale, LocaleRegistry};
pub use navigation::{Datepicker, Intent, NavigationState};
pub use range::{DateRange, RangeError};
pub use render::RenderModel;
pub use types::{ArrowKey, Granularity, WeekdaySet, YearMonth};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

/// A naive calendar date: year, month and day with no time of day and no
/// timezone.
///
/// Values built through the public constructors always name a real date
/// within `MIN_YEAR..=MAX_YEAR`. Ordering is the total order on
/// `(year, month, day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be {}-{})", "_0", JANUARY, DECEMBER)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Creates a date from a year, a 1-based month and a day of month.
    ///
    /// # Errors
    /// Returns the first component that fails validation.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        if !(JANUARY..=DECEMBER).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDay { year, month, day })
    }

    /// Wraps a chrono date, rejecting years outside the supported span.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the year is not in `MIN_YEAR..=MAX_YEAR`.
    pub fn from_naive(date: NaiveDate) -> Result<Self, DateError> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(DateError::InvalidYear(date.year()))
        }
    }

    /// Grid context cells may sit one step outside the supported span.
    pub(crate) const fn from_naive_unchecked(date: NaiveDate) -> Self {
        Self(date)
    }

    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1-based
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Month of the year, 0-based (index into locale month names)
    pub fn month0(self) -> u32 {
        self.0.month0()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Whether the year lies in `MIN_YEAR..=MAX_YEAR`.
    pub fn is_supported(self) -> bool {
        (MIN_YEAR..=MAX_YEAR).contains(&self.year())
    }

    /// The month containing this date.
    pub fn year_month(self) -> YearMonth {
        YearMonth::containing(self)
    }

    /// Adds a signed number of days, rolling through month and year
    /// boundaries. Returns `None` when the result leaves the supported span.
    pub fn add_days(self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::TimeDelta::try_days(days)?)
            .map(Self)
            .filter(|date| date.is_supported())
    }

    /// The following day, allowed to step outside the supported span.
    pub(crate) fn succ_unchecked(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_naive(value)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        };

        let year = year
            .parse::<i32>()
            .map_err(|_| DateError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| DateError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u32>()
            .map_err(|_| DateError::InvalidFormat((*day).to_owned()))?;

        Self::from_ymd(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
