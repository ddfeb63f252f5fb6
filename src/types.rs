use crate::consts::{DATE_SEPARATOR, DECEMBER, JANUARY, MAX_YEAR, MIN_YEAR};
use crate::prelude::*;
use crate::{CalendarDate, DateError};
use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The resolution of the grid currently shown.
///
/// Ordered finest to coarsest: drilling up moves towards `Year`, drilling
/// down towards `Day`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Days of one month
    #[display(fmt = "day")]
    Day,
    /// Months of one year
    #[display(fmt = "month")]
    Month,
    /// Years of one decade
    #[display(fmt = "year")]
    Year,
}

impl Granularity {
    pub const ALL: [Self; 3] = [Self::Day, Self::Month, Self::Year];

    /// The next coarser granularity, if any
    pub const fn coarser(self) -> Option<Self> {
        match self {
            Self::Day => Some(Self::Month),
            Self::Month => Some(Self::Year),
            Self::Year => None,
        }
    }

    /// The next finer granularity, if any
    pub const fn finer(self) -> Option<Self> {
        match self {
            Self::Day => None,
            Self::Month => Some(Self::Day),
            Self::Year => Some(Self::Month),
        }
    }
}

/// A year and month within `MIN_YEAR..=MAX_YEAR`.
///
/// Stored as the first day of the month so that month arithmetic goes
/// through chrono and ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Creates a year/month pair from a 1-based month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` or `DateError::InvalidMonth` for out-of-range components.
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::InvalidYear(year));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or(DateError::InvalidMonth(month))
    }

    /// The month a date falls in.
    pub fn containing(date: CalendarDate) -> Self {
        let naive = date.naive();
        Self(naive.with_day(1).unwrap_or(naive))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1-based
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Month of the year, 0-based
    pub fn month0(self) -> u32 {
        self.0.month0()
    }

    pub fn first_day(self) -> CalendarDate {
        CalendarDate::from_naive_unchecked(self.0)
    }

    pub fn contains(self, date: CalendarDate) -> bool {
        Self::containing(date) == self
    }

    /// Adds or subtracts months, carrying into the year as needed.
    /// Returns `None` if the result leaves the supported year span.
    pub fn add_months(self, delta: i32) -> Option<Self> {
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta < 0 {
            self.0.checked_sub_months(months)
        } else {
            self.0.checked_add_months(months)
        }?;
        Some(Self(shifted)).filter(|ym| (MIN_YEAR..=MAX_YEAR).contains(&ym.year()))
    }

    /// Adds or subtracts whole years, keeping the month.
    pub fn add_years(self, delta: i32) -> Option<Self> {
        self.add_months(delta.checked_mul(12)?)
    }

    /// Same month in another year.
    pub fn with_year(self, year: i32) -> Option<Self> {
        Self::new(year, self.month()).ok()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        let Some((year, month)) = trimmed.split_once(DATE_SEPARATOR) else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };
        let year = year
            .trim()
            .parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(year.to_owned()))?;
        let month = month
            .trim()
            .parse::<u32>()
            .map_err(|_| DateError::InvalidFormat(month.to_owned()))?;
        if !(JANUARY..=DECEMBER).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Weekday for an index counted from Sunday (0 = Sunday, 6 = Saturday).
pub(crate) fn weekday_from_sunday_index(index: u8) -> Option<Weekday> {
    WEEKDAYS_FROM_SUNDAY.get(usize::from(index)).copied()
}

/// A set of weekdays, indexed 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Into)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const EMPTY: Self = Self(0);

    /// Builds a set from Sunday-based indices.
    ///
    /// # Errors
    /// Returns the first index outside `0..=6`.
    pub fn from_indices(indices: &[u8]) -> Result<Self, u8> {
        indices.iter().try_fold(Self::EMPTY, |set, &index| {
            weekday_from_sunday_index(index)
                .map(|day| set.with(day))
                .ok_or(index)
        })
    }

    #[must_use]
    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | 1 << day.num_days_from_sunday())
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_sunday()) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in Sunday-first order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        WEEKDAYS_FROM_SUNDAY
            .into_iter()
            .filter(move |day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Arrow keys accepted for keyboard navigation of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowKey {
    Left,
    Right,
    Up,
    Down,
}

impl ArrowKey {
    /// Day offset for this key. Left and right swap under right-to-left layout.
    pub const fn day_delta(self, rtl: bool) -> i64 {
        match (self, rtl) {
            (Self::Left, false) | (Self::Right, true) => -1,
            (Self::Right, false) | (Self::Left, true) => 1,
            (Self::Up, _) => -7,
            (Self::Down, _) => 7,
        }
    }
}
