use std::{fmt, str::FromStr};

use crate::{CalendarDate, DateError};

/// ISO 8601 marker for an open end of an interval
const OPEN_BOUND: &str = "..";
/// Separator between the start and end of an interval
const RANGE_SEPARATOR: char = '/';

/// Inclusive range of selectable dates. Either side may be unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    start: Option<CalendarDate>,
    end:   Option<CalendarDate>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    Inverted { start: CalendarDate, end: CalendarDate },

    /// Error parsing a bound.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// A range with no bounds on either side.
    pub const UNBOUNDED: Self = Self { start: None, end: None };

    /// Creates a range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::Inverted` if both bounds are set and start > end.
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Result<Self, RangeError> {
        if let (Some(start), Some(end)) = (start, end)
            && start > end
        {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Inclusive lower bound, `None` when unbounded
    pub const fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    /// Inclusive upper bound, `None` when unbounded
    pub const fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `date` lies within both bounds. An unbounded side always passes.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start.is_none_or(|start| start <= date) && self.end.is_none_or(|end| date <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "{start}")?,
            None => f.write_str(OPEN_BOUND)?,
        }
        write!(f, "{RANGE_SEPARATOR}")?;
        match self.end {
            Some(end) => write!(f, "{end}"),
            None => f.write_str(OPEN_BOUND),
        }
    }
}

fn parse_bound(s: &str) -> Result<Option<CalendarDate>, DateError> {
    let trimmed = s.trim();
    if trimmed == OPEN_BOUND || trimmed.is_empty() {
        Ok(None)
    } else {
        trimmed.parse().map(Some)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start, end) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                Self::new(parse_bound(start)?, parse_bound(end)?)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}
