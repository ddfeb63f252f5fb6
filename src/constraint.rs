//! Selectability rules shared by every grid granularity.
//!
//! Bounds are compared with the total order on `CalendarDate`, so a date in
//! an earlier year, an earlier month of the same year, or an earlier day of
//! the same month all fall below a lower bound alike.

use crate::{CalendarDate, DateRange, WeekdaySet, YearMonth};

/// Whether a single day may be selected.
///
/// False when the weekday is disabled or the date falls outside `range`.
pub fn is_day_selectable(date: CalendarDate, range: &DateRange, disabled: WeekdaySet) -> bool {
    !disabled.contains(date.weekday()) && range.contains(date)
}

/// Whether any day of `month` lies within `range`.
pub fn is_month_in_range(month: YearMonth, range: &DateRange) -> bool {
    range.start().is_none_or(|start| start.year_month() <= month)
        && range.end().is_none_or(|end| month <= end.year_month())
}

/// Whether any day of `year` lies within `range`.
pub fn is_year_in_range(year: i32, range: &DateRange) -> bool {
    range.start().is_none_or(|start| start.year() <= year)
        && range.end().is_none_or(|end| year <= end.year())
}
