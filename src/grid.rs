//! Grid construction for the three granularities.
//!
//! Every builder returns rows in display order: already reversed for
//! right-to-left locales, so a renderer can lay cells out as given.

use std::iter;

use chrono::{Datelike, Days, Weekday};
use serde::{Deserialize, Serialize};

use crate::consts::{
    COARSE_GRID_COLUMNS, COARSE_GRID_ROWS, DAY_GRID_CELLS, DAYS_PER_WEEK, DECADE_SPAN,
};
use crate::{CalendarDate, DateRange, Locale, WeekdaySet, YearMonth, is_day_selectable};

/// Presentational flags attached to a cell. Flags combine freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Decoration {
    pub selected: bool,
    pub today:    bool,
    /// Belongs to an adjacent period, shown only for continuity
    pub inactive: bool,
    pub disabled: bool,
}

/// What activating a cell refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CellTarget {
    Day(CalendarDate),
    Month(YearMonth),
    Year(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub label:      String,
    pub decoration: Decoration,
    pub target:     CellTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Week-of-year for day rows when week numbers are enabled
    pub week_number: Option<u32>,
    pub cells:       Vec<Cell>,
}

/// Inputs to [`build_day_grid`] that do not change between transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayGridContext<'a> {
    pub range:             &'a DateRange,
    pub disabled_weekdays: WeekdaySet,
    pub week_start:        Weekday,
    pub rtl:               bool,
    pub week_numbers:      bool,
    /// The real current date; `None` suppresses the `today` flag.
    pub today:             Option<CalendarDate>,
}

/// Days from `from` forward to `to`, in `0..7`.
fn days_after(from: Weekday, to: Weekday) -> u32 {
    (to.num_days_from_sunday() + 7 - from.num_days_from_sunday()) % 7
}

/// Week of the year containing `date`, for weeks beginning on `week_start`.
///
/// The week holding January 1 is week 1, so partial leading weeks count.
pub fn week_number(date: CalendarDate, week_start: Weekday) -> u32 {
    let ordinal0 = date.naive().ordinal0();
    let jan1 = (date.weekday().num_days_from_sunday() + 7 - ordinal0 % 7) % 7;
    let lead = (jan1 + 7 - week_start.num_days_from_sunday()) % 7;
    (ordinal0 + lead) / 7 + 1
}

/// The first year of the decade containing `year`.
pub const fn decade_start(year: i32) -> i32 {
    year - year.rem_euclid(DECADE_SPAN)
}

/// The seven weekday labels for the day grid header, starting at `week_start`.
pub fn weekday_header_labels(locale: &Locale, week_start: Weekday) -> Vec<String> {
    let mut labels: Vec<String> = iter::successors(Some(week_start), |day| Some(day.succ()))
        .take(DAYS_PER_WEEK)
        .map(|day| locale.day_min(day).to_owned())
        .collect();
    if locale.rtl {
        labels.reverse();
    }
    labels
}

fn finish_row(mut cells: Vec<Cell>, week_number: Option<u32>, rtl: bool) -> Row {
    if rtl {
        cells.reverse();
    }
    Row { week_number, cells }
}

/// Six weeks of days covering `month`.
///
/// The grid starts on the latest `week_start` weekday on or before the 1st,
/// and always holds 42 days, so the final row reaches into the next month.
pub fn build_day_grid(month: YearMonth, selected: CalendarDate, ctx: &DayGridContext<'_>) -> Vec<Row> {
    let first = month.first_day().naive();
    let lead = days_after(ctx.week_start, first.weekday());
    // Within chrono's range for every supported month
    let start = first.checked_sub_days(Days::new(u64::from(lead))).unwrap_or(first);

    let days: Vec<CalendarDate> = iter::successors(
        Some(CalendarDate::from_naive_unchecked(start)),
        |day| day.succ_unchecked(),
    )
    .take(DAY_GRID_CELLS)
    .collect();

    days.chunks(DAYS_PER_WEEK)
        .map(|week| {
            let number = ctx
                .week_numbers
                .then(|| week.last().map(|last| week_number(*last, ctx.week_start)))
                .flatten();
            let cells = week
                .iter()
                .map(|&day| Cell {
                    label:      day.day().to_string(),
                    decoration: Decoration {
                        selected: day == selected,
                        today:    ctx.today == Some(day),
                        inactive: !month.contains(day),
                        disabled: !day.is_supported()
                            || !is_day_selectable(day, ctx.range, ctx.disabled_weekdays),
                    },
                    target:     CellTarget::Day(day),
                })
                .collect();
            finish_row(cells, number, ctx.rtl)
        })
        .collect()
}

/// The twelve months of `year` in three rows of four.
///
/// Months are never disabled individually.
pub fn build_month_grid(year: i32, selected: CalendarDate, locale: &Locale) -> Vec<Row> {
    let months: Vec<YearMonth> = (1..=12).filter_map(|month| YearMonth::new(year, month).ok()).collect();

    months
        .chunks(COARSE_GRID_COLUMNS)
        .take(COARSE_GRID_ROWS)
        .map(|row| {
            let cells = row
                .iter()
                .map(|&month| Cell {
                    label:      locale.month_short(month.month0()).to_owned(),
                    decoration: Decoration {
                        selected: month.contains(selected),
                        ..Decoration::default()
                    },
                    target:     CellTarget::Month(month),
                })
                .collect();
            finish_row(cells, None, locale.rtl)
        })
        .collect()
}

/// The decade containing `year`, padded with the last year of the previous
/// decade and the first year of the next, which are marked inactive.
pub fn build_year_grid(year: i32, selected: CalendarDate, rtl: bool) -> Vec<Row> {
    let start = decade_start(year);
    let first = start - 1;
    let last = start + DECADE_SPAN;
    let years: Vec<i32> = (first..=last).collect();

    years
        .chunks(COARSE_GRID_COLUMNS)
        .take(COARSE_GRID_ROWS)
        .map(|row| {
            let cells = row
                .iter()
                .map(|&y| Cell {
                    label:      y.to_string(),
                    decoration: Decoration {
                        selected: y == selected.year(),
                        inactive: y == first || y == last,
                        ..Decoration::default()
                    },
                    target:     CellTarget::Year(y),
                })
                .collect();
            finish_row(cells, None, rtl)
        })
        .collect()
}
