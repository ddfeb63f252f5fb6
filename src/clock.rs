use crate::CalendarDate;

/// Source of the real current date.
///
/// The engine asks for "today" when decorating the day grid and when the
/// today button is pressed; hosts and tests substitute their own source.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// The local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_naive_unchecked(chrono::Local::now().date_naive())
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> CalendarDate,
{
    fn today(&self) -> CalendarDate {
        self()
    }
}
