//! The navigation state machine: which grid is shown, and how intents move
//! between grids.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{DECADE_MIDDLE_OFFSET, DECADE_SPAN};
use crate::{
    ArrowKey, CalendarDate, CellTarget, Clock, ConfigError, DatepickerConfig, Granularity, LocaleRegistry,
    RenderModel, Settings, SystemClock, YearMonth, decade_start, is_day_selectable,
};

/// Everything that changes as the user navigates.
///
/// At `Granularity::Year` the anchor year sits in the middle of the decade
/// shown (`decade start + 5`), so stepping by ten years stays aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationState {
    granularity: Granularity,
    anchor:      YearMonth,
    selected:    CalendarDate,
}

impl NavigationState {
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// The displayed period: a month at `Day`, a year at `Month`, the middle
    /// of a decade at `Year`.
    pub const fn anchor(&self) -> YearMonth {
        self.anchor
    }

    pub const fn selected_date(&self) -> CalendarDate {
        self.selected
    }

    fn day_view(selected: CalendarDate) -> Self {
        Self {
            granularity: Granularity::Day,
            anchor: selected.year_month(),
            selected,
        }
    }
}

/// A user action, as delivered by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Intent {
    /// Move to the next coarser grid
    DrillUp,
    /// Activate a cell: opens a finer grid, or selects at `Day`
    DrillDown(CellTarget),
    StepPrevious,
    StepNext,
    /// Select a day cell, re-anchoring when it belongs to an adjacent month
    SelectCell(CalendarDate),
    KeyboardMove(ArrowKey),
    SelectToday,
    /// Programmatic selection; constraints are not consulted
    SetDate(CalendarDate),
}

/// The anchor one period before or after `anchor` at `granularity`, if it
/// stays within the supported years.
pub(crate) fn step_anchor(granularity: Granularity, anchor: YearMonth, forward: bool) -> Option<YearMonth> {
    let sign = if forward { 1 } else { -1 };
    match granularity {
        Granularity::Day => anchor.add_months(sign),
        Granularity::Month => anchor.add_years(sign),
        Granularity::Year => anchor.add_years(sign * DECADE_SPAN),
    }
}

fn decade_anchor(anchor: YearMonth) -> YearMonth {
    anchor
        .with_year(decade_start(anchor.year()) + DECADE_MIDDLE_OFFSET)
        .unwrap_or(anchor)
}

/// A date picker: validated settings plus a source for today's date.
///
/// The picker itself never changes. Each transition takes the current
/// [`NavigationState`] and returns the next one along with a freshly built
/// [`RenderModel`].
#[derive(Debug, Clone)]
pub struct Datepicker<C: Clock = SystemClock> {
    settings: Settings,
    clock:    C,
}

impl Datepicker {
    /// Builds a picker that reads today's date from the system clock.
    ///
    /// # Errors
    /// Returns the configuration error found by [`DatepickerConfig::resolve`].
    pub fn new(config: DatepickerConfig, locales: &LocaleRegistry) -> Result<Self, ConfigError> {
        Self::with_clock(config, locales, SystemClock)
    }
}

impl<C: Clock> Datepicker<C> {
    /// # Errors
    /// Returns the configuration error found by [`DatepickerConfig::resolve`].
    pub fn with_clock(config: DatepickerConfig, locales: &LocaleRegistry, clock: C) -> Result<Self, ConfigError> {
        let settings = config.resolve(locales)?;
        debug!(locale = %config.locale, "created datepicker");
        Ok(Self { settings, clock })
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The starting state: the configured date, else the range start, else
    /// today, shown at the configured initial granularity.
    pub fn initialize(&self) -> (NavigationState, RenderModel) {
        let selected = self
            .settings
            .selected_date
            .or(self.settings.range.start())
            .unwrap_or_else(|| self.clock.today());

        let mut state = NavigationState::day_view(selected);
        state.granularity = self.settings.initial_granularity;
        if state.granularity == Granularity::Year {
            state.anchor = decade_anchor(state.anchor);
        }

        debug!(
            granularity = %state.granularity,
            anchor = %state.anchor,
            selected = %state.selected,
            "initialized datepicker"
        );
        let model = self.render(&state);
        (state, model)
    }

    /// Applies `intent` to `state`.
    ///
    /// Never fails: an intent that does not apply leaves the state unchanged.
    pub fn dispatch(&self, state: &NavigationState, intent: Intent) -> (NavigationState, RenderModel) {
        let next = match self.apply(state, intent) {
            Ok(next) => {
                debug!(
                    ?intent,
                    granularity = %next.granularity,
                    anchor = %next.anchor,
                    selected = %next.selected,
                    "applied intent"
                );
                next
            }
            Err(reason) => {
                trace!(?intent, reason, "ignored intent");
                *state
            }
        };
        let model = self.render(&next);
        (next, model)
    }

    /// Builds the render model for `state` without changing it.
    pub fn render(&self, state: &NavigationState) -> RenderModel {
        RenderModel::build(&self.settings, state, self.clock.today())
    }

    fn apply(&self, state: &NavigationState, intent: Intent) -> Result<NavigationState, &'static str> {
        match intent {
            Intent::DrillUp => {
                let granularity = state.granularity.coarser().ok_or("already at the coarsest grid")?;
                if !self.settings.is_enabled(granularity) {
                    return Err("coarser grid is not enabled");
                }
                let anchor = match granularity {
                    Granularity::Year => decade_anchor(state.anchor),
                    _ => state.anchor,
                };
                Ok(NavigationState { granularity, anchor, ..*state })
            }
            Intent::DrillDown(target) => match (state.granularity, target) {
                (Granularity::Year, CellTarget::Year(year)) => {
                    let anchor = state.anchor.with_year(year).ok_or("year outside the supported span")?;
                    Ok(NavigationState { granularity: Granularity::Month, anchor, ..*state })
                }
                (Granularity::Month, CellTarget::Month(anchor)) => {
                    Ok(NavigationState { granularity: Granularity::Day, anchor, ..*state })
                }
                (Granularity::Day, CellTarget::Day(date)) => self.select(date),
                _ => Err("cell does not belong to the current grid"),
            },
            Intent::StepPrevious => self.step(state, false),
            Intent::StepNext => self.step(state, true),
            Intent::SelectCell(date) => {
                if state.granularity != Granularity::Day {
                    return Err("day cells are only shown at day granularity");
                }
                self.select(date)
            }
            Intent::KeyboardMove(key) => {
                if !self.settings.keyboard_enabled {
                    return Err("keyboard navigation is disabled");
                }
                if state.granularity != Granularity::Day {
                    return Err("keyboard navigation only moves between days");
                }
                let candidate = state
                    .selected
                    .add_days(key.day_delta(self.settings.locale.rtl))
                    .ok_or("date outside the supported span")?;
                self.select(candidate)
            }
            Intent::SelectToday => Ok(NavigationState::day_view(self.clock.today())),
            Intent::SetDate(date) => Ok(NavigationState::day_view(date)),
        }
    }

    fn step(&self, state: &NavigationState, forward: bool) -> Result<NavigationState, &'static str> {
        let anchor =
            step_anchor(state.granularity, state.anchor, forward).ok_or("step would leave the supported span")?;
        Ok(NavigationState { anchor, ..*state })
    }

    /// Selects `date` and shows its month.
    fn select(&self, date: CalendarDate) -> Result<NavigationState, &'static str> {
        if !date.is_supported() {
            return Err("date outside the supported span");
        }
        if !is_day_selectable(date, &self.settings.range, self.settings.disabled_weekdays) {
            return Err("date is disabled");
        }
        Ok(NavigationState::day_view(date))
    }
}
