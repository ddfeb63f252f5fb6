//! Picker configuration as supplied by the host, and its validated form.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::grid::DayGridContext;
use crate::types::weekday_from_sunday_index;
use crate::{CalendarDate, DateRange, Granularity, Locale, LocaleRegistry, RangeError, WeekdaySet};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("Initial granularity {0} is not enabled")]
    GranularityNotEnabled(Granularity),
    #[error("Invalid disabled weekday: {0} (must be 0-6)")]
    InvalidWeekday(u8),
    #[error("Invalid week start: {0} (must be 0-6)")]
    InvalidWeekStart(u8),
}

/// Host-facing configuration. Every field has a default, so a partial
/// document deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatepickerConfig {
    /// Key into the locale registry
    pub locale:                String,
    pub selected_date:         Option<CalendarDate>,
    pub start_date:            Option<CalendarDate>,
    pub end_date:              Option<CalendarDate>,
    /// Weekday indices, 0 = Sunday
    pub disabled_weekdays:     Vec<u8>,
    /// 0 = Sunday; the locale's convention when absent
    pub week_start:            Option<u8>,
    pub initial_granularity:   Granularity,
    pub enabled_granularities: Vec<Granularity>,
    pub show_week_numbers:     bool,
    pub keyboard_enabled:      bool,
    pub today_button:          bool,
    pub highlight_today:       bool,
}

impl Default for DatepickerConfig {
    fn default() -> Self {
        Self {
            locale:                "en".to_owned(),
            selected_date:         None,
            start_date:            None,
            end_date:              None,
            disabled_weekdays:     Vec::new(),
            week_start:            None,
            initial_granularity:   Granularity::Day,
            enabled_granularities: Granularity::ALL.to_vec(),
            show_week_numbers:     false,
            keyboard_enabled:      true,
            today_button:          true,
            highlight_today:       true,
        }
    }
}

impl DatepickerConfig {
    /// Validates the configuration against `locales`.
    ///
    /// # Errors
    /// Fails on an unknown locale key, an inverted date range, a weekday
    /// index outside 0-6, or an initial granularity that is not enabled.
    pub fn resolve(&self, locales: &LocaleRegistry) -> Result<Settings, ConfigError> {
        let locale = locales
            .get(&self.locale)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownLocale(self.locale.clone()))?;

        let range = DateRange::new(self.start_date, self.end_date)?;
        let disabled_weekdays =
            WeekdaySet::from_indices(&self.disabled_weekdays).map_err(ConfigError::InvalidWeekday)?;

        let week_start_index = self.week_start.unwrap_or(locale.week_start);
        let week_start =
            weekday_from_sunday_index(week_start_index).ok_or(ConfigError::InvalidWeekStart(week_start_index))?;

        if !self.enabled_granularities.contains(&self.initial_granularity) {
            return Err(ConfigError::GranularityNotEnabled(self.initial_granularity));
        }

        let settings = Settings {
            locale,
            range,
            disabled_weekdays,
            week_start,
            selected_date: self.selected_date,
            initial_granularity: self.initial_granularity,
            enabled_granularities: Granularity::ALL
                .into_iter()
                .filter(|g| self.enabled_granularities.contains(g))
                .collect(),
            show_week_numbers: self.show_week_numbers,
            keyboard_enabled: self.keyboard_enabled,
            today_button: self.today_button,
            highlight_today: self.highlight_today,
        };
        debug!(
            locale = %self.locale,
            %range,
            ?week_start,
            initial = %settings.initial_granularity,
            "resolved datepicker configuration"
        );
        Ok(settings)
    }
}

/// Validated configuration, fixed for the lifetime of a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub locale:                Locale,
    pub range:                 DateRange,
    pub disabled_weekdays:     WeekdaySet,
    pub week_start:            Weekday,
    pub selected_date:         Option<CalendarDate>,
    pub initial_granularity:   Granularity,
    /// Enabled granularities, finest first
    pub enabled_granularities: Vec<Granularity>,
    pub show_week_numbers:     bool,
    pub keyboard_enabled:      bool,
    pub today_button:          bool,
    pub highlight_today:       bool,
}

impl Settings {
    pub fn is_enabled(&self, granularity: Granularity) -> bool {
        self.enabled_granularities.contains(&granularity)
    }

    /// Grid inputs for the day view; `today` is dropped when highlighting is off.
    pub fn day_grid_context(&self, today: CalendarDate) -> DayGridContext<'_> {
        DayGridContext {
            range:             &self.range,
            disabled_weekdays: self.disabled_weekdays,
            week_start:        self.week_start,
            rtl:               self.locale.rtl,
            week_numbers:      self.show_week_numbers,
            today:             self.highlight_today.then_some(today),
        }
    }
}
