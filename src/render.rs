//! The render model: everything a drawing layer needs for one frame.

use serde::Serialize;

use crate::consts::{COARSE_CELL_COLSPAN, COARSE_GRID_COLUMNS, DAYS_PER_WEEK, DECADE_SPAN, NAV_BUTTON_COLUMNS};
use crate::navigation::step_anchor;
use crate::{
    CalendarDate, DateRange, Granularity, Locale, NavigationState, Row, Settings, YearMonth, build_day_grid,
    build_month_grid, build_year_grid, decade_start, is_month_in_range, is_year_in_range, weekday_header_labels,
};

/// A complete description of the picker for one state.
///
/// Built from scratch on every transition; it holds no references back into
/// the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderModel {
    pub granularity:       Granularity,
    /// "February 2024", "2024" or "2020 - 2029"
    pub header_label:      String,
    /// Day grid column headings, empty at coarser granularities
    pub weekday_labels:    Vec<String>,
    pub rows:              Vec<Row>,
    pub show_week_numbers: bool,
    /// Table columns including the optional week-number column
    pub total_columns:     usize,
    pub cell_colspan:      usize,
    /// Span of the header label between the previous and next buttons
    pub header_colspan:    usize,
    pub footer_colspan:    usize,
    pub drill_up_enabled:  bool,
    pub previous_enabled:  bool,
    pub next_enabled:      bool,
    /// Label of the today button, if shown
    pub today_label:       Option<String>,
    pub rtl:               bool,
}

/// Header text for the period shown at `granularity`.
fn header_label(granularity: Granularity, anchor: YearMonth, locale: &Locale) -> String {
    match granularity {
        Granularity::Day => format!("{} {}", locale.month_name(anchor.month0()), anchor.year()),
        Granularity::Month => anchor.year().to_string(),
        Granularity::Year => {
            let start = decade_start(anchor.year());
            format!("{start} - {}", start + DECADE_SPAN - 1)
        }
    }
}

/// Whether any day of the period shown at `anchor` lies within `range`.
fn period_in_range(granularity: Granularity, anchor: YearMonth, range: &DateRange) -> bool {
    match granularity {
        Granularity::Day => is_month_in_range(anchor, range),
        Granularity::Month => is_year_in_range(anchor.year(), range),
        Granularity::Year => {
            let start = decade_start(anchor.year());
            (start..start + DECADE_SPAN).any(|year| is_year_in_range(year, range))
        }
    }
}

impl RenderModel {
    pub(crate) fn build(settings: &Settings, state: &NavigationState, today: CalendarDate) -> Self {
        let granularity = state.granularity();
        let anchor = state.anchor();
        let selected = state.selected_date();
        let locale = &settings.locale;

        let (rows, weekday_labels, total_columns, cell_colspan) = match granularity {
            Granularity::Day => {
                let ctx = settings.day_grid_context(today);
                (
                    build_day_grid(anchor, selected, &ctx),
                    weekday_header_labels(locale, settings.week_start),
                    DAYS_PER_WEEK + usize::from(settings.show_week_numbers),
                    1,
                )
            }
            Granularity::Month => (
                build_month_grid(anchor.year(), selected, locale),
                Vec::new(),
                COARSE_GRID_COLUMNS * COARSE_CELL_COLSPAN,
                COARSE_CELL_COLSPAN,
            ),
            Granularity::Year => (
                build_year_grid(anchor.year(), selected, locale.rtl),
                Vec::new(),
                COARSE_GRID_COLUMNS * COARSE_CELL_COLSPAN,
                COARSE_CELL_COLSPAN,
            ),
        };

        let step_enabled = |forward| {
            step_anchor(granularity, anchor, forward)
                .is_some_and(|target| period_in_range(granularity, target, &settings.range))
        };

        Self {
            granularity,
            header_label: header_label(granularity, anchor, locale),
            weekday_labels,
            rows,
            show_week_numbers: granularity == Granularity::Day && settings.show_week_numbers,
            total_columns,
            cell_colspan,
            header_colspan: total_columns - NAV_BUTTON_COLUMNS,
            footer_colspan: total_columns,
            drill_up_enabled: granularity.coarser().is_some_and(|coarser| settings.is_enabled(coarser)),
            previous_enabled: step_enabled(false),
            next_enabled: step_enabled(true),
            today_label: settings.today_button.then(|| locale.today.clone()),
            rtl: locale.rtl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, ym};
    use crate::{CellTarget, Datepicker, DatepickerConfig, FixedClock, Intent, LocaleRegistry};

    fn picker(config: DatepickerConfig) -> Datepicker<FixedClock> {
        Datepicker::with_clock(config, &LocaleRegistry::default(), FixedClock(date(2024, 2, 14))).unwrap()
    }

    fn cells(model: &RenderModel) -> impl Iterator<Item = &crate::Cell> {
        model.rows.iter().flat_map(|row| &row.cells)
    }

    #[test]
    fn test_header_labels() {
        struct TestCase {
            granularity: Granularity,
            anchor:      YearMonth,
            locale:      Locale,
            expected:    &'static str,
        }

        let cases = [
            TestCase {
                granularity: Granularity::Day,
                anchor:      ym(2024, 2),
                locale:      Locale::english(),
                expected:    "February 2024",
            },
            TestCase {
                granularity: Granularity::Day,
                anchor:      ym(2024, 3),
                locale:      Locale::german(),
                expected:    "März 2024",
            },
            TestCase {
                granularity: Granularity::Month,
                anchor:      ym(2024, 3),
                locale:      Locale::english(),
                expected:    "2024",
            },
            TestCase {
                granularity: Granularity::Year,
                anchor:      ym(2025, 1),
                locale:      Locale::english(),
                expected:    "2020 - 2029",
            },
            TestCase {
                granularity: Granularity::Year,
                anchor:      ym(2000, 1),
                locale:      Locale::english(),
                expected:    "2000 - 2009",
            },
        ];

        for case in &cases {
            assert_eq!(header_label(case.granularity, case.anchor, &case.locale), case.expected);
        }
    }

    #[test]
    fn test_day_model_layout() {
        let (_, model) = picker(DatepickerConfig::default()).initialize();
        assert_eq!(model.granularity, Granularity::Day);
        assert_eq!(model.weekday_labels, ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]);
        assert_eq!(model.rows.len(), 6);
        assert_eq!(model.total_columns, 7);
        assert_eq!(model.cell_colspan, 1);
        assert_eq!(model.header_colspan, 5);
        assert_eq!(model.footer_colspan, 7);
        assert!(!model.show_week_numbers);
        assert!(model.rows.iter().all(|row| row.week_number.is_none()));
        assert_eq!(model.today_label.as_deref(), Some("Today"));
        assert!(model.drill_up_enabled);
        assert!(model.previous_enabled);
        assert!(model.next_enabled);
        assert!(!model.rtl);
    }

    #[test]
    fn test_week_number_columns() {
        let (_, model) = picker(DatepickerConfig {
            show_week_numbers: true,
            ..DatepickerConfig::default()
        })
        .initialize();
        assert!(model.show_week_numbers);
        assert_eq!(model.total_columns, 8);
        assert_eq!(model.header_colspan, 6);
        assert_eq!(model.footer_colspan, 8);
        assert!(model.rows.iter().all(|row| row.week_number.is_some()));
    }

    #[test]
    fn test_coarse_model_layout() {
        let picker = picker(DatepickerConfig {
            show_week_numbers: true,
            ..DatepickerConfig::default()
        });
        let (state, _) = picker.initialize();

        for granularity in [Granularity::Month, Granularity::Year] {
            let state = if granularity == Granularity::Month {
                picker.dispatch(&state, Intent::DrillUp).0
            } else {
                picker.dispatch(&picker.dispatch(&state, Intent::DrillUp).0, Intent::DrillUp).0
            };
            let model = picker.render(&state);
            assert_eq!(model.granularity, granularity);
            assert!(model.weekday_labels.is_empty());
            assert_eq!(model.rows.len(), 3);
            assert!(model.rows.iter().all(|row| row.cells.len() == 4));
            assert_eq!(model.total_columns, 8);
            assert_eq!(model.cell_colspan, 2);
            assert_eq!(model.header_colspan, 6);
            assert_eq!(model.footer_colspan, 8);
            assert!(!model.show_week_numbers);
        }
    }

    #[test]
    fn test_today_decoration_and_button() {
        let (_, model) = picker(DatepickerConfig {
            selected_date: Some(date(2024, 2, 1)),
            ..DatepickerConfig::default()
        })
        .initialize();
        let today: Vec<_> = cells(&model).filter(|cell| cell.decoration.today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].target, CellTarget::Day(date(2024, 2, 14)));

        let (_, model) = picker(DatepickerConfig {
            today_button: false,
            highlight_today: false,
            ..DatepickerConfig::default()
        })
        .initialize();
        assert!(cells(&model).all(|cell| !cell.decoration.today));
        assert_eq!(model.today_label, None);
    }

    #[test]
    fn test_step_affordances_follow_range() {
        struct TestCase {
            granularity: Granularity,
            anchor:      YearMonth,
            previous:    bool,
            next:        bool,
        }

        let cases = [
            TestCase { granularity: Granularity::Day, anchor: ym(2024, 3), previous: false, next: true },
            TestCase { granularity: Granularity::Day, anchor: ym(2024, 4), previous: true, next: true },
            TestCase { granularity: Granularity::Day, anchor: ym(2026, 6), previous: true, next: false },
            TestCase { granularity: Granularity::Month, anchor: ym(2024, 3), previous: false, next: true },
            TestCase { granularity: Granularity::Month, anchor: ym(2026, 3), previous: true, next: false },
            TestCase { granularity: Granularity::Year, anchor: ym(2025, 3), previous: false, next: false },
        ];

        let picker = picker(DatepickerConfig {
            start_date: Some(date(2024, 3, 10)),
            end_date: Some(date(2026, 6, 30)),
            ..DatepickerConfig::default()
        });
        let (initial, _) = picker.initialize();
        let year = picker.dispatch(&picker.dispatch(&initial, Intent::DrillUp).0, Intent::DrillUp).0;

        for case in &cases {
            let state = match case.granularity {
                Granularity::Year => year,
                Granularity::Month => {
                    let month = picker.dispatch(&initial, Intent::DrillUp).0;
                    let steps = case.anchor.year() - month.anchor().year();
                    (0..steps).fold(month, |state, _| picker.dispatch(&state, Intent::StepNext).0)
                }
                Granularity::Day => picker.dispatch(&initial, Intent::SetDate(case.anchor.first_day())).0,
            };
            assert_eq!(state.anchor().year(), case.anchor.year());
            let model = picker.render(&state);
            assert_eq!(model.previous_enabled, case.previous, "{} {}", case.granularity, case.anchor);
            assert_eq!(model.next_enabled, case.next, "{} {}", case.granularity, case.anchor);
        }
    }

    #[test]
    fn test_step_affordances_at_supported_span() {
        let picker = picker(DatepickerConfig {
            selected_date: Some(date(1, 1, 1)),
            ..DatepickerConfig::default()
        });
        let (_, model) = picker.initialize();
        assert!(!model.previous_enabled);
        assert!(model.next_enabled);
    }

    #[test]
    fn test_rtl_model() {
        let (_, model) = picker(DatepickerConfig {
            locale: "ar".to_owned(),
            ..DatepickerConfig::default()
        })
        .initialize();
        assert!(model.rtl);
        assert_eq!(model.weekday_labels.first().map(String::as_str), Some("ج"));
        assert_eq!(model.weekday_labels.last().map(String::as_str), Some("س"));
        assert_eq!(model.today_label.as_deref(), Some("اليوم"));
    }

    #[test]
    fn test_render_model_serializes() {
        let (_, model) = picker(DatepickerConfig::default()).initialize();
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["granularity"], "day");
        assert_eq!(value["header_label"], "February 2024");
        assert_eq!(value["rows"][0]["cells"][0]["target"]["kind"], "day");
        assert_eq!(value["rows"][0]["cells"][0]["target"]["value"], "2024-01-28");
        assert_eq!(value["rows"][0]["cells"][0]["decoration"]["inactive"], true);
    }
}
