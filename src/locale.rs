//! Per-locale naming data: weekday and month names, button labels, text
//! direction and the conventional first day of the week.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::weekday_from_sunday_index;

/// Naming data for one locale. Weekday arrays start at Sunday, month arrays
/// at January.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub days:         [String; 7],
    pub days_short:   [String; 7],
    pub days_min:     [String; 7],
    pub months:       [String; 12],
    pub months_short: [String; 12],
    pub today:        String,
    pub clear:        String,
    /// Right-to-left text direction
    #[serde(default)]
    pub rtl:          bool,
    /// Default first day of the week, 0 = Sunday
    #[serde(default)]
    pub week_start:   u8,
}

fn owned<const N: usize>(names: [&str; N]) -> [String; N] {
    names.map(str::to_owned)
}

impl Locale {
    pub fn english() -> Self {
        Self {
            days: owned(["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]),
            days_short: owned(["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            days_min: owned(["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]),
            months: owned([
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ]),
            months_short: owned([
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            today: "Today".to_owned(),
            clear: "Clear".to_owned(),
            rtl: false,
            week_start: 0,
        }
    }

    pub fn german() -> Self {
        Self {
            days: owned([
                "Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag",
            ]),
            days_short: owned(["Son", "Mon", "Die", "Mit", "Don", "Fre", "Sam"]),
            days_min: owned(["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"]),
            months: owned([
                "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
                "September", "Oktober", "November", "Dezember",
            ]),
            months_short: owned([
                "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
            ]),
            today: "Heute".to_owned(),
            clear: "Löschen".to_owned(),
            rtl: false,
            week_start: 1,
        }
    }

    pub fn french() -> Self {
        Self {
            days: owned(["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"]),
            days_short: owned(["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."]),
            days_min: owned(["d", "l", "ma", "me", "j", "v", "s"]),
            months: owned([
                "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
                "septembre", "octobre", "novembre", "décembre",
            ]),
            months_short: owned([
                "janv.", "févr.", "mars", "avril", "mai", "juin", "juil.", "août", "sept.", "oct.",
                "nov.", "déc.",
            ]),
            today: "Aujourd'hui".to_owned(),
            clear: "Effacer".to_owned(),
            rtl: false,
            week_start: 1,
        }
    }

    pub fn arabic() -> Self {
        Self {
            days: owned(["الأحد", "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت"]),
            days_short: owned(["أحد", "اثنين", "ثلاثاء", "أربعاء", "خميس", "جمعة", "سبت"]),
            days_min: owned(["ح", "ن", "ث", "ع", "خ", "ج", "س"]),
            months: owned([
                "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس",
                "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
            ]),
            months_short: owned([
                "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس",
                "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
            ]),
            today: "اليوم".to_owned(),
            clear: "مسح".to_owned(),
            rtl: true,
            week_start: 6,
        }
    }

    /// Shortest weekday label, as used in the day grid header
    pub fn day_min(&self, day: Weekday) -> &str {
        &self.days_min[day.num_days_from_sunday() as usize]
    }

    /// Full month name for a 0-based month
    pub fn month_name(&self, month0: u32) -> &str {
        self.months.get(month0 as usize).map_or("", String::as_str)
    }

    /// Abbreviated month name for a 0-based month
    pub fn month_short(&self, month0: u32) -> &str {
        self.months_short.get(month0 as usize).map_or("", String::as_str)
    }

    /// The locale's default first day of the week, if the stored index is valid
    pub fn default_week_start(&self) -> Option<Weekday> {
        weekday_from_sunday_index(self.week_start)
    }
}

/// Lookup of locales by key (`"en"`, `"de"`, ...).
///
/// Populated before any picker is built and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: HashMap<String, Locale>,
}

impl LocaleRegistry {
    /// A registry with no locales at all.
    pub fn empty() -> Self {
        Self {
            locales: HashMap::new(),
        }
    }

    /// Adds or replaces a locale.
    pub fn register(&mut self, key: impl Into<String>, locale: Locale) {
        self.locales.insert(key.into(), locale);
    }

    #[must_use]
    pub fn with_locale(mut self, key: impl Into<String>, locale: Locale) -> Self {
        self.register(key, locale);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Locale> {
        self.locales.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.locales.contains_key(key)
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for LocaleRegistry {
    /// The built-in locales: `en`, `de`, `fr` and `ar`.
    fn default() -> Self {
        Self::empty()
            .with_locale("en", Locale::english())
            .with_locale("de", Locale::german())
            .with_locale("fr", Locale::french())
            .with_locale("ar", Locale::arabic())
    }
}
