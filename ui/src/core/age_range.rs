//! Age-range label shown under each product icon.

use time::Month;

use super::dates::IsoDate;

/// What the age-range slot displays. Raw ISO strings are kept verbatim for the
/// `datetime`/`title` attributes of the rendered `time` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeRange {
    /// Still alive: month and year of the scheduled shutdown.
    Scheduled {
        month: Month,
        year: i32,
        close_raw: String,
    },
    /// Already dead: launch year to shutdown year.
    Lifespan {
        open_year: i32,
        open_raw: String,
        close_year: i32,
        close_raw: String,
    },
}

impl AgeRange {
    pub fn new(
        open_raw: &str,
        open: &IsoDate,
        close_raw: &str,
        close: &IsoDate,
        is_past: bool,
    ) -> Self {
        if is_past {
            Self::Lifespan {
                open_year: open.year(),
                open_raw: open_raw.to_string(),
                close_year: close.year(),
                close_raw: close_raw.to_string(),
            }
        } else {
            Self::Scheduled {
                month: close.date.month(),
                year: close.year(),
                close_raw: close_raw.to_string(),
            }
        }
    }

    /// Plain-text form with English month names, e.g. `June / 2025` or `2012 - 2025`.
    pub fn label(&self) -> String {
        match self {
            Self::Scheduled { month, year, .. } => format!("{month} / {year}"),
            Self::Lifespan {
                open_year,
                close_year,
                ..
            } => format!("{open_year} - {close_year}"),
        }
    }
}
