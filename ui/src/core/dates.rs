//! Calendar date parsing and the injectable time source.
//!
//! Product dates arrive as ISO-8601 strings. A bare `YYYY-MM-DD` value denotes
//! midnight UTC of that day; full RFC 3339 timestamps keep their own instant.
//! Whether a product is already dead is decided against a [`Clock`] so views
//! and tests can pin "now".

use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};

use super::error::DateError;

/// A parsed product date: the calendar day shown to users plus the instant
/// used for comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoDate {
    pub date: Date,
    pub instant: OffsetDateTime,
}

impl IsoDate {
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_iso(raw: &str) -> Result<IsoDate, DateError> {
    let trimmed = raw.trim();

    if let Ok(date) = Date::parse(trimmed, format_description!("[year]-[month]-[day]")) {
        return Ok(IsoDate {
            date,
            instant: date.midnight().assume_utc(),
        });
    }

    OffsetDateTime::parse(trimmed, &Rfc3339)
        .map(|instant| IsoDate {
            date: instant.date(),
            instant,
        })
        .map_err(|_| DateError::Invalid {
            raw: raw.to_string(),
        })
}

/// Source of "now". Views read it from context and fall back to [`Clock::System`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(OffsetDateTime),
}

impl Clock {
    pub fn now(&self) -> OffsetDateTime {
        match self {
            Self::System => OffsetDateTime::now_utc(),
            Self::Fixed(at) => *at,
        }
    }
}

/// A product is dead once `now` is strictly later than its close instant.
/// `now == close` still counts as scheduled.
pub fn is_past(now: OffsetDateTime, close: &IsoDate) -> bool {
    now > close.instant
}
