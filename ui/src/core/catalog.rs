//! Catalog ingestion: the place where malformed product data fails loudly.

use std::cmp::Reverse;

use time::OffsetDateTime;

use super::dates::{is_past, parse_iso};
use super::error::{CatalogError, Result};
use super::product::ProductRecord;

/// Validated product list, newest shutdown first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<ProductRecord>,
}

impl Catalog {
    /// Parse a JSON array of product records.
    pub fn from_json(src: &str) -> Result<Self> {
        let records: Vec<ProductRecord> = serde_json::from_str(src)?;
        Self::from_records(records)
    }

    pub fn from_records(mut records: Vec<ProductRecord>) -> Result<Self> {
        for (index, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|reason| CatalogError::InvalidRecord {
                    index,
                    name: record.name.clone(),
                    reason,
                })?;
        }

        records.sort_by_cached_key(|r| Reverse(close_instant(r)));
        Ok(Self { products: records })
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products whose shutdown is still ahead, soonest first.
    pub fn upcoming(&self, now: OffsetDateTime) -> Vec<&ProductRecord> {
        let mut upcoming: Vec<_> = self
            .products
            .iter()
            .filter(|r| matches!(status(r, now), Some(false)))
            .collect();
        upcoming.reverse();
        upcoming
    }

    /// Products already past their shutdown, most recent first.
    pub fn dead(&self, now: OffsetDateTime) -> Vec<&ProductRecord> {
        self.products
            .iter()
            .filter(|r| matches!(status(r, now), Some(true)))
            .collect()
    }
}

fn close_instant(record: &ProductRecord) -> Option<OffsetDateTime> {
    parse_iso(&record.date_close).ok().map(|d| d.instant)
}

fn status(record: &ProductRecord, now: OffsetDateTime) -> Option<bool> {
    parse_iso(&record.date_close)
        .ok()
        .map(|close| is_past(now, &close))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const SAMPLE: &str = r#"[
        {"name": "Google Reader", "link": "https://en.wikipedia.org/wiki/Google_Reader",
         "description": "Lector de feeds.", "type": "service",
         "dateOpen": "2005-10-07", "dateClose": "2013-07-01"},
        {"name": "Futuro", "link": "https://example.com/futuro",
         "description": "", "type": "app",
         "dateOpen": "2020-01-01", "dateClose": "2031-03-15"},
        {"name": "Pronto", "link": "https://example.com/pronto",
         "type": "hardware",
         "dateOpen": "2021-05-01", "dateClose": "2030-09-01"}
    ]"#;

    #[test]
    fn orders_by_close_date_descending() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let names: Vec<_> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Futuro", "Pronto", "Google Reader"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn splits_upcoming_and_dead() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let now = datetime!(2026-10-19 12:00 UTC);

        let upcoming: Vec<_> = catalog.upcoming(now).iter().map(|p| p.name.clone()).collect();
        assert_eq!(upcoming, ["Pronto", "Futuro"]);

        let dead: Vec<_> = catalog.dead(now).iter().map(|p| p.name.clone()).collect();
        assert_eq!(dead, ["Google Reader"]);
    }

    #[test]
    fn close_day_midnight_is_still_upcoming() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let now = datetime!(2030-09-01 0:00 UTC);
        assert_eq!(catalog.upcoming(now).len(), 2);
        assert_eq!(catalog.dead(now).len(), 1);
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn invalid_record_names_index_and_product() {
        let src = r#"[
            {"name": "Ok", "link": "https://example.com", "dateOpen": "2010-01-01", "dateClose": "2011-01-01"},
            {"name": "Roto", "link": "https://example.com", "dateOpen": "ayer", "dateClose": "2011-01-01"}
        ]"#;
        match Catalog::from_json(src).unwrap_err() {
            CatalogError::InvalidRecord { index, name, reason } => {
                assert_eq!(index, 1);
                assert_eq!(name, "Roto");
                assert!(reason.starts_with("dateOpen"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog, Catalog::default());
    }
}
