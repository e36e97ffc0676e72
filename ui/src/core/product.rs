//! Product records as delivered by the catalog.

use serde::{Deserialize, Deserializer, Serialize};

use super::dates::parse_iso;

/// One catalog entry. Field names follow the camelCase JSON of the catalog files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub link: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_empty")]
    pub kind: String,
    pub date_open: String,
    pub date_close: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl ProductRecord {
    /// Stable key for list rendering: the explicit slug, else one derived from the name.
    pub fn key(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => slugify(&self.name),
        }
    }

    /// Ingestion-boundary checks. Rendering never calls this; the catalog does.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is empty".into());
        }
        if !(self.link.starts_with("https://") || self.link.starts_with("http://")) {
            return Err(format!("link {:?} is not an absolute http(s) URL", self.link));
        }
        let open = parse_iso(&self.date_open).map_err(|e| format!("dateOpen: {e}"))?;
        let close = parse_iso(&self.date_close).map_err(|e| format!("dateClose: {e}"))?;
        if open.instant > close.instant {
            return Err(format!(
                "dateOpen {} is after dateClose {}",
                self.date_open, self.date_close
            ));
        }
        Ok(())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> ProductRecord {
        ProductRecord {
            name: "Google Reader".into(),
            link: "https://en.wikipedia.org/wiki/Google_Reader".into(),
            description: "Lector de feeds RSS.".into(),
            kind: "service".into(),
            date_open: "2005-10-07".into(),
            date_close: "2013-07-01".into(),
            slug: None,
        }
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let value = json!({
            "name": "Stadia",
            "link": "https://en.wikipedia.org/wiki/Google_Stadia",
            "description": "Servicio de juegos en la nube.",
            "type": "service",
            "dateOpen": "2019-11-19",
            "dateClose": "2023-01-18"
        });
        let parsed: ProductRecord = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.kind, "service");
        assert_eq!(parsed.date_open, "2019-11-19");
        assert_eq!(parsed.date_close, "2023-01-18");
        assert_eq!(parsed.slug, None);
    }

    #[test]
    fn missing_or_null_optional_fields_become_empty() {
        let value = json!({
            "name": "Orkut",
            "link": "https://en.wikipedia.org/wiki/Orkut",
            "description": null,
            "dateOpen": "2004-01-22",
            "dateClose": "2014-09-30"
        });
        let parsed: ProductRecord = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.kind, "");
    }

    #[test]
    fn key_prefers_slug_then_name() {
        let mut r = record();
        assert_eq!(r.key(), "google-reader");
        r.slug = Some("reader".into());
        assert_eq!(r.key(), "reader");
        r.slug = Some("  ".into());
        assert_eq!(r.key(), "google-reader");
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Google+ (Consumer)"), "google-consumer");
        assert_eq!(slugify("  Allo!  "), "allo");
    }

    #[test]
    fn validate_accepts_well_formed_record() {
        assert_eq!(record().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_input() {
        let mut empty_name = record();
        empty_name.name = "   ".into();
        assert!(empty_name.validate().is_err());

        let mut relative_link = record();
        relative_link.link = "/reader".into();
        assert!(relative_link.validate().is_err());

        let mut bad_date = record();
        bad_date.date_close = "julio 2013".into();
        assert!(bad_date.validate().unwrap_err().starts_with("dateClose"));

        let mut reversed = record();
        reversed.date_open = "2014-01-01".into();
        assert!(reversed.validate().unwrap_err().contains("after"));
    }
}
