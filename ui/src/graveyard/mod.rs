mod badge;
pub use badge::Badge;

mod item;
pub use item::{Item, ItemModel};

mod lead_phrase;
pub use lead_phrase::LeadPhrase;

mod list;
pub use list::ProductList;

mod upcoming;
pub use upcoming::UpcomingList;

use dioxus::logger::tracing::{debug, warn};

use crate::core::catalog::Catalog;

/// Catalog bundled with the app (Spanish descriptions).
pub const SAMPLE_CATALOG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/data/graveyard.json"
));

/// Shared state for the graveyard views: the validated catalog or the load error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraveyardState {
    pub catalog: Catalog,
    pub error: Option<String>,
}

impl GraveyardState {
    pub fn load() -> Self {
        Self::from_json(SAMPLE_CATALOG)
    }

    pub fn from_json(src: &str) -> Self {
        match Catalog::from_json(src) {
            Ok(catalog) => {
                debug!("catalog loaded with {} products", catalog.len());
                Self {
                    catalog,
                    error: None,
                }
            }
            Err(err) => {
                warn!("catalog rejected: {err}");
                Self {
                    catalog: Catalog::default(),
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_loads() {
        let state = GraveyardState::load();
        assert_eq!(state.error, None);
        assert!(!state.catalog.is_empty());
    }

    #[test]
    fn broken_catalog_keeps_the_error() {
        let state = GraveyardState::from_json(r#"[{"name": ""}]"#);
        assert!(state.catalog.is_empty());
        assert!(state.error.is_some());
    }
}
