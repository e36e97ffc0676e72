use dioxus::prelude::*;

use super::{GraveyardState, Item};
use crate::t;

#[component]
pub fn ProductList(state: Signal<GraveyardState>) -> Element {
    let state = state();
    let count = state.catalog.len();

    rsx! {
        section { class: "graveyard",
            div { class: "graveyard__header",
                h2 { {t!("graveyard-title")} }
                if count > 0 {
                    span { class: "graveyard__meta", {t!("graveyard-count", count = count)} }
                }
            }

            if let Some(error) = state.error.clone() {
                p { class: "graveyard__error", {t!("graveyard-load-error", error = error)} }
            } else if state.catalog.is_empty() {
                p { class: "graveyard__placeholder", {t!("graveyard-empty")} }
            } else {
                ul { class: "graveyard__items",
                    for product in state.catalog.products().iter().cloned() {
                        Item { key: "{product.key()}", product: product.clone() }
                    }
                }
            }
        }
    }
}
