use dioxus::prelude::*;

use crate::graveyard::{GraveyardState, ProductList};

#[component]
pub fn Graveyard() -> Element {
    // Hidden marker keeps a reactive dependency on the language signal.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let state = use_signal(GraveyardState::load);

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-graveyard",
            h1 { {crate::t!("graveyard-title")} }
            p { {crate::t!("graveyard-intro")} }
            ProductList { state: state }
        }
    }
}
