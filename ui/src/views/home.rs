use dioxus::prelude::*;

use crate::graveyard::{GraveyardState, UpcomingList};

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    dioxus::logger::tracing::debug!("[i18n] Home render (lang_marker={lang_marker})");

    let state = use_signal(GraveyardState::load);

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }
            UpcomingList { state: state }
        }
    }
}
