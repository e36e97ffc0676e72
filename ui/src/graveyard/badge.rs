use dioxus::prelude::*;

use crate::i18n;

/// Category pill shown under the age range. Empty categories render an empty pill.
#[component]
pub fn Badge(content: String) -> Element {
    let label = i18n::kind_label(&content);
    let class = if label.is_empty() {
        "badge badge--empty"
    } else {
        "badge"
    };

    rsx! {
        span { class: "{class}", "{label}" }
    }
}
