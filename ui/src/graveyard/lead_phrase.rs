use dioxus::prelude::*;

use crate::core::idioms::LeadPhraseSelector;

/// `"<idiom> in <relative_date>, "` in a span. The idiom is drawn once per
/// mount; later renders with a different `relative_date` keep it. Pass `seed`
/// for a reproducible pick.
#[component]
pub fn LeadPhrase(relative_date: String, seed: Option<u64>) -> Element {
    let selector = use_hook(move || match seed {
        Some(seed) => LeadPhraseSelector::from_seed(seed),
        None => LeadPhraseSelector::random(),
    });
    let text = selector.render(&relative_date);

    rsx! {
        span { class: "lead-phrase", "{text}" }
    }
}
