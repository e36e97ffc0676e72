use dioxus::prelude::*;
use time::OffsetDateTime;

use super::{GraveyardState, LeadPhrase};
use crate::{
    core::{
        catalog::Catalog,
        dates::{parse_iso, Clock},
        format::format_relative,
    },
    t,
};

/// Products with a pending execution date, each led by a random idiom:
/// "Estirar la pata in 3 months, Google Foo."
#[component]
pub fn UpcomingList(state: Signal<GraveyardState>) -> Element {
    let clock = try_use_context::<Clock>().unwrap_or_default();
    let state = state();
    let entries = upcoming_entries(&state.catalog, clock.now());

    rsx! {
        section { class: "upcoming",
            h2 { class: "upcoming__title", {t!("home-upcoming-title")} }
            if entries.is_empty() {
                p { class: "upcoming__placeholder", {t!("home-upcoming-empty")} }
            } else {
                ul { class: "upcoming__items",
                    for entry in entries {
                        li { key: "{entry.key}", class: "upcoming__item",
                            LeadPhrase { relative_date: entry.relative_date.clone() }
                            a {
                                href: "{entry.link}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{entry.name}"
                            }
                            "."
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct UpcomingEntry {
    key: String,
    name: String,
    link: String,
    relative_date: String,
}

fn upcoming_entries(catalog: &Catalog, now: OffsetDateTime) -> Vec<UpcomingEntry> {
    catalog
        .upcoming(now)
        .into_iter()
        .filter_map(|product| {
            let close = parse_iso(&product.date_close).ok()?;
            Some(UpcomingEntry {
                key: product.key(),
                name: product.name.clone(),
                link: product.link.clone(),
                relative_date: format_relative(now, close.instant),
            })
        })
        .collect()
}
