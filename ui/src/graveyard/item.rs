use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use time::OffsetDateTime;

use super::Badge;
use crate::{
    core::{
        age_range::AgeRange,
        dates::{is_past, parse_iso, Clock},
        error::DateError,
        icons::{Icon, IconSet},
        product::ProductRecord,
    },
    i18n, t,
};

/// Display facts derived from one product at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemModel {
    pub is_past: bool,
    pub icon: Icon,
    /// `None` when the product dates could not be read.
    pub age_range: Option<AgeRange>,
    pub kind: String,
    pub name: String,
    pub link: String,
    pub description: String,
}

impl ItemModel {
    pub fn build(product: &ProductRecord, now: OffsetDateTime) -> Result<Self, DateError> {
        let open = parse_iso(&product.date_open)?;
        let close = parse_iso(&product.date_close)?;
        let past = is_past(now, &close);

        Ok(Self {
            is_past: past,
            icon: Icon::for_status(past),
            age_range: Some(AgeRange::new(
                &product.date_open,
                &open,
                &product.date_close,
                &close,
                past,
            )),
            ..Self::without_dates(product)
        })
    }

    /// Model for a product whose dates are unreadable: active icon, empty age range.
    pub fn without_dates(product: &ProductRecord) -> Self {
        Self {
            is_past: false,
            icon: Icon::Guillotine,
            age_range: None,
            kind: product.kind.clone(),
            name: product.name.clone(),
            link: product.link.clone(),
            description: product.description.clone(),
        }
    }
}

#[component]
pub fn Item(product: ProductRecord) -> Element {
    let clock = try_use_context::<Clock>().unwrap_or_default();
    let icons = try_use_context::<IconSet>().unwrap_or_default();

    let model = ItemModel::build(&product, clock.now()).unwrap_or_else(|err| {
        warn!(product = %product.name, "rendering without age range: {err}");
        ItemModel::without_dates(&product)
    });

    render_item(model, &icons)
}

fn render_item(model: ItemModel, icons: &IconSet) -> Element {
    let ItemModel {
        is_past,
        icon,
        age_range,
        kind,
        name,
        link,
        description,
    } = model;

    let icon_url = icon.url(icons).to_string();
    let icon_alt = match icon {
        Icon::Tombstone => t!("icon-alt-tombstone"),
        Icon::Guillotine => t!("icon-alt-guillotine"),
    };

    rsx! {
        li { class: format!(
                "list-item {}",
                if is_past { "list-item--past" } else { "list-item--scheduled" }
            ),
            div { class: "list-item__icon",
                img { class: "list-item__icon-image", src: "{icon_url}", alt: "{icon_alt}" }
                {render_age_range(age_range)}
                Badge { content: kind }
            }
            div { class: "list-item__content",
                h2 { class: "list-item__title",
                    a {
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{name}"
                    }
                }
                p { class: "list-item__description", "{description}" }
            }
        }
    }
}

fn render_age_range(age_range: Option<AgeRange>) -> Element {
    match age_range {
        Some(AgeRange::Scheduled {
            month,
            year,
            close_raw,
        }) => {
            let month = i18n::month_name(month);
            rsx! {
                div { class: "list-item__age-range",
                    time { datetime: "{close_raw}", title: "{close_raw}",
                        "{month}"
                        br {}
                        "{year}"
                    }
                }
            }
        }
        Some(AgeRange::Lifespan {
            open_year,
            open_raw,
            close_year,
            close_raw,
        }) => rsx! {
            div { class: "list-item__age-range",
                time { datetime: "{open_raw}", title: "{open_raw}", "{open_year}" }
                " - "
                time { datetime: "{close_raw}", title: "{close_raw}", "{close_year}" }
            }
        },
        None => rsx! {
            div { class: "list-item__age-range" }
        },
    }
}
