use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, LocaleScope};
use ui::views::{Graveyard, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/cementerio")]
    Graveyard {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_graveyard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Graveyard {},
        "{label}"
    })
}

fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        home: nav_home,
        graveyard: nav_graveyard,
    });

    rsx! {
        document::Link { rel: "icon", href: ui::core::icons::TOMBSTONE_URL }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        LocaleScope { lang: lang_code(), Router::<Route> {} }
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
