//! Shared UI crate for Cementerio: catalog logic, list components and views.

use dioxus::prelude::*;

pub mod core;
pub mod graveyard;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Keyed remount on language change (components/locale_scope.rs)
    pub mod locale_scope;
    pub use locale_scope::LocaleScope;
}

/// Shared theme stylesheet (ui/assets/theme/main.css).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
