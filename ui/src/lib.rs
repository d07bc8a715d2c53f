//! Shared UI crate for the bykeon service directory. Cross-platform
//! views, i18n, and the landing-page building blocks live here.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    // Mode card glyphs (components/icons.rs)
    pub mod icons;
    pub use icons::ModeGlyph;
}
