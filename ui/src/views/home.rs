use dioxus::prelude::*;

use crate::components::icons::ModeGlyph;
use crate::core::links::Service;
use crate::core::modes::qr_modes;
use crate::core::motion::{IP_CARD_ENTRANCE, QR_CARD_ENTRANCE};

// Shared theme (asset link, inlined for release native builds)
const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[cfg(debug_assertions)]
fn log_home_render(locale: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (locale={locale})");
}

/// The service directory landing page: one animated card per service.
///
/// Reads the global locale signal each render, so a language change made
/// in the navbar rebuilds both outbound links and re-localizes every
/// string without a remount. The signal subscription lives and dies with
/// this component's scope.
#[component]
pub fn Home() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let locale = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(crate::i18n::current_language);

    #[cfg(debug_assertions)]
    log_home_render(&locale);

    let ip_href = Service::IpInfo.url(&locale);
    let qr_href = Service::QrTools.url(&locale);
    let title = crate::t!("service-title");

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }
        document::Title { "{title}" }

        main { class: "page page-home",
            a {
                class: "service-card service-card--ip",
                href: "{ip_href}",
                style: IP_CARD_ENTRANCE.style(),
                p { {crate::t!("ip-headline")} }
                p { {crate::t!("ip-subline")} }
            }

            a {
                class: "service-card service-card--qr",
                href: "{qr_href}",
                style: QR_CARD_ENTRANCE.style(),
                div { class: "service-card__head",
                    h2 { {crate::t!("qr-card-title")} }
                }
                div { class: "service-card__divider" }
                div { class: "service-card__modes",
                    for mode in qr_modes() {
                        div {
                            key: "{mode.key}",
                            class: "mode-card",
                            div { class: "mode-card__head",
                                ModeGlyph { icon: mode.icon }
                                h3 { class: "mode-card__label", "{mode.label}" }
                            }
                            p { class: "mode-card__explain", "{mode.explain}" }
                        }
                    }
                }
            }
        }
    }
}
