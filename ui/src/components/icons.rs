//! Inline SVG glyphs for the QR mode cards.
//!
//! Stroke-outline style, drawn on a 24x24 grid and colored via
//! `currentColor` so the theme's hover emphasis applies to the glyph too.

use dioxus::prelude::*;

use crate::core::modes::ModeIcon;

#[component]
pub fn ModeGlyph(icon: ModeIcon) -> Element {
    let shapes = match icon {
        ModeIcon::QrCode => rsx! {
            rect { x: "4", y: "4", width: "6", height: "6", rx: "1" }
            rect { x: "14", y: "4", width: "6", height: "6", rx: "1" }
            rect { x: "4", y: "14", width: "6", height: "6", rx: "1" }
            line { x1: "14", y1: "14", x2: "14", y2: "17" }
            line { x1: "14", y1: "20", x2: "17", y2: "20" }
            line { x1: "20", y1: "14", x2: "20", y2: "20" }
            line { x1: "17", y1: "14", x2: "17", y2: "17" }
        },
        ModeIcon::Photo => rsx! {
            rect { x: "3", y: "5", width: "18", height: "14", rx: "2" }
            circle { cx: "8.5", cy: "10", r: "1.5" }
            polyline { points: "21 15 16 10 8 18" }
        },
        ModeIcon::Camera => rsx! {
            path { d: "M9 7 10.2 5 h3.6 L15 7" }
            rect { x: "3", y: "7", width: "18", height: "12", rx: "2" }
            circle { cx: "12", cy: "13", r: "3.5" }
        },
    };

    rsx! {
        svg {
            class: "mode-card__glyph",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {shapes}
        }
    }
}
