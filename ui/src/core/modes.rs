//! The three QR tool modes shown on the landing page.

/// Symbolic glyph handle for a mode card. Rendering lives in
/// `components::icons`; nothing here interprets the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeIcon {
    QrCode,
    Photo,
    Camera,
}

/// One entry of the QR card's mode list.
#[derive(Debug, Clone, PartialEq)]
pub struct QrMode {
    /// Stable, locale-independent identity (also the render key).
    pub key: &'static str,
    pub label: String,
    pub explain: String,
    pub icon: ModeIcon,
}

/// The mode list in display order: make, load, scan.
///
/// Built fresh on every call so labels and explanations always reflect
/// the loader's current language.
pub fn qr_modes() -> [QrMode; 3] {
    [
        QrMode {
            key: "qr-make",
            label: crate::t!("qr-make-label"),
            explain: crate::t!("qr-make-desc"),
            icon: ModeIcon::QrCode,
        },
        QrMode {
            key: "qr-load",
            label: crate::t!("qr-load-label"),
            explain: crate::t!("qr-load-desc"),
            icon: ModeIcon::Photo,
        },
        QrMode {
            key: "qr-scan",
            label: crate::t!("qr-scan-label"),
            explain: crate::t!("qr-scan-desc"),
            icon: ModeIcon::Camera,
        },
    ]
}
