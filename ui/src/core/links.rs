//! Outbound links to the bykeon service subdomains.
//!
//! Each service lives on its own subdomain and expects the UI language as
//! the first (and only) path segment, e.g. `https://ip.bykeon.com/fr`.

const APEX_DOMAIN: &str = "bykeon.com";

/// A destination in the service directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Public IP lookup (`ip.` subdomain).
    IpInfo,
    /// QR create/load/scan tools (`qr.` subdomain).
    QrTools,
}

impl Service {
    pub fn subdomain(self) -> &'static str {
        match self {
            Service::IpInfo => "ip",
            Service::QrTools => "qr",
        }
    }

    /// Build the navigation target for this service in the given locale.
    pub fn url(self, locale: &str) -> String {
        format!("https://{}.{}/{}", self.subdomain(), APEX_DOMAIN, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_embed_the_locale_for_every_supported_tag() {
        for tag in ["en", "fr", "ko"] {
            assert_eq!(Service::IpInfo.url(tag), format!("https://ip.bykeon.com/{tag}"));
            assert_eq!(Service::QrTools.url(tag), format!("https://qr.bykeon.com/{tag}"));
        }
    }

    #[test]
    fn locale_is_the_final_path_segment() {
        let url = Service::QrTools.url("ko");
        assert_eq!(url.rsplit('/').next(), Some("ko"));
    }

    #[test]
    fn switching_locale_only_changes_the_path() {
        let en = Service::IpInfo.url("en");
        let fr = Service::IpInfo.url("fr");
        assert_ne!(en, fr);
        assert_eq!(en.rsplit_once('/').map(|(head, _)| head), fr.rsplit_once('/').map(|(head, _)| head));
    }
}
