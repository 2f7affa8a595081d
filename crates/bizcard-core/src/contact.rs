//! Contact action links and device heuristics.

use crate::config::BusinessDetails;

/// Width at or below which the page uses its mobile layout.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

const MOBILE_AGENTS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Mobile if the viewport is narrow or the user agent names a mobile device.
pub fn is_mobile(viewport_width: f64, user_agent: &str) -> bool {
    if viewport_width <= MOBILE_BREAKPOINT {
        return true;
    }
    let agent = user_agent.to_lowercase();
    MOBILE_AGENTS.iter().any(|token| agent.contains(token))
}

pub fn tel_url(details: &BusinessDetails) -> String {
    format!("tel:+{}", details.phone_digits)
}

pub fn whatsapp_url(details: &BusinessDetails) -> String {
    format!(
        "https://wa.me/{}?text={}",
        details.phone_digits,
        urlencoding::encode(&details.whatsapp_message)
    )
}

pub fn mailto_url(details: &BusinessDetails) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        details.email,
        urlencoding::encode(&details.email_subject),
        urlencoding::encode(&details.email_body)
    )
}

/// Social network a link points to, used as the analytics label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    YouTube,
    LinkedIn,
    TikTok,
    Twitter,
    Pinterest,
    Twitch,
    Other,
}

impl SocialPlatform {
    pub fn from_url(url: &str) -> Self {
        const HOSTS: &[(&str, SocialPlatform)] = &[
            ("facebook.com", SocialPlatform::Facebook),
            ("instagram.com", SocialPlatform::Instagram),
            ("youtube.com", SocialPlatform::YouTube),
            ("linkedin.com", SocialPlatform::LinkedIn),
            ("tiktok.com", SocialPlatform::TikTok),
            ("twitter.com", SocialPlatform::Twitter),
            ("pinterest.com", SocialPlatform::Pinterest),
            ("twitch.tv", SocialPlatform::Twitch),
        ];
        HOSTS
            .iter()
            .find(|(host, _)| url.contains(host))
            .map(|(_, platform)| *platform)
            .unwrap_or(SocialPlatform::Other)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::TikTok => "tiktok",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Pinterest => "pinterest",
            SocialPlatform::Twitch => "twitch",
            SocialPlatform::Other => "social",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_by_width_or_agent() {
        assert!(is_mobile(768.0, ""));
        assert!(!is_mobile(1024.0, "Mozilla/5.0 (X11; Linux x86_64)"));
        assert!(is_mobile(1024.0, "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)"));
        assert!(is_mobile(1280.0, "Opera Mini/8.0"));
    }

    #[test]
    fn link_builders_encode_text() {
        let details = BusinessDetails::default();
        assert_eq!(tel_url(&details), "tel:+526241378636");

        let wa = whatsapp_url(&details);
        assert!(wa.starts_with("https://wa.me/526241378636?text=Hi%2C%20I%20would"));

        let mail = mailto_url(&details);
        assert!(mail.contains("subject=Booking%20Inquiry"));
        assert!(mail.contains("%0A%0A"));
    }

    #[test]
    fn classify_platforms() {
        assert_eq!(
            SocialPlatform::from_url("https://www.instagram.com/allin1cabo"),
            SocialPlatform::Instagram
        );
        assert_eq!(SocialPlatform::from_url("https://twitch.tv/x").label(), "twitch");
        assert_eq!(SocialPlatform::from_url("https://example.com").label(), "social");
    }
}
