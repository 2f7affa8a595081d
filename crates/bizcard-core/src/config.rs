//! Business card configuration.
//!
//! Everything the page shows or links to lives here. Defaults reproduce the
//! published card; a JSON file can override any subset of fields:
//!
//! ```json
//! {
//!   "business": { "phone_display": "+1 555 0100", "phone_digits": "15550100" },
//!   "toast": { "duration_ms": 5000 }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chat::ChatSettings;
use crate::error::{CardError, CardResult};
use crate::toast::{DEFAULT_EXIT_DURATION, DEFAULT_TOAST_DURATION};

/// A labelled outbound link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLink {
    pub label: String,
    pub url: String,
}

impl NamedLink {
    fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessDetails {
    pub business_name: String,
    pub contact_name: String,
    pub tagline: String,
    /// Human-readable number, also what the copy button writes
    pub phone_display: String,
    /// Digits only, country code first (used for `tel:` and WhatsApp)
    pub phone_digits: String,
    pub email: String,
    pub email_subject: String,
    pub email_body: String,
    pub whatsapp_message: String,
    pub website: String,
    pub maps_url: String,
    pub vcard_file_name: String,
    pub services: Vec<NamedLink>,
    pub socials: Vec<NamedLink>,
}

impl Default for BusinessDetails {
    fn default() -> Self {
        Self {
            business_name: "All In One Cabo".to_string(),
            contact_name: "Christian".to_string(),
            tagline: "Tours, yachts, transportation and events in Los Cabos".to_string(),
            phone_display: "+52 624 137 8636".to_string(),
            phone_digits: "526241378636".to_string(),
            email: "info@allin1cabo.com".to_string(),
            email_subject: "Booking Inquiry".to_string(),
            email_body: "Hi Christian,\n\nI'd like to ask about ...".to_string(),
            whatsapp_message: "Hi, I would like to book an activity with All In One Cabo. Please share availability."
                .to_string(),
            website: "https://www.allin1cabo.com".to_string(),
            maps_url: "https://maps.app.goo.gl/".to_string(),
            vcard_file_name: "allinonecabo.vcf".to_string(),
            services: vec![
                NamedLink::new("Yacht Rental", "https://www.allin1cabo.com/yates"),
                NamedLink::new("Video Marketing", "https://www.allin1cabo.com/videomarketing"),
                NamedLink::new("Activities", "https://www.allin1cabo.com/activities-1"),
                NamedLink::new("Transportation", "https://www.allin1cabo.com/transportacion"),
                NamedLink::new(
                    "Bachelor Parties",
                    "https://www.allin1cabo.com/bachelorandbacheloretteparties",
                ),
                NamedLink::new("Wedding Planner", "https://www.allin1cabo.com/weddingplanner"),
                NamedLink::new("Real Estate", "https://www.allin1cabo.com/realestatemenu"),
                NamedLink::new("Fishing", "https://www.allin1cabo.com/fishing"),
                NamedLink::new("Restaurants", "https://www.allin1cabo.com/restaurants"),
                NamedLink::new("Night Clubs", "https://www.allin1cabo.com/nightclubs"),
                NamedLink::new("Golf Rounds", "https://www.allin1cabo.com/golf"),
                NamedLink::new("Join the team", "https://www.allin1cabo.com/copia-de-contact"),
            ],
            socials: vec![
                NamedLink::new("Facebook", "https://www.facebook.com/allin1cabo"),
                NamedLink::new("Instagram", "https://www.instagram.com/allin1cabo"),
                NamedLink::new("YouTube", "https://www.youtube.com/@allin1cabo"),
                NamedLink::new("TikTok", "https://www.tiktok.com/@allin1cabo"),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
    pub duration_ms: u64,
    pub exit_ms: u64,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TOAST_DURATION.as_millis() as u64,
            exit_ms: DEFAULT_EXIT_DURATION.as_millis() as u64,
        }
    }
}

impl ToastSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    pub src: String,
    pub poster: Option<String>,
    pub lazy: bool,
    pub autoplay: bool,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            src: "assets/video/cabo-promo.mp4".to_string(),
            poster: None,
            lazy: true,
            autoplay: true,
        }
    }
}

/// Complete page configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub business: BusinessDetails,
    pub toast: ToastSettings,
    pub chat: ChatSettings,
    pub videos: Vec<VideoSettings>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            business: BusinessDetails::default(),
            toast: ToastSettings::default(),
            chat: ChatSettings::default(),
            videos: vec![VideoSettings::default()],
        }
    }
}

impl CardConfig {
    pub fn from_json_str(json: &str) -> CardResult<Self> {
        let config: CardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> CardResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "loaded card config");
        Ok(config)
    }

    pub fn validate(&self) -> CardResult<()> {
        let digits = &self.business.phone_digits;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CardError::Config(format!(
                "phone_digits must be non-empty and numeric, got {:?}",
                digits
            )));
        }
        if self.toast.exit_ms > self.toast.duration_ms && self.toast.duration_ms != 0 {
            return Err(CardError::Config(
                "toast exit animation is longer than its display time".to_string(),
            ));
        }
        let file_name = &self.business.vcard_file_name;
        if !is_plain_file_name(file_name) {
            return Err(CardError::Config(format!(
                "vcard_file_name must be a plain file name, got {:?}",
                file_name
            )));
        }
        Ok(())
    }
}

/// A single path component: no separators, not `.` or `..`.
pub(crate) fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
