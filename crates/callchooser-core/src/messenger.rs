//! Messenger deep links
//!
//! Each button opens a number in one of:
//! - `gsm` — the system dialer (`tel:`)
//! - `whatsapp` — `https://wa.me/<number>`
//! - `telegram` — `tg://resolve?phone=<number>`
//! - `viber` — `viber://chat?number=<number>`
//!
//! Messenger links carry a dialer fallback for when the app is missing.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Messenger {
    Gsm,
    WhatsApp,
    Telegram,
    Viber,
}

impl Messenger {
    pub const ALL: [Messenger; 4] = [
        Messenger::Gsm,
        Messenger::WhatsApp,
        Messenger::Telegram,
        Messenger::Viber,
    ];

    /// Build the deep link for a normalized (digits only) number
    pub fn link(&self, number: &str) -> Result<Url> {
        let number = number.trim();
        if number.is_empty() {
            return Err(CoreError::EmptyNumber);
        }
        if !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::InvalidNumber(number.to_string()));
        }

        let raw = match self {
            Messenger::Gsm => format!("tel:+{}", number),
            Messenger::WhatsApp => format!("https://wa.me/{}", number),
            Messenger::Telegram => format!("tg://resolve?phone={}", number),
            Messenger::Viber => format!("viber://chat?number={}", number),
        };

        Ok(Url::parse(&raw)?)
    }

    /// Application id the link is addressed to. The dialer is whatever the
    /// system provides.
    pub fn package(&self) -> Option<&'static str> {
        match self {
            Messenger::Gsm => None,
            Messenger::WhatsApp => Some("com.whatsapp"),
            Messenger::Telegram => Some("org.telegram.messenger"),
            Messenger::Viber => Some("com.viber.voip"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Messenger::Gsm => "gsm",
            Messenger::WhatsApp => "whatsapp",
            Messenger::Telegram => "telegram",
            Messenger::Viber => "viber",
        }
    }
}

impl std::fmt::Display for Messenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Messenger {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gsm" | "call" | "phone" => Ok(Messenger::Gsm),
            "whatsapp" | "wa" => Ok(Messenger::WhatsApp),
            "telegram" | "tg" => Ok(Messenger::Telegram),
            "viber" => Ok(Messenger::Viber),
            _ => Err(CoreError::UnknownMessenger(s.to_string())),
        }
    }
}

/// Link to open plus the dialer link to fall back on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub messenger: Messenger,
    pub primary: Url,
    pub package: Option<String>,
    pub fallback: Option<Url>,
}

impl ContactLink {
    pub fn new(messenger: Messenger, number: &str) -> Result<Self> {
        let primary = messenger.link(number)?;
        let fallback = match messenger {
            Messenger::Gsm => None,
            _ => Some(Messenger::Gsm.link(number)?),
        };

        Ok(Self {
            messenger,
            primary,
            package: messenger.package().map(str::to_string),
            fallback,
        })
    }
}
