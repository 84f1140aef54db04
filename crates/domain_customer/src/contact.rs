//! Contact information

use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel through which a customer can be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactChannel {
    Phone,
    Mobile,
    Email,
}

impl ContactChannel {
    /// Whether values of this channel are phone numbers
    pub fn is_phone(self) -> bool {
        matches!(self, ContactChannel::Phone | ContactChannel::Mobile)
    }
}

impl fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactChannel::Phone => write!(f, "phone"),
            ContactChannel::Mobile => write!(f, "mobile"),
            ContactChannel::Email => write!(f, "email"),
        }
    }
}

/// A single way of contacting a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub channel: ContactChannel,
    pub value: String,
    #[serde(default)]
    pub is_primary: bool,
}

impl ContactInfo {
    pub fn new(channel: ContactChannel, value: impl Into<String>) -> Self {
        Self {
            channel,
            value: value.into(),
            is_primary: false,
        }
    }

    pub fn phone(value: impl Into<String>) -> Self {
        Self::new(ContactChannel::Phone, value)
    }

    pub fn mobile(value: impl Into<String>) -> Self {
        Self::new(ContactChannel::Mobile, value)
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self::new(ContactChannel::Email, value)
    }

    /// Flags the contact as the primary one of its channel
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }
}
