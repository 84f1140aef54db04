//! Address types

use serde::{Deserialize, Serialize};

/// Purpose of an address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressType {
    Home,
    Postal,
    Billing,
    /// Registered office of an organization
    Registered,
}

/// A postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub kind: AddressType,
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    pub postal_code: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// ISO 3166-1 alpha-2
    pub country: String,
}

impl Address {
    /// Creates a new address
    pub fn new(
        kind: AddressType,
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            street: street.into(),
            street2: None,
            postal_code: postal_code.into(),
            city: city.into(),
            region: None,
            country: country.into(),
        }
    }

    pub fn with_street2(mut self, street2: impl Into<String>) -> Self {
        self.street2 = Some(street2.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Formats address for display
    pub fn format(&self) -> String {
        let mut lines = vec![self.street.clone()];
        if let Some(street2) = &self.street2 {
            lines.push(street2.clone());
        }
        let city_line = match &self.region {
            Some(region) => format!("{} {}, {}", self.postal_code, self.city, region),
            None => format!("{} {}", self.postal_code, self.city),
        };
        lines.push(city_line);
        lines.push(self.country.clone());
        lines.join("\n")
    }
}
