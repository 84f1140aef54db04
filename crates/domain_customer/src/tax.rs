//! Tax residency information

use serde::{Deserialize, Serialize};

/// Tax identifier of a customer in one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInfo {
    /// ISO 3166-1 alpha-2
    pub country: String,
    pub tax_id: String,
}

impl TaxInfo {
    pub fn new(country: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            tax_id: tax_id.into(),
        }
    }
}
