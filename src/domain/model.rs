use serde::{Deserialize, Serialize};
use std::fmt;

/// Postal code (CEP) token. Passed through to the URL as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCode(pub String);

impl PostalCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostalCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PostalCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Region (UF), city and street for a reverse address lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalityQuery {
    pub region: String,
    pub city: String,
    pub street: String,
}

impl LocalityQuery {
    pub fn new(
        region: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            city: city.into(),
            street: street.into(),
        }
    }
}

/// Outcome of a single request. The failure case carries no detail.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    Found(serde_json::Value),
    Unsuccessful,
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }
}
