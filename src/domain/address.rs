//! Free-form address records
//!
//! Addresses arrive from the influencer provider as loose key/value maps
//! (`name`, `address1`, `city`, `province_code`, `zip`, `country_code`,
//! `phone`, ...). They are kept as-is and read through [`Address::field`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A billing or shipping address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(BTreeMap<String, Value>);

impl Address {
    /// Creates an empty address
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning self for chaining
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), Value::String(value.into()));
        self
    }

    /// Returns the field as text
    ///
    /// Strings are returned verbatim and numbers/booleans in their display
    /// form. Missing keys and `null` values yield `None`.
    pub fn field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    /// Returns true if the address has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
