//! Line item payload and its shape contract
//!
//! Each order carries a semi-structured `line_item` payload describing the
//! product being shipped. Inside the crate it is the strongly-typed
//! [`LineItem`]; data arriving from outside (JSON records) is first checked
//! against the shape table by [`validate_line_item`].

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Attribute name line-item errors are reported against
pub const LINE_ITEM_FIELD: &str = "line_item";

/// Runtime type expected for a shape-table key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Float,
    String,
}

impl ValueKind {
    /// Returns true if `value` has this kind
    pub fn matches(self, value: &Value) -> bool {
        match self {
            ValueKind::Integer => value.is_i64() || value.is_u64(),
            ValueKind::Float => value.is_f64(),
            ValueKind::String => value.is_string(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "Integer",
            ValueKind::Float => "Float",
            ValueKind::String => "String",
        };
        f.write_str(name)
    }
}

/// Names the runtime type of an arbitrary JSON value
fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(n) if n.is_f64() => "Float",
        Value::Number(_) => "Integer",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// The fixed key → type contract for line items
pub const LINE_ITEM_SHAPE: &[(&str, ValueKind)] = &[
    ("product_id", ValueKind::Integer),
    ("merchant_sku_item", ValueKind::String),
    ("size", ValueKind::String),
    ("quantity_requested", ValueKind::Integer),
    ("item_name", ValueKind::String),
    ("sell_price", ValueKind::Float),
    ("product_weight", ValueKind::Integer),
];

/// Checks the types of the shape-table keys present in `value`
///
/// Keys that are absent are not reported; only present keys whose runtime
/// type differs from the shape table produce an error. Extra keys are
/// ignored.
///
/// # Examples
///
/// ```
/// use order_export::domain::line_item::validate_line_item;
/// use serde_json::json;
///
/// let payload = json!({"sell_price": 12, "size": "M"});
/// let errors = validate_line_item(payload.as_object().unwrap());
/// assert_eq!(errors.len(), 1);
/// assert!(errors[0].message.contains("sell_price"));
/// ```
pub fn validate_line_item(value: &Map<String, Value>) -> Vec<ValidationError> {
    LINE_ITEM_SHAPE
        .iter()
        .filter_map(|(key, expected)| {
            let actual = value.get(*key)?;
            if expected.matches(actual) {
                return None;
            }
            Some(ValidationError::new(
                LINE_ITEM_FIELD,
                format!(
                    "{key} should be a {expected}, but it is a {}",
                    kind_name(actual)
                ),
            ))
        })
        .collect()
}

/// Shape-table keys absent from `value`
pub fn missing_line_item_keys(value: &Map<String, Value>) -> Vec<&'static str> {
    LINE_ITEM_SHAPE
        .iter()
        .filter(|(key, _)| !value.contains_key(*key))
        .map(|(key, _)| *key)
        .collect()
}

/// Typed line item
///
/// Shape-table fields are optional because absent keys are tolerated by the
/// shape check. Keys outside the table are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_sku_item: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_requested: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_weight: Option<i64>,

    /// Keys outside the shape table
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    /// Converts an untyped payload into a typed line item
    ///
    /// # Errors
    ///
    /// Returns every shape mismatch found by [`validate_line_item`], or a
    /// single error if a value is well-typed but out of range.
    pub fn from_map(map: Map<String, Value>) -> Result<Self, Vec<ValidationError>> {
        let errors = validate_line_item(&map);
        if !errors.is_empty() {
            return Err(errors);
        }

        serde_json::from_value(Value::Object(map))
            .map_err(|e| vec![ValidationError::new(LINE_ITEM_FIELD, e.to_string())])
    }
}
