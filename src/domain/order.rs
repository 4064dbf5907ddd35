//! Order line item domain model
//!
//! Despite the name an order here is a single line item within a logical
//! order. All line items of one logical order share the same
//! [`OrderName`].
//!
//! Two representations exist:
//! - [`OrderRecord`]: the loosely-typed record as stored or received
//! - [`OrderLineItem`]: a record that passed save-time validation

use super::address::Address;
use super::errors::{ValidationError, ValidationErrors};
use super::ids::{InfluencerId, OrderName, RecordId};
use super::line_item::{missing_line_item_keys, LineItem, LINE_ITEM_FIELD};
use super::variant::{variant_line_item, CreateOrderOptions, Influencer, ProductVariant};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shipment method used when none was requested
pub const DEFAULT_SHIPMENT_METHOD: &str = "GROUND";

const BLANK: &str = "can't be blank";

/// An order line item as stored, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Assigned by the store on insert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub influencer_id: Option<InfluencerId>,

    #[serde(default)]
    pub billing_address: Option<Address>,

    #[serde(default)]
    pub shipping_address: Option<Address>,

    #[serde(default)]
    pub line_item: Option<Map<String, Value>>,

    #[serde(default)]
    pub shipment_method_requested: Option<String>,

    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Value>,
}

impl OrderRecord {
    /// Returns true if the record has not been marked as uploaded
    pub fn is_pending(&self) -> bool {
        self.uploaded_at.is_none()
    }

    /// Runs save-time validation
    ///
    /// Checks presence of `name`, `billing_address`, `shipping_address`,
    /// `line_item` and `influencer_id`, the `#IN` name prefix, and the line
    /// item shape. With `require_complete_line_item` set, shape-table keys
    /// missing from the line item are reported as well.
    ///
    /// # Errors
    ///
    /// Returns every problem found, never just the first.
    pub fn validate(
        &self,
        require_complete_line_item: bool,
    ) -> Result<OrderLineItem, ValidationErrors> {
        let mut errors = Vec::new();

        let name = match self.name.as_deref() {
            None => {
                errors.push(ValidationError::new("name", BLANK));
                None
            }
            Some(raw) if raw.trim().is_empty() => {
                errors.push(ValidationError::new("name", BLANK));
                None
            }
            Some(raw) => match OrderName::new(raw) {
                Ok(name) => Some(name),
                Err(_) => {
                    errors.push(ValidationError::new("name", "is invalid"));
                    None
                }
            },
        };

        let billing_address = present_address("billing_address", &self.billing_address, &mut errors);
        let shipping_address =
            present_address("shipping_address", &self.shipping_address, &mut errors);

        let line_item = match &self.line_item {
            Some(map) if !map.is_empty() => match LineItem::from_map(map.clone()) {
                Ok(item) => {
                    if require_complete_line_item {
                        for key in missing_line_item_keys(map) {
                            errors.push(ValidationError::new(
                                LINE_ITEM_FIELD,
                                format!("{key} is missing"),
                            ));
                        }
                    }
                    Some(item)
                }
                Err(mut shape_errors) => {
                    errors.append(&mut shape_errors);
                    None
                }
            },
            _ => {
                errors.push(ValidationError::new(LINE_ITEM_FIELD, BLANK));
                None
            }
        };

        if self.influencer_id.is_none() {
            errors.push(ValidationError::new("influencer_id", BLANK));
        }

        match (name, billing_address, shipping_address, line_item, self.influencer_id) {
            (Some(name), Some(billing_address), Some(shipping_address), Some(line_item), Some(influencer_id))
                if errors.is_empty() =>
            {
                Ok(OrderLineItem {
                    record_id: self.id,
                    name,
                    influencer_id,
                    billing_address,
                    shipping_address,
                    line_item,
                    shipment_method_requested: self.shipment_method_requested.clone(),
                    processed_at: self.processed_at,
                    uploaded_at: self.uploaded_at,
                    shipping_lines: self.shipping_lines.clone(),
                })
            }
            _ => Err(ValidationErrors(errors)),
        }
    }
}

fn present_address(
    field: &str,
    address: &Option<Address>,
    errors: &mut Vec<ValidationError>,
) -> Option<Address> {
    match address {
        Some(address) if !address.is_empty() => Some(address.clone()),
        _ => {
            errors.push(ValidationError::new(field, BLANK));
            None
        }
    }
}

/// A validated order line item
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineItem {
    record_id: Option<RecordId>,
    name: OrderName,
    influencer_id: InfluencerId,
    billing_address: Address,
    shipping_address: Address,
    line_item: LineItem,
    shipment_method_requested: Option<String>,
    processed_at: Option<DateTime<Utc>>,
    uploaded_at: Option<DateTime<Utc>>,
    shipping_lines: Option<Value>,
}

impl OrderLineItem {
    /// Creates a new builder
    pub fn builder() -> OrderLineItemBuilder {
        OrderLineItemBuilder::default()
    }

    /// Creates an order for an influencer and a product variant
    ///
    /// The name is generated from `rng` unless `options.order_number` is
    /// set, `processed_at` is `now`, and the line item requests quantity 1.
    ///
    /// # Errors
    ///
    /// Returns the validation errors if the resulting record is invalid
    /// (e.g. the influencer has no shipping address).
    pub fn from_influencer_variant<R: Rng + ?Sized>(
        influencer: &Influencer,
        variant: &ProductVariant,
        options: CreateOrderOptions,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationErrors> {
        let name = options
            .order_number
            .unwrap_or_else(|| OrderName::generate(rng).into_inner());

        let line_item = match serde_json::to_value(variant_line_item(variant, 1)) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        };

        let record = OrderRecord {
            id: None,
            name: Some(name),
            influencer_id: Some(influencer.id),
            billing_address: Some(influencer.billing_address.clone()),
            shipping_address: Some(influencer.shipping_address.clone()),
            line_item,
            shipment_method_requested: options.shipment_method_requested,
            processed_at: Some(now),
            uploaded_at: None,
            shipping_lines: options.shipping_lines,
        };

        record.validate(false)
    }

    /// Store identity, `None` until the record has been stored
    pub fn record_id(&self) -> Option<RecordId> {
        self.record_id
    }

    pub fn name(&self) -> &OrderName {
        &self.name
    }

    pub fn influencer_id(&self) -> InfluencerId {
        self.influencer_id
    }

    pub fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    pub fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    pub fn line_item(&self) -> &LineItem {
        &self.line_item
    }

    /// Requested shipment method, defaulting to `GROUND`
    pub fn shipment_method_requested(&self) -> &str {
        self.shipment_method_requested
            .as_deref()
            .unwrap_or(DEFAULT_SHIPMENT_METHOD)
    }

    pub fn processed_at(&self) -> Option<DateTime<Utc>> {
        self.processed_at
    }

    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.uploaded_at
    }

    pub fn shipping_lines(&self) -> Option<&Value> {
        self.shipping_lines.as_ref()
    }

    /// Has the order been marked as uploaded to the warehouse
    pub fn is_uploaded(&self) -> bool {
        self.uploaded_at.is_some()
    }
}

impl From<OrderLineItem> for OrderRecord {
    fn from(order: OrderLineItem) -> Self {
        let line_item = match serde_json::to_value(&order.line_item) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        };
        Self {
            id: order.record_id,
            name: Some(order.name.into_inner()),
            influencer_id: Some(order.influencer_id),
            billing_address: Some(order.billing_address),
            shipping_address: Some(order.shipping_address),
            line_item,
            shipment_method_requested: order.shipment_method_requested,
            processed_at: order.processed_at,
            uploaded_at: order.uploaded_at,
            shipping_lines: order.shipping_lines,
        }
    }
}

/// Builder for constructing OrderLineItem instances
#[derive(Debug, Default)]
pub struct OrderLineItemBuilder {
    name: Option<OrderName>,
    influencer_id: Option<InfluencerId>,
    billing_address: Option<Address>,
    shipping_address: Option<Address>,
    line_item: Option<LineItem>,
    shipment_method_requested: Option<String>,
    processed_at: Option<DateTime<Utc>>,
    uploaded_at: Option<DateTime<Utc>>,
    shipping_lines: Option<Value>,
}

impl OrderLineItemBuilder {
    /// Creates a new OrderLineItemBuilder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: OrderName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn influencer_id(mut self, influencer_id: InfluencerId) -> Self {
        self.influencer_id = Some(influencer_id);
        self
    }

    pub fn billing_address(mut self, address: Address) -> Self {
        self.billing_address = Some(address);
        self
    }

    pub fn shipping_address(mut self, address: Address) -> Self {
        self.shipping_address = Some(address);
        self
    }

    pub fn line_item(mut self, line_item: LineItem) -> Self {
        self.line_item = Some(line_item);
        self
    }

    pub fn shipment_method_requested(mut self, method: impl Into<String>) -> Self {
        self.shipment_method_requested = Some(method.into());
        self
    }

    pub fn processed_at(mut self, at: DateTime<Utc>) -> Self {
        self.processed_at = Some(at);
        self
    }

    pub fn uploaded_at(mut self, at: DateTime<Utc>) -> Self {
        self.uploaded_at = Some(at);
        self
    }

    pub fn shipping_lines(mut self, shipping_lines: Value) -> Self {
        self.shipping_lines = Some(shipping_lines);
        self
    }

    /// Builds the OrderLineItem
    ///
    /// # Errors
    ///
    /// Returns an error if any required field is missing or an address is
    /// empty
    pub fn build(self) -> Result<OrderLineItem, String> {
        let billing_address = self.billing_address.ok_or("billing_address is required")?;
        let shipping_address = self.shipping_address.ok_or("shipping_address is required")?;
        if billing_address.is_empty() || shipping_address.is_empty() {
            return Err("addresses cannot be empty".to_string());
        }

        Ok(OrderLineItem {
            record_id: None,
            name: self.name.ok_or("name is required")?,
            influencer_id: self.influencer_id.ok_or("influencer_id is required")?,
            billing_address,
            shipping_address,
            line_item: self.line_item.ok_or("line_item is required")?,
            shipment_method_requested: self.shipment_method_requested,
            processed_at: self.processed_at,
            uploaded_at: self.uploaded_at,
            shipping_lines: self.shipping_lines,
        })
    }
}
