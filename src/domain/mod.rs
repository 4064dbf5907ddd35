//! Domain models and types.
//!
//! This module contains the core domain models, types, and business rules
//! for order line items.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`OrderName`], [`InfluencerId`]) and the
//!   order number generator ([`generate_order_number`])
//! - **Domain models** ([`OrderRecord`], [`OrderLineItem`], [`LineItem`], [`Address`])
//! - **Shape validation** for line-item payloads ([`validate_line_item`])
//! - **Error types** ([`OrderExportError`], [`ValidationError`]) and the
//!   [`Result`] alias
//!
//! # Validation
//!
//! Records coming from storage are loosely typed. Validation converts them
//! into [`OrderLineItem`] and reports every problem at once:
//!
//! ```rust
//! use order_export::domain::OrderRecord;
//!
//! let record = OrderRecord::default();
//! let errors = record.validate(false).unwrap_err();
//! assert!(errors.has_field("name"));
//! assert!(errors.has_field("line_item"));
//! ```

pub mod address;
pub mod errors;
pub mod ids;
pub mod line_item;
pub mod order;
pub mod result;
pub mod variant;

// Re-export commonly used types for convenience
pub use address::Address;
pub use errors::{OrderExportError, ValidationError, ValidationErrors};
pub use ids::{generate_order_number, InfluencerId, OrderName, RecordId, ORDER_NUMBER_PREFIX};
pub use line_item::{validate_line_item, LineItem, LINE_ITEM_SHAPE};
pub use order::{OrderLineItem, OrderLineItemBuilder, OrderRecord, DEFAULT_SHIPMENT_METHOD};
pub use result::Result;
pub use variant::{variant_line_item, CreateOrderOptions, Influencer, ProductVariant};
