//! External system integrations.
//!
//! - [`store`] - Order persistence (trait-based)
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so the export core
//! can run against any order store. Persistence, search indexing and
//! tracking resolution are owned by the surrounding platform; the stores
//! here exist so the CLI can run end to end.
//!
//! ```rust
//! use order_export::adapters::store::{MemoryStore, OrderRepository};
//!
//! let store = MemoryStore::default();
//! assert!(store.pending().unwrap().is_empty());
//! ```

pub mod store;
