//! Order store adapters
//!
//! The persistence layer is an external collaborator. This module defines
//! the [`OrderRepository`] seam the core talks to, plus two small
//! implementations: a JSON file store used by the CLI and an in-memory
//! store for embedding and tests.

pub mod json_file;
pub mod memory;
pub mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::OrderRepository;
