//! CLI command implementations
//!
//! Each command returns an exit code: 0 success, 1 partial success,
//! 2 configuration or input error, 5 fatal error.

pub mod create;
pub mod export;
pub mod generate;
pub mod init;
pub mod mark_uploaded;
pub mod validate;
