//! Core types and errors for the ipwho geolocation client.
//!
//! This crate provides the foundational types shared by the client and CLI:
//!
//! - **Types**: [`GeolocationRecord`], the decoded ExtractIP response
//! - **Errors**: the [`IpwhoError`] taxonomy and its [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use ipwho_core::GeolocationRecord;
//!
//! let record: GeolocationRecord =
//!     serde_json::from_str(r#"{"exit_ip":"203.0.113.5"}"#).unwrap();
//! assert_eq!(record.exit_ip, "203.0.113.5");
//! assert!(record.domains.is_empty());
//! ```

mod error;
pub mod types;

pub use error::{IpwhoError, Result};
pub use types::*;
