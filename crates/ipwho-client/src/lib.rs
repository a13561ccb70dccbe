//! HTTP client for the ExtractIP geolocation API.
//!
//! This crate provides [`IpwhoClient`], which resolves either the caller's
//! exit IP or an explicit IP address to a [`GeolocationRecord`].
//!
//! ```rust,ignore
//! let client = ipwho_client::IpwhoClient::new()?;
//! let me = client.geolocate().lookup().await?;
//! let other = client.geolocate().lookup_ip("8.8.8.8").await?;
//! ```

mod client;
pub mod api;

pub use client::{decode, IpwhoClient, IpwhoClientBuilder, RawResponse, DEFAULT_BASE_URL};
pub use ipwho_core::{GeolocationRecord, IpwhoError, Result};
