//! Geolocation endpoints.

use crate::client::decode;
use crate::IpwhoClient;
use ipwho_core::{GeolocationRecord, Result};

/// Geolocation API endpoints
pub struct GeolocateApi<'a> {
    client: &'a IpwhoClient,
}

impl<'a> GeolocateApi<'a> {
    pub(crate) const fn new(client: &'a IpwhoClient) -> Self {
        Self { client }
    }

    /// Geolocate the exit IP address this request originates from
    pub async fn lookup(&self) -> Result<GeolocationRecord> {
        decode(self.client.fetch(None).await?)
    }

    /// Geolocate a specific IP address
    pub async fn lookup_ip(&self, ip: &str) -> Result<GeolocationRecord> {
        decode(self.client.fetch(Some(ip)).await?)
    }
}
