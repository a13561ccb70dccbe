use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Geolocation details for an IP address as reported by the ExtractIP API.
///
/// Every field is optional on the wire. Missing or `null` fields decode to an
/// empty string or empty list, and unknown fields are ignored. Only JSON
/// objects are accepted. Serialization always writes all fields in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct GeolocationRecord {
    /// Public IP address the request appeared to come from
    pub exit_ip: String,

    /// Capital city of the country
    pub capital: String,

    /// Two-letter country code (ISO 3166-1 alpha-2)
    pub country_code: String,

    /// Full country name
    pub country_name: String,

    /// Region the country belongs to
    pub country_region: String,

    /// Time zone of the country
    pub time_zone: String,

    /// Country top-level domain
    pub domain_name: String,

    /// Currency code
    pub currency: String,

    /// URL of the country's flag image
    pub flag_url: String,

    /// All top-level domains used by the country
    pub domains: Vec<String>,

    /// International calling codes
    pub call_codes: Vec<String>,
}

impl GeolocationRecord {
    /// Returns the exit IP if the API reported one
    #[must_use]
    pub fn exit_ip(&self) -> Option<&str> {
        non_empty(&self.exit_ip)
    }

    /// Returns the country name if the API reported one
    #[must_use]
    pub fn country_name(&self) -> Option<&str> {
        non_empty(&self.country_name)
    }

    /// Country formatted as `"<name> (<code>)"`
    #[must_use]
    pub fn country_label(&self) -> String {
        format!("{} ({})", self.country_name, self.country_code)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

impl TryFrom<Map<String, Value>> for GeolocationRecord {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            exit_ip: take(&mut map, "exit_ip")?,
            capital: take(&mut map, "capital")?,
            country_code: take(&mut map, "country_code")?,
            country_name: take(&mut map, "country_name")?,
            country_region: take(&mut map, "country_region")?,
            time_zone: take(&mut map, "time_zone")?,
            domain_name: take(&mut map, "domain_name")?,
            currency: take(&mut map, "currency")?,
            flag_url: take(&mut map, "flag_url")?,
            domains: take(&mut map, "domains")?,
            call_codes: take(&mut map, "call_codes")?,
        })
    }
}

/// Remove `key` from the object, treating absent and `null` as empty.
fn take<T>(map: &mut Map<String, Value>, key: &str) -> Result<T, serde_json::Error>
where
    T: Default + DeserializeOwned,
{
    match map.remove(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value),
    }
}
