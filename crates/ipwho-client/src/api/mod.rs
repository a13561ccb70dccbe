//! API endpoint modules.

mod geolocate;

pub use geolocate::GeolocateApi;
