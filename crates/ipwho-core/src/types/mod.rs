mod geolocation;

pub use geolocation::*;
