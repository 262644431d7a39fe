pub mod cache;
pub mod static_table;

pub use cache::CachedGeocoder;
pub use static_table::StaticGeocoder;

use thiserror::Error;

use crate::normalize::nfkc_lower_trim;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocode backend unavailable: {0}")]
    Backend(String),
    #[error("geocode request timed out after {0}ms")]
    Timeout(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers (haversine).
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Geocoding capability.
///
/// `Ok(None)` means the backend answered but could not resolve the string;
/// `Err` means the backend itself failed (network, timeout). Callers treat
/// the two differently, so implementations must not collapse one into the
/// other.
pub trait Geocoder: Send + Sync {
    /// Implementation name ("static", "null", "cached").
    fn name(&self) -> &'static str;

    fn resolve(&self, location: &str) -> Result<Option<GeoPoint>, GeocodeError>;
}

/// Geocoder that resolves nothing; location scoring then always takes the
/// string-comparison fallback.
pub struct NullGeocoder;

impl Geocoder for NullGeocoder {
    fn name(&self) -> &'static str {
        "null"
    }

    fn resolve(&self, _location: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        Ok(None)
    }
}

/// Geocoder factory. Unknown names fall back to the static table.
pub fn create_geocoder(name: &str) -> Box<dyn Geocoder> {
    match nfkc_lower_trim(name).as_str() {
        "null" => Box::new(NullGeocoder),
        _ => Box::new(StaticGeocoder::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_is_zero_for_identical_points() {
        let berlin = GeoPoint { lat: 52.52, lon: 13.405 };
        assert!(haversine_km(berlin, berlin) < 1e-9);
    }

    #[test]
    fn haversine_berlin_to_paris_is_about_880_km() {
        let berlin = GeoPoint { lat: 52.52, lon: 13.405 };
        let paris = GeoPoint { lat: 48.8566, lon: 2.3522 };

        let distance = haversine_km(berlin, paris);
        assert!((850.0..=910.0).contains(&distance), "got {distance}");
    }

    #[test]
    fn null_geocoder_never_resolves() {
        let geocoder = NullGeocoder;
        assert!(matches!(geocoder.resolve("Berlin"), Ok(None)));
    }

    #[test]
    fn factory_falls_back_to_static() {
        assert_eq!(create_geocoder("null").name(), "null");
        assert_eq!(create_geocoder("static").name(), "static");
        assert_eq!(create_geocoder("osm").name(), "static");
    }
}
