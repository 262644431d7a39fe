use std::collections::HashMap;
use std::sync::LazyLock;

use super::{GeoPoint, GeocodeError, Geocoder};
use crate::normalize::nfkc_lower_trim;

static CITY_TABLE: LazyLock<HashMap<&'static str, GeoPoint>> = LazyLock::new(|| {
    let cities: &[(&str, f64, f64)] = &[
        ("new york", 40.7128, -74.0060),
        ("san francisco", 37.7749, -122.4194),
        ("los angeles", 34.0522, -118.2437),
        ("seattle", 47.6062, -122.3321),
        ("austin", 30.2672, -97.7431),
        ("boston", 42.3601, -71.0589),
        ("chicago", 41.8781, -87.6298),
        ("denver", 39.7392, -104.9903),
        ("toronto", 43.6532, -79.3832),
        ("london", 51.5074, -0.1278),
        ("manchester", 53.4808, -2.2426),
        ("berlin", 52.5200, 13.4050),
        ("munich", 48.1351, 11.5820),
        ("paris", 48.8566, 2.3522),
        ("amsterdam", 52.3676, 4.9041),
        ("madrid", 40.4168, -3.7038),
        ("tokyo", 35.6762, 139.6503),
        ("osaka", 34.6937, 135.5023),
        ("singapore", 1.3521, 103.8198),
        ("bangalore", 12.9716, 77.5946),
        ("sydney", -33.8688, 151.2093),
        ("sao paulo", -23.5505, -46.6333),
    ];

    cities
        .iter()
        .map(|(name, lat, lon)| (*name, GeoPoint { lat: *lat, lon: *lon }))
        .collect()
});

/// Fixed city-table geocoder. Deterministic and offline, for development and
/// tests; a network-backed implementation swaps in behind the same trait.
///
/// Lookup is by normalized full string; "Berlin, Germany" does not resolve,
/// which exercises the same fallback path a live geocoder miss would.
#[derive(Default)]
pub struct StaticGeocoder;

impl Geocoder for StaticGeocoder {
    fn name(&self) -> &'static str {
        "static"
    }

    fn resolve(&self, location: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        Ok(CITY_TABLE.get(nfkc_lower_trim(location).as_str()).copied())
    }
}
