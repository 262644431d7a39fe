use std::collections::HashMap;
use std::sync::Mutex;

use super::{GeoPoint, GeocodeError, Geocoder};
use crate::normalize::nfkc_lower_trim;

/// Memoizing decorator over any geocoder.
///
/// A ranking pass resolves the same location strings repeatedly; the cache
/// keys on the normalized string so each distinct location hits the inner
/// backend once. Successful answers are cached, including `Ok(None)`;
/// errors are not, so a transient backend failure can recover on retry.
pub struct CachedGeocoder {
    inner: Box<dyn Geocoder>,
    cache: Mutex<HashMap<String, Option<GeoPoint>>>,
}

impl CachedGeocoder {
    pub fn new(inner: Box<dyn Geocoder>) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    #[cfg(test)]
    fn cached_len(&self) -> usize {
        self.cache.lock().map(|cache| cache.len()).unwrap_or(0)
    }
}

impl Geocoder for CachedGeocoder {
    fn name(&self) -> &'static str {
        "cached"
    }

    fn resolve(&self, location: &str) -> Result<Option<GeoPoint>, GeocodeError> {
        let key = nfkc_lower_trim(location);

        if let Ok(cache) = self.cache.lock() {
            if let Some(hit) = cache.get(&key) {
                return Ok(*hit);
            }
        }

        let resolved = self.inner.resolve(location)?;

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, resolved);
        }

        Ok(resolved)
    }
}
