use std::time::Duration;

use crate::utils::AppInstant;

/// Single-slot cache whose value expires `ttl` after it was stored.
///
/// Every read and write takes `now` explicitly so expiry can be tested without sleeping.
#[derive(Debug)]
pub struct TtlCache<T> {
    ttl: Duration,
    entry: Option<(AppInstant, T)>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// The cached value, if it was stored less than `ttl` before `now`.
    pub fn get_at(&self, now: AppInstant) -> Option<T> {
        self.entry
            .as_ref()
            .filter(|(stored_at, _)| now.saturating_duration_since(*stored_at) < self.ttl)
            .map(|(_, value)| value.clone())
    }

    pub fn insert_at(&mut self, now: AppInstant, value: T) {
        self.entry = Some((now, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_served_until_ttl_elapses() {
        let t0 = AppInstant::now();
        let mut cache = TtlCache::new(Duration::from_secs(10));
        assert_eq!(cache.get_at(t0), None);

        cache.insert_at(t0, 7);
        assert_eq!(cache.get_at(t0), Some(7));
        assert_eq!(cache.get_at(t0 + Duration::from_millis(9_999)), Some(7));
        assert_eq!(cache.get_at(t0 + Duration::from_secs(10)), None);
    }

    #[test]
    fn reinsert_restarts_the_window() {
        let t0 = AppInstant::now();
        let mut cache = TtlCache::new(Duration::from_secs(10));
        cache.insert_at(t0, "old");
        let t1 = t0 + Duration::from_secs(12);
        cache.insert_at(t1, "new");
        assert_eq!(cache.get_at(t1 + Duration::from_secs(5)), Some("new"));
    }
}
