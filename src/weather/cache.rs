use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{CurrentWeather, CurrentWeatherSource};

struct Slot {
    fetched_at: Option<Instant>,
    last: Option<CurrentWeather>,
}

/// TTL cache over a single current-weather observation.
///
/// The slot is guarded by one async mutex held across the staleness check, the
/// upstream call, and the write-back. Concurrent callers racing past an
/// expired TTL therefore trigger at most one upstream request: the first
/// holder refreshes while the rest queue on the lock, re-run the staleness
/// check against the fresh timestamp, and return the refreshed values.
///
/// A failed refresh leaves the slot stale and serves the last known values,
/// or zeros when nothing was ever cached. `current()` is infallible.
pub struct WeatherCache {
    source: Arc<dyn CurrentWeatherSource>,
    ttl: Duration,
    slot: Mutex<Slot>,
}

impl WeatherCache {
    pub fn new(source: Arc<dyn CurrentWeatherSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: Mutex::new(Slot {
                fetched_at: None,
                last: None,
            }),
        }
    }

    pub async fn current(&self) -> CurrentWeather {
        let mut slot = self.slot.lock().await;

        if let (Some(at), Some(last)) = (slot.fetched_at, slot.last) {
            if at.elapsed() < self.ttl {
                return last;
            }
        }

        match self.source.fetch_current().await {
            Ok(fresh) => {
                debug!(
                    temperature_c = fresh.temperature_c,
                    humidity_percent = fresh.humidity_percent,
                    "weather cache refreshed"
                );
                slot.fetched_at = Some(Instant::now());
                slot.last = Some(fresh);
                fresh
            }
            Err(e) => {
                // fetched_at stays put, so the next caller retries.
                warn!(error = %e, "weather refresh failed, serving last known values");
                slot.last.unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::WeatherError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Scripted source: counts fetches, optionally fails, optionally stalls
    /// to widen the race window in the concurrency test.
    struct ScriptedSource {
        fetches: AtomicUsize,
        fail: AtomicBool,
        delay: Duration,
        reading: CurrentWeather,
    }

    impl ScriptedSource {
        fn new(reading: CurrentWeather) -> Self {
            Self {
                fetches: AtomicUsize::new(0),
                fail: AtomicBool::new(false),
                delay: Duration::ZERO,
                reading,
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CurrentWeatherSource for ScriptedSource {
        async fn fetch_current(&self) -> Result<CurrentWeather, WeatherError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.fail.load(Ordering::SeqCst) {
                Err(WeatherError::Timeout)
            } else {
                Ok(self.reading)
            }
        }
    }

    fn reading() -> CurrentWeather {
        CurrentWeather {
            temperature_c: 10.5,
            humidity_percent: 80.0,
        }
    }

    #[tokio::test]
    async fn first_call_fetches_once_and_fresh_calls_reuse_it() {
        let source = Arc::new(ScriptedSource::new(reading()));
        let cache = WeatherCache::new(source.clone(), Duration::from_secs(60));

        let a = cache.current().await;
        let b = cache.current().await;

        assert_eq!(a, reading());
        assert_eq!(a, b);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn stale_entry_triggers_refresh() {
        let source = Arc::new(ScriptedSource::new(reading()));
        let cache = WeatherCache::new(source.clone(), Duration::ZERO);

        cache.current().await;
        cache.current().await;

        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_serves_last_known_values() {
        let source = Arc::new(ScriptedSource::new(reading()));
        let cache = WeatherCache::new(source.clone(), Duration::ZERO);

        let first = cache.current().await;
        source.fail.store(true, Ordering::SeqCst);
        let second = cache.current().await;

        assert_eq!(first, reading());
        assert_eq!(second, first);
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn empty_cache_with_failing_upstream_serves_zeros() {
        let source = Arc::new(ScriptedSource::new(reading()));
        source.fail.store(true, Ordering::SeqCst);
        let cache = WeatherCache::new(source.clone(), Duration::from_secs(60));

        let got = cache.current().await;
        assert_eq!(got, CurrentWeather::default());
    }

    #[tokio::test]
    async fn failure_does_not_reset_the_ttl() {
        let source = Arc::new(ScriptedSource::new(reading()));
        let cache = WeatherCache::new(source.clone(), Duration::ZERO);

        source.fail.store(true, Ordering::SeqCst);
        cache.current().await;
        cache.current().await;

        // Both calls retried the upstream rather than trusting a failed refresh.
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn concurrent_callers_share_a_single_fetch() {
        let source = Arc::new(
            ScriptedSource::new(reading()).with_delay(Duration::from_millis(50)),
        );
        let cache = Arc::new(WeatherCache::new(source.clone(), Duration::from_secs(60)));

        let mut tasks = Vec::new();
        for _ in 0..16 {
            let cache = cache.clone();
            tasks.push(tokio::spawn(async move { cache.current().await }));
        }
        for task in tasks {
            assert_eq!(task.await.unwrap(), reading());
        }

        assert_eq!(source.fetch_count(), 1);
    }
}
