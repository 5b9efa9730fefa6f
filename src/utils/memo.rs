use std::ptr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use ammonia::Builder;
use dashmap::DashMap;
use tracing::debug;

use super::html::{CONTENT_POLICY, STRIP_ALL_POLICY, SanitizationPolicy, clean_to_fixpoint};

/// Memoizing front for [`super::html::sanitize`].
///
/// Results are keyed by `(policy address, raw html)`, so a changed input or a
/// different policy always recomputes, whatever the policies are named.
/// Ammonia builders for the fixed policies are prepared once and shared by
/// all request tasks.
pub struct Sanitizer {
    builders: Vec<(&'static SanitizationPolicy, Builder<'static>)>,
    cache: DashMap<(usize, String), Arc<str>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl Sanitizer {
    /// `capacity` bounds the number of memoized outputs. Reaching it drops
    /// the whole cache; a capacity of 0 disables memoization.
    pub fn new(capacity: usize) -> Self {
        let builders = [&CONTENT_POLICY, &STRIP_ALL_POLICY]
            .into_iter()
            .map(|policy| (policy, policy.builder()))
            .collect();

        Self {
            builders,
            cache: DashMap::new(),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn clean(&self, input: &str, policy: &'static SanitizationPolicy) -> Arc<str> {
        let key = (ptr::from_ref(policy) as usize, input.to_owned());
        if let Some(hit) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return hit.value().clone();
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let cleaned: Arc<str> = match self
            .builders
            .iter()
            .find(|(known, _)| ptr::eq(*known, policy))
        {
            Some((_, builder)) => clean_to_fixpoint(builder, input),
            None => clean_to_fixpoint(&policy.builder(), input),
        }
        .into();

        if self.capacity == 0 {
            return cleaned;
        }
        if self.cache.len() >= self.capacity {
            debug!("Sanitizer cache reached {} entries, clearing", self.capacity);
            self.cache.clear();
        }
        self.cache.insert(key, cleaned.clone());
        cleaned
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.len(),
        }
    }
}
