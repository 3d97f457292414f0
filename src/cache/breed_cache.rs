use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::Result;
use crate::fetcher::{normalize_breed, BreedFetcher};

/// In-memory cache in front of another [`BreedFetcher`].
///
/// Successful lookups are stored under the normalized breed name and live as
/// long as the decorator. Failures are never cached. Every delegation to the
/// wrapped fetcher bumps [`calls_made`](Self::calls_made), cache hits do not.
///
/// The cache uses `RefCell`, so the decorator is not `Sync`; share it across
/// threads only behind a lock.
#[derive(Debug)]
pub struct CachingBreedFetcher<F> {
    inner: F,
    /// Map of normalized breed name to sub-breeds
    cache: RefCell<HashMap<String, Vec<String>>>,
    calls_made: Cell<usize>,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Create a caching wrapper around another fetcher
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
            calls_made: Cell::new(0),
        }
    }

    /// Number of calls made to the wrapped fetcher
    pub fn calls_made(&self) -> usize {
        self.calls_made.get()
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }

    /// Whether a lookup for `breed` would be served from the cache
    pub fn contains(&self, breed: &str) -> bool {
        self.cache.borrow().contains_key(&normalize_breed(breed))
    }

    /// Get cached breed count
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let key = normalize_breed(breed);

        // Check cache first
        if let Some(sub_breeds) = self.cache.borrow().get(&key) {
            log::debug!("Cache hit for '{}'", key);
            return Ok(sub_breeds.clone());
        }

        log::debug!("Cache miss for '{}', asking {}", key, self.inner.name());
        let result = self.inner.sub_breeds(breed);
        self.calls_made.set(self.calls_made.get() + 1);

        let sub_breeds = result?;
        self.cache.borrow_mut().insert(key, sub_breeds.clone());
        Ok(sub_breeds)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
#[path = "breed_cache_tests.rs"]
mod tests;
