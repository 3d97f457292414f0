//! Offline breed fetcher backed by a fixed dataset

use std::collections::HashMap;

use crate::error::{BreedNotFound, Result};
use crate::fetcher::{normalize_breed, BreedFetcher};

/// Breeds known to the offline fetcher (a subset of dog.ceo)
const DATASET: &[(&str, &[&str])] = &[
    ("hound", &["afghan", "basset", "english", "ibizan", "walker"]),
    ("bulldog", &["boston", "english", "french"]),
    ("poodle", &["medium", "miniature", "standard", "toy"]),
    (
        "terrier",
        &["american", "australian", "border", "irish", "yorkshire"],
    ),
    ("pug", &[]),
];

/// Breed fetcher for tests and demos without network access
#[derive(Debug, Clone)]
pub struct LocalBreedFetcher {
    breeds: HashMap<&'static str, &'static [&'static str]>,
}

impl Default for LocalBreedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalBreedFetcher {
    pub fn new() -> Self {
        Self {
            breeds: DATASET.iter().copied().collect(),
        }
    }

    /// Known breed names, sorted
    pub fn breeds(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.breeds.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl BreedFetcher for LocalBreedFetcher {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let normalized = normalize_breed(breed);
        if normalized.is_empty() {
            return Err(BreedNotFound::empty_breed());
        }

        log::debug!("Local lookup for '{}'", normalized);
        self.breeds
            .get(normalized.as_str())
            .map(|subs| subs.iter().map(|s| s.to_string()).collect())
            .ok_or_else(|| BreedNotFound::new(format!("Breed not found: {breed}")))
    }

    fn name(&self) -> &str {
        "local"
    }
}
