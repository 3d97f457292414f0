//! The breed fetcher abstraction

use std::rc::Rc;

use crate::error::Result;

/// Something that can list the sub-breeds of a breed.
///
/// Implementations return an owned list that the caller is free to mutate,
/// or [`BreedNotFound`](crate::BreedNotFound) for unknown breeds, empty input
/// and any lower-level failure. The trait is object-safe and uses `&self`;
/// implementations that keep state use interior mutability.
pub trait BreedFetcher {
    /// Sub-breeds of `breed`, in source order. May be empty.
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>>;

    /// Human-readable name of this backend (for logging)
    fn name(&self) -> &str;
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for &T {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).sub_breeds(breed)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Box<T> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).sub_breeds(breed)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Rc<T> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).sub_breeds(breed)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Normalize a breed name for lookups: trimmed and lower-cased
pub fn normalize_breed(breed: &str) -> String {
    breed.trim().to_lowercase()
}
