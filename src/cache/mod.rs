//! Caching layer for breed lookups

pub mod breed_cache;

pub use breed_cache::CachingBreedFetcher;
