//! Dog Breeds - sub-breed lookups
//!
//! Looks up the sub-breeds of a dog breed through a pluggable [`BreedFetcher`]:
//! the dog.ceo HTTP API, a fixed offline dataset, or a caching decorator
//! wrapping either of them.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod local;
pub mod lookup;

// Re-export commonly used items
pub use api::DogApiBreedFetcher;
pub use cache::CachingBreedFetcher;
pub use config::ApiConfig;
pub use error::{BreedNotFound, Result};
pub use fetcher::{normalize_breed, BreedFetcher};
pub use local::LocalBreedFetcher;
pub use lookup::number_of_sub_breeds;
