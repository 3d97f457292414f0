//! API clients for external services (dog.ceo)

pub mod dog_ceo;

pub use dog_ceo::{BreedListResponse, DogApiBreedFetcher};
