//! Sub-breed counting on top of any fetcher

use crate::fetcher::BreedFetcher;

/// Number of sub-breeds `breed` has according to `fetcher`.
///
/// Unknown breeds (and any other lookup failure) count as zero, the same as a
/// breed with no sub-breeds.
pub fn number_of_sub_breeds<F: BreedFetcher + ?Sized>(breed: &str, fetcher: &F) -> usize {
    match fetcher.sub_breeds(breed) {
        Ok(sub_breeds) => sub_breeds.len(),
        Err(e) => {
            log::debug!("Counting '{}' as 0 sub-breeds: {}", breed, e);
            0
        }
    }
}
