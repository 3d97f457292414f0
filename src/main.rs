//! Dog Breeds - sub-breed counter
//!
//! Prints how many sub-breeds each requested breed has, using the dog.ceo API
//! or the built-in offline dataset.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dog_breeds::{
    number_of_sub_breeds, ApiConfig, BreedFetcher, CachingBreedFetcher, DogApiBreedFetcher,
    LocalBreedFetcher,
};

/// Count the sub-breeds of dog breeds
#[derive(Parser, Debug)]
#[command(name = "dog_breeds")]
#[command(version, about, long_about = None)]
struct Args {
    /// Breeds to look up
    #[arg(default_values_t = [String::from("hound"), String::from("cat")])]
    breeds: Vec<String>,

    /// Use the built-in dataset instead of the dog.ceo API
    #[arg(long, default_value_t = false)]
    offline: bool,

    /// Look every breed up again instead of caching results
    #[arg(long, default_value_t = false)]
    no_cache: bool,

    /// Root of the dog.ceo API
    #[arg(long, default_value_t = ApiConfig::default().base_url)]
    base_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=debug, RUST_LOG=dog_breeds=trace
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("Application error: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let fetcher: Box<dyn BreedFetcher> = if args.offline {
        Box::new(LocalBreedFetcher::new())
    } else {
        let config = ApiConfig::default()
            .with_base_url(args.base_url.as_str())
            .with_timeout(Duration::from_secs(args.timeout_secs));
        Box::new(DogApiBreedFetcher::with_config(config).context("Failed to set up dog.ceo client")?)
    };

    log::info!("Looking up {} breed(s) via {}", args.breeds.len(), fetcher.name());

    if args.no_cache {
        print_counts(&args.breeds, &fetcher);
    } else {
        let cached = CachingBreedFetcher::new(fetcher);
        print_counts(&args.breeds, &cached);
        log::info!("Calls made to {}: {}", cached.name(), cached.calls_made());
    }

    Ok(())
}

fn print_counts(breeds: &[String], fetcher: &impl BreedFetcher) {
    for breed in breeds {
        let count = number_of_sub_breeds(breed, fetcher);
        println!("{breed} has {count} sub breeds");
    }
}
