//! Configuration for the remote dog.ceo client

use std::time::Duration;

/// Base URL of the public dog.ceo API
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for [`DogApiBreedFetcher`](crate::DogApiBreedFetcher)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("dog-breeds/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    /// Point the client at another API root (trailing slashes are dropped)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// URL listing the sub-breeds of an already normalized breed name.
    ///
    /// The name is percent-encoded so it always stays a single path segment.
    /// `.` and `..` survive encoding, callers must reject them first.
    pub fn sub_breeds_url(&self, normalized_breed: &str) -> String {
        format!(
            "{}/breed/{}/list",
            self.base_url,
            urlencoding::encode(normalized_breed)
        )
    }
}
