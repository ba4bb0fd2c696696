//! Client configuration.

/// Where the backend lives and which credential (if any) to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `https://api.example.com/v1`.
    pub base_url: String,
    /// Bearer token for authenticated calls.
    pub bearer: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            bearer: None,
        }
    }

    /// Read the base URL from `STREAMGATE_API_URL`.
    pub fn from_env() -> Option<Self> {
        std::env::var("STREAMGATE_API_URL").ok().map(Self::new)
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}
