//! Client configuration.

/// Development backend address, used when `HOSTELVOICE_API_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Environment variable selecting the backend origin.
pub const BASE_URL_VAR: &str = "HOSTELVOICE_API_URL";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// A config pointing at `base_url`. A trailing slash is stripped so path
    /// concatenation never doubles one.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Resolve the backend origin from `HOSTELVOICE_API_URL`, defaulting to
    /// the local development address.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ApiConfig::new("https://api.hostelvoice.app/");
        assert_eq!(config.base_url(), "https://api.hostelvoice.app");
    }
}
