use std::env;

/// Default backend address for local development.
pub const DEFAULT_BACKEND_BASE_URL: &str = "http://127.0.0.1:8080";

/// Loader configuration.
///
/// The backend address is an explicit value here rather than a
/// hardcoded constant so tests can point the loader at a fake server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub backend_base_url: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BACKEND_BASE_URL.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Read configuration from the environment, falling back to the
    /// local development default.
    pub fn from_env() -> Self {
        let backend_base_url = env::var("CHANGELOG_BACKEND_URL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_BASE_URL.to_string());

        Self { backend_base_url }
    }

    /// Full URL of the changelog listing endpoint.
    pub fn changelog_url(&self) -> String {
        format!(
            "{}/v1/changelog",
            self.backend_base_url.trim_end_matches('/')
        )
    }
}
