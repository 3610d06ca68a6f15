/// Client configuration, baked in at compile time.
///
/// The backend location is read from `HYGIENE_BACKEND_URL` when the crate is
/// built, the same way the wasm bundle gets every other build-time setting.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_backend(option_env!("HYGIENE_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
    }

    pub fn with_backend(backend_url: &str) -> Self {
        let trimmed = backend_url.trim().trim_end_matches('/');
        let backend_url = if trimmed.is_empty() {
            DEFAULT_BACKEND_URL
        } else {
            trimmed
        };
        Self {
            backend_url: backend_url.to_string(),
        }
    }

    /// Root of every REST endpoint.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
