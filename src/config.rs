pub const LOCAL_API_BASE_URL: &str = "http://localhost:8000/api/v1";
// Placeholder until the backend gets a permanent deployment address.
pub const PRODUCTION_API_BASE_URL: &str = "https://bharat-biz-backend.up.railway.app/api/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: &'static str,
}

impl Config {
    /// Selects the API endpoint for the given host identifier: the local
    /// development backend for `localhost`/`127.0.0.1`, the deployed backend
    /// for everything else.
    pub fn for_host(hostname: &str) -> Self {
        let api_base_url = if hostname == "localhost" || hostname == "127.0.0.1" {
            LOCAL_API_BASE_URL
        } else {
            PRODUCTION_API_BASE_URL
        };
        Self { api_base_url }
    }

    /// Reads the host identifier from the browser's current location.
    /// An unavailable window or hostname counts as "not a local host".
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Self {
        let hostname = web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default();
        Self::for_host(&hostname)
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
