//! Client configuration

use std::path::PathBuf;

/// Configuration for connecting to the Moteka backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory holding the durable session scope
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Create a new configuration
    pub fn new(base_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            data_dir: data_dir.into(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Read configuration from the environment (a `.env` file is honored).
    ///
    /// `MOTEKA_API_URL` defaults to the local dev backend and
    /// `MOTEKA_DATA_DIR` to `./.moteka`.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let base_url = std::env::var("MOTEKA_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        let data_dir = std::env::var("MOTEKA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".moteka"));
        Self::new(base_url, data_dir)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000", ".moteka")
    }
}
