//! Server configuration
//!
//! Loaded from a JSON file; every field has a default so a partial (or
//! absent) file still yields a working configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// HTTP server and data-file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 4000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Path to the checksummed record file served by the store
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./logdeck.jsonl")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            data_file: default_data_file(),
        }
    }
}

impl ServerConfig {
    /// The bind address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
