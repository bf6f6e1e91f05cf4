//! Configuration types
//!
//! Server configuration with defaults and environment overrides.

use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory scanned for font files, served under `/fonts`
    pub fonts_dir: PathBuf,
    /// Directory holding the compiled front-end bundle
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            fonts_dir: PathBuf::from("public/fonts"),
            static_dir: PathBuf::from("dist"),
        }
    }
}

impl ServerConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// `PORT` matches the original deployment contract; the `FONTPEEK_*`
    /// variables override the remaining fields.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let host = std::env::var("FONTPEEK_HOST").unwrap_or(defaults.host);

        let fonts_dir = std::env::var("FONTPEEK_FONTS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.fonts_dir);

        let static_dir = std::env::var("FONTPEEK_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        Self {
            host,
            port,
            fonts_dir,
            static_dir,
        }
    }

    /// Bind address as a single `host:port` string
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
