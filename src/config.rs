//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `TFDN_*` environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Directory holding the built UI, served with an index.html fallback
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
            static_dir: None,
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Content fixture configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// JSON fixture to load instead of the embedded one
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,

    /// Delay every content call like a remote backend would
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,
}

fn default_simulate_latency() -> bool {
    true
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            fixture_path: None,
            simulate_latency: default_simulate_latency(),
        }
    }
}

/// Hosted auth provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Provider base URL; unset disables session checks
    #[serde(default)]
    pub provider_url: Option<String>,

    #[serde(default = "default_auth_timeout")]
    pub timeout_ms: u64,
}

fn default_auth_timeout() -> u64 {
    5000
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider_url: None,
            timeout_ms: default_auth_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Where [`Config::load_default`] found its settings
#[derive(Debug, Default)]
pub struct ConfigOrigin {
    /// File the config was read from; `None` means defaults plus env
    pub path: Option<PathBuf>,
    /// Candidate files that exist but failed to load
    pub rejected: Vec<ConfigError>,
}

impl ConfigOrigin {
    pub fn log(&self) {
        for error in &self.rejected {
            tracing::warn!("Failed to load config: {}", error);
        }
        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Runs before logging is set up, so the outcome is returned as a
    /// [`ConfigOrigin`] for the caller to log.
    pub fn load_default() -> (Self, ConfigOrigin) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("tfdn").join("config.toml")),
            Some(PathBuf::from("/etc/tfdn/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first candidate that exists and parses, else env-only defaults
    pub fn load_first(paths: &[PathBuf]) -> (Self, ConfigOrigin) {
        let mut origin = ConfigOrigin::default();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    origin.path = Some(path.clone());
                    return (config, origin);
                }
                Err(e) => origin.rejected.push(e),
            }
        }

        (Self::from_env(), origin)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // API overrides
        if let Some(host) = lookup("TFDN_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("TFDN_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid TFDN_API_PORT: {}", port),
            }
        }
        if let Some(dir) = lookup("TFDN_STATIC_DIR") {
            self.api.static_dir = Some(PathBuf::from(dir));
        }

        // Content overrides
        if let Some(path) = lookup("TFDN_FIXTURE_PATH") {
            self.content.fixture_path = Some(PathBuf::from(path));
        }
        if let Some(flag) = lookup("TFDN_SIMULATE_LATENCY") {
            match parse_flag(&flag) {
                Some(enabled) => self.content.simulate_latency = enabled,
                None => tracing::warn!("Ignoring invalid TFDN_SIMULATE_LATENCY: {}", flag),
            }
        }

        // Auth overrides
        if let Some(url) = lookup("TFDN_AUTH_URL") {
            self.auth.provider_url = (!url.trim().is_empty()).then_some(url);
        }

        // Logging overrides
        if let Some(level) = lookup("TFDN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("TFDN_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# TFDN Site Configuration
#
# Environment variables override these settings:
# - TFDN_API_HOST
# - TFDN_API_PORT
# - TFDN_STATIC_DIR
# - TFDN_FIXTURE_PATH
# - TFDN_SIMULATE_LATENCY
# - TFDN_AUTH_URL
# - TFDN_LOG_LEVEL
# - TFDN_LOG_FORMAT

[api]
# Server host
host = "0.0.0.0"

# Server port
port = 8082

# Allowed CORS origins (empty allows any origin)
cors_origins = []

# Request timeout in seconds
request_timeout_secs = 30

# Built UI to serve alongside the API
# static_dir = "./tfdn-ui/dist"

[content]
# JSON fixture to use instead of the bundled one
# fixture_path = "./data/mock.json"

# Delay responses like a remote backend would
simulate_latency = true

[auth]
# Hosted identity provider; leave unset to treat every visitor as signed out
# provider_url = "https://auth.example.org"

# Session check timeout (ms)
timeout_ms = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.api.addr(), "0.0.0.0:8082");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert!(config.api.static_dir.is_none());
        assert!(config.content.simulate_latency);
        assert!(config.auth.provider_url.is_none());
        assert_eq!(config.auth.timeout_ms, 5000);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();

        assert_eq!(config.api.port, 8082);
        assert!(config.api.cors_origins.is_empty());
        assert!(config.content.simulate_latency);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_first_skips_broken_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[api\nport = ").unwrap();
        std::fs::write(&good, "[logging]\nformat = \"json\"\n").unwrap();

        let (config, origin) = Config::load_first(&[missing, broken.clone(), good.clone()]);

        assert_eq!(origin.path, Some(good));
        assert_eq!(origin.rejected.len(), 1);
        assert!(matches!(&origin.rejected[0], ConfigError::Parse { path, .. } if *path == broken));
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_load_first_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let (config, origin) = Config::load_first(&[dir.path().join("none.toml")]);

        assert!(origin.path.is_none());
        assert!(origin.rejected.is_empty());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
port = 9000
static_dir = "/srv/tfdn"

[content]
simulate_latency = false

[logging]
format = "json"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.api.static_dir, Some(PathBuf::from("/srv/tfdn")));
        assert!(!config.content.simulate_latency);
        assert!(config.logging.is_json());
        assert_eq!(config.auth.timeout_ms, 5000);
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/tfdn.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nport = \"eighty\"").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("TFDN_API_HOST", "127.0.0.1"),
            ("TFDN_API_PORT", "3000"),
            ("TFDN_STATIC_DIR", "dist"),
            ("TFDN_FIXTURE_PATH", "/tmp/mock.json"),
            ("TFDN_SIMULATE_LATENCY", "off"),
            ("TFDN_AUTH_URL", "https://auth.example.org"),
            ("TFDN_LOG_LEVEL", "debug"),
            ("TFDN_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.addr(), "127.0.0.1:3000");
        assert_eq!(config.api.static_dir, Some(PathBuf::from("dist")));
        assert_eq!(
            config.content.fixture_path,
            Some(PathBuf::from("/tmp/mock.json"))
        );
        assert!(!config.content.simulate_latency);
        assert_eq!(
            config.auth.provider_url.as_deref(),
            Some("https://auth.example.org")
        );
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "TFDN_API_PORT" => Some("not-a-port".to_string()),
            "TFDN_SIMULATE_LATENCY" => Some("maybe".to_string()),
            "TFDN_AUTH_URL" => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(config.api.port, 8082);
        assert!(config.content.simulate_latency);
        assert!(config.auth.provider_url.is_none());
    }
}
