//! Console configuration
//!
//! Where the backend lives and where the token file sits. Loaded with
//! `ConsoleConfig::load()` which searches:
//! 1. `$WELLBOARD_CONFIG` env var (explicit file path)
//! 2. `./wellboard.toml`
//! 3. Built-in defaults
//!
//! Field-level env overrides (`WELLBOARD_API_URL`, `WELLBOARD_TOKEN_PATH`) are
//! applied on top of whichever source wins, so a deployment can point the
//! console at another backend without touching the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Fallback backend base URL for local development, version prefix included.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9110/api/v1";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for an operator console deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Backend API connection settings
    #[serde(default)]
    pub api: ApiSettings,

    /// Token storage settings
    #[serde(default)]
    pub auth: AuthSettings,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            auth: AuthSettings::default(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration using the standard search order, then apply the
    /// field-level env overrides.
    pub fn load() -> Self {
        Self::load_layered(
            std::env::var("WELLBOARD_CONFIG").ok(),
            std::env::var("WELLBOARD_API_URL").ok(),
            std::env::var("WELLBOARD_TOKEN_PATH").ok(),
        )
    }

    /// Layered load with explicit inputs.
    ///
    /// `load()` feeds the process environment in; binaries feed CLI arguments
    /// merged with the environment; tests feed values directly so they never
    /// mutate process env. Empty override strings count as unset.
    pub fn load_layered(
        config_file: Option<String>,
        api_url: Option<String>,
        token_path: Option<String>,
    ) -> Self {
        let mut config = Self::file_layer(config_file.as_deref());

        if let Some(url) = api_url.filter(|s| !s.is_empty()) {
            config.api.base_url = url;
        }
        if let Some(path) = token_path.filter(|s| !s.is_empty()) {
            config.auth.token_path = PathBuf::from(path);
        }

        config
    }

    /// Pick the file-backed layer: explicit path, local file, or defaults.
    fn file_layer(config_file: Option<&str>) -> Self {
        // 1. Explicit config path
        if let Some(path) = config_file {
            let p = PathBuf::from(path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded console config from WELLBOARD_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from WELLBOARD_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "WELLBOARD_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. ./wellboard.toml
        let local = PathBuf::from("wellboard.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded console config from ./wellboard.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./wellboard.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No wellboard.toml found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the client cannot be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "api.timeout_secs must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Validation(msg) => write!(f, "Config validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// API Settings
// ============================================================================

/// Backend API connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base URL every endpoint path is appended to, version prefix included.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ============================================================================
// Auth Settings
// ============================================================================

/// Token storage settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Path of the durable token file shared with the login flow.
    #[serde(default = "default_token_path")]
    pub token_path: PathBuf,
}

fn default_token_path() -> PathBuf {
    PathBuf::from(crate::token::DEFAULT_TOKEN_PATH)
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_path: default_token_path(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wellboard.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_empty_toml_produces_defaults() {
        let config: ConsoleConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(
            config.auth.token_path,
            PathBuf::from(crate::token::DEFAULT_TOKEN_PATH)
        );
    }

    #[test]
    fn test_partial_toml_override() {
        let toml_str = r#"
[api]
base_url = "https://scada.example.com/api/v1"
"#;
        let config: ConsoleConfig = toml::from_str(toml_str).unwrap();
        // Overridden value
        assert_eq!(config.api.base_url, "https://scada.example.com/api/v1");
        // Non-overridden values retain defaults
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(
            config.auth.token_path,
            PathBuf::from(crate::token::DEFAULT_TOKEN_PATH)
        );
    }

    #[test]
    fn test_load_from_file() {
        let (_dir, path) = write_config(
            r#"
[api]
base_url = "http://10.20.0.5:9110/api/v1"
timeout_secs = 5

[auth]
token_path = "/var/lib/wellboard/token"
"#,
        );
        let config = ConsoleConfig::load_from_file(&path).unwrap();
        assert_eq!(config.api.base_url, "http://10.20.0.5:9110/api/v1");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.auth.token_path, PathBuf::from("/var/lib/wellboard/token"));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let (_dir, path) = write_config("[api\nbase_url = ");
        let result = ConsoleConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_, _))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConsoleConfig::load_from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_, _))));
    }

    #[test]
    fn test_validation_rejects_empty_base_url() {
        let (_dir, path) = write_config(
            r#"
[api]
base_url = ""
"#,
        );
        let result = ConsoleConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let (_dir, path) = write_config(
            r#"
[api]
timeout_secs = 0
"#,
        );
        let result = ConsoleConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_env_override_beats_config_file() {
        let (_dir, path) = write_config(
            r#"
[api]
base_url = "http://from-file:9110/api/v1"
"#,
        );
        let config = ConsoleConfig::load_layered(
            Some(path.to_string_lossy().into_owned()),
            Some("http://from-env:9110/api/v1".to_string()),
            None,
        );
        assert_eq!(config.api.base_url, "http://from-env:9110/api/v1");
    }

    #[test]
    fn test_file_value_used_without_override() {
        let (_dir, path) = write_config(
            r#"
[api]
base_url = "http://from-file:9110/api/v1"
"#,
        );
        let config =
            ConsoleConfig::load_layered(Some(path.to_string_lossy().into_owned()), None, None);
        assert_eq!(config.api.base_url, "http://from-file:9110/api/v1");
    }

    #[test]
    fn test_empty_override_counts_as_unset() {
        let (_dir, path) = write_config(
            r#"
[api]
base_url = "http://from-file:9110/api/v1"
"#,
        );
        let config = ConsoleConfig::load_layered(
            Some(path.to_string_lossy().into_owned()),
            Some(String::new()),
            None,
        );
        assert_eq!(config.api.base_url, "http://from-file:9110/api/v1");
    }

    #[test]
    fn test_token_path_override() {
        let config = ConsoleConfig::load_layered(
            Some("/nonexistent/config.toml".to_string()),
            None,
            Some("/tmp/wb-token".to_string()),
        );
        assert_eq!(config.auth.token_path, PathBuf::from("/tmp/wb-token"));
    }
}
