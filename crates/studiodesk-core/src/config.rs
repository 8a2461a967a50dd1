//! Shell configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// URL loaded at launch and on every "go home" action.
pub const START_URL: &str = "https://studio.youtube.com/";

/// Name of the persistent session partition. The browser engine keeps
/// cookies, cache, and storage for the wrapped site under this scope.
pub const SESSION_PARTITION: &str = "persist-youtube-studio";

/// Shell configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// User data directory
    pub data_dir: PathBuf,

    /// URL loaded at startup
    pub start_url: String,

    /// Directory name of the persistent session partition under `data_dir`
    pub session_partition: String,

    /// User agent string reported to the wrapped site
    pub user_agent: String,

    /// Window width used when no bounds are persisted
    pub default_width: u32,

    /// Window height used when no bounds are persisted
    pub default_height: u32,

    /// Minimum window width
    pub min_width: u32,

    /// Minimum window height
    pub min_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("studiodesk"),
            start_url: START_URL.to_string(),
            session_partition: SESSION_PARTITION.to_string(),
            // The wrapped site serves its full desktop experience to current
            // Chrome, so the shell reports one.
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
                .to_string(),
            default_width: 1400,
            default_height: 900,
            min_width: 800,
            min_height: 600,
        }
    }
}

impl AppConfig {
    /// Directory holding the engine's persistent session data
    pub fn partition_dir(&self) -> PathBuf {
        self.data_dir.join(&self.session_partition)
    }

    /// Path of the encrypted preference file
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("studiodesk-secure.dat")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.start_url, START_URL);
        assert_eq!(config.default_width, 1400);
        assert_eq!(config.default_height, 900);
        assert!(config.min_width < config.default_width);
    }

    #[test]
    fn test_derived_paths() {
        let config = AppConfig::default();
        assert!(config.partition_dir().starts_with(&config.data_dir));
        assert_eq!(
            config.store_path().file_name().unwrap(),
            "studiodesk-secure.dat"
        );
    }
}
