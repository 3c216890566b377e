use crate::error::{CustomerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_CAPACITY: usize = 500;
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Manager configuration, stored in `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Maximum number of customers the manager admits
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Start sessions with the bundled sample customers
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,

    /// chrono format string for order and received dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_seed_samples() -> bool {
    true
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            seed_samples: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ManagerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CustomerError::Io)?;
        let mut config: ManagerConfig =
            serde_json::from_str(&content).map_err(CustomerError::Serialization)?;

        if config.capacity == 0 {
            warn!(path = %config_path.display(), "capacity must be positive, using default");
            config.capacity = DEFAULT_CAPACITY;
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CustomerError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CustomerError::Serialization)?;
        fs::write(config_path, content).map_err(CustomerError::Io)?;
        Ok(())
    }

    /// Overrides the capacity. Zero is refused.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity == 0 {
            return Err(CustomerError::Config(
                "capacity must be at least 1".to_string(),
            ));
        }
        self.capacity = capacity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ManagerConfig::default();
        assert_eq!(config.capacity, 500);
        assert!(config.seed_samples);
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = ManagerConfig::load(temp.path()).unwrap();
        assert_eq!(config, ManagerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let mut config = ManagerConfig::default();
        config.set_capacity(25).unwrap();
        config.seed_samples = false;
        config.save(&dir).unwrap();

        let loaded = ManagerConfig::load(&dir).unwrap();
        assert_eq!(loaded.capacity, 25);
        assert!(!loaded.seed_samples);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"capacity": 3}"#).unwrap();

        let loaded = ManagerConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.capacity, 3);
        assert!(loaded.seed_samples);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_zero_capacity_falls_back() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"capacity": 0}"#).unwrap();

        let loaded = ManagerConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_set_capacity_rejects_zero() {
        let mut config = ManagerConfig::default();
        assert!(config.set_capacity(0).is_err());
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            ManagerConfig::load(temp.path()),
            Err(CustomerError::Serialization(_))
        ));
    }
}
