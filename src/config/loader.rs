//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{BenefitsConfig, JurisdictionMetadata, NoticesConfig, StatutoryConfig};

/// Loads and provides access to statutory configuration.
///
/// # Directory Structure
///
/// ```text
/// config/gt/
/// ├── jurisdiction.yaml   # Jurisdiction metadata
/// ├── benefits.yaml       # Indemnity, bonus cycles, vacation and monthly bonus rules
/// └── notices.yaml        # Legal notices attached to every settlement
/// ```
///
/// # Example
///
/// ```no_run
/// use settlement_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gt").unwrap();
/// println!("Loaded rules: {}", loader.jurisdiction().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A value is unusable, such as a zero divisor (`InvalidConfig`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use settlement_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/gt")?;
    /// # Ok::<(), settlement_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let benefits = Self::load_yaml::<BenefitsConfig>(&path.join("benefits.yaml"))?;
        let notices = Self::load_yaml::<NoticesConfig>(&path.join("notices.yaml"))?;

        let config = StatutoryConfig::new(metadata, benefits, notices.legal_notices)?;
        debug!(
            path = %path.display(),
            jurisdiction = %config.jurisdiction().code,
            version = %config.jurisdiction().version,
            "Loaded statutory configuration"
        );

        Ok(Self { config })
    }

    /// Wraps the built-in Guatemalan rules without touching the filesystem.
    pub fn builtin() -> Self {
        Self {
            config: StatutoryConfig::guatemala(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> StatutoryConfig {
        self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/gt"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "settlement_engine_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.jurisdiction().code, "GT");
        assert_eq!(loader.jurisdiction().currency_symbol, "Q");
    }

    #[test]
    fn test_shipped_files_match_builtin_rules() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), ConfigLoader::builtin().config());
    }

    #[test]
    fn test_benefit_rates_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let benefits = loader.config().benefits();

        assert_eq!(benefits.indemnity.days_per_year, dec("365.25"));
        assert_eq!(benefits.year_end_bonus.daily_divisor, dec("365"));
        assert_eq!(benefits.vacation.monthly_divisor, dec("30"));
        assert_eq!(benefits.monthly_bonus.amount, dec("250"));
    }

    #[test]
    fn test_legal_notices_loaded_in_order() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let notices = loader.config().legal_notices();

        assert_eq!(notices.len(), 5);
        assert!(notices[0].contains("Guatemalan Labor Code"));
        assert!(notices[4].contains("lawyer"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("jurisdiction.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        fs::copy(
            Path::new(config_path()).join("jurisdiction.yaml"),
            dir.join("jurisdiction.yaml"),
        )
        .unwrap();
        fs::write(dir.join("benefits.yaml"), "indemnity: [not, a, map").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).ok();

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("benefits.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_zero_daily_divisor() {
        let dir = scratch_dir("zero_divisor");
        for file in ["jurisdiction.yaml", "notices.yaml"] {
            fs::copy(Path::new(config_path()).join(file), dir.join(file)).unwrap();
        }
        let benefits =
            fs::read_to_string(Path::new(config_path()).join("benefits.yaml")).unwrap();
        fs::write(
            dir.join("benefits.yaml"),
            benefits.replace("daily_divisor: \"365\"", "daily_divisor: \"0\""),
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).ok();

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "year_end_bonus.daily_divisor");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
