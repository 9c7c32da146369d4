//! Configuration loading with multi-source merging

use super::{ConfigError, GrouperConfig};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-level config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "qgroup.toml";

/// Prefix for environment overrides, e.g. `QGROUP_DISTANCE_THRESHOLD`
pub const ENV_PREFIX: &str = "QGROUP_";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources.
    ///
    /// Priority (highest to lowest):
    /// 1. `QGROUP_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. `./qgroup.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&Path>) -> Result<GrouperConfig, ConfigError> {
        let config: GrouperConfig = Self::figment(config_path)
            .extract()
            .map_err(Box::new)?;
        config.validate()?;

        debug!(
            threshold = config.distance_threshold,
            linkage = %config.linkage,
            extra_stop_words = config.extra_stop_words.len(),
            "configuration loaded"
        );

        Ok(config)
    }

    /// The merged provider chain, before extraction
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(GrouperConfig::default()));

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// `./qgroup.toml` if it exists
    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }
}
