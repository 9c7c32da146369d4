mod loader;


pub use loader::{CONFIG_FILE_NAME, ConfigLoader, ENV_PREFIX};

use crate::clusterer::{DEFAULT_DISTANCE_THRESHOLD, Linkage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid distance threshold: {0} (must be finite and >= 0)")]
    InvalidThreshold(f64),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Tunables for [`crate::QuestionGrouper`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrouperConfig {
    /// Largest linkage distance at which two clusters still merge
    pub distance_threshold: f64,
    pub linkage: Linkage,
    /// Words dropped in addition to the built-in English list
    pub extra_stop_words: Vec<String>,
}

impl Default for GrouperConfig {
    fn default() -> Self {
        Self {
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            linkage: Linkage::Average,
            extra_stop_words: Vec::new(),
        }
    }
}

impl GrouperConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.distance_threshold.is_finite() || self.distance_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.distance_threshold));
        }
        Ok(())
    }
}
