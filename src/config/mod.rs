//! Analyser configuration, stored as JSON

use crate::genetics::{mutant_signature, parse_matrix, Analyser, DecodeError, Nucleotide};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyserConfig {
    /// Rows of the reference matrix verdicts are computed against
    pub reference_rows: Vec<String>,
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            reference_rows: mutant_signature().to_sequence_list(),
            log_filter: "info".to_string(),
        }
    }
}

impl AnalyserConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        info!("Loaded analyser config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Build an analyser over the configured reference rows
    pub fn build_analyser(&self) -> Result<Analyser<Nucleotide>, ConfigError> {
        let reference = parse_matrix(self.reference_rows.as_slice())?;
        Ok(Analyser::with_reference(reference))
    }
}

impl Analyser<Nucleotide> {
    pub fn from_config(config: &AnalyserConfig) -> Result<Self, ConfigError> {
        config.build_analyser()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid reference matrix: {0}")]
    Reference(#[from] DecodeError),
}
