use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::common::constants::{
    DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECS, DEFAULT_TOP_N, DEFAULT_USER_AGENT,
    FUNDAMENTUS_FII_URL, RESULT_TABLE_ID,
};
use crate::common::error::{Result, ScreenerError};
use crate::pipeline::filter::FilterCriteria;

/// Run configuration. Every section is optional in the TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScreenerConfig {
    pub source: SourceConfig,
    pub filter: FilterCriteria,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub table_id: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: FUNDAMENTUS_FII_URL.to_string(),
            table_id: RESULT_TABLE_ID.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output: PathBuf,
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl ScreenerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ScreenerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: ScreenerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.source.timeout_secs == 0 {
            return Err(ScreenerError::Config(
                "source.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.source.table_id.trim().is_empty() {
            return Err(ScreenerError::Config(
                "source.table_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
