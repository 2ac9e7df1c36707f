use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

// Top level stays open: unrelated `JOINER_*` variables must not break startup.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct JoinerSettings {
    pub logging: LoggingConfig,
    pub discovery: DiscoveryConfig,
}

impl JoinerSettings {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }
}

impl EnvConfig for JoinerSettings {
    const LIST_KEYS: &'static [&'static str] =
        &["discovery.excluded_prefixes", "discovery.excluded_suffixes"];

    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

/// Where model files live and which directory entries are never scanned.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    pub models_dir_name: String,
    /// Path component marking a build output tree. Wins over `source_marker`.
    pub build_output_marker: String,
    pub source_marker: String,
    pub excluded_prefixes: Vec<String>,
    pub excluded_suffixes: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            models_dir_name: defaults::DEFAULT_MODELS_DIR_NAME.to_string(),
            build_output_marker: defaults::DEFAULT_BUILD_OUTPUT_MARKER.to_string(),
            source_marker: defaults::DEFAULT_SOURCE_MARKER.to_string(),
            excluded_prefixes: to_owned_list(defaults::DEFAULT_EXCLUDED_PREFIXES),
            excluded_suffixes: to_owned_list(defaults::DEFAULT_EXCLUDED_SUFFIXES),
        }
    }
}

impl DiscoveryConfig {
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.excluded_prefixes
            .iter()
            .any(|prefix| file_name.starts_with(prefix.as_str()))
            || self
                .excluded_suffixes
                .iter()
                .any(|suffix| file_name.ends_with(suffix.as_str()))
    }
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
