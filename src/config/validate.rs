use anyhow::{Result, bail};

use super::JoinerSettings;

pub fn validate(cfg: &JoinerSettings) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.logging.rust_log.trim().is_empty() {
        errors.push("logging.rust_log must not be empty".to_string());
    }

    let discovery = &cfg.discovery;
    if discovery.models_dir_name.trim().is_empty() {
        errors.push("discovery.models_dir_name must not be empty".to_string());
    }

    if discovery.models_dir_name.contains(['/', '\\']) {
        errors.push(format!(
            "discovery.models_dir_name ({}) must be a single path segment",
            discovery.models_dir_name
        ));
    }

    if discovery.build_output_marker.trim().is_empty() {
        errors.push("discovery.build_output_marker must not be empty".to_string());
    }

    if discovery.source_marker.trim().is_empty() {
        errors.push("discovery.source_marker must not be empty".to_string());
    }

    if discovery.build_output_marker == discovery.source_marker {
        errors.push(format!(
            "discovery.build_output_marker and discovery.source_marker must differ (both are '{}')",
            discovery.source_marker
        ));
    }

    if discovery
        .excluded_prefixes
        .iter()
        .chain(discovery.excluded_suffixes.iter())
        .any(|pattern| pattern.is_empty())
    {
        errors.push("discovery exclusion patterns must not be empty strings".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid joiner settings:\n- {}", errors.join("\n- "))
}
