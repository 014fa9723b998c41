use color_eyre::eyre::{eyre, Result};
use safesnap::{coerce_config, PluginConfig, RawPluginConfig};
use std::fs;
use std::path::Path;

/// Loads a stored plugin config and normalizes it for `network`
pub fn load_config(path: &str, network: &str) -> Result<PluginConfig> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(eyre!("Config file not found: {}", path.display()));
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content, network)
}

/// Parses config JSON in any stored shape
pub fn parse_config(content: &str, network: &str) -> Result<PluginConfig> {
    let raw = RawPluginConfig::from_json(content).map_err(|e| eyre!("Invalid config JSON: {}", e))?;
    Ok(coerce_config(raw, network))
}
