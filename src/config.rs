use crate::error::{EcoError, Result};
use crate::types::config::EcoConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/eco/config.toml";

/// Loads the global config, then overlays `explicit` when given.
pub fn load_config(explicit: Option<&Path>) -> Result<EcoConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<EcoConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(EcoError::ConfigNotFound(path.display().to_string()));
        }
        merge_file_if_exists(&mut merged, path)?;
    }

    let cfg: EcoConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| EcoError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "loading config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| EcoError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
