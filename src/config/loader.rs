//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::kubectl::validate_namespace;

use super::env::apply_env_overrides;
use super::sources::{config_root_dir, read_config_text_with_sources, ConfigSource};
use super::Config;

/// A resolved config plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&text)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    validate(&config)?;
    Ok(LoadedConfig { config, source })
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_namespace(&config.dashboard.namespace)
        .map_err(|e| ConfigError::Invalid(format!("dashboard.namespace: {e}")))?;
    if config.proxy.kubectl.trim().is_empty() {
        return Err(ConfigError::Invalid("proxy.kubectl must not be empty".into()));
    }
    Ok(())
}
