//! Environment variable overrides (`MESHDASH_*`).

use crate::error::ConfigError;

use super::Config;

pub const ENV_PORT: &str = "MESHDASH_PORT";
pub const ENV_NAMESPACE: &str = "MESHDASH_NAMESPACE";
pub const ENV_KUBECTL: &str = "MESHDASH_KUBECTL";
pub const ENV_LOG: &str = "MESHDASH_LOG";

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(port) = non_blank(env_lookup, ENV_PORT) {
        config.proxy.port = port.parse::<u16>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_PORT} value `{port}`: expected a port number"
            ))
        })?;
    }
    if let Some(namespace) = non_blank(env_lookup, ENV_NAMESPACE) {
        config.dashboard.namespace = namespace;
    }
    if let Some(kubectl) = non_blank(env_lookup, ENV_KUBECTL) {
        config.proxy.kubectl = kubectl;
    }
    if let Some(level) = non_blank(env_lookup, ENV_LOG) {
        config.logging.level = level;
    }
    Ok(())
}

/// Trimmed env value, treating blank as unset.
fn non_blank<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
