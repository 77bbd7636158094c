//! Config-file source discovery.
//!
//! Source order: explicit path > local file > global file > built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::CONFIG_NAME;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `./meshdash.toml`.
    Local,
    /// Config loaded from the per-user config directory.
    Global(PathBuf),
    /// No file found; runtime defaults were used.
    BuiltInDefaults,
}

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must exist; the other sources are optional.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    let local = format!("{CONFIG_NAME}.toml");
    if let Ok(text) = read_file(Path::new(&local)) {
        return Ok((text, ConfigSource::Local));
    }

    if let Some(path) = config_root().map(|dir| global_config_path_in(&dir)) {
        if let Ok(text) = read_file(&path) {
            return Ok((text, ConfigSource::Global(path)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

/// `<root>/meshdash/meshdash.toml`.
pub(super) fn global_config_path_in(root: &Path) -> PathBuf {
    root.join(CONFIG_NAME).join(format!("{CONFIG_NAME}.toml"))
}

/// Per-user config root: `$XDG_CONFIG_HOME`, then `~/.config`, then the
/// platform config directory.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
