//! Configuration loading from TOML files and environment variables.
//!
//! Config is resolved in this order of precedence (highest wins):
//! 1. Command-line flags (applied by the caller after loading)
//! 2. Environment variables (`MESHDASH_PORT`, `MESHDASH_NAMESPACE`,
//!    `MESHDASH_KUBECTL`, `MESHDASH_LOG`)
//! 3. TOML file specified via --config CLI flag
//! 4. ./meshdash.toml in the current directory
//! 5. $XDG_CONFIG_HOME/meshdash/meshdash.toml (or ~/.config/meshdash/meshdash.toml)
//! 6. Built-in defaults

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

pub use defaults::{
    DEFAULT_DASHBOARD_PATH, DEFAULT_KUBECTL, DEFAULT_LOG_LEVEL, DEFAULT_NAMESPACE,
    DEFAULT_PROXY_PORT,
};
pub use env::{ENV_KUBECTL, ENV_LOG, ENV_NAMESPACE, ENV_PORT};
pub use loader::{load_config, LoadedConfig};
pub use sources::{config_root_dir, ConfigSource};
pub use types::{Config, DashboardConfig, DisplayConfig, LoggingConfig, ProxyConfig};

#[cfg(test)]
mod tests {
    use super::loader::load_config_from_sources;
    use super::*;
    use crate::error::ConfigError;
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};

    fn load_with(
        path_override: Option<&str>,
        files: &[(&str, &str)],
        env: &[(&str, &str)],
    ) -> Result<LoadedConfig, ConfigError> {
        let files: HashMap<PathBuf, String> = files
            .iter()
            .map(|(p, t)| (PathBuf::from(p), t.to_string()))
            .collect();
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_from_sources(
            path_override,
            |path: &Path| {
                files
                    .get(path)
                    .cloned()
                    .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
            },
            |name: &str| env.get(name).cloned(),
            || Some(PathBuf::from("/home/u/.config")),
        )
    }

    #[test]
    fn defaults_are_sensible() {
        let c = Config::default();
        assert_eq!(c.proxy.port, 8001);
        assert_eq!(c.proxy.kubectl, "kubectl");
        assert_eq!(c.dashboard.namespace, "conduit");
        assert_eq!(c.dashboard.path, "/services/web:http/proxy/");
        assert!(c.dashboard.open_browser);
        assert!(c.display.color);
        assert_eq!(c.logging.level, "warn");
    }

    #[test]
    fn no_files_yields_builtin_defaults() {
        let loaded = load_with(None, &[], &[]).unwrap();
        assert_eq!(loaded.source, ConfigSource::BuiltInDefaults);
        assert_eq!(loaded.config, Config::default());
    }

    #[test]
    fn parse_partial_toml() {
        let toml = r#"
            [proxy]
            port = 9000

            [dashboard]
            open_browser = false
        "#;
        let loaded = load_with(None, &[("meshdash.toml", toml)], &[]).unwrap();
        assert_eq!(loaded.source, ConfigSource::Local);
        assert_eq!(loaded.config.proxy.port, 9000);
        assert_eq!(loaded.config.proxy.kubectl, "kubectl");
        assert!(!loaded.config.dashboard.open_browser);
        assert_eq!(loaded.config.dashboard.namespace, "conduit");
    }

    #[test]
    fn local_file_wins_over_global() {
        let loaded = load_with(
            None,
            &[
                ("meshdash.toml", "[dashboard]\nnamespace = \"local\"\n"),
                (
                    "/home/u/.config/meshdash/meshdash.toml",
                    "[dashboard]\nnamespace = \"global\"\n",
                ),
            ],
            &[],
        )
        .unwrap();
        assert_eq!(loaded.config.dashboard.namespace, "local");
    }

    #[test]
    fn global_file_used_when_no_local() {
        let loaded = load_with(
            None,
            &[(
                "/home/u/.config/meshdash/meshdash.toml",
                "[dashboard]\nnamespace = \"global\"\n",
            )],
            &[],
        )
        .unwrap();
        assert_eq!(loaded.config.dashboard.namespace, "global");
        assert!(matches!(loaded.source, ConfigSource::Global(_)));
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_with(Some("/etc/missing.toml"), &[], &[]).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "got: {err}");
        assert!(err.to_string().contains("/etc/missing.toml"), "got: {err}");
    }

    #[test]
    fn env_overrides_file_values() {
        let loaded = load_with(
            Some("custom.toml"),
            &[("custom.toml", "[proxy]\nport = 9000\nkubectl = \"kc\"\n")],
            &[
                ("MESHDASH_PORT", "9100"),
                ("MESHDASH_NAMESPACE", "linkerd"),
                ("MESHDASH_LOG", "debug"),
            ],
        )
        .unwrap();
        assert_eq!(loaded.config.proxy.port, 9100);
        assert_eq!(loaded.config.proxy.kubectl, "kc");
        assert_eq!(loaded.config.dashboard.namespace, "linkerd");
        assert_eq!(loaded.config.logging.level, "debug");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let loaded = load_with(None, &[], &[("MESHDASH_KUBECTL", "   ")]).unwrap();
        assert_eq!(loaded.config.proxy.kubectl, "kubectl");
    }

    #[test]
    fn invalid_env_port_is_rejected() {
        let err = load_with(None, &[], &[("MESHDASH_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("MESHDASH_PORT"), "got: {err}");
    }

    #[test]
    fn out_of_range_file_port_is_a_toml_error() {
        let err = load_with(None, &[("meshdash.toml", "[proxy]\nport = 70000\n")], &[])
            .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "got: {err}");
    }

    #[test]
    fn empty_namespace_is_rejected() {
        let err = load_with(None, &[("meshdash.toml", "[dashboard]\nnamespace = \"\"\n")], &[])
            .unwrap_err();
        assert!(err.to_string().contains("namespace"), "got: {err}");
    }

    #[test]
    fn path_like_namespace_is_rejected() {
        let err = load_with(None, &[], &[("MESHDASH_NAMESPACE", "../kube-system")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got: {err}");
        assert!(err.to_string().contains("../kube-system"), "got: {err}");
    }
}
