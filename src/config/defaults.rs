//! Default configuration constants.

/// Proxy port used when nothing else is configured.
pub const DEFAULT_PROXY_PORT: u16 = 8001;
/// `kubectl` executable resolved through `PATH`.
pub const DEFAULT_KUBECTL: &str = "kubectl";
/// Namespace the control plane is installed into.
pub const DEFAULT_NAMESPACE: &str = "conduit";
/// Dashboard service path below the namespace, served through the proxy.
pub const DEFAULT_DASHBOARD_PATH: &str = "/services/web:http/proxy/";
/// Log filter used when neither `RUST_LOG` nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Config directory and file stem.
pub(super) const CONFIG_NAME: &str = "meshdash";
