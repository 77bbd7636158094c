//! `kubectl proxy` launcher and control-plane URL construction.

use url::Url;

use crate::error::KubectlError;
use crate::supervisor::{ProcessSupervisor, SupervisedProcess};

/// Host `kubectl proxy` binds to by default.
pub const PROXY_HOST: &str = "127.0.0.1";

/// Something that can run a local API proxy and address services behind it.
pub trait ProxyLauncher: Send {
    /// Start the proxy on `port` and return its supervision handle.
    fn start_proxy(&mut self, port: u16) -> Result<SupervisedProcess, KubectlError>;

    /// URL for `path` inside `namespace`, routed through the running proxy.
    fn url_for(&self, namespace: &str, path: &str) -> Result<Url, KubectlError>;
}

/// Drives a `kubectl` executable.
#[derive(Debug, Clone)]
pub struct Kubectl {
    executable: String,
    supervisor: ProcessSupervisor,
    proxy_port: Option<u16>,
}

impl Kubectl {
    pub fn new(executable: impl Into<String>) -> Self {
        Self::with_supervisor(executable, ProcessSupervisor::new())
    }

    pub fn with_supervisor(executable: impl Into<String>, supervisor: ProcessSupervisor) -> Self {
        Self {
            executable: executable.into(),
            supervisor,
            proxy_port: None,
        }
    }

    /// Port of the proxy started by this launcher, if any.
    pub fn proxy_port(&self) -> Option<u16> {
        self.proxy_port
    }
}

impl ProxyLauncher for Kubectl {
    fn start_proxy(&mut self, port: u16) -> Result<SupervisedProcess, KubectlError> {
        if let Some(running) = self.proxy_port {
            return Err(KubectlError::ProxyAlreadyRunning(running));
        }
        let port_arg = port.to_string();
        tracing::info!("Running `kubectl proxy -p {port}`");
        let process = self
            .supervisor
            .start(&self.executable, ["proxy", "-p", port_arg.as_str()])?;
        self.proxy_port = Some(port);
        Ok(process)
    }

    fn url_for(&self, namespace: &str, path: &str) -> Result<Url, KubectlError> {
        let port = self.proxy_port.ok_or(KubectlError::ProxyNotRunning)?;
        api_url_for(&format!("http://{PROXY_HOST}:{port}"), namespace, path)
    }
}

/// Check that `namespace` is a DNS-1123 label: 1-63 characters of
/// `[a-z0-9-]`, starting and ending with an alphanumeric.
pub fn validate_namespace(namespace: &str) -> Result<(), KubectlError> {
    let bytes = namespace.as_bytes();
    let edge_ok = |b: Option<&u8>| b.is_some_and(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
    let body_ok = bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-');
    if bytes.len() <= 63 && body_ok && edge_ok(bytes.first()) && edge_ok(bytes.last()) {
        Ok(())
    } else {
        Err(KubectlError::InvalidNamespace(namespace.to_string()))
    }
}

/// Namespaced Kubernetes API URL below `base` (scheme, host and port).
pub fn api_url_for(base: &str, namespace: &str, path: &str) -> Result<Url, KubectlError> {
    validate_namespace(namespace)?;
    if !path.starts_with('/') {
        return Err(KubectlError::InvalidPath(path.to_string()));
    }
    let raw = format!("{base}/api/v1/namespaces/{namespace}{path}");
    Url::parse(&raw).map_err(|source| KubectlError::InvalidUrl { url: raw, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supervisor::StdioMode;

    #[test]
    fn api_url_includes_namespace_and_path() {
        let url = api_url_for(
            "http://127.0.0.1:8001",
            "conduit",
            "/services/web:http/proxy/",
        )
        .expect("valid url");
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8001/api/v1/namespaces/conduit/services/web:http/proxy/"
        );
    }

    #[test]
    fn api_url_rejects_relative_path() {
        let err = api_url_for("http://127.0.0.1:8001", "conduit", "services").unwrap_err();
        assert!(matches!(err, KubectlError::InvalidPath(ref p) if p == "services"));
    }

    #[test]
    fn api_url_rejects_empty_path() {
        let err = api_url_for("http://127.0.0.1:8001", "conduit", "").unwrap_err();
        assert!(matches!(err, KubectlError::InvalidPath(_)));
    }

    #[test]
    fn api_url_rejects_namespace_that_escapes_its_segment() {
        for namespace in ["../../../x", "a?b=c", "a/b", "a#b"] {
            let err = api_url_for("http://127.0.0.1:8001", namespace, "/services/web:http/proxy/")
                .unwrap_err();
            assert!(
                matches!(err, KubectlError::InvalidNamespace(ref ns) if ns == namespace),
                "namespace {namespace:?} got: {err}"
            );
        }
    }

    #[test]
    fn namespace_must_be_a_dns_label() {
        assert!(validate_namespace("conduit").is_ok());
        assert!(validate_namespace("linkerd-2").is_ok());
        assert!(validate_namespace(&"a".repeat(63)).is_ok());
        assert!(validate_namespace("").is_err());
        assert!(validate_namespace("-edge").is_err());
        assert!(validate_namespace("edge-").is_err());
        assert!(validate_namespace("Upper").is_err());
        assert!(validate_namespace(&"a".repeat(64)).is_err());
    }

    #[test]
    fn api_url_reports_unparseable_base() {
        let err = api_url_for("not a url", "conduit", "/x").unwrap_err();
        assert!(matches!(err, KubectlError::InvalidUrl { .. }));
    }

    #[test]
    fn url_for_requires_running_proxy() {
        let kubectl = Kubectl::new("kubectl");
        let err = kubectl.url_for("conduit", "/").unwrap_err();
        assert!(matches!(err, KubectlError::ProxyNotRunning));
    }

    #[tokio::test]
    async fn missing_executable_is_reported_as_spawn_failure() {
        let mut kubectl = Kubectl::new("/no/such/kubectl");
        let err = kubectl.start_proxy(8001).unwrap_err();
        match err {
            KubectlError::Supervisor(inner) => assert!(inner.is_spawn_failure()),
            other => panic!("expected supervisor error, got {other:?}"),
        }
        assert_eq!(kubectl.proxy_port(), None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn second_proxy_start_is_rejected() {
        let supervisor = ProcessSupervisor::new().with_stdio(StdioMode::Discard);
        let mut kubectl = Kubectl::with_supervisor("true", supervisor);
        let first = kubectl.start_proxy(9100).expect("start stand-in proxy");
        assert_eq!(kubectl.proxy_port(), Some(9100));
        assert_eq!(
            kubectl.url_for("linkerd", "/").expect("url").as_str(),
            "http://127.0.0.1:9100/api/v1/namespaces/linkerd/"
        );

        let err = kubectl.start_proxy(9200).unwrap_err();
        assert!(matches!(err, KubectlError::ProxyAlreadyRunning(9100)));
        assert!(first.wait().await.is_ok());
    }
}
