// ── Runtime connection configuration ──
//
// These types describe *how* to reach the NSO controller. They carry
// credential data and transport tuning, but never touch disk or the
// environment -- `gnso-config` builds a `ControllerConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// TLS verification strategy for the controller connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed lab controllers).
    DangerAcceptInvalid,
}

/// Endpoint descriptor for a single NSO controller.
///
/// Built once at startup and never mutated afterwards; the gateway keeps
/// it behind an `Arc` and every request reads from the same instance.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// RESTCONF root (e.g., `http://nso:8080/restconf`).
    pub url: Url,
    pub username: String,
    pub password: SecretString,
    pub tls: TlsVerification,
    /// Per-request timeout. `None` waits for the controller indefinitely.
    pub timeout: Option<Duration>,
}

impl ControllerConfig {
    pub fn new(url: Url, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            url,
            username: username.into(),
            password,
            tls: TlsVerification::default(),
            timeout: None,
        }
    }
}
