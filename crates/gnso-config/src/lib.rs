//! Settings for the gnso gateway.
//!
//! Layered loading (defaults, optional TOML file, environment), credential
//! resolution, and translation to `gnso_core::ControllerConfig`. The
//! plain environment keys of existing deployments (`NSO_URL`, `NSO_USERNAME`,
//! `NSO_PASSWORD`, `TOKEN`, `PORT`) are honored as-is; everything else can
//! be set with a `GNSO_` prefix.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gnso_core::{ControllerConfig, TlsVerification};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("no controller URL configured (set NSO_URL)")]
    NoController,

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings ────────────────────────────────────────────────────────

/// Flat settings as read from file and environment.
#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    /// RESTCONF root of the controller (e.g. "http://nso:8080/restconf").
    pub nso_url: Option<String>,

    /// Controller username (prefer `NSO_USERNAME`).
    pub nso_username: Option<String>,

    /// Controller password (plaintext -- prefer `NSO_PASSWORD`).
    pub nso_password: Option<String>,

    /// Shared RPC token (plaintext -- prefer `TOKEN`). Empty disables checks.
    pub token: Option<String>,

    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_tls_cert")]
    pub tls_cert: PathBuf,

    #[serde(default = "default_tls_key")]
    pub tls_key: PathBuf,

    /// CA bundle for verifying the controller's certificate.
    pub ca_cert: Option<PathBuf>,

    /// Accept any controller certificate.
    #[serde(default)]
    pub insecure: bool,

    /// Controller request timeout in seconds. Unset or 0 means no timeout.
    pub timeout: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nso_url: None,
            nso_username: None,
            nso_password: None,
            token: None,
            host: default_host(),
            port: default_port(),
            tls_cert: default_tls_cert(),
            tls_key: default_tls_key(),
            ca_cert: None,
            insecure: false,
            timeout: None,
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}
fn default_port() -> u16 {
    50051
}
fn default_tls_cert() -> PathBuf {
    PathBuf::from("tls/cert.pem")
}
fn default_tls_key() -> PathBuf {
    PathBuf::from("tls/key.pem")
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load settings from defaults, the optional TOML file, and environment.
///
/// `NSO_URL` and `PORT` are read unprefixed; `GNSO_*` variables override
/// any non-secret key. Credentials and the token are not resolved here
/// (see [`resolve`]).
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

    if let Some(path) = path {
        // An explicitly named file must exist; figment would skip it.
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        figment = figment.merge(Toml::file(path));
    }

    let settings = figment
        .merge(Env::raw().only(&["nso_url", "port"]))
        .merge(Env::prefixed("GNSO_").ignore(&["nso_username", "nso_password", "token"]))
        .extract()?;
    Ok(settings)
}

// ── Resolution ──────────────────────────────────────────────────────

/// Where and how the gRPC listener binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub tls_cert: PathBuf,
    pub tls_key: PathBuf,
}

/// Everything the binary needs to start serving.
#[derive(Debug)]
pub struct GatewayConfig {
    pub controller: ControllerConfig,
    pub token: Option<SecretString>,
    pub server: ServerConfig,
}

/// Environment variable first, then the settings value.
fn env_or(key: &str, fallback: Option<&String>) -> Option<String> {
    std::env::var(key).ok().or_else(|| fallback.cloned())
}

/// Resolve controller credentials: `NSO_USERNAME` / `NSO_PASSWORD`, then
/// the settings file. Missing values become empty strings.
pub fn resolve_credentials(settings: &Settings) -> (String, SecretString) {
    let username = env_or("NSO_USERNAME", settings.nso_username.as_ref()).unwrap_or_default();
    let password = env_or("NSO_PASSWORD", settings.nso_password.as_ref()).unwrap_or_default();
    (username, SecretString::from(password))
}

/// Resolve the shared RPC token: `TOKEN`, then the settings file.
pub fn resolve_token(settings: &Settings) -> Option<SecretString> {
    env_or("TOKEN", settings.token.as_ref())
        .filter(|t| !t.is_empty())
        .map(SecretString::from)
}

/// Build a `ControllerConfig` from settings.
pub fn controller_config(settings: &Settings) -> Result<ControllerConfig, ConfigError> {
    let raw = settings.nso_url.as_deref().ok_or(ConfigError::NoController)?;
    let url: url::Url = raw.parse().map_err(|e| ConfigError::Validation {
        field: "nso_url".into(),
        reason: format!("invalid URL {raw}: {e}"),
    })?;

    let (username, password) = resolve_credentials(settings);

    let tls = if settings.insecure {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = settings.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(ControllerConfig {
        url,
        username,
        password,
        tls,
        timeout: settings
            .timeout
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs),
    })
}

/// Resolve settings into the runtime configuration.
pub fn resolve(settings: &Settings) -> Result<GatewayConfig, ConfigError> {
    Ok(GatewayConfig {
        controller: controller_config(settings)?,
        token: resolve_token(settings),
        server: ServerConfig {
            listen_addr: SocketAddr::new(settings.host, settings.port),
            tls_cert: settings.tls_cert.clone(),
            tls_key: settings.tls_key.clone(),
        },
    })
}
