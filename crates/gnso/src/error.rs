//! Startup error types with miette diagnostics.
//!
//! Per-request failures never reach here; they become `tonic::Status`
//! values in the service layer. These are the errors that stop the
//! server from starting or keep it from serving.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use gnso_config::ConfigError;
use gnso_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const CONFIG: i32 = 2;
    pub const TLS: i32 = 3;
    pub const SERVE: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("No NSO controller configured")]
    #[diagnostic(
        code(gnso::no_controller),
        help(
            "Set NSO_URL to the controller's RESTCONF root, e.g.\n\
             NSO_URL=http://nso:8080/restconf gnso\n\
             Credentials come from NSO_USERNAME and NSO_PASSWORD."
        )
    )]
    NoController,

    #[error("Invalid configuration")]
    #[diagnostic(code(gnso::config))]
    Config(#[source] ConfigError),

    #[error("Could not set up the controller client")]
    #[diagnostic(
        code(gnso::controller_client),
        help("Check GNSO_CA_CERT points at a readable PEM bundle.")
    )]
    ControllerClient(#[source] CoreError),

    // ── TLS ──────────────────────────────────────────────────────────
    #[error("Could not read TLS {kind} from {}", path.display())]
    #[diagnostic(
        code(gnso::tls_material),
        help(
            "Provide a certificate and key with GNSO_TLS_CERT and GNSO_TLS_KEY\n\
             (defaults: tls/cert.pem, tls/key.pem), or run with --plaintext."
        )
    )]
    TlsMaterial {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TLS identity")]
    #[diagnostic(code(gnso::tls_identity))]
    TlsIdentity(#[source] tonic::transport::Error),

    // ── Serving ──────────────────────────────────────────────────────
    #[error("gRPC server on {addr} failed")]
    #[diagnostic(
        code(gnso::serve),
        help("Check that the port is free, or change it with PORT.")
    )]
    Serve {
        addr: std::net::SocketAddr,
        #[source]
        source: tonic::transport::Error,
    },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoController | Self::Config(_) | Self::ControllerClient(_) => {
                exit_code::CONFIG
            }
            Self::TlsMaterial { .. } | Self::TlsIdentity(_) => exit_code::TLS,
            Self::Serve { .. } => exit_code::SERVE,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoController => Self::NoController,
            other => Self::Config(other),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::ControllerClient(err)
    }
}
