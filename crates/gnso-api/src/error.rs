use thiserror::Error;

/// Top-level error type for the `gnso-api` crate.
///
/// Covers every way a RESTCONF exchange with the controller can fail:
/// reaching it at all, a non-2xx status, or a 2xx reply that still carries
/// an `errors` member. `gnso-core` passes these through to RPC callers
/// without rewriting them.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Controller ──────────────────────────────────────────────────
    /// Non-2xx status. `body` is the raw response text, untouched.
    #[error("Status {status} returned from NSO: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    /// 2xx status whose body carries a top-level `errors` member.
    #[error("Error returned from NSO: {message}")]
    Controller { message: String },
}

impl Error {
    /// The HTTP status the controller answered with, if it answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` if the controller was never reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::InvalidUrl(_) | Self::Tls(_))
    }
}
