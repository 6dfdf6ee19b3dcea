// ── Core error types ──
//
// Errors raised by the gateway. Failures detected locally (bad token,
// unknown edit operation) get their own variants; anything the controller
// client reports is carried through untouched so the caller sees exactly
// what NSO said.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Local rejections ─────────────────────────────────────────────
    /// The presented token does not match the configured one.
    #[error("invalid token")]
    PermissionDenied,

    /// Edit operation type outside merge/replace/create/delete.
    #[error("Operation type {operation} not supported by this server")]
    UnsupportedOperation { operation: String },

    /// A resource path with a `.` or `..` segment, which URL resolution
    /// would move out of its RESTCONF namespace.
    #[error("invalid resource path {path}: dot segments are not allowed")]
    InvalidPath { path: String },

    // ── Controller errors (passed through) ───────────────────────────
    #[error(transparent)]
    Controller(#[from] gnso_api::Error),

    // ── Data errors ──────────────────────────────────────────────────
    /// The device list could not be decoded; `body` is what NSO sent.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Configuration errors ─────────────────────────────────────────
    /// The controller client could not be built (unreadable CA, TLS setup).
    #[error("Could not set up the controller client")]
    ClientSetup(#[source] gnso_api::Error),
}

impl CoreError {
    /// Returns `true` if the request was refused before reaching NSO
    /// because of its token.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied)
    }

    /// The underlying controller error, if this came from NSO or the
    /// transport to it.
    pub fn controller_error(&self) -> Option<&gnso_api::Error> {
        match self {
            Self::Controller(e) => Some(e),
            _ => None,
        }
    }
}
