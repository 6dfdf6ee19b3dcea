use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

use crate::error::CoreError;

/// Shared-token check applied to every inbound request.
///
/// An empty or absent configured token turns the check off, so every
/// request passes regardless of what it presents.
#[derive(Debug, Clone, Default)]
pub struct TokenAuthorizer {
    token: Option<SecretString>,
}

impl TokenAuthorizer {
    pub fn new(token: Option<SecretString>) -> Self {
        let token = token.filter(|t| !t.expose_secret().is_empty());
        Self { token }
    }

    /// An authorizer that accepts everything.
    pub fn disabled() -> Self {
        Self { token: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.token.is_some()
    }

    pub fn authorize(&self, presented: &str) -> Result<(), CoreError> {
        match &self.token {
            Some(expected) if expected.expose_secret() != presented => {
                warn!("rejecting request with invalid token");
                Err(CoreError::PermissionDenied)
            }
            _ => Ok(()),
        }
    }
}
