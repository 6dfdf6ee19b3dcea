use secrecy::SecretString;

/// HTTP Basic credentials for the controller's RESTCONF northbound.
///
/// NSO authenticates every RESTCONF request independently, so there is
/// no session to establish or refresh -- the same pair rides on each call.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: SecretString,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}
