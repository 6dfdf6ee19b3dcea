use serde::{Deserialize, Serialize};

/// Generic envelope for pass-through operations.
///
/// `result` is the controller's response body, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub result: String,
}

impl From<String> for Reply {
    fn from(result: String) -> Self {
        Self { result }
    }
}
