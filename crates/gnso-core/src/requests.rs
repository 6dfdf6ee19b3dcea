// ── Typed request structs for gateway operations ──
//
// One struct per RPC. Every request carries the caller's token; the
// path-based ones also carry an optional RESTCONF query string that is
// glued onto the path unchanged.

use gnso_api::Method;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::error::CoreError;

/// Join a resource path and its query options as `path?options`.
///
/// No encoding is applied; an empty or missing `options` leaves the path
/// as it is.
pub fn resource_path(path: &str, options: Option<&str>) -> String {
    match options {
        Some(options) if !options.is_empty() => format!("{path}?{options}"),
        _ => path.to_owned(),
    }
}

/// Reject resource paths with `.` or `..` segments.
///
/// URL parsing resolves dot segments, so `/../operations/x` under `/data`
/// would otherwise reach `/operations/x`. Percent-encoded dots and
/// backslash separators are resolved the same way and are rejected too.
/// Anything after `?` is query and is not inspected.
pub fn check_resource_path(path: &str) -> Result<(), CoreError> {
    let segments = path.split('?').next().unwrap_or_default();
    let dotted = segments.split(['/', '\\']).any(|segment| {
        let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
        decoded == "." || decoded == ".."
    });

    if dotted {
        return Err(CoreError::InvalidPath {
            path: path.to_owned(),
        });
    }
    Ok(())
}

/// Empty payloads are sent without a body.
pub(crate) fn payload(json: &str) -> Option<&str> {
    (!json.is_empty()).then_some(json)
}

// ── Edit operations ────────────────────────────────────────────────

/// How an `EditConfig` payload is applied to the datastore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EditOperation {
    Merge,
    Replace,
    Create,
    Delete,
}

impl EditOperation {
    /// RESTCONF method implementing this operation.
    pub fn method(self) -> Method {
        match self {
            Self::Merge => Method::PATCH,
            Self::Replace => Method::PUT,
            Self::Create => Method::POST,
            Self::Delete => Method::DELETE,
        }
    }
}

// ── Requests ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetDevicesRequest {
    pub token: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetConfigRequest {
    pub token: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
}

impl GetConfigRequest {
    pub fn resource_path(&self) -> String {
        resource_path(&self.path, self.options.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditConfigRequest {
    pub token: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    /// Kept as received; parsed into [`EditOperation`] by the gateway so
    /// an unknown value can be reported back verbatim.
    pub operation_type: String,
    pub json_data: String,
}

impl EditConfigRequest {
    pub fn resource_path(&self) -> String {
        resource_path(&self.path, self.options.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryRequest {
    pub token: String,
    pub json_query: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecOperationRequest {
    pub token: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    pub json_data: String,
}

impl ExecOperationRequest {
    pub fn resource_path(&self) -> String {
        resource_path(&self.path, self.options.as_deref())
    }
}
