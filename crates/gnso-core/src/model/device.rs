// ── Device domain types ──

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// NED family a device is managed through.
///
/// Declaration order is the lookup priority when a record carries more
/// than one `device-type` member.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NedKind {
    Cli,
    Netconf,
    Generic,
}

impl NedKind {
    /// Lookup order, highest priority first.
    pub const PRIORITY: [Self; 3] = [Self::Cli, Self::Netconf, Self::Generic];
}

/// The NED a device is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceType {
    pub kind: NedKind,
    pub ned_id: String,
}

/// A device as listed by NSO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub address: String,
    pub authgroup: String,
    /// `None` when the record has no cli, netconf, or generic member.
    pub device_type: Option<DeviceType>,
}
