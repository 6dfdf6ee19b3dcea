// ── RESTCONF-to-domain conversions ──
//
// Decodes the `tailf-ncs:device` list into `Device` records. The wire
// structs mirror only the projected fields; everything else NSO might
// include is ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::CoreError;
use crate::model::{Device, DeviceType, NedKind};

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DeviceList {
    #[serde(rename = "tailf-ncs:device", default)]
    devices: Vec<WireDevice>,
}

/// Scalar leaf as text. Null reads as empty, other scalars by their JSON
/// text, so one odd record never fails the whole list.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[derive(Deserialize)]
struct WireDevice {
    #[serde(default, deserialize_with = "lenient_string")]
    name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    address: String,
    #[serde(default, deserialize_with = "lenient_string")]
    authgroup: String,
    #[serde(rename = "device-type", default)]
    device_type: Option<WireDeviceType>,
}

/// The `device-type` choice. NSO only ever sets one case, but nothing
/// stops a malformed record from carrying several.
#[derive(Deserialize)]
struct WireDeviceType {
    #[serde(default)]
    cli: Option<WireNed>,
    #[serde(default)]
    netconf: Option<WireNed>,
    #[serde(default)]
    generic: Option<WireNed>,
}

#[derive(Deserialize)]
struct WireNed {
    #[serde(rename = "ned-id", default, deserialize_with = "lenient_string")]
    ned_id: String,
}

// ── Device ─────────────────────────────────────────────────────────

impl WireDeviceType {
    /// Pick the first populated case in `NedKind::PRIORITY` order.
    fn resolve(self) -> Option<DeviceType> {
        let Self {
            mut cli,
            mut netconf,
            mut generic,
        } = self;

        NedKind::PRIORITY.into_iter().find_map(|kind| {
            let ned = match kind {
                NedKind::Cli => cli.take(),
                NedKind::Netconf => netconf.take(),
                NedKind::Generic => generic.take(),
            };
            ned.map(|ned| DeviceType {
                kind,
                ned_id: ned.ned_id,
            })
        })
    }
}

impl From<WireDevice> for Device {
    fn from(d: WireDevice) -> Self {
        Self {
            name: d.name,
            address: d.address,
            authgroup: d.authgroup,
            device_type: d.device_type.and_then(WireDeviceType::resolve),
        }
    }
}

/// Decode a device-list response body, keeping NSO's order.
///
/// An empty body (NSO answers 204 when there are no devices) or an
/// object without the list yields no devices.
pub fn parse_device_list(body: &str) -> Result<Vec<Device>, CoreError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let list: DeviceList =
        serde_json::from_str(body).map_err(|e| CoreError::Deserialization {
            message: e.to_string(),
            body: body.to_owned(),
        })?;

    Ok(list.devices.into_iter().map(Device::from).collect())
}
