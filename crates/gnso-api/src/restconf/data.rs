// RESTCONF datastore endpoints
//
// Everything under `/data`: the device list projection, config reads,
// and config edits.

use reqwest::Method;
use tracing::debug;

use crate::error::Error;
use crate::restconf::client::RestconfClient;

/// Device list with only the fields needed to describe each device.
pub const DEVICES_ENDPOINT: &str =
    "/data/tailf-ncs:devices/device?fields=address;name;device-type;authgroup&depth=2";

impl RestconfClient {
    /// List managed devices (name, address, authgroup, device type).
    ///
    /// `GET /data/tailf-ncs:devices/device?fields=...&depth=2`
    pub async fn list_devices(&self) -> Result<String, Error> {
        debug!("listing devices");
        self.send(Method::GET, DEVICES_ENDPOINT, None).await
    }

    /// Read a subtree of the datastore.
    ///
    /// `GET /data{resource_path}`. The path is used exactly as given,
    /// query string included.
    pub async fn get_config(&self, resource_path: &str) -> Result<String, Error> {
        self.send(Method::GET, &format!("/data{resource_path}"), None)
            .await
    }

    /// Change the datastore with the given method.
    ///
    /// `{method} /data{resource_path}`. Which method maps to which edit
    /// semantics (merge, replace, create, delete) is up to the caller.
    pub async fn edit_config(
        &self,
        resource_path: &str,
        body: Option<&str>,
        method: Method,
    ) -> Result<String, Error> {
        debug!(%method, resource_path, "editing config");
        self.send(method, &format!("/data{resource_path}"), body)
            .await
    }
}
