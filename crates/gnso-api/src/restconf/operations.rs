// RESTCONF non-datastore endpoints
//
// NSO's query API (`/tailf/query`) and YANG actions/RPCs (`/operations`).

use reqwest::Method;
use tracing::debug;

use crate::error::Error;
use crate::restconf::client::RestconfClient;

impl RestconfClient {
    /// Run a query in NSO's structured query language.
    ///
    /// `POST /tailf/query` with the query document as body.
    pub async fn query(&self, query: &str) -> Result<String, Error> {
        debug!("running query");
        self.send(Method::POST, "/tailf/query", Some(query)).await
    }

    /// Invoke an action or RPC.
    ///
    /// `POST /operations{resource_path}`, e.g.
    /// `/operations/tailf-ncs:devices/fetch-ssh-host-keys`.
    pub async fn exec_operation(
        &self,
        resource_path: &str,
        body: Option<&str>,
    ) -> Result<String, Error> {
        debug!(resource_path, "executing operation");
        self.send(Method::POST, &format!("/operations{resource_path}"), body)
            .await
    }
}
