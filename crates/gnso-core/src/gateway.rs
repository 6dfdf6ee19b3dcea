// ── Gateway ──
//
// Entry point for RPC handlers. Each operation checks the token, builds
// the RESTCONF path, makes exactly one controller call, and either wraps
// the raw body in a `Reply` or (for the device list) decodes it.

use std::sync::Arc;

use tracing::debug;

use gnso_api::transport::{TlsMode, TransportConfig};
use gnso_api::{BasicCredentials, RestconfClient};

use crate::auth::TokenAuthorizer;
use crate::config::{ControllerConfig, TlsVerification};
use crate::convert::parse_device_list;
use crate::error::CoreError;
use crate::model::{Device, Reply};
use crate::requests::{
    EditConfigRequest, EditOperation, ExecOperationRequest, GetConfigRequest, GetDevicesRequest,
    QueryRequest, check_resource_path, payload,
};

/// Request translator shared by all RPC handlers.
///
/// Cheaply cloneable via `Arc<GatewayInner>`. Holds no per-request state,
/// so concurrent calls never contend on anything.
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    client: RestconfClient,
    authorizer: TokenAuthorizer,
}

impl Gateway {
    /// Build the controller client from `config` and wrap it.
    pub fn new(config: &ControllerConfig, authorizer: TokenAuthorizer) -> Result<Self, CoreError> {
        let transport = build_transport(config);
        let credentials = BasicCredentials::new(config.username.clone(), config.password.clone());
        let client = RestconfClient::new(config.url.clone(), credentials, &transport)
            .map_err(CoreError::ClientSetup)?;
        Ok(Self::with_client(client, authorizer))
    }

    /// Wrap an already-built controller client.
    pub fn with_client(client: RestconfClient, authorizer: TokenAuthorizer) -> Self {
        Self {
            inner: Arc::new(GatewayInner { client, authorizer }),
        }
    }

    pub fn client(&self) -> &RestconfClient {
        &self.inner.client
    }

    pub fn authorizer(&self) -> &TokenAuthorizer {
        &self.inner.authorizer
    }

    // ── Operations ───────────────────────────────────────────────

    /// List managed devices with their NED type.
    pub async fn get_devices(&self, req: &GetDevicesRequest) -> Result<Vec<Device>, CoreError> {
        self.inner.authorizer.authorize(&req.token)?;

        let body = self.inner.client.list_devices().await?;
        let devices = parse_device_list(&body)?;
        debug!(count = devices.len(), "listed devices");
        Ok(devices)
    }

    /// Read a datastore subtree.
    pub async fn get_config(&self, req: &GetConfigRequest) -> Result<Reply, CoreError> {
        self.inner.authorizer.authorize(&req.token)?;

        check_resource_path(&req.path)?;
        let path = req.resource_path();
        debug!(%path, "get config");
        let body = self.inner.client.get_config(&path).await?;
        Ok(Reply::from(body))
    }

    /// Apply a merge/replace/create/delete to the datastore.
    pub async fn edit_config(&self, req: &EditConfigRequest) -> Result<Reply, CoreError> {
        self.inner.authorizer.authorize(&req.token)?;

        check_resource_path(&req.path)?;
        let path = req.resource_path();
        let operation: EditOperation =
            req.operation_type
                .parse()
                .map_err(|_| CoreError::UnsupportedOperation {
                    operation: req.operation_type.clone(),
                })?;
        debug!(%path, %operation, "edit config");

        let body = self
            .inner
            .client
            .edit_config(&path, payload(&req.json_data), operation.method())
            .await?;
        Ok(Reply::from(body))
    }

    /// Run an NSO query document.
    pub async fn query(&self, req: &QueryRequest) -> Result<Reply, CoreError> {
        self.inner.authorizer.authorize(&req.token)?;

        let body = self.inner.client.query(&req.json_query).await?;
        Ok(Reply::from(body))
    }

    /// Invoke a YANG action or RPC.
    pub async fn exec_operation(&self, req: &ExecOperationRequest) -> Result<Reply, CoreError> {
        self.inner.authorizer.authorize(&req.token)?;

        check_resource_path(&req.path)?;
        let path = req.resource_path();
        debug!(%path, "exec operation");
        let body = self
            .inner
            .client
            .exec_operation(&path, payload(&req.json_data))
            .await?;
        Ok(Reply::from(body))
    }
}

// ── Helpers ──────────────────────────────────────────────────────

fn build_transport(config: &ControllerConfig) -> TransportConfig {
    let tls = match &config.tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    };
    TransportConfig {
        tls,
        timeout: config.timeout,
    }
}
