// ── gRPC service ──
//
// Thin tonic adapter over `gnso_core::Gateway`: unwraps the wire messages,
// hands them to the gateway, and maps results and errors back.

use tonic::{Request, Response, Status};
use tracing::debug;

use gnso_core::{CoreError, Device, Gateway, Reply};

use crate::proto;
use crate::proto::nso_service_server::NsoService;

/// `NSOService` implementation backed by a shared [`Gateway`].
#[derive(Clone)]
pub struct NsoGateway {
    gateway: Gateway,
}

impl NsoGateway {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }
}

#[tonic::async_trait]
impl NsoService for NsoGateway {
    async fn get_devices(
        &self,
        request: Request<proto::GetDevicesRequest>,
    ) -> Result<Response<proto::GetDevicesResponse>, Status> {
        let req = gnso_core::GetDevicesRequest {
            token: token(request.get_ref().request.as_ref()),
        };
        let devices = self.gateway.get_devices(&req).await.map_err(|e| status(&e))?;

        Ok(Response::new(proto::GetDevicesResponse {
            devices: devices.into_iter().map(proto::Device::from).collect(),
        }))
    }

    async fn get_config(
        &self,
        request: Request<proto::GetConfigRequest>,
    ) -> Result<Response<proto::GetConfigResponse>, Status> {
        let msg = request.into_inner();
        let req = gnso_core::GetConfigRequest {
            token: token(msg.request.as_ref()),
            path: msg.path,
            options: options(msg.options),
        };
        let reply = self.gateway.get_config(&req).await.map_err(|e| status(&e))?;

        Ok(Response::new(proto::GetConfigResponse {
            response: Some(reply.into()),
        }))
    }

    async fn edit_config(
        &self,
        request: Request<proto::EditConfigRequest>,
    ) -> Result<Response<proto::EditConfigResponse>, Status> {
        let msg = request.into_inner();
        let req = gnso_core::EditConfigRequest {
            token: token(msg.request.as_ref()),
            path: msg.path,
            options: options(msg.options),
            operation_type: msg.operation_type,
            json_data: msg.json_data,
        };
        let reply = self.gateway.edit_config(&req).await.map_err(|e| status(&e))?;

        Ok(Response::new(proto::EditConfigResponse {
            response: Some(reply.into()),
        }))
    }

    async fn query(
        &self,
        request: Request<proto::QueryRequest>,
    ) -> Result<Response<proto::QueryResponse>, Status> {
        let msg = request.into_inner();
        let req = gnso_core::QueryRequest {
            token: token(msg.request.as_ref()),
            json_query: msg.json_query,
        };
        let reply = self.gateway.query(&req).await.map_err(|e| status(&e))?;

        Ok(Response::new(proto::QueryResponse {
            response: Some(reply.into()),
        }))
    }

    async fn exec_operation(
        &self,
        request: Request<proto::ExecOperationRequest>,
    ) -> Result<Response<proto::ExecOperationResponse>, Status> {
        let msg = request.into_inner();
        let req = gnso_core::ExecOperationRequest {
            token: token(msg.request.as_ref()),
            path: msg.path,
            options: options(msg.options),
            json_data: msg.json_data,
        };
        let reply = self.gateway.exec_operation(&req).await.map_err(|e| status(&e))?;

        Ok(Response::new(proto::ExecOperationResponse {
            response: Some(reply.into()),
        }))
    }
}

// ── Conversions ─────────────────────────────────────────────────────

/// A missing request header counts as an empty token.
fn token(header: Option<&proto::Request>) -> String {
    header.map(|h| h.token.clone()).unwrap_or_default()
}

/// proto3 has no unset strings; empty means "no options".
fn options(raw: String) -> Option<String> {
    (!raw.is_empty()).then_some(raw)
}

impl From<Device> for proto::Device {
    fn from(d: Device) -> Self {
        Self {
            name: d.name,
            address: d.address,
            authgroup: d.authgroup,
            r#type: d.device_type.map(|t| proto::DeviceType {
                ned_id: t.ned_id,
                ned_type: t.kind.to_string(),
            }),
        }
    }
}

impl From<Reply> for proto::Response {
    fn from(reply: Reply) -> Self {
        Self {
            result: reply.result,
        }
    }
}

/// Map a gateway failure onto a gRPC status. Controller messages are
/// passed through as the status message unchanged.
pub fn status(err: &CoreError) -> Status {
    let message = err.to_string();
    let status = match err {
        CoreError::PermissionDenied => Status::permission_denied(message),
        CoreError::UnsupportedOperation { .. }
        | CoreError::InvalidPath { .. }
        | CoreError::Controller(gnso_api::Error::InvalidUrl(_)) => {
            Status::invalid_argument(message)
        }
        CoreError::Controller(e) if e.is_transport() => Status::unavailable(message),
        CoreError::Controller(_) => Status::unknown(message),
        CoreError::Deserialization { .. } | CoreError::ClientSetup(_) => {
            Status::internal(message)
        }
    };
    debug!(code = ?status.code(), "request failed");
    status
}
