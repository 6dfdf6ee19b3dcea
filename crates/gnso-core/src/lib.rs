// gnso-core: Translation layer between the RPC surface and NSO RESTCONF.

pub mod auth;
pub mod config;
pub mod convert;
pub mod error;
pub mod gateway;
pub mod model;
pub mod requests;

// ── Primary re-exports ──────────────────────────────────────────────
pub use auth::TokenAuthorizer;
pub use config::{ControllerConfig, TlsVerification};
pub use error::CoreError;
pub use gateway::Gateway;
pub use model::{Device, DeviceType, NedKind, Reply};
pub use requests::{
    EditConfigRequest, EditOperation, ExecOperationRequest, GetConfigRequest,
    GetDevicesRequest, QueryRequest,
};
