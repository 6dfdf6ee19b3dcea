// gnso-api: Async RESTCONF client for Cisco NSO controllers

pub mod auth;
pub mod error;
pub mod restconf;
pub mod transport;

pub use auth::BasicCredentials;
pub use error::Error;
pub use reqwest::{Method, StatusCode};
pub use restconf::{DEVICES_ENDPOINT, RestconfClient, YANG_DATA_JSON};
pub use transport::{TlsMode, TransportConfig};
