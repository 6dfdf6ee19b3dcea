// RESTCONF client modules
//
// Hand-written client for NSO's RESTCONF northbound. Bodies go out and
// come back as opaque JSON text; the only thing inspected on the way
// back is the controller's error envelope.

pub mod client;
pub mod data;
pub mod operations;

pub use client::{RestconfClient, YANG_DATA_JSON};
pub use data::DEVICES_ENDPOINT;
