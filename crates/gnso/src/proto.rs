//! Generated protobuf types and the `NSOService` server/client stubs.

#![allow(clippy::all, clippy::pedantic, clippy::unwrap_used)]

tonic::include_proto!("gnso");
