// ── gRPC listener ──
//
// Builds the tonic server around `NsoGateway` and runs it until Ctrl-C.
// TLS identity comes from the configured PEM files unless plaintext was
// requested.

use std::path::Path;

use tonic::transport::server::Router;
use tonic::transport::{Identity, Server, ServerTlsConfig};
use tracing::{info, warn};

use gnso_config::ServerConfig;
use gnso_core::Gateway;

use crate::error::CliError;
use crate::proto::nso_service_server::NsoServiceServer;
use crate::service::NsoGateway;

/// Load the gateway's certificate and private key.
async fn load_identity(config: &ServerConfig) -> Result<Identity, CliError> {
    let cert = read_pem("certificate", &config.tls_cert).await?;
    let key = read_pem("private key", &config.tls_key).await?;
    Ok(Identity::from_pem(cert, key))
}

async fn read_pem(kind: &'static str, path: &Path) -> Result<Vec<u8>, CliError> {
    tokio::fs::read(path)
        .await
        .map_err(|source| CliError::TlsMaterial {
            kind,
            path: path.to_path_buf(),
            source,
        })
}

/// Server builder with the `NSOService` mounted.
fn router(mut builder: Server, gateway: Gateway) -> Router {
    builder.add_service(NsoServiceServer::new(NsoGateway::new(gateway)))
}

/// Serve `gateway` on `config.listen_addr` until interrupted.
pub async fn serve(
    gateway: Gateway,
    config: &ServerConfig,
    plaintext: bool,
) -> Result<(), CliError> {
    let mut builder = Server::builder();

    if plaintext {
        warn!("serving without TLS; tokens travel in cleartext");
    } else {
        let identity = load_identity(config).await?;
        builder = builder
            .tls_config(ServerTlsConfig::new().identity(identity))
            .map_err(CliError::TlsIdentity)?;
    }

    let addr = config.listen_addr;
    info!(%addr, tls = !plaintext, "starting gRPC server");

    router(builder, gateway)
        .serve_with_shutdown(addr, shutdown_signal())
        .await
        .map_err(|source| CliError::Serve { addr, source })?;

    info!("gRPC server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("could not listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
