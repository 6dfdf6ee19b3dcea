mod cli;
mod error;
mod proto;
mod server;
mod service;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gnso_core::{Gateway, TokenAuthorizer};

use crate::cli::{Cli, LogFormat};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_format);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8, format: LogFormat) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.with_target(false).init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = gnso_config::load_settings(cli.config.as_deref())?;
    let config = gnso_config::resolve(&settings)?;

    let authorizer = TokenAuthorizer::new(config.token);
    if !authorizer.is_enabled() {
        warn!("TOKEN is not set; every request will be accepted");
    }

    let gateway = Gateway::new(&config.controller, authorizer)?;
    info!(controller = %config.controller.url, "forwarding to NSO");

    server::serve(gateway, &config.server, cli.plaintext).await
}
