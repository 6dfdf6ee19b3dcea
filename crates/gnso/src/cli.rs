//! Clap derive structures for the `gnso` server.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// gnso -- gRPC front end for Cisco NSO
#[derive(Debug, Parser)]
#[command(
    name = "gnso",
    version,
    about = "gRPC gateway that forwards calls to Cisco NSO over RESTCONF",
    long_about = "Serves the NSOService gRPC API and translates every call into a\n\
        single RESTCONF request against an NSO controller.\n\n\
        The controller is configured with NSO_URL, NSO_USERNAME and\n\
        NSO_PASSWORD. Set TOKEN to require a shared token on every call,\n\
        and PORT to change the listening port (default 50051)."
)]
pub struct Cli {
    /// Settings file (TOML); environment variables override it
    #[arg(long, short = 'c', env = "GNSO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Serve without TLS (local testing only)
    #[arg(long, env = "GNSO_PLAINTEXT")]
    pub plaintext: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
