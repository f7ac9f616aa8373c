//! etyper provisioner - main entry point

use etyper_provision::cli::Cli;
use etyper_provision::provision;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging; RUST_LOG overrides the default level.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let _cli = Cli::parse_args();
    info!("etyper provisioner starting");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    // Alternate formatting prints the full context chain for command errors.
    if let Err(e) = provision::run(&mut provision::SystemOps, &mut input, &mut out) {
        error!("provisioning failed: {e:#}");
        eprintln!("etyper-provision: {e:#}");
        std::process::exit(1);
    }
}
