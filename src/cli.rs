use clap::Parser;

/// etyper provisioner - installs dependencies and optionally registers
/// the systemd service.
///
/// The run is unconditional top-to-bottom: packages, documents directory,
/// then an interactive yes/no for the service. There are no flags or
/// subcommands; clap still parses so stray arguments are rejected and
/// `--help`/`--version` work.
#[derive(Parser)]
#[command(name = "etyper-provision")]
#[command(about = "Set up the etyper e-paper typewriter on this machine")]
#[command(version)]
pub struct Cli {}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
