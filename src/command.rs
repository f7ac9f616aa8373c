//! Checked execution of external system commands.
//!
//! This is the only sanctioned way the provisioner invokes `apt-get` and
//! `systemctl`. Stdio is inherited so the external tool's own diagnostics
//! reach the terminal unmodified; the provisioner adds nothing beyond a
//! log line and the exit-code check.

use anyhow::{Context, Result};
use std::process::Command;
use tracing::info;

/// Run an external command to completion and fail on non-zero exit.
///
/// The child inherits stdin/stdout/stderr, so interactive output and error
/// diagnostics from the tool itself are what the operator sees. Returns an
/// error if the command cannot be spawned (e.g. binary not in PATH) or
/// exits non-zero.
pub fn run_checked(program: &str, args: &[&str]) -> Result<()> {
    info!("running: {} {}", program, args.join(" "));

    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("failed to run {program} (is it installed?)"))?;

    if status.success() {
        Ok(())
    } else {
        // None when terminated by signal
        let code = status.code().unwrap_or(-1);
        anyhow::bail!("{program} exited with code {code}")
    }
}
