//! systemd unit generation and registration.
//!
//! The unit template ships next to the binary as `etyper.service` and
//! carries the `__INSTALL_DIR__` placeholder. Installation renders the
//! template with the resolved install directory, writes it to
//! `/etc/systemd/system/`, reloads systemd's unit definitions and enables
//! the service. The service is enabled but never started here; starting is
//! left to the operator.

use crate::command;
use crate::error::{ProvisionError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// systemd unit name for the typewriter.
pub const SERVICE_NAME: &str = "etyper.service";

/// Template file, expected alongside the installed binary.
pub const TEMPLATE_FILE: &str = "etyper.service";

/// Placeholder token substituted with the resolved install directory.
pub const INSTALL_DIR_TOKEN: &str = "__INSTALL_DIR__";

/// Canonical system location for the generated unit.
pub const UNIT_INSTALL_PATH: &str = "/etc/systemd/system/etyper.service";

/// Resolve the directory containing the running executable.
///
/// Canonicalized so the path baked into the unit survives symlinked
/// invocations.
pub fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ProvisionError::environment(format!("executable has no parent directory: {}", exe.display()))
    })
}

/// Render the unit template, replacing every placeholder occurrence with
/// the install directory.
pub fn render_unit(template: &str, install_dir: &Path) -> String {
    template.replace(INSTALL_DIR_TOKEN, &install_dir.display().to_string())
}

/// Read the template from the install directory.
fn load_template(install_dir: &Path) -> Result<String> {
    let path = install_dir.join(TEMPLATE_FILE);
    fs::read_to_string(&path).map_err(|e| {
        ProvisionError::template(format!("cannot read {}: {e}", path.display()))
    })
}

/// Install and enable the systemd service.
///
/// Overwrites any prior unit at the target path without backup. Steps
/// already completed are left in place if a later one fails.
pub fn install(install_dir: &Path) -> Result<()> {
    if !nix::unistd::geteuid().is_root() {
        return Err(ProvisionError::service(
            "root privileges required to write the systemd unit (re-run with sudo)",
        ));
    }

    let template = load_template(install_dir)?;
    let unit = render_unit(&template, install_dir);
    debug!("rendered unit:\n{unit}");

    fs::write(UNIT_INSTALL_PATH, unit).map_err(|e| {
        ProvisionError::service(format!("cannot write {UNIT_INSTALL_PATH}: {e}"))
    })?;
    info!("wrote unit file: {UNIT_INSTALL_PATH}");

    command::run_checked("systemctl", &["daemon-reload"])?;
    command::run_checked("systemctl", &["enable", SERVICE_NAME])?;

    info!("{SERVICE_NAME} enabled (not started)");
    Ok(())
}
