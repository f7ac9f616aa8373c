//! etyper provisioner library
//!
//! Core functionality for setting up the etyper e-paper typewriter on a
//! Debian-family host: OS package installation, documents directory
//! creation, and optional systemd service registration.

pub mod cli;
pub mod command;
pub mod error;
pub mod packages;
pub mod paths;
pub mod prompt;
pub mod provision;
pub mod service;

// Re-export main types for convenience
pub use error::{ProvisionError, Result};
pub use provision::{run, ProvisionOps, Stage, SystemOps};
pub use service::{render_unit, INSTALL_DIR_TOKEN, SERVICE_NAME, UNIT_INSTALL_PATH};
