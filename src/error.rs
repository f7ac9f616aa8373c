//! Error handling for the provisioner.
//!
//! Provides centralized error types using thiserror. Every step of a run
//! reports through these so the binary can exit non-zero on the first
//! failure without any cleanup or retry logic.

use thiserror::Error;

/// Main error type for the provisioner.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// IO errors (file operations, terminal reads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// External command failures (apt-get, systemctl), carried with the
    /// full anyhow context chain so the underlying cause survives.
    #[error(transparent)]
    Command(#[from] anyhow::Error),

    /// Service registration failures (privilege check, unit write)
    #[error("Service installation failed: {0}")]
    Service(String),

    /// Unit template problems (missing file, unresolvable install path)
    #[error("Unit template error: {0}")]
    Template(String),

    /// Host environment problems (no home directory, bad executable path)
    #[error("Environment error: {0}")]
    Environment(String),
}

/// Result type alias for provisioning operations
pub type Result<T> = std::result::Result<T, ProvisionError>;

impl ProvisionError {
    /// Create a service installation error
    pub fn service(msg: impl std::fmt::Display) -> Self {
        Self::Service(msg.to_string())
    }

    /// Create a unit template error
    pub fn template(msg: impl std::fmt::Display) -> Self {
        Self::Template(msg.to_string())
    }

    /// Create an environment error
    pub fn environment(msg: impl std::fmt::Display) -> Self {
        Self::Environment(msg.to_string())
    }
}
