//! The provisioning run: a linear, fail-fast sequence of steps.
//!
//! # Stage Flow
//!
//! ```text
//! Start
//!   ↓
//! DepsInstalled
//!   ↓
//! DirReady
//!   ↓
//! ServiceInstalled | ServiceSkipped
//!   ↓
//! Done
//! ```
//!
//! Stages only move forward; there are no retries and no rollback. A
//! failed step leaves everything completed so far in place, and the whole
//! run is cheap to repeat.
//!
//! The side-effecting steps sit behind [`ProvisionOps`] so the run's
//! ordering, fail-fast behavior and prompt gating can be exercised without
//! touching apt or systemd; [`SystemOps`] is the real implementation the
//! binary uses.

use crate::error::Result;
use crate::{packages, paths, prompt, service};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

const SERVICE_QUESTION: &str = "Install etyper as a systemd service (starts on boot)?";

/// Stages of a provisioning run, in sequential order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Nothing done yet
    Start,
    /// OS packages installed
    DepsInstalled,
    /// Documents directory exists
    DirReady,
    /// Unit written and enabled
    ServiceInstalled,
    /// Operator declined the service
    ServiceSkipped,
    /// Run complete (terminal state)
    Done,
}

impl Stage {
    /// Stages reachable directly from this one.
    pub fn next(self) -> &'static [Stage] {
        match self {
            Self::Start => &[Self::DepsInstalled],
            Self::DepsInstalled => &[Self::DirReady],
            Self::DirReady => &[Self::ServiceInstalled, Self::ServiceSkipped],
            Self::ServiceInstalled | Self::ServiceSkipped => &[Self::Done],
            Self::Done => &[],
        }
    }

    /// Returns true if the run has finished.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

fn advance(from: Stage, to: Stage) -> Stage {
    debug_assert!(from.next().contains(&to), "invalid transition {from:?} -> {to:?}");
    debug!("stage: {from:?} -> {to:?}");
    to
}

/// The side-effecting steps of a run.
pub trait ProvisionOps {
    /// Install the typewriter's OS packages.
    fn install_packages(&mut self) -> Result<()>;

    /// Resolve the documents directory location (not created here).
    fn docs_dir(&mut self) -> Result<PathBuf>;

    /// Write, register and enable the systemd unit.
    fn install_service(&mut self) -> Result<()>;
}

/// Real steps against the host: apt-get, `$HOME`, systemd.
pub struct SystemOps;

impl ProvisionOps for SystemOps {
    fn install_packages(&mut self) -> Result<()> {
        packages::install_all()
    }

    fn docs_dir(&mut self) -> Result<PathBuf> {
        paths::docs_dir()
    }

    fn install_service(&mut self) -> Result<()> {
        let dir = service::install_dir()?;
        service::install(&dir)
    }
}

/// Execute a full provisioning run.
///
/// `input`/`out` carry the confirmation prompt and the final summary;
/// package-manager and systemctl output goes straight to the inherited
/// terminal. Returns on the first failing step.
pub fn run<O: ProvisionOps, R: BufRead, W: Write>(
    ops: &mut O,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut stage = Stage::Start;

    ops.install_packages()?;
    stage = advance(stage, Stage::DepsInstalled);

    let docs = ops.docs_dir()?;
    paths::ensure_dir(&docs)?;
    stage = advance(stage, Stage::DirReady);

    let install_service = prompt::confirm_from(input, out, SERVICE_QUESTION)?;
    if install_service {
        ops.install_service()?;
        stage = advance(stage, Stage::ServiceInstalled);
    } else {
        stage = advance(stage, Stage::ServiceSkipped);
    }

    writeln!(out)?;
    writeln!(out, "Setup complete.")?;
    writeln!(out, "Documents directory: {}", docs.display())?;
    if install_service {
        writeln!(out, "Service enabled. Useful commands:")?;
        writeln!(out, "  sudo systemctl start {}", service::SERVICE_NAME)?;
        writeln!(out, "  sudo systemctl stop {}", service::SERVICE_NAME)?;
        writeln!(out, "  sudo journalctl -u {} -f", service::SERVICE_NAME)?;
    } else {
        writeln!(
            out,
            "Run manually from the install directory: sudo python3 typewriter.py"
        )?;
    }

    let stage = advance(stage, Stage::Done);
    debug_assert!(stage.is_terminal());
    Ok(())
}
