//! OS package installation for the typewriter's runtime dependencies.
//!
//! The package list is fixed: it names the Debian packages the typewriter
//! application imports at runtime (PIL for rendering, evdev for the USB
//! keyboard, spidev/gpiod for the e-paper panel, DejaVu as the fallback
//! font). `apt-get install` treats already-installed packages as success,
//! which is what makes a full re-run of the provisioner safe.

use crate::command;
use crate::error::Result;
use tracing::info;

/// Debian packages required by the typewriter application.
pub const PACKAGES: &[&str] = &[
    "python3",
    "python3-pil",
    "python3-evdev",
    "python3-spidev",
    "python3-libgpiod",
    "fonts-dejavu-core",
];

/// Refresh the package index and install all required packages.
///
/// Fails fast: the first non-zero exit from apt-get aborts the whole run.
/// Nothing installed so far is removed; re-running the provisioner picks
/// up where apt left off.
pub fn install_all() -> Result<()> {
    info!("installing {} packages: {:?}", PACKAGES.len(), PACKAGES);

    command::run_checked("apt-get", &["update"])?;

    let mut args = vec!["install", "-y"];
    args.extend_from_slice(PACKAGES);
    command::run_checked("apt-get", &args)?;

    info!("package installation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_list_nonempty() {
        assert!(!PACKAGES.is_empty());
    }

    #[test]
    fn test_package_list_has_runtime_deps() {
        assert!(PACKAGES.contains(&"python3-pil"));
        assert!(PACKAGES.contains(&"python3-evdev"));
    }

    #[test]
    fn test_package_names_are_valid() {
        // Debian package names: lowercase alphanumerics plus - . +
        for pkg in PACKAGES {
            assert!(
                pkg.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "-.+".contains(c)),
                "invalid package name: {pkg}"
            );
        }
    }
}
