use std::path::PathBuf;

use crate::cfg::BootConfig;
use crate::consts::{EFI_FIRMWARE_DIR, LOADER_DIR_NAME};
use crate::extension::{Availability, BootExtension, ExtensionError, Message};
use crate::util::{fs, sys::check_uefi};

/// Extension for the gummiboot (systemd-boot) UEFI boot manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GummibootExtension {
    config: BootConfig,
}

impl GummibootExtension {
    pub const NAME: &'static str = "gummiboot";

    /// # Errors
    /// - `[boot] boot_dir` or `[probe] sysroot` is not an absolute path
    pub fn new(config: BootConfig) -> Result<Self, ExtensionError> {
        for (key, path) in [
            ("boot_dir", &config.boot.boot_dir),
            ("sysroot", &config.probe.sysroot),
        ] {
            if !path.is_absolute() {
                return Err(ExtensionError::InvalidConfig(format!(
                    "{key} must be absolute, got {path:?}"
                )));
            }
        }
        Ok(Self { config })
    }

    /// `<boot_dir>/loader` as seen from the probed system.
    fn loader_dir(&self) -> PathBuf {
        self.config.boot.boot_dir.join(LOADER_DIR_NAME)
    }
}

impl BootExtension for GummibootExtension {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[tracing::instrument(skip(self), fields(sysroot = ?self.config.probe.sysroot))]
    fn is_available(&self) -> Availability {
        let sysroot = &self.config.probe.sysroot;

        if !check_uefi(sysroot) {
            tracing::warn!("{EFI_FIRMWARE_DIR} not found");
            return Availability::unavailable(Message::fatal(
                "EFI doesn't exist / not enabled on this system",
            ));
        }

        let loader_dir = self.loader_dir();
        if !fs::exists(fs::rooted(sysroot, &loader_dir)) {
            tracing::warn!(?loader_dir, "gummiboot loader directory not found");
            return Availability::unavailable(Message::fatal(format!(
                "{} does not exist; Assuming gummiboot is not installed / {} is not ESP",
                loader_dir.display(),
                self.config.boot.boot_dir.display(),
            )));
        }

        tracing::debug!(?loader_dir, "gummiboot is available");
        Availability::available()
    }
}
