use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Deserialize;
use serde_valid::toml::FromTomlStr;
use serde_valid::Validate;

use crate::consts::{
    CFG_PATH_ENV, DEFAULT_BOOT_DIR, DEFAULT_CFG_PATH, DEFAULT_LOADER, DEFAULT_SYSROOT,
};

#[derive(Deserialize, Validate, Debug, Clone, PartialEq, Eq)]
pub struct Boot {
    /// Name of the bootloader extension to use
    #[serde(default = "_default_generate")]
    #[validate(min_length = 1)]
    pub generate: String,
    /// Where the boot partition is mounted on the target system
    #[serde(default = "_default_boot_dir")]
    pub boot_dir: PathBuf,
}

impl Default for Boot {
    fn default() -> Self {
        Self {
            generate: _default_generate(),
            boot_dir: _default_boot_dir(),
        }
    }
}

fn _default_generate() -> String {
    DEFAULT_LOADER.into()
}

fn _default_boot_dir() -> PathBuf {
    DEFAULT_BOOT_DIR.into()
}

#[derive(Deserialize, Validate, Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    /// Directory treated as `/` when looking up firmware and boot paths.
    #[serde(default = "_default_sysroot")]
    pub sysroot: PathBuf,
}

impl Default for Probe {
    fn default() -> Self {
        Self {
            sysroot: _default_sysroot(),
        }
    }
}

fn _default_sysroot() -> PathBuf {
    DEFAULT_SYSROOT.into()
}

#[derive(Deserialize, Validate, Default, Debug, Clone, PartialEq, Eq)]
pub struct BootConfig {
    #[serde(default)]
    #[validate]
    pub boot: Boot,
    #[serde(default)]
    #[validate]
    pub probe: Probe,
}

/// Read the configuration pointed to by `BOOTPROBE_CONFIG`, or the default path.
///
/// # Errors
/// - cannot read an explicitly requested config file
/// - the file is not valid TOML or fails validation
#[allow(clippy::module_name_repetitions)]
#[tracing::instrument]
pub fn get_cfg() -> Result<BootConfig> {
    let path = std::env::var(CFG_PATH_ENV);
    match &path {
        Err(std::env::VarError::NotUnicode(s)) => {
            tracing::error!(?s, "Cannot parse {CFG_PATH_ENV} due to invalid unicode");
            tracing::debug!("Falling back to {DEFAULT_CFG_PATH}");
        }
        Ok(p) => tracing::debug!("Using {CFG_PATH_ENV}={p}"),
        Err(std::env::VarError::NotPresent) => tracing::trace!("Using {DEFAULT_CFG_PATH}"),
    }
    load_cfg(path.ok().as_deref(), Path::new(DEFAULT_CFG_PATH))
}

/// Load `explicit` if given, otherwise `default`.
///
/// A missing file at `default` is not an error; the built-in defaults are used instead.
///
/// # Errors
/// - cannot read `explicit`, or `default` exists but cannot be read
/// - the file is not valid TOML or fails validation
pub fn load_cfg(explicit: Option<&str>, default: &Path) -> Result<BootConfig> {
    if let Some(p) = explicit {
        return read_cfg(p);
    }
    if !default.exists() {
        tracing::debug!(?default, "Config not found, using built-in defaults");
        return Ok(BootConfig::default());
    }
    read_cfg(default)
}

/// # Errors
/// - cannot read the file
/// - the file is not valid TOML or fails validation
pub fn read_cfg<P: AsRef<Path>>(path: P) -> Result<BootConfig> {
    let path = path.as_ref();
    let toml = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Cannot read config file at {path:?}"))?;
    Ok(BootConfig::from_toml_str(&toml)?)
}
