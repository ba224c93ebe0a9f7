use enum_dispatch::enum_dispatch;
use gummiboot::GummibootExtension;

use crate::cfg::BootConfig;
use crate::extension::{Availability, BootExtension, ExtensionError};

pub mod gummiboot;

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Extension {
    GummibootExtension,
}

/// Build the extension selected by `[boot] generate`.
///
/// # Errors
/// - the configured loader has no extension
/// - the configuration cannot be used by the extension
pub fn get_extension(config: &BootConfig) -> Result<Extension, ExtensionError> {
    get_extension_by_name(&config.boot.generate, config)
}

/// # Errors
/// - `name` does not match any known loader
/// - the configuration cannot be used by the extension
#[tracing::instrument(skip(config))]
pub fn get_extension_by_name(name: &str, config: &BootConfig) -> Result<Extension, ExtensionError> {
    match name.to_ascii_lowercase().as_str() {
        "gummiboot" | "systemd-boot" => Ok(GummibootExtension::new(config.clone())?.into()),
        _ => Err(ExtensionError::UnknownLoader(name.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_extension() {
        let cfg = BootConfig::default();
        assert_eq!(get_extension(&cfg).unwrap().name(), "gummiboot");
        assert_eq!(
            get_extension_by_name("systemd-boot", &cfg).unwrap().name(),
            "gummiboot"
        );
        assert_eq!(
            get_extension_by_name("Gummiboot", &cfg).unwrap().name(),
            "gummiboot"
        );
    }

    #[test]
    fn test_unknown_loader() {
        let mut cfg = BootConfig::default();
        cfg.boot.generate = "lilo".into();
        assert!(matches!(
            get_extension(&cfg),
            Err(ExtensionError::UnknownLoader(name)) if name == "lilo"
        ));
    }
}
