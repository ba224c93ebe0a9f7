#![warn(rust_2018_idioms)]
//! Boot manager extension for gummiboot (systemd-boot).
//!
//! The host boot manager asks each extension whether its bootloader can be used on the
//! running system before it picks one. This crate answers that question for gummiboot.

pub mod cfg;
pub mod consts;
// must come before `extensions` so `enum_dispatch` sees the trait first
pub mod extension;
pub mod extensions;
pub mod util;

pub use cfg::BootConfig;
pub use extension::{Availability, BootExtension, ExtensionError, Message, Severity};
pub use extensions::{get_extension, get_extension_by_name, Extension};
