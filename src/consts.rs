/// Firmware interface exposed by the kernel when booted through EFI.
pub const EFI_FIRMWARE_DIR: &str = "/sys/firmware/efi";
/// Directory holding gummiboot's `loader.conf` and entries, relative to the boot directory.
pub const LOADER_DIR_NAME: &str = "loader";
pub const DEFAULT_BOOT_DIR: &str = "/boot";
pub const DEFAULT_SYSROOT: &str = "/";
pub const DEFAULT_LOADER: &str = "gummiboot";

pub const DEFAULT_CFG_PATH: &str = "/etc/boot.toml";
pub const CFG_PATH_ENV: &str = "BOOTPROBE_CONFIG";
