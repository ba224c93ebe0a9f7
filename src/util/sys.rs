use std::path::Path;

use crate::consts::EFI_FIRMWARE_DIR;

/// Check if the system under `root` is UEFI or not.
///
/// Simply checks for the existence of the `/sys/firmware/efi` directory.
///
/// False negatives are possible if the system is booted in BIOS mode and the UEFI variables are not exposed.
pub fn check_uefi(root: &Path) -> bool {
    super::fs::exists(super::fs::rooted(root, EFI_FIRMWARE_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_uefi() {
        let root = tempfile::tempdir().unwrap();
        assert!(!check_uefi(root.path()));
        std::fs::create_dir_all(root.path().join("sys/firmware/efi")).unwrap();
        assert!(check_uefi(root.path()));
    }
}
