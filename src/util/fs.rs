use std::path::{Path, PathBuf};

/// Resolve an absolute `path` inside `root`, i.e. `/mnt` + `/boot/loader` -> `/mnt/boot/loader`.
pub fn rooted<P: AsRef<Path>>(root: &Path, path: P) -> PathBuf {
    let path = path.as_ref();
    root.join(path.strip_prefix("/").unwrap_or(path))
}

/// Like [`Path::exists`], any error while stat'ing counts as nonexistent.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    std::fs::metadata(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooted() {
        assert_eq!(
            rooted(Path::new("/mnt/sysimage"), "/boot/loader"),
            PathBuf::from("/mnt/sysimage/boot/loader")
        );
        assert_eq!(rooted(Path::new("/"), "/boot"), PathBuf::from("/boot"));
        assert_eq!(rooted(Path::new("/mnt"), "boot"), PathBuf::from("/mnt/boot"));
    }
}
