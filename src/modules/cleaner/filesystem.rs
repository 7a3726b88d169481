use std::path::Path;

/// 删除单个清单条目（文件或符号链接，不跟随链接）
///
/// 返回 `Ok(None)` 表示路径不存在，`Ok(Some(bytes))` 表示已删除。
pub fn remove_entry(path: &Path) -> std::io::Result<Option<u64>> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if is_absent(&e) => return Ok(None),
        Err(e) => return Err(e),
    };

    let bytes_freed = if metadata.file_type().is_symlink() {
        0
    } else {
        metadata.len()
    };

    // 目录不是合法条目，remove_file 会直接报错
    std::fs::remove_file(path)?;
    tracing::debug!("unlink {} ({} bytes)", path.display(), bytes_freed);

    Ok(Some(bytes_freed))
}

/// 路径不存在：找不到，或中间某一级是普通文件
pub(crate) fn is_absent(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("libfoo.so");
        std::fs::write(&path, b"0123456789").unwrap();

        assert_eq!(remove_entry(&path).unwrap(), Some(10));
        assert!(!path.exists());
    }

    #[test]
    fn test_remove_missing_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(remove_entry(&temp.path().join("nope")).unwrap(), None);
    }

    #[test]
    fn test_remove_below_regular_file_is_absent() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.so");
        std::fs::write(&file, b"elf").unwrap();

        assert_eq!(remove_entry(&file.join("b")).unwrap(), None);
        assert!(file.exists());
    }

    #[test]
    fn test_remove_directory_fails() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("include");
        std::fs::create_dir(&dir).unwrap();

        assert!(remove_entry(&dir).is_err());
        assert!(dir.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_symlink_keeps_target() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("libfoo.so.1.0");
        let link = temp.path().join("libfoo.so");
        std::fs::write(&target, b"elf").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(remove_entry(&link).unwrap(), Some(0));
        assert!(std::fs::symlink_metadata(&link).is_err());
        assert!(target.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_dangling_symlink() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("libgone.so");
        std::os::unix::fs::symlink(temp.path().join("missing"), &link).unwrap();

        assert_eq!(remove_entry(&link).unwrap(), Some(0));
        assert!(std::fs::symlink_metadata(&link).is_err());
    }
}
