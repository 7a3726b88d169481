use super::filesystem::is_absent;
use super::models::{PlannedEntry, PreflightReport};
use crate::modules::common::error::UninstallerError;
use crate::modules::manifest::models::{InstallManifest, UninstallConfig};
use std::path::Path;

/// 删除前检查所有条目，不修改文件系统
///
/// 删除一个条目需要对其父目录有写权限，这里按当前用户的实际权限检查。
pub fn preflight(
    config: &UninstallConfig,
    manifest: &InstallManifest,
) -> Result<PreflightReport, UninstallerError> {
    let mut report = PreflightReport::default();

    for (i, entry) in manifest.entries.iter().enumerate() {
        let path = config.resolve(entry);
        let exists = check_removable(&path)?;

        report.entries.push(PlannedEntry {
            index: i + 1,
            entry: entry.clone(),
            path,
            exists,
        });
    }

    tracing::debug!(
        "预检查通过: {} 个待删除, {} 个不存在",
        report.to_remove(),
        report.absent()
    );

    Ok(report)
}

/// 检查单个路径，返回是否存在
fn check_removable(path: &Path) -> Result<bool, UninstallerError> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if is_absent(&e) => return Ok(false),
        Err(e) => {
            return Err(UninstallerError::NotRemovable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };

    if metadata.is_dir() {
        return Err(UninstallerError::NotRemovable {
            path: path.to_path_buf(),
            reason: "是目录而不是文件".to_string(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        let writable = parent_writable(parent).map_err(|e| UninstallerError::NotRemovable {
            path: path.to_path_buf(),
            reason: format!("无法检查父目录: {}", e),
        })?;

        if !writable {
            return Err(UninstallerError::NotRemovable {
                path: path.to_path_buf(),
                reason: format!("没有父目录的写权限: {}", parent.display()),
            });
        }
    }

    Ok(true)
}

/// 当前用户能否在目录中删除文件
#[cfg(unix)]
fn parent_writable(dir: &Path) -> std::io::Result<bool> {
    use std::os::unix::ffi::OsStrExt;

    let c_path = std::ffi::CString::new(dir.as_os_str().as_bytes())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    if unsafe { libc::access(c_path.as_ptr(), libc::W_OK | libc::X_OK) } == 0 {
        return Ok(true);
    }

    let err = std::io::Error::last_os_error();
    match err.raw_os_error() {
        Some(libc::EACCES) | Some(libc::EROFS) => Ok(false),
        _ => Err(err),
    }
}

#[cfg(not(unix))]
fn parent_writable(dir: &Path) -> std::io::Result<bool> {
    Ok(!std::fs::metadata(dir)?.permissions().readonly())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manifest_of(entries: &[&str]) -> InstallManifest {
        InstallManifest {
            source: "install_manifest.txt".into(),
            entries: entries.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn test_preflight_plans_in_order() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("lib")).unwrap();
        std::fs::write(temp.path().join("lib/a.so"), b"a").unwrap();

        let config = UninstallConfig::new("m.txt").with_dest_root(temp.path());
        let manifest = manifest_of(&["/lib/a.so", "/lib/b.so"]);

        let report = preflight(&config, &manifest).unwrap();
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].index, 1);
        assert!(report.entries[0].exists);
        assert!(!report.entries[1].exists);
        assert_eq!(report.to_remove(), 1);
        assert_eq!(report.absent(), 1);
        assert!(temp.path().join("lib/a.so").exists());
    }

    #[test]
    fn test_preflight_below_regular_file_is_absent() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("lib")).unwrap();
        std::fs::write(temp.path().join("lib/a.so"), b"a").unwrap();

        let config = UninstallConfig::new("m.txt").with_dest_root(temp.path());
        let report = preflight(&config, &manifest_of(&["/lib/a.so/b", "/lib/a.so"])).unwrap();

        assert!(!report.entries[0].exists);
        assert!(report.entries[1].exists);
    }

    #[test]
    fn test_preflight_rejects_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("share/doc")).unwrap();

        let config = UninstallConfig::new("m.txt").with_dest_root(temp.path());
        let manifest = manifest_of(&["/share/doc"]);

        match preflight(&config, &manifest) {
            Err(UninstallerError::NotRemovable { path, .. }) => {
                assert_eq!(path, temp.path().join("share/doc"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_preflight_rejects_unwritable_parent() {
        use std::os::unix::fs::PermissionsExt;

        // root 不受权限位限制
        if unsafe { libc::geteuid() } == 0 {
            return;
        }

        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("own")).unwrap();
        std::fs::write(temp.path().join("own/a.so"), b"a").unwrap();
        let lib = temp.path().join("lib");
        std::fs::create_dir(&lib).unwrap();
        std::fs::write(lib.join("b.so"), b"b").unwrap();
        std::fs::set_permissions(&lib, std::fs::Permissions::from_mode(0o555)).unwrap();

        let config = UninstallConfig::new("m.txt").with_dest_root(temp.path());
        let result = preflight(&config, &manifest_of(&["/own/a.so", "/lib/b.so"]));

        std::fs::set_permissions(&lib, std::fs::Permissions::from_mode(0o755)).unwrap();
        match result {
            Err(UninstallerError::NotRemovable { path, .. }) => assert_eq!(path, lib.join("b.so")),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(temp.path().join("own/a.so").exists());
    }
}
