pub mod filesystem;
pub mod models;
pub mod safety;

use crate::modules::common::error::UninstallerError;
use crate::modules::manifest::models::{InstallManifest, UninstallConfig};
use models::{EntryOutcome, EntryStatus, UninstallSummary};

pub use safety::preflight;

/// 按清单卸载
///
/// 清单不存在时直接失败，不会删除任何文件。每处理一个条目都会调用
/// `on_status`；遇到第一个删除失败就停止，已删除的文件不会恢复。
pub fn uninstall<F>(
    config: &UninstallConfig,
    on_status: F,
) -> Result<UninstallSummary, UninstallerError>
where
    F: FnMut(&EntryOutcome),
{
    let manifest = InstallManifest::load(config.manifest_path())?;
    uninstall_manifest(config, &manifest, on_status)
}

/// 按已读取的清单卸载
pub fn uninstall_manifest<F>(
    config: &UninstallConfig,
    manifest: &InstallManifest,
    mut on_status: F,
) -> Result<UninstallSummary, UninstallerError>
where
    F: FnMut(&EntryOutcome),
{
    let mut summary = UninstallSummary::default();

    for (i, entry) in manifest.entries.iter().enumerate() {
        let path = config.resolve(entry);
        tracing::debug!("卸载 [{}/{}]: {}", i + 1, manifest.len(), path.display());

        let status = match filesystem::remove_entry(&path) {
            Ok(Some(bytes_freed)) => {
                tracing::info!("已删除: {}", path.display());
                EntryStatus::Removed { bytes_freed }
            }
            Ok(None) => {
                tracing::info!("文件不存在: {}", path.display());
                EntryStatus::Absent
            }
            Err(e) => {
                tracing::error!("删除失败 {}: {}", path.display(), e);

                on_status(&EntryOutcome {
                    index: i + 1,
                    entry: entry.clone(),
                    path: path.clone(),
                    status: EntryStatus::Failed {
                        error: e.to_string(),
                    },
                });

                return Err(UninstallerError::Removal { path, source: e });
            }
        };

        let outcome = EntryOutcome {
            index: i + 1,
            entry: entry.clone(),
            path,
            status,
        };
        summary.record(&outcome);
        on_status(&outcome);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_uninstall_reports_each_entry() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("stage");
        std::fs::create_dir_all(root.join("lib")).unwrap();
        std::fs::write(root.join("lib/a.so"), b"aaaa").unwrap();

        let manifest_path = temp.path().join("install_manifest.txt");
        std::fs::write(&manifest_path, "/lib/a.so\n/lib/missing.so\n").unwrap();

        let config = UninstallConfig::new(&manifest_path).with_dest_root(&root);
        let mut seen = Vec::new();
        let summary = uninstall(&config, |o| seen.push(o.clone())).unwrap();

        assert_eq!(summary.total, 2);
        assert_eq!(summary.removed, 1);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.bytes_freed, 4);
        assert!(seen[0].is_removed());
        assert!(seen[1].is_absent());
        assert_eq!(seen[1].index, 2);
    }

    #[test]
    fn test_empty_manifest_succeeds() {
        let temp = TempDir::new().unwrap();
        let manifest_path = temp.path().join("install_manifest.txt");
        std::fs::write(&manifest_path, "").unwrap();

        let config = UninstallConfig::new(&manifest_path);
        let summary = uninstall(&config, |_| panic!("no entries expected")).unwrap();
        assert_eq!(summary, UninstallSummary::default());
    }

    #[test]
    fn test_failure_reports_failed_outcome() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("dir")).unwrap();

        let manifest = InstallManifest {
            source: "m.txt".into(),
            entries: vec!["/dir".to_string()],
        };
        let config = UninstallConfig::new("m.txt").with_dest_root(temp.path());

        let mut seen = Vec::new();
        let err = uninstall_manifest(&config, &manifest, |o| seen.push(o.clone())).unwrap_err();

        assert!(matches!(err, UninstallerError::Removal { .. }));
        assert_eq!(seen.len(), 1);
        assert!(matches!(seen[0].status, EntryStatus::Failed { .. }));
    }
}
