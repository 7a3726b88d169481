//! 安装清单读取
//!
//! 清单是安装步骤生成的纯文本文件，每行一个绝对路径，
//! 只以 `\n` 分隔，不做引号或转义处理。

pub mod models;

use crate::modules::common::error::UninstallerError;
use models::InstallManifest;
use std::path::Path;

impl InstallManifest {
    /// 读取并解析清单文件
    pub fn load(path: &Path) -> Result<Self, UninstallerError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(UninstallerError::ManifestNotFound(path.to_path_buf()));
            }
            Err(e) => {
                return Err(UninstallerError::ManifestRead {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let manifest = Self::parse(path, &content);
        tracing::debug!(
            "读取清单 {}: {} 个条目",
            path.display(),
            manifest.entries.len()
        );

        Ok(manifest)
    }

    /// 按换行拆分清单内容，忽略空条目
    pub fn parse(source: &Path, content: &str) -> Self {
        let entries = content
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            source: source.to_path_buf(),
            entries,
        }
    }
}
