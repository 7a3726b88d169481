use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::modules::common::utils;

/// 默认清单文件名（CMake 安装步骤的输出）
pub const DEFAULT_MANIFEST: &str = "install_manifest.txt";

/// 目标根前缀的环境变量
pub const DEST_ROOT_ENV: &str = "DESTDIR";

/// 安装清单
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallManifest {
    /// 清单文件位置
    pub source: PathBuf,
    /// 按安装顺序排列的条目
    pub entries: Vec<String>,
}

impl InstallManifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 卸载配置，调用时显式传入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallConfig {
    pub manifest_path: PathBuf,
    /// 为空表示直接卸载到系统根
    pub dest_root: OsString,
}

impl UninstallConfig {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            dest_root: OsString::new(),
        }
    }

    pub fn with_dest_root(mut self, dest_root: impl Into<OsString>) -> Self {
        self.dest_root = dest_root.into();
        self
    }

    /// 条目对应的实际路径
    pub fn resolve(&self, entry: &str) -> PathBuf {
        utils::effective_path(&self.dest_root, entry)
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }
}

impl Default for UninstallConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST)
    }
}
