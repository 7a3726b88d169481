use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UninstallerError {
    #[error("找不到安装清单: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("读取安装清单失败 {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("删除失败 {}: {source}", .path.display())]
    Removal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("无法删除 {}: {reason}", .path.display())]
    NotRemovable { path: PathBuf, reason: String },

    #[error("序列化错误: {0}")]
    Serde(String),
}

impl serde::Serialize for UninstallerError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
