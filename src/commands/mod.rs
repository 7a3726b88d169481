pub mod check;
pub mod list;
pub mod uninstall;

use clap::{Args, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::modules::manifest::models::{UninstallConfig, DEFAULT_MANIFEST, DEST_ROOT_ENV};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 按安装清单删除已安装的文件
    Uninstall(uninstall::UninstallCommand),

    /// 预检查清单中的文件能否删除 (不做任何修改)
    Check(check::CheckCommand),

    /// 列出清单条目及其当前状态
    List(list::ListCommand),
}

/// 清单位置与目标根，各子命令共用
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// 安装清单路径
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// 目标根前缀，拼接在每个条目前面
    #[arg(long, env = DEST_ROOT_ENV)]
    pub dest_root: Option<OsString>,
}

impl ManifestArgs {
    pub fn to_config(&self) -> UninstallConfig {
        UninstallConfig::new(&self.manifest)
            .with_dest_root(self.dest_root.clone().unwrap_or_default())
    }
}
