//! uninstall 命令 - 按清单删除文件

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use super::ManifestArgs;
use crate::modules::cleaner;
use crate::modules::cleaner::models::{EntryOutcome, EntryStatus, UninstallSummary};
use crate::modules::common::error::UninstallerError;
use crate::modules::common::utils;
use crate::modules::manifest::models::{InstallManifest, UninstallConfig};
use crate::modules::reporter;
use crate::modules::reporter::models::{ReportFormat, UninstallReport};

#[derive(Parser, Debug)]
pub struct UninstallCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// 删除前先检查全部条目，有任何一个不可删除则不删除任何文件
    #[arg(long)]
    pub preflight: bool,

    /// 报告输出路径
    #[arg(long)]
    pub report: Option<String>,

    /// 报告格式
    #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
    pub report_format: ReportFormat,
}

pub async fn execute(cmd: UninstallCommand) -> Result<()> {
    let config = cmd.manifest.to_config();

    println!("=== 按清单卸载: {} ===", config.manifest_path.display());
    if !config.dest_root.is_empty() {
        println!("  目标根: {}", config.dest_root.to_string_lossy());
    }
    println!();

    let mut report = UninstallReport::new(&config);
    let result = run(&config, cmd.preflight, &mut report);
    let report = report.finish(&result);

    // 清单缺失、预检查失败也要留下报告
    if let Some(report_path) = &cmd.report {
        if let Err(e) = write_report(&report, Path::new(report_path), cmd.report_format).await {
            // 卸载本身的错误优先于报告写入失败
            if result.is_ok() {
                return Err(e);
            }
            tracing::error!("写入报告失败: {}", e);
        }
    }

    let summary = result?;

    println!("\n--- 卸载完成 ---");
    println!("  条目: {}", summary.total);
    println!("  已删除: {}", summary.removed);
    println!("  不存在: {}", summary.absent);
    println!("  释放空间: {}", utils::format_size(summary.bytes_freed));

    Ok(())
}

fn run(
    config: &UninstallConfig,
    preflight: bool,
    report: &mut UninstallReport,
) -> Result<UninstallSummary, UninstallerError> {
    // 清单不存在时在这里失败，不会删除任何文件
    let manifest = InstallManifest::load(&config.manifest_path)?;
    tracing::info!(
        "卸载清单 {} ({} 个条目)",
        config.manifest_path.display(),
        manifest.len()
    );

    if manifest.is_empty() {
        println!("清单为空，没有需要删除的文件");
    }

    if preflight {
        let plan = cleaner::preflight(config, &manifest)?;
        println!(
            "预检查通过: {} 个待删除, {} 个不存在\n",
            plan.to_remove(),
            plan.absent()
        );
    }

    cleaner::uninstall_manifest(config, &manifest, |outcome| {
        print_status(outcome);
        report.push(outcome);
    })
}

fn print_status(outcome: &EntryOutcome) {
    match &outcome.status {
        EntryStatus::Removed { .. } => {
            println!("-- 已卸载: {}", outcome.path.display());
        }
        EntryStatus::Absent => {
            println!("-- 文件不存在: {}", outcome.path.display());
        }
        EntryStatus::Failed { error } => {
            println!("-- 删除失败: {} ({})", outcome.path.display(), error);
        }
    }
}

async fn write_report(report: &UninstallReport, path: &Path, format: ReportFormat) -> Result<()> {
    let content = reporter::render(report, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, content).await?;

    println!("\n报告已生成: {}", path.display());
    Ok(())
}
