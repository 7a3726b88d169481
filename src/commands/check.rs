//! check 命令 - 只做预检查，不删除

use anyhow::Result;
use clap::Parser;

use super::ManifestArgs;
use crate::modules::cleaner::{self, models::PreflightReport};
use crate::modules::manifest::models::InstallManifest;

#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// 输出格式 (table/json)
    #[arg(long, default_value = "table")]
    pub format: String,
}

pub async fn execute(cmd: CheckCommand) -> Result<()> {
    let config = cmd.manifest.to_config();
    let manifest = InstallManifest::load(&config.manifest_path)?;

    tracing::info!("预检查清单 {}", config.manifest_path.display());
    let plan = cleaner::preflight(&config, &manifest)?;

    match cmd.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        _ => {
            print_plan(&plan);
        }
    }

    Ok(())
}

fn print_plan(plan: &PreflightReport) {
    println!("=== 预检查 (不会修改任何文件) ===\n");

    for entry in &plan.entries {
        let action = if entry.exists { "删除" } else { "跳过" };
        println!("  [{:>4}] {}  {}", entry.index, action, entry.path.display());
    }

    println!(
        "\n共 {} 项: {} 个待删除, {} 个不存在",
        plan.entries.len(),
        plan.to_remove(),
        plan.absent()
    );
    println!("使用 uninstall 命令执行删除");
}
