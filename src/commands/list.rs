use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use super::ManifestArgs;
use crate::modules::common::utils;
use crate::modules::manifest::models::InstallManifest;

#[derive(Parser, Debug)]
pub struct ListCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// 输出格式 (table/json)
    #[arg(long, default_value = "table")]
    pub format: String,

    /// 只显示仍然存在的文件
    #[arg(long)]
    pub existing: bool,
}

#[derive(Debug, Serialize)]
struct ListedEntry {
    index: usize,
    entry: String,
    path: PathBuf,
    exists: bool,
}

pub async fn execute(cmd: ListCommand) -> Result<()> {
    let config = cmd.manifest.to_config();
    let manifest = InstallManifest::load(&config.manifest_path)?;
    tracing::debug!("列出清单 {}", config.manifest_path.display());

    let entries: Vec<ListedEntry> = manifest
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let path = config.resolve(entry);
            ListedEntry {
                index: i + 1,
                entry: entry.clone(),
                exists: utils::path_exists_no_follow(&path),
                path,
            }
        })
        .filter(|e| !cmd.existing || e.exists)
        .collect();

    match cmd.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        _ => {
            print_table(&entries);
        }
    }

    Ok(())
}

fn print_table(entries: &[ListedEntry]) {
    println!("\n{}", "=".repeat(90));
    println!("{:<6} {:<8} {:<74}", "序号", "状态", "路径");
    println!("{}", "=".repeat(90));

    for e in entries {
        let state = if e.exists { "存在" } else { "不存在" };
        println!(
            "{:<6} {:<8} {:<74}",
            e.index,
            state,
            utils::truncate_path(&e.path.to_string_lossy(), 74)
        );
    }

    println!("{}", "=".repeat(90));
    let existing = entries.iter().filter(|e| e.exists).count();
    println!("总计: {} 个条目, {} 个存在\n", entries.len(), existing);
}
