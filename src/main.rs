use anyhow::Result;
use clap::Parser;
use std::process;

use rust_yu_manifest_lib::commands;
use rust_yu_manifest_lib::modules;

#[derive(Parser, Debug)]
#[command(name = "rust-yu-manifest")]
#[command(about = "按安装清单卸载文件的命令行工具", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行参数 (DESTDIR 也在这里读取)
    let cli = Cli::parse();

    // 初始化日志
    modules::common::logging::init_logging(cli.verbose);

    // 执行命令
    let result = match cli.command {
        commands::Command::Uninstall(cmd) => commands::uninstall::execute(cmd).await,
        commands::Command::Check(cmd) => commands::check::execute(cmd).await,
        commands::Command::List(cmd) => commands::list::execute(cmd).await,
    };

    if let Err(e) = result {
        if cli.verbose {
            tracing::error!("错误: {}", e);
        } else {
            eprintln!("错误: {}", e);
        }
        process::exit(1);
    }

    Ok(())
}
