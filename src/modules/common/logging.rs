use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const APP_DIR: &str = "rust-yu-manifest";

pub fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // 创建日志目录
    let log_dir = get_log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    // 设置文件输出，目录不可写时只输出到 stderr
    let file_layer = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("rust-yu-manifest.log")
        .build(&log_dir)
        .ok()
        .map(|file_appender| {
            let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

            // 保持 guard 存活
            std::mem::forget(_guard);

            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
        });

    // 状态行由命令层打印到 stdout，stderr 只保留警告和错误
    let stderr_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "rust_yu_manifest={},rust_yu_manifest_lib={},info",
            level, level
        )))
        .with(file_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr.with_max_level(stderr_level)),
        );

    let _ = subscriber.try_init();
}

pub fn get_log_dir() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(APP_DIR)
        .join("logs")
}
