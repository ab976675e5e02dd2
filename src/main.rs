//! Page Monitor CLI
//!
//! 执行一轮网页关键词监控并发送 WhatsApp 提醒，适合由 cron 定期调用。

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "page-monitor")]
#[command(about = "Page Monitor - 检查网页是否出现关键词并发送 WhatsApp 提醒")]
#[command(version)]
struct Cli {
    /// 从指定文件加载环境变量（默认读取当前目录的 .env，如果存在）
    #[arg(long)]
    env_file: Option<PathBuf>,
    /// Dry-run 模式（只打印消息不发送）
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 日志初始化之前加载，RUST_LOG 也可以写在 .env 中
    let loaded_env = match &cli.env_file {
        Some(path) => Some(
            dotenvy::from_path(path)
                .with_context(|| format!("Cannot load env file {}", path.display()))
                .map(|_| path.clone())?,
        ),
        None => dotenvy::dotenv().ok(),
    };

    // 通过 RUST_LOG 环境变量控制日志级别，默认为 info
    // 例如: RUST_LOG=debug page-monitor --dry-run
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("page_monitor=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    if let Some(path) = loaded_env {
        debug!(path = %path.display(), "Loaded environment file");
    }

    if page_monitor::run(cli.dry_run).succeeded() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
