//! RouteGraph 命令行工具
//!
//! 加载棋盘并执行一条分析命令

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use routegraph::cli::{execute, CliConfig};
use routegraph::import::BoardImporter;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .init();

    let format = config.board_format();
    let (graph, stats) = BoardImporter::new()
        .with_strict(config.strict)
        .import_file(&config.board, format)
        .with_context(|| format!("无法加载棋盘 {}", config.board.display()))?;

    tracing::info!(
        board = %config.board.display(),
        ?format,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        skipped = stats.errors,
        duplicates = stats.duplicates,
        elapsed_ms = stats.duration_ms,
        "棋盘已加载"
    );
    if stats.errors > 0 {
        eprintln!(
            "{}",
            format!("警告: 跳过了 {} 条无效路线记录", stats.errors).yellow()
        );
    }

    let output = execute(&config.command, &graph, &config.printer())
        .context("命令执行失败")?;
    print!("{}", output);

    Ok(())
}
