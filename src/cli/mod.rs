//! 命令行界面
//!
//! 配置解析、命令分发与结果打印

mod commands;
mod printer;

pub use commands::{execute, Command};
pub use printer::{PrintMode, Printer};

use crate::import::BoardFormat;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// 默认日志过滤规则
pub const DEFAULT_LOG_FILTER: &str = "routegraph=info";

/// 命令行配置
#[derive(Parser, Debug)]
#[command(name = "routegraph-cli")]
#[command(about = "RouteGraph 棋盘路线图分析工具")]
pub struct CliConfig {
    /// 棋盘文件（CSV 或 JSON）
    #[arg(short, long)]
    pub board: PathBuf,

    /// 棋盘格式，缺省时按扩展名推断
    #[arg(short, long, value_enum)]
    pub format: Option<BoardFormat>,

    /// 严格导入：遇到无效路线记录即失败
    #[arg(long)]
    pub strict: bool,

    /// 垂直格式输出
    #[arg(short = 'G', long)]
    pub vertical: bool,

    /// 日志级别（覆盖 RUST_LOG）
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// 实际使用的棋盘格式
    pub fn board_format(&self) -> BoardFormat {
        self.format
            .unwrap_or_else(|| BoardFormat::from_path(&self.board))
    }

    /// 日志过滤器：--log-level 优先，其次 RUST_LOG，最后默认值
    pub fn log_filter(&self) -> EnvFilter {
        match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        }
    }

    pub fn printer(&self) -> Printer {
        if self.vertical {
            Printer::new(PrintMode::Vertical)
        } else {
            Printer::default()
        }
    }
}
