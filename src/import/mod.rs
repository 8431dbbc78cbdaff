//! 棋盘导入模块
//!
//! 从 CSV 或 JSON 文件读取路线列表并构建多重图

use crate::error::{Error, Result};
use crate::graph::{Edge, Multigraph, Route, VertexId};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// 棋盘文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BoardFormat {
    /// `from,to,route,length` 表格
    Csv,
    /// `{ "vertices": [...], "routes": [...] }`
    Json,
}

impl BoardFormat {
    /// 按扩展名推断格式，默认 CSV
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// 一条路线记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub from: u64,
    pub to: u64,
    /// 路线名称；缺省时边不带路线，权重为 1
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub length: Option<u32>,
}

/// JSON 棋盘文件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardFile {
    /// 额外的（可能孤立的）城市
    #[serde(default)]
    pub vertices: Vec<u64>,
    pub routes: Vec<RouteRecord>,
}

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    /// 与已有边相等而被忽略的记录
    pub duplicates: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 棋盘导入器
#[derive(Debug, Default, Clone)]
pub struct BoardImporter {
    /// 严格模式下第一条错误记录即终止导入
    strict: bool,
}

impl BoardImporter {
    /// 创建导入器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置严格模式
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// 按格式从文件导入
    pub fn import_file<P: AsRef<Path>>(
        &self,
        path: P,
        format: BoardFormat,
    ) -> Result<(Multigraph, ImportStats)> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        match format {
            BoardFormat::Csv => self.import_csv(reader),
            BoardFormat::Json => self.import_json(reader),
        }
    }

    /// 从 CSV 导入（带表头 `from,to,route,length`）
    pub fn import_csv<R: Read>(&self, reader: R) -> Result<(Multigraph, ImportStats)> {
        let start = std::time::Instant::now();
        let mut graph = Multigraph::new();
        let mut stats = ImportStats::default();

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (line, row) in csv_reader.deserialize::<RouteRecord>().enumerate() {
            let outcome = row
                .map_err(Error::from)
                .and_then(|record| self.import_record(&mut graph, &record, &mut stats));
            if let Err(err) = outcome {
                self.record_error(line + 2, err, &mut stats)?;
            }
        }

        stats.vertices_imported = graph.vertex_count();
        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(?stats, "CSV 棋盘导入完成");
        Ok((graph, stats))
    }

    /// 从 JSON 导入
    pub fn import_json<R: Read>(&self, reader: R) -> Result<(Multigraph, ImportStats)> {
        let start = std::time::Instant::now();
        let board: BoardFile = serde_json::from_reader(reader)?;
        let mut graph = Multigraph::new();
        let mut stats = ImportStats::default();

        for id in &board.vertices {
            graph.add_vertex(VertexId::new(*id));
        }
        for (index, record) in board.routes.iter().enumerate() {
            if let Err(err) = self.import_record(&mut graph, record, &mut stats) {
                self.record_error(index + 1, err, &mut stats)?;
            }
        }

        stats.vertices_imported = graph.vertex_count();
        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(?stats, "JSON 棋盘导入完成");
        Ok((graph, stats))
    }

    /// 校验并插入单条路线
    fn import_record(
        &self,
        graph: &mut Multigraph,
        record: &RouteRecord,
        stats: &mut ImportStats,
    ) -> Result<()> {
        let route = match (&record.route, record.length) {
            (Some(name), length) => Some(Arc::new(Route::new(name.clone(), length.unwrap_or(1)))),
            (None, Some(length)) => {
                return Err(Error::ImportError(format!(
                    "路线 {}-{} 给出了长度 {} 但没有名称",
                    record.from, record.to, length
                )))
            }
            (None, None) => None,
        };

        let edge = Edge::checked(VertexId::new(record.from), VertexId::new(record.to), route)?;
        if graph.edge_exists(&edge) {
            stats.duplicates += 1;
            return Ok(());
        }

        graph.add_edge(edge);
        stats.edges_imported += 1;
        Ok(())
    }

    fn record_error(&self, position: usize, err: Error, stats: &mut ImportStats) -> Result<()> {
        if self.strict {
            return Err(Error::ImportError(format!("第 {} 条记录: {}", position, err)));
        }
        warn!(position, error = %err, "跳过无效路线记录");
        stats.errors += 1;
        Ok(())
    }
}
