//! RouteGraph - 交通路线棋盘的加权多重图引擎
//!
//! 顶点是城市，边是带长度的候选路线，支持：
//! - 平行边（按外部路线引用区分）的多重图
//! - 连通性、桥以及链/环/树/森林等结构分类
//! - Dijkstra 最短路径与途经点拼接
//! - 回溯式同构判定

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{
    ConnectivityAnalyzer, IsomorphismChecker, PathFinder, PathResult, StructuralClassifier,
};
pub use error::{Error, Result};
pub use graph::{Edge, Multigraph, Route, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
