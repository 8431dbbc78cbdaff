//! 图核心模块
//!
//! 定义顶点、路线、边和多重图的核心数据结构

mod edge;
mod multigraph;
mod route;
mod vertex;

pub use edge::Edge;
pub use multigraph::Multigraph;
pub use route::Route;
pub use vertex::VertexId;
