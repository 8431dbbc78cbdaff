//! 图算法模块
//!
//! 连通性、结构分类、同构判定与路径查找

mod classify;
mod connectivity;
pub mod degree_sequence;
mod isomorphism;
mod path_finding;

pub use classify::StructuralClassifier;
pub use connectivity::ConnectivityAnalyzer;
pub use isomorphism::IsomorphismChecker;
pub use path_finding::{PathFinder, PathResult};
