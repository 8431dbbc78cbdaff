//! 连通性分析
//!
//! 连通类（连通分量）、两点可达性与桥（割边）检测

use crate::graph::{Edge, Multigraph, VertexId};
use std::collections::BTreeSet;
use tracing::trace;

/// 连通性分析器
pub struct ConnectivityAnalyzer<'a> {
    graph: &'a Multigraph,
}

impl<'a> ConnectivityAnalyzer<'a> {
    /// 创建分析器
    pub fn new(graph: &'a Multigraph) -> Self {
        Self { graph }
    }

    /// 包含 v 的连通类；v 不在图中时为空
    ///
    /// 逐轮扩展前沿：每轮先对前沿做快照，再把快照中的顶点移入已访问集合，
    /// 并把它们未访问的邻居加入下一轮前沿。
    pub fn connected_class(&self, v: VertexId) -> BTreeSet<VertexId> {
        if !self.graph.contains_vertex(v) {
            return BTreeSet::new();
        }

        let mut visited = BTreeSet::from([v]);
        let mut frontier: BTreeSet<VertexId> = self
            .graph
            .neighbors(v)
            .into_iter()
            .filter(|u| *u != v)
            .collect();

        let mut round = 0usize;
        while !frontier.is_empty() {
            round += 1;
            trace!(start = %v, round, frontier = frontier.len(), "扩展前沿");

            let snapshot = std::mem::take(&mut frontier);
            visited.extend(snapshot.iter().copied());
            for u in &snapshot {
                for w in self.graph.neighbors(*u) {
                    if !visited.contains(&w) {
                        frontier.insert(w);
                    }
                }
            }
        }

        visited
    }

    /// 所有连通类（去重），按各类最小顶点排序
    pub fn all_connected_classes(&self) -> Vec<BTreeSet<VertexId>> {
        let mut classes: Vec<BTreeSet<VertexId>> = Vec::new();
        let mut seen = BTreeSet::new();

        for v in self.graph.vertices() {
            if seen.contains(&v) {
                continue;
            }
            let class = self.connected_class(v);
            seen.extend(class.iter().copied());
            classes.push(class);
        }

        classes.sort_by_key(|class| class.iter().next().copied());
        classes
    }

    /// 连通类数量
    pub fn class_count(&self) -> usize {
        self.all_connected_classes().len()
    }

    /// 图是否连通（空图与单顶点图约定为连通）
    pub fn is_connected(&self) -> bool {
        match self.graph.vertices().next() {
            None => true,
            Some(v) => self.connected_class(v).len() == self.graph.vertex_count(),
        }
    }

    /// u 与 v 是否在同一连通类中
    pub fn are_connected(&self, u: VertexId, v: VertexId) -> bool {
        self.connected_class(u).contains(&v)
    }

    /// 删除 `edge` 是否会增加连通类数量
    ///
    /// 在图的独立副本上探测，调用方的图永远不会被修改。
    pub fn is_bridge(&self, edge: &Edge) -> bool {
        if !self.graph.edge_exists(edge) {
            return false;
        }

        let before = self.class_count();
        let mut probe = self.graph.clone();
        probe.remove_edge(edge);

        ConnectivityAnalyzer::new(&probe).class_count() > before
    }

    /// 图中所有的桥
    pub fn bridges(&self) -> Vec<Edge> {
        self.graph
            .edges()
            .filter(|edge| self.is_bridge(edge))
            .cloned()
            .collect()
    }
}
