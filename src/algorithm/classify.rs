//! 结构分类
//!
//! 简单图、完全图、链、环、森林、树等判定。所有判定都是全函数，
//! 对空图和含孤立顶点的图同样有定义

use super::connectivity::ConnectivityAnalyzer;
use crate::graph::{Edge, Multigraph, VertexId};
use std::collections::HashSet;

/// 结构分类器
pub struct StructuralClassifier<'a> {
    graph: &'a Multigraph,
}

impl<'a> StructuralClassifier<'a> {
    /// 创建分类器
    pub fn new(graph: &'a Multigraph) -> Self {
        Self { graph }
    }

    fn connectivity(&self) -> ConnectivityAnalyzer<'a> {
        ConnectivityAnalyzer::new(self.graph)
    }

    /// 没有自环，且任意两个不同顶点之间至多一条边
    pub fn is_simple(&self) -> bool {
        self.graph.vertices().all(|v| {
            let incident = self.graph.incident_edges(v).count();
            let neighbors = self.graph.neighbors(v);
            !neighbors.contains(&v) && incident == neighbors.len()
        })
    }

    /// 每个顶点的度数都等于 n - 1
    pub fn is_complete(&self) -> bool {
        let target = self.graph.vertex_count().saturating_sub(1);
        self.graph.vertices().all(|v| self.graph.degree(v) == target)
    }

    /// 连通、无环，且至多两个度为 1 的顶点；空图约定为链
    pub fn is_chain(&self) -> bool {
        if self.graph.vertex_count() == 0 {
            return true;
        }
        let leaves = self
            .graph
            .vertices()
            .filter(|v| self.graph.degree(*v) == 1)
            .count();
        self.is_tree() && leaves <= 2
    }

    /// 非空、简单、连通，且每个顶点度数恰为 2
    ///
    /// 两个顶点之间的两条平行边不构成环。
    pub fn is_cycle(&self) -> bool {
        self.graph.vertex_count() > 0
            && self.is_simple()
            && self.graph.vertices().all(|v| self.graph.degree(v) == 2)
            && self.connectivity().is_connected()
    }

    /// 每个连通类导出的子图都满足 边数 = 顶点数 - 1；空图是森林
    pub fn is_forest(&self) -> bool {
        self.connectivity()
            .all_connected_classes()
            .into_iter()
            .all(|class| {
                let size = class.len();
                let component = Multigraph::induced_subgraph(self.graph, class);
                component.edge_count() + 1 == size
            })
    }

    /// 非空、连通的森林
    pub fn is_tree(&self) -> bool {
        self.graph.vertex_count() > 0 && self.connectivity().is_connected() && self.is_forest()
    }

    /// 是否含环（平行边与自环都算环）
    ///
    /// 显式工作栈保存 (顶点, 到达它的边)，只持有一个已访问集合。
    pub fn has_cycle(&self) -> bool {
        let mut visited: HashSet<VertexId> = HashSet::new();

        for root in self.graph.vertices() {
            if visited.contains(&root) {
                continue;
            }

            let mut stack: Vec<(VertexId, Option<&Edge>)> = vec![(root, None)];
            while let Some((u, via)) = stack.pop() {
                if !visited.insert(u) {
                    return true;
                }
                for edge in self.graph.incident_edges(u) {
                    if via == Some(edge) {
                        continue;
                    }
                    let w = edge.other_end(u);
                    if visited.contains(&w) {
                        return true;
                    }
                    stack.push((w, Some(edge)));
                }
            }
        }

        false
    }
}
