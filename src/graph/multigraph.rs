//! 无向加权多重图
//!
//! 关联表：顶点 -> 关联边集合。若边 {u,v} 出现在 u 的集合中，
//! 则它也出现在 v 的集合中；所有修改操作都原子地维护这一对称性

use super::edge::Edge;
use super::route::Route;
use super::vertex::VertexId;
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 多重图
#[derive(Debug, Clone, Default)]
pub struct Multigraph {
    /// 关联表（顶点集合即其键集合）
    incidence: IndexMap<VertexId, IndexSet<Edge>>,
}

impl Multigraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建含顶点 0..n-1、没有边的图
    pub fn with_vertices(n: u64) -> Self {
        let mut graph = Self::new();
        for id in 0..n {
            graph.add_vertex(VertexId::new(id));
        }
        graph
    }

    /// 从边集合构建图，端点自动加入顶点集
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// 由顶点子集导出的子图
    ///
    /// 只复制两端都在子集中的边；子集中不属于 `graph` 的顶点被忽略。
    /// 结果独立持有自己的集合，不与 `graph` 共享任何内部状态。
    pub fn induced_subgraph<I>(graph: &Multigraph, vertices: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let keep: HashSet<VertexId> = vertices
            .into_iter()
            .filter(|v| graph.contains_vertex(*v))
            .collect();

        let mut sub = Self::new();
        for (&v, edges) in &graph.incidence {
            if !keep.contains(&v) {
                continue;
            }
            sub.add_vertex(v);
            for edge in edges {
                if keep.contains(&edge.i()) && keep.contains(&edge.j()) {
                    sub.add_edge(edge.clone());
                }
            }
        }
        sub
    }

    // ==================== 顶点操作 ====================

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.incidence.contains_key(&v)
    }

    /// 添加顶点，已存在时不做任何事
    pub fn add_vertex(&mut self, v: VertexId) {
        self.incidence.entry(v).or_default();
    }

    /// 删除顶点及其所有关联边
    pub fn remove_vertex(&mut self, v: VertexId) {
        let Some(edges) = self.incidence.shift_remove(&v) else {
            return;
        };

        for edge in &edges {
            let other = edge.other_end(v);
            if other != v {
                if let Some(set) = self.incidence.get_mut(&other) {
                    set.shift_remove(edge);
                }
            }
        }

        debug!(vertex = %v, removed_edges = edges.len(), "顶点已删除");
        self.debug_check_symmetry();
    }

    /// 顶点迭代器（按插入顺序）
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.incidence.keys().copied()
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    // ==================== 边操作 ====================

    /// 添加边，已存在相等的边时不做任何事；缺失的端点会被自动创建
    pub fn add_edge(&mut self, edge: Edge) {
        if self.edge_exists(&edge) {
            return;
        }

        let (i, j) = (edge.i(), edge.j());
        self.incidence.entry(i).or_default().insert(edge.clone());
        self.incidence.entry(j).or_default().insert(edge);

        self.debug_check_symmetry();
    }

    /// 删除边，不存在时不做任何事
    pub fn remove_edge(&mut self, edge: &Edge) {
        if !self.edge_exists(edge) {
            return;
        }

        for v in [edge.i(), edge.j()] {
            if let Some(set) = self.incidence.get_mut(&v) {
                set.shift_remove(edge);
            }
        }

        self.debug_check_symmetry();
    }

    pub fn edge_exists(&self, edge: &Edge) -> bool {
        self.incidence
            .get(&edge.i())
            .map_or(false, |set| set.contains(edge))
    }

    /// 顶点的关联边；顶点不存在时为空
    pub fn incident_edges(&self, v: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.incidence.get(&v).into_iter().flatten()
    }

    /// 每条边恰好返回一次
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.incidence.iter().flat_map(|(&v, set)| {
            set.iter()
                .filter(move |edge| edge.is_loop() || edge.endpoints().0 == v)
        })
    }

    /// 边数量
    ///
    /// 普通边在两个端点的集合中各出现一次，自环只出现一次，
    /// 因此自环按两次计入后再整体除以二。
    pub fn edge_count(&self) -> usize {
        let incidences: usize = self
            .incidence
            .values()
            .flat_map(|set| set.iter())
            .map(|edge| if edge.is_loop() { 2 } else { 1 })
            .sum();
        incidences / 2
    }

    /// u 与 v 之间的所有平行边
    pub fn edges_between(&self, u: VertexId, v: VertexId) -> Vec<&Edge> {
        self.incident_edges(u)
            .filter(|edge| edge.other_end(u) == v)
            .collect()
    }

    /// u 与 v 之间的边数
    pub fn multiplicity(&self, u: VertexId, v: VertexId) -> usize {
        self.incident_edges(u)
            .filter(|edge| edge.other_end(u) == v)
            .count()
    }

    /// u 与 v 之间某条边的路线（按插入顺序取第一条）
    pub fn route_between(&self, u: VertexId, v: VertexId) -> Option<&Arc<Route>> {
        self.incident_edges(u)
            .find(|edge| edge.other_end(u) == v)
            .and_then(|edge| edge.route())
    }

    // ==================== 邻居查询 ====================

    /// 邻居集合；顶点不存在时为空。带自环的顶点是自己的邻居
    pub fn neighbors(&self, v: VertexId) -> BTreeSet<VertexId> {
        self.incident_edges(v).map(|edge| edge.other_end(v)).collect()
    }

    /// 度数：邻居集合的大小（平行边与自环各只计一次）
    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors(v).len()
    }

    /// 最大度数，空图为 0
    pub fn max_degree(&self) -> usize {
        self.vertices().map(|v| self.degree(v)).max().unwrap_or(0)
    }

    /// 按顶点顺序排列的度数序列
    pub fn degree_sequence(&self) -> Vec<usize> {
        self.vertices().map(|v| self.degree(v)).collect()
    }

    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.incident_edges(u).any(|edge| edge.other_end(u) == v)
    }

    // ==================== 合并 ====================

    /// 将 i 与 j 合并为 min(i, j)
    ///
    /// 连接 i 与 j 的边全部删除（不产生自环），max(i, j) 的其余边改接到
    /// min(i, j) 上并保留路线。任一顶点不存在或 i == j 时不做任何事。
    pub fn merge_vertices(&mut self, i: VertexId, j: VertexId) {
        if i == j || !self.contains_vertex(i) || !self.contains_vertex(j) {
            return;
        }

        let (keep, gone) = if i < j { (i, j) } else { (j, i) };
        let Some(edges) = self.incidence.shift_remove(&gone) else {
            return;
        };

        for edge in &edges {
            let other = edge.other_end(gone);
            if other != gone {
                if let Some(set) = self.incidence.get_mut(&other) {
                    set.shift_remove(edge);
                }
            }
        }

        let mut moved = 0usize;
        for edge in &edges {
            let other = edge.other_end(gone);
            if other == keep {
                continue;
            }
            let target = if other == gone { keep } else { other };
            self.add_edge(edge.relabeled(keep, target));
            moved += 1;
        }

        debug!(keep = %keep, merged = %gone, moved_edges = moved, "顶点已合并");
        self.debug_check_symmetry();
    }

    // ==================== 不变量 ====================

    /// 关联表是否对称
    pub fn is_symmetric(&self) -> bool {
        self.incidence.iter().all(|(&v, set)| {
            set.iter().all(|edge| {
                edge.is_incident_to(v)
                    && self
                        .incidence
                        .get(&edge.other_end(v))
                        .map_or(false, |other| other.contains(edge))
            })
        })
    }

    fn debug_check_symmetry(&self) {
        debug_assert!(self.is_symmetric(), "关联表不对称: {}", self);
    }
}

impl PartialEq for Multigraph {
    /// 边集合相等（要求两图共享顶点编号，比同构更弱）
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.edge_count() == other.edge_count()
            && self.edges().all(|edge| other.edge_exists(edge))
    }
}

impl Eq for Multigraph {}

impl fmt::Display for Multigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, edges) in &self.incidence {
            let listed: Vec<String> = edges.iter().map(|e| e.to_string()).collect();
            writeln!(f, "顶点 {}: [{}]", v, listed.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn e(i: u64, j: u64) -> Edge {
        Edge::new(v(i), v(j))
    }

    fn routed(i: u64, j: u64, name: &str, length: u32) -> Edge {
        Edge::with_route(v(i), v(j), Arc::new(Route::new(name, length)))
    }

    /// 原棋盘测试中使用的 6 顶点抽象图
    fn abstract_board() -> Multigraph {
        Multigraph::from_edges([
            e(0, 1),
            e(0, 3),
            e(1, 2),
            e(1, 4),
            e(2, 4),
            e(2, 5),
            e(3, 4),
            e(5, 1),
            e(5, 3),
        ])
    }

    #[test]
    fn test_graph_construction() {
        let empty = Multigraph::new();
        assert_eq!(empty.vertex_count(), 0);
        assert_eq!(empty.edge_count(), 0);

        let isolated = Multigraph::with_vertices(5);
        assert_eq!(isolated.vertex_count(), 5);
        assert_eq!(isolated.edge_count(), 0);
        assert!(isolated.contains_vertex(v(4)));
        assert!(!isolated.contains_vertex(v(5)));

        let board = abstract_board();
        assert_eq!(board.vertex_count(), 6);
        assert_eq!(board.edge_count(), 9);
        assert!(board.edge_exists(&e(4, 1)));
        assert!(!board.edge_exists(&e(0, 2)));
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph = abstract_board();
        graph.add_vertex(v(59));
        assert_eq!(graph.vertex_count(), 7);
        graph.add_vertex(v(59));
        assert_eq!(graph.vertex_count(), 7);
    }

    #[test]
    fn test_add_edge_idempotent_and_parallel() {
        let mut graph = Multigraph::with_vertices(3);
        graph.add_edge(e(0, 1));
        graph.add_edge(e(1, 0));
        assert_eq!(graph.edge_count(), 1);

        graph.add_edge(routed(0, 1, "a", 2));
        graph.add_edge(routed(0, 1, "b", 2));
        graph.add_edge(routed(1, 0, "b", 2));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.multiplicity(v(0), v(1)), 3);
        assert_eq!(graph.degree(v(0)), 1);
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut graph = Multigraph::new();
        graph.add_edge(e(3, 8));

        assert!(graph.contains_vertex(v(3)));
        assert!(graph.contains_vertex(v(8)));
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = abstract_board();
        graph.remove_edge(&e(1, 0));
        assert_eq!(graph.edge_count(), 8);
        assert!(!graph.are_adjacent(v(0), v(1)));
        assert!(!graph.are_adjacent(v(1), v(0)));

        graph.remove_edge(&e(1, 0));
        assert_eq!(graph.edge_count(), 8);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_remove_vertex() {
        let mut graph = abstract_board();
        graph.remove_vertex(v(42));
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 9);

        graph.remove_vertex(v(1));
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 5);
        assert!(graph.vertices().all(|u| !graph.neighbors(u).contains(&v(1))));
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_neighbors_and_degree() {
        let graph = abstract_board();

        assert_eq!(graph.neighbors(v(1)), BTreeSet::from([v(0), v(2), v(4), v(5)]));
        assert_eq!(graph.degree(v(1)), 4);
        assert_eq!(graph.degree(v(0)), 2);
        assert!(graph.neighbors(v(99)).is_empty());
        assert_eq!(graph.degree(v(99)), 0);
        assert_eq!(graph.max_degree(), 4);
    }

    #[test]
    fn test_edge_count_identity() {
        let graph = abstract_board();
        let degree_sum: usize = graph.vertices().map(|u| graph.degree(u)).sum();
        assert_eq!(graph.edge_count(), degree_sum / 2);
    }

    #[test]
    fn test_self_loop_counts_once() {
        let mut graph = Multigraph::new();
        graph.add_edge(e(0, 0));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(v(0)), 1);
        assert_eq!(graph.neighbors(v(0)), BTreeSet::from([v(0)]));

        graph.add_edge(e(0, 1));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges().count(), 2);

        graph.remove_edge(&e(0, 0));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_edges_iterates_each_edge_once() {
        let mut graph = abstract_board();
        graph.add_edge(routed(0, 1, "r", 3));

        let edges: Vec<&Edge> = graph.edges().collect();
        assert_eq!(edges.len(), graph.edge_count());
        assert!(edges.iter().all(|edge| graph.edge_exists(edge)));
    }

    #[test]
    fn test_induced_subgraph_is_independent() {
        let graph = abstract_board();
        let mut sub = Multigraph::induced_subgraph(&graph, [v(1), v(2), v(4), v(77)]);

        assert_eq!(sub.vertex_count(), 3);
        assert_eq!(sub.edge_count(), 3);
        assert!(sub.edge_exists(&e(2, 4)));
        assert!(!sub.contains_vertex(v(77)));

        sub.remove_edge(&e(1, 2));
        assert!(graph.edge_exists(&e(1, 2)));
        assert_eq!(graph.edge_count(), 9);
    }

    #[test]
    fn test_graph_equality() {
        let a = Multigraph::from_edges([e(0, 1), e(1, 2)]);
        let b = Multigraph::from_edges([e(2, 1), e(1, 0)]);
        let c = Multigraph::from_edges([e(0, 2), e(1, 2)]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_route_between() {
        let mut graph = Multigraph::new();
        graph.add_edge(routed(0, 1, "Lima-Quito", 5));
        graph.add_edge(e(1, 2));

        assert_eq!(graph.route_between(v(1), v(0)).map(|r| r.length()), Some(5));
        assert!(graph.route_between(v(1), v(2)).is_none());
        assert!(graph.route_between(v(0), v(2)).is_none());
    }

    #[test]
    fn test_merge_vertices() {
        let mut graph = Multigraph::from_edges([
            e(0, 1),
            routed(0, 1, "p", 2),
            e(1, 2),
            routed(1, 3, "q", 4),
            e(0, 4),
        ]);

        graph.merge_vertices(v(1), v(0));

        assert!(!graph.contains_vertex(v(1)));
        assert_eq!(graph.neighbors(v(0)), BTreeSet::from([v(2), v(3), v(4)]));
        assert!(!graph.neighbors(v(0)).contains(&v(0)));
        assert_eq!(graph.route_between(v(0), v(3)).map(|r| r.name()), Some("q"));
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_merge_vertices_missing_is_noop() {
        let mut graph = abstract_board();
        let before = graph.clone();

        graph.merge_vertices(v(0), v(42));
        graph.merge_vertices(v(3), v(3));

        assert_eq!(graph, before);
    }

    #[test]
    fn test_display_lists_vertices() {
        let graph = Multigraph::from_edges([e(0, 1)]);
        let text = graph.to_string();

        assert!(text.contains("顶点 0: [{0, 1}]"));
        assert_eq!(text.lines().count(), 2);
    }
}
