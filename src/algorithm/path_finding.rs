//! 路径查找
//!
//! Dijkstra 最短路径、途经点拼接与无重复顶点路径枚举

use crate::graph::{Edge, Multigraph, VertexId};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// 路径上的顶点序列
    pub vertices: Vec<VertexId>,
    /// 路径上的边序列
    pub edges: Vec<Edge>,
    /// 路径长度（边数）
    pub length: usize,
    /// 路径总权重
    pub total_weight: u64,
}

impl PathResult {
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            length: 0,
            total_weight: 0,
        }
    }

    fn with_start(start: VertexId) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
            length: 0,
            total_weight: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// 路径查找器
pub struct PathFinder<'a> {
    graph: &'a Multigraph,
}

impl<'a> PathFinder<'a> {
    /// 创建路径查找器
    pub fn new(graph: &'a Multigraph) -> Self {
        Self { graph }
    }

    /// 最短路径的顶点序列；不连通时为空
    ///
    /// `weighted` 为真时边权取路线长度，否则每条边权重为 1。
    pub fn shortest_path(&self, start: VertexId, end: VertexId, weighted: bool) -> Vec<VertexId> {
        self.shortest_path_result(start, end, weighted).vertices
    }

    /// Dijkstra 最短路径
    ///
    /// 从 `end` 反向搜索：距离表在 `end` 处为 0，前驱指针指向更靠近 `end`
    /// 的顶点，于是从 `start` 沿前驱走即可到达 `end`。前沿中每个顶点只出现
    /// 一次，每次取出暂定距离最小者并松弛其关联边，仅在严格更优时更新前驱。
    pub fn shortest_path_result(&self, start: VertexId, end: VertexId, weighted: bool) -> PathResult {
        if !self.graph.contains_vertex(start) || !self.graph.contains_vertex(end) {
            return PathResult::new();
        }
        if start == end {
            return PathResult::with_start(start);
        }

        let mut distance: HashMap<VertexId, u64> = HashMap::from([(end, 0)]);
        let mut next_hop: HashMap<VertexId, (VertexId, Edge)> = HashMap::new();
        let mut settled: HashSet<VertexId> = HashSet::new();
        let mut frontier: PriorityQueue<VertexId, Reverse<u64>> = PriorityQueue::new();
        frontier.push(end, Reverse(0));

        while let Some((current, Reverse(current_distance))) = frontier.pop() {
            settled.insert(current);

            for edge in self.graph.incident_edges(current) {
                let neighbor = edge.other_end(current);
                if settled.contains(&neighbor) {
                    continue;
                }

                let candidate = current_distance + edge.weight(weighted);
                let improved = distance
                    .get(&neighbor)
                    .map_or(true, |&known| candidate < known);
                if improved {
                    distance.insert(neighbor, candidate);
                    next_hop.insert(neighbor, (current, edge.clone()));
                    frontier.push_increase(neighbor, Reverse(candidate));
                }
            }
        }

        if !distance.contains_key(&start) {
            debug!(start = %start, end = %end, "两点不连通");
            return PathResult::new();
        }

        let mut path = PathResult::with_start(start);
        let mut current = start;
        while current != end {
            let Some((next, edge)) = next_hop.get(&current) else {
                return PathResult::new();
            };
            path.total_weight += edge.weight(weighted);
            path.edges.push(edge.clone());
            path.vertices.push(*next);
            current = *next;
        }
        path.length = path.edges.len();

        debug!(
            start = %start,
            end = %end,
            hops = path.length,
            weight = path.total_weight,
            "最短路径"
        );
        path
    }

    /// 依次连接相邻途经点之间的最短路径（按路线长度加权）
    ///
    /// 第一段保留两端，之后每段去掉与上一段重复的起点。少于两个途经点，
    /// 或任意一段不可达时返回空序列。
    pub fn stitch_waypoints(&self, waypoints: &[VertexId]) -> Vec<VertexId> {
        if waypoints.len() < 2 {
            return Vec::new();
        }

        let mut route = Vec::new();
        for (index, pair) in waypoints.windows(2).enumerate() {
            let segment = self.shortest_path(pair[0], pair[1], true);
            if segment.is_empty() {
                debug!(from = %pair[0], to = %pair[1], "途经段不可达");
                return Vec::new();
            }

            let skip = if index == 0 { 0 } else { 1 };
            route.extend(segment.into_iter().skip(skip));
        }
        route
    }

    /// 顶点序列的最小权重；相邻两点不相邻时为 None
    pub fn path_weight(&self, vertices: &[VertexId], weighted: bool) -> Option<u64> {
        vertices.windows(2).try_fold(0u64, |total, pair| {
            self.graph
                .incident_edges(pair[0])
                .filter(|edge| edge.other_end(pair[0]) == pair[1])
                .map(|edge| edge.weight(weighted))
                .min()
                .map(|weight| total + weight)
        })
    }

    /// 所有不超过 `max_depth` 条边的无重复顶点路径，每条平行边各成一条路径
    pub fn simple_paths(&self, start: VertexId, end: VertexId, max_depth: usize) -> Vec<PathResult> {
        let mut results = Vec::new();
        if !self.graph.contains_vertex(start) || !self.graph.contains_vertex(end) {
            return results;
        }

        let mut path = PathResult::with_start(start);
        let mut visited = HashSet::from([start]);
        self.dfs_simple_paths(start, end, max_depth, &mut visited, &mut path, &mut results);

        results
    }

    fn dfs_simple_paths(
        &self,
        current: VertexId,
        end: VertexId,
        remaining_depth: usize,
        visited: &mut HashSet<VertexId>,
        path: &mut PathResult,
        results: &mut Vec<PathResult>,
    ) {
        if current == end {
            path.length = path.edges.len();
            results.push(path.clone());
            return;
        }

        if remaining_depth == 0 {
            return;
        }

        for edge in self.graph.incident_edges(current) {
            let neighbor = edge.other_end(current);
            if visited.contains(&neighbor) {
                continue;
            }

            visited.insert(neighbor);
            path.vertices.push(neighbor);
            path.edges.push(edge.clone());
            path.total_weight += u64::from(edge.length());

            self.dfs_simple_paths(neighbor, end, remaining_depth - 1, visited, path, results);

            path.total_weight -= u64::from(edge.length());
            path.edges.pop();
            path.vertices.pop();
            visited.remove(&neighbor);
        }
    }
}
