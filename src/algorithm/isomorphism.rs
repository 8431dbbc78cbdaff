//! 同构判定
//!
//! 回溯搜索顶点双射 g1 -> g2。g1 的顶点按度数降序排名，部分赋值数组
//! 以排名为下标、以 g2 顶点为值；每次赋值前先比较度数与自环数，再比较
//! 与所有已赋值顶点之间的边重数，任何不一致立即剪枝。
//!
//! 最坏情况下复杂度是顶点数的阶乘，只适用于棋盘规模的小图。

use crate::graph::{Multigraph, VertexId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 同构判定器
pub struct IsomorphismChecker;

impl IsomorphismChecker {
    /// 两图是否同构（只比较结构，忽略路线）
    pub fn are_isomorphic(g1: &Multigraph, g2: &Multigraph) -> bool {
        Self::find_mapping(g1, g2).is_some()
    }

    /// 寻找保持边重数的顶点双射
    pub fn find_mapping(g1: &Multigraph, g2: &Multigraph) -> Option<HashMap<VertexId, VertexId>> {
        if g1.vertex_count() != g2.vertex_count() {
            debug!(left = g1.vertex_count(), right = g2.vertex_count(), "顶点数不同");
            return None;
        }
        if g1.edge_count() != g2.edge_count() {
            debug!(left = g1.edge_count(), right = g2.edge_count(), "边数不同");
            return None;
        }

        let mut left_degrees = g1.degree_sequence();
        let mut right_degrees = g2.degree_sequence();
        left_degrees.sort_unstable();
        right_degrees.sort_unstable();
        if left_degrees != right_degrees {
            debug!("度数序列不同");
            return None;
        }

        let mut search = MappingSearch::new(g1, g2);
        let found = search.extend(0);
        debug!(found, states = search.states, "同构搜索结束");

        found.then(|| search.mapping())
    }
}

/// 回溯搜索状态
struct MappingSearch<'a> {
    left: &'a Multigraph,
    right: &'a Multigraph,
    /// g1 顶点按排名排列
    order: Vec<VertexId>,
    /// 排名 -> 已赋的 g2 顶点
    assignment: Vec<Option<VertexId>>,
    /// 候选的 g2 顶点
    candidates: Vec<VertexId>,
    /// 已被使用的 g2 顶点
    used: HashSet<VertexId>,
    left_degree: HashMap<VertexId, usize>,
    right_degree: HashMap<VertexId, usize>,
    /// 访问过的搜索状态数
    states: u64,
}

impl<'a> MappingSearch<'a> {
    fn new(left: &'a Multigraph, right: &'a Multigraph) -> Self {
        let left_degree: HashMap<VertexId, usize> =
            left.vertices().map(|v| (v, left.degree(v))).collect();
        let right_degree: HashMap<VertexId, usize> =
            right.vertices().map(|v| (v, right.degree(v))).collect();

        let mut order: Vec<VertexId> = left.vertices().collect();
        order.sort_by(|a, b| left_degree[b].cmp(&left_degree[a]).then(a.cmp(b)));

        let mut candidates: Vec<VertexId> = right.vertices().collect();
        candidates.sort();

        Self {
            left,
            right,
            assignment: vec![None; order.len()],
            order,
            candidates,
            used: HashSet::new(),
            left_degree,
            right_degree,
            states: 0,
        }
    }

    fn extend(&mut self, rank: usize) -> bool {
        self.states += 1;
        if rank == self.order.len() {
            return true;
        }

        let u = self.order[rank];
        for index in 0..self.candidates.len() {
            let c = self.candidates[index];
            if self.used.contains(&c) || !self.compatible(rank, u, c) {
                continue;
            }

            self.assignment[rank] = Some(c);
            self.used.insert(c);
            if self.extend(rank + 1) {
                return true;
            }
            self.used.remove(&c);
            self.assignment[rank] = None;
        }

        false
    }

    /// u -> c 是否与已有的部分赋值一致
    fn compatible(&self, rank: usize, u: VertexId, c: VertexId) -> bool {
        if self.left_degree[&u] != self.right_degree[&c] {
            return false;
        }
        if self.left.multiplicity(u, u) != self.right.multiplicity(c, c) {
            return false;
        }

        self.order[..rank]
            .iter()
            .zip(&self.assignment[..rank])
            .all(|(&prev, image)| match image {
                Some(image) => self.left.multiplicity(u, prev) == self.right.multiplicity(c, *image),
                None => false,
            })
    }

    fn mapping(&self) -> HashMap<VertexId, VertexId> {
        self.order
            .iter()
            .zip(&self.assignment)
            .filter_map(|(&u, image)| image.map(|c| (u, c)))
            .collect()
    }
}
