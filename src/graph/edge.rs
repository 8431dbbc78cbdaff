//! 边定义
//!
//! 无向边：两个端点加一个可选的路线引用。端点无序比较，路线参与相等性，
//! 因此相同端点、不同路线的两条边是两条平行边

use crate::error::{Error, Result};
use crate::graph::route::Route;
use crate::graph::vertex::VertexId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// 边
#[derive(Debug, Clone)]
pub struct Edge {
    /// 端点 i
    i: VertexId,
    /// 端点 j
    j: VertexId,
    /// 路线引用
    route: Option<Arc<Route>>,
}

impl Edge {
    /// 创建无路线的边（权重为 1）
    pub fn new(i: VertexId, j: VertexId) -> Self {
        Self { i, j, route: None }
    }

    /// 创建带路线的边
    pub fn with_route(i: VertexId, j: VertexId, route: Arc<Route>) -> Self {
        Self {
            i,
            j,
            route: Some(route),
        }
    }

    /// 创建边并检查前置条件（两端点不同）
    pub fn checked(i: VertexId, j: VertexId, route: Option<Arc<Route>>) -> Result<Self> {
        if i == j {
            return Err(Error::SelfLoop(i));
        }
        Ok(Self { i, j, route })
    }

    pub fn i(&self) -> VertexId {
        self.i
    }

    pub fn j(&self) -> VertexId {
        self.j
    }

    /// 获取路线引用
    pub fn route(&self) -> Option<&Arc<Route>> {
        self.route.as_ref()
    }

    /// 边的长度：有路线时取路线长度，否则为 1
    pub fn length(&self) -> u32 {
        self.route.as_ref().map_or(1, |r| r.length())
    }

    /// 参与最短路径计算的权重
    pub fn weight(&self, weighted: bool) -> u64 {
        if weighted {
            u64::from(self.length())
        } else {
            1
        }
    }

    pub fn is_loop(&self) -> bool {
        self.i == self.j
    }

    pub fn is_incident_to(&self, v: VertexId) -> bool {
        self.i == v || self.j == v
    }

    /// 返回 v 之外的另一个端点；自环返回 v 本身
    pub fn other_end(&self, v: VertexId) -> VertexId {
        if v == self.i {
            self.j
        } else {
            self.i
        }
    }

    /// 按 (小, 大) 排序的端点
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        if self.i <= self.j {
            (self.i, self.j)
        } else {
            (self.j, self.i)
        }
    }

    /// 两端点改名后的新边，路线保持不变
    pub(crate) fn relabeled(&self, i: VertexId, j: VertexId) -> Self {
        Self {
            i,
            j,
            route: self.route.clone(),
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints() && self.route == other.route
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
        self.route.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.route {
            Some(route) => write!(f, "{{{}, {}}} {}", self.i, self.j, route),
            None => write!(f, "{{{}, {}}}", self.i, self.j),
        }
    }
}
