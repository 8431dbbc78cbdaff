//! 路线描述
//!
//! 图核心只把路线当作可比较的不透明句柄，并读取其长度；
//! 颜色、归属等游戏属性由外部模型解释

use serde::{Deserialize, Serialize};
use std::fmt;

/// 路线（外部路线对象的最小投影）
///
/// 两条路线按值相等：名称与长度均相同。同一对城市之间名称不同的两条路线
/// 会产生两条平行边。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    /// 路线名称（在棋盘内唯一）
    name: String,
    /// 路线长度（边权）
    length: u32,
}

impl Route {
    /// 创建路线
    pub fn new(name: impl Into<String>, length: u32) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }

    /// 获取路线名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取路线长度
    pub fn length(&self) -> u32 {
        self.length
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.length)
    }
}
