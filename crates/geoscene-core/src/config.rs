//! 求解器配置

use crate::construction::classify::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};

/// 场景求解参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// 三角形分类时边长/角度相等的容差
    pub classify_tolerance: f64,

    /// 是否在 rayon 线程池上按实体并行求解
    pub parallel: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            classify_tolerance: DEFAULT_TOLERANCE,
            parallel: false,
        }
    }
}
