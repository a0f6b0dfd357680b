//! 几何构造库
//!
//! 固定的一组闭式几何构造：
//! - 切点 / 切线 (`tangent`)
//! - 弦 (`chord`)
//! - 三角形内切圆 / 外接圆 (`circle`)
//! - 正多边形与三角形顶点 (`polygon`)
//! - 三角形分类 (`classify`)
//!
//! 前置条件不满足时，哨兵式构造返回 `None`；三角形顶点构造返回
//! [`ConstructionError`](crate::error::ConstructionError)。

pub mod chord;
pub mod circle;
pub mod classify;
pub mod polygon;
pub mod tangent;

use crate::math::Point3;
use serde::{Deserialize, Serialize};

pub use classify::{classify_triangle, TriangleKind};
pub use tangent::{TangentLine, TangentSide};

/// 圆（构造输入）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point3,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// 圆上指定角度的点（Z 坐标与圆心相同）
    pub fn point_at_angle(&self, angle: f64) -> Point3 {
        Point3::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
            self.center.z,
        )
    }
}
