//! 切线构造
//!
//! 圆外一点到圆有两条切线。所有变体最终都归结为
//! [`tangent_lines_from_point`]：由角度、距离或切线长推出外点位置，
//! 外点放在圆心右侧的 X 轴上。

use super::Circle;
use crate::math::{planar_distance, Point3, EPSILON};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

/// 切点方向
///
/// 从圆心看向外点，`Left` 为逆时针一侧，`Right` 为顺时针一侧。
/// 解析区分大小写，只接受 `left` 和 `right`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TangentSide {
    #[default]
    Left,
    Right,
}

impl FromStr for TangentSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(TangentSide::Left),
            "right" => Ok(TangentSide::Right),
            other => Err(format!("unknown tangent side: {}", other)),
        }
    }
}

/// 切线段：切点到外点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentLine {
    /// 圆上的切点
    pub point: Point3,
    /// 圆外的点
    pub external: Point3,
}

/// 计算从外点到圆的单个切点
///
/// 外点在圆内或圆上时没有切点。
pub fn single_tangent_point(circle: &Circle, external: &Point3, side: TangentSide) -> Option<Point3> {
    let d = planar_distance(&circle.center, external);
    if d <= circle.radius {
        return None;
    }

    // 圆心-切点 与 圆心-外点 的夹角
    let theta = (circle.radius / d).acos();
    let phi = (external.y - circle.center.y).atan2(external.x - circle.center.x);

    let angle = match side {
        TangentSide::Left => phi + theta,
        TangentSide::Right => phi - theta,
    };
    Some(circle.point_at_angle(angle))
}

/// 从外点作圆的两条切线
///
/// 顺时针一侧（下方）的切线在前。
pub fn tangent_lines_from_point(circle: &Circle, external: &Point3) -> Option<[TangentLine; 2]> {
    let right = single_tangent_point(circle, external, TangentSide::Right)?;
    let left = single_tangent_point(circle, external, TangentSide::Left)?;
    Some([
        TangentLine { point: right, external: *external },
        TangentLine { point: left, external: *external },
    ])
}

/// 由两切线夹角作切线
///
/// 外点到圆心的距离为 `r / sin(angle / 2)`。夹角必须在 (0, π) 内：
/// 趋于 0 时外点趋于无穷远，不小于 π 时外点落在圆上或不存在。
pub fn tangent_lines_from_angle(circle: &Circle, angle: f64) -> Option<[TangentLine; 2]> {
    if !(angle > 0.0 && angle < PI) {
        return None;
    }
    let half_sin = (angle / 2.0).sin();
    if half_sin <= EPSILON {
        return None;
    }
    tangent_lines_from_distance(circle, circle.radius / half_sin)
}

/// 由切线与圆心连线的夹角作一条切线
///
/// 夹角必须在 (0, π/2) 内。
pub fn tangent_line_from_radius_angle(circle: &Circle, angle: f64) -> Option<TangentLine> {
    tangent_lines_from_angle(circle, 2.0 * angle).map(|[first, _]| first)
}

/// 由外点到圆心的距离作切线
pub fn tangent_lines_from_distance(circle: &Circle, distance: f64) -> Option<[TangentLine; 2]> {
    if !distance.is_finite() || distance <= circle.radius {
        return None;
    }
    let external = Point3::new(
        circle.center.x + distance,
        circle.center.y,
        circle.center.z,
    );
    tangent_lines_from_point(circle, &external)
}

/// 由切线长作切线
///
/// 切线长为 0 时外点落在圆上，没有切线。
pub fn tangent_lines_from_length(circle: &Circle, length: f64) -> Option<[TangentLine; 2]> {
    if length <= 0.0 {
        return None;
    }
    let distance = (length * length + circle.radius * circle.radius).sqrt();
    tangent_lines_from_distance(circle, distance)
}
