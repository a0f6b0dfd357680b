//! 弦构造

use super::Circle;
use crate::math::{lift, planar, planar_distance, Point3, Vector2, EPSILON};

/// 由弦心距求弦的两个端点
///
/// 弦与 X 轴平行，位于 `y = cy + distance`，端点按 X 递增排列。
/// `|distance| >= radius` 时不存在弦。
pub fn chord_from_center_distance(circle: &Circle, distance: f64) -> Option<(Point3, Point3)> {
    if distance.abs() >= circle.radius {
        return None;
    }

    let half_length = (circle.radius * circle.radius - distance * distance).sqrt();
    let c = &circle.center;
    Some((
        Point3::new(c.x - half_length, c.y + distance, c.z),
        Point3::new(c.x + half_length, c.y + distance, c.z),
    ))
}

/// 由弦长求弦的两个端点
///
/// 弦长超过直径时不存在弦；弦长等于直径时得到直径。
pub fn chord_from_length(circle: &Circle, length: f64) -> Option<(Point3, Point3)> {
    if length < 0.0 || length > 2.0 * circle.radius {
        return None;
    }

    let half_length = length / 2.0;
    let distance = (circle.radius * circle.radius - half_length * half_length).sqrt();
    chord_from_center_distance(circle, distance)
}

/// 两圆公共弦的端点
///
/// 两圆相离、内含或同心时返回 `None`。端点的 Z 坐标取第一个圆心的 Z。
pub fn common_chord(first: &Circle, second: &Circle) -> Option<(Point3, Point3)> {
    let (r1, r2) = (first.radius, second.radius);
    let d = planar_distance(&first.center, &second.center);

    if d > r1 + r2 || d < (r1 - r2).abs() || d < EPSILON {
        return None;
    }

    // 圆心1 到根轴的距离
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    // 相切时 r1² - a² 可能因舍入略小于 0
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    let o1 = planar(&first.center);
    let unit = (planar(&second.center) - o1) / d;
    let perp = Vector2::new(-unit.y, unit.x);
    let mid = o1 + unit * a;

    let z = first.center.z;
    Some((lift(mid + perp * h, z), lift(mid - perp * h, z)))
}
