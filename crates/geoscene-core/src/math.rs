//! 数学基础类型
//!
//! 基于 nalgebra 的点/向量别名，以及构造库共用的平面变换工具。
//! 所有构造都在 XY 平面内进行，Z 坐标只是随中心点一起携带。

pub type Point2 = nalgebra::Point2<f64>;
pub type Point3 = nalgebra::Point3<f64>;
pub type Vector2 = nalgebra::Vector2<f64>;

/// 退化判定容差
pub const EPSILON: f64 = 1e-10;

/// 从坐标切片构造三维点
///
/// 缺少的 Z 坐标按 0 处理。调用方需保证至少有两个坐标。
pub fn point_from_slice(coords: &[f64]) -> Point3 {
    let z = coords.get(2).copied().unwrap_or(0.0);
    Point3::new(coords[0], coords[1], z)
}

/// 取点的 XY 投影
pub fn planar(point: &Point3) -> Point2 {
    Point2::new(point.x, point.y)
}

/// 两点在 XY 平面内的距离
pub fn planar_distance(a: &Point3, b: &Point3) -> f64 {
    (planar(b) - planar(a)).norm()
}

/// 将平面点抬升到指定高度
pub fn lift(point: Point2, z: f64) -> Point3 {
    Point3::new(point.x, point.y, z)
}

/// 将局部坐标系下的顶点放置到场景中
///
/// 先绕原点旋转 `orientation` 弧度，再平移到 `center`，
/// Z 坐标取自 `center`。
pub fn place_vertices(local: &[Vector2], center: &Point3, orientation: f64) -> Vec<Point3> {
    let rotation = nalgebra::Rotation2::new(orientation);
    let origin = planar(center);
    local
        .iter()
        .map(|v| lift(origin + rotation * v, center.z))
        .collect()
}
