//! 多边形顶点构造
//!
//! 顶点先在以原点为中心的局部坐标系中生成，再统一旋转 `orientation`
//! 弧度并平移到 `center`（见 [`place_vertices`]）。

use crate::error::ConstructionError;
use crate::math::{place_vertices, Point3, Vector2};

/// 正方形顶点（局部坐标系中从左下角开始逆时针）
pub fn square_vertices(center: &Point3, side: f64, orientation: f64) -> Vec<Point3> {
    rectangle_vertices(center, side, side, orientation)
}

/// 矩形顶点，`length` 沿局部 X 轴，`width` 沿局部 Y 轴
pub fn rectangle_vertices(center: &Point3, length: f64, width: f64, orientation: f64) -> Vec<Point3> {
    let hl = length / 2.0;
    let hw = width / 2.0;
    let local = [
        Vector2::new(-hl, -hw),
        Vector2::new(hl, -hw),
        Vector2::new(hl, hw),
        Vector2::new(-hl, hw),
    ];
    place_vertices(&local, center, orientation)
}

/// 等边三角形顶点，重心位于 `center`
pub fn equilateral_triangle_vertices(center: &Point3, side: f64, orientation: f64) -> Vec<Point3> {
    let height = side * 3f64.sqrt() / 2.0;
    place_vertices(&apex_triangle(side, height), center, orientation)
}

/// 等腰三角形顶点
///
/// 腰长必须大于底边的一半。
pub fn isosceles_triangle_vertices(
    center: &Point3,
    equal_side: f64,
    base: f64,
    orientation: f64,
) -> Result<Vec<Point3>, ConstructionError> {
    if equal_side <= base / 2.0 {
        return Err(ConstructionError::IsoscelesInfeasible {
            equal: equal_side,
            base,
        });
    }

    let height = (equal_side * equal_side - (base / 2.0) * (base / 2.0)).sqrt();
    Ok(place_vertices(&apex_triangle(base, height), center, orientation))
}

/// 直角三角形顶点，直角位于局部坐标系左下角
pub fn right_triangle_vertices(center: &Point3, base: f64, height: f64, orientation: f64) -> Vec<Point3> {
    let local = [
        Vector2::new(-base / 3.0, -height / 3.0),
        Vector2::new(2.0 * base / 3.0, -height / 3.0),
        Vector2::new(-base / 3.0, 2.0 * height / 3.0),
    ];
    place_vertices(&local, center, orientation)
}

/// 由三边长构造三角形顶点（余弦定理），重心位于 `center`
///
/// 边 `c` 沿局部 X 轴，边 `b` 从原点出发与其夹角 A。
pub fn scalene_triangle_vertices(
    center: &Point3,
    sides: &[f64],
    orientation: f64,
) -> Result<Vec<Point3>, ConstructionError> {
    let &[a, b, c] = sides else {
        return Err(ConstructionError::SideCount(sides.len()));
    };

    if a + b <= c || b + c <= a || a + c <= b {
        return Err(ConstructionError::TriangleInequality { a, b, c });
    }

    let cos_a = ((b * b + c * c - a * a) / (2.0 * b * c)).clamp(-1.0, 1.0);
    let angle_a = cos_a.acos();

    let corners = [
        Vector2::new(0.0, 0.0),
        Vector2::new(c, 0.0),
        Vector2::new(b * angle_a.cos(), b * angle_a.sin()),
    ];
    let centroid = corners.iter().fold(Vector2::zeros(), |acc, v| acc + v) / 3.0;
    let local: Vec<Vector2> = corners.iter().map(|v| v - centroid).collect();

    Ok(place_vertices(&local, center, orientation))
}

/// 由一边和两角构造三角形顶点
///
/// 给定边为第三个角的对边，其余两边由正弦定理求出，再交给
/// [`scalene_triangle_vertices`]。
pub fn triangle_vertices_from_angles_side(
    center: &Point3,
    side: f64,
    angles: &[f64],
    orientation: f64,
) -> Result<Vec<Point3>, ConstructionError> {
    let &[alpha, beta] = angles else {
        return Err(ConstructionError::AngleCount(angles.len()));
    };

    let gamma = std::f64::consts::PI - alpha - beta;
    if gamma <= 0.0 {
        return Err(ConstructionError::AngleSum { sum: alpha + beta });
    }

    let side_b = side * alpha.sin() / gamma.sin();
    let side_c = side * beta.sin() / gamma.sin();
    scalene_triangle_vertices(center, &[side, side_b, side_c], orientation)
}

/// 底边水平、顶点在上的三角形，重心在原点
fn apex_triangle(base: f64, height: f64) -> [Vector2; 3] {
    [
        Vector2::new(-base / 2.0, -height / 3.0),
        Vector2::new(base / 2.0, -height / 3.0),
        Vector2::new(0.0, 2.0 * height / 3.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::planar_distance;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI, SQRT_2};

    fn centroid(vertices: &[Point3]) -> Point3 {
        let n = vertices.len() as f64;
        let sum = vertices.iter().fold(Vector2::zeros(), |acc, p| acc + Vector2::new(p.x, p.y));
        Point3::new(sum.x / n, sum.y / n, 0.0)
    }

    fn edge_lengths(v: &[Point3]) -> Vec<f64> {
        (0..v.len())
            .map(|i| planar_distance(&v[i], &v[(i + 1) % v.len()]))
            .collect()
    }

    #[test]
    fn test_square_vertices_axis_aligned() {
        let v = square_vertices(&Point3::origin(), 4.0, 0.0);
        assert_eq!(v.len(), 4);
        assert_eq!(v[0], Point3::new(-2.0, -2.0, 0.0));
        assert_eq!(v[1], Point3::new(2.0, -2.0, 0.0));
        assert_eq!(v[2], Point3::new(2.0, 2.0, 0.0));
        assert_eq!(v[3], Point3::new(-2.0, 2.0, 0.0));
        for p in &v {
            assert_relative_eq!(planar_distance(p, &Point3::origin()), 2.0 * SQRT_2, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_square_vertices_rotated_and_translated() {
        let center = Point3::new(1.0, -1.0, 3.0);
        let v = square_vertices(&center, 2.0, FRAC_PI_4);
        // 旋转 45° 后第一个顶点落在中心正下方
        assert_relative_eq!(v[0].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v[0].y, -1.0 - SQRT_2, epsilon = 1e-12);
        assert!(v.iter().all(|p| p.z == 3.0));
        for len in edge_lengths(&v) {
            assert_relative_eq!(len, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rectangle_vertices() {
        let v = rectangle_vertices(&Point3::new(0.0, 0.0, 0.0), 6.0, 2.0, FRAC_PI_2);
        let lengths = edge_lengths(&v);
        assert_relative_eq!(lengths[0], 6.0, epsilon = 1e-12);
        assert_relative_eq!(lengths[1], 2.0, epsilon = 1e-12);
        // 旋转 90° 后长边沿 Y 轴
        assert_relative_eq!(v[0].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v[0].y, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equilateral_triangle_vertices() {
        let center = Point3::new(2.0, 3.0, 0.0);
        let v = equilateral_triangle_vertices(&center, 3.0, 0.3);
        for len in edge_lengths(&v) {
            assert_relative_eq!(len, 3.0, epsilon = 1e-12);
        }
        let g = centroid(&v);
        assert_relative_eq!(g.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(g.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_isosceles_triangle_vertices() {
        let v = isosceles_triangle_vertices(&Point3::origin(), 5.0, 6.0, 0.0).unwrap();
        let lengths = edge_lengths(&v);
        assert_relative_eq!(lengths[0], 6.0, epsilon = 1e-12);
        assert_relative_eq!(lengths[1], 5.0, epsilon = 1e-12);
        assert_relative_eq!(lengths[2], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_isosceles_infeasible() {
        let err = isosceles_triangle_vertices(&Point3::origin(), 3.0, 6.0, 0.0).unwrap_err();
        assert!(matches!(err, ConstructionError::IsoscelesInfeasible { .. }));
    }

    #[test]
    fn test_right_triangle_vertices() {
        let v = right_triangle_vertices(&Point3::origin(), 3.0, 4.0, 0.0);
        let legs = (v[1] - v[0], v[2] - v[0]);
        assert!(legs.0.dot(&legs.1).abs() < 1e-12);
        assert_relative_eq!(planar_distance(&v[1], &v[2]), 5.0, epsilon = 1e-12);
        let g = centroid(&v);
        assert!(g.x.abs() < 1e-12 && g.y.abs() < 1e-12);
    }

    #[test]
    fn test_scalene_triangle_vertices() {
        let center = Point3::new(-1.0, 2.0, 0.5);
        let v = scalene_triangle_vertices(&center, &[4.0, 5.0, 6.0], 1.0).unwrap();
        let mut lengths = edge_lengths(&v);
        lengths.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_relative_eq!(lengths[0], 4.0, epsilon = 1e-9);
        assert_relative_eq!(lengths[1], 5.0, epsilon = 1e-9);
        assert_relative_eq!(lengths[2], 6.0, epsilon = 1e-9);

        let g = centroid(&v);
        assert_relative_eq!(g.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(g.y, 2.0, epsilon = 1e-12);
        assert!(v.iter().all(|p| p.z == 0.5));
    }

    #[test]
    fn test_scalene_triangle_inequality() {
        let err = scalene_triangle_vertices(&Point3::origin(), &[1.0, 1.0, 10.0], 0.0).unwrap_err();
        assert_eq!(err, ConstructionError::TriangleInequality { a: 1.0, b: 1.0, c: 10.0 });

        // 退化三角形（a + b == c）同样不可行
        assert!(scalene_triangle_vertices(&Point3::origin(), &[1.0, 2.0, 3.0], 0.0).is_err());
    }

    #[test]
    fn test_scalene_side_count() {
        let err = scalene_triangle_vertices(&Point3::origin(), &[3.0, 4.0], 0.0).unwrap_err();
        assert_eq!(err, ConstructionError::SideCount(2));
    }

    #[test]
    fn test_triangle_from_angles_side() {
        // 30°-60°-90°，斜边 2
        let v = triangle_vertices_from_angles_side(
            &Point3::origin(),
            2.0,
            &[PI / 6.0, FRAC_PI_3],
            0.0,
        )
        .unwrap();
        let mut lengths = edge_lengths(&v);
        lengths.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_relative_eq!(lengths[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(lengths[1], 3f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(lengths[2], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_triangle_from_angles_side_infeasible() {
        let err = triangle_vertices_from_angles_side(&Point3::origin(), 2.0, &[FRAC_PI_2, FRAC_PI_2], 0.0)
            .unwrap_err();
        assert!(matches!(err, ConstructionError::AngleSum { .. }));

        let err = triangle_vertices_from_angles_side(&Point3::origin(), 2.0, &[0.5], 0.0).unwrap_err();
        assert_eq!(err, ConstructionError::AngleCount(1));
    }
}
