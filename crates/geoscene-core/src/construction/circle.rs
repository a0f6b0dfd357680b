//! 三角形的内切圆与外接圆

use super::Circle;
use crate::math::{planar_distance, Point3, EPSILON};

/// 三边长 (a, b, c)，a 为顶点 0 的对边
fn side_lengths(v: &[Point3]) -> (f64, f64, f64) {
    (
        planar_distance(&v[1], &v[2]),
        planar_distance(&v[0], &v[2]),
        planar_distance(&v[0], &v[1]),
    )
}

/// 三角形内切圆
///
/// 圆心为按对边长加权的顶点平均，半径由海伦公式推出。
/// 顶点数不为 3 或三角形周长为 0 时返回 `None`。
pub fn inscribed_circle(vertices: &[Point3]) -> Option<Circle> {
    if vertices.len() != 3 {
        return None;
    }

    let (a, b, c) = side_lengths(vertices);
    let perimeter = a + b + c;
    if perimeter < EPSILON {
        return None;
    }

    let s = perimeter / 2.0;
    let radius = ((s - a) * (s - b) * (s - c) / s).max(0.0).sqrt();

    let v = vertices;
    let center = Point3::new(
        (a * v[0].x + b * v[1].x + c * v[2].x) / perimeter,
        (a * v[0].y + b * v[1].y + c * v[2].y) / perimeter,
        v[0].z,
    );

    Some(Circle::new(center, radius))
}

/// 三角形外接圆
///
/// 三点共线时行列式 D 为 0，不存在外接圆。
pub fn circumscribed_circle(vertices: &[Point3]) -> Option<Circle> {
    if vertices.len() != 3 {
        return None;
    }

    let (p1, p2, p3) = (&vertices[0], &vertices[1], &vertices[2]);
    let d = 2.0 * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y));
    if d.abs() < EPSILON {
        return None;
    }

    let sq1 = p1.x * p1.x + p1.y * p1.y;
    let sq2 = p2.x * p2.x + p2.y * p2.y;
    let sq3 = p3.x * p3.x + p3.y * p3.y;
    let ux = (sq1 * (p2.y - p3.y) + sq2 * (p3.y - p1.y) + sq3 * (p1.y - p2.y)) / d;
    let uy = (sq1 * (p3.x - p2.x) + sq2 * (p1.x - p3.x) + sq3 * (p2.x - p1.x)) / d;

    // R = abc / 4K，K 由海伦公式给出
    let (a, b, c) = side_lengths(vertices);
    let s = (a + b + c) / 2.0;
    let area = (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt();
    if area < EPSILON {
        return None;
    }
    let radius = a * b * c / (4.0 * area);

    Some(Circle::new(Point3::new(ux, uy, p1.z), radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_triangle() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        ]
    }

    #[test]
    fn test_inscribed_circle_3_4_5() {
        let circle = inscribed_circle(&right_triangle()).unwrap();
        // r = (a + b - c) / 2 = 1
        assert_relative_eq!(circle.radius, 1.0, epsilon = 1e-12);
        assert_relative_eq!(circle.center.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(circle.center.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_circumscribed_circle_3_4_5() {
        let circle = circumscribed_circle(&right_triangle()).unwrap();
        // 直角三角形外心在斜边中点
        assert_relative_eq!(circle.radius, 2.5, epsilon = 1e-12);
        assert_relative_eq!(circle.center.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(circle.center.y, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_circumscribed_center_equidistant() {
        let v = vec![
            Point3::new(-1.0, 2.0, 0.0),
            Point3::new(3.5, -0.5, 0.0),
            Point3::new(2.0, 4.0, 0.0),
        ];
        let circle = circumscribed_circle(&v).unwrap();
        for p in &v {
            assert_relative_eq!(planar_distance(p, &circle.center), circle.radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_circles_require_three_vertices() {
        let two = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        assert!(inscribed_circle(&two).is_none());
        assert!(circumscribed_circle(&two).is_none());
        assert!(inscribed_circle(&[]).is_none());
    }

    #[test]
    fn test_circumscribed_collinear_is_none() {
        let v = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
        ];
        assert!(circumscribed_circle(&v).is_none());
    }

    #[test]
    fn test_inscribed_degenerate_point_is_none() {
        let v = vec![Point3::origin(); 3];
        assert!(inscribed_circle(&v).is_none());
    }
}
