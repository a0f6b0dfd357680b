//! 三角形分类

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};
use std::fmt;

/// 默认的比较容差
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// 三角形类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriangleKind {
    Equilateral,
    Isosceles,
    Right,
    Scalene,
    Unknown,
}

impl TriangleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleKind::Equilateral => "equilateral",
            TriangleKind::Isosceles => "isosceles",
            TriangleKind::Right => "right",
            TriangleKind::Scalene => "scalene",
            TriangleKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 根据边长和/或角度判断三角形类型
///
/// 先看边：三边相等为等边，任意两边相等为等腰。
/// 再看角：有直角为直角三角形，三角都为 60° 为等边。
/// 都不满足时，给了三条边就是不等边三角形，否则未知。
pub fn classify_triangle(sides: Option<&[f64]>, angles: Option<&[f64]>, tolerance: f64) -> TriangleKind {
    let close = |x: f64, y: f64| (x - y).abs() < tolerance;
    let sides = sides.filter(|s| s.len() == 3);
    let angles = angles.filter(|a| a.len() == 3);

    if let Some(s) = sides {
        if close(s[0], s[1]) && close(s[1], s[2]) {
            return TriangleKind::Equilateral;
        }
        if close(s[0], s[1]) || close(s[1], s[2]) || close(s[0], s[2]) {
            return TriangleKind::Isosceles;
        }
    }

    if let Some(a) = angles {
        if a.iter().any(|&angle| close(angle, FRAC_PI_2)) {
            return TriangleKind::Right;
        }
        if a.iter().all(|&angle| close(angle, FRAC_PI_3)) {
            return TriangleKind::Equilateral;
        }
    }

    if sides.is_some() {
        TriangleKind::Scalene
    } else {
        TriangleKind::Unknown
    }
}
