//! GeoScene 核心：几何场景构造求值
//!
//! 场景文档中的位置属性可以写成构造调用文本，例如
//! `get_single_tangent_point([0, 0, 0], 3, [5, 0, 0], 'right')`。
//! 本库解析这些文本，调用对应的闭式几何构造，并把结果写回文档。
//!
//! # 架构
//!
//! - `input_parser`: 数组字面量、调用表达式与参数转换
//! - `construction`: 切线、弦、内切/外接圆、多边形顶点、三角形分类
//! - `registry`: 封闭的构造表与调用分发
//! - `resolver`: 按属性遍历场景并替换可求值的文本
//!
//! # 示例
//!
//! ```rust
//! use geoscene_core::prelude::*;
//!
//! let evaluator = Evaluator::default();
//! let square = evaluator.evaluate("get_square_vertices([0, 0, 0], 4, 0)").unwrap();
//! assert_eq!(square.as_array().unwrap().len(), 4);
//! ```

pub mod config;
pub mod construction;
pub mod error;
pub mod input_parser;
pub mod math;
pub mod registry;
pub mod resolver;
pub mod scene;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::config::ResolverConfig;
    pub use crate::construction::{Circle, TangentLine, TangentSide, TriangleKind};
    pub use crate::error::{ConstructionError, EvalError, ParseError};
    pub use crate::input_parser::{Argument, CallExpr, InputParser};
    pub use crate::math::{Point2, Point3, Vector2};
    pub use crate::registry::{Construction, ConstructionOutput, Evaluator};
    pub use crate::resolver::{ResolveReport, Resolution, SceneResolver};
    pub use crate::scene::{Entity, EntityKind, SceneDocument};
}
