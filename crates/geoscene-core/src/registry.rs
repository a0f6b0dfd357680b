//! 构造注册表与调用分发
//!
//! 所有可用的构造函数都列在 [`Construction`] 中，名称到构造的映射是封闭的：
//! 不在表中的名称在查找阶段就被拒绝。每个构造有固定的参数表，
//! 参数在调用前按位置取出并检查类型。

use crate::config::ResolverConfig;
use crate::construction::{
    chord, circle, classify_triangle, polygon, tangent, Circle, TangentLine, TangentSide,
    TriangleKind,
};
use crate::error::EvalError;
use crate::input_parser::{Argument, CallExpr, InputParser};
use crate::math::{point_from_slice, Point3};
use serde_json::{json, Value};

/// 构造函数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construction {
    SingleTangentPoint,
    ChordFromCenterDistance,
    ChordFromLength,
    CommonChord,
    TangentLinesFromPoint,
    TangentLinesFromAngle,
    TangentLineFromRadiusAngle,
    TangentLinesFromDistance,
    TangentLinesFromLength,
    InscribedCircle,
    CircumscribedCircle,
    SquareVertices,
    RectangleVertices,
    EquilateralTriangleVertices,
    IsoscelesTriangleVertices,
    RightTriangleVertices,
    ScaleneTriangleVertices,
    TriangleVerticesFromAnglesSide,
    TriangleType,
}

impl Construction {
    pub const ALL: [Construction; 19] = [
        Construction::SingleTangentPoint,
        Construction::ChordFromCenterDistance,
        Construction::ChordFromLength,
        Construction::CommonChord,
        Construction::TangentLinesFromPoint,
        Construction::TangentLinesFromAngle,
        Construction::TangentLineFromRadiusAngle,
        Construction::TangentLinesFromDistance,
        Construction::TangentLinesFromLength,
        Construction::InscribedCircle,
        Construction::CircumscribedCircle,
        Construction::SquareVertices,
        Construction::RectangleVertices,
        Construction::EquilateralTriangleVertices,
        Construction::IsoscelesTriangleVertices,
        Construction::RightTriangleVertices,
        Construction::ScaleneTriangleVertices,
        Construction::TriangleVerticesFromAnglesSide,
        Construction::TriangleType,
    ];

    /// 场景文档中使用的函数名
    pub fn name(&self) -> &'static str {
        match self {
            Construction::SingleTangentPoint => "get_single_tangent_point",
            Construction::ChordFromCenterDistance => "get_chord_from_center_distance",
            Construction::ChordFromLength => "get_chord_from_length",
            Construction::CommonChord => "get_common_chord",
            Construction::TangentLinesFromPoint => "get_tangent_lines_from_point",
            Construction::TangentLinesFromAngle => "get_tangent_lines_from_angle",
            Construction::TangentLineFromRadiusAngle => "get_tangent_line_from_radius_angle",
            Construction::TangentLinesFromDistance => "get_tangent_lines_from_distance",
            Construction::TangentLinesFromLength => "get_tangent_lines_from_length",
            Construction::InscribedCircle => "get_inscribed_circle",
            Construction::CircumscribedCircle => "get_circumscribed_circle",
            Construction::SquareVertices => "get_square_vertices",
            Construction::RectangleVertices => "get_rectangle_vertices",
            Construction::EquilateralTriangleVertices => "get_equilateral_triangle_vertices",
            Construction::IsoscelesTriangleVertices => "get_isosceles_triangle_vertices",
            Construction::RightTriangleVertices => "get_right_triangle_vertices",
            Construction::ScaleneTriangleVertices => "get_scalene_triangle_vertices",
            Construction::TriangleVerticesFromAnglesSide => "get_triangle_vertices_from_angles_side",
            Construction::TriangleType => "get_triangle_type",
        }
    }

    /// 别名
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Construction::ChordFromCenterDistance => &["get_chord_points"],
            _ => &[],
        }
    }

    /// 按函数名或别名查找
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name || c.aliases().contains(&name))
    }

    /// 所有可识别的名称（含别名）
    pub fn all_names() -> impl Iterator<Item = &'static str> {
        Self::ALL
            .iter()
            .flat_map(|c| std::iter::once(c.name()).chain(c.aliases().iter().copied()))
    }

    /// 参数表（按位置）
    pub fn params(&self) -> &'static [&'static str] {
        match self {
            Construction::SingleTangentPoint => &["circle_center", "circle_radius", "external_point", "side"],
            Construction::ChordFromCenterDistance => &["circle_center", "circle_radius", "distance_from_center"],
            Construction::ChordFromLength => &["circle_center", "circle_radius", "chord_length"],
            Construction::CommonChord => &["circle1_center", "circle1_radius", "circle2_center", "circle2_radius"],
            Construction::TangentLinesFromPoint => &["circle_center", "circle_radius", "external_point"],
            Construction::TangentLinesFromAngle => &["circle_center", "circle_radius", "angle_between_tangents"],
            Construction::TangentLineFromRadiusAngle => &["circle_center", "circle_radius", "angle_with_radius"],
            Construction::TangentLinesFromDistance => &["circle_center", "circle_radius", "distance_from_center"],
            Construction::TangentLinesFromLength => &["circle_center", "circle_radius", "tangent_length"],
            Construction::InscribedCircle | Construction::CircumscribedCircle => &["vertices"],
            Construction::SquareVertices => &["center", "side_length", "orientation"],
            Construction::RectangleVertices => &["center", "length", "width", "orientation"],
            Construction::EquilateralTriangleVertices => &["center", "side_length", "orientation"],
            Construction::IsoscelesTriangleVertices => &["center", "equal_sides", "base", "orientation"],
            Construction::RightTriangleVertices => &["center", "base", "height", "orientation"],
            Construction::ScaleneTriangleVertices => &["center", "sides", "orientation"],
            Construction::TriangleVerticesFromAnglesSide => &["center", "side", "angles", "orientation"],
            Construction::TriangleType => &["sides", "angles"],
        }
    }

    /// 必填参数个数，其余参数有默认值
    pub fn required(&self) -> usize {
        match self {
            Construction::SingleTangentPoint => 3,
            Construction::SquareVertices
            | Construction::EquilateralTriangleVertices
            | Construction::ScaleneTriangleVertices => 2,
            Construction::RectangleVertices
            | Construction::IsoscelesTriangleVertices
            | Construction::RightTriangleVertices
            | Construction::TriangleVerticesFromAnglesSide => 3,
            Construction::TriangleType => 0,
            other => other.params().len(),
        }
    }

    /// 人类可读的签名，可选参数带 `?`
    pub fn signature(&self) -> String {
        let required = self.required();
        let params: Vec<String> = self
            .params()
            .iter()
            .enumerate()
            .map(|(i, p)| if i < required { p.to_string() } else { format!("{}?", p) })
            .collect();
        format!("{}({})", self.name(), params.join(", "))
    }

    /// 以转换后的参数调用构造
    pub fn invoke(
        &self,
        values: &[Argument],
        config: &ResolverConfig,
    ) -> Result<ConstructionOutput, EvalError> {
        let name = self.name();
        let max = self.params().len();
        if values.len() > max {
            return Err(EvalError::Arity {
                function: name,
                max,
                got: values.len(),
            });
        }

        let args = Arguments {
            function: name,
            params: self.params(),
            values,
        };
        let no_result = || EvalError::NoResult(name);

        let output = match self {
            Construction::SingleTangentPoint => {
                let circle = args.circle(0, 1)?;
                let external = args.point(2)?;
                let side = args.side(3)?;
                tangent::single_tangent_point(&circle, &external, side)
                    .map(ConstructionOutput::Point)
                    .ok_or_else(no_result)?
            }
            Construction::ChordFromCenterDistance => {
                let circle = args.circle(0, 1)?;
                let (a, b) = chord::chord_from_center_distance(&circle, args.number(2)?)
                    .ok_or_else(no_result)?;
                ConstructionOutput::Segment(a, b)
            }
            Construction::ChordFromLength => {
                let circle = args.circle(0, 1)?;
                let (a, b) = chord::chord_from_length(&circle, args.number(2)?).ok_or_else(no_result)?;
                ConstructionOutput::Segment(a, b)
            }
            Construction::CommonChord => {
                let first = args.circle(0, 1)?;
                let second = args.circle(2, 3)?;
                let (a, b) = chord::common_chord(&first, &second).ok_or_else(no_result)?;
                ConstructionOutput::Segment(a, b)
            }
            Construction::TangentLinesFromPoint => {
                let circle = args.circle(0, 1)?;
                let external = args.point(2)?;
                tangent::tangent_lines_from_point(&circle, &external)
                    .map(ConstructionOutput::TangentLines)
                    .ok_or_else(no_result)?
            }
            Construction::TangentLinesFromAngle => {
                let circle = args.circle(0, 1)?;
                tangent::tangent_lines_from_angle(&circle, args.number(2)?)
                    .map(ConstructionOutput::TangentLines)
                    .ok_or_else(no_result)?
            }
            Construction::TangentLineFromRadiusAngle => {
                let circle = args.circle(0, 1)?;
                tangent::tangent_line_from_radius_angle(&circle, args.number(2)?)
                    .map(ConstructionOutput::TangentLine)
                    .ok_or_else(no_result)?
            }
            Construction::TangentLinesFromDistance => {
                let circle = args.circle(0, 1)?;
                tangent::tangent_lines_from_distance(&circle, args.number(2)?)
                    .map(ConstructionOutput::TangentLines)
                    .ok_or_else(no_result)?
            }
            Construction::TangentLinesFromLength => {
                let circle = args.circle(0, 1)?;
                tangent::tangent_lines_from_length(&circle, args.number(2)?)
                    .map(ConstructionOutput::TangentLines)
                    .ok_or_else(no_result)?
            }
            Construction::InscribedCircle => circle::inscribed_circle(&args.points(0)?)
                .map(ConstructionOutput::Circle)
                .ok_or_else(no_result)?,
            Construction::CircumscribedCircle => circle::circumscribed_circle(&args.points(0)?)
                .map(ConstructionOutput::Circle)
                .ok_or_else(no_result)?,
            Construction::SquareVertices => ConstructionOutput::Vertices(polygon::square_vertices(
                &args.point(0)?,
                args.number(1)?,
                args.number_or(2, 0.0)?,
            )),
            Construction::RectangleVertices => ConstructionOutput::Vertices(polygon::rectangle_vertices(
                &args.point(0)?,
                args.number(1)?,
                args.number(2)?,
                args.number_or(3, 0.0)?,
            )),
            Construction::EquilateralTriangleVertices => {
                ConstructionOutput::Vertices(polygon::equilateral_triangle_vertices(
                    &args.point(0)?,
                    args.number(1)?,
                    args.number_or(2, 0.0)?,
                ))
            }
            Construction::IsoscelesTriangleVertices => {
                ConstructionOutput::Vertices(polygon::isosceles_triangle_vertices(
                    &args.point(0)?,
                    args.number(1)?,
                    args.number(2)?,
                    args.number_or(3, 0.0)?,
                )?)
            }
            Construction::RightTriangleVertices => {
                ConstructionOutput::Vertices(polygon::right_triangle_vertices(
                    &args.point(0)?,
                    args.number(1)?,
                    args.number(2)?,
                    args.number_or(3, 0.0)?,
                ))
            }
            Construction::ScaleneTriangleVertices => {
                ConstructionOutput::Vertices(polygon::scalene_triangle_vertices(
                    &args.point(0)?,
                    &args.numbers(1)?,
                    args.number_or(2, 0.0)?,
                )?)
            }
            Construction::TriangleVerticesFromAnglesSide => {
                ConstructionOutput::Vertices(polygon::triangle_vertices_from_angles_side(
                    &args.point(0)?,
                    args.number(1)?,
                    &args.numbers(2)?,
                    args.number_or(3, 0.0)?,
                )?)
            }
            Construction::TriangleType => {
                let sides = args.optional_numbers(0)?;
                let angles = args.optional_numbers(1)?;
                ConstructionOutput::Kind(classify_triangle(
                    sides.as_deref(),
                    angles.as_deref(),
                    config.classify_tolerance,
                ))
            }
        };

        Ok(output)
    }
}

/// 构造结果
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructionOutput {
    /// 单个点
    Point(Point3),
    /// 两个端点
    Segment(Point3, Point3),
    /// 一条切线（切点，外点）
    TangentLine(TangentLine),
    /// 两条切线
    TangentLines([TangentLine; 2]),
    /// 圆（圆心，半径）
    Circle(Circle),
    /// 多边形顶点
    Vertices(Vec<Point3>),
    /// 三角形类型
    Kind(TriangleKind),
}

impl ConstructionOutput {
    /// 展平为 JSON 数组
    ///
    /// 点为 `[x, y, z]`，成对结果为两元素数组，圆为 `[center, radius]`。
    pub fn to_value(&self) -> Value {
        match self {
            ConstructionOutput::Point(p) => point_value(p),
            ConstructionOutput::Segment(a, b) => json!([point_value(a), point_value(b)]),
            ConstructionOutput::TangentLine(line) => tangent_value(line),
            ConstructionOutput::TangentLines([first, second]) => {
                json!([tangent_value(first), tangent_value(second)])
            }
            ConstructionOutput::Circle(c) => json!([point_value(&c.center), c.radius]),
            ConstructionOutput::Vertices(vertices) => {
                Value::Array(vertices.iter().map(point_value).collect())
            }
            ConstructionOutput::Kind(kind) => Value::from(kind.as_str()),
        }
    }

    /// 所有坐标是否都是有限数
    pub fn is_finite(&self) -> bool {
        let finite = |p: &Point3| p.iter().all(|c| c.is_finite());
        match self {
            ConstructionOutput::Point(p) => finite(p),
            ConstructionOutput::Segment(a, b) => finite(a) && finite(b),
            ConstructionOutput::TangentLine(line) => finite(&line.point) && finite(&line.external),
            ConstructionOutput::TangentLines(lines) => lines
                .iter()
                .all(|line| finite(&line.point) && finite(&line.external)),
            ConstructionOutput::Circle(c) => finite(&c.center) && c.radius.is_finite(),
            ConstructionOutput::Vertices(vertices) => vertices.iter().all(finite),
            ConstructionOutput::Kind(_) => true,
        }
    }
}

fn point_value(p: &Point3) -> Value {
    json!([p.x, p.y, p.z])
}

fn tangent_value(line: &TangentLine) -> Value {
    json!([point_value(&line.point), point_value(&line.external)])
}

/// 按位置取参数并检查类型
struct Arguments<'a> {
    function: &'static str,
    params: &'static [&'static str],
    values: &'a [Argument],
}

impl<'a> Arguments<'a> {
    fn get(&self, index: usize) -> Result<&'a Argument, EvalError> {
        self.values.get(index).ok_or(EvalError::MissingArgument {
            function: self.function,
            param: self.params[index],
        })
    }

    /// 缺省或为 null 时返回 `None`
    fn get_optional(&self, index: usize) -> Option<&'a Argument> {
        match self.values.get(index) {
            None | Some(Argument::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn mismatch(&self, index: usize, expected: &'static str, found: &Argument) -> EvalError {
        EvalError::ArgumentType {
            function: self.function,
            param: self.params[index],
            expected,
            found: found.kind().to_string(),
        }
    }

    fn number(&self, index: usize) -> Result<f64, EvalError> {
        match self.get(index)? {
            Argument::Number(value) => Ok(*value),
            other => Err(self.mismatch(index, "number", other)),
        }
    }

    fn number_or(&self, index: usize, default: f64) -> Result<f64, EvalError> {
        match self.get_optional(index) {
            None => Ok(default),
            Some(_) => self.number(index),
        }
    }

    fn numbers(&self, index: usize) -> Result<Vec<f64>, EvalError> {
        match self.get(index)? {
            Argument::Numbers(values) => Ok(values.clone()),
            other => Err(self.mismatch(index, "array of numbers", other)),
        }
    }

    fn optional_numbers(&self, index: usize) -> Result<Option<Vec<f64>>, EvalError> {
        match self.get_optional(index) {
            None => Ok(None),
            Some(_) => self.numbers(index).map(Some),
        }
    }

    fn point(&self, index: usize) -> Result<Point3, EvalError> {
        match self.get(index)? {
            Argument::Numbers(coords) if coords.len() >= 2 => Ok(point_from_slice(coords)),
            other => Err(self.mismatch(index, "point [x, y, z]", other)),
        }
    }

    /// 点列表；数组解析失败时得到的空数组视为空列表
    fn points(&self, index: usize) -> Result<Vec<Point3>, EvalError> {
        match self.get(index)? {
            Argument::Points(list) if list.iter().all(|p| p.len() >= 2) => {
                Ok(list.iter().map(|p| point_from_slice(p)).collect())
            }
            Argument::Numbers(values) if values.is_empty() => Ok(Vec::new()),
            other => Err(self.mismatch(index, "list of points", other)),
        }
    }

    fn circle(&self, center: usize, radius: usize) -> Result<Circle, EvalError> {
        Ok(Circle::new(self.point(center)?, self.number(radius)?))
    }

    fn side(&self, index: usize) -> Result<TangentSide, EvalError> {
        match self.get_optional(index) {
            None => Ok(TangentSide::default()),
            Some(Argument::Text(text)) => text
                .parse()
                .map_err(|_| self.mismatch(index, "side 'left' or 'right'", &Argument::Text(text.clone()))),
            Some(other) => Err(self.mismatch(index, "side 'left' or 'right'", other)),
        }
    }
}

/// 构造调用求值器
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: ResolverConfig,
}

impl Evaluator {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// 解析并求值一个构造调用
    pub fn evaluate(&self, text: &str) -> Result<Value, EvalError> {
        let call = InputParser::parse_call(text)?;
        self.evaluate_call(&call)
    }

    /// 求值已解析的调用
    ///
    /// 名称在参数转换之前查找，未知名称直接拒绝。
    pub fn evaluate_call(&self, call: &CallExpr) -> Result<Value, EvalError> {
        let construction = Construction::from_name(&call.name)
            .ok_or_else(|| EvalError::UnknownFunction(call.name.clone()))?;

        let args: Vec<Argument> = call
            .args
            .iter()
            .map(|raw| InputParser::coerce(raw, construction.name()))
            .collect();

        let output = construction.invoke(&args, &self.config)?;
        if !output.is_finite() {
            return Err(EvalError::NoResult(construction.name()));
        }

        tracing::trace!(function = construction.name(), "construction evaluated");
        Ok(output.to_value())
    }
}
