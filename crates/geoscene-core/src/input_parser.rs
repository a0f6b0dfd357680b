//! 构造表达式解析器
//!
//! 场景文档中的属性值可以是构造调用文本，支持的语法：
//! - 数组字面量: `[1, 2.5, -3]`
//! - 点列表字面量: `[[0, 0, 0], [4, 0, 0], [0, 3, 0]]`
//! - 构造调用: `get_square_vertices([0, 0, 0], 5, 0)`
//!
//! 调用参数可以是数组、带引号的字符串、`true`/`false`、`null`/`none` 或数字。
//! 不支持嵌套调用。

use crate::error::ParseError;
use crate::registry::Construction;
use serde_json::Value;

/// 转换后的调用参数
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// 数字数组
    Numbers(Vec<f64>),
    /// 点列表（嵌套数组）
    Points(Vec<Vec<f64>>),
    /// 字符串
    Text(String),
    /// 布尔值
    Bool(bool),
    /// 空值
    Null,
    /// 数字
    Number(f64),
}

impl Argument {
    /// 参数类型的名称（用于错误信息）
    pub fn kind(&self) -> &'static str {
        match self {
            Argument::Numbers(_) => "array",
            Argument::Points(_) => "point list",
            Argument::Text(_) => "string",
            Argument::Bool(_) => "boolean",
            Argument::Null => "null",
            Argument::Number(_) => "number",
        }
    }
}

/// 解析后的构造调用
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    /// 函数名
    pub name: String,
    /// 原始参数文本（已去除首尾空白）
    pub args: Vec<String>,
}

/// 表达式解析器
pub struct InputParser;

impl InputParser {
    /// 判断文本是否形如数组字面量
    pub fn is_array_literal(text: &str) -> bool {
        let text = text.trim();
        text.starts_with('[') && text.ends_with(']')
    }

    /// 解析数字数组字面量
    ///
    /// 数组内只允许有限数字，因此直接按逗号切分。`nan`/`inf` 视为无效数字。
    pub fn parse_array_literal(text: &str) -> Result<Vec<f64>, ParseError> {
        let inner = Self::bracket_inner(text)?;
        if inner.trim().is_empty() {
            return Ok(Vec::new());
        }

        inner
            .split(',')
            .map(|segment| {
                let segment = segment.trim();
                segment
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| ParseError::InvalidNumber(segment.to_string()))
            })
            .collect()
    }

    /// 解析点列表字面量 `[[x, y, z], ...]`
    pub fn parse_point_list(text: &str) -> Result<Vec<Vec<f64>>, ParseError> {
        let inner = Self::bracket_inner(text)?;
        Self::split_top_level(inner)
            .iter()
            .map(|segment| Self::parse_array_literal(segment))
            .collect()
    }

    /// 将数组文本解析为 JSON 值
    ///
    /// 先按数字数组解析，失败后按点列表解析。
    pub fn parse_array_value(text: &str) -> Result<Value, ParseError> {
        match Self::parse_array_literal(text) {
            Ok(numbers) => Ok(Value::from(numbers)),
            Err(flat_err) => Self::parse_point_list(text)
                .map(Value::from)
                .map_err(|_| flat_err),
        }
    }

    /// 解析构造调用 `name(arg, arg, ...)`
    ///
    /// 函数名取第一个 `(` 之前的部分，参数取第一个 `(` 与最后一个 `)` 之间的部分。
    /// 只在方括号深度为 0 且不在引号内时按逗号切分，空参数被丢弃。
    pub fn parse_call(text: &str) -> Result<CallExpr, ParseError> {
        let malformed = || ParseError::MalformedCall(text.to_string());

        let open = text.find('(').ok_or_else(malformed)?;
        let close = text.rfind(')').ok_or_else(malformed)?;
        if close < open {
            return Err(malformed());
        }

        let name = text[..open].trim();
        if name.is_empty() {
            return Err(malformed());
        }

        Ok(CallExpr {
            name: name.to_string(),
            args: Self::split_top_level(&text[open + 1..close]),
        })
    }

    /// 将原始参数文本转换为类型化参数
    ///
    /// 转换失败时退回到最宽松的解释：数组解析失败得到空数组，
    /// 无法识别的标记保留为字符串。
    pub fn coerce(raw: &str, function: &str) -> Argument {
        let raw = raw.trim();

        // 1. 数组
        if Self::is_array_literal(raw) {
            if let Ok(numbers) = Self::parse_array_literal(raw) {
                return Argument::Numbers(numbers);
            }
            if let Ok(points) = Self::parse_point_list(raw) {
                return Argument::Points(points);
            }
            tracing::debug!(arg = raw, function, "unparseable array argument, using []");
            return Argument::Numbers(Vec::new());
        }

        // 2. 字符串
        if raw.starts_with('\'') || raw.starts_with('"') {
            let text = raw.trim_matches(|c: char| c == '\'' || c == '"');
            if function == Construction::SingleTangentPoint.name() {
                return Argument::Text(Self::remap_side(text).to_string());
            }
            return Argument::Text(text.to_string());
        }

        // 3. 布尔值 / 空值
        match raw.to_ascii_lowercase().as_str() {
            "true" => return Argument::Bool(true),
            "false" => return Argument::Bool(false),
            "null" | "none" => return Argument::Null,
            _ => {}
        }

        // 4. 数字，失败时保留原文
        match raw.parse::<f64>() {
            Ok(value) => Argument::Number(value),
            Err(_) => Argument::Text(raw.to_string()),
        }
    }

    /// 切点方向的同义词
    fn remap_side(side: &str) -> &str {
        match side {
            "upper" => "right",
            "lower" => "left",
            other => other,
        }
    }

    /// 去掉首尾方括号，返回内部文本
    fn bracket_inner(text: &str) -> Result<&str, ParseError> {
        let trimmed = text.trim();
        if trimmed.len() < 2 || !Self::is_array_literal(trimmed) {
            return Err(ParseError::NotAnArrayLiteral(text.to_string()));
        }
        Ok(&trimmed[1..trimmed.len() - 1])
    }

    /// 按顶层逗号切分
    fn split_top_level(text: &str) -> Vec<String> {
        let mut parts = Vec::new();
        let mut current = String::new();
        let mut depth = 0i32;
        let mut quote: Option<char> = None;

        for ch in text.chars() {
            match (quote, ch) {
                (Some(q), c) if c == q => quote = None,
                (Some(_), _) => {}
                (None, '\'') | (None, '"') => quote = Some(ch),
                (None, '[') => depth += 1,
                (None, ']') => depth -= 1,
                (None, ',') if depth == 0 => {
                    Self::push_segment(&mut parts, &current);
                    current.clear();
                    continue;
                }
                _ => {}
            }
            current.push(ch);
        }
        Self::push_segment(&mut parts, &current);

        parts
    }

    fn push_segment(parts: &mut Vec<String>, segment: &str) {
        let segment = segment.trim();
        if !segment.is_empty() {
            parts.push(segment.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array_literal() {
        assert_eq!(
            InputParser::parse_array_literal("[1, 2.5, -3]").unwrap(),
            vec![1.0, 2.5, -3.0]
        );
        assert_eq!(InputParser::parse_array_literal("  [ ]  ").unwrap(), Vec::<f64>::new());
        assert_eq!(InputParser::parse_array_literal("[]").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_parse_array_literal_errors() {
        assert!(matches!(
            InputParser::parse_array_literal("1,2"),
            Err(ParseError::NotAnArrayLiteral(_))
        ));
        assert!(matches!(
            InputParser::parse_array_literal("[1, x]"),
            Err(ParseError::InvalidNumber(s)) if s == "x"
        ));
        assert!(matches!(
            InputParser::parse_array_literal("[1, , 2]"),
            Err(ParseError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_array_literal_rejects_non_finite() {
        assert!(matches!(
            InputParser::parse_array_literal("[nan, 1, 2]"),
            Err(ParseError::InvalidNumber(s)) if s == "nan"
        ));
        assert!(InputParser::parse_array_literal("[1, inf]").is_err());
        assert!(InputParser::parse_array_literal("[-infinity, 0]").is_err());
        assert!(InputParser::parse_array_value("[[0, 0], [NaN, 1]]").is_err());
    }

    #[test]
    fn test_parse_point_list() {
        let points = InputParser::parse_point_list("[[0, 0, 0], [4, 0], [0, 3, 1]]").unwrap();
        assert_eq!(points, vec![vec![0.0, 0.0, 0.0], vec![4.0, 0.0], vec![0.0, 3.0, 1.0]]);

        assert!(InputParser::parse_point_list("[[0, 0], 1]").is_err());
        assert!(InputParser::parse_point_list("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_call_nested_arrays() {
        let call = InputParser::parse_call("get_square_vertices([0, 0, 0], 5, 0)").unwrap();
        assert_eq!(call.name, "get_square_vertices");
        assert_eq!(call.args, vec!["[0, 0, 0]", "5", "0"]);
    }

    #[test]
    fn test_parse_call_point_list_argument() {
        let call =
            InputParser::parse_call("get_inscribed_circle([[0, 0, 0], [4, 0, 0], [0, 3, 0]])")
                .unwrap();
        assert_eq!(call.args.len(), 1);
    }

    #[test]
    fn test_parse_call_trailing_comma_and_empty() {
        let call = InputParser::parse_call("f(1, 2, )").unwrap();
        assert_eq!(call.args, vec!["1", "2"]);

        let call = InputParser::parse_call("f()").unwrap();
        assert!(call.args.is_empty());
    }

    #[test]
    fn test_parse_call_quoted_comma() {
        let call = InputParser::parse_call("f('a, b', 1)").unwrap();
        assert_eq!(call.args, vec!["'a, b'", "1"]);
    }

    #[test]
    fn test_parse_call_malformed() {
        assert!(matches!(
            InputParser::parse_call("get_square_vertices"),
            Err(ParseError::MalformedCall(_))
        ));
        assert!(InputParser::parse_call(")f(").is_err());
        assert!(InputParser::parse_call("(1, 2)").is_err());
    }

    #[test]
    fn test_coerce_priority() {
        let f = "get_square_vertices";
        assert_eq!(InputParser::coerce("[1, 2]", f), Argument::Numbers(vec![1.0, 2.0]));
        assert_eq!(InputParser::coerce("[1, oops]", f), Argument::Numbers(vec![]));
        assert_eq!(InputParser::coerce("'left'", f), Argument::Text("left".into()));
        assert_eq!(InputParser::coerce("TRUE", f), Argument::Bool(true));
        assert_eq!(InputParser::coerce("False", f), Argument::Bool(false));
        assert_eq!(InputParser::coerce("None", f), Argument::Null);
        assert_eq!(InputParser::coerce("null", f), Argument::Null);
        assert_eq!(InputParser::coerce("-2.5", f), Argument::Number(-2.5));
        assert_eq!(InputParser::coerce("radius", f), Argument::Text("radius".into()));
    }

    #[test]
    fn test_coerce_side_synonyms_only_for_single_tangent() {
        let tangent = Construction::SingleTangentPoint.name();
        assert_eq!(InputParser::coerce("'upper'", tangent), Argument::Text("right".into()));
        assert_eq!(InputParser::coerce("\"lower\"", tangent), Argument::Text("left".into()));
        assert_eq!(InputParser::coerce("'middle'", tangent), Argument::Text("middle".into()));

        assert_eq!(
            InputParser::coerce("'upper'", "get_square_vertices"),
            Argument::Text("upper".into())
        );
    }

    #[test]
    fn test_parse_array_value() {
        assert_eq!(
            InputParser::parse_array_value("[1, 2]").unwrap(),
            serde_json::json!([1.0, 2.0])
        );
        assert_eq!(
            InputParser::parse_array_value("[[1, 2], [3, 4]]").unwrap(),
            serde_json::json!([[1.0, 2.0], [3.0, 4.0]])
        );
        assert!(InputParser::parse_array_value("[a]").is_err());
    }
}
