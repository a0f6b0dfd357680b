//! 错误定义
//!
//! 解析、构造与求值三层错误。所有错误都只影响单个属性值，
//! 场景求解器遇到错误时保留原始文本。

use thiserror::Error;

/// 表达式解析错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Not an array literal: {0}")]
    NotAnArrayLiteral(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Malformed call: {0}")]
    MalformedCall(String),
}

/// 三角形构造不可行
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    #[error("Equal sides ({equal}) must be longer than half the base ({base})")]
    IsoscelesInfeasible { equal: f64, base: f64 },

    #[error("Triangle inequality violated for sides {a}, {b}, {c}")]
    TriangleInequality { a: f64, b: f64, c: f64 },

    #[error("Sum of angles ({sum}) must be less than pi")]
    AngleSum { sum: f64 },

    #[error("Expected 3 side lengths, got {0}")]
    SideCount(usize),

    #[error("Expected 2 angles, got {0}")]
    AngleCount(usize),
}

/// 构造调用求值错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("{function} takes at most {max} arguments, got {got}")]
    Arity {
        function: &'static str,
        max: usize,
        got: usize,
    },

    #[error("{function}: missing argument `{param}`")]
    MissingArgument {
        function: &'static str,
        param: &'static str,
    },

    #[error("{function}: argument `{param}` expected {expected}, got {found}")]
    ArgumentType {
        function: &'static str,
        param: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("{0}: no result")]
    NoResult(&'static str),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}
