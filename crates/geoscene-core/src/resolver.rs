//! 场景求解器
//!
//! 遍历每个位置记录的每个属性，把数组字面量和构造调用文本替换为数值结果。
//! 序列属性逐元素处理。求值失败只影响单个值：原始文本保留，并记录警告。

use crate::config::ResolverConfig;
use crate::error::EvalError;
use crate::input_parser::InputParser;
use crate::registry::{Construction, Evaluator};
use crate::scene::SceneDocument;
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::ops::{Add, AddAssign};

/// 一次求解的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// 被替换为数值的属性值个数
    pub resolved: usize,
    /// 形如表达式但未能求值的属性值个数
    pub unresolved: usize,
}

impl Add for ResolveReport {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            resolved: self.resolved + other.resolved,
            unresolved: self.unresolved + other.unresolved,
        }
    }
}

impl AddAssign for ResolveReport {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// 单个属性值的求解结果
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// 替换为数值
    Replaced(Value),
    /// 不是表达式，保持原样
    Kept,
    /// 表达式求值失败，保持原样
    Failed(EvalError),
}

/// 场景求解器
#[derive(Debug, Clone, Default)]
pub struct SceneResolver {
    evaluator: Evaluator,
}

impl SceneResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        self.evaluator.config()
    }

    /// 求解整个场景文档（只修改 `positions`）
    pub fn resolve(&self, document: &mut SceneDocument) -> ResolveReport {
        self.resolve_positions(&mut document.positions)
    }

    /// 求解无类型的位置表
    pub fn resolve_positions(&self, positions: &mut Map<String, Value>) -> ResolveReport {
        let report = if self.config().parallel {
            let records: Vec<(&String, &mut Value)> = positions.iter_mut().collect();
            records
                .into_par_iter()
                .map(|(id, record)| self.resolve_record(id, record))
                .reduce(ResolveReport::default, |a, b| a + b)
        } else {
            positions
                .iter_mut()
                .map(|(id, record)| self.resolve_record(id, record))
                .fold(ResolveReport::default(), |a, b| a + b)
        };

        tracing::info!(
            entities = positions.len(),
            resolved = report.resolved,
            unresolved = report.unresolved,
            "Resolved scene positions"
        );
        report
    }

    /// 求解单个实体的位置记录
    fn resolve_record(&self, id: &str, record: &mut Value) -> ResolveReport {
        let mut report = ResolveReport::default();

        let Some(attributes) = record.as_object_mut() else {
            tracing::warn!(entity = id, "position record is not an object, skipped");
            return report;
        };

        for (name, value) in attributes.iter_mut() {
            match value {
                Value::Array(items) => {
                    for item in items.iter_mut() {
                        report += self.apply(id, name, item);
                    }
                }
                other => report += self.apply(id, name, other),
            }
        }

        report
    }

    fn apply(&self, id: &str, attribute: &str, value: &mut Value) -> ResolveReport {
        match self.resolve_value(value) {
            Resolution::Replaced(resolved) => {
                tracing::debug!(entity = id, attribute, "resolved value");
                *value = resolved;
                ResolveReport { resolved: 1, unresolved: 0 }
            }
            Resolution::Kept => ResolveReport::default(),
            Resolution::Failed(err) => {
                let text = value.as_str().unwrap_or_default();
                tracing::warn!(entity = id, attribute, call = %text, error = %err, "could not resolve value");
                ResolveReport { resolved: 0, unresolved: 1 }
            }
        }
    }

    /// 单值规则
    ///
    /// 非字符串保持不变。带方括号的字符串先按数组字面量解析，
    /// 失败后继续检查；包含任一已注册函数名的字符串交给求值器。
    pub fn resolve_value(&self, value: &Value) -> Resolution {
        let Some(text) = value.as_str() else {
            return Resolution::Kept;
        };

        let mut literal_error = None;
        if InputParser::is_array_literal(text) {
            match InputParser::parse_array_value(text) {
                Ok(parsed) => return Resolution::Replaced(parsed),
                Err(err) => literal_error = Some(err),
            }
        }

        if Construction::all_names().any(|name| text.contains(name)) {
            return match self.evaluator.evaluate(text) {
                Ok(result) => Resolution::Replaced(result),
                Err(err) => Resolution::Failed(err),
            };
        }

        match literal_error {
            Some(err) => Resolution::Failed(err.into()),
            None => Resolution::Kept,
        }
    }
}
