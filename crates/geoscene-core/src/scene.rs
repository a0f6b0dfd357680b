//! 场景文档数据模型
//!
//! 场景由实体列表和按实体 ID 索引的位置记录组成。位置记录保持为
//! 无类型的 JSON 对象，求解器只替换其中的属性值。实体只解析 `id` 和
//! `type`，其余字段（颜色、朝向、`relationships` 等）原样透传，
//! 包括显式的 `null`。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 实体类型
///
/// 未知类型保留原始字符串，不影响文档加载。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityKind {
    Circle,
    Semicircle,
    Square,
    Rectangle,
    Triangle,
    Polygon,
    Point,
    Line,
    Other(String),
}

impl EntityKind {
    pub fn as_str(&self) -> &str {
        match self {
            EntityKind::Circle => "circle",
            EntityKind::Semicircle => "semicircle",
            EntityKind::Square => "square",
            EntityKind::Rectangle => "rectangle",
            EntityKind::Triangle => "triangle",
            EntityKind::Polygon => "polygon",
            EntityKind::Point => "point",
            EntityKind::Line => "line",
            EntityKind::Other(name) => name,
        }
    }
}

impl From<String> for EntityKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "circle" => EntityKind::Circle,
            "semicircle" => EntityKind::Semicircle,
            "square" => EntityKind::Square,
            "rectangle" => EntityKind::Rectangle,
            "triangle" => EntityKind::Triangle,
            "polygon" => EntityKind::Polygon,
            "point" => EntityKind::Point,
            "line" => EntityKind::Line,
            _ => EntityKind::Other(name),
        }
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// 场景实体
///
/// 求解过程不修改实体。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: EntityKind,

    /// 其余字段
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity {
    pub fn color(&self) -> Option<&Value> {
        self.extra.get("color")
    }

    pub fn orientation(&self) -> Option<&Value> {
        self.extra.get("orientation")
    }
}

/// 场景文档
///
/// 输入中没有 `entities` 时输出也不写；`positions` 总是写出。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,

    /// 实体 ID → 位置记录（属性名 → 属性值）
    #[serde(default)]
    pub positions: Map<String, Value>,

    /// 其余顶层字段（含 `relationships`）
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SceneDocument {
    /// 全部实体
    pub fn entities(&self) -> &[Entity] {
        self.entities.as_deref().unwrap_or_default()
    }

    /// 按 ID 查找实体
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities().iter().find(|e| e.id == id)
    }

    pub fn relationships(&self) -> Option<&Value> {
        self.extra.get("relationships")
    }

    /// 实体的位置记录
    pub fn position(&self, id: &str) -> Option<&Map<String, Value>> {
        self.positions.get(id).and_then(Value::as_object)
    }

    /// 位置记录中的单个属性
    pub fn attribute(&self, id: &str, name: &str) -> Option<&Value> {
        self.position(id).and_then(|record| record.get(name))
    }
}
