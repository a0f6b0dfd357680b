//! 场景文档 JSON 读写
//!
//! 输出为两空格缩进的 JSON，键顺序与输入一致。

use crate::error::FileError;
use geoscene_core::config::ResolverConfig;
use geoscene_core::scene::SceneDocument;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// 默认输入文件
pub const DEFAULT_INPUT: &str = "current_scene.json";

/// 默认输出文件
pub const DEFAULT_OUTPUT: &str = "current_scene_final.json";

/// 从字符串解析场景文档
pub fn parse_scene(text: &str) -> Result<SceneDocument, FileError> {
    let value: Value = serde_json::from_str(text)?;
    scene_from_value(value)
}

/// 将场景文档序列化为字符串
pub fn scene_to_string(document: &SceneDocument) -> Result<String, FileError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// 从文件加载场景文档
pub fn load_scene(path: &Path) -> Result<SceneDocument, FileError> {
    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    let document = scene_from_value(value)?;

    tracing::info!(
        "Loaded {} entities, {} position records from {}",
        document.entities().len(),
        document.positions.len(),
        path.display()
    );

    Ok(document)
}

/// 保存场景文档到文件
pub fn save_scene(document: &SceneDocument, path: &Path) -> Result<(), FileError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush()?;

    tracing::info!(
        "Saved {} entities, {} position records to {}",
        document.entities().len(),
        document.positions.len(),
        path.display()
    );

    Ok(())
}

/// 加载求解配置，缺失的字段取默认值
pub fn load_config(path: &Path) -> Result<ResolverConfig, FileError> {
    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    if !value.is_object() {
        return Err(FileError::InvalidFormat(format!(
            "{}: resolver config must be a JSON object",
            path.display()
        )));
    }

    let config: ResolverConfig = serde_json::from_value(value)?;
    tracing::info!(?config, "Loaded resolver config from {}", path.display());
    Ok(config)
}

fn scene_from_value(value: Value) -> Result<SceneDocument, FileError> {
    let Some(object) = value.as_object() else {
        return Err(FileError::InvalidFormat(
            "scene document must be a JSON object".to_string(),
        ));
    };

    if let Some(positions) = object.get("positions") {
        if !positions.is_object() {
            return Err(FileError::InvalidFormat(
                "`positions` must be an object keyed by entity id".to_string(),
            ));
        }
    }

    Ok(serde_json::from_value(value)?)
}
