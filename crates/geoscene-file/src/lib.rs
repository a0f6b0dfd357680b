//! GeoScene 文件处理
//!
//! 场景文档与求解配置的 JSON 读写。默认输入为 `current_scene.json`，
//! 求解结果写入 `current_scene_final.json`。

pub mod error;
pub mod scene_io;

pub use error::FileError;
pub use scene_io::{
    load_config, load_scene, parse_scene, save_scene, scene_to_string, DEFAULT_INPUT,
    DEFAULT_OUTPUT,
};
