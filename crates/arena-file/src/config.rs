//! 场馆配置文件
//!
//! 配置以 JSON 保存，所有字段都可省略，缺失的字段取默认值。
//! 读入后立即校验，非法配置不会交给构建器。

use std::fs;
use std::path::Path;

use arena_core::config::VenueConfig;
use tracing::info;

use crate::error::FileError;

/// 从 JSON 文本解析并校验配置
pub fn parse_venue_config(json: &str) -> Result<VenueConfig, FileError> {
    let config: VenueConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// 从文件读取配置
pub fn load_venue_config(path: &Path) -> Result<VenueConfig, FileError> {
    let json = fs::read_to_string(path)?;
    let config = parse_venue_config(&json)?;
    info!(path = %path.display(), "venue config loaded");
    Ok(config)
}

/// 未给出路径时使用内置默认值
pub fn load_venue_config_or_default(path: Option<&Path>) -> Result<VenueConfig, FileError> {
    match path {
        Some(path) => load_venue_config(path),
        None => Ok(VenueConfig::default()),
    }
}

/// 把配置写成格式化的 JSON；写入前先校验
pub fn save_venue_config(config: &VenueConfig, path: &Path) -> Result<(), FileError> {
    config.validate()?;
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "venue config saved");
    Ok(())
}
