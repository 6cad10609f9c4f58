//! 文件操作错误定义

use arena_core::error::GeometryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid venue config: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Unsupported export version: {0}")]
    UnsupportedVersion(u32),
}
