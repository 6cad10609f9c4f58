//! Arena 文件处理
//!
//! 支持：
//! - 场馆配置（JSON）读写
//! - 组装好的场景导出为 JSON

pub mod config;
pub mod error;
pub mod export;

pub use config::{load_venue_config, load_venue_config_or_default, save_venue_config};
pub use error::FileError;
pub use export::{export_scene, read_scene_export, SceneExport};
