//! Arena 渲染端
//!
//! 相机控制、输入映射、场景上下文以及线框化工具。
//! 具体的窗口和绘制由上层实现 [`arena_core::render::RenderService`] 完成。

pub mod camera;
pub mod context;
pub mod input;
pub mod tessellate;
pub mod vertex;

pub use camera::{CameraController, CameraMode, CameraPreset, CameraState, Projection};
pub use context::SceneContext;
pub use input::{CameraCommand, InputEvent};
pub use tessellate::solid_edges;
pub use vertex::{LineBatch, LineVertex};
