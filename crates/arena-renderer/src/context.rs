//! 场景上下文
//!
//! 把渲染端和唯一的相机控制器绑在一起，显式传递，不使用全局状态。
//! 所有输入事件在两帧之间同步处理，`tick` 每帧由外部驱动调用一次。

use arena_core::render::RenderService;
use arena_core::scene::VenueScene;
use tracing::{debug, warn};

use crate::camera::CameraController;
use crate::input::{CameraCommand, InputEvent};

pub struct SceneContext<R: RenderService> {
    service: R,
    camera: CameraController,
}

impl<R: RenderService> SceneContext<R> {
    /// 把场景一次性提交给渲染端，并以默认机位创建相机
    pub fn new(mut service: R, scene: &VenueScene) -> Self {
        scene.submit(&mut service);
        Self {
            service,
            camera: CameraController::new(),
        }
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn service(&self) -> &R {
        &self.service
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPressed(key) => {
                if let Some(command) = CameraCommand::from_key(key) {
                    debug!(?command, "key command");
                    command.apply(&mut self.camera);
                }
            }
            InputEvent::PointerDragged {
                delta_yaw,
                delta_pitch,
            } => self.camera.on_drag(delta_yaw, delta_pitch),
            InputEvent::ViewportResized { width, height } => {
                if height == 0 || !self.camera.on_resize(width as f64 / height as f64) {
                    warn!(width, height, "ignoring degenerate viewport size");
                }
            }
        }
    }

    /// 每帧同步相机矩阵到渲染端
    pub fn tick(&mut self) {
        self.camera.tick(&mut self.service);
    }
}
