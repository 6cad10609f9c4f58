//! 叠加层状态

use arena_renderer::camera::{CameraController, CameraMode};
use arena_renderer::input::CameraCommand;
use tracing::debug;

/// 切换操作说明显隐的按键
pub const LEGEND_KEY: char = 'h';

/// 叠加层每帧显示的内容
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    /// 静态比分
    pub score: String,
    /// 当前视角名
    pub view_name: String,
    pub orbit_enabled: bool,
    /// 是否显示操作说明
    pub show_legend: bool,
}

impl OverlayState {
    pub fn new(score: impl Into<String>) -> Self {
        Self {
            score: score.into(),
            view_name: String::new(),
            orbit_enabled: true,
            show_legend: true,
        }
    }

    /// 从相机读取最新状态
    pub fn sync_camera(&mut self, camera: &CameraController) {
        let state = camera.state();
        self.orbit_enabled = state.orbit_enabled;
        self.view_name = match state.mode {
            CameraMode::Preset(preset) => preset.name().to_string(),
            CameraMode::Free => "Free".to_string(),
        };
    }

    pub fn toggle_legend(&mut self) {
        self.show_legend = !self.show_legend;
        debug!(visible = self.show_legend, "legend toggled");
    }

    pub fn orbit_label(&self) -> &'static str {
        if self.orbit_enabled {
            "Orbit: ON"
        } else {
            "Orbit: OFF"
        }
    }

    /// 操作说明，每项为 (按键, 说明)
    pub fn legend_entries() -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = CameraCommand::ALL
            .iter()
            .map(|command| (command.key().to_string(), command.description()))
            .collect();
        entries.push(("Drag".to_string(), "Orbit around the court".to_string()));
        entries.push((LEGEND_KEY.to_ascii_uppercase().to_string(), "Show or hide this help".to_string()));
        entries
    }
}
