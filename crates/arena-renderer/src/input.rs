//! 输入映射
//!
//! 窗口层把原始事件转换成 [`InputEvent`]，这里再把按键映射为相机命令。

use crate::camera::{CameraController, CameraPreset};

/// 相机命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    ToggleOrbit,
    Reset,
    Preset(CameraPreset),
}

impl CameraCommand {
    /// 按键说明的显示顺序
    pub const ALL: [CameraCommand; 5] = [
        CameraCommand::ToggleOrbit,
        CameraCommand::Reset,
        CameraCommand::Preset(CameraPreset::Sideline),
        CameraCommand::Preset(CameraPreset::TopDown),
        CameraCommand::Preset(CameraPreset::Baseline),
    ];

    /// 按键到命令，不区分大小写
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'o' => Some(CameraCommand::ToggleOrbit),
            'r' => Some(CameraCommand::Reset),
            '1' => Some(CameraCommand::Preset(CameraPreset::Sideline)),
            '2' => Some(CameraCommand::Preset(CameraPreset::TopDown)),
            '3' => Some(CameraCommand::Preset(CameraPreset::Baseline)),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            CameraCommand::ToggleOrbit => 'O',
            CameraCommand::Reset => 'R',
            CameraCommand::Preset(CameraPreset::Sideline) => '1',
            CameraCommand::Preset(CameraPreset::TopDown) => '2',
            CameraCommand::Preset(CameraPreset::Baseline) => '3',
        }
    }

    pub fn description(&self) -> String {
        match self {
            CameraCommand::ToggleOrbit => "Toggle orbit camera".to_string(),
            CameraCommand::Reset => "Reset camera".to_string(),
            CameraCommand::Preset(preset) => format!("{} view", preset.name()),
        }
    }

    pub fn apply(&self, camera: &mut CameraController) {
        match self {
            CameraCommand::ToggleOrbit => {
                camera.toggle_orbit();
            }
            CameraCommand::Reset => camera.reset(),
            CameraCommand::Preset(preset) => camera.select_preset(*preset),
        }
    }
}

/// 窗口层送来的离散事件
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyPressed(char),
    /// 拖拽增量，已换算为弧度
    PointerDragged { delta_yaw: f64, delta_pitch: f64 },
    ViewportResized { width: u32, height: u32 },
}
