//! 轨道相机
//!
//! 相机始终注视一个固定目标点（预设下为世界原点），支持三个预设机位、
//! 轨道拖拽和开关。投影参数与相机状态分开保存，改变视口只影响投影。

use std::f64::consts::PI;

use arena_core::math::{Matrix4, Point3, Vector3};
use arena_core::render::RenderService;
use nalgebra::Perspective3;
use tracing::{debug, info};

/// 俯仰角上下限（度）。限制在极点之前，避免相机翻越竖直方向。
pub const PITCH_LIMIT_DEG: f64 = 89.0;

/// 单次拖拽允许的最大偏航增量（弧度）
pub const MAX_YAW_STEP: f64 = PI;

/// 投影后 w 分量的最小值，小于它的点视为在相机后方
const MIN_CLIP_W: f64 = 1e-6;

/// 预设机位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraPreset {
    /// 边线看台视角
    Sideline,
    /// 正上方俯视
    TopDown,
    /// 底线视角
    Baseline,
}

impl CameraPreset {
    pub const ALL: [CameraPreset; 3] = [
        CameraPreset::Sideline,
        CameraPreset::TopDown,
        CameraPreset::Baseline,
    ];

    pub fn position(&self) -> Point3 {
        match self {
            CameraPreset::Sideline => Point3::new(0.0, 15.0, 30.0),
            CameraPreset::TopDown => Point3::new(0.0, 30.0, 0.0),
            CameraPreset::Baseline => Point3::new(20.0, 10.0, 0.0),
        }
    }

    /// 预设总是注视世界原点
    pub fn target(&self) -> Point3 {
        Point3::origin()
    }

    pub fn name(&self) -> &'static str {
        match self {
            CameraPreset::Sideline => "Sideline",
            CameraPreset::TopDown => "Top-down",
            CameraPreset::Baseline => "Baseline",
        }
    }
}

/// 当前所处的视角状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Preset(CameraPreset),
    /// 拖拽后离开预设
    Free,
}

/// 相机状态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Point3,
    pub target: Point3,
    pub orbit_enabled: bool,
    pub mode: CameraMode,
}

impl CameraState {
    fn at_preset(preset: CameraPreset, orbit_enabled: bool) -> Self {
        Self {
            position: preset.position(),
            target: preset.target(),
            orbit_enabled,
            mode: CameraMode::Preset(preset),
        }
    }
}

/// 透视投影参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// 垂直视场角（弧度）
    pub fov_y: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: 75f64.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Projection {
    pub fn matrix(&self) -> Matrix4 {
        Perspective3::new(self.aspect, self.fov_y, self.near, self.far).to_homogeneous()
    }
}

/// 相机控制器
///
/// 整个程序只有一个实例，由 `SceneContext` 独占。
#[derive(Debug, Clone)]
pub struct CameraController {
    state: CameraState,
    projection: Projection,
}

impl CameraController {
    /// 以边线预设创建，轨道拖拽默认开启
    pub fn new() -> Self {
        Self {
            state: CameraState::at_preset(CameraPreset::Sideline, true),
            projection: Projection::default(),
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// 切换到预设机位，不论之前处于什么状态
    pub fn select_preset(&mut self, preset: CameraPreset) {
        self.state = CameraState::at_preset(preset, self.state.orbit_enabled);
        info!(preset = preset.name(), "camera preset selected");
    }

    /// 回到边线预设
    pub fn reset(&mut self) {
        self.select_preset(CameraPreset::Sideline);
    }

    /// 切换轨道拖拽开关，返回新的开关状态
    pub fn toggle_orbit(&mut self) -> bool {
        self.state.orbit_enabled = !self.state.orbit_enabled;
        info!(enabled = self.state.orbit_enabled, "orbit toggled");
        self.state.orbit_enabled
    }

    /// 绕目标点旋转相机（弧度）
    ///
    /// 关闭轨道时不做任何改变。偏航增量截断到 ±[`MAX_YAW_STEP`]，
    /// 俯仰角截断到 ±[`PITCH_LIMIT_DEG`]；非有限值按 0 处理。
    /// 为 0 的分量保持原角度不变，所以 `on_drag(0.0, 0.0)` 不会移动相机。
    pub fn on_drag(&mut self, delta_yaw: f64, delta_pitch: f64) {
        if !self.state.orbit_enabled {
            return;
        }
        self.state.mode = CameraMode::Free;

        let delta_yaw = if delta_yaw.is_finite() { delta_yaw.clamp(-MAX_YAW_STEP, MAX_YAW_STEP) } else { 0.0 };
        let delta_pitch = if delta_pitch.is_finite() { delta_pitch } else { 0.0 };
        if delta_yaw == 0.0 && delta_pitch == 0.0 {
            return;
        }

        let offset = self.state.position - self.state.target;
        let radius = offset.norm();
        if radius == 0.0 {
            return;
        }

        let yaw = offset.x.atan2(offset.z) + delta_yaw;
        let mut pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();
        if delta_pitch != 0.0 {
            let limit = PITCH_LIMIT_DEG.to_radians();
            pitch = (pitch + delta_pitch).clamp(-limit, limit);
        }

        let (pitch_sin, pitch_cos) = pitch.sin_cos();
        let (yaw_sin, yaw_cos) = yaw.sin_cos();
        self.state.position = self.state.target
            + Vector3::new(pitch_cos * yaw_sin, pitch_sin, pitch_cos * yaw_cos) * radius;

        debug!(yaw, pitch, "camera orbited");
    }

    /// 更新宽高比，只影响投影；非正或非有限值忽略
    pub fn on_resize(&mut self, aspect: f64) -> bool {
        if aspect.is_finite() && aspect > 0.0 {
            self.projection.aspect = aspect;
            true
        } else {
            false
        }
    }

    /// 视图矩阵
    ///
    /// 视线接近竖直时改用 -Z 作为上方向，避免 look-at 退化。
    pub fn view_matrix(&self) -> Matrix4 {
        let eye = self.state.position;
        let target = self.state.target;
        let forward = target - eye;
        let up = if forward.cross(&Vector3::y()).norm() < 1e-9 * forward.norm().max(1.0) {
            -Vector3::z()
        } else {
            Vector3::y()
        };
        Matrix4::look_at_rh(&eye, &target, &up)
    }

    pub fn view_projection(&self) -> Matrix4 {
        self.projection.matrix() * self.view_matrix()
    }

    /// 把当前相机同步到渲染端，不修改相机状态
    pub fn tick<R: RenderService + ?Sized>(&self, service: &mut R) {
        service.set_camera(&self.view_matrix(), &self.projection.matrix());
    }

    /// 世界坐标转屏幕坐标，见 [`project_point`]
    pub fn world_to_screen(&self, point: &Point3, width: f64, height: f64) -> Option<[f64; 2]> {
        project_point(&self.view_projection(), point, width, height)
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

fn ndc_to_screen(x: f64, y: f64, width: f64, height: f64) -> [f64; 2] {
    [(x + 1.0) * 0.5 * width, (1.0 - y) * 0.5 * height]
}

/// 世界坐标转屏幕坐标（像素，原点在左上角）；在相机后方时返回 `None`
pub fn project_point(view_proj: &Matrix4, point: &Point3, width: f64, height: f64) -> Option<[f64; 2]> {
    let clip = view_proj * point.to_homogeneous();
    if clip.w < MIN_CLIP_W {
        return None;
    }
    Some(ndc_to_screen(clip.x / clip.w, clip.y / clip.w, width, height))
}

/// 投影一条线段，先在裁剪空间按近平面截断；整段在相机后方时返回 `None`
pub fn project_segment(
    view_proj: &Matrix4,
    segment: &[Point3; 2],
    width: f64,
    height: f64,
) -> Option<[[f64; 2]; 2]> {
    let mut a = view_proj * segment[0].to_homogeneous();
    let mut b = view_proj * segment[1].to_homogeneous();

    match (a.w >= MIN_CLIP_W, b.w >= MIN_CLIP_W) {
        (false, false) => return None,
        (true, false) => {
            let t = (a.w - MIN_CLIP_W) / (a.w - b.w);
            b = a + (b - a) * t;
        }
        (false, true) => {
            let t = (b.w - MIN_CLIP_W) / (b.w - a.w);
            a = b + (a - b) * t;
        }
        (true, true) => {}
    }

    Some([
        ndc_to_screen(a.x / a.w, a.y / a.w, width, height),
        ndc_to_screen(b.x / b.w, b.y / b.w, width, height),
    ])
}
