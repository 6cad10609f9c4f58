//! 渲染服务抽象
//!
//! 核心只向渲染端单向提交几何描述和相机矩阵，不依赖任何图形后端。

use crate::geometry::{Curve, Solid};
use crate::material::MaterialHandle;
use crate::math::Matrix4;

/// 渲染端需要实现的接口
pub trait RenderService {
    /// 提交一条曲线，连接方式见 [`Curve::mode`]
    fn add_curve(&mut self, name: &str, curve: &Curve, material: MaterialHandle);

    /// 提交一个填充实体
    fn add_solid(&mut self, name: &str, solid: &Solid);

    /// 同步相机的视图矩阵和投影矩阵
    fn set_camera(&mut self, view: &Matrix4, projection: &Matrix4);
}

/// 记录所有提交内容的渲染端，用于无界面测试和导出
#[derive(Debug, Default)]
pub struct RecordingRenderService {
    pub curves: Vec<(String, Curve, MaterialHandle)>,
    pub solids: Vec<(String, Solid)>,
    pub camera: Option<(Matrix4, Matrix4)>,
    pub camera_updates: usize,
}

impl RecordingRenderService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn curve(&self, name: &str) -> Option<&Curve> {
        self.curves
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, curve, _)| curve)
    }

    pub fn solid(&self, name: &str) -> Option<&Solid> {
        self.solids.iter().find(|(n, _)| n == name).map(|(_, solid)| solid)
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty() && self.solids.is_empty()
    }
}

impl RenderService for RecordingRenderService {
    fn add_curve(&mut self, name: &str, curve: &Curve, material: MaterialHandle) {
        self.curves.push((name.to_string(), curve.clone(), material));
    }

    fn add_solid(&mut self, name: &str, solid: &Solid) {
        self.solids.push((name.to_string(), solid.clone()));
    }

    fn set_camera(&mut self, view: &Matrix4, projection: &Matrix4) {
        self.camera = Some((*view, *projection));
        self.camera_updates += 1;
    }
}
