//! 几何描述
//!
//! 生成器和构建器只产出描述，不负责绘制：
//! - 曲线 (Curve)：有序点列 + 绘制模式
//! - 实体 (Solid)：填充网格图元 + 位置 + 材质句柄

use crate::material::MaterialHandle;
use crate::math::{BoundingBox3, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// 绘制模式，告诉渲染端如何连接点列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawMode {
    /// 开放折线，相邻点相连
    Polyline,
    /// 闭合环，末点与首点相连
    LineLoop,
    /// 互不相连的线段，每两个点一段
    Segments,
}

/// 有序点列
///
/// 点的插入顺序决定线段的连接顺序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    points: Vec<Point3>,
    mode: DrawMode,
}

impl Curve {
    pub fn new(points: Vec<Point3>, mode: DrawMode) -> Self {
        Self { points, mode }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 首末点重合
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// 展开为独立线段，按绘制模式连接
    pub fn segments(&self) -> Vec<[Point3; 2]> {
        match self.mode {
            DrawMode::Segments => self
                .points
                .chunks_exact(2)
                .map(|pair| [pair[0], pair[1]])
                .collect(),
            DrawMode::Polyline => self.points.windows(2).map(|w| [w[0], w[1]]).collect(),
            DrawMode::LineLoop => {
                let mut segments: Vec<[Point3; 2]> =
                    self.points.windows(2).map(|w| [w[0], w[1]]).collect();
                if self.points.len() > 2 && !self.is_closed() {
                    segments.push([self.points[self.points.len() - 1], self.points[0]]);
                }
                segments
            }
        }
    }

    /// 整体平移（刚体变换），返回新曲线
    ///
    /// 只用于把绕原点生成的曲线整体搬到目标位置，不改变形状。
    pub fn translated(&self, offset: &Vector3) -> Self {
        Self {
            points: self.points.iter().map(|p| p + offset).collect(),
            mode: self.mode,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox3 {
        BoundingBox3::from_points(&self.points)
    }
}

/// 填充网格图元，尺寸均以场地单位计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// 长方体，`size` 为完整边长
    Box { size: Vector3 },
    /// 竖直圆柱（沿 Y 轴）
    Cylinder { radius: f64, height: f64 },
    /// 圆环，默认位于 XY 平面，需要通过 `rotation` 放平
    Torus { radius: f64, tube: f64 },
    /// 球体
    Sphere { radius: f64, segments: u32 },
    /// 带文字的平面（默认朝 +Z）
    Label { width: f64, height: f64, text: String },
}

impl Primitive {
    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Box { .. } => "Box",
            Primitive::Cylinder { .. } => "Cylinder",
            Primitive::Torus { .. } => "Torus",
            Primitive::Sphere { .. } => "Sphere",
            Primitive::Label { .. } => "Label",
        }
    }
}

/// 实体描述：图元 + 中心 + 欧拉角 + 材质
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    pub primitive: Primitive,
    pub center: Point3,
    /// 欧拉角（弧度，XYZ 顺序）
    pub rotation: Vector3,
    pub material: MaterialHandle,
    pub cast_shadow: bool,
}

impl Solid {
    pub fn new(primitive: Primitive, center: Point3, material: MaterialHandle) -> Self {
        Self {
            primitive,
            center,
            rotation: Vector3::zeros(),
            material,
            cast_shadow: false,
        }
    }

    pub fn with_rotation(mut self, rotation: Vector3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_shadow(mut self) -> Self {
        self.cast_shadow = true;
        self
    }
}
