//! 数学基础类型
//!
//! 基于 nalgebra 提供的向量和点类型的别名。

use nalgebra as na;
use serde::{Deserialize, Serialize};

/// 3D点类型
pub type Point3 = na::Point3<f64>;

/// 3D向量类型
pub type Vector3 = na::Vector3<f64>;

/// 3D变换矩阵
pub type Matrix4 = na::Matrix4<f64>;

/// 数值容差，用于几何比较
pub const EPSILON: f64 = 1e-9;

/// 判断两个浮点数是否近似相等
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// 判断两个3D点是否近似相等
#[inline]
pub fn points_approx_eq(a: &Point3, b: &Point3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

/// 关于 YZ 平面的镜像（x → -x）
#[inline]
pub fn mirror_x(p: &Point3) -> Point3 {
    Point3::new(-p.x, p.y, p.z)
}

/// 3D包围盒
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox3 {
    pub min: Point3,
    pub max: Point3,
}

impl BoundingBox3 {
    /// 创建新的包围盒
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// 创建空的包围盒（无效状态）
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(f64::MIN, f64::MIN, f64::MIN),
        }
    }

    /// 从点集创建包围盒
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Self {
        let mut bbox = Self::empty();
        for p in points {
            bbox.expand_to_include(p);
        }
        bbox
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// 扩展包围盒以包含指定点
    pub fn expand_to_include(&mut self, point: &Point3) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// 检查 XZ 投影是否落在 [-hx-ε, hx+ε] × [-hz-ε, hz+ε] 之内
    pub fn within_xz(&self, half_x: f64, half_z: f64) -> bool {
        self.is_empty()
            || (self.min.x >= -half_x - EPSILON
                && self.max.x <= half_x + EPSILON
                && self.min.z >= -half_z - EPSILON
                && self.max.z <= half_z + EPSILON)
    }

    /// 获取中心点
    pub fn center(&self) -> Point3 {
        na::center(&self.min, &self.max)
    }
}
