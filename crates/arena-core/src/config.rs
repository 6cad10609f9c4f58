//! 场馆配置
//!
//! 所有几何都是这些记录的纯函数。每个字段都有默认值，
//! 因此 JSON 配置文件只需写出要覆盖的字段。

use crate::error::{require_positive, GeometryError, Result};
use crate::math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// 底线所在的一侧
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    /// -X 底线
    Left,
    /// +X 底线
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Right, Side::Left];

    /// +1 / -1
    pub fn sign(&self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// 球场尺寸
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtConfig {
    /// 半场长（X方向）
    pub half_length: f64,
    /// 半场宽（Z方向）
    pub half_width: f64,
    /// 地板厚度的一半
    pub floor_thickness: f64,
    /// 地板超出边界线的宽度
    pub floor_margin: f64,
    pub three_point_radius: f64,
    /// 三分弧圆心到底线的距离
    pub three_point_arc_offset: f64,
    pub free_throw_rect_width: f64,
    pub free_throw_rect_depth: f64,
    pub free_throw_circle_radius: f64,
    pub center_circle_radius: f64,
    pub circle_segments: usize,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            half_length: 14.0,
            half_width: 7.0,
            floor_thickness: 0.1,
            floor_margin: 1.0,
            three_point_radius: 5.5,
            three_point_arc_offset: 5.0,
            free_throw_rect_width: 4.0,
            free_throw_rect_depth: 5.0,
            free_throw_circle_radius: 1.6,
            center_circle_radius: 2.0,
            circle_segments: 64,
        }
    }
}

impl CourtConfig {
    /// 检查尺寸为正且所有标线都落在场地之内
    pub fn validate(&self) -> Result<()> {
        require_positive("half_length", self.half_length)?;
        require_positive("half_width", self.half_width)?;
        require_positive("floor_thickness", self.floor_thickness)?;
        require_positive("three_point_radius", self.three_point_radius)?;
        require_positive("three_point_arc_offset", self.three_point_arc_offset)?;
        require_positive("free_throw_rect_width", self.free_throw_rect_width)?;
        require_positive("free_throw_rect_depth", self.free_throw_rect_depth)?;
        require_positive("free_throw_circle_radius", self.free_throw_circle_radius)?;
        require_positive("center_circle_radius", self.center_circle_radius)?;
        if !self.floor_margin.is_finite() || self.floor_margin < 0.0 {
            return Err(GeometryError::InvalidConfig(format!(
                "floor_margin must not be negative, got {}",
                self.floor_margin
            )));
        }
        if self.circle_segments < 3 {
            return Err(GeometryError::InvalidConfig(format!(
                "circle_segments must be at least 3, got {}",
                self.circle_segments
            )));
        }

        let hl = self.half_length;
        let hw = self.half_width;
        let checks = [
            (
                self.three_point_radius <= hw,
                "three-point arc is wider than the court",
            ),
            (
                self.three_point_arc_offset + self.three_point_radius <= hl,
                "three-point arc crosses the center line",
            ),
            (
                self.free_throw_rect_width / 2.0 <= hw,
                "free-throw lane is wider than the court",
            ),
            (
                self.free_throw_rect_depth + self.free_throw_circle_radius <= hl,
                "free-throw circle crosses the center line",
            ),
            (
                self.free_throw_circle_radius <= self.free_throw_rect_depth,
                "free-throw circle crosses the baseline",
            ),
            (
                self.free_throw_circle_radius <= hw,
                "free-throw circle is wider than the court",
            ),
            (
                self.center_circle_radius <= hw && self.center_circle_radius <= hl,
                "center circle does not fit on the court",
            ),
        ];
        for (ok, message) in checks {
            if !ok {
                return Err(GeometryError::InvalidConfig(message.to_string()));
            }
        }
        Ok(())
    }
}

/// 篮架配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoopConfig {
    pub side: Side,
    /// 底线到球场中心的距离
    pub baseline_x: f64,
    /// 篮板中心高度
    pub hoop_height: f64,
    pub rim_radius: f64,
    pub rim_tube: f64,
    pub net_top_radius: f64,
    pub net_bottom_radius: f64,
    pub net_length: f64,
    pub net_segments: usize,
}

impl Default for HoopConfig {
    fn default() -> Self {
        Self {
            side: Side::Right,
            baseline_x: 14.0,
            hoop_height: 3.05,
            rim_radius: 0.45,
            rim_tube: 0.03,
            net_top_radius: 0.45,
            net_bottom_radius: 0.38,
            net_length: 0.6,
            net_segments: 8,
        }
    }
}

impl HoopConfig {
    /// 同一模板放到指定一侧
    pub fn for_side(&self, side: Side) -> Self {
        Self {
            side,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("baseline_x", self.baseline_x)?;
        require_positive("hoop_height", self.hoop_height)?;
        require_positive("rim_radius", self.rim_radius)?;
        require_positive("rim_tube", self.rim_tube)?;
        require_positive("net_top_radius", self.net_top_radius)?;
        require_positive("net_bottom_radius", self.net_bottom_radius)?;
        require_positive("net_length", self.net_length)?;
        if self.net_segments < 3 {
            return Err(GeometryError::InvalidConfig(format!(
                "net_segments must be at least 3, got {}",
                self.net_segments
            )));
        }
        if self.net_top_radius < self.net_bottom_radius {
            return Err(GeometryError::InvalidConfig(format!(
                "net must narrow downward: top radius {} < bottom radius {}",
                self.net_top_radius, self.net_bottom_radius
            )));
        }
        Ok(())
    }
}

/// 篮球配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f64,
    pub center: Point3,
    /// 球缝相对球面的外扩距离
    pub seam_offset: f64,
    pub seam_segments: usize,
    pub sphere_segments: u32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 0.3,
            center: Point3::new(0.0, 0.45, 0.0),
            seam_offset: 0.001,
            seam_segments: 64,
            sphere_segments: 32,
        }
    }
}

impl BallConfig {
    pub fn validate(&self) -> Result<()> {
        require_positive("ball radius", self.radius)?;
        require_positive("seam_offset", self.seam_offset)?;
        if self.seam_segments < 3 || self.sphere_segments < 3 {
            return Err(GeometryError::InvalidConfig(
                "ball segment counts must be at least 3".to_string(),
            ));
        }
        if !self.center.iter().all(|c| c.is_finite()) {
            return Err(GeometryError::InvalidConfig("ball center must be finite".to_string()));
        }
        Ok(())
    }
}

/// 看台与记分牌配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StadiumConfig {
    /// 看台沿 X 方向的长度
    pub width: f64,
    pub tier_height: f64,
    pub tier_depth: f64,
    pub tier_count: usize,
    /// 每升一级向外退的距离
    pub tier_step: f64,
    /// 第一排看台到场地中线的距离（Z方向）
    pub front_row_distance: f64,
    pub scoreboard_center: Point3,
    pub scoreboard_size: Vector3,
    pub label_width: f64,
    pub label_height: f64,
    /// 文字面板到记分牌中心的前后距离
    pub label_offset: f64,
}

impl Default for StadiumConfig {
    fn default() -> Self {
        Self {
            width: 40.0,
            tier_height: 1.0,
            tier_depth: 6.0,
            tier_count: 5,
            tier_step: 1.5,
            front_row_distance: 14.0,
            scoreboard_center: Point3::new(0.0, 12.0, -1.0),
            scoreboard_size: Vector3::new(6.0, 3.0, 0.5),
            label_width: 5.8,
            label_height: 2.8,
            label_offset: 0.3,
        }
    }
}

impl StadiumConfig {
    pub fn validate(&self) -> Result<()> {
        require_positive("stadium width", self.width)?;
        require_positive("tier_height", self.tier_height)?;
        require_positive("tier_depth", self.tier_depth)?;
        require_positive("front_row_distance", self.front_row_distance)?;
        require_positive("label_width", self.label_width)?;
        require_positive("label_height", self.label_height)?;
        if !self.tier_step.is_finite() || self.tier_step < 0.0 {
            return Err(GeometryError::InvalidConfig(format!(
                "tier_step must not be negative, got {}",
                self.tier_step
            )));
        }
        for (i, extent) in self.scoreboard_size.iter().enumerate() {
            require_positive(&format!("scoreboard_size[{i}]"), *extent)?;
        }
        if self.label_offset * 2.0 < self.scoreboard_size.z {
            return Err(GeometryError::InvalidConfig(
                "score labels would be hidden inside the scoreboard".to_string(),
            ));
        }
        Ok(())
    }
}

/// 完整场馆配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueConfig {
    pub court: CourtConfig,
    /// 篮架模板，`side` 和 `baseline_x` 在组装时被覆盖
    pub hoop: HoopConfig,
    pub ball: BallConfig,
    pub stadium: StadiumConfig,
    /// 记分牌显示的静态比分
    pub score: String,
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            court: CourtConfig::default(),
            hoop: HoopConfig::default(),
            ball: BallConfig::default(),
            stadium: StadiumConfig::default(),
            score: "32 - 54".to_string(),
        }
    }
}

impl VenueConfig {
    /// 指定一侧的篮架配置，底线位置跟随球场半长
    pub fn hoop_config(&self, side: Side) -> HoopConfig {
        HoopConfig {
            baseline_x: self.court.half_length,
            ..self.hoop.for_side(side)
        }
    }

    /// 一次性检查所有子配置
    pub fn validate(&self) -> Result<()> {
        self.court.validate()?;
        for side in Side::BOTH {
            self.hoop_config(side).validate()?;
        }
        self.ball.validate()?;
        self.stadium.validate()?;
        self.check_stands_clear_court()
    }

    /// 看台不能压在地板上：第一排内沿在地板边缘之外，看台长度覆盖地板
    fn check_stands_clear_court(&self) -> Result<()> {
        let court = &self.court;
        let stadium = &self.stadium;
        let floor_half_width = court.half_width + court.floor_margin;
        let floor_half_length = court.half_length + court.floor_margin;

        let front_edge = stadium.front_row_distance - stadium.tier_depth / 2.0;
        if front_edge < floor_half_width {
            return Err(GeometryError::InvalidConfig(format!(
                "front row edge at {front_edge} overlaps the floor (half width {floor_half_width})"
            )));
        }
        if stadium.width / 2.0 < floor_half_length {
            return Err(GeometryError::InvalidConfig(format!(
                "stands ({}) are shorter than the floor ({})",
                stadium.width,
                2.0 * floor_half_length
            )));
        }
        Ok(())
    }
}
