//! 球场构建
//!
//! 根据 [`CourtConfig`] 计算地板描述和全部标线。只计算几何并关联材质句柄，
//! 不做任何绘制。右半场的标线由镜像后的参数生成，不对已生成的曲线做变换。

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{CourtConfig, Side};
use crate::error::Result;
use crate::geometry::{Curve, Primitive, Solid};
use crate::material::MaterialHandle;
use crate::math::{Point3, Vector3};
use crate::shapes::{self, ArcParams, DEFAULT_ARC_STEP_DEG};

/// 地板顶面相对标线平面的下沉量，避免深度冲突
pub const FLOOR_SINK: f64 = 0.01;

/// 标线标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarkingId {
    Boundary,
    CenterLine,
    CenterCircle,
    ThreePointArc(Side),
    FreeThrowLane(Side),
    FreeThrowCircle(Side),
}

impl MarkingId {
    pub fn name(&self) -> String {
        match self {
            MarkingId::Boundary => "boundary".to_string(),
            MarkingId::CenterLine => "center_line".to_string(),
            MarkingId::CenterCircle => "center_circle".to_string(),
            MarkingId::ThreePointArc(side) => format!("three_point_arc.{}", side.name()),
            MarkingId::FreeThrowLane(side) => format!("free_throw_lane.{}", side.name()),
            MarkingId::FreeThrowCircle(side) => format!("free_throw_circle.{}", side.name()),
        }
    }
}

/// 构建好的球场
#[derive(Debug, Clone)]
pub struct Court {
    pub floor: Solid,
    pub markings: BTreeMap<MarkingId, Curve>,
}

impl Court {
    pub fn marking(&self, id: MarkingId) -> Option<&Curve> {
        self.markings.get(&id)
    }
}

/// 地板描述：比场地四周各宽出 `floor_margin`，顶面略低于标线
pub fn floor_surface(config: &CourtConfig) -> Solid {
    let size = Vector3::new(
        2.0 * (config.half_length + config.floor_margin),
        2.0 * config.floor_thickness,
        2.0 * (config.half_width + config.floor_margin),
    );
    let center = Point3::new(0.0, -config.floor_thickness - FLOOR_SINK, 0.0);
    Solid::new(Primitive::Box { size }, center, MaterialHandle::CourtFloor)
}

/// 左侧底线三分弧参数，右侧由 [`ArcParams::mirrored_x`] 得到
pub fn three_point_arc_params(config: &CourtConfig) -> ArcParams {
    ArcParams {
        center_x: -config.half_length,
        offset_x: config.three_point_arc_offset,
        radius: config.three_point_radius,
        start_deg: 0.0,
        end_deg: 180.0,
        step_deg: DEFAULT_ARC_STEP_DEG,
    }
}

/// 构建球场
///
/// 先校验配置，配置非法时不会运行任何生成器。
pub fn build_court(config: &CourtConfig) -> Result<Court> {
    config.validate()?;

    let hl = config.half_length;
    let hw = config.half_width;
    let segments = config.circle_segments;
    let mut markings = BTreeMap::new();

    markings.insert(
        MarkingId::Boundary,
        shapes::polyline(vec![
            Point3::new(hl, 0.0, hw),
            Point3::new(hl, 0.0, -hw),
            Point3::new(-hl, 0.0, -hw),
            Point3::new(-hl, 0.0, hw),
            Point3::new(hl, 0.0, hw),
        ])?,
    );
    markings.insert(
        MarkingId::CenterLine,
        shapes::line(Point3::new(0.0, 0.0, -hw), Point3::new(0.0, 0.0, hw)),
    );
    markings.insert(
        MarkingId::CenterCircle,
        shapes::circle(config.center_circle_radius, segments, 0.0)?,
    );

    let left_arc = three_point_arc_params(config);
    markings.insert(MarkingId::ThreePointArc(Side::Left), left_arc.generate()?);
    markings.insert(
        MarkingId::ThreePointArc(Side::Right),
        left_arc.mirrored_x().generate()?,
    );

    for side in Side::BOTH {
        let s = side.sign();
        markings.insert(
            MarkingId::FreeThrowLane(side),
            shapes::rectangle_outline(
                Point3::new(s * hl, 0.0, 0.0),
                config.free_throw_rect_width / 2.0,
                config.free_throw_rect_depth,
                side,
            )?,
        );
        markings.insert(
            MarkingId::FreeThrowCircle(side),
            shapes::circle_at(
                Point3::new(s * (hl - config.free_throw_rect_depth), 0.0, 0.0),
                config.free_throw_circle_radius,
                segments,
            )?,
        );
    }

    debug!(
        markings = markings.len(),
        points = markings.values().map(Curve::len).sum::<usize>(),
        "court markings generated"
    );

    Ok(Court {
        floor: floor_surface(config),
        markings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::math::{approx_eq, mirror_x, points_approx_eq};

    #[test]
    fn test_all_markings_present() {
        let court = build_court(&CourtConfig::default()).unwrap();
        assert_eq!(court.markings.len(), 9);
        for side in Side::BOTH {
            assert!(court.marking(MarkingId::ThreePointArc(side)).is_some());
            assert!(court.marking(MarkingId::FreeThrowLane(side)).is_some());
            assert!(court.marking(MarkingId::FreeThrowCircle(side)).is_some());
        }
    }

    #[test]
    fn test_boundary_rectangle() {
        let config = CourtConfig {
            half_length: 14.0,
            half_width: 7.0,
            ..Default::default()
        };
        let court = build_court(&config).unwrap();
        let boundary = court.marking(MarkingId::Boundary).unwrap();

        assert_eq!(boundary.len(), 5);
        assert!(boundary.is_closed());
        for p in &boundary.points()[..4] {
            assert_eq!(p.x.abs(), 14.0);
            assert_eq!(p.y, 0.0);
            assert_eq!(p.z.abs(), 7.0);
        }
        // 四个角各不相同
        let mut corners: Vec<(i64, i64)> = boundary.points()[..4]
            .iter()
            .map(|p| (p.x as i64, p.z as i64))
            .collect();
        corners.sort();
        corners.dedup();
        assert_eq!(corners.len(), 4);
    }

    #[test]
    fn test_markings_stay_on_court() {
        let configs = [
            CourtConfig::default(),
            CourtConfig {
                half_length: 20.0,
                half_width: 9.0,
                three_point_radius: 8.0,
                ..Default::default()
            },
            CourtConfig {
                half_length: 11.0,
                half_width: 6.0,
                three_point_radius: 5.0,
                three_point_arc_offset: 4.0,
                free_throw_rect_depth: 4.0,
                ..Default::default()
            },
            // 最短的罚球区：罚球圈正好触到底线
            CourtConfig {
                free_throw_rect_depth: 1.6,
                ..Default::default()
            },
            CourtConfig {
                free_throw_rect_depth: 2.5,
                free_throw_circle_radius: 2.5,
                ..Default::default()
            },
            // 三分弧顶点正好落在中线上
            CourtConfig {
                half_length: 10.5,
                three_point_arc_offset: 5.0,
                three_point_radius: 5.5,
                ..Default::default()
            },
            // 三分弧正好贴到边线
            CourtConfig {
                three_point_radius: 7.0,
                three_point_arc_offset: 7.0,
                ..Default::default()
            },
        ];
        for config in configs {
            let court = build_court(&config).unwrap();
            for (id, curve) in &court.markings {
                assert!(
                    curve.bounding_box().within_xz(config.half_length, config.half_width),
                    "{} leaves the court",
                    id.name()
                );
            }
        }
    }

    #[test]
    fn test_lane_shorter_than_circle_rejected() {
        let config = CourtConfig {
            free_throw_rect_depth: 1.0,
            ..Default::default()
        };
        assert!(matches!(build_court(&config), Err(GeometryError::InvalidConfig(_))));
    }

    #[test]
    fn test_three_point_arcs_mirror() {
        let court = build_court(&CourtConfig::default()).unwrap();
        let left = court.marking(MarkingId::ThreePointArc(Side::Left)).unwrap();
        let right = court.marking(MarkingId::ThreePointArc(Side::Right)).unwrap();
        assert_eq!(left.len(), right.len());
        for (l, r) in left.points().iter().zip(right.points()) {
            assert!(points_approx_eq(&mirror_x(l), r));
        }
    }

    #[test]
    fn test_free_throw_markings_mirror() {
        let court = build_court(&CourtConfig::default()).unwrap();
        for id in [MarkingId::FreeThrowLane, MarkingId::FreeThrowCircle] {
            let left = court.marking(id(Side::Left)).unwrap();
            let right = court.marking(id(Side::Right)).unwrap();
            for (l, r) in left.points().iter().zip(right.points()) {
                assert!(points_approx_eq(&mirror_x(l), r));
            }
        }
        let circle = court.marking(MarkingId::FreeThrowCircle(Side::Left)).unwrap();
        assert!(approx_eq(circle.bounding_box().center().x, -9.0));
    }

    #[test]
    fn test_floor_surface() {
        let court = build_court(&CourtConfig::default()).unwrap();
        assert_eq!(court.floor.material, MaterialHandle::CourtFloor);
        match &court.floor.primitive {
            Primitive::Box { size } => {
                assert!(approx_eq(size.x, 30.0));
                assert!(approx_eq(size.y, 0.2));
                assert!(approx_eq(size.z, 16.0));
            }
            other => panic!("unexpected floor primitive {}", other.type_name()),
        }
        // 顶面低于标线平面
        assert!(approx_eq(court.floor.center.y + 0.1, -FLOOR_SINK));
    }

    #[test]
    fn test_malformed_config_fails_before_generation() {
        let config = CourtConfig {
            half_length: -1.0,
            ..Default::default()
        };
        assert!(matches!(build_court(&config), Err(GeometryError::InvalidConfig(_))));
    }
}
