//! 篮架构建
//!
//! 篮板、篮圈、篮网、立柱和横臂的位置都是 `side` 的函数，
//! 两侧篮架只差 x 偏移的符号。

use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::config::{HoopConfig, Side};
use crate::error::Result;
use crate::geometry::{Curve, Primitive, Solid};
use crate::material::MaterialHandle;
use crate::math::{Point3, Vector3};
use crate::shapes;

/// 篮圈低于篮板中心的高度
pub const RIM_DROP: f64 = 0.3;
/// 篮圈中心到底线的距离（向场内）
pub const RIM_INSET: f64 = 0.9;
/// 篮板到底线的距离（向场内）
pub const BACKBOARD_INSET: f64 = 0.4;
/// 立柱到底线的距离（向场外）
pub const POLE_OUTSET: f64 = 0.8;
/// 横臂中心到底线的距离（向场外）
pub const ARM_OUTSET: f64 = 0.2;

const BACKBOARD_SIZE: [f64; 3] = [0.1, 1.0, 1.8];
const ARM_SIZE: [f64; 3] = [1.2, 0.1, 0.1];
const POLE_RADIUS: f64 = 0.1;
const POLE_HEIGHT: f64 = 4.0;
const POLE_CENTER_Y: f64 = 1.8;

/// 一侧的完整篮架
#[derive(Debug, Clone)]
pub struct Hoop {
    pub side: Side,
    pub backboard: Solid,
    pub rim: Solid,
    pub net: Curve,
    pub pole: Solid,
    pub arm: Solid,
}

impl Hoop {
    pub fn rim_center(&self) -> Point3 {
        self.rim.center
    }

    /// 按固定顺序列出所有实体部件
    pub fn solids(&self) -> [(&'static str, &Solid); 4] {
        [
            ("backboard", &self.backboard),
            ("rim", &self.rim),
            ("pole", &self.pole),
            ("arm", &self.arm),
        ]
    }
}

fn box_size(extent: [f64; 3]) -> Primitive {
    Primitive::Box {
        size: Vector3::new(extent[0], extent[1], extent[2]),
    }
}

/// 构建一侧篮架
///
/// 返回的几何只依赖配置本身，同一配置两次调用得到相同结果。
pub fn build_hoop(config: &HoopConfig) -> Result<Hoop> {
    config.validate()?;

    let s = config.side.sign();
    let baseline = config.baseline_x;
    let height = config.hoop_height;
    let rim_y = height - RIM_DROP;

    let backboard = Solid::new(
        box_size(BACKBOARD_SIZE),
        Point3::new(s * (baseline - BACKBOARD_INSET), height, 0.0),
        MaterialHandle::Backboard,
    );

    // 圆环默认立在 XY 平面，绕 X 轴转 90° 放平
    let rim = Solid::new(
        Primitive::Torus {
            radius: config.rim_radius,
            tube: config.rim_tube,
        },
        Point3::new(s * (baseline - RIM_INSET), rim_y, 0.0),
        MaterialHandle::Rim,
    )
    .with_rotation(Vector3::new(FRAC_PI_2, 0.0, 0.0))
    .with_shadow();

    let net = shapes::net_wireframe(
        rim.center.x,
        rim_y,
        rim_y - config.net_length,
        config.net_top_radius,
        config.net_bottom_radius,
        config.net_segments,
    )?;

    let pole = Solid::new(
        Primitive::Cylinder {
            radius: POLE_RADIUS,
            height: POLE_HEIGHT,
        },
        Point3::new(s * (baseline + POLE_OUTSET), POLE_CENTER_Y, 0.0),
        MaterialHandle::Steel,
    );

    let arm = Solid::new(
        box_size(ARM_SIZE),
        Point3::new(s * (baseline + ARM_OUTSET), height, 0.0),
        MaterialHandle::Steel,
    );

    debug!(side = config.side.name(), rim_x = rim.center.x, "hoop generated");

    Ok(Hoop {
        side: config.side,
        backboard,
        rim,
        net,
        pole,
        arm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::geometry::DrawMode;
    use crate::math::{approx_eq, mirror_x, points_approx_eq};

    fn pair() -> (Hoop, Hoop) {
        let template = HoopConfig::default();
        (
            build_hoop(&template.for_side(Side::Right)).unwrap(),
            build_hoop(&template.for_side(Side::Left)).unwrap(),
        )
    }

    #[test]
    fn test_rim_centers_mirror() {
        let (right, left) = pair();
        let r = right.rim_center();
        let l = left.rim_center();

        assert!(approx_eq(r.x, 14.0 - 0.9));
        assert!(approx_eq(l.x, -(14.0 - 0.9)));
        assert_eq!(r.y, l.y);
        assert!(approx_eq(r.y, 3.05 - RIM_DROP));
    }

    #[test]
    fn test_all_parts_mirror() {
        let (right, left) = pair();
        for ((name, r), (_, l)) in right.solids().iter().zip(left.solids().iter()) {
            assert!(points_approx_eq(&mirror_x(&r.center), &l.center), "{name}");
            assert_eq!(r.primitive, l.primitive);
        }
        // 篮网环绕各自的篮圈中心，相对篮圈的偏移两侧一致
        let (rc, lc) = (right.rim_center(), left.rim_center());
        for (r, l) in right.net.points().iter().zip(left.net.points()) {
            assert!(approx_eq(r.x - rc.x, l.x - lc.x));
            assert_eq!((r.y, r.z), (l.y, l.z));
        }
    }

    #[test]
    fn test_parts_order_along_x() {
        let (right, _) = pair();
        // 从场内到场外：篮圈、篮板、横臂、立柱
        assert!(right.rim.center.x < right.backboard.center.x);
        assert!(right.backboard.center.x < right.arm.center.x);
        assert!(right.arm.center.x < right.pole.center.x);
    }

    #[test]
    fn test_net_hangs_from_rim() {
        let (right, _) = pair();
        assert_eq!(right.net.mode(), DrawMode::Segments);
        assert_eq!(right.net.len(), 16);
        let rim = right.rim_center();
        assert!(approx_eq(right.net.points()[0].y, rim.y));
        assert!(approx_eq(right.net.points()[1].y, rim.y - 0.6));
        assert!(approx_eq(right.net.points()[0].x, rim.x + 0.45));
    }

    #[test]
    fn test_deterministic() {
        let config = HoopConfig::default();
        let a = build_hoop(&config).unwrap();
        let b = build_hoop(&config).unwrap();
        assert_eq!(a.net, b.net);
        assert_eq!(a.rim, b.rim);
    }

    #[test]
    fn test_widening_net_rejected() {
        let config = HoopConfig {
            net_top_radius: 0.3,
            ..Default::default()
        };
        assert!(matches!(build_hoop(&config), Err(GeometryError::InvalidConfig(_))));
    }
}
