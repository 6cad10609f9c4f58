//! 篮球构建
//!
//! 球体 + 三条球缝：一条纬线圈、两条经线半圆（方位角 0 与 π）。
//! 球缝先绕原点生成，再整体平移到球心。这是唯一一处生成后移动几何的地方，
//! 平移是整条曲线的刚体变换，不会破坏对称性。

use std::f64::consts::PI;

use tracing::debug;

use crate::config::BallConfig;
use crate::error::Result;
use crate::geometry::{Curve, Primitive, Solid};
use crate::material::MaterialHandle;
use crate::shapes;

/// 篮球
#[derive(Debug, Clone)]
pub struct Ball {
    pub sphere: Solid,
    pub latitude_seam: Curve,
    pub longitude_seams: [Curve; 2],
}

impl Ball {
    pub fn seams(&self) -> [&Curve; 3] {
        [
            &self.latitude_seam,
            &self.longitude_seams[0],
            &self.longitude_seams[1],
        ]
    }
}

pub fn build_ball(config: &BallConfig) -> Result<Ball> {
    config.validate()?;

    let seam_radius = config.radius + config.seam_offset;
    let offset = config.center.coords;

    let latitude_seam = shapes::circle(seam_radius, config.seam_segments, 0.0)?.translated(&offset);
    let longitude_seams = [
        shapes::half_great_circle(seam_radius, 0.0, config.seam_segments)?.translated(&offset),
        shapes::half_great_circle(seam_radius, PI, config.seam_segments)?.translated(&offset),
    ];

    let sphere = Solid::new(
        Primitive::Sphere {
            radius: config.radius,
            segments: config.sphere_segments,
        },
        config.center,
        MaterialHandle::Ball,
    )
    .with_shadow();

    debug!(seam_radius, "ball generated");

    Ok(Ball {
        sphere,
        latitude_seam,
        longitude_seams,
    })
}
