//! 看台与记分牌
//!
//! 看台沿场地两条长边对称排列，每级升高一层并向外退一步；
//! 记分牌悬挂在场地上方，前后两面显示同一比分。

use std::f64::consts::PI;

use tracing::debug;

use crate::config::StadiumConfig;
use crate::error::{require_positive, Result};
use crate::geometry::{Primitive, Solid};
use crate::material::MaterialHandle;
use crate::math::{Point3, Vector3};

#[derive(Debug, Clone)]
pub struct Stadium {
    /// 场地下方的整体底座
    pub base: Solid,
    /// 看台，按级成对排列：(-Z, +Z)
    pub tiers: Vec<Solid>,
    pub scoreboard: Solid,
    /// 前后两面比分
    pub labels: [Solid; 2],
}

impl Stadium {
    pub fn solids(&self) -> impl Iterator<Item = &Solid> {
        std::iter::once(&self.base)
            .chain(self.tiers.iter())
            .chain(std::iter::once(&self.scoreboard))
            .chain(self.labels.iter())
    }
}

/// 构建看台和记分牌
///
/// `floor_thickness` 为球场地板厚度的一半，底座顶面与地板底面对齐。
pub fn build_stadium(config: &StadiumConfig, floor_thickness: f64, score: &str) -> Result<Stadium> {
    config.validate()?;
    require_positive("floor_thickness", floor_thickness)?;

    let h = config.tier_height;
    let base = Solid::new(
        Primitive::Box {
            size: Vector3::new(
                config.width,
                h,
                2.0 * config.front_row_distance + config.tier_depth,
            ),
        },
        Point3::new(0.0, -h / 2.0 - floor_thickness, 0.0),
        MaterialHandle::Bleacher,
    );

    let tier_size = Vector3::new(config.width, h, config.tier_depth);
    let mut tiers = Vec::with_capacity(config.tier_count * 2);
    for i in 0..config.tier_count {
        let level = i as f64;
        let z = config.front_row_distance + level * config.tier_step;
        for sign in [-1.0, 1.0] {
            tiers.push(Solid::new(
                Primitive::Box { size: tier_size },
                Point3::new(0.0, level * h, sign * z),
                MaterialHandle::Bleacher,
            ));
        }
    }

    let scoreboard = Solid::new(
        Primitive::Box {
            size: config.scoreboard_size,
        },
        config.scoreboard_center,
        MaterialHandle::Scoreboard,
    );

    let label = |z_offset: f64, yaw: f64| {
        Solid::new(
            Primitive::Label {
                width: config.label_width,
                height: config.label_height,
                text: score.to_string(),
            },
            config.scoreboard_center + Vector3::new(0.0, 0.0, z_offset),
            MaterialHandle::ScoreText,
        )
        .with_rotation(Vector3::new(0.0, yaw, 0.0))
    };
    let labels = [label(config.label_offset, 0.0), label(-config.label_offset, PI)];

    debug!(tiers = tiers.len(), score, "stadium generated");

    Ok(Stadium {
        base,
        tiers,
        scoreboard,
        labels,
    })
}
