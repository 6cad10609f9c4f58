//! 场景组装
//!
//! 启动时调用一次：校验全部配置，依次运行各构建器，再把结果交给渲染端。
//! 任何一步失败都不会产生场景，也不会向渲染端提交任何东西。

use tracing::info;

use crate::ball::{build_ball, Ball};
use crate::config::{Side, VenueConfig};
use crate::court::{build_court, Court};
use crate::error::Result;
use crate::geometry::{Curve, Solid};
use crate::hoop::{build_hoop, Hoop};
use crate::material::MaterialHandle;
use crate::render::RenderService;
use crate::stadium::{build_stadium, Stadium};

/// 组装好的场馆
#[derive(Debug, Clone)]
pub struct VenueScene {
    pub court: Court,
    /// 右侧、左侧篮架
    pub hoops: [Hoop; 2],
    pub ball: Ball,
    pub stadium: Stadium,
    pub score: String,
}

impl VenueScene {
    pub fn build(config: &VenueConfig) -> Result<Self> {
        config.validate()?;

        let court = build_court(&config.court)?;
        let hoops = [
            build_hoop(&config.hoop_config(Side::Right))?,
            build_hoop(&config.hoop_config(Side::Left))?,
        ];
        let ball = build_ball(&config.ball)?;
        let stadium = build_stadium(&config.stadium, config.court.floor_thickness, &config.score)?;

        let scene = Self {
            court,
            hoops,
            ball,
            stadium,
            score: config.score.clone(),
        };
        info!(
            curves = scene.curves().len(),
            solids = scene.solids().len(),
            "venue scene assembled"
        );
        Ok(scene)
    }

    pub fn hoop(&self, side: Side) -> &Hoop {
        match side {
            Side::Right => &self.hoops[0],
            Side::Left => &self.hoops[1],
        }
    }

    /// 所有曲线，带稳定的名字和材质
    pub fn curves(&self) -> Vec<(String, &Curve, MaterialHandle)> {
        let mut curves: Vec<(String, &Curve, MaterialHandle)> = self
            .court
            .markings
            .iter()
            .map(|(id, curve)| (format!("court.{}", id.name()), curve, MaterialHandle::CourtLine))
            .collect();

        for hoop in &self.hoops {
            curves.push((format!("hoop.{}.net", hoop.side.name()), &hoop.net, MaterialHandle::Net));
        }

        let seam_names = ["latitude", "longitude_0", "longitude_180"];
        for (name, seam) in seam_names.iter().zip(self.ball.seams()) {
            curves.push((format!("ball.seam.{name}"), seam, MaterialHandle::BallSeam));
        }
        curves
    }

    /// 所有实体，带稳定的名字
    pub fn solids(&self) -> Vec<(String, &Solid)> {
        let mut solids = vec![("court.floor".to_string(), &self.court.floor)];
        for hoop in &self.hoops {
            for (part, solid) in hoop.solids() {
                solids.push((format!("hoop.{}.{}", hoop.side.name(), part), solid));
            }
        }
        solids.push(("ball.sphere".to_string(), &self.ball.sphere));
        solids.extend(
            self.stadium
                .solids()
                .enumerate()
                .map(|(i, solid)| (format!("stadium.{i}"), solid)),
        );
        solids
    }

    /// 一次性提交给渲染端
    pub fn submit<R: RenderService + ?Sized>(&self, service: &mut R) {
        for (name, curve, material) in self.curves() {
            service.add_curve(&name, curve, material);
        }
        for (name, solid) in self.solids() {
            service.add_solid(&name, solid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CourtConfig;
    use crate::error::GeometryError;
    use crate::render::RecordingRenderService;

    #[test]
    fn test_build_default_venue() {
        let scene = VenueScene::build(&VenueConfig::default()).unwrap();
        // 9 条标线 + 2 张篮网 + 3 条球缝
        assert_eq!(scene.curves().len(), 14);
        // 地板 + 2×4 篮架部件 + 球 + 看台 14 件
        assert_eq!(scene.solids().len(), 1 + 8 + 1 + 14);
        assert_eq!(scene.hoop(Side::Left).side, Side::Left);
        assert_eq!(scene.hoop(Side::Right).side, Side::Right);
    }

    #[test]
    fn test_submit_hands_everything_over() {
        let scene = VenueScene::build(&VenueConfig::default()).unwrap();
        let mut service = RecordingRenderService::new();
        scene.submit(&mut service);

        assert_eq!(service.curves.len(), scene.curves().len());
        assert_eq!(service.solids.len(), scene.solids().len());
        assert_eq!(service.curve("court.boundary").map(Curve::len), Some(5));
        assert!(service.curve("hoop.left.net").is_some());
        assert!(service.solid("hoop.right.rim").is_some());
        assert!(service.camera.is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let scene = VenueScene::build(&VenueConfig::default()).unwrap();
        let mut names: Vec<String> = scene.curves().into_iter().map(|(n, _, _)| n).collect();
        names.extend(scene.solids().into_iter().map(|(n, _)| n));
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_bad_config_produces_no_scene() {
        let config = VenueConfig {
            court: CourtConfig {
                half_length: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut service = RecordingRenderService::new();
        match VenueScene::build(&config) {
            Ok(scene) => scene.submit(&mut service),
            Err(e) => assert!(matches!(e, GeometryError::InvalidConfig(_))),
        }
        assert!(service.is_empty());
    }
}
