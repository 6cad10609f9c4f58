//! Arena 核心几何生成
//!
//! 以参数化方式生成篮球场馆的静态几何：球场标线、篮架、篮球、看台与记分牌。
//!
//! # 架构设计
//!
//! 数据单向流动：
//! - `config`: 场馆配置记录
//! - `shapes`: 纯函数曲线生成器
//! - `court` / `hoop` / `ball` / `stadium`: 各部件构建器
//! - `scene`: 组装全部部件并提交给 [`render::RenderService`]
//!
//! # 示例
//!
//! ```rust
//! use arena_core::prelude::*;
//!
//! let court = build_court(&CourtConfig::default()).unwrap();
//! let boundary = court.marking(MarkingId::Boundary).unwrap();
//! assert_eq!(boundary.len(), 5);
//! ```

pub mod ball;
pub mod config;
pub mod court;
pub mod error;
pub mod geometry;
pub mod hoop;
pub mod material;
pub mod math;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod stadium;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::ball::{build_ball, Ball};
    pub use crate::config::{BallConfig, CourtConfig, HoopConfig, Side, StadiumConfig, VenueConfig};
    pub use crate::court::{build_court, Court, MarkingId};
    pub use crate::error::{GeometryError, Result};
    pub use crate::geometry::{Curve, DrawMode, Primitive, Solid};
    pub use crate::hoop::{build_hoop, Hoop};
    pub use crate::material::{Color, Material, MaterialHandle};
    pub use crate::math::{Matrix4, Point3, Vector3};
    pub use crate::render::{RecordingRenderService, RenderService};
    pub use crate::scene::VenueScene;
    pub use crate::stadium::{build_stadium, Stadium};
}
