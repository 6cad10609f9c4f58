//! 材质定义
//!
//! 构建器只引用材质句柄，具体颜色、透明度和贴图由渲染端按句柄查表。

use serde::{Deserialize, Serialize};

/// RGBA颜色
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// 从十六进制值创建（如 0xFF4500）
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 255,
        }
    }

    /// 转换为 [0.0, 1.0] 范围的浮点数组
    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
}

/// 着色方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shading {
    /// 受光照影响
    Phong,
    /// 不受光照影响
    Unlit,
    /// 线条
    Line,
}

/// 材质
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
    /// 不透明度 (0.0-1.0)
    pub opacity: f32,
    pub shading: Shading,
    /// 贴图路径（相对资源目录）
    pub texture: Option<String>,
}

impl Material {
    const fn solid(color: Color, shading: Shading) -> Self {
        Self {
            color,
            opacity: 1.0,
            shading,
            texture: None,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// 材质句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaterialHandle {
    CourtFloor,
    CourtLine,
    Backboard,
    Rim,
    Net,
    Steel,
    Ball,
    BallSeam,
    Bleacher,
    Scoreboard,
    ScoreText,
}

impl MaterialHandle {
    pub const ALL: [MaterialHandle; 11] = [
        MaterialHandle::CourtFloor,
        MaterialHandle::CourtLine,
        MaterialHandle::Backboard,
        MaterialHandle::Rim,
        MaterialHandle::Net,
        MaterialHandle::Steel,
        MaterialHandle::Ball,
        MaterialHandle::BallSeam,
        MaterialHandle::Bleacher,
        MaterialHandle::Scoreboard,
        MaterialHandle::ScoreText,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MaterialHandle::CourtFloor => "court.floor",
            MaterialHandle::CourtLine => "court.line",
            MaterialHandle::Backboard => "hoop.backboard",
            MaterialHandle::Rim => "hoop.rim",
            MaterialHandle::Net => "hoop.net",
            MaterialHandle::Steel => "hoop.steel",
            MaterialHandle::Ball => "ball.leather",
            MaterialHandle::BallSeam => "ball.seam",
            MaterialHandle::Bleacher => "stadium.bleacher",
            MaterialHandle::Scoreboard => "stadium.scoreboard",
            MaterialHandle::ScoreText => "stadium.score_text",
        }
    }

    /// 默认材质表
    pub fn material(&self) -> Material {
        match self {
            MaterialHandle::CourtFloor => Material {
                texture: Some("textures/wood.jpg".to_string()),
                ..Material::solid(Color::from_hex(0xC68642), Shading::Phong)
            },
            MaterialHandle::CourtLine | MaterialHandle::Net => {
                Material::solid(Color::WHITE, Shading::Line)
            }
            MaterialHandle::Backboard => Material {
                opacity: 0.5,
                ..Material::solid(Color::WHITE, Shading::Phong)
            },
            MaterialHandle::Rim => Material::solid(Color::from_hex(0xFF4500), Shading::Phong),
            MaterialHandle::Steel => Material::solid(Color::from_hex(0x888888), Shading::Phong),
            MaterialHandle::Ball => Material::solid(Color::from_hex(0xFF8C00), Shading::Phong),
            MaterialHandle::BallSeam => Material::solid(Color::BLACK, Shading::Line),
            MaterialHandle::Bleacher => {
                Material::solid(Color::from_hex(0xB6CACC), Shading::Phong)
            }
            MaterialHandle::Scoreboard => {
                Material::solid(Color::from_hex(0x2222FF), Shading::Unlit)
            }
            MaterialHandle::ScoreText => Material {
                opacity: 0.99,
                ..Material::solid(Color::WHITE, Shading::Unlit)
            },
        }
    }
}
