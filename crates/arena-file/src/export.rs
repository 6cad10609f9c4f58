//! 场景导出
//!
//! 把组装好的场馆写成一份 JSON 快照：每条曲线和每个实体带名字、材质和几何参数，
//! 便于外部工具检查或离线渲染。导出内容来自 [`RecordingRenderService`]，
//! 与交给窗口渲染端的数据完全一致。

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use arena_core::geometry::{Curve, Solid};
use arena_core::material::{Material, MaterialHandle};
use arena_core::render::RecordingRenderService;
use arena_core::scene::VenueScene;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::FileError;

/// 当前导出格式版本
pub const EXPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    pub name: String,
    pub material: MaterialHandle,
    pub curve: Curve,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidRecord {
    pub name: String,
    pub solid: Solid,
}

/// 场景用到的材质，贴图路径原样写出供离线渲染查找
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub handle: MaterialHandle,
    pub name: String,
    pub material: Material,
}

/// 场景快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneExport {
    pub version: u32,
    pub score: String,
    pub curves: Vec<CurveRecord>,
    pub solids: Vec<SolidRecord>,
    pub materials: Vec<MaterialRecord>,
}

impl SceneExport {
    pub fn from_scene(scene: &VenueScene) -> Self {
        let mut recorder = RecordingRenderService::new();
        scene.submit(&mut recorder);

        let handles: BTreeSet<MaterialHandle> = recorder
            .curves
            .iter()
            .map(|(_, _, material)| *material)
            .chain(recorder.solids.iter().map(|(_, solid)| solid.material))
            .collect();
        let materials = handles
            .into_iter()
            .map(|handle| MaterialRecord {
                handle,
                name: handle.name().to_string(),
                material: handle.material(),
            })
            .collect();

        Self {
            version: EXPORT_VERSION,
            score: scene.score.clone(),
            materials,
            curves: recorder
                .curves
                .into_iter()
                .map(|(name, curve, material)| CurveRecord { name, material, curve })
                .collect(),
            solids: recorder
                .solids
                .into_iter()
                .map(|(name, solid)| SolidRecord { name, solid })
                .collect(),
        }
    }

    pub fn curve(&self, name: &str) -> Option<&CurveRecord> {
        self.curves.iter().find(|record| record.name == name)
    }

    pub fn solid(&self, name: &str) -> Option<&SolidRecord> {
        self.solids.iter().find(|record| record.name == name)
    }

    pub fn material(&self, handle: MaterialHandle) -> Option<&Material> {
        self.materials
            .iter()
            .find(|record| record.handle == handle)
            .map(|record| &record.material)
    }

    /// 需要外部加载的贴图
    pub fn textures(&self) -> Vec<&str> {
        self.materials
            .iter()
            .filter_map(|record| record.material.texture.as_deref())
            .collect()
    }

    pub fn to_json(&self) -> Result<String, FileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, FileError> {
        let export: SceneExport = serde_json::from_str(json)?;
        if export.version != EXPORT_VERSION {
            return Err(FileError::UnsupportedVersion(export.version));
        }
        Ok(export)
    }
}

/// 导出场景到文件
pub fn export_scene(scene: &VenueScene, path: &Path) -> Result<SceneExport, FileError> {
    let export = SceneExport::from_scene(scene);
    fs::write(path, export.to_json()?)?;
    info!(
        path = %path.display(),
        curves = export.curves.len(),
        solids = export.solids.len(),
        "scene exported"
    );
    Ok(export)
}

/// 读取导出文件
pub fn read_scene_export(path: &Path) -> Result<SceneExport, FileError> {
    let json = fs::read_to_string(path)?;
    SceneExport::from_json(&json)
}
