//! 基于 egui 画笔的线框渲染端

use std::collections::BTreeMap;

use arena_core::geometry::{Curve, Primitive, Solid};
use arena_core::material::{Material, MaterialHandle, Shading};
use arena_core::math::{Matrix4, Point3, Vector3};
use arena_core::render::RenderService;
use arena_renderer::camera::{project_point, project_segment};
use arena_renderer::tessellate::{euler_rotation, solid_edges};
use arena_renderer::vertex::LineBatch;
use eframe::egui;

/// 记分牌文字
#[derive(Debug, Clone)]
struct TextLabel {
    center: Point3,
    /// 文字朝向（世界坐标）
    normal: Vector3,
    height: f64,
    text: String,
    color: [f32; 4],
}

/// 把提交的几何展开成线段，每帧用当前相机矩阵投影到屏幕
///
/// 线段按材质分批，同一批共用线宽。
#[derive(Debug, Default)]
pub struct EguiRenderService {
    batches: BTreeMap<MaterialHandle, LineBatch>,
    labels: Vec<TextLabel>,
    view: Matrix4,
    projection: Matrix4,
}

fn material_color(material: &Material) -> [f32; 4] {
    let mut color = material.color.to_f32_array();
    color[3] *= material.opacity;
    color
}

/// 标线类材质画粗一些，半透明实体画细一些
fn stroke_width(material: &Material) -> f32 {
    match material.shading {
        Shading::Line => 1.5,
        _ if material.is_transparent() => 0.5,
        _ => 1.0,
    }
}

fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]).into()
}

impl EguiRenderService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment_count(&self) -> usize {
        self.batches.values().map(LineBatch::segment_count).sum()
    }

    fn batch(&mut self, material: MaterialHandle) -> &mut LineBatch {
        self.batches.entry(material).or_default()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// 相机在世界坐标中的位置
    fn eye(&self) -> Option<Point3> {
        self.view
            .try_inverse()
            .map(|inverse| inverse.transform_point(&Point3::origin()))
    }

    /// 在 `rect` 内绘制全部线框和朝向相机的文字
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        let (width, height) = (rect.width() as f64, rect.height() as f64);
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let view_proj = self.projection * self.view;
        let to_pos = |p: [f64; 2]| rect.min + egui::vec2(p[0] as f32, p[1] as f32);

        for (handle, batch) in &self.batches {
            let stroke_width = stroke_width(&handle.material());
            for (start, end) in batch.segments() {
                let segment = [start.point(), end.point()];
                if let Some([a, b]) = project_segment(&view_proj, &segment, width, height) {
                    painter.line_segment(
                        [to_pos(a), to_pos(b)],
                        egui::Stroke::new(stroke_width, to_color32(start.color)),
                    );
                }
            }
        }

        let Some(eye) = self.eye() else {
            return;
        };
        for label in &self.labels {
            if label.normal.dot(&(eye - label.center)) <= 0.0 {
                continue;
            }
            let half = Vector3::y() * (label.height * 0.5);
            let top = project_point(&view_proj, &(label.center + half), width, height);
            let bottom = project_point(&view_proj, &(label.center - half), width, height);
            let (Some(top), Some(bottom)) = (top, bottom) else {
                continue;
            };
            let size = ((bottom[1] - top[1]).abs() * 0.6).clamp(6.0, 200.0) as f32;
            let center = [(top[0] + bottom[0]) * 0.5, (top[1] + bottom[1]) * 0.5];
            painter.text(
                to_pos(center),
                egui::Align2::CENTER_CENTER,
                &label.text,
                egui::FontId::proportional(size),
                to_color32(label.color),
            );
        }
    }
}

impl RenderService for EguiRenderService {
    fn add_curve(&mut self, _name: &str, curve: &Curve, material: MaterialHandle) {
        let color = material_color(&material.material());
        self.batch(material).push_curve(curve, color);
    }

    fn add_solid(&mut self, _name: &str, solid: &Solid) {
        let color = material_color(&solid.material.material());
        if let Primitive::Label { height, text, .. } = &solid.primitive {
            self.labels.push(TextLabel {
                center: solid.center,
                normal: euler_rotation(&solid.rotation) * Vector3::z(),
                height: *height,
                text: text.clone(),
                color,
            });
        }
        let batch = self.batch(solid.material);
        for segment in solid_edges(solid) {
            batch.push_segment(&segment, color);
        }
    }

    fn set_camera(&mut self, view: &Matrix4, projection: &Matrix4) {
        self.view = *view;
        self.projection = *projection;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::config::VenueConfig;
    use arena_core::scene::VenueScene;
    use arena_renderer::camera::CameraController;

    fn service() -> EguiRenderService {
        let scene = VenueScene::build(&VenueConfig::default()).unwrap();
        let mut service = EguiRenderService::new();
        scene.submit(&mut service);
        service
    }

    #[test]
    fn test_scene_becomes_lines_and_labels() {
        let service = service();
        assert!(service.segment_count() > 0);
        assert_eq!(service.label_count(), 2);
    }

    #[test]
    fn test_batches_follow_materials() {
        let service = service();
        assert!(service.batches.contains_key(&MaterialHandle::CourtLine));
        assert!(service.batches.contains_key(&MaterialHandle::Backboard));
        assert_eq!(stroke_width(&MaterialHandle::CourtLine.material()), 1.5);
        assert_eq!(stroke_width(&MaterialHandle::Backboard.material()), 0.5);
        assert_eq!(stroke_width(&MaterialHandle::Rim.material()), 1.0);

        let backboard = material_color(&MaterialHandle::Backboard.material());
        assert_eq!(backboard[3], 0.5);
    }

    #[test]
    fn test_eye_follows_camera() {
        let mut service = service();
        let camera = CameraController::new();
        camera.tick(&mut service);

        let eye = service.eye().unwrap();
        let expected = camera.state().position;
        assert!((eye - expected).norm() < 1e-6);
    }

    #[test]
    fn test_only_front_label_faces_sideline() {
        let mut service = service();
        CameraController::new().tick(&mut service);
        let eye = service.eye().unwrap();
        let facing = service
            .labels
            .iter()
            .filter(|label| label.normal.dot(&(eye - label.center)) > 0.0)
            .count();
        assert_eq!(facing, 1);
    }
}
