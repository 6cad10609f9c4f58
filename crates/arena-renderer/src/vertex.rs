//! 顶点数据定义

use arena_core::geometry::Curve;
use arena_core::math::Point3;

/// 3D线条顶点
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineVertex {
    /// 位置 (x, y, z)
    pub position: [f32; 3],
    /// 颜色 (r, g, b, a)
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(point: &Point3, color: [f32; 4]) -> Self {
        Self {
            position: [point.x as f32, point.y as f32, point.z as f32],
            color,
        }
    }

    pub fn point(&self) -> Point3 {
        Point3::new(
            self.position[0] as f64,
            self.position[1] as f64,
            self.position[2] as f64,
        )
    }
}

/// 线段列表（每两个顶点一条线段）
///
/// 折线、闭合环和独立线段统一展开成线段列表，上传时无需区分绘制模式。
#[derive(Debug, Clone, Default)]
pub struct LineBatch {
    vertices: Vec<LineVertex>,
}

impl LineBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_segment(&mut self, segment: &[Point3; 2], color: [f32; 4]) {
        self.vertices.push(LineVertex::new(&segment[0], color));
        self.vertices.push(LineVertex::new(&segment[1], color));
    }

    pub fn push_curve(&mut self, curve: &Curve, color: [f32; 4]) {
        for segment in curve.segments() {
            self.push_segment(&segment, color);
        }
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn segments(&self) -> impl Iterator<Item = (&LineVertex, &LineVertex)> {
        self.vertices.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::geometry::DrawMode;

    fn square(mode: DrawMode) -> Curve {
        Curve::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            mode,
        )
    }

    #[test]
    fn test_batch_expands_draw_modes() {
        let white = [1.0; 4];
        let mut batch = LineBatch::new();
        batch.push_curve(&square(DrawMode::Polyline), white);
        assert_eq!(batch.segment_count(), 3);

        batch.clear();
        batch.push_curve(&square(DrawMode::LineLoop), white);
        assert_eq!(batch.segment_count(), 4);

        batch.clear();
        batch.push_curve(&square(DrawMode::Segments), white);
        assert_eq!(batch.segment_count(), 2);
        let (_, end) = batch.segments().next().unwrap();
        assert_eq!(end.point(), Point3::new(1.0, 0.0, 0.0));
    }
}
