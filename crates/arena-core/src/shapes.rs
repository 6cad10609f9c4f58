//! 曲线生成器
//!
//! 所有生成器都是纯函数：相同输入得到逐点相同的输出，没有共享状态。
//! 镜像和平移通过参数完成，而不是对生成后的点做变换。
//!
//! 角度约定：圆弧的 0° 指向 +Z，角度按 π/180 换算为弧度。

use std::f64::consts::{PI, TAU};

use crate::config::Side;
use crate::error::{GeometryError, Result};
use crate::geometry::{Curve, DrawMode};
use crate::math::Point3;

/// 圆默认分段数
pub const DEFAULT_SEGMENTS: usize = 64;

/// 圆弧默认角度步长（度）
pub const DEFAULT_ARC_STEP_DEG: f64 = 1.0;

/// 单条圆弧允许的最大步数
pub const MAX_ARC_STEPS: f64 = 1.0e6;

fn check_segments(segments: usize) -> Result<()> {
    if segments < 3 {
        return Err(GeometryError::InvalidParameter(format!(
            "segment count must be at least 3, got {segments}"
        )));
    }
    Ok(())
}

fn check_radius(name: &str, radius: f64) -> Result<()> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(GeometryError::InvalidParameter(format!(
            "{name} must be a non-negative number, got {radius}"
        )));
    }
    Ok(())
}

fn check_length(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GeometryError::InvalidParameter(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// 两点线段
pub fn line(p0: Point3, p1: Point3) -> Curve {
    Curve::new(vec![p0, p1], DrawMode::Polyline)
}

/// 原样传递的折线，至少两个点
pub fn polyline(points: Vec<Point3>) -> Result<Curve> {
    if points.len() < 2 {
        return Err(GeometryError::InvalidParameter(format!(
            "polyline needs at least 2 points, got {}",
            points.len()
        )));
    }
    Ok(Curve::new(points, DrawMode::Polyline))
}

/// 位于高度 `plane_y` 的 XZ 平面圆，圆心在 Y 轴上
pub fn circle(radius: f64, segments: usize, plane_y: f64) -> Result<Curve> {
    circle_at(Point3::new(0.0, plane_y, 0.0), radius, segments)
}

/// 以 `center` 为圆心的 XZ 平面圆
///
/// 返回 `segments + 1` 个点，θ = (i / segments)·2π。最后一个点直接复制第一个点，
/// 保证首末点逐位相同，渲染端可以当作闭合折线处理而无需特殊处理回绕。
pub fn circle_at(center: Point3, radius: f64, segments: usize) -> Result<Curve> {
    check_segments(segments)?;
    check_radius("circle radius", radius)?;

    let mut points: Vec<Point3> = (0..segments)
        .map(|i| {
            let theta = (i as f64 / segments as f64) * TAU;
            Point3::new(
                center.x + theta.cos() * radius,
                center.y,
                center.z + theta.sin() * radius,
            )
        })
        .collect();
    points.push(points[0]);

    Ok(Curve::new(points, DrawMode::LineLoop))
}

/// 三分线形状的圆弧
///
/// 点序：起点辐条端点 → 逐步扫过的弧 → 终点辐条端点。弧上的点为
/// `(center_x + offset_x + r·sin α, 0, r·cos α)`，辐条端点位于 `x = center_x`，
/// 形成"直线进入、弧线、直线离开"的形状。
pub fn arc(
    center_x: f64,
    offset_x: f64,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    step_deg: f64,
) -> Result<Curve> {
    check_radius("arc radius", radius)?;
    check_length("arc step", step_deg)?;
    if !start_deg.is_finite() || !end_deg.is_finite() || !center_x.is_finite() || !offset_x.is_finite() {
        return Err(GeometryError::InvalidParameter(
            "arc angles and offsets must be finite".to_string(),
        ));
    }

    let sweep = end_deg - start_deg;
    let direction = if sweep < 0.0 { -1.0 } else { 1.0 };
    let steps = (sweep.abs() / step_deg).ceil();
    if steps > MAX_ARC_STEPS {
        return Err(GeometryError::InvalidParameter(format!(
            "arc step {step_deg}° is too small for a {}° sweep",
            sweep.abs()
        )));
    }
    let steps = steps as usize;

    let point_at = |deg: f64| {
        let alpha = deg.to_radians();
        Point3::new(center_x + offset_x + radius * alpha.sin(), 0.0, radius * alpha.cos())
    };

    let mut points = Vec::with_capacity(steps + 3);
    points.push(Point3::new(center_x, 0.0, radius * start_deg.to_radians().cos()));
    for i in 0..=steps {
        // 整数步乘法而非累加，避免误差累积；最后一步落在终止角上
        let deg = if i == steps {
            end_deg
        } else {
            start_deg + direction * (i as f64 * step_deg)
        };
        points.push(point_at(deg));
    }
    points.push(Point3::new(center_x, 0.0, radius * end_deg.to_radians().cos()));

    Ok(Curve::new(points, DrawMode::Polyline))
}

/// 圆弧参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    pub center_x: f64,
    pub offset_x: f64,
    pub radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
    pub step_deg: f64,
}

impl ArcParams {
    /// 关于 YZ 平面镜像的参数
    ///
    /// 取反 x 偏移和扫描角（sin 为奇函数、cos 为偶函数），
    /// 生成的点与原参数的点逐一互为 X 镜像。
    pub fn mirrored_x(&self) -> Self {
        Self {
            center_x: -self.center_x,
            offset_x: -self.offset_x,
            start_deg: -self.start_deg,
            end_deg: -self.end_deg,
            ..*self
        }
    }

    pub fn generate(&self) -> Result<Curve> {
        arc(
            self.center_x,
            self.offset_x,
            self.radius,
            self.start_deg,
            self.end_deg,
            self.step_deg,
        )
    }
}

/// 罚球区矩形
///
/// `anchor` 为底线上的中点，矩形从 `side` 所在底线朝场地中央延伸 `depth`，
/// 宽度为 `2 * half_width`。首点在末尾重复，共 5 个点。
pub fn rectangle_outline(anchor: Point3, half_width: f64, depth: f64, side: Side) -> Result<Curve> {
    check_length("rectangle half width", half_width)?;
    check_length("rectangle depth", depth)?;

    let inward = -side.sign();
    let near_x = anchor.x;
    let far_x = anchor.x + inward * depth;
    let y = anchor.y;

    Ok(Curve::new(
        vec![
            Point3::new(near_x, y, anchor.z - half_width),
            Point3::new(near_x, y, anchor.z + half_width),
            Point3::new(far_x, y, anchor.z + half_width),
            Point3::new(far_x, y, anchor.z - half_width),
            Point3::new(near_x, y, anchor.z - half_width),
        ],
        DrawMode::Polyline,
    ))
}

/// 篮网线框
///
/// 对每个 i ∈ [0, segments) 依次输出上环点和下环点，两点构成一条独立线段。
/// 结果是 `2 * segments` 个点，绘制模式为 `Segments`，相邻线段之间不相连。
pub fn net_wireframe(
    center_x: f64,
    top_y: f64,
    bottom_y: f64,
    top_radius: f64,
    bottom_radius: f64,
    segments: usize,
) -> Result<Curve> {
    check_segments(segments)?;
    check_radius("net top radius", top_radius)?;
    check_radius("net bottom radius", bottom_radius)?;

    let mut points = Vec::with_capacity(segments * 2);
    for i in 0..segments {
        let angle = (i as f64 / segments as f64) * TAU;
        let (sin, cos) = angle.sin_cos();
        points.push(Point3::new(center_x + cos * top_radius, top_y, sin * top_radius));
        points.push(Point3::new(center_x + cos * bottom_radius, bottom_y, sin * bottom_radius));
    }

    Ok(Curve::new(points, DrawMode::Segments))
}

/// 半个大圆（经线），绕原点，φ 从 0（顶点）扫到 π（底点），方位角为 `azimuth`
pub fn half_great_circle(radius: f64, azimuth: f64, segments: usize) -> Result<Curve> {
    check_segments(segments)?;
    check_radius("meridian radius", radius)?;

    let (az_sin, az_cos) = azimuth.sin_cos();
    let points = (0..=segments)
        .map(|i| {
            let phi = (i as f64 / segments as f64) * PI;
            Point3::new(
                az_cos * phi.sin() * radius,
                phi.cos() * radius,
                az_sin * phi.sin() * radius,
            )
        })
        .collect();

    Ok(Curve::new(points, DrawMode::Polyline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, mirror_x, points_approx_eq};

    #[test]
    fn test_line() {
        let curve = line(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.mode(), DrawMode::Polyline);
    }

    #[test]
    fn test_polyline_requires_two_points() {
        assert!(matches!(
            polyline(vec![Point3::origin()]),
            Err(GeometryError::InvalidParameter(_))
        ));
        let pts = vec![Point3::origin(), Point3::new(0.0, 0.0, 1.0), Point3::new(1.0, 0.0, 1.0)];
        assert_eq!(polyline(pts.clone()).unwrap().points(), pts.as_slice());
    }

    #[test]
    fn test_circle_is_closed_for_all_segment_counts() {
        for n in [3usize, 4, 7, 64, 100] {
            for r in [0.5, 1.6, 2.0, 10.0] {
                let curve = circle(r, n, 0.0).unwrap();
                assert_eq!(curve.len(), n + 1);
                assert_eq!(curve.points()[0], curve.points()[n]);
                assert!(curve
                    .points()
                    .iter()
                    .all(|p| approx_eq((p.x * p.x + p.z * p.z).sqrt(), r)));
            }
        }
    }

    #[test]
    fn test_circle_plane_height() {
        let curve = circle(1.0, 16, 2.5).unwrap();
        assert!(curve.points().iter().all(|p| p.y == 2.5));
        assert_eq!(curve.mode(), DrawMode::LineLoop);
    }

    #[test]
    fn test_circle_rejects_bad_parameters() {
        assert!(matches!(circle(1.0, 2, 0.0), Err(GeometryError::InvalidParameter(_))));
        assert!(matches!(circle(-1.0, 64, 0.0), Err(GeometryError::InvalidParameter(_))));
        assert!(matches!(
            net_wireframe(0.0, 1.0, 0.0, 0.45, 0.38, 2),
            Err(GeometryError::InvalidParameter(_))
        ));
        assert!(matches!(
            half_great_circle(-0.3, 0.0, 64),
            Err(GeometryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_circle_at_center() {
        let curve = circle_at(Point3::new(-9.0, 0.0, 0.0), 1.6, DEFAULT_SEGMENTS).unwrap();
        assert!(points_approx_eq(&curve.points()[0], &Point3::new(-7.4, 0.0, 0.0)));
        let bbox = curve.bounding_box();
        assert!(approx_eq(bbox.center().x, -9.0));
    }

    #[test]
    fn test_arc_shape() {
        let curve = arc(-14.0, 5.0, 5.5, 0.0, 180.0, DEFAULT_ARC_STEP_DEG).unwrap();
        // 181 个弧上点 + 两个辐条端点
        assert_eq!(curve.len(), 183);

        let pts = curve.points();
        assert!(points_approx_eq(&pts[0], &Point3::new(-14.0, 0.0, 5.5)));
        assert!(points_approx_eq(&pts[1], &Point3::new(-9.0, 0.0, 5.5)));
        assert!(points_approx_eq(&pts[91], &Point3::new(-3.5, 0.0, 0.0)));
        assert!(points_approx_eq(&pts[181], &Point3::new(-9.0, 0.0, -5.5)));
        assert!(points_approx_eq(&pts[182], &Point3::new(-14.0, 0.0, -5.5)));
    }

    #[test]
    fn test_arc_uneven_step_ends_on_end_angle() {
        let curve = arc(0.0, 0.0, 1.0, 0.0, 10.0, 3.0).unwrap();
        // 0, 3, 6, 9, 10
        assert_eq!(curve.len(), 5 + 2);
        let last_on_arc = curve.points()[curve.len() - 2];
        assert!(approx_eq(last_on_arc.x, 10f64.to_radians().sin()));
    }

    #[test]
    fn test_arc_rejects_bad_step() {
        assert!(matches!(
            arc(0.0, 0.0, 1.0, 0.0, 90.0, 0.0),
            Err(GeometryError::InvalidParameter(_))
        ));
        assert!(matches!(
            arc(0.0, 0.0, -1.0, 0.0, 90.0, 1.0),
            Err(GeometryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_arc_rejects_tiny_step() {
        for step in [1e-300, 1e-9, f64::MIN_POSITIVE] {
            assert!(matches!(
                arc(-14.0, 5.0, 5.5, 0.0, 180.0, step),
                Err(GeometryError::InvalidParameter(_))
            ));
        }
        // 上限以内的细步长仍然允许
        let step = 1.0 / 524_288.0;
        let fine = arc(0.0, 0.0, 1.0, 0.0, 1.0, step).unwrap();
        assert_eq!(fine.len(), 524_288 + 3);
        // 步长大于扫描角时只有首尾两点
        let coarse = arc(0.0, 0.0, 1.0, 0.0, 90.0, 1e6).unwrap();
        assert_eq!(coarse.len(), 4);
    }

    #[test]
    fn test_arc_mirroring_is_exact_reflection() {
        let params = ArcParams {
            center_x: -14.0,
            offset_x: 5.0,
            radius: 5.5,
            start_deg: 0.0,
            end_deg: 180.0,
            step_deg: 1.0,
        };
        let left = params.generate().unwrap();
        let right = params.mirrored_x().generate().unwrap();

        assert_eq!(left.len(), right.len());
        for (l, r) in left.points().iter().zip(right.points()) {
            assert!(points_approx_eq(&mirror_x(l), r), "{l} vs {r}");
        }
    }

    #[test]
    fn test_rectangle_outline() {
        let left = rectangle_outline(Point3::new(-14.0, 0.0, 0.0), 2.0, 5.0, Side::Left).unwrap();
        assert_eq!(left.len(), 5);
        assert!(left.is_closed());
        assert_eq!(left.points()[2], Point3::new(-9.0, 0.0, 2.0));

        let right = rectangle_outline(Point3::new(14.0, 0.0, 0.0), 2.0, 5.0, Side::Right).unwrap();
        for (l, r) in left.points().iter().zip(right.points()) {
            assert_eq!(mirror_x(l), *r);
        }

        assert!(rectangle_outline(Point3::origin(), 0.0, 5.0, Side::Left).is_err());
    }

    #[test]
    fn test_net_wireframe_pairs() {
        let n = 8;
        let cx = 13.1;
        let curve = net_wireframe(cx, 2.75, 2.15, 0.45, 0.38, n).unwrap();
        assert_eq!(curve.len(), 2 * n);
        assert_eq!(curve.mode(), DrawMode::Segments);
        assert_eq!(curve.segments().len(), n);

        let pts = curve.points();
        for i in 0..n {
            let top = pts[2 * i];
            let bottom = pts[2 * i + 1];
            assert!(approx_eq(top.y, 2.75));
            assert!(approx_eq(bottom.y, 2.15));
            // 同一方位角，只有半径和高度不同
            let top_angle = top.z.atan2(top.x - cx);
            let bottom_angle = bottom.z.atan2(bottom.x - cx);
            assert!(approx_eq(top_angle, bottom_angle));
            assert!(approx_eq((top.x - cx).hypot(top.z), 0.45));
            assert!(approx_eq((bottom.x - cx).hypot(bottom.z), 0.38));
        }
        // 线段之间不相连：下一段的上环点不是上一段的下环点
        for i in 0..n - 1 {
            assert_ne!(pts[2 * i + 1], pts[2 * i + 2]);
        }
    }

    #[test]
    fn test_half_great_circle() {
        let curve = half_great_circle(0.301, PI, 64).unwrap();
        assert_eq!(curve.len(), 65);
        assert!(approx_eq(curve.points()[0].y, 0.301));
        assert!(approx_eq(curve.points()[64].y, -0.301));
        // 方位角 π 的经线位于 -X 一侧
        assert!(curve.points()[32].x < 0.0);
        assert!(curve.points().iter().all(|p| approx_eq(p.coords.norm(), 0.301)));
    }

    #[test]
    fn test_generators_are_deterministic() {
        assert_eq!(circle(2.0, 64, 0.0), circle(2.0, 64, 0.0));
        assert_eq!(
            arc(-14.0, 5.0, 5.5, 0.0, 180.0, 1.0),
            arc(-14.0, 5.0, 5.5, 0.0, 180.0, 1.0)
        );
    }
}
