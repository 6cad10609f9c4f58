//! 实体线框化
//!
//! 把 [`Solid`] 描述展开成世界坐标下的线段，供线框渲染使用。
//! 旋转按 XYZ 欧拉角顺序作用在局部坐标上，然后平移到实体中心。

use std::f64::consts::TAU;

use arena_core::geometry::{Primitive, Solid};
use arena_core::math::{Point3, Vector3};
use nalgebra::{Rotation3, Unit};

/// 圆柱、圆环线框的默认分段数
pub const WIRE_SEGMENTS: u32 = 32;

/// 欧拉角（XYZ 顺序）到旋转矩阵
pub fn euler_rotation(rotation: &Vector3) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x)
        * Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z)
}

/// 实体的世界坐标线框
pub fn solid_edges(solid: &Solid) -> Vec<[Point3; 2]> {
    let local = match &solid.primitive {
        Primitive::Box { size } => box_edges(size),
        Primitive::Cylinder { radius, height } => cylinder_edges(*radius, *height, WIRE_SEGMENTS),
        Primitive::Torus { radius, tube } => torus_edges(*radius, *tube, WIRE_SEGMENTS),
        Primitive::Sphere { radius, segments } => sphere_edges(*radius, (*segments).max(3)),
        Primitive::Label { width, height, .. } => label_edges(*width, *height),
    };

    let rotation = euler_rotation(&solid.rotation);
    let offset = solid.center.coords;
    local
        .into_iter()
        .map(|[a, b]| [rotation * a + offset, rotation * b + offset])
        .collect()
}

fn box_edges(size: &Vector3) -> Vec<[Point3; 2]> {
    let h = size * 0.5;
    let corner = |i: usize| {
        Point3::new(
            if i & 1 == 0 { -h.x } else { h.x },
            if i & 2 == 0 { -h.y } else { h.y },
            if i & 4 == 0 { -h.z } else { h.z },
        )
    };

    // 相差一位的两个角点构成一条棱
    let mut edges = Vec::with_capacity(12);
    for i in 0..8usize {
        for bit in [1usize, 2, 4] {
            if i & bit == 0 {
                edges.push([corner(i), corner(i | bit)]);
            }
        }
    }
    edges
}

/// 以 `axis` 为法向的圆，起点落在 `start` 方向
fn ring(center: Point3, radius: f64, start: Vector3, axis: &Unit<Vector3>, segments: u32) -> Vec<Point3> {
    (0..segments)
        .map(|i| {
            let angle = TAU * i as f64 / segments as f64;
            center + Rotation3::from_axis_angle(axis, angle) * start * radius
        })
        .collect()
}

fn closed_loop(points: &[Point3]) -> impl Iterator<Item = [Point3; 2]> + '_ {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| [*a, *b])
}

fn cylinder_edges(radius: f64, height: f64, segments: u32) -> Vec<[Point3; 2]> {
    let half = height * 0.5;
    let bottom = ring(Point3::new(0.0, -half, 0.0), radius, Vector3::x(), &Vector3::y_axis(), segments);
    let top = ring(Point3::new(0.0, half, 0.0), radius, Vector3::x(), &Vector3::y_axis(), segments);

    let mut edges: Vec<_> = closed_loop(&bottom).chain(closed_loop(&top)).collect();
    // 竖线只取四条
    let step = (segments / 4).max(1) as usize;
    edges.extend(
        bottom
            .iter()
            .zip(&top)
            .step_by(step)
            .map(|(a, b)| [*a, *b]),
    );
    edges
}

/// 圆环在局部 XY 平面内：画内外两圈和管中心线
fn torus_edges(radius: f64, tube: f64, segments: u32) -> Vec<[Point3; 2]> {
    let origin = Point3::origin();
    [radius - tube, radius, radius + tube]
        .into_iter()
        .flat_map(|r| {
            let points = ring(origin, r, Vector3::x(), &Vector3::z_axis(), segments);
            closed_loop(&points).collect::<Vec<_>>()
        })
        .collect()
}

/// 三个互相垂直的大圆
fn sphere_edges(radius: f64, segments: u32) -> Vec<[Point3; 2]> {
    let origin = Point3::origin();
    [
        (Vector3::x(), Vector3::y_axis()),
        (Vector3::y(), Vector3::z_axis()),
        (Vector3::z(), Vector3::x_axis()),
    ]
    .into_iter()
    .flat_map(|(start, axis)| {
        let points = ring(origin, radius, start, &axis, segments);
        closed_loop(&points).collect::<Vec<_>>()
    })
    .collect()
}

fn label_edges(width: f64, height: f64) -> Vec<[Point3; 2]> {
    let (w, h) = (width * 0.5, height * 0.5);
    let corners = [
        Point3::new(-w, -h, 0.0),
        Point3::new(w, -h, 0.0),
        Point3::new(w, h, 0.0),
        Point3::new(-w, h, 0.0),
    ];
    closed_loop(&corners).collect()
}
