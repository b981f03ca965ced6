//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::appearance::{Appearance, Palette};
use super::vertex::Vertex;
use crate::sim::Body;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Filled disc with its outline ring
pub fn disc(body: &Body, look: &Appearance, segments: u32) -> Vec<Vertex> {
    let center = body.center();
    let radius = body.radius();

    let mut vertices = circle(center, radius, look.fill_color(), segments);
    if look.outline_thickness > 0.0 {
        vertices.extend(ring(
            center,
            radius,
            radius + look.outline_thickness,
            look.outline_color,
            segments,
        ));
    }
    vertices
}

/// Vertices for every body, in draw order
pub fn build_frame(bodies: &[Body], palette: &Palette, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(bodies.len() * segments as usize * 9);
    for body in bodies {
        vertices.extend(disc(body, &palette.get(body.id), segments));
    }
    vertices
}
