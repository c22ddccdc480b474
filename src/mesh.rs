//! Colored wedge tessellation for an external renderer
//!
//! The core does no drawing itself. This module turns the playfield's segment
//! views into flat triangle lists a renderer can upload directly. Base wedge
//! geometry spans `[0, angle_size]` degrees and is carried into place by each
//! segment's rotation offset.

use bytemuck::{Pod, Zeroable};

use crate::polar_deg_to_cartesian;
use crate::sim::{Playfield, SegmentColor, SegmentView};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for the four segment tints
pub mod colors {
    pub const RED: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
    pub const GREEN: [f32; 4] = [0.2, 0.8, 0.3, 1.0];
    pub const BLUE: [f32; 4] = [0.25, 0.45, 1.0, 1.0];
    pub const MAGENTA: [f32; 4] = [0.9, 0.25, 0.9, 1.0];
}

/// RGBA value for a segment tint
pub fn color_rgba(color: SegmentColor) -> [f32; 4] {
    match color {
        SegmentColor::Red => colors::RED,
        SegmentColor::Green => colors::GREEN,
        SegmentColor::Blue => colors::BLUE,
        SegmentColor::Magenta => colors::MAGENTA,
    }
}

/// Generate vertices for one segment wedge (thick arc band)
///
/// `divisions` sub-steps across the angular span, two triangles per sub-step.
pub fn segment_wedge(view: &SegmentView, divisions: u32) -> Vec<Vertex> {
    let divisions = divisions.max(1);
    let color = color_rgba(view.color);
    let theta_step = view.angle_size / divisions as f32;

    let mut vertices = Vec::with_capacity((divisions * 6) as usize);

    for i in 0..divisions {
        let theta1 = view.rotation + i as f32 * theta_step;
        let theta2 = view.rotation + (i + 1) as f32 * theta_step;

        let inner1 = polar_deg_to_cartesian(view.radius_min, theta1);
        let outer1 = polar_deg_to_cartesian(view.radius_max, theta1);
        let inner2 = polar_deg_to_cartesian(view.radius_min, theta2);
        let outer2 = polar_deg_to_cartesian(view.radius_max, theta2);

        // Two triangles per division
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate the triangle list for every segment in the playfield
pub fn playfield_vertices(field: &Playfield) -> Vec<Vertex> {
    field
        .segments()
        .flat_map(|view| segment_wedge(&view, field.sector_num_divisions))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point_angle_deg;
    use crate::sim::RngState;
    use glam::Vec2;

    fn band_view() -> SegmentView {
        SegmentView {
            sector_index: 2,
            segment_index: 1,
            radius_min: 50.0,
            radius_max: 80.0,
            angle_size: 45.0,
            rotation: 90.0,
            color: SegmentColor::Blue,
        }
    }

    #[test]
    fn test_wedge_vertex_count() {
        let vertices = segment_wedge(&band_view(), 20);
        assert_eq!(vertices.len(), 20 * 6);
    }

    #[test]
    fn test_wedge_stays_inside_band() {
        for vertex in segment_wedge(&band_view(), 20) {
            let r = Vec2::from(vertex.position).length();
            assert!(r >= 50.0 - 1e-3 && r <= 80.0 + 1e-3);
        }
    }

    #[test]
    fn test_wedge_rotated_into_sector_position() {
        // rotation 90 + span 45: every vertex angle lands in [90, 135]
        for vertex in segment_wedge(&band_view(), 20) {
            let theta = point_angle_deg(Vec2::from(vertex.position));
            assert!(theta >= 90.0 - 1e-2 && theta <= 135.0 + 1e-2);
        }
    }

    #[test]
    fn test_wedge_color_matches_tint() {
        for vertex in segment_wedge(&band_view(), 4) {
            assert_eq!(vertex.color, colors::BLUE);
        }
    }

    #[test]
    fn test_playfield_vertices_cover_every_segment() {
        let mut rng = RngState::new(21).to_rng();
        let field = Playfield::new(5, 20, 45.0, 220.0, &mut rng);
        let vertices = playfield_vertices(&field);
        assert_eq!(vertices.len(), 8 * 5 * 20 * 6);
    }
}
