//! Sector geometry and the segment records it holds
//!
//! In polar coordinates, a sector is an angular wedge:
//! - min_angle, max_angle: angular extent (degrees, defined in [0, 360])
//! - one segment record per radial band, in increasing radial order
//!
//! Segments are the unit that moves between sectors during a ring rotation;
//! they are plain value records, copied between sectors rather than rebuilt.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::point_angle_deg;

/// The four fixed segment tints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentColor {
    Red,
    Green,
    Blue,
    Magenta,
}

impl SegmentColor {
    /// Draw a uniform random color from the injected RNG
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..4) {
            0 => SegmentColor::Red,
            1 => SegmentColor::Green,
            2 => SegmentColor::Blue,
            _ => SegmentColor::Magenta,
        }
    }
}

/// One radial-band cell within a sector
///
/// `rotation` is the visual rotation offset in degrees, normalized to
/// [0, 360). The base wedge geometry is built at angle 0 and rotated into
/// place by this offset, so it always equals the base angle of the sector
/// currently holding the segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub color: SegmentColor,
    pub rotation: f32,
}

/// An angular wedge of the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sector {
    /// Start angle (degrees)
    pub min_angle: f32,
    /// End angle (degrees)
    pub max_angle: f32,
    /// Segment records, one per radial index
    pub segments: Vec<Segment>,
}

impl Sector {
    pub fn new(min_angle: f32, max_angle: f32, segments: Vec<Segment>) -> Self {
        Self {
            min_angle,
            max_angle,
            segments,
        }
    }

    /// Check if a world point's angle falls inside this sector's wedge
    ///
    /// The point angle is normalized to [0, 360) before comparing. Comparing
    /// raw `atan2` output (range [-180, 180]) against wedge bounds silently
    /// misses every negative-angle point, so the normalization is load-bearing.
    pub fn contains_angle(&self, point: Vec2) -> bool {
        let theta = point_angle_deg(point);
        self.min_angle <= theta && theta <= self.max_angle
    }

    /// True when every segment in the sector shares one color
    pub fn is_filled(&self) -> bool {
        let Some(first) = self.segments.first() else {
            return false;
        };
        self.segments.iter().all(|s| s.color == first.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wedge(min: f32, max: f32) -> Sector {
        Sector::new(min, max, Vec::new())
    }

    #[test]
    fn test_contains_angle_first_quadrant() {
        let sector = wedge(0.0, 45.0);
        assert!(sector.contains_angle(Vec2::new(1.0, 0.5)));
        assert!(sector.contains_angle(Vec2::new(1.0, 0.0)));
        assert!(!sector.contains_angle(Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn test_contains_angle_negative_atan2_range() {
        // (1, -1) sits at atan2 = -45, which normalizes to 315
        let sector = wedge(315.0, 360.0);
        assert!(sector.contains_angle(Vec2::new(1.0, -1.0)));
        let lower = wedge(0.0, 45.0);
        assert!(!lower.contains_angle(Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn test_contains_angle_boundary_inclusive() {
        let sector = wedge(45.0, 90.0);
        assert!(sector.contains_angle(Vec2::new(1.0, 1.0))); // exactly 45
        assert!(sector.contains_angle(Vec2::new(0.0, 1.0))); // exactly 90
    }

    #[test]
    fn test_is_filled() {
        let uniform = Sector::new(
            0.0,
            45.0,
            vec![
                Segment {
                    color: SegmentColor::Blue,
                    rotation: 0.0,
                };
                3
            ],
        );
        assert!(uniform.is_filled());

        let mut mixed = uniform.clone();
        mixed.segments[1].color = SegmentColor::Red;
        assert!(!mixed.is_filled());

        assert!(!wedge(0.0, 45.0).is_filled());
    }
}
