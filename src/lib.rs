//! Roto Rings - A circular ring-rotation color puzzle
//!
//! Core modules:
//! - `sim`: Deterministic puzzle logic (partition, hit testing, ring rotation)
//! - `mesh`: Colored wedge tessellation for an external renderer

pub mod mesh;
pub mod sim;

pub use sim::{Playfield, RngState, TapInput};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Radial bands per sector
    pub const NUM_SEGMENTS: usize = 5;
    /// Angular tessellation sub-steps per sector (cosmetic only)
    pub const SECTOR_NUM_DIVISIONS: u32 = 20;
    /// Angular wedges in the full circle
    pub const NUM_SECTORS: usize = 8;
    /// Degrees per sector
    pub const SECTOR_ANGLE_SIZE: f32 = 360.0 / NUM_SECTORS as f32;
    /// Playfield outer radius (sized for a ~480px window, minus a margin)
    pub const OUTER_RADIUS: f32 = 220.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_deg(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Angle of a point around the origin, in degrees normalized to [0, 360)
#[inline]
pub fn point_angle_deg(point: Vec2) -> f32 {
    normalize_deg(point.y.atan2(point.x).to_degrees())
}

/// Convert polar (r, theta in degrees) to cartesian (x, y)
#[inline]
pub fn polar_deg_to_cartesian(r: f32, theta_deg: f32) -> Vec2 {
    let theta = theta_deg.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}
