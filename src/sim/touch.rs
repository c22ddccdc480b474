//! Touch resolution for the circular playfield
//!
//! The tricky part of Roto Rings: mapping a 2D world point to a
//! (sector, segment) coordinate. Resolution is layered:
//! - broad phase: is the point inside the outer radius at all?
//! - mid phase: which angular wedge contains the point?
//! - narrow phase: which radial band contains the point?
//!
//! Each phase is a small pure function; `resolve_touch` composes them and
//! `handle_tap` drives the resolve -> rotate -> fill sequence for one tap.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::playfield::{Direction, Playfield};
use super::sector::Sector;

/// A resolved (sector, segment) coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchHit {
    pub sector: usize,
    pub segment: usize,
}

/// One discrete tap event from the input collaborator
#[derive(Debug, Clone, Copy)]
pub struct TapInput {
    /// World-space tap position (playfield origin at (0, 0))
    pub pos: Vec2,
    /// Pointer or button id that triggered the tap
    pub pointer: u32,
}

impl TapInput {
    pub fn new(x: f32, y: f32, pointer: u32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            pointer,
        }
    }

    /// Pointer id 0 spins counter-clockwise, any other id clockwise
    pub fn direction(&self) -> Direction {
        if self.pointer == 0 {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        }
    }
}

/// Broad phase: point within the playfield disc (boundary included here;
/// the narrow phase's strict band edges still reject it)
#[inline]
pub fn in_playfield(point: Vec2, outer_radius: f32) -> bool {
    point.length() <= outer_radius
}

/// Mid phase: first sector whose wedge contains the point's angle
pub fn sector_index_at(sectors: &[Sector], point: Vec2) -> Option<usize> {
    sectors.iter().position(|sector| sector.contains_angle(point))
}

/// Narrow phase: radial band containing `length`, strict on both edges
///
/// A length exactly on a band boundary matches nothing.
pub fn segment_index_at(
    length: f32,
    radius_inner: f32,
    radius_segment: f32,
    num_segments: usize,
) -> Option<usize> {
    (0..num_segments).find(|&i| {
        let r0 = radius_inner + i as f32 * radius_segment;
        let r1 = radius_inner + (i + 1) as f32 * radius_segment;
        r0 < length && length < r1
    })
}

/// Resolve a world point to a (sector, segment) coordinate
///
/// Pure query; does not touch playfield state.
pub fn resolve_touch(field: &Playfield, point: Vec2) -> Option<TouchHit> {
    if !in_playfield(point, field.outer_radius) {
        return None;
    }

    let sector = sector_index_at(&field.sectors, point)?;
    let segment = segment_index_at(
        point.length(),
        field.radius_inner,
        field.radius_segment,
        field.num_segments,
    )?;

    Some(TouchHit { sector, segment })
}

/// Process one tap: resolve, rotate the hit ring, resolve any fills
///
/// Returns whether the tap was consumed. A miss leaves all state untouched.
pub fn handle_tap(field: &mut Playfield, input: &TapInput, rng: &mut impl Rng) -> bool {
    let Some(hit) = resolve_touch(field, input.pos) else {
        log::debug!("tap at {:?} missed", input.pos);
        return false;
    };

    log::debug!(
        "tap at {:?} hit sector {} segment {}, spinning {:?}",
        input.pos,
        hit.sector,
        hit.segment,
        input.direction()
    );

    field.record_touch(hit);
    field.rotate_ring(input.direction(), hit.segment);
    field.resolve_filled_sectors(rng);
    true
}
