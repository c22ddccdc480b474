//! Playfield state and the ring-rotation / fill machinery
//!
//! The playfield partitions a disc into angular wedges, each holding one
//! colored segment per radial band. The partition is generated once at
//! construction and never re-tessellated; only segment colors and
//! segment-to-sector assignment mutate afterwards.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::sector::{Sector, Segment, SegmentColor};
use super::touch::TouchHit;
use crate::normalize_deg;

/// Rotation direction for a ring step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// RNG state wrapper for reproducible sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Render-facing view of one segment
///
/// Enough to draw a colored wedge: the radial band, the base angular band
/// (geometry built at angle 0), and the rotation offset that carries the
/// wedge into its sector's position.
#[derive(Debug, Clone, Copy)]
pub struct SegmentView {
    pub sector_index: usize,
    pub segment_index: usize,
    /// Inner edge of the radial band
    pub radius_min: f32,
    /// Outer edge of the radial band
    pub radius_max: f32,
    /// Angular width of the base wedge (degrees, starting at 0)
    pub angle_size: f32,
    /// Rotation offset (degrees)
    pub rotation: f32,
    pub color: SegmentColor,
}

/// The full grid of sectors x segments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playfield {
    /// Radial bands per sector
    pub num_segments: usize,
    /// Angular tessellation sub-steps per sector (consumed by the mesh layer)
    pub sector_num_divisions: u32,
    /// Degrees per sector
    pub sector_angle_size: f32,
    pub outer_radius: f32,
    /// Inner edge of the first segment band
    pub radius_inner: f32,
    /// Radial thickness of one segment band
    pub radius_segment: f32,
    /// Angular wedges in index order; the index after the last wraps to 0
    pub sectors: Vec<Sector>,
    num_sectors_filled: u32,
    last_touched: Option<TouchHit>,
}

impl Playfield {
    /// Build the sector partition and randomize initial segment colors
    ///
    /// `sector_angle_size` is expected to divide 360 evenly. When it does
    /// not, the sector count truncates (floor) and the partition leaves an
    /// unreachable angular gap; that configuration is logged, not rejected.
    pub fn new(
        num_segments: usize,
        sector_num_divisions: u32,
        sector_angle_size: f32,
        outer_radius: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let num_sectors = (360.0 / sector_angle_size).floor() as usize;
        let covered = num_sectors as f32 * sector_angle_size;
        if covered < 360.0 {
            log::warn!(
                "sector angle {} leaves a {} degree gap ({} sectors)",
                sector_angle_size,
                360.0 - covered,
                num_sectors
            );
        }

        let radius_inner = outer_radius / (num_segments + 1) as f32;
        let radius_segment = (outer_radius - radius_inner) / num_segments as f32;

        let sectors = (0..num_sectors)
            .map(|s| {
                let min_angle = s as f32 * sector_angle_size;
                let segments = (0..num_segments)
                    .map(|_| Segment {
                        color: SegmentColor::random(rng),
                        rotation: min_angle,
                    })
                    .collect();
                Sector::new(min_angle, min_angle + sector_angle_size, segments)
            })
            .collect();

        log::info!(
            "playfield: {} sectors x {} segments, radii {:.1}..{:.1} step {:.1}",
            num_sectors,
            num_segments,
            radius_inner,
            outer_radius,
            radius_segment
        );

        Self {
            num_segments,
            sector_num_divisions,
            sector_angle_size,
            outer_radius,
            radius_inner,
            radius_segment,
            sectors,
            num_sectors_filled: 0,
            last_touched: None,
        }
    }

    pub fn num_sectors(&self) -> usize {
        self.sectors.len()
    }

    /// Sectors filled so far (monotonic)
    pub fn num_sectors_filled(&self) -> u32 {
        self.num_sectors_filled
    }

    /// Sector index of the most recent successful hit
    pub fn last_sector_touched(&self) -> Option<usize> {
        self.last_touched.map(|hit| hit.sector)
    }

    /// Segment index of the most recent successful hit
    pub fn last_segment_touched(&self) -> Option<usize> {
        self.last_touched.map(|hit| hit.segment)
    }

    pub(super) fn record_touch(&mut self, hit: TouchHit) {
        self.last_touched = Some(hit);
    }

    /// Iterate render-facing views of every segment
    pub fn segments(&self) -> impl Iterator<Item = SegmentView> + '_ {
        self.sectors.iter().enumerate().flat_map(move |(s, sector)| {
            sector.segments.iter().enumerate().map(move |(i, segment)| {
                let radius_min = self.radius_inner + i as f32 * self.radius_segment;
                SegmentView {
                    sector_index: s,
                    segment_index: i,
                    radius_min,
                    radius_max: radius_min + self.radius_segment,
                    angle_size: self.sector_angle_size,
                    rotation: segment.rotation,
                    color: segment.color,
                }
            })
        })
    }

    /// Rotate the whole ring at `segment_index` one sector-step
    ///
    /// Every sector's segment at that radial index shifts to the neighboring
    /// sector; the touched sector only selects the ring, it is not a pivot.
    /// Moved segments keep their color and have their rotation offset
    /// adjusted by one sector angle so the wedge tracks its new position.
    pub fn rotate_ring(&mut self, direction: Direction, segment_index: usize) {
        let n = self.sectors.len();
        if n == 0 || segment_index >= self.num_segments {
            return;
        }

        match direction {
            Direction::CounterClockwise => {
                let saved = self.sectors[n - 1].segments[segment_index];
                for i in (1..n).rev() {
                    self.sectors[i].segments[segment_index] =
                        self.sectors[i - 1].segments[segment_index];
                }
                self.sectors[0].segments[segment_index] = saved;
            }
            Direction::Clockwise => {
                let saved = self.sectors[0].segments[segment_index];
                for i in 0..n - 1 {
                    self.sectors[i].segments[segment_index] =
                        self.sectors[i + 1].segments[segment_index];
                }
                self.sectors[n - 1].segments[segment_index] = saved;
            }
        }

        let step = match direction {
            Direction::CounterClockwise => self.sector_angle_size,
            Direction::Clockwise => -self.sector_angle_size,
        };
        for sector in &mut self.sectors {
            let segment = &mut sector.segments[segment_index];
            segment.rotation = normalize_deg(segment.rotation + step);
        }
    }

    /// Scan for filled sectors and resolve each one found
    ///
    /// A filled sector has every segment re-rolled to an independent random
    /// color and bumps the fill counter once. Multiple sectors may fill in
    /// one pass; each is processed independently. Rotation offsets are left
    /// alone. Returns the number of sectors filled this pass.
    pub fn resolve_filled_sectors(&mut self, rng: &mut impl Rng) -> u32 {
        let mut filled = 0;
        for (s, sector) in self.sectors.iter_mut().enumerate() {
            if !sector.is_filled() {
                continue;
            }
            for segment in &mut sector.segments {
                segment.color = SegmentColor::random(rng);
            }
            self.num_sectors_filled += 1;
            filled += 1;
            log::info!("sector {} filled (total {})", s, self.num_sectors_filled);
        }
        filled
    }
}
