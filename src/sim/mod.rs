//! Deterministic puzzle module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Event-driven only (one tap resolved to completion per call)
//! - Seeded RNG only, injected by the caller
//! - No rendering or platform dependencies

pub mod playfield;
pub mod sector;
pub mod touch;

pub use playfield::{Direction, Playfield, RngState, SegmentView};
pub use sector::{Sector, Segment, SegmentColor};
pub use touch::{TapInput, TouchHit, handle_tap, resolve_touch};
