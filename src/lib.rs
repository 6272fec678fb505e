//! Chorio is a position-timeline interpolation engine for dance choreography
//! routines.
//!
//! A routine is an ordered sequence of timed floor positions (waypoints),
//! each optionally held for a wait interval before the dancer transitions
//! along a user-adjustable quadratic Bezier connector toward the next
//! waypoint. Chorio turns a routine plus a timestamp into a renderable
//! marker, and keeps that timestamp synchronized with an external playback
//! source.
//!
//! # Per-tick pipeline
//!
//! 1. **Clock**: [`PlaybackClock::tick`] produces the current time (from a
//!    bound media source or the bounded simulated clock)
//! 2. **Resolve**: [`resolve`] classifies the active segment
//!    (hold / transition / terminal) and its progress fraction
//! 3. **Position**: [`Routine::live_position`] evaluates the connector curve
//!    to a floor coordinate and color
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total read path**: resolution and interpolation are pure functions
//!   over validated documents; they never fail per tick.
//! - **Copy-on-write edits**: document edits return new snapshots, so a
//!   concurrently-rendering frame observes either the old or the new
//!   routine, never a partially-updated one.
//! - **Identity-keyed curve adjustments**: connector offsets follow their
//!   waypoint pair across insertions, deletions and re-sorts.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod geometry;
mod playback;
mod routine;
mod timeline;

pub use foundation::core::{Point, StageDims, Vec2, WaypointId};
pub use foundation::error::{ChorioError, ChorioResult};
pub use geometry::path::{connector, control_point, midpoint, point_at};
pub use playback::clock::{
    ClockSnapshot, ClockSource, MediaTransport, PlaybackClock, SimulatedClock, TransportState,
};
pub use routine::edit::{Selection, find_conflict, validate_and_insert};
pub use routine::model::{Routine, Waypoint};
pub use routine::offsets::{ConnectorOffset, ConnectorOffsets};
pub use timeline::live::{LivePosition, live_position};
pub use timeline::resolver::{Phase, Segment, resolve};
pub use timeline::segments::{TimelineSegment, shade_hex_color, timeline_segments};
