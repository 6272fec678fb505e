use kurbo::{Point, Vec2};

use crate::{
    geometry::path::point_at,
    routine::model::{Routine, Waypoint},
    timeline::resolver::{self, Phase},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A renderable playback marker: where the dancer is at some timestamp.
pub struct LivePosition {
    /// Floor coordinate.
    pub position: Point,
    /// Color of the active waypoint.
    pub color: String,
}

/// Compute the dancer's floor position at time `t_sec`.
///
/// `offsets` is the positional connector-offset view (index `i` is the
/// offset for the connector leaving waypoint `i`). The view may be shorter
/// than `waypoints.len() - 1` when offsets lag behind waypoint edits;
/// missing entries behave as zero rather than failing. Returns `None` only
/// for an empty waypoint list.
///
/// Pure and allocation-light, intended to be called once per animation tick.
pub fn live_position(waypoints: &[Waypoint], offsets: &[Vec2], t_sec: f64) -> Option<LivePosition> {
    let segment = resolver::resolve(waypoints, t_sec)?;
    let current = &waypoints[segment.current];

    let position = match segment.phase {
        Phase::Hold | Phase::Terminal => current.position,
        Phase::Transition => {
            // next is always present in the transition phase
            let next = &waypoints[segment.next?];
            let offset = offsets
                .get(segment.current)
                .copied()
                .unwrap_or(Vec2::ZERO);
            point_at(current.position, next.position, offset, segment.fraction)
        }
    };

    Some(LivePosition {
        position,
        color: current.color.clone(),
    })
}

impl Routine {
    /// Live position at `t_sec`, resolving connector offsets positionally.
    #[tracing::instrument(skip(self))]
    pub fn live_position(&self, t_sec: f64) -> Option<LivePosition> {
        let offsets = self.offsets.resolve_positional(&self.waypoints);
        live_position(&self.waypoints, &offsets, t_sec)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/live.rs"]
mod tests;
