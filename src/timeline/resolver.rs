use crate::routine::model::Waypoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Which part of a waypoint's lifetime a timestamp falls in.
pub enum Phase {
    /// The dancer is holding the current waypoint's position.
    Hold,
    /// The dancer is moving along the connector toward the next waypoint.
    Transition,
    /// The current waypoint is the last one; the dancer stays on it.
    Terminal,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Resolved active segment for a timestamp.
pub struct Segment {
    /// Index of the active waypoint.
    pub current: usize,
    /// Index of the following waypoint, absent for the last one.
    pub next: Option<usize>,
    /// Phase within the active waypoint's lifetime.
    pub phase: Phase,
    /// Transition progress in `[0, 1]`; 0 outside [`Phase::Transition`].
    pub fraction: f64,
}

/// Resolve the active segment for time `t_sec`.
///
/// `waypoints` must be sorted ascending by `start_sec`. Returns `None` only
/// for an empty sequence. The active waypoint is the last one whose start
/// time is `<= t_sec` (the first waypoint when `t_sec` precedes all starts;
/// the last of a run when duplicate start times slip past the validator).
/// Total over the time domain and never panics; NaN timestamps are the
/// clock adapter's contract to reject, not handled here.
pub fn resolve(waypoints: &[Waypoint], t_sec: f64) -> Option<Segment> {
    if waypoints.is_empty() {
        return None;
    }

    let idx = waypoints.partition_point(|w| w.start_sec <= t_sec);
    let current = idx.saturating_sub(1);
    let cur = &waypoints[current];
    let next = (current + 1 < waypoints.len()).then_some(current + 1);

    let hold_end = cur.hold_end_sec();
    if t_sec <= hold_end {
        return Some(Segment {
            current,
            next,
            phase: Phase::Hold,
            fraction: 0.0,
        });
    }

    let Some(next_index) = next else {
        return Some(Segment {
            current,
            next: None,
            phase: Phase::Terminal,
            fraction: 0.0,
        });
    };

    // Zero or negative transition window snaps to the next waypoint.
    let span = waypoints[next_index].start_sec - hold_end;
    let fraction = if span <= 0.0 {
        1.0
    } else {
        ((t_sec - hold_end) / span).clamp(0.0, 1.0)
    };

    Some(Segment {
        current,
        next,
        phase: Phase::Transition,
        fraction,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/resolver.rs"]
mod tests;
