use kurbo::Vec2;

use crate::{foundation::core::WaypointId, routine::model::Waypoint};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One curve adjustment, keyed by the identities of the waypoint pair it
/// belongs to.
pub struct ConnectorOffset {
    /// Id of the earlier waypoint of the pair.
    pub from: WaypointId,
    /// Id of the later waypoint of the pair.
    pub to: WaypointId,
    /// Displacement applied to the pair's geometric midpoint to produce the
    /// Bezier control point.
    pub offset: Vec2,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Store of connector curve adjustments.
///
/// Offsets are keyed by waypoint-pair identity rather than array position,
/// so inserting or removing a waypoint in the middle of the routine cannot
/// shift an adjustment onto the wrong connector. Positional order is
/// resolved against the waypoint sequence only at render time, via
/// [`ConnectorOffsets::resolve_positional`].
pub struct ConnectorOffsets {
    entries: Vec<ConnectorOffset>,
}

impl ConnectorOffsets {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offset for the given pair; unknown pairs read as zero.
    pub fn get(&self, from: WaypointId, to: WaypointId) -> Vec2 {
        self.entries
            .iter()
            .find(|e| e.from == from && e.to == to)
            .map(|e| e.offset)
            .unwrap_or(Vec2::ZERO)
    }

    /// Upsert the offset for a pair (drag adjustment of a control hotspot).
    pub fn set(&mut self, from: WaypointId, to: WaypointId, offset: Vec2) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.from == from && e.to == to)
        {
            Some(entry) => entry.offset = offset,
            None => self.entries.push(ConnectorOffset { from, to, offset }),
        }
    }

    /// Positional view of the offsets for a waypoint sequence.
    ///
    /// Index `i` holds the offset for the connector leaving waypoint `i`;
    /// length is `max(n - 1, 0)`. Pairs without a stored entry resolve to
    /// zero.
    pub fn resolve_positional(&self, waypoints: &[Waypoint]) -> Vec<Vec2> {
        waypoints
            .windows(2)
            .map(|pair| self.get(pair[0].id, pair[1].id))
            .collect()
    }

    /// Insert zero entries for adjacent pairs that have none yet.
    ///
    /// Mirrors the lazy backfill the editor performs whenever the waypoint
    /// count changes: existing adjustments are kept, new connectors start
    /// straight.
    pub fn backfill(&mut self, waypoints: &[Waypoint]) {
        for pair in waypoints.windows(2) {
            let (from, to) = (pair[0].id, pair[1].id);
            if !self.entries.iter().any(|e| e.from == from && e.to == to) {
                self.entries.push(ConnectorOffset {
                    from,
                    to,
                    offset: Vec2::ZERO,
                });
            }
        }
    }

    /// Drop entries whose pair is no longer adjacent in the sequence.
    pub fn prune(&mut self, waypoints: &[Waypoint]) {
        self.entries.retain(|e| {
            waypoints
                .windows(2)
                .any(|pair| pair[0].id == e.from && pair[1].id == e.to)
        });
    }

    /// Import a legacy positional offset array against a waypoint sequence.
    ///
    /// Older documents stored offsets as a bare array indexed by connector
    /// position; this re-keys them by the pair identities they currently
    /// line up with.
    pub fn from_positional(waypoints: &[Waypoint], offsets: &[Vec2]) -> Self {
        let entries = waypoints
            .windows(2)
            .enumerate()
            .map(|(i, pair)| ConnectorOffset {
                from: pair[0].id,
                to: pair[1].id,
                offset: offsets.get(i).copied().unwrap_or(Vec2::ZERO),
            })
            .collect();
        Self { entries }
    }

    /// Iterate over the stored entries.
    pub fn iter(&self) -> impl Iterator<Item = &ConnectorOffset> {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/routine/offsets.rs"]
mod tests;
