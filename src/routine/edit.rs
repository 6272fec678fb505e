use crate::{
    foundation::core::WaypointId,
    foundation::error::{ChorioError, ChorioResult},
    routine::model::{Routine, Waypoint},
};

/// Find an existing waypoint occupying `start_sec`.
///
/// `editing` excludes the index being updated in place, so re-saving a
/// waypoint at its own start time is not a conflict. Start times compare by
/// exact equality; near-misses are distinct waypoints.
pub fn find_conflict(
    waypoints: &[Waypoint],
    start_sec: f64,
    editing: Option<usize>,
) -> Option<&Waypoint> {
    waypoints
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != editing)
        .map(|(_, w)| w)
        .find(|w| w.start_sec == start_sec)
}

/// Insert or replace a waypoint, preserving the ordering invariants.
///
/// Fails with [`ChorioError::Conflict`] (naming the existing waypoint) when
/// another waypoint already occupies the candidate's start time, leaving the
/// input untouched. On success returns a new list, re-sorted ascending by
/// start time; the stable sort keeps insertion order among equal keys, though
/// the conflict check makes equal keys unreachable through this path.
pub fn validate_and_insert(
    waypoints: &[Waypoint],
    candidate: Waypoint,
    editing: Option<usize>,
) -> ChorioResult<Vec<Waypoint>> {
    if let Some(existing) = find_conflict(waypoints, candidate.start_sec, editing) {
        return Err(ChorioError::conflict(existing.name.clone()));
    }

    let mut next: Vec<Waypoint> = waypoints.to_vec();
    match editing {
        Some(i) if i < next.len() => next[i] = candidate,
        _ => next.push(candidate),
    }
    next.sort_by(|a, b| a.start_sec.total_cmp(&b.start_sec));
    Ok(next)
}

impl Routine {
    /// Insert or update a waypoint, returning a new routine snapshot.
    ///
    /// `editing` is the index of the waypoint being edited in place, if any.
    /// The offset store is backfilled and pruned against the new adjacency,
    /// so curve adjustments follow their waypoint pairs across the re-sort.
    #[tracing::instrument(skip(self, candidate), fields(name = %candidate.name))]
    pub fn upsert_waypoint(
        &self,
        candidate: Waypoint,
        editing: Option<usize>,
    ) -> ChorioResult<Routine> {
        let waypoints = validate_and_insert(&self.waypoints, candidate, editing)?;
        let mut offsets = self.offsets.clone();
        offsets.prune(&waypoints);
        offsets.backfill(&waypoints);
        Ok(Routine {
            waypoints,
            offsets,
            ..self.clone()
        })
    }

    /// Remove a waypoint by id, returning a new routine snapshot.
    pub fn remove_waypoint(&self, id: WaypointId) -> ChorioResult<Routine> {
        let Some(index) = self.index_of(id) else {
            return Err(ChorioError::validation(format!(
                "no waypoint with id {}",
                id.0
            )));
        };
        let mut waypoints = self.waypoints.clone();
        waypoints.remove(index);
        let mut offsets = self.offsets.clone();
        offsets.prune(&waypoints);
        offsets.backfill(&waypoints);
        Ok(Routine {
            waypoints,
            offsets,
            ..self.clone()
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Editor selection state.
///
/// Which waypoint is being edited is explicit state passed to whoever needs
/// it, not an ambient variable.
pub enum Selection {
    /// No waypoint is being edited.
    #[default]
    Viewing,
    /// The waypoint with this id is open in the editor.
    Editing(WaypointId),
}

impl Selection {
    /// Enter editing mode for a waypoint.
    pub fn begin_edit(&mut self, id: WaypointId) {
        *self = Self::Editing(id);
    }

    /// Return to viewing mode.
    pub fn clear(&mut self) {
        *self = Self::Viewing;
    }

    /// Id of the waypoint being edited, if any.
    pub fn editing_id(self) -> Option<WaypointId> {
        match self {
            Self::Viewing => None,
            Self::Editing(id) => Some(id),
        }
    }

    /// Whether the given waypoint is the one being edited.
    pub fn is_editing(self, id: WaypointId) -> bool {
        self == Self::Editing(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/routine/edit.rs"]
mod tests;
