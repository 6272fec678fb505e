use kurbo::Point;

use crate::{
    foundation::core::{StageDims, WaypointId},
    foundation::error::{ChorioError, ChorioResult},
    routine::offsets::ConnectorOffsets,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A named floor position in time.
///
/// The dancer arrives at `position` at `start_sec`, holds it for `wait_sec`,
/// then transitions along the connector curve toward the next waypoint.
pub struct Waypoint {
    /// Stable identity within the routine.
    pub id: WaypointId,
    /// Display label. Not required to be unique; only start times are.
    pub name: String,
    /// Arrival time in seconds; defines ordering within the routine.
    pub start_sec: f64,
    /// Seconds the position is held before the transition begins.
    #[serde(default)]
    pub wait_sec: f64,
    /// Floor coordinate inside the stage bounds.
    pub position: Point,
    /// Display color, opaque to the engine.
    #[serde(default)]
    pub color: String,
    /// Free-form notes, opaque to the engine.
    #[serde(default)]
    pub description: String,
    /// Requirement tags this waypoint fulfills, opaque to the engine.
    #[serde(default)]
    pub requirements_filled: Vec<String>,
}

impl Waypoint {
    /// Time at which the hold ends and the transition window opens.
    pub fn hold_end_sec(&self) -> f64 {
        self.start_sec + self.wait_sec
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A complete choreography routine document.
///
/// A routine is a pure data model: serialized/deserialized via Serde (JSON),
/// edited through [`crate::validate_and_insert`] /
/// [`Routine::upsert_waypoint`], and sampled through
/// [`Routine::live_position`]. The engine holds no state of its own beyond
/// the playback clock.
pub struct Routine {
    /// Stage (floor) dimensions.
    pub stage: StageDims,
    /// Waypoints sorted strictly ascending by `start_sec`.
    pub waypoints: Vec<Waypoint>,
    /// Curve adjustments keyed by adjacent waypoint pair.
    #[serde(default)]
    pub offsets: ConnectorOffsets,
    /// Optional reference to a bound media source (audio/video track).
    #[serde(default)]
    pub media_source: Option<String>,
    /// Routine duration in seconds; bounds the simulated playback clock when
    /// no media source is configured.
    #[serde(default)]
    pub duration_sec: f64,
}

impl Routine {
    /// Validate the document invariants.
    ///
    /// Checked here at the document boundary so that the resolver and
    /// geometry paths can stay total: stage dims positive, times finite and
    /// non-negative, positions finite and on stage, waypoints strictly
    /// ascending by start time, ids unique.
    pub fn validate(&self) -> ChorioResult<()> {
        self.stage.validate()?;
        if !self.duration_sec.is_finite() || self.duration_sec < 0.0 {
            return Err(ChorioError::validation(
                "duration_sec must be finite and >= 0",
            ));
        }

        for w in &self.waypoints {
            if !w.start_sec.is_finite() || w.start_sec < 0.0 {
                return Err(ChorioError::validation(format!(
                    "waypoint '{}' start_sec must be finite and >= 0",
                    w.name
                )));
            }
            if !w.wait_sec.is_finite() || w.wait_sec < 0.0 {
                return Err(ChorioError::validation(format!(
                    "waypoint '{}' wait_sec must be finite and >= 0",
                    w.name
                )));
            }
            if !w.position.x.is_finite() || !w.position.y.is_finite() {
                return Err(ChorioError::validation(format!(
                    "waypoint '{}' position must be finite",
                    w.name
                )));
            }
            if !self.stage.contains(w.position) {
                return Err(ChorioError::validation(format!(
                    "waypoint '{}' position is outside the stage bounds",
                    w.name
                )));
            }
        }

        for pair in self.waypoints.windows(2) {
            if pair[0].start_sec > pair[1].start_sec {
                return Err(ChorioError::validation(format!(
                    "waypoints must be sorted ascending by start_sec ('{}' after '{}')",
                    pair[1].name, pair[0].name
                )));
            }
            if pair[0].start_sec == pair[1].start_sec {
                return Err(ChorioError::validation(format!(
                    "waypoints '{}' and '{}' share start time {}",
                    pair[0].name, pair[1].name, pair[0].start_sec
                )));
            }
        }

        let mut ids: Vec<WaypointId> = self.waypoints.iter().map(|w| w.id).collect();
        ids.sort_unstable();
        if ids.windows(2).any(|p| p[0] == p[1]) {
            return Err(ChorioError::validation("waypoint ids must be unique"));
        }

        for entry in self.offsets.iter() {
            if ids.binary_search(&entry.from).is_err() || ids.binary_search(&entry.to).is_err() {
                return Err(ChorioError::validation(format!(
                    "offset entry references unknown waypoint id ({} -> {})",
                    entry.from.0, entry.to.0
                )));
            }
        }

        Ok(())
    }

    /// Index of the waypoint with the given id, if present.
    pub fn index_of(&self, id: WaypointId) -> Option<usize> {
        self.waypoints.iter().position(|w| w.id == id)
    }

    /// Fresh id for a new waypoint (one past the largest in use).
    pub fn next_id(&self) -> WaypointId {
        WaypointId(
            self.waypoints
                .iter()
                .map(|w| w.id.0 + 1)
                .max()
                .unwrap_or(0),
        )
    }

    /// Parse a routine document from JSON and validate it.
    pub fn from_json(json: &str) -> ChorioResult<Self> {
        let routine: Self =
            serde_json::from_str(json).map_err(|e| ChorioError::serde(e.to_string()))?;
        routine.validate()?;
        Ok(routine)
    }

    /// Serialize the routine document to pretty JSON.
    pub fn to_json(&self) -> ChorioResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChorioError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/routine/model.rs"]
mod tests;
