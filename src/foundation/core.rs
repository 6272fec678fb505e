use crate::foundation::error::{ChorioError, ChorioResult};

pub use kurbo::{Point, Vec2};

/// Stable per-routine waypoint identity.
///
/// Ids survive re-sorting and structural edits, which is what lets the
/// connector-offset store key curve adjustments by waypoint pair instead of
/// by array position.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct WaypointId(pub u64);

/// Stage (dance floor) dimensions in floor units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageDims {
    /// Stage width; positions span `[0, width]`.
    pub width: f64,
    /// Stage height; positions span `[0, height]`.
    pub height: f64,
}

impl StageDims {
    /// Build validated stage dimensions.
    pub fn new(width: f64, height: f64) -> ChorioResult<Self> {
        let dims = Self { width, height };
        dims.validate()?;
        Ok(dims)
    }

    /// Check that both dimensions are finite and positive.
    pub fn validate(self) -> ChorioResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChorioError::validation("stage width must be finite and > 0"));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ChorioError::validation(
                "stage height must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Whether a point lies inside the stage bounds (inclusive).
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Clamp a point into the stage bounds.
    ///
    /// This is the drag bound for waypoint markers: a position dragged past
    /// an edge sticks to that edge.
    pub fn clamp(self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
