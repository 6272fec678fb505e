use crate::routine::model::Waypoint;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One waypoint's span on the timeline bar.
///
/// The hold span `[start_sec, hold_end_sec]` renders in the waypoint's own
/// color; the transition span `[hold_end_sec, end_sec]` renders in a darker
/// shade when a hold precedes it. Either span may be empty.
pub struct TimelineSegment {
    /// Index of the waypoint this segment belongs to.
    pub index: usize,
    /// Start of the hold span.
    pub start_sec: f64,
    /// End of the hold span / start of the transition span.
    pub hold_end_sec: f64,
    /// End of the transition span: the next waypoint's start time, or the
    /// routine duration for the last waypoint.
    pub end_sec: f64,
    /// Color of the hold span.
    pub color: String,
    /// Color of the transition span.
    pub transition_color: String,
}

/// Timeline-bar layout for a waypoint sequence.
///
/// `duration_sec` caps the last waypoint's segment. Waypoints must be sorted
/// ascending by start time.
pub fn timeline_segments(waypoints: &[Waypoint], duration_sec: f64) -> Vec<TimelineSegment> {
    waypoints
        .iter()
        .enumerate()
        .map(|(index, w)| {
            let end_sec = waypoints
                .get(index + 1)
                .map(|n| n.start_sec)
                .unwrap_or(duration_sec);
            let transition_color = if w.wait_sec > 0.0 {
                shade_hex_color(&w.color, 0.7)
            } else {
                w.color.clone()
            };
            TimelineSegment {
                index,
                start_sec: w.start_sec,
                hold_end_sec: w.hold_end_sec(),
                end_sec,
                color: w.color.clone(),
                transition_color,
            }
        })
        .collect()
}

/// Multiply each channel of a `#rrggbb` color by `factor`, clamped to
/// `[0, 255]`. Anything that does not parse as a 6-digit hex color passes
/// through unchanged.
pub fn shade_hex_color(color: &str, factor: f64) -> String {
    let Some(hex) = color.strip_prefix('#') else {
        return color.to_string();
    };
    // length check alone is not enough: slicing below assumes single-byte chars
    if hex.len() != 6 || !hex.is_ascii() {
        return color.to_string();
    }
    let Ok(r) = u8::from_str_radix(&hex[0..2], 16) else {
        return color.to_string();
    };
    let Ok(g) = u8::from_str_radix(&hex[2..4], 16) else {
        return color.to_string();
    };
    let Ok(b) = u8::from_str_radix(&hex[4..6], 16) else {
        return color.to_string();
    };

    let scale = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", scale(r), scale(g), scale(b))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segments.rs"]
mod tests;
