use kurbo::{ParamCurve, Point, QuadBez, Vec2};

/// Arithmetic midpoint of two floor positions.
pub fn midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Bezier control point for the connector between `a` and `b`.
///
/// The control point is the segment midpoint displaced by the user-adjusted
/// connector offset; a zero offset yields a straight-looking curve.
pub fn control_point(a: Point, b: Point, offset: Vec2) -> Point {
    midpoint(a, b) + offset
}

/// The curved connector between two waypoint positions as a quadratic Bezier.
pub fn connector(a: Point, b: Point, offset: Vec2) -> QuadBez {
    QuadBez::new(a, control_point(a, b, offset), b)
}

/// Evaluate the connector at parameter `t`, clamped to `[0, 1]`.
///
/// `t <= 0` returns exactly `a` and `t >= 1` returns exactly `b`; in between
/// the quadratic is monotone in the curve parameter, not in screen-space
/// speed.
pub fn point_at(a: Point, b: Point, offset: Vec2, t: f64) -> Point {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    connector(a, b, offset).eval(t)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
