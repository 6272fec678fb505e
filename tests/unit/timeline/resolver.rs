use super::*;
use crate::foundation::core::WaypointId;
use kurbo::Point;

fn wp(id: u64, name: &str, start_sec: f64, wait_sec: f64) -> Waypoint {
    Waypoint {
        id: WaypointId(id),
        name: name.to_string(),
        start_sec,
        wait_sec,
        position: Point::new(0.0, 0.0),
        color: String::new(),
        description: String::new(),
        requirements_filled: vec![],
    }
}

#[test]
fn empty_sequence_has_no_segment() {
    assert_eq!(resolve(&[], 0.0), None);
    assert_eq!(resolve(&[], 100.0), None);
}

#[test]
fn time_before_first_start_holds_the_first_waypoint() {
    let wps = [wp(0, "A", 5.0, 0.0), wp(1, "B", 10.0, 0.0)];
    let seg = resolve(&wps, 1.0).unwrap();
    assert_eq!(seg.current, 0);
    assert_eq!(seg.phase, Phase::Hold);
    assert_eq!(seg.fraction, 0.0);
}

#[test]
fn hold_phase_covers_the_wait_interval() {
    let wps = [wp(0, "A", 0.0, 4.0), wp(1, "B", 10.0, 0.0)];
    for t in [0.0, 2.0, 4.0] {
        let seg = resolve(&wps, t).unwrap();
        assert_eq!(seg.current, 0);
        assert_eq!(seg.phase, Phase::Hold, "t={t}");
        assert_eq!(seg.fraction, 0.0);
    }
}

#[test]
fn transition_fraction_spans_hold_end_to_next_start() {
    // hold ends at 4, next starts at 10: span 6
    let wps = [wp(0, "A", 0.0, 4.0), wp(1, "B", 10.0, 0.0)];
    let seg = resolve(&wps, 7.0).unwrap();
    assert_eq!(seg.current, 0);
    assert_eq!(seg.next, Some(1));
    assert_eq!(seg.phase, Phase::Transition);
    assert_eq!(seg.fraction, 0.5);
}

#[test]
fn fraction_is_non_decreasing_and_clamped() {
    let wps = [wp(0, "A", 0.0, 2.0), wp(1, "B", 12.0, 0.0)];
    let mut last = 0.0;
    let mut t = 2.01;
    while t < 12.0 {
        let seg = resolve(&wps, t).unwrap();
        assert_eq!(seg.phase, Phase::Transition);
        assert!(seg.fraction >= last, "fraction regressed at t={t}");
        assert!((0.0..=1.0).contains(&seg.fraction));
        last = seg.fraction;
        t += 0.37;
    }
}

#[test]
fn last_waypoint_is_terminal_after_its_hold() {
    let wps = [wp(0, "A", 0.0, 0.0), wp(1, "B", 10.0, 2.0)];
    let seg = resolve(&wps, 13.0).unwrap();
    assert_eq!(seg.current, 1);
    assert_eq!(seg.next, None);
    assert_eq!(seg.phase, Phase::Terminal);
}

#[test]
fn single_waypoint_is_hold_then_terminal() {
    let wps = [wp(0, "only", 3.0, 1.0)];
    assert_eq!(resolve(&wps, 3.5).unwrap().phase, Phase::Hold);
    assert_eq!(resolve(&wps, 4.5).unwrap().phase, Phase::Terminal);
}

#[test]
fn zero_length_transition_window_skips_to_the_next_waypoint() {
    // hold ends exactly where the next waypoint starts: no partial-fraction
    // window opens between them
    let wps = [wp(0, "A", 0.0, 10.0), wp(1, "B", 10.0, 0.0)];
    let before = resolve(&wps, 9.999).unwrap();
    assert_eq!((before.current, before.phase), (0, Phase::Hold));
    let after = resolve(&wps, 10.000001).unwrap();
    assert_eq!(after.current, 1);
    assert_eq!(after.phase, Phase::Terminal);
    assert_eq!(after.fraction, 0.0);
}

#[test]
fn duplicate_start_times_resolve_to_the_last_of_the_run() {
    // validator-prevented state; resolver must still pick deterministically
    let wps = [
        wp(0, "A", 5.0, 0.0),
        wp(1, "B", 5.0, 0.0),
        wp(2, "C", 20.0, 0.0),
    ];
    let seg = resolve(&wps, 5.0).unwrap();
    assert_eq!(seg.current, 1);
}

#[test]
fn exact_start_time_selects_that_waypoint() {
    let wps = [wp(0, "A", 0.0, 0.0), wp(1, "B", 10.0, 1.0)];
    let seg = resolve(&wps, 10.0).unwrap();
    assert_eq!(seg.current, 1);
    assert_eq!(seg.phase, Phase::Hold);
}
