use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[derive(Clone, Debug, Default)]
struct FakeMediaState {
    position_sec: f64,
    playing: bool,
    duration_sec: Option<f64>,
    refuse_begin: bool,
    begin_calls: u32,
}

#[derive(Clone, Default)]
struct FakeMedia(Rc<RefCell<FakeMediaState>>);

impl FakeMedia {
    fn with_duration(duration_sec: f64) -> Self {
        let media = Self::default();
        media.0.borrow_mut().duration_sec = Some(duration_sec);
        media
    }
}

impl MediaTransport for FakeMedia {
    fn begin(&mut self, at_sec: f64) -> ChorioResult<()> {
        let mut state = self.0.borrow_mut();
        state.begin_calls += 1;
        if state.refuse_begin {
            return Err(ChorioError::playback("autoplay rejected"));
        }
        state.position_sec = at_sec;
        state.playing = true;
        Ok(())
    }

    fn halt(&mut self) {
        self.0.borrow_mut().playing = false;
    }

    fn set_position(&mut self, sec: f64) {
        self.0.borrow_mut().position_sec = sec;
    }

    fn position_sec(&self) -> f64 {
        self.0.borrow().position_sec
    }

    fn is_playing(&self) -> bool {
        self.0.borrow().playing
    }

    fn duration_sec(&self) -> Option<f64> {
        self.0.borrow().duration_sec
    }
}

#[test]
fn starts_stopped_at_zero() {
    let clock = PlaybackClock::simulated(30.0, 0.1).unwrap();
    let snap = clock.snapshot();
    assert_eq!(snap.state, TransportState::Stopped);
    assert_eq!(snap.current_sec, 0.0);
}

#[test]
fn simulated_clock_advances_fixed_ticks() {
    let mut clock = PlaybackClock::simulated(30.0, 0.1).unwrap();
    clock.play().unwrap();
    assert_eq!(clock.state(), TransportState::Playing);
    let t1 = clock.tick();
    let t2 = clock.tick();
    assert!(t2 > t1);
    assert!((t2 - t1 - 0.1).abs() < 1e-9);
}

#[test]
fn simulated_clock_clamps_exactly_at_the_bound_and_pauses() {
    let mut clock = PlaybackClock::simulated(30.0, 0.1).unwrap();
    clock.seek(29.95);
    clock.play().unwrap();
    let t = clock.tick();
    assert_eq!(t, 30.0);
    assert_eq!(clock.state(), TransportState::Paused);
    // further ticks never exceed the bound
    for _ in 0..5 {
        assert_eq!(clock.tick(), 30.0);
    }
}

#[test]
fn tick_is_a_noop_outside_playing() {
    let mut clock = PlaybackClock::simulated(30.0, 0.1).unwrap();
    clock.seek(12.0);
    assert_eq!(clock.tick(), 12.0);
    assert_eq!(clock.tick(), 12.0);
    assert_eq!(clock.state(), TransportState::Stopped);
}

#[test]
fn pause_preserves_time_stop_resets_it() {
    let mut clock = PlaybackClock::simulated(30.0, 0.5).unwrap();
    clock.play().unwrap();
    clock.tick();
    clock.tick();
    clock.pause();
    assert_eq!(clock.state(), TransportState::Paused);
    assert_eq!(clock.current_sec(), 1.0);

    clock.stop();
    assert_eq!(clock.state(), TransportState::Stopped);
    assert_eq!(clock.current_sec(), 0.0);
}

#[test]
fn seek_clamps_to_the_known_bound() {
    let mut clock = PlaybackClock::simulated(30.0, 0.1).unwrap();
    clock.seek(45.0);
    assert_eq!(clock.current_sec(), 30.0);
    clock.seek(-3.0);
    assert_eq!(clock.current_sec(), 0.0);
    // state is unchanged by seeking
    assert_eq!(clock.state(), TransportState::Stopped);
}

#[test]
fn seek_ignores_non_finite_input() {
    init_tracing();
    let mut clock = PlaybackClock::simulated(30.0, 0.1).unwrap();
    clock.seek(10.0);
    clock.seek(f64::NAN);
    assert_eq!(clock.current_sec(), 10.0);
    clock.seek(f64::INFINITY);
    assert_eq!(clock.current_sec(), 10.0);
}

#[test]
fn play_is_a_noop_while_playing() {
    let media = FakeMedia::with_duration(60.0);
    let handle = media.clone();
    let mut clock = PlaybackClock::media(Box::new(media));
    clock.play().unwrap();
    clock.play().unwrap();
    assert_eq!(handle.0.borrow().begin_calls, 1);
}

#[test]
fn media_play_begins_at_the_adapter_time() {
    let media = FakeMedia::with_duration(60.0);
    let handle = media.clone();
    let mut clock = PlaybackClock::media(Box::new(media)).with_start_sec(12.5);
    clock.play().unwrap();
    assert_eq!(handle.0.borrow().position_sec, 12.5);
    assert_eq!(clock.state(), TransportState::Playing);
}

#[test]
fn media_tick_reads_back_the_source_position() {
    let media = FakeMedia::with_duration(60.0);
    let handle = media.clone();
    let mut clock = PlaybackClock::media(Box::new(media));
    clock.play().unwrap();
    handle.0.borrow_mut().position_sec = 4.25;
    assert_eq!(clock.tick(), 4.25);
}

#[test]
fn media_tick_auto_pauses_when_the_source_stops() {
    let media = FakeMedia::with_duration(60.0);
    let handle = media.clone();
    let mut clock = PlaybackClock::media(Box::new(media));
    clock.play().unwrap();
    handle.0.borrow_mut().position_sec = 7.0;
    clock.tick();
    handle.0.borrow_mut().playing = false; // ended externally
    clock.tick();
    assert_eq!(clock.state(), TransportState::Paused);
    assert_eq!(clock.current_sec(), 7.0);
}

#[test]
fn refused_media_start_keeps_the_prior_state() {
    init_tracing();
    let media = FakeMedia::with_duration(60.0);
    media.0.borrow_mut().refuse_begin = true;
    let mut clock = PlaybackClock::media(Box::new(media)).with_start_sec(5.0);

    let err = clock.play().unwrap_err();
    assert!(matches!(err, ChorioError::Playback(_)));
    assert_eq!(clock.state(), TransportState::Stopped);
    assert_eq!(clock.current_sec(), 5.0);
}

#[test]
fn non_finite_media_position_keeps_the_last_known_time() {
    let media = FakeMedia::with_duration(60.0);
    let handle = media.clone();
    let mut clock = PlaybackClock::media(Box::new(media)).with_start_sec(3.0);
    clock.play().unwrap();
    handle.0.borrow_mut().position_sec = f64::NAN;
    assert_eq!(clock.tick(), 3.0);
}

#[test]
fn simulated_clock_rejects_bad_configuration() {
    assert!(SimulatedClock::new(-1.0, 0.1).is_err());
    assert!(SimulatedClock::new(30.0, 0.0).is_err());
    assert!(SimulatedClock::new(30.0, f64::NAN).is_err());
    assert!(SimulatedClock::new(f64::INFINITY, 0.1).is_err());
}
