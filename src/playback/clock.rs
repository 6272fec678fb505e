use crate::foundation::error::{ChorioError, ChorioResult};

/// External media element bound to a routine (audio or video track).
///
/// Implementations wrap whatever the host runtime exposes; the adapter only
/// ever talks to this interface. `begin` may be refused by the runtime, in
/// which case the adapter stays in its prior state.
pub trait MediaTransport {
    /// Seek the source to `at_sec` and begin playback.
    fn begin(&mut self, at_sec: f64) -> ChorioResult<()>;
    /// Halt playback, keeping the current position.
    fn halt(&mut self);
    /// Move the playhead without changing play state.
    fn set_position(&mut self, sec: f64);
    /// Current playhead position in seconds.
    fn position_sec(&self) -> f64;
    /// Whether the source is currently playing (it may stop on its own at
    /// end of media or from external controls).
    fn is_playing(&self) -> bool;
    /// Media duration in seconds, when known.
    fn duration_sec(&self) -> Option<f64>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Free-running clock used when no media source is configured.
pub struct SimulatedClock {
    /// Seconds advanced per tick.
    pub tick_sec: f64,
    /// Upper bound; the clock clamps here and pauses.
    pub duration_sec: f64,
}

impl SimulatedClock {
    /// Default advance per tick (0.1 s, one tick per 100 ms of wall time).
    pub const DEFAULT_TICK_SEC: f64 = 0.1;

    /// Build a validated simulated clock.
    pub fn new(duration_sec: f64, tick_sec: f64) -> ChorioResult<Self> {
        if !duration_sec.is_finite() || duration_sec < 0.0 {
            return Err(ChorioError::validation(
                "clock duration_sec must be finite and >= 0",
            ));
        }
        if !tick_sec.is_finite() || tick_sec <= 0.0 {
            return Err(ChorioError::validation(
                "clock tick_sec must be finite and > 0",
            ));
        }
        Ok(Self {
            tick_sec,
            duration_sec,
        })
    }
}

/// Authoritative time source, chosen once at adapter construction.
pub enum ClockSource {
    /// A bound media element drives time while playing.
    Media(Box<dyn MediaTransport>),
    /// Free-running counter bounded by the routine duration.
    Simulated(SimulatedClock),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Transport state of the playback clock.
pub enum TransportState {
    /// Not playing; time has been reset to zero.
    Stopped,
    /// Time is advancing on each tick.
    Playing,
    /// Not playing; time is preserved.
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Readable snapshot of the clock for transport-control UI.
pub struct ClockSnapshot {
    /// Current transport state.
    pub state: TransportState,
    /// Current time in seconds.
    pub current_sec: f64,
}

/// Bridges an external time source to the timeline resolver.
///
/// Drives the per-tick pipeline: the caller invokes [`PlaybackClock::tick`]
/// once per animation frame and feeds the returned time to
/// [`crate::resolve`] / [`crate::Routine::live_position`]. Outside
/// [`TransportState::Playing`] a tick is a no-op, so a tick callback that
/// outlives a `stop()` cannot advance time.
pub struct PlaybackClock {
    source: ClockSource,
    state: TransportState,
    current_sec: f64,
}

impl PlaybackClock {
    /// Clock over a simulated source bounded by `duration_sec`.
    pub fn simulated(duration_sec: f64, tick_sec: f64) -> ChorioResult<Self> {
        Ok(Self::new(ClockSource::Simulated(SimulatedClock::new(
            duration_sec,
            tick_sec,
        )?)))
    }

    /// Clock over a bound media source.
    pub fn media(transport: Box<dyn MediaTransport>) -> Self {
        Self::new(ClockSource::Media(transport))
    }

    /// Clock over an already-constructed source.
    pub fn new(source: ClockSource) -> Self {
        Self {
            source,
            state: TransportState::Stopped,
            current_sec: 0.0,
        }
    }

    /// Start at `start_sec` instead of zero (clamped like a seek).
    pub fn with_start_sec(mut self, start_sec: f64) -> Self {
        self.seek(start_sec);
        self
    }

    /// Current transport state.
    pub fn state(&self) -> TransportState {
        self.state
    }

    /// Current time in seconds.
    pub fn current_sec(&self) -> f64 {
        self.current_sec
    }

    /// Snapshot for transport-control UI.
    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            state: self.state,
            current_sec: self.current_sec,
        }
    }

    /// Upper time bound, when one is known.
    pub fn duration_sec(&self) -> Option<f64> {
        match &self.source {
            ClockSource::Media(m) => m.duration_sec(),
            ClockSource::Simulated(sim) => Some(sim.duration_sec),
        }
    }

    /// Begin playback from the current time.
    ///
    /// With a media source this seeks the source to the adapter's time and
    /// asks it to play; if the source refuses, the failure is logged and
    /// returned and the adapter keeps its prior state. No-op when already
    /// playing.
    #[tracing::instrument(skip(self))]
    pub fn play(&mut self) -> ChorioResult<()> {
        if self.state == TransportState::Playing {
            return Ok(());
        }
        if let ClockSource::Media(m) = &mut self.source
            && let Err(err) = m.begin(self.current_sec)
        {
            tracing::warn!(error = %err, "media source failed to start playback");
            return Err(ChorioError::playback(format!(
                "media source failed to start: {err}"
            )));
        }
        self.state = TransportState::Playing;
        Ok(())
    }

    /// Halt playback, preserving the current time.
    pub fn pause(&mut self) {
        if self.state != TransportState::Playing {
            return;
        }
        if let ClockSource::Media(m) = &mut self.source {
            m.halt();
        }
        self.state = TransportState::Paused;
    }

    /// Halt playback and reset time to zero.
    pub fn stop(&mut self) {
        if let ClockSource::Media(m) = &mut self.source {
            m.halt();
            m.set_position(0.0);
        }
        self.current_sec = 0.0;
        self.state = TransportState::Stopped;
    }

    /// Move the playhead to `sec`, clamped to `[0, duration]` when the bound
    /// is known. Play/pause state is unchanged; a bound media source is
    /// repositioned to match. Non-finite input is rejected here so the
    /// resolver never sees it.
    pub fn seek(&mut self, sec: f64) {
        if !sec.is_finite() {
            tracing::warn!(sec, "ignoring non-finite seek");
            return;
        }
        let mut target = sec.max(0.0);
        if let Some(duration) = self.duration_sec() {
            target = target.min(duration);
        }
        self.current_sec = target;
        if let ClockSource::Media(m) = &mut self.source {
            m.set_position(target);
        }
    }

    /// One animation-frame step; returns the time to feed the resolver.
    ///
    /// While playing against a media source, the source's position is read
    /// back and the adapter auto-pauses when the source reports it stopped
    /// (ended or paused externally). While playing simulated, time advances
    /// one tick and clamps exactly at the duration bound, pausing there.
    /// In any other state this returns the current time unchanged.
    pub fn tick(&mut self) -> f64 {
        if self.state != TransportState::Playing {
            return self.current_sec;
        }
        match &mut self.source {
            ClockSource::Media(m) => {
                if m.is_playing() {
                    let pos = m.position_sec();
                    // A source reporting NaN keeps the last known time.
                    if pos.is_finite() {
                        self.current_sec = pos.max(0.0);
                    }
                } else {
                    self.state = TransportState::Paused;
                }
            }
            ClockSource::Simulated(sim) => {
                let next = self.current_sec + sim.tick_sec;
                if next >= sim.duration_sec {
                    self.current_sec = sim.duration_sec;
                    self.state = TransportState::Paused;
                } else {
                    self.current_sec = next;
                }
            }
        }
        self.current_sec
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
