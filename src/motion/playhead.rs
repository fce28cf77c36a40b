use super::ToggleAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayheadEvent {
    /// Reached the end while playing forwards.
    Completed,
    /// Reached the start while playing backwards.
    ReverseCompleted,
}

/// Playback position over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Playhead {
    time: f64,
    duration: f64,
    reversed: bool,
    paused: bool,
}

impl Playhead {
    /// A playhead that starts moving on the first `advance`.
    pub fn new(duration: f64) -> Self {
        Self {
            time: 0.0,
            duration: duration.max(0.0),
            reversed: false,
            paused: false,
        }
    }

    /// A playhead parked at the start until told otherwise.
    pub fn paused(duration: f64) -> Self {
        Self {
            paused: true,
            ..Self::new(duration)
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_active(&self) -> bool {
        !self.paused
    }

    pub fn play(&mut self) {
        self.reversed = false;
        self.paused = false;
    }

    pub fn reverse(&mut self) {
        self.reversed = true;
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn restart(&mut self) {
        self.time = 0.0;
        self.reversed = false;
        self.paused = false;
    }

    /// Back to the start, paused.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.reversed = false;
        self.paused = true;
    }

    /// Jump to the end, paused.
    pub fn complete(&mut self) {
        if self.duration.is_finite() {
            self.time = self.duration;
        }
        self.paused = true;
    }

    pub fn apply(&mut self, action: ToggleAction) {
        match action {
            ToggleAction::Play => self.play(),
            ToggleAction::Pause => self.pause(),
            ToggleAction::Resume => self.resume(),
            ToggleAction::Reverse => self.reverse(),
            ToggleAction::Restart => self.restart(),
            ToggleAction::Reset => self.reset(),
            ToggleAction::Complete => self.complete(),
            ToggleAction::None => {}
        }
    }

    /// Moves by `dt` seconds in the current direction. An event is returned only on the
    /// tick that actually arrives at an end.
    pub fn advance(&mut self, dt: f64) -> Option<PlayheadEvent> {
        if self.paused || dt <= 0.0 {
            return None;
        }
        let before = self.time;
        if self.reversed {
            self.time = (self.time - dt).max(0.0);
            if self.time <= 0.0 {
                self.paused = true;
                return (before > 0.0).then_some(PlayheadEvent::ReverseCompleted);
            }
        } else {
            self.time += dt;
            if self.time >= self.duration {
                self.time = self.duration;
                self.paused = true;
                let arrived = before < self.duration || self.duration == 0.0;
                return arrived.then_some(PlayheadEvent::Completed);
            }
        }
        None
    }
}
