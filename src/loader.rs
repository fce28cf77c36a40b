/// Milliseconds between fake progress increments.
pub const TICK_MS: u64 = 100;
/// Largest increment a single tick can add, in percent.
pub const MAX_STEP: f64 = 15.0;
/// Pause between reaching 100% and fading the preloader out.
pub const FADE_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadStep {
    Progress(f64),
    /// Emitted by the single tick that reaches 100%.
    Finished,
    /// Ticks after completion change nothing.
    Idle,
}

/// Simulated loading progress, 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadProgress {
    value: f64,
    finished: bool,
}

impl LoadProgress {
    /// Turns a uniform sample in `[0, 1)` into an increment.
    pub fn step_from_unit(unit: f64) -> f64 {
        unit.clamp(0.0, 1.0) * MAX_STEP
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn label(&self) -> String {
        format!("{}%", self.value.round() as u32)
    }

    pub fn advance(&mut self, step: f64) -> LoadStep {
        if self.finished {
            return LoadStep::Idle;
        }
        self.value = (self.value + step.max(0.0)).min(100.0);
        if self.value >= 100.0 {
            self.finished = true;
            LoadStep::Finished
        } else {
            LoadStep::Progress(self.value)
        }
    }
}
