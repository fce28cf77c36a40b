use std::ops::Range;

use super::{Ease, Style};

/// A run of elements matching a class selector, addressed by their position in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    selector: String,
    indices: Range<usize>,
}

impl Target {
    pub fn one(selector: impl Into<String>) -> Self {
        Self::many(selector, 1)
    }

    pub fn many(selector: impl Into<String>, count: usize) -> Self {
        Self {
            selector: selector.into(),
            indices: 0..count,
        }
    }

    /// The `index`-th element matching `selector`.
    pub fn nth(selector: impl Into<String>, index: usize) -> Self {
        Self {
            selector: selector.into(),
            indices: index..index + 1,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn indices(&self) -> Range<usize> {
        self.indices.clone()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn overlaps(&self, other: &Target) -> bool {
        self.selector == other.selector
            && self.indices.start < other.indices.end
            && other.indices.start < self.indices.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    /// Plays `1 + n` times in total.
    Count(u32),
    Forever,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum StaggerFrom {
    #[default]
    Start,
    End,
    Center,
    /// Explicit rank per element; the element at position `i` starts `order[i]` steps in.
    Order(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stagger {
    pub each: f64,
    pub from: StaggerFrom,
}

impl Stagger {
    pub fn each(each: f64) -> Self {
        Self {
            each,
            from: StaggerFrom::Start,
        }
    }

    pub fn from(mut self, from: StaggerFrom) -> Self {
        self.from = from;
        self
    }

    /// Start offset of every element of a group of `count`.
    pub fn offsets(&self, count: usize) -> Vec<f64> {
        let last = count.saturating_sub(1) as f64;
        (0..count)
            .map(|i| {
                let steps = match &self.from {
                    StaggerFrom::Start => i as f64,
                    StaggerFrom::End => last - i as f64,
                    StaggerFrom::Center => (i as f64 - last / 2.0).abs(),
                    StaggerFrom::Order(order) => order.get(i).copied().unwrap_or(i) as f64,
                };
                steps * self.each
            })
            .collect()
    }
}

/// One property animation over a [`Target`].
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: Target,
    pub from: Option<Style>,
    pub to: Style,
    pub duration: f64,
    pub ease: Ease,
    pub delay: f64,
    pub stagger: Option<Stagger>,
    pub repeat: Repeat,
    pub yoyo: bool,
}

impl Tween {
    pub fn to(target: Target, to: Style, duration: f64) -> Self {
        Self {
            target,
            from: None,
            to,
            duration: duration.max(0.0),
            ease: Ease::default(),
            delay: 0.0,
            stagger: None,
            repeat: Repeat::Once,
            yoyo: false,
        }
    }

    pub fn from_to(target: Target, from: Style, to: Style, duration: f64) -> Self {
        Self {
            from: Some(from),
            ..Self::to(target, to, duration)
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    fn offsets(&self) -> Vec<f64> {
        match &self.stagger {
            Some(stagger) => stagger.offsets(self.target.len()),
            None => vec![0.0; self.target.len()],
        }
    }

    fn play_length(&self) -> f64 {
        match self.repeat {
            Repeat::Once => self.duration,
            Repeat::Count(n) => self.duration * (f64::from(n) + 1.0),
            Repeat::Forever => f64::INFINITY,
        }
    }

    /// Time from the tween's start until its last element settles.
    pub fn total_duration(&self) -> f64 {
        let spread = self.offsets().into_iter().fold(0.0, f64::max);
        self.delay + spread + self.play_length()
    }

    /// Eased progress of the element at `position` (0-based within the target) at
    /// `time` seconds after the tween's start.
    pub fn progress(&self, position: usize, time: f64) -> f64 {
        let offset = self.offsets().get(position).copied().unwrap_or(0.0);
        let t = time - self.delay - offset;
        if t < 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return self.ease.apply(1.0);
        }
        let last_iteration = match self.repeat {
            Repeat::Once => Some(0),
            Repeat::Count(n) => Some(n),
            Repeat::Forever => None,
        };
        let (iteration, fraction) = match last_iteration {
            Some(last) if t >= self.play_length() => (last, 1.0),
            _ => {
                let iteration = (t / self.duration).floor();
                (iteration as u32, (t - iteration * self.duration) / self.duration)
            }
        };
        let fraction = if self.yoyo && iteration % 2 == 1 {
            1.0 - fraction
        } else {
            fraction
        };
        self.ease.apply(fraction)
    }
}
