use std::str::FromStr;

use super::{ParseError, Style, Target, Tween};

/// Where a tween is placed on a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// Right after everything added so far.
    #[default]
    End,
    /// Relative to the current end: `"-=0.5"` overlaps, `"+=0.2"` leaves a gap.
    Relative(f64),
    /// Absolute seconds from the timeline start.
    At(f64),
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseError::Position(s.to_string());
        if s.is_empty() || s == ">" {
            return Ok(Position::End);
        }
        if let Some(rest) = s.strip_prefix("-=") {
            let v = rest.trim().parse::<f64>().map_err(|_| err())?;
            return Ok(Position::Relative(-v));
        }
        if let Some(rest) = s.strip_prefix("+=") {
            let v = rest.trim().parse::<f64>().map_err(|_| err())?;
            return Ok(Position::Relative(v));
        }
        match s.parse::<f64>() {
            Ok(v) if v >= 0.0 => Ok(Position::At(v)),
            _ => Err(err()),
        }
    }
}

/// The computed style of one element at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub selector: String,
    pub index: usize,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    start: f64,
    tween: Tween,
}

/// A sequence of tweens laid out in time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    delay: f64,
    sets: Vec<(Target, Style)>,
    entries: Vec<Entry>,
    end: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Styles applied instantly at time zero, before any tween runs.
    pub fn set(mut self, target: Target, style: Style) -> Self {
        self.sets.push((target, style));
        self
    }

    pub fn to(self, tween: Tween) -> Self {
        self.add(tween, Position::End)
    }

    pub fn add(mut self, tween: Tween, position: Position) -> Self {
        let start = match position {
            Position::End => self.end,
            Position::Relative(offset) => (self.end + offset).max(0.0),
            Position::At(at) => at,
        };
        self.end = self.end.max(start + tween.total_duration());
        self.entries.push(Entry { start, tween });
        self
    }

    /// Start time of the `n`-th added tween, delay excluded.
    pub fn start_of(&self, n: usize) -> Option<f64> {
        self.entries.get(n).map(|e| e.start)
    }

    pub fn duration(&self) -> f64 {
        self.delay + self.end
    }

    /// Every selector this timeline writes to.
    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.sets
            .iter()
            .map(|(t, _)| t)
            .chain(self.entries.iter().map(|e| &e.tween.target))
    }

    /// Styles of every touched element at `time`. Tweens on the same element fold in
    /// insertion order, each starting from what the previous ones left behind.
    pub fn sample(&self, time: f64) -> Vec<Frame> {
        let local = time - self.delay;
        let mut frames: Vec<Frame> = Vec::new();
        for (target, style) in &self.sets {
            for index in target.indices() {
                let i = frame_slot(&mut frames, target.selector(), index);
                frames[i].style = frames[i].style.overlay(style);
            }
        }

        for Entry { start, tween } in &self.entries {
            let target = &tween.target;
            for (position, index) in target.indices().enumerate() {
                let i = frame_slot(&mut frames, target.selector(), index);
                let current = frames[i].style;
                let from = match &tween.from {
                    Some(from) => current.overlay(from),
                    None => current,
                };
                let progress = tween.progress(position, local - start);
                frames[i].style = from.interpolate(&tween.to, progress);
            }
        }

        frames
    }
}

/// Index of the frame for `selector[index]`, created empty on first use.
fn frame_slot(frames: &mut Vec<Frame>, selector: &str, index: usize) -> usize {
    match frames
        .iter()
        .position(|f| f.index == index && f.selector == selector)
    {
        Some(i) => i,
        None => {
            frames.push(Frame {
                selector: selector.to_string(),
                index,
                style: Style::default(),
            });
            frames.len() - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Ease, Repeat, Stagger};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn style_of<'a>(frames: &'a [Frame], selector: &str, index: usize) -> &'a Style {
        &frames
            .iter()
            .find(|f| f.selector == selector && f.index == index)
            .expect("frame should exist")
            .style
    }

    #[test]
    fn test_parse_positions() {
        assert_eq!("-=0.5".parse(), Ok(Position::Relative(-0.5)));
        assert_eq!("+=0.2".parse(), Ok(Position::Relative(0.2)));
        assert_eq!("1.5".parse(), Ok(Position::At(1.5)));
        assert_eq!("".parse(), Ok(Position::End));
        assert!(matches!(
            "-=abc".parse::<Position>(),
            Err(ParseError::Position(_))
        ));
        assert!(matches!(
            "-1".parse::<Position>(),
            Err(ParseError::Position(_))
        ));
    }

    #[test]
    fn test_layout_with_overlaps() {
        let tl = Timeline::new()
            .delay(0.5)
            .to(Tween::to(Target::one(".a"), Style::new().opacity(1.0), 1.2))
            .add(
                Tween::to(Target::one(".b"), Style::new().opacity(1.0), 0.8),
                Position::Relative(-0.6),
            )
            .add(
                Tween::to(Target::one(".c"), Style::new().scale(1.0), 0.6),
                Position::Relative(-0.4),
            )
            .add(
                Tween::to(Target::one(".d"), Style::new().x(0.0), 1.0),
                Position::Relative(-0.8),
            );
        assert!(close(tl.start_of(0).unwrap(), 0.0));
        assert!(close(tl.start_of(1).unwrap(), 0.6));
        assert!(close(tl.start_of(2).unwrap(), 1.0));
        assert!(close(tl.start_of(3).unwrap(), 0.8));
        assert!(close(tl.duration(), 0.5 + 1.8));
    }

    #[test]
    fn test_overlap_never_starts_before_zero() {
        let tl = Timeline::new().add(
            Tween::to(Target::one(".a"), Style::new().x(1.0), 1.0),
            Position::Relative(-3.0),
        );
        assert_eq!(tl.start_of(0), Some(0.0));
    }

    #[test]
    fn test_sample_applies_sets_then_tweens() {
        let tl = Timeline::new()
            .set(Target::one(".about-image"), Style::new().opacity(0.0).x(-100.0))
            .to(Tween::to(
                Target::one(".about-image"),
                Style::new().opacity(1.0).x(0.0),
                1.0,
            )
            .ease(Ease::Linear));

        let start = tl.sample(0.0);
        assert_eq!(
            style_of(&start, ".about-image", 0),
            &Style::new().opacity(0.0).x(-100.0)
        );

        let mid = tl.sample(0.5);
        let style = style_of(&mid, ".about-image", 0);
        assert!(close(style.opacity.unwrap(), 0.5));
        assert!(close(style.x.unwrap(), -50.0));

        let end = tl.sample(5.0);
        assert_eq!(
            style_of(&end, ".about-image", 0),
            &Style::new().opacity(1.0).x(0.0)
        );
    }

    #[test]
    fn test_sample_chains_tweens_on_same_element() {
        let target = || Target::one(".box");
        let tl = Timeline::new()
            .set(target(), Style::new().y(0.0))
            .to(Tween::to(target(), Style::new().y(100.0), 1.0).ease(Ease::Linear))
            .to(Tween::to(target(), Style::new().y(50.0), 1.0).ease(Ease::Linear));
        assert!(close(style_of(&tl.sample(1.0), ".box", 0).y.unwrap(), 100.0));
        assert!(close(style_of(&tl.sample(1.5), ".box", 0).y.unwrap(), 75.0));
        assert!(close(style_of(&tl.sample(2.0), ".box", 0).y.unwrap(), 50.0));
    }

    #[test]
    fn test_from_to_renders_from_immediately() {
        let tl = Timeline::new().to(
            Tween::from_to(
                Target::many(".mobile-menu-item", 2),
                Style::new().opacity(0.0).x(50.0),
                Style::new().opacity(1.0).x(0.0),
                0.3,
            )
            .stagger(Stagger::each(0.1))
            .delay(0.2),
        );
        let frames = tl.sample(0.0);
        assert_eq!(frames.len(), 2);
        assert_eq!(
            style_of(&frames, ".mobile-menu-item", 1),
            &Style::new().opacity(0.0).x(50.0)
        );
        assert!(close(tl.duration(), 0.2 + 0.1 + 0.3));
    }

    #[test]
    fn test_staggered_elements_settle_in_order() {
        let tl = Timeline::new()
            .set(Target::many(".project-card", 3), Style::new().opacity(0.0))
            .to(
                Tween::to(Target::many(".project-card", 3), Style::new().opacity(1.0), 0.8)
                    .stagger(Stagger::each(0.15)),
            );
        let frames = tl.sample(0.9);
        assert_eq!(style_of(&frames, ".project-card", 0).opacity, Some(1.0));
        assert!(style_of(&frames, ".project-card", 2).opacity.unwrap() < 1.0);
    }

    #[test]
    fn test_infinite_timeline() {
        let tl = Timeline::new().to(
            Tween::to(Target::many(".footer-particle", 4), Style::new().y(-10.0), 2.0)
                .repeat(Repeat::Forever)
                .yoyo(true),
        );
        assert!(tl.duration().is_infinite());
        assert_eq!(tl.targets().count(), 1);
    }
}
