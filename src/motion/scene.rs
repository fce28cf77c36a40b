use std::collections::HashMap;

use super::{
    Frame, Playhead, PlayheadEvent, ScrollTrigger, Style, Target, Timeline, ToggleAction,
    TriggerRect, Tween,
};

pub type PlaybackId = u64;

type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Where trigger elements are on screen. The browser implementation reads
/// `getBoundingClientRect`; tests hand out fixed rectangles.
pub trait Viewport {
    fn height(&self) -> f64;
    fn rect(&self, selector: &str) -> Option<TriggerRect>;
}

/// A timeline being played, optionally driven by a scroll trigger.
pub struct Playback {
    timeline: Timeline,
    playhead: Playhead,
    trigger: Option<(String, ScrollTrigger)>,
    on_complete: Option<Callback>,
    one_shot: bool,
}

impl Playback {
    /// Starts playing as soon as it is added.
    pub fn new(timeline: Timeline) -> Self {
        let playhead = Playhead::new(timeline.duration());
        Self {
            timeline,
            playhead,
            trigger: None,
            on_complete: None,
            one_shot: false,
        }
    }

    /// Renders its first frame immediately, then waits for `trigger` to act on it as
    /// the element matching `selector` scrolls by.
    pub fn scroll_triggered(
        timeline: Timeline,
        selector: impl Into<String>,
        trigger: ScrollTrigger,
    ) -> Self {
        let playhead = Playhead::paused(timeline.duration());
        Self {
            timeline,
            playhead,
            trigger: Some((selector.into(), trigger)),
            on_complete: None,
            one_shot: false,
        }
    }

    /// Renders its first frame and stays parked there.
    pub fn paused(timeline: Timeline) -> Self {
        let playhead = Playhead::paused(timeline.duration());
        Self {
            playhead,
            ..Self::new(timeline)
        }
    }

    /// Runs the first time the playback reaches its end playing forwards.
    pub fn on_complete(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }
}

struct Slot {
    id: PlaybackId,
    playback: Playback,
    dirty: bool,
}

/// The output of one [`Scene::tick`]: styles to write, then callbacks to run once the
/// scene is no longer borrowed.
#[derive(Default)]
pub struct Tick {
    pub frames: Vec<Frame>,
    pub callbacks: Vec<Callback>,
}

/// Every playing timeline on the page plus the last style written to each element.
#[derive(Default)]
pub struct Scene {
    slots: Vec<Slot>,
    next_id: PlaybackId,
    applied: HashMap<(String, usize), Style>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, playback: Playback) -> PlaybackId {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.push(Slot {
            id,
            playback,
            dirty: true,
        });
        id
    }

    /// Drops a playback without running its completion callback.
    pub fn remove(&mut self, id: PlaybackId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.id != id);
        self.slots.len() != before
    }

    pub fn contains(&self, id: PlaybackId) -> bool {
        self.slots.iter().any(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn control(&mut self, id: PlaybackId, action: ToggleAction) -> bool {
        match self.slots.iter_mut().find(|s| s.id == id) {
            Some(slot) => {
                slot.playback.playhead.apply(action);
                slot.dirty = true;
                true
            }
            None => false,
        }
    }

    /// The style last written to `selector[index]`, if any.
    pub fn applied(&self, selector: &str, index: usize) -> Option<Style> {
        self.applied.get(&(selector.to_string(), index)).copied()
    }

    /// Plays a single tween starting from whatever its elements currently show. Any
    /// other standalone tween on the same elements is dropped.
    pub fn tween_to(&mut self, tween: Tween) -> PlaybackId {
        self.add_standalone(tween, None)
    }

    /// Like [`Scene::tween_to`], running `f` when the tween finishes.
    pub fn tween_to_then(&mut self, tween: Tween, f: impl FnOnce() + Send + 'static) -> PlaybackId {
        self.add_standalone(tween, Some(Box::new(f)))
    }

    fn add_standalone(&mut self, tween: Tween, on_complete: Option<Callback>) -> PlaybackId {
        let target = tween.target.clone();
        let fields = tween.to;
        self.slots.retain(|s| {
            !(s.playback.one_shot && s.playback.timeline.targets().any(|t| t.overlaps(&target)))
        });
        // seeding other fields would pin them while a timeline is still moving them
        let timeline = target
            .indices()
            .filter_map(|index| {
                self.applied(target.selector(), index)
                    .map(|style| style.masked(&fields))
                    .filter(|style| !style.is_empty())
                    .map(|style| (Target::nth(target.selector(), index), style))
            })
            .fold(Timeline::new(), |tl, (t, style)| tl.set(t, style))
            .to(tween);
        let mut playback = Playback::new(timeline);
        playback.on_complete = on_complete;
        playback.one_shot = true;
        self.add(playback)
    }

    /// Whether the next tick could change anything on screen.
    pub fn is_busy(&self) -> bool {
        self.slots
            .iter()
            .any(|s| s.dirty || s.playback.playhead.is_active() || s.playback.trigger.is_some())
    }

    /// Advances every playback by `dt` seconds. Scroll triggers are evaluated first so
    /// an action they fire takes effect on this same tick.
    pub fn tick(&mut self, dt: f64, viewport: &impl Viewport) -> Tick {
        let viewport_height = viewport.height();
        let mut tick = Tick::default();
        let mut finished = Vec::new();

        for slot in &mut self.slots {
            let playback = &mut slot.playback;
            if let Some((selector, trigger)) = &mut playback.trigger {
                if let Some(rect) = viewport.rect(selector) {
                    for action in trigger.update(rect, viewport_height) {
                        playback.playhead.apply(action);
                        slot.dirty = true;
                    }
                }
            }

            let before = playback.playhead.time();
            let event = playback.playhead.advance(dt);
            if playback.playhead.time() != before {
                slot.dirty = true;
            }
            if slot.dirty {
                tick.frames
                    .extend(playback.timeline.sample(playback.playhead.time()));
                slot.dirty = false;
            }
            if event == Some(PlayheadEvent::Completed) {
                if let Some(callback) = playback.on_complete.take() {
                    tick.callbacks.push(callback);
                }
                if playback.one_shot {
                    finished.push(slot.id);
                }
            }
        }

        self.slots.retain(|s| !finished.contains(&s.id));
        // one element can be driven by several playbacks; write out the merged result
        for frame in &mut tick.frames {
            let entry = self
                .applied
                .entry((frame.selector.clone(), frame.index))
                .or_default();
            *entry = entry.overlay(&frame.style);
            frame.style = *entry;
        }
        tick
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;
    use crate::motion::Ease;

    #[derive(Default)]
    struct FakeViewport {
        rects: HashMap<String, TriggerRect>,
    }

    impl FakeViewport {
        fn at(selector: &str, top: f64) -> Self {
            let mut rects = HashMap::new();
            rects.insert(
                selector.to_string(),
                TriggerRect {
                    top,
                    bottom: top + 600.0,
                },
            );
            Self { rects }
        }
    }

    impl Viewport for FakeViewport {
        fn height(&self) -> f64 {
            1000.0
        }

        fn rect(&self, selector: &str) -> Option<TriggerRect> {
            self.rects.get(selector).copied()
        }
    }

    fn fade_in(selector: &str) -> Timeline {
        Timeline::new()
            .set(Target::one(selector), Style::new().opacity(0.0))
            .to(Tween::to(Target::one(selector), Style::new().opacity(1.0), 1.0).ease(Ease::Linear))
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.unwrap_or(f64::NAN);
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    fn opacity(tick: &Tick, selector: &str) -> Option<f64> {
        tick.frames
            .iter()
            .rev()
            .find(|f| f.selector == selector)
            .and_then(|f| f.style.opacity)
    }

    #[test]
    fn test_first_tick_renders_initial_state() {
        let mut scene = Scene::new();
        scene.add(Playback::paused(fade_in(".hero")));
        let tick = scene.tick(0.016, &FakeViewport::default());
        assert_eq!(opacity(&tick, ".hero"), Some(0.0));
        // nothing moved, nothing re-rendered
        let tick = scene.tick(0.016, &FakeViewport::default());
        assert!(tick.frames.is_empty());
        assert_eq!(scene.applied(".hero", 0), Some(Style::new().opacity(0.0)));
    }

    #[test]
    fn test_completion_callback_runs_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut scene = Scene::new();
        let id = scene.add(Playback::new(fade_in(".preloader")).on_complete(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let viewport = FakeViewport::default();
        for _ in 0..3 {
            for callback in scene.tick(0.5, &viewport).callbacks {
                callback();
            }
        }
        // restarting and finishing again does not re-run it
        scene.control(id, ToggleAction::Restart);
        for _ in 0..3 {
            for callback in scene.tick(0.5, &viewport).callbacks {
                callback();
            }
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_scroll_trigger_plays_and_reverses() {
        let mut scene = Scene::new();
        let trigger =
            ScrollTrigger::parse("top 80%", Some("bottom 20%"), "play none none reverse").unwrap();
        scene.add(Playback::scroll_triggered(
            fade_in(".about-image"),
            ".about-section",
            trigger,
        ));

        let below = FakeViewport::at(".about-section", 1500.0);
        let tick = scene.tick(0.5, &below);
        assert_eq!(opacity(&tick, ".about-image"), Some(0.0));
        assert!(scene.tick(0.5, &below).frames.is_empty());

        let inside = FakeViewport::at(".about-section", 500.0);
        let tick = scene.tick(0.5, &inside);
        assert_eq!(opacity(&tick, ".about-image"), Some(0.5));
        let tick = scene.tick(0.5, &inside);
        assert_eq!(opacity(&tick, ".about-image"), Some(1.0));

        let tick = scene.tick(0.25, &below);
        assert_eq!(opacity(&tick, ".about-image"), Some(0.75));
    }

    #[test]
    fn test_tween_to_starts_from_applied_style() {
        let mut scene = Scene::new();
        let viewport = FakeViewport::default();
        scene.add(Playback::paused(
            Timeline::new().set(Target::many(".card", 2), Style::new().y(100.0)),
        ));
        scene.tick(0.0, &viewport);

        scene.tween_to(
            Tween::to(Target::nth(".card", 1), Style::new().y(0.0), 1.0).ease(Ease::Linear),
        );
        let tick = scene.tick(0.5, &viewport);
        let card = tick
            .frames
            .iter()
            .find(|f| f.selector == ".card" && f.index == 1)
            .unwrap();
        assert_eq!(card.style.y, Some(50.0));
        assert!(!tick.frames.iter().any(|f| f.index == 0 && f.selector == ".card"));
    }

    #[test]
    fn test_tween_to_overwrites_previous_on_same_element() {
        let mut scene = Scene::new();
        let viewport = FakeViewport::default();
        let hover = scene.tween_to_then(
            Tween::to(Target::nth(".cta", 0), Style::new().scale(1.05), 0.3),
            || panic!("overwritten tween must not complete"),
        );
        scene.tick(0.1, &viewport);
        let leave = scene.tween_to(Tween::to(Target::nth(".cta", 0), Style::new().scale(1.0), 0.3));
        assert!(!scene.contains(hover));
        assert!(scene.contains(leave));
        for callback in scene.tick(1.0, &viewport).callbacks {
            callback();
        }
        // finished standalone tweens are dropped
        assert!(scene.is_empty());
        assert_eq!(scene.applied(".cta", 0).and_then(|s| s.scale), Some(1.0));
    }

    #[test]
    fn test_tween_to_leaves_other_properties_to_running_timelines() {
        let mut scene = Scene::new();
        let viewport = FakeViewport::default();
        scene.add(Playback::new(fade_in(".card")));
        let tick = scene.tick(0.2, &viewport);
        assert_close(opacity(&tick, ".card"), 0.2);

        scene.tween_to(Tween::to(Target::nth(".card", 0), Style::new().scale(1.05), 0.3));
        let tick = scene.tick(0.2, &viewport);
        assert_close(opacity(&tick, ".card"), 0.4);
        let tick = scene.tick(0.2, &viewport);
        assert_close(opacity(&tick, ".card"), 0.6);
        assert_close(scene.applied(".card", 0).and_then(|s| s.scale), 1.05);
    }

    #[test]
    fn test_frames_merge_properties_from_other_playbacks() {
        let mut scene = Scene::new();
        let viewport = FakeViewport::default();
        scene.add(Playback::paused(
            Timeline::new().set(Target::one(".footer-particle"), Style::new().scale(0.5)),
        ));
        scene.tick(0.0, &viewport);
        scene.add(Playback::new(Timeline::new().to(
            Tween::to(Target::one(".footer-particle"), Style::new().y(-10.0), 1.0).ease(Ease::Linear),
        )));
        let tick = scene.tick(0.5, &viewport);
        assert_eq!(tick.frames.len(), 1);
        assert_eq!(tick.frames[0].style, Style::new().scale(0.5).y(-5.0));
    }

    #[test]
    fn test_remove_and_busy() {
        let mut scene = Scene::new();
        assert!(!scene.is_busy());
        let id = scene.add(Playback::paused(fade_in(".x")));
        assert!(scene.is_busy());
        scene.tick(0.0, &FakeViewport::default());
        assert!(!scene.is_busy());
        assert!(scene.remove(id));
        assert!(!scene.remove(id));
    }
}
