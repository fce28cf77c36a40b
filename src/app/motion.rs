use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};
use wasm_bindgen::JsCast;

use crate::choreography::Reveal;
use crate::motion::{Frame, Playback, PlaybackId, Scene, Timeline, TriggerRect, Tween, Viewport};
use crate::nav::SectionId;

// longer frames (tab switch, debugger) advance by one nominal frame instead
const LAG_THRESHOLD_MS: f64 = 500.0;
const LAG_FRAME_SECONDS: f64 = 1.0 / 30.0;

#[derive(Clone, Copy)]
pub struct MotionContext(StoredValue<Arc<Mutex<Scene>>>);

impl MotionContext {
    /// Runs `f` against the scene. `None` once the owning component is gone.
    pub fn with<R>(&self, f: impl FnOnce(&mut Scene) -> R) -> Option<R> {
        self.0.try_with_value(|scene| {
            let mut scene = scene.lock().expect("should be able to lock motion scene");
            f(&mut scene)
        })
    }

    pub fn tween_to(&self, tween: Tween) {
        self.with(|scene| scene.tween_to(tween));
    }

    pub fn tween_to_then(&self, tween: Tween, f: impl FnOnce() + Send + 'static) {
        self.with(|scene| scene.tween_to_then(tween, f));
    }
}

pub fn provide_motion() -> MotionContext {
    let motion = MotionContext(StoredValue::new(Arc::new(Mutex::new(Scene::new()))));
    provide_context(motion);

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let dt = if args.delta > LAG_THRESHOLD_MS {
            LAG_FRAME_SECONDS
        } else {
            args.delta / 1000.0
        };
        let tick = motion.with(|scene| scene.is_busy().then(|| scene.tick(dt, &DomViewport)));
        if let Some(Some(tick)) = tick {
            write_frames(&tick.frames);
            for callback in tick.callbacks {
                callback();
            }
        }
    });

    motion
}

pub fn use_motion() -> MotionContext {
    expect_context::<MotionContext>()
}

/// Adds the playback once the component is mounted and removes it on cleanup.
pub fn use_playback(build: impl Fn() -> Playback + 'static) {
    let motion = use_motion();
    let id = Arc::new(Mutex::new(None::<PlaybackId>));

    let registered = id.clone();
    Effect::new(move |_| {
        let mut registered = registered
            .lock()
            .expect("should be able to lock playback id");
        if registered.is_none() {
            *registered = motion.with(|scene| scene.add(build()));
        }
    });

    on_cleanup(move || {
        let registered = *id.lock().expect("should be able to lock playback id");
        if let Some(id) = registered {
            motion.with(|scene| scene.remove(id));
        }
    });
}

/// A playback revealed as `selector` scrolls into view. A malformed trigger is logged
/// and the timeline simply plays.
pub fn on_scroll(timeline: Timeline, selector: &str, reveal: Reveal) -> Playback {
    match reveal.trigger() {
        Ok(trigger) => Playback::scroll_triggered(timeline, selector, trigger),
        Err(e) => {
            log::error!("scroll trigger for {selector}: {e}");
            Playback::new(timeline)
        }
    }
}

pub fn random_order(n: usize) -> Vec<usize> {
    let mut order = (0..n).collect::<Vec<_>>();
    for i in (1..n).rev() {
        let j = (js_sys::Math::random() * (i + 1) as f64) as usize;
        order.swap(i, j.min(i));
    }
    order
}

pub fn scroll_to_section(section: SectionId) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::debug!("no element for section #{section}");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

struct DomViewport;

impl Viewport for DomViewport {
    fn height(&self) -> f64 {
        window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default()
    }

    fn rect(&self, selector: &str) -> Option<TriggerRect> {
        let el = document().query_selector(selector).ok().flatten()?;
        let rect = el.get_bounding_client_rect();
        Some(TriggerRect {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }
}

fn write_frames(frames: &[Frame]) {
    let document = document();
    let mut matches = HashMap::<&str, web_sys::NodeList>::new();
    for frame in frames {
        let selector = frame.selector.as_str();
        if !matches.contains_key(selector) {
            match document.query_selector_all(selector) {
                Ok(nodes) => {
                    matches.insert(selector, nodes);
                }
                Err(e) => {
                    log::debug!("bad selector {selector}: {e:?}");
                    continue;
                }
            }
        }
        let Some(el) = matches
            .get(selector)
            .and_then(|nodes| nodes.item(frame.index as u32))
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let style = el.style();
        for (property, value) in frame.style.css() {
            if let Err(e) = style.set_property(property, &value) {
                log::debug!("couldn't set {property} on {selector}: {e:?}");
            }
        }
    }
}
