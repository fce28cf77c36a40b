use std::time::Duration;

use leptos::prelude::*;
use leptos_use::use_interval_fn;

use super::motion::{use_motion, use_playback, MotionContext};
use crate::choreography::{loader_intro, preloader_fade, progress_empty, progress_fill};
use crate::content::OWNER;
use crate::loader::{LoadProgress, LoadStep, FADE_DELAY_MS, TICK_MS};
use crate::motion::Playback;

/// `on_complete` runs once the progress has reached 100% and the preloader has faded.
#[component]
pub fn LoadingScreen(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let motion = use_motion();
    let (progress, set_progress) = signal(LoadProgress::default());

    use_playback(|| Playback::new(loader_intro()));

    let ticker = use_interval_fn(
        move || {
            let unit = js_sys::Math::random();
            let mut step = LoadStep::Idle;
            set_progress.update(|p| step = p.advance(LoadProgress::step_from_unit(unit)));
            match step {
                LoadStep::Progress(value) => motion.tween_to(progress_fill(value)),
                LoadStep::Finished => {
                    motion.tween_to(progress_fill(100.0));
                    set_timeout(
                        move || fade_out(motion, on_complete),
                        Duration::from_millis(FADE_DELAY_MS),
                    );
                }
                LoadStep::Idle => {}
            }
        },
        TICK_MS,
    );

    let pause = ticker.pause;
    Effect::new(move |_| {
        if progress.with(LoadProgress::is_finished) {
            pause();
        }
    });

    view! {
        <div class="preloader fixed inset-0 z-50 flex items-center justify-center bg-background">
            <div class="glow-orb w-96 h-96 top-1/4 left-1/4 animate-float" />
            <div
                class="glow-orb w-64 h-64 bottom-1/4 right-1/4 animate-float"
                style="animation-delay: 2s"
            />
            <div class="text-center space-y-8">
                <div class="loading-text">
                    <h1 class="text-6xl md:text-8xl font-light gradient-text">{OWNER}</h1>
                    <p class="text-muted-foreground text-lg mt-4">"Loading Experience..."</p>
                </div>
                <div class="w-80 mx-auto space-y-2">
                    <div class="flex justify-between items-center">
                        <span class="text-sm text-muted-foreground">"Progress"</span>
                        <span class="progress-percentage text-sm text-primary font-mono">
                            {move || progress.get().label()}
                        </span>
                    </div>
                    <div class="relative h-1 bg-muted rounded-full overflow-hidden">
                        <div
                            class="progress-bar-fill absolute left-0 top-0 h-full bg-gradient-to-r from-primary to-accent rounded-full shadow-glow"
                            style=progress_empty().inline()
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

fn fade_out(motion: MotionContext, on_complete: Callback<()>) {
    motion.tween_to_then(preloader_fade(), move || on_complete.run(()));
}
