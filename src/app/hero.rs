use leptos::prelude::*;

use super::motion::{random_order, scroll_to_section, use_motion, use_playback};
use super::Glyph;
use crate::choreography::{cta_hover, hero_intro, orb_float, ORB_COUNT};
use crate::content::{Icon, ROLE, SCENE_URL, SHORT_NAME, TAGLINE};
use crate::motion::Playback;
use crate::nav::SectionId;

const ORBS: [&str; ORB_COUNT] = [
    "w-32 h-32 top-1/4 left-1/4",
    "w-24 h-24 top-3/4 right-1/3",
    "w-40 h-40 bottom-1/4 left-1/2",
];

#[component]
pub fn HeroSection() -> impl IntoView {
    let motion = use_motion();

    use_playback(|| Playback::new(hero_intro()));
    use_playback(|| Playback::new(orb_float(random_order(ORB_COUNT))));

    let cta_scale = move |scale: f64| motion.tween_to(cta_hover(scale));

    view! {
        <section
            id=SectionId::Home.id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="spline-container absolute inset-0 z-0">
                <iframe
                    src=SCENE_URL
                    title="3D scene"
                    frameborder="0"
                    width="100%"
                    height="100%"
                    class="w-full h-full"
                />
            </div>

            {ORBS
                .into_iter()
                .map(|placement| {
                    view! { <div class=format!("floating-orb glow-orb {placement}") /> }
                })
                .collect_view()}

            <div class="relative z-10 text-center max-w-4xl mx-auto px-6">
                <h1 class="hero-headline text-5xl md:text-7xl lg:text-8xl font-light leading-tight mb-6">
                    "Hi, I'm " <span class="gradient-text">{SHORT_NAME}</span> " –" <br />
                    <span class="text-glow">{ROLE}</span>
                </h1>
                <p class="hero-subtitle text-xl md:text-2xl text-muted-foreground mb-12 max-w-2xl mx-auto">
                    {TAGLINE}
                </p>
                <button
                    on:click=move |_| scroll_to_section(SectionId::Contact)
                    on:mouseenter=move |_| cta_scale(1.05)
                    on:mouseleave=move |_| cta_scale(1.0)
                    class="hero-cta glow-button px-8 py-4 text-lg font-medium inline-flex items-center gap-3 group"
                >
                    "Hire Me"
                    <Glyph
                        icon=Icon::ArrowRight
                        class="transition-transform group-hover:translate-x-1"
                    />
                </button>
            </div>

            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                <div class="w-6 h-10 border-2 border-primary/50 rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-primary rounded-full mt-2 animate-pulse" />
                </div>
            </div>
        </section>
    }
}
