use leptos::prelude::*;

use super::motion::{on_scroll, random_order, scroll_to_section, scroll_to_top, use_playback};
use super::Glyph;
use crate::choreography::{footer_reveal, particle_float, FOOTER_REVEAL, PARTICLE_COUNT};
use crate::content::{build_year, Icon, OWNER, SOCIAL_LINKS, TAGLINE};
use crate::motion::Playback;
use crate::nav::SectionId;

const PARTICLES: [&str; PARTICLE_COUNT] = [
    "w-16 h-16 top-1/4 left-1/4",
    "w-12 h-12 top-1/2 right-1/3",
    "w-20 h-20 bottom-1/4 left-1/2",
    "w-8 h-8 top-3/4 right-1/4",
];

#[component]
pub fn Footer() -> impl IntoView {
    use_playback(|| on_scroll(footer_reveal(), ".footer-section", FOOTER_REVEAL));
    use_playback(|| Playback::new(particle_float(random_order(PARTICLE_COUNT))));

    view! {
        <footer class="footer-section relative py-16 border-t border-border/50">
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                {PARTICLES
                    .into_iter()
                    .map(|placement| {
                        view! { <div class=format!("footer-particle glow-orb {placement}") /> }
                    })
                    .collect_view()}
            </div>

            <div class="footer-content max-w-7xl mx-auto px-6">
                <div class="grid md:grid-cols-3 gap-8 mb-12">
                    <div class="space-y-4">
                        <h3 class="text-2xl font-light gradient-text">{OWNER}</h3>
                        <p class="text-muted-foreground leading-relaxed">{TAGLINE} "."</p>
                    </div>

                    <div class="space-y-4">
                        <h4 class="text-lg font-medium text-foreground">"Navigation"</h4>
                        <div class="space-y-2">
                            {SectionId::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <button
                                            on:click=move |_| scroll_to_section(section)
                                            class="block text-muted-foreground hover:text-primary transition-colors"
                                        >
                                            {section.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="space-y-4">
                        <h4 class="text-lg font-medium text-foreground">"Connect"</h4>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.name
                                            class="w-10 h-10 glass-card flex items-center justify-center text-muted-foreground hover:text-primary transition-colors group"
                                        >
                                            <Glyph
                                                icon=link.icon
                                                class="text-xl group-hover:scale-110 transition-transform"
                                            />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="pt-8 border-t border-border/30 flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                    <p class="text-muted-foreground text-sm flex items-center gap-2">
                        "Made with " <Glyph icon=Icon::Heart class="text-primary" /> " by "
                        {OWNER}
                    </p>
                    <p class="text-muted-foreground text-xs">
                        {format!("© {} {OWNER}", build_year())}
                    </p>
                    <button
                        on:click=move |_| scroll_to_top()
                        class="text-sm text-muted-foreground hover:text-primary transition-colors"
                    >
                        "Back to top ↑"
                    </button>
                </div>
            </div>
        </footer>
    }
}
