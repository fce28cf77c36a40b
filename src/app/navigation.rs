use leptos::prelude::*;

use super::motion::{scroll_to_section, use_motion, use_playback, MotionContext};
use super::Glyph;
use crate::choreography::{menu_parked, menu_parking, menu_slide, nav_entrance};
use crate::content::{Icon, SHORT_NAME};
use crate::motion::Playback;
use crate::nav::{MenuState, SectionId};

#[component]
pub fn Navigation() -> impl IntoView {
    let motion = use_motion();
    let (menu, set_menu) = signal(MenuState::default());

    use_playback(|| Playback::new(nav_entrance()));
    use_playback(|| Playback::paused(menu_parking()));

    let toggle_menu = move |_| {
        let next = menu.get_untracked().toggled();
        set_menu.set(next);
        slide_menu(motion, next);
    };

    let go_to = move |section: SectionId| {
        scroll_to_section(section);
        set_menu.set(MenuState::Closed);
        slide_menu(motion, MenuState::Closed);
    };

    view! {
        <nav class="nav-container fixed top-0 left-0 right-0 z-40 p-6">
            <div class="max-w-7xl mx-auto flex justify-between items-center">
                <div class="text-2xl font-light gradient-text">{SHORT_NAME}</div>
                <div class="hidden md:flex space-x-8">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    on:click=move |_| go_to(section)
                                    class="text-foreground/80 hover:text-primary transition-colors duration-300 relative group"
                                >
                                    {section.label()}
                                    <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-gradient-to-r from-primary to-accent transition-all duration-300 group-hover:w-full" />
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    on:click=toggle_menu
                    aria-label="Open menu"
                    class="md:hidden p-2 text-foreground hover:text-primary transition-colors"
                >
                    <Glyph icon=Icon::Menu class="text-2xl" />
                </button>
            </div>
        </nav>

        <div
            class="mobile-menu fixed top-0 right-0 w-full h-screen bg-background/95 backdrop-blur-xl z-50"
            style=menu_parked().inline()
            aria-hidden=move || (!menu.get().is_open()).to_string()
        >
            <div class="p-6">
                <div class="flex justify-between items-center mb-12">
                    <div class="text-2xl font-light gradient-text">{SHORT_NAME}</div>
                    <button
                        on:click=toggle_menu
                        aria-label="Close menu"
                        class="text-foreground hover:text-primary"
                    >
                        <Glyph icon=Icon::Close class="text-2xl" />
                    </button>
                </div>
                <div class="space-y-8">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    on:click=move |_| go_to(section)
                                    class="mobile-menu-item block text-3xl font-light text-foreground hover:text-primary transition-colors w-full text-left"
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

fn slide_menu(motion: MotionContext, state: MenuState) {
    for tween in menu_slide(state) {
        motion.tween_to(tween);
    }
}
