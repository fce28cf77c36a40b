use leptos::prelude::*;

use super::motion::{on_scroll, use_motion, use_playback};
use super::Glyph;
use crate::choreography::{card_glows_hidden, card_lift, projects_reveal, SECTION_REVEAL};
use crate::content::{Icon, Project, PROJECTS};
use crate::motion::Playback;
use crate::nav::SectionId;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    use_playback(|| on_scroll(projects_reveal(), ".projects-section", SECTION_REVEAL));
    use_playback(|| Playback::paused(card_glows_hidden()));

    view! {
        <section id=SectionId::Projects.id() class="projects-section min-h-screen py-20">
            <div class="max-w-7xl mx-auto px-6">
                <div class="projects-title text-center mb-16">
                    <h2 class="text-5xl md:text-6xl font-light mb-6">
                        "Featured " <span class="gradient-text">"Projects"</span>
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        "A collection of my best work showcasing modern web technologies and creative solutions"
                    </p>
                </div>

                <div class="md:grid md:grid-cols-2 lg:grid-cols-3 gap-8 md:gap-6 flex md:flex-none overflow-x-auto md:overflow-visible pb-4 md:pb-0 space-x-6 md:space-x-0">
                    {PROJECTS
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard index=index project=project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    let motion = use_motion();

    let lift = move |raised: bool| {
        for tween in card_lift(index, raised) {
            motion.tween_to(tween);
        }
    };

    view! {
        <div
            on:mouseenter=move |_| lift(true)
            on:mouseleave=move |_| lift(false)
            class="project-card relative group min-w-[300px] md:min-w-0"
        >
            <div class="card-glow absolute inset-0 bg-gradient-to-r from-primary/20 to-accent/20 rounded-xl blur-xl opacity-0 transition-opacity duration-300" />

            <div class="glass-card h-full overflow-hidden relative z-10">
                <div class="relative overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-48 object-cover transition-transform duration-500 group-hover:scale-110"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-background/80 to-transparent" />
                </div>

                <div class="p-6 space-y-4">
                    <div>
                        <h3 class="text-xl font-semibold text-primary mb-1">{project.title}</h3>
                        <p class="text-sm text-muted-foreground mb-3">{project.subtitle}</p>
                        <p class="text-sm text-foreground/80 leading-relaxed">
                            {project.description}
                        </p>
                    </div>

                    <div class="flex flex-wrap gap-2">
                        {project
                            .tech
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 text-xs bg-primary/20 text-primary rounded-full border border-primary/30">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex gap-4 pt-4">
                        <a
                            href=project.github
                            class="flex items-center gap-2 text-sm text-muted-foreground hover:text-primary transition-colors"
                        >
                            <Glyph icon=Icon::GitHub />
                            "Code"
                        </a>
                        <a
                            href=project.live
                            class="flex items-center gap-2 text-sm text-muted-foreground hover:text-primary transition-colors"
                        >
                            <Glyph icon=Icon::ExternalLink />
                            "Live Demo"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
