use leptos::prelude::*;

use super::motion::{on_scroll, use_motion, use_playback};
use super::Glyph;
use crate::choreography::{about_reveal, profile_tilt, SECTION_REVEAL};
use crate::content::{Skill, OWNER, PROFILE_IMAGE, SKILLS};
use crate::nav::SectionId;

#[component]
pub fn AboutSection() -> impl IntoView {
    let motion = use_motion();

    use_playback(|| on_scroll(about_reveal(), ".about-section", SECTION_REVEAL));

    let tilt_profile = move |scale: f64, rotation: f64| {
        motion.tween_to(profile_tilt(scale, rotation));
    };

    view! {
        <section
            id=SectionId::About.id()
            class="about-section min-h-screen flex items-center py-20"
        >
            <div class="max-w-7xl mx-auto px-6 grid lg:grid-cols-2 gap-16 items-center">
                <div class="about-image flex justify-center lg:justify-start">
                    <div class="relative">
                        <div class="absolute inset-0 bg-gradient-to-r from-primary to-accent rounded-full blur-xl opacity-30 animate-pulse-slow" />
                        <img
                            src=PROFILE_IMAGE
                            alt=OWNER
                            on:mouseenter=move |_| tilt_profile(1.05, 5.0)
                            on:mouseleave=move |_| tilt_profile(1.0, 0.0)
                            class="profile-image relative z-10 w-80 h-80 object-cover rounded-full border-4 border-glow shadow-2xl"
                        />
                    </div>
                </div>

                <div class="about-content space-y-8">
                    <div>
                        <h2 class="text-5xl md:text-6xl font-light mb-6">
                            "About " <span class="gradient-text">"Me"</span>
                        </h2>
                        <p class="text-lg text-muted-foreground leading-relaxed mb-6">
                            "I'm a passionate web developer with expertise in modern technologies. I love creating immersive digital experiences that combine functionality with stunning visual design. My focus is on building responsive, user-friendly applications that make a lasting impact."
                        </p>
                        <p class="text-lg text-muted-foreground leading-relaxed">
                            "When I'm not coding, you'll find me exploring new technologies, contributing to open-source projects, or designing the next big thing in digital innovation."
                        </p>
                    </div>

                    <div>
                        <h3 class="text-2xl font-light mb-6 text-primary">
                            "Skills & Technologies"
                        </h3>
                        <div class="grid grid-cols-3 gap-6">
                            {SKILLS.into_iter().map(|skill| view! { <SkillCard skill=skill /> }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div class="skill-icon group cursor-pointer">
            <div
                class="glass-card p-6 text-center hover:border-glow transition-all duration-300 group-hover:transform group-hover:scale-105"
                style=format!("--skill-color: {}", skill.color)
            >
                <Glyph
                    icon=skill.icon
                    class="skill-glyph block text-4xl mx-auto mb-3 text-primary transition-colors"
                />
                <p class="text-sm font-medium">{skill.name}</p>
            </div>
        </div>
    }
}
