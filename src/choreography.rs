//! The timelines and hover tweens of every page section.
//!
//! The components in `app` only mount these and feed them DOM events, so the timing
//! of the whole page can be checked without a browser.

use crate::contact::Field;
use crate::content::{PROJECTS, SKILLS, SOCIAL_LINKS};
use crate::motion::{
    Ease, ParseError, Position, Repeat, ScrollTrigger, Stagger, StaggerFrom, Style, Target,
    Timeline, Tween,
};
use crate::nav::{MenuState, SectionId};

pub const ORB_COUNT: usize = 3;
pub const PARTICLE_COUNT: usize = 4;

/// Scroll trigger settings for a section reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub start: &'static str,
    pub end: Option<&'static str>,
    pub actions: &'static str,
}

impl Reveal {
    pub fn trigger(&self) -> Result<ScrollTrigger, ParseError> {
        ScrollTrigger::parse(self.start, self.end, self.actions)
    }
}

pub const SECTION_REVEAL: Reveal = Reveal {
    start: "top 80%",
    end: Some("bottom 20%"),
    actions: "play none none reverse",
};

pub const FOOTER_REVEAL: Reveal = Reveal {
    start: "top 90%",
    end: None,
    actions: "play none none reverse",
};

// preloader

pub fn loader_intro() -> Timeline {
    Timeline::new()
        .set(
            Target::one(".loading-text"),
            Style::new().opacity(0.0).y(30.0).blur(10.0),
        )
        .set(Target::one(".progress-percentage"), Style::new().opacity(0.0))
        .to(Tween::to(
            Target::one(".loading-text"),
            Style::new().opacity(1.0).y(0.0).blur(0.0),
            0.8,
        )
        .ease(Ease::POWER2_OUT))
        .add(
            Tween::to(
                Target::one(".progress-percentage"),
                Style::new().opacity(1.0),
                0.3,
            ),
            Position::Relative(-0.5),
        )
}

/// Written inline rather than set by [`loader_intro`], whose first frames would
/// otherwise pull the bar back to zero under the fill tweens.
pub fn progress_empty() -> Style {
    Style::new().width(0.0)
}

pub fn progress_fill(percent: f64) -> Tween {
    Tween::to(
        Target::one(".progress-bar-fill"),
        Style::new().width(percent),
        0.3,
    )
    .ease(Ease::POWER2_OUT)
}

pub fn preloader_fade() -> Tween {
    Tween::to(
        Target::one(".preloader"),
        Style::new().opacity(0.0).scale(0.9),
        1.0,
    )
    .ease(Ease::POWER2_IN_OUT)
}

// navigation

pub fn nav_entrance() -> Timeline {
    Timeline::new().to(
        Tween::from_to(
            Target::one(".nav-container"),
            Style::new().opacity(0.0).y(-20.0),
            Style::new().opacity(1.0).y(0.0),
            1.0,
        )
        .delay(0.5)
        .ease(Ease::POWER2_OUT),
    )
}

/// The closed menu, off screen to the right. Rendered inline on the element and
/// recorded in the scene by [`menu_parking`] so the first slide starts from it.
pub fn menu_parked() -> Style {
    Style::new().x_percent(100.0)
}

pub fn menu_parking() -> Timeline {
    Timeline::new().set(Target::one(".mobile-menu"), menu_parked())
}

pub fn menu_slide(state: MenuState) -> Vec<Tween> {
    let panel = Target::one(".mobile-menu");
    if state.is_open() {
        vec![
            Tween::to(panel, Style::new().x_percent(0.0), 0.5).ease(Ease::POWER2_OUT),
            Tween::from_to(
                Target::many(".mobile-menu-item", SectionId::ALL.len()),
                Style::new().opacity(0.0).x(50.0),
                Style::new().opacity(1.0).x(0.0),
                0.3,
            )
            .stagger(Stagger::each(0.1))
            .delay(0.2),
        ]
    } else {
        vec![Tween::to(panel, Style::new().x_percent(100.0), 0.5).ease(Ease::POWER2_IN_OUT)]
    }
}

// hero

/// Headline, subtitle, call to action, then the 3D scene sliding in.
pub fn hero_intro() -> Timeline {
    Timeline::new()
        .delay(0.5)
        .set(
            Target::one(".hero-headline"),
            Style::new().opacity(0.0).y(50.0).blur(10.0),
        )
        .set(Target::one(".hero-subtitle"), Style::new().opacity(0.0).y(30.0))
        .set(Target::one(".hero-cta"), Style::new().opacity(0.0).scale(0.8))
        .set(Target::one(".spline-container"), Style::new().opacity(0.0).x(100.0))
        .to(Tween::to(
            Target::one(".hero-headline"),
            Style::new().opacity(1.0).y(0.0).blur(0.0),
            1.2,
        )
        .ease(Ease::POWER2_OUT))
        .add(
            Tween::to(
                Target::one(".hero-subtitle"),
                Style::new().opacity(1.0).y(0.0),
                0.8,
            )
            .ease(Ease::POWER2_OUT),
            Position::Relative(-0.6),
        )
        .add(
            Tween::to(Target::one(".hero-cta"), Style::new().opacity(1.0).scale(1.0), 0.6)
                .ease(Ease::back_out(1.7)),
            Position::Relative(-0.4),
        )
        .add(
            Tween::to(
                Target::one(".spline-container"),
                Style::new().opacity(1.0).x(0.0),
                1.0,
            )
            .ease(Ease::POWER2_OUT),
            Position::Relative(-0.8),
        )
}

/// `order` is the order the orbs start bobbing in.
pub fn orb_float(order: Vec<usize>) -> Timeline {
    Timeline::new().to(
        Tween::to(Target::many(".floating-orb", ORB_COUNT), Style::new().y(-20.0), 3.0)
            .repeat(Repeat::Forever)
            .yoyo(true)
            .ease(Ease::POWER1_IN_OUT)
            .stagger(Stagger::each(0.5).from(StaggerFrom::Order(order))),
    )
}

pub fn cta_hover(scale: f64) -> Tween {
    Tween::to(Target::one(".hero-cta"), Style::new().scale(scale), 0.3).ease(Ease::POWER2_OUT)
}

// about

pub fn about_reveal() -> Timeline {
    Timeline::new()
        .set(
            Target::one(".about-image"),
            Style::new().opacity(0.0).x(-100.0).scale(0.8),
        )
        .set(Target::one(".about-content"), Style::new().opacity(0.0).x(100.0))
        .set(
            Target::many(".skill-icon", SKILLS.len()),
            Style::new().opacity(0.0).y(30.0).scale(0.5),
        )
        .to(Tween::to(
            Target::one(".about-image"),
            Style::new().opacity(1.0).x(0.0).scale(1.0),
            1.0,
        )
        .ease(Ease::POWER2_OUT))
        .add(
            Tween::to(
                Target::one(".about-content"),
                Style::new().opacity(1.0).x(0.0),
                0.8,
            )
            .ease(Ease::POWER2_OUT),
            Position::Relative(-0.5),
        )
        .add(
            Tween::to(
                Target::many(".skill-icon", SKILLS.len()),
                Style::new().opacity(1.0).y(0.0).scale(1.0),
                0.5,
            )
            .stagger(Stagger::each(0.1))
            .ease(Ease::back_out(1.7)),
            Position::Relative(-0.3),
        )
}

pub fn profile_tilt(scale: f64, rotation: f64) -> Tween {
    Tween::to(
        Target::one(".profile-image"),
        Style::new().scale(scale).rotation(rotation),
        0.5,
    )
    .ease(Ease::POWER2_OUT)
}

// projects

pub fn projects_reveal() -> Timeline {
    Timeline::new()
        .set(Target::one(".projects-title"), Style::new().opacity(0.0).y(50.0))
        .set(
            Target::many(".project-card", PROJECTS.len()),
            Style::new().opacity(0.0).y(100.0).scale(0.8),
        )
        .to(Tween::to(
            Target::one(".projects-title"),
            Style::new().opacity(1.0).y(0.0),
            1.0,
        )
        .ease(Ease::POWER2_OUT))
        .add(
            Tween::to(
                Target::many(".project-card", PROJECTS.len()),
                Style::new().opacity(1.0).y(0.0).scale(1.0),
                0.8,
            )
            .stagger(Stagger::each(0.15))
            .ease(Ease::POWER2_OUT),
            Position::Relative(-0.5),
        )
}

/// Kept out of [`projects_reveal`], which would keep resetting the glows while it plays.
pub fn card_glows_hidden() -> Timeline {
    Timeline::new().set(
        Target::many(".card-glow", PROJECTS.len()),
        Style::new().opacity(0.0),
    )
}

/// The card at `index` and its glow, raised on hover and settled on leave.
pub fn card_lift(index: usize, raised: bool) -> [Tween; 2] {
    let (card, glow) = if raised {
        (Style::new().y(-10.0).scale(1.02), Style::new().opacity(1.0))
    } else {
        (Style::new().y(0.0).scale(1.0), Style::new().opacity(0.0))
    };
    [
        Tween::to(Target::nth(".project-card", index), card, 0.3).ease(Ease::POWER2_OUT),
        Tween::to(Target::nth(".card-glow", index), glow, 0.3),
    ]
}

// contact

pub fn contact_reveal() -> Timeline {
    Timeline::new()
        .set(Target::one(".contact-title"), Style::new().opacity(0.0).y(50.0))
        .set(Target::one(".contact-form"), Style::new().opacity(0.0).x(-50.0))
        .set(Target::one(".contact-info"), Style::new().opacity(0.0).x(50.0))
        .set(
            Target::many(".form-group", Field::ALL.len()),
            Style::new().opacity(0.0).x(-30.0),
        )
        .set(
            Target::many(".social-icon", SOCIAL_LINKS.len()),
            Style::new().opacity(0.0).scale(0.0),
        )
        .to(Tween::to(
            Target::one(".contact-title"),
            Style::new().opacity(1.0).y(0.0),
            1.0,
        )
        .ease(Ease::POWER2_OUT))
        .add(
            Tween::to(
                Target::one(".contact-form"),
                Style::new().opacity(1.0).x(0.0),
                0.8,
            )
            .ease(Ease::POWER2_OUT),
            Position::Relative(-0.5),
        )
        .add(
            Tween::to(
                Target::one(".contact-info"),
                Style::new().opacity(1.0).x(0.0),
                0.8,
            )
            .ease(Ease::POWER2_OUT),
            Position::Relative(-0.6),
        )
        .add(
            Tween::to(
                Target::many(".form-group", Field::ALL.len()),
                Style::new().opacity(1.0).x(0.0),
                0.6,
            )
            .stagger(Stagger::each(0.1))
            .ease(Ease::POWER2_OUT),
            Position::Relative(-0.4),
        )
        .add(
            Tween::to(
                Target::many(".social-icon", SOCIAL_LINKS.len()),
                Style::new().opacity(1.0).scale(1.0),
                0.5,
            )
            .stagger(Stagger::each(0.1))
            .ease(Ease::back_out(1.7)),
            Position::Relative(-0.3),
        )
}

pub fn submit_pulse() -> Tween {
    Tween::to(Target::one(".submit-btn"), Style::new().scale(0.95), 0.1)
        .yoyo(true)
        .repeat(Repeat::Count(1))
        .ease(Ease::POWER2_IN_OUT)
}

pub fn input_focus(index: usize, scale: f64) -> Tween {
    Tween::to(Target::nth(".glass-input", index), Style::new().scale(scale), 0.3)
        .ease(Ease::POWER2_OUT)
}

pub fn social_wiggle(index: usize, scale: f64, rotation: f64) -> Tween {
    Tween::to(
        Target::nth(".social-icon", index),
        Style::new().scale(scale).rotation(rotation),
        0.3,
    )
    .ease(Ease::POWER2_OUT)
}

// footer

pub fn footer_reveal() -> Timeline {
    Timeline::new()
        .set(Target::one(".footer-content"), Style::new().opacity(0.0).y(60.0))
        .set(
            Target::many(".footer-particle", PARTICLE_COUNT),
            Style::new().opacity(0.0).scale(0.0),
        )
        .to(Tween::to(
            Target::one(".footer-content"),
            Style::new().opacity(1.0).y(0.0),
            1.0,
        )
        .ease(Ease::POWER2_OUT))
        .add(
            Tween::to(
                Target::many(".footer-particle", PARTICLE_COUNT),
                Style::new().opacity(1.0).scale(1.0),
                0.8,
            )
            .stagger(Stagger::each(0.1))
            .ease(Ease::back_out(1.7)),
            Position::Relative(-0.5),
        )
}

pub fn particle_float(order: Vec<usize>) -> Timeline {
    Timeline::new().to(
        Tween::to(
            Target::many(".footer-particle", PARTICLE_COUNT),
            Style::new().y(-10.0),
            2.0,
        )
        .repeat(Repeat::Forever)
        .yoyo(true)
        .ease(Ease::POWER1_IN_OUT)
        .stagger(Stagger::each(0.3).from(StaggerFrom::Order(order))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Frame, Playback, Scene, TriggerRect, Viewport};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn starts(tl: &Timeline) -> Vec<f64> {
        (0..).map_while(|n| tl.start_of(n)).collect()
    }

    fn assert_layout(tl: &Timeline, expected: &[f64], duration: f64) {
        let actual = starts(tl);
        assert_eq!(actual.len(), expected.len(), "{actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!(close(*a, *e), "{actual:?} != {expected:?}");
        }
        assert!(close(tl.duration(), duration), "{}", tl.duration());
    }

    fn style_of(frames: &[Frame], selector: &str, index: usize) -> Style {
        frames
            .iter()
            .rev()
            .find(|f| f.selector == selector && f.index == index)
            .map(|f| f.style)
            .unwrap_or_default()
    }

    struct Offscreen;

    impl Viewport for Offscreen {
        fn height(&self) -> f64 {
            800.0
        }

        fn rect(&self, _selector: &str) -> Option<TriggerRect> {
            None
        }
    }

    #[test]
    fn test_section_layouts() {
        assert_layout(&loader_intro(), &[0.0, 0.3], 0.8);
        assert_layout(&nav_entrance(), &[0.0], 1.5);
        assert_layout(&hero_intro(), &[0.0, 0.6, 1.0, 0.8], 2.3);
        assert_layout(&about_reveal(), &[0.0, 0.5, 1.0], 2.0);
        assert_layout(&projects_reveal(), &[0.0, 0.5], 2.05);
        assert_layout(&contact_reveal(), &[0.0, 0.5, 0.7, 1.1, 1.6], 2.2);
        assert_layout(&footer_reveal(), &[0.0, 0.5], 1.6);
    }

    #[test]
    fn test_hero_intro_starts_hidden_and_settles() {
        let tl = hero_intro();
        let first = tl.sample(0.0);
        assert_eq!(
            style_of(&first, ".hero-headline", 0),
            Style::new().opacity(0.0).y(50.0).blur(10.0)
        );
        assert_eq!(style_of(&first, ".hero-cta", 0).scale, Some(0.8));

        let last = tl.sample(tl.duration());
        assert_eq!(
            style_of(&last, ".hero-headline", 0),
            Style::new().opacity(1.0).y(0.0).blur(0.0)
        );
        assert_eq!(
            style_of(&last, ".spline-container", 0),
            Style::new().opacity(1.0).x(0.0)
        );
    }

    #[test]
    fn test_project_cards_reveal_in_order() {
        let tl = projects_reveal();
        let frames = tl.sample(0.9);
        let first = style_of(&frames, ".project-card", 0).opacity.unwrap_or(0.0);
        let last = style_of(&frames, ".project-card", PROJECTS.len() - 1)
            .opacity
            .unwrap_or(0.0);
        assert!(first > last, "{first} <= {last}");
    }

    #[test]
    fn test_reveal_triggers_parse() {
        assert!(SECTION_REVEAL.trigger().is_ok());
        assert!(FOOTER_REVEAL.trigger().is_ok());
    }

    #[test]
    fn test_parked_menu_renders_off_screen() {
        assert_eq!(
            menu_parked().inline(),
            "transform: translateX(100%) translate3d(0px, 0px, 0px) rotate(0deg) scale(1)"
        );
        let frames = menu_parking().sample(0.0);
        assert_eq!(style_of(&frames, ".mobile-menu", 0), menu_parked());
        assert_eq!(progress_empty().inline(), "width: 0%");
    }

    #[test]
    fn test_menu_opens_from_parked_position() {
        let mut scene = Scene::new();
        scene.add(Playback::paused(menu_parking()));
        scene.tick(0.0, &Offscreen);
        for tween in menu_slide(MenuState::Open) {
            scene.tween_to(tween);
        }

        let tick = scene.tick(0.1, &Offscreen);
        let moving = style_of(&tick.frames, ".mobile-menu", 0)
            .x_percent
            .unwrap_or_default();
        assert!(moving > 0.0 && moving < 100.0, "{moving}");
        // items wait for their delay
        assert_eq!(style_of(&tick.frames, ".mobile-menu-item", 0).opacity, Some(0.0));

        scene.tick(1.0, &Offscreen);
        assert_eq!(
            scene.applied(".mobile-menu", 0).and_then(|s| s.x_percent),
            Some(0.0)
        );
        assert_eq!(
            scene
                .applied(".mobile-menu-item", SectionId::ALL.len() - 1)
                .and_then(|s| s.opacity),
            Some(1.0)
        );

        for tween in menu_slide(MenuState::Closed) {
            scene.tween_to(tween);
        }
        scene.tick(1.0, &Offscreen);
        assert_eq!(
            scene.applied(".mobile-menu", 0).and_then(|s| s.x_percent),
            Some(100.0)
        );
    }

    #[test]
    fn test_card_lift_addresses_one_card() {
        let [card, glow] = card_lift(4, true);
        assert_eq!(card.target, Target::nth(".project-card", 4));
        assert_eq!(glow.target, Target::nth(".card-glow", 4));
        assert_eq!(card.to, Style::new().y(-10.0).scale(1.02));
        let [card, glow] = card_lift(4, false);
        assert_eq!(card.to, Style::new().y(0.0).scale(1.0));
        assert_eq!(glow.to.opacity, Some(0.0));
    }

    #[test]
    fn test_submit_pulse_returns_to_rest() {
        let pulse = submit_pulse();
        assert!(close(pulse.total_duration(), 0.2));
        assert!(close(pulse.progress(0, 0.2), 0.0));
    }
}
