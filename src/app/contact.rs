use leptos::{ev::SubmitEvent, prelude::*};

use super::motion::{on_scroll, use_motion, use_playback};
use super::Glyph;
use crate::choreography::{contact_reveal, input_focus, social_wiggle, submit_pulse, SECTION_REVEAL};
use crate::contact::{ContactForm, Field, FormError};
use crate::content::{Icon, SOCIAL_LINKS};
use crate::nav::SectionId;

#[component]
pub fn ContactSection() -> impl IntoView {
    let motion = use_motion();
    let form = RwSignal::new(ContactForm::default());
    let (error, set_error) = signal(None::<FormError>);

    use_playback(|| on_scroll(contact_reveal(), ".contact-section", SECTION_REVEAL));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        motion.tween_to(submit_pulse());
        match form.try_update(ContactForm::submit) {
            Some(Ok(payload)) => {
                set_error.set(None);
                match serde_json::to_string(&payload) {
                    Ok(json) => log::info!("Form submitted: {json}"),
                    Err(e) => log::error!("couldn't serialize form: {e}"),
                }
            }
            Some(Err(e)) => set_error.set(Some(e)),
            None => {}
        }
    };

    let wiggle_icon = move |index: usize, scale: f64, rotation: f64| {
        motion.tween_to(social_wiggle(index, scale, rotation));
    };

    view! {
        <section id=SectionId::Contact.id() class="contact-section min-h-screen py-20">
            <div class="max-w-7xl mx-auto px-6">
                <div class="contact-title text-center mb-16">
                    <h2 class="text-5xl md:text-6xl font-light mb-6">
                        "Let's " <span class="gradient-text">"Connect"</span>
                    </h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        "Ready to bring your ideas to life? Let's discuss your next project and create something amazing together."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-16 items-start">
                    <div class="contact-form">
                        <form on:submit=on_submit class="space-y-6">
                            {Field::ALL
                                .into_iter()
                                .enumerate()
                                .map(|(index, field)| {
                                    view! {
                                        <FormGroup
                                            field=field
                                            index=index
                                            form=form
                                            set_error=set_error
                                        />
                                    }
                                })
                                .collect_view()}

                            {move || {
                                error
                                    .get()
                                    .map(|e| {
                                        view! {
                                            <p class="form-error text-sm text-destructive" role="alert">
                                                {e.to_string()}
                                            </p>
                                        }
                                    })
                            }}

                            <button
                                type="submit"
                                class="submit-btn glow-button w-full py-3 text-lg font-medium inline-flex items-center justify-center gap-3 group"
                            >
                                "Send Message"
                                <Glyph
                                    icon=Icon::PaperPlane
                                    class="transition-transform group-hover:translate-x-1 group-hover:-translate-y-1"
                                />
                            </button>
                        </form>
                    </div>

                    <div class="contact-info space-y-8">
                        <div class="glass-card p-8">
                            <h3 class="text-2xl font-light text-primary mb-6">"Get in Touch"</h3>
                            <div class="space-y-4 text-muted-foreground">
                                <p class="leading-relaxed">
                                    "I'm always excited to work on new projects and collaborate with amazing people. Whether you have a specific project in mind or just want to say hello, feel free to reach out!"
                                </p>
                                <p class="leading-relaxed">
                                    "I typically respond within 24 hours and would love to discuss how we can bring your vision to life."
                                </p>
                            </div>
                        </div>

                        <div>
                            <h4 class="text-lg font-medium text-foreground mb-4">
                                "Connect with me"
                            </h4>
                            <div class="flex space-x-4">
                                {SOCIAL_LINKS
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, link)| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.name
                                                on:mouseenter=move |_| wiggle_icon(index, 1.1, 5.0)
                                                on:mouseleave=move |_| wiggle_icon(index, 1.0, 0.0)
                                                class="social-icon w-12 h-12 glass-card flex items-center justify-center text-muted-foreground hover:text-primary transition-colors"
                                            >
                                                <Glyph icon=link.icon class="text-2xl" />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Editing the control clears the form error.
#[component]
fn FormGroup(
    field: Field,
    index: usize,
    form: RwSignal<ContactForm>,
    set_error: WriteSignal<Option<FormError>>,
) -> impl IntoView {
    let motion = use_motion();

    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|f| f.set(field, event_target_value(&ev)));
        set_error.set(None);
    };
    let grow = move |scale: f64| motion.tween_to(input_focus(index, scale));

    let input_type = if field == Field::Email { "email" } else { "text" };
    let control = match field {
        Field::Message => view! {
            <textarea
                id=field.key()
                name=field.key()
                placeholder=field.placeholder()
                required=true
                prop:value=value
                on:input=on_input
                on:focus=move |_| grow(1.02)
                on:blur=move |_| grow(1.0)
                class="glass-input w-full min-h-[120px] resize-none"
            ></textarea>
        }
        .into_any(),
        Field::Name | Field::Email => view! {
            <input
                id=field.key()
                name=field.key()
                type=input_type
                placeholder=field.placeholder()
                required=true
                prop:value=value
                on:input=on_input
                on:focus=move |_| grow(1.02)
                on:blur=move |_| grow(1.0)
                class="glass-input w-full"
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=field.key() class="text-sm font-medium text-foreground mb-2 block">
                {field.label()}
            </label>
            {control}
        </div>
    }
}
