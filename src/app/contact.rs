use leptos::{ev, prelude::*};

use crate::contact::{self, ContactError, ContactForm, Field, FieldErrors, FormStatus};
use crate::portfolio::PROFILE;

use super::{
    reveal::{fade_up, use_reveal, Reveal},
    SectionTitle,
};

#[component]
pub fn Contact() -> impl IntoView {
    let Reveal {
        node_ref,
        is_visible,
    } = use_reveal();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let status = RwSignal::new(FormStatus::Idle);

    let send = Action::new_local(move |form: &ContactForm| {
        let mut form = form.clone();
        async move {
            let next = match contact::deliver(&mut form).await {
                Ok(delivery) => {
                    name.try_set(form.name);
                    email.try_set(form.email);
                    message.try_set(form.message);
                    FormStatus::Success(delivery)
                }
                Err(ContactError::Invalid(field_errors)) => {
                    errors.try_set(field_errors);
                    FormStatus::Idle
                }
                Err(err) => FormStatus::Failed(err.to_string()),
            };
            status.try_set(next);
        }
    });

    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();
        if status.with_untracked(FormStatus::is_sending) {
            return;
        }
        errors.set(FieldErrors::default());
        status.set(FormStatus::Sending);
        send.dispatch(ContactForm::new(
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked(),
        ));
    };

    let details = [
        ("✉", "Email", PROFILE.email, Some(format!("mailto:{}", PROFILE.email)), "#6C63FF"),
        ("☎", "Phone", PROFILE.phone, Some(PROFILE.phone_href.to_string()), "#2EC4B6"),
        ("⌖", "Location", PROFILE.location, None, "#FFD700"),
    ];

    view! {
        <section
            id="contact"
            node_ref=node_ref
            class=move || {
                format!(
                    "section-padding relative transition-opacity duration-1000 {}",
                    if is_visible.get() { "opacity-100" } else { "opacity-0" },
                )
            }
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Get in Touch" />
                <div class=move || {
                    format!(
                        "max-w-5xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-8 transition-all duration-1000 ease-out {}",
                        fade_up(is_visible.get()),
                    )
                }>
                    <div class="space-y-6 p-8 rounded-2xl bg-slate-800/40 backdrop-blur-xl border border-slate-700/50 shadow-2xl">
                        <div class="mb-8">
                            <h3 class="text-2xl font-semibold mb-4">"Let's Connect"</h3>
                            <p class="leading-relaxed text-slate-500 dark:text-slate-300">
                                "I'm always interested in new opportunities and exciting projects. Feel free to reach out if you'd like to collaborate or just say hello!"
                            </p>
                        </div>
                        {details
                            .into_iter()
                            .map(|(glyph, label, value, href, color)| {
                                view! {
                                    <div class="flex items-center gap-4 p-4 rounded-xl bg-slate-700/30 border border-slate-600/30">
                                        <div
                                            class="p-3 rounded-full border"
                                            style=format!("color: {color}; border-color: {color}4d")
                                        >
                                            {glyph}
                                        </div>
                                        <div class="overflow-hidden">
                                            <p class="text-sm text-slate-400 mb-1">{label}</p>
                                            {match href {
                                                Some(href) => {
                                                    view! {
                                                        <a href=href class="font-medium break-all hover:text-[#6C63FF] transition-colors">
                                                            {value}
                                                        </a>
                                                    }
                                                        .into_any()
                                                }
                                                None => view! { <span class="font-medium">{value}</span> }.into_any(),
                                            }}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="mt-8 p-4 rounded-xl bg-slate-700/40 border border-slate-600/40 text-sm">
                            <span class="text-[#6C63FF] font-medium">"Quick Response: "</span>
                            "I typically respond within 24 hours."
                        </div>
                    </div>

                    <form
                        on:submit=on_submit
                        novalidate=true
                        class="space-y-5 p-8 rounded-2xl bg-slate-800/40 backdrop-blur-xl border border-slate-700/50 shadow-2xl"
                    >
                        {move || {
                            status
                                .with(FormStatus::banner)
                                .map(|(ok, text)| {
                                    view! {
                                        <div
                                            role="status"
                                            class=if ok {
                                                "flex justify-between gap-4 p-4 rounded-xl bg-green-500/15 border border-green-500/40 text-green-400"
                                            } else {
                                                "flex justify-between gap-4 p-4 rounded-xl bg-red-500/15 border border-red-500/40 text-red-400"
                                            }
                                        >
                                            <span>{text}</span>
                                            <button
                                                type="button"
                                                aria-label="Dismiss"
                                                on:click=move |_| status.set(FormStatus::Idle)
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                    }
                                })
                        }}
                        <FormField label="Name" id="contact-name" field=Field::Name errors>
                            <input
                                id="contact-name"
                                type="text"
                                placeholder="Your name"
                                class=INPUT_CLASS
                                prop:value=name
                                on:input=move |ev| {
                                    name.set(event_target_value(&ev));
                                    errors.update(|e| e.clear(Field::Name));
                                }
                            />
                        </FormField>
                        <FormField label="Email" id="contact-email" field=Field::Email errors>
                            <input
                                id="contact-email"
                                type="email"
                                placeholder="you@example.com"
                                class=INPUT_CLASS
                                prop:value=email
                                on:input=move |ev| {
                                    email.set(event_target_value(&ev));
                                    errors.update(|e| e.clear(Field::Email));
                                }
                            />
                        </FormField>
                        <FormField label="Message" id="contact-message" field=Field::Message errors>
                            <textarea
                                id="contact-message"
                                rows="5"
                                placeholder="What would you like to talk about?"
                                class=INPUT_CLASS
                                prop:value=message
                                on:input=move |ev| {
                                    message.set(event_target_value(&ev));
                                    errors.update(|e| e.clear(Field::Message));
                                }
                            ></textarea>
                        </FormField>
                        <button
                            type="submit"
                            disabled=move || status.with(FormStatus::is_sending)
                            class="w-full py-3 px-6 rounded-full font-semibold text-white bg-gradient-to-r from-[#6C63FF] to-[#2EC4B6] hover:shadow-lg transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed"
                        >
                            {move || {
                                if status.with(FormStatus::is_sending) { "Sending..." } else { "Send Message" }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-slate-900/40 border border-slate-600/50 focus:border-[#6C63FF] focus:outline-none transition-colors";

#[component]
fn FormField(
    label: &'static str,
    id: &'static str,
    field: Field,
    errors: RwSignal<FieldErrors>,
    children: Children,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-2">{label}</label>
            {children()}
            {move || {
                errors
                    .with(|e| e.get(field))
                    .map(|msg| view! { <p class="mt-1 text-sm text-red-400">{msg}</p> })
            }}
        </div>
    }
}
