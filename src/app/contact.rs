use leptos::{ev::SubmitEvent, prelude::*};

use crate::{
    catalog::{SectionId, PROFILE},
    contact::{ContactDraft, ContactField},
};

use super::acknowledge;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=SectionId::Contact.as_str()>
            <h2 class="section-title">"Let's Connect"</h2>
            <p class="section-subtitle">"Have a project in mind or just want to chat?"</p>
            <div class="contact-box">
                <div>
                    <h3>"Contact Information"</h3>
                    <p class="contact-intro">
                        "Feel free to reach out. I'm always open to discussing new projects, creative ideas or opportunities to be part of your visions."
                    </p>
                    <ContactDetail icon="✉" caption="Email me at" value=PROFILE.email />
                    <ContactDetail icon="⌖" caption="Location" value=PROFILE.location />
                </div>
                <ContactForm />
            </div>
        </section>
    }
}

#[component]
fn ContactDetail(icon: &'static str, caption: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="contact-detail">
            <div class="theme-toggle contact-icon">
                {icon}
            </div>
            <div>
                <p class="contact-caption">{caption}</p>
                <p class="contact-value">{value}</p>
            </div>
        </div>
    }
}

/// The inputs are controlled by a [`ContactDraft`]; required-field checks are
/// left to the browser.
#[component]
fn ContactForm() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());
    let value_of = move |field: ContactField| move || draft.with(|d| d.get(field).to_string());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some((_, ack)) = draft.try_update(|d| d.submit(&PROFILE)) {
            acknowledge(&ack);
        }
    };

    view! {
        <form on:submit=on_submit>
            <div class="form-group">
                <label for="contact-name">"Full Name"</label>
                <input
                    id="contact-name"
                    type="text"
                    placeholder="John Doe"
                    required
                    prop:value=value_of(ContactField::Name)
                    on:input=move |ev| {
                        draft.update(|d| d.set(ContactField::Name, event_target_value(&ev)))
                    }
                />
            </div>
            <div class="form-group">
                <label for="contact-email">"Email Address"</label>
                <input
                    id="contact-email"
                    type="email"
                    placeholder="john@example.com"
                    required
                    prop:value=value_of(ContactField::Email)
                    on:input=move |ev| {
                        draft.update(|d| d.set(ContactField::Email, event_target_value(&ev)))
                    }
                />
            </div>
            <div class="form-group">
                <label for="contact-message">"Your Message"</label>
                <textarea
                    id="contact-message"
                    placeholder=format!("Hi {}, I'd like to talk about...", PROFILE.first_name)
                    required
                    prop:value=value_of(ContactField::Message)
                    on:input=move |ev| {
                        draft.update(|d| d.set(ContactField::Message, event_target_value(&ev)))
                    }
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary btn-block">
                "Send Message"
            </button>
        </form>
    }
}
