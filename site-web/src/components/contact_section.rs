//! Contact form and office details. Submissions are created through the
//! content store's `ContactInquiry` entity.

use leptos::prelude::*;
use web_sys::SubmitEvent;

use shared::dto::content::{ContactInquiry, InquiryType};

use crate::services::content::ContentStore;

#[component]
pub fn ContactSection() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (inquiry_type, set_inquiry_type) = signal(InquiryType::General);
    let (sending, set_sending) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let inquiry = ContactInquiry {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: Some(phone.get_untracked()).filter(|p| !p.trim().is_empty()),
            message: message.get_untracked(),
            inquiry_type: inquiry_type.get_untracked(),
        };
        if inquiry.name.trim().is_empty()
            || inquiry.email.trim().is_empty()
            || inquiry.message.trim().is_empty()
        {
            return;
        }
        set_sending.set(true);
        leptos::task::spawn_local(async move {
            match ContentStore::new().submit_inquiry(&inquiry).await {
                Ok(()) => set_submitted.set(true),
                Err(err) => log::error!("contact inquiry failed: {err}"),
            }
            set_sending.set(false);
        });
    };

    view! {
        <section id="contact" class="section section-light">
            <div class="section-inner contact-grid">
                <div class="contact-info">
                    <span class="kicker">"Get in Touch"</span>
                    <h2 class="section-title section-title-dark">
                        "Let's build something " <em>"together"</em>
                    </h2>
                    <p class="muted">
                        "Whether you're exploring an investment, a partnership, or a future \
                         residence, we'd love to hear from you."
                    </p>
                    <div class="contact-details">
                        <div class="contact-detail">
                            <span class="contact-detail-label">"Email"</span>
                            <a href="mailto:hello@lotusbrothers.com" class="contact-detail-value">
                                "hello@lotusbrothers.com"
                            </a>
                        </div>
                        <div class="contact-detail">
                            <span class="contact-detail-label">"Phone"</span>
                            <span class="contact-detail-value">"+1 (512) 555-0180"</span>
                        </div>
                        <div class="contact-detail">
                            <span class="contact-detail-label">"Office"</span>
                            <span class="contact-detail-value">
                                "123 Innovation Drive, Austin, TX 78701"
                            </span>
                        </div>
                    </div>
                </div>

                <Show
                    when=move || !submitted.get()
                    fallback=|| view! {
                        <div class="contact-thanks">
                            <h3>"Thank you."</h3>
                            <p class="muted">
                                "We've received your message and will be in touch within two \
                                 business days."
                            </p>
                        </div>
                    }
                >
                    <form class="contact-form" on:submit=on_submit>
                        <div class="form-row">
                            <label class="form-field">
                                <span>"Name"</span>
                                <input
                                    type="text"
                                    prop:value=name
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                <span>"Email"</span>
                                <input
                                    type="email"
                                    prop:value=email
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <div class="form-row">
                            <label class="form-field">
                                <span>"Phone (optional)"</span>
                                <input
                                    type="tel"
                                    prop:value=phone
                                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                <span>"I'm interested in"</span>
                                <select on:change=move |ev| {
                                    if let Some(ty) = InquiryType::parse(&event_target_value(&ev)) {
                                        set_inquiry_type.set(ty);
                                    }
                                }>
                                    {InquiryType::ALL
                                        .iter()
                                        .map(|ty| view! {
                                            <option value=ty.as_str()>{ty.label()}</option>
                                        })
                                        .collect_view()}
                                </select>
                            </label>
                        </div>
                        <label class="form-field">
                            <span>"Message"</span>
                            <textarea
                                rows="5"
                                prop:value=message
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button type="submit" class="btn btn-primary" disabled=sending>
                            {move || if sending.get() { "Sending…" } else { "Send Message" }}
                        </button>
                    </form>
                </Show>
            </div>
        </section>
    }
}
