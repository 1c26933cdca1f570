use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::components::layout::Layout;
use crate::components::page_hero::PageHero;
use crate::content::hooks::use_content;
use crate::content::model::ContactInfo;
use crate::reveal::{Preset, ScrollReveal};

const SEND_DELAY_MS: u32 = 800;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// First problem found, in form order.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Please tell us your name.");
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email address.");
        }
        if self.message.trim().is_empty() {
            return Err("Please write a message.");
        }
        Ok(())
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let contact = use_content::<ContactInfo>();
    let form = use_state(ContactMessage::default);
    let error = use_state(|| None::<&'static str>);
    let sent = use_state(|| false);
    let is_sending = use_state(|| false);

    let update = |apply: fn(&mut ContactMessage, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };
    let on_name = {
        let set = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_message = {
        let set = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let (form, error, sent, is_sending) = (form.clone(), error.clone(), sent.clone(), is_sending.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(problem) = form.validate() {
                error.set(Some(problem));
                return;
            }
            error.set(None);
            is_sending.set(true);
            let (form, sent, is_sending) = (form.clone(), sent.clone(), is_sending.clone());
            spawn_local(async move {
                TimeoutFuture::new(SEND_DELAY_MS).await;
                info!("Contact message from {} queued", form.email);
                form.set(ContactMessage::default());
                is_sending.set(false);
                sent.set(true);
            });
        })
    };

    html! {
        <Layout>
            <style>
            {r#"
                .contact-grid { display: grid; grid-template-columns: 1fr 1.5fr; gap: 3rem; align-items: start; }
                .contact-details { display: flex; flex-direction: column; gap: 1rem; }
                .contact-detail { display: flex; align-items: center; gap: 1rem; padding: 1.25rem; }
                .contact-detail .feature-icon { margin: 0; }
                .contact-detail p { margin: 0; }
                .contact-form { padding: 2rem; }
                .contact-form textarea { min-height: 8rem; resize: vertical; font-family: inherit; }
                .contact-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 12px;
                    background: rgba(59, 130, 246, 0.1);
                    color: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                @media (max-width: 900px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
            "#}
            </style>
            <PageHero
                badge="Contact"
                title="Get in"
                highlight="Touch"
                description="Have a project in mind or a question about the platform? Our team usually replies within one business day."
            />
            <section class="section" style="padding-top: 0;">
                <div class="container contact-grid">
                    <ScrollReveal preset={Preset::SlideRight} class="contact-details">
                        { for [
                            (IconName::Mail, "Email", contact.email.clone()),
                            (IconName::Phone, "Phone", contact.phone.clone()),
                            (IconName::MapPin, "Office", contact.address.clone()),
                        ].into_iter().map(|(icon, label, value)| html! {
                            <div key={label} class="card contact-detail">
                                <span class="contact-icon"><Icon name={icon} /></span>
                                <div>
                                    <p class="muted">{label}</p>
                                    <p>{value}</p>
                                </div>
                            </div>
                        }) }
                    </ScrollReveal>

                    <ScrollReveal preset={Preset::SlideLeft} delay={0.1}>
                        <form class="card contact-form" {onsubmit}>
                            <div class="form-field">
                                <label for="contact-name">{"Name"}</label>
                                <input id="contact-name" type="text" value={form.name.clone()} oninput={on_name} />
                            </div>
                            <div class="form-field">
                                <label for="contact-email">{"Email"}</label>
                                <input id="contact-email" type="email" value={form.email.clone()} oninput={on_email} />
                            </div>
                            <div class="form-field">
                                <label for="contact-message">{"Message"}</label>
                                <textarea id="contact-message" value={form.message.clone()} oninput={on_message} />
                            </div>
                            if let Some(problem) = *error {
                                <div class="error-message">{problem}</div>
                            } else if *sent {
                                <div class="success-message">{"Thanks! We'll be in touch shortly."}</div>
                            }
                            <button type="submit" class="btn btn-hero btn-lg btn-block" disabled={*is_sending}>
                                { if *is_sending { "Sending..." } else { "Send Message" } }
                            </button>
                        </form>
                    </ScrollReveal>
                </div>
            </section>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, message: &str) -> ContactMessage {
        ContactMessage { name: name.into(), email: email.into(), message: message.into() }
    }

    #[test]
    fn complete_message_is_accepted() {
        assert_eq!(message("Ada", "ada@example.com", "Hello").validate(), Ok(()));
    }

    #[test]
    fn reports_first_missing_field() {
        assert_eq!(message(" ", "nope", "").validate(), Err("Please tell us your name."));
        assert_eq!(message("Ada", "nope", "").validate(), Err("Please enter a valid email address."));
        assert_eq!(message("Ada", "ada@example.com", "  ").validate(), Err("Please write a message."));
    }
}
