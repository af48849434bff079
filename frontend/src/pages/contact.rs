use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::page::{use_page, PageHero};
use crate::config;
use crate::contact_form::{message_for, ContactField, ContactForm, FieldError, ServiceKind};
use crate::content;
use crate::motion::reveal::{Reveal, RevealEffect, RevealTiming, Side};

struct InfoItem {
    title: &'static str,
    lines: &'static [&'static str],
    /// URL scheme and target when the lines are clickable.
    link: Option<(&'static str, &'static str)>,
}

const INFO_ITEMS: &[InfoItem] = &[
    InfoItem {
        title: "office",
        lines: config::OFFICE_ADDRESS,
        link: None,
    },
    InfoItem {
        title: "email",
        lines: &[config::EMAIL],
        link: Some(("mailto", config::EMAIL)),
    },
    InfoItem {
        title: "phone",
        lines: &[config::PHONE_DISPLAY],
        link: Some(("tel", config::PHONE_TEL)),
    },
];

#[derive(Properties, PartialEq)]
struct FieldMessageProps {
    errors: Vec<FieldError>,
    field: ContactField,
}

#[function_component(FieldMessage)]
fn field_message(props: &FieldMessageProps) -> Html {
    match message_for(&props.errors, props.field) {
        Some(message) => html! { <span class="field-error">{ message }</span> },
        None => html! {},
    }
}

#[function_component(ContactFormView)]
fn contact_form_view() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let submitted = use_state(|| false);

    let update = |field: ContactField| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        }
    };

    let on_name = {
        let set = update(ContactField::Name);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_email = {
        let set = update(ContactField::Email);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_phone = {
        let set = update(ContactField::Phone);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_service = {
        let set = update(ContactField::Service);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set(select.value());
        })
    };
    let on_message = {
        let set = update(ContactField::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            set(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(()) => {
                    match serde_json::to_string(&*form) {
                        Ok(json) => info!("contact request: {}", json),
                        Err(err) => warn!("contact request not serialized: {}", err),
                    }
                    form.set(ContactForm::default());
                    errors.set(Vec::new());
                    submitted.set(true);
                }
                Err(found) => {
                    submitted.set(false);
                    errors.set(found);
                }
            }
        })
    };

    let selected = form.service.map(|kind| kind.value()).unwrap_or("");

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate=true>
            if *submitted {
                <div class="form-success">
                    {"Thank you! We received your message and will get back to you shortly."}
                </div>
            }
            <div class="form-row">
                <label class="form-field">
                    <span>{ ContactField::Name.label() }</span>
                    <input type="text" value={form.name.clone()} oninput={on_name} />
                    <FieldMessage errors={(*errors).clone()} field={ContactField::Name} />
                </label>
                <label class="form-field">
                    <span>{ ContactField::Email.label() }</span>
                    <input type="email" value={form.email.clone()} oninput={on_email} />
                    <FieldMessage errors={(*errors).clone()} field={ContactField::Email} />
                </label>
            </div>
            <div class="form-row">
                <label class="form-field">
                    <span>{ ContactField::Phone.label() }</span>
                    <input type="tel" value={form.phone.clone()} oninput={on_phone} />
                </label>
                <label class="form-field">
                    <span>{ ContactField::Service.label() }</span>
                    <select onchange={on_service}>
                        <option value="" selected={selected.is_empty()}>{"Select a service"}</option>
                        { for ServiceKind::ALL.iter().map(|kind| html! {
                            <option key={kind.value()} value={kind.value()} selected={selected == kind.value()}>
                                { kind.label() }
                            </option>
                        }) }
                    </select>
                </label>
            </div>
            <label class="form-field">
                <span>{ ContactField::Message.label() }</span>
                <textarea rows="6" value={form.message.clone()} oninput={on_message} />
                <FieldMessage errors={(*errors).clone()} field={ContactField::Message} />
            </label>
            <button type="submit" class="form-submit">{"send message"}</button>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_page("Contact");

    html! {
        <div class="contact-page">
            <PageHero
                title="CONTACT"
                tagline="questions, quotes or a burst pipe at midnight: we're one call away."
                images={content::CONTACT_HERO}
            />

            <section class="contact-info-section">
                { for INFO_ITEMS.iter().enumerate().map(|(i, item)| html! {
                    <Reveal key={item.title} timing={RevealTiming::new(600).staggered(i, 100)}>
                        <div class="contact-info-card">
                            <h3>{ item.title }</h3>
                            { for item.lines.iter().map(|line| match item.link {
                                Some((scheme, target)) => html! {
                                    <a href={format!("{}:{}", scheme, target)}>{ *line }</a>
                                },
                                None => html! { <p>{ *line }</p> },
                            }) }
                        </div>
                    </Reveal>
                }) }
            </section>

            <section class="contact-form-section">
                <Reveal class="contact-form-intro" effect={RevealEffect::SlideFrom(Side::Left, 60)}>
                    <h2 class="section-title">{"send us a message"}</h2>
                    <p>{"Fill out the form and we'll get back to you within one business day."}</p>
                </Reveal>
                <Reveal class="contact-form-wrapper" effect={RevealEffect::SlideFrom(Side::Right, 60)}>
                    <ContactFormView />
                </Reveal>
            </section>

            <section class="map-section">
                <Reveal effect={RevealEffect::FadeIn} timing={RevealTiming::new(1000)}>
                    <iframe
                        class="map-frame"
                        src={config::MAP_EMBED_URL}
                        title="Office location"
                        loading="lazy"
                    ></iframe>
                </Reveal>
            </section>

            <section class="emergency-section">
                <Reveal effect={RevealEffect::ZoomOut(10)}>
                    <div class="emergency-card">
                        <h2>{"plumbing emergency?"}</h2>
                        <p>{"Burst pipes and flooding can't wait. Our emergency line is staffed around the clock."}</p>
                        <a href={format!("tel:{}", config::PHONE_TEL)} class="emergency-button">
                            { format!("call {}", config::PHONE_DISPLAY) }
                        </a>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}
