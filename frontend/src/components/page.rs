use log::warn;
use yew::prelude::*;
use yew_hooks::use_title;
use yew_router::prelude::*;

use crate::config;
use crate::motion::reveal::{Reveal, RevealEffect, RevealTiming};
use crate::Route;

pub fn page_title(page: &str) -> String {
    if page.is_empty() {
        config::BUSINESS_NAME.to_string()
    } else {
        format!("{} | {}", page, config::BUSINESS_NAME)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    /// Element id taken from the URL fragment.
    Anchor(String),
}

/// Where a freshly mounted page should land, given `location.hash`.
pub fn scroll_target(hash: &str) -> ScrollTarget {
    match hash.trim_start_matches('#') {
        "" => ScrollTarget::Top,
        id => ScrollTarget::Anchor(id.to_string()),
    }
}

fn scroll_on_mount(window: &web_sys::Window) {
    let hash = window.location().hash().unwrap_or_default();
    if let ScrollTarget::Anchor(id) = scroll_target(&hash) {
        let element = window
            .document()
            .and_then(|document| document.get_element_by_id(&id));
        match element {
            Some(element) => {
                element.scroll_into_view();
                return;
            }
            None => warn!("no section #{} on this page", id),
        }
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

/// Per-page mount work: document title, then the linked section or the top of the page.
#[hook]
pub fn use_page(page: &'static str) {
    use_title(page_title(page));
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                scroll_on_mount(&window);
            }
            || ()
        },
        page,
    );
}

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: &'static str,
    pub tagline: &'static str,
    pub images: &'static [&'static str],
}

/// Rounded image card with the page title underneath.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <>
            <section class="hero-section">
                <div class="hero-card">
                    { for props.images.iter().enumerate().map(|(i, image)| html! {
                        <Reveal
                            key={i}
                            class="hero-image"
                            effect={RevealEffect::ZoomOut(5)}
                            timing={RevealTiming::new(1000).staggered(i, 100)}
                            on_mount={true}
                        >
                            <img src={*image} alt={format!("{} {}", props.title, i + 1)} />
                        </Reveal>
                    }) }
                    <div class="hero-overlay"></div>
                </div>
            </section>
            <section class="title-section">
                <Reveal timing={RevealTiming::new(800).delayed(300)} on_mount={true}>
                    <h1 class="hero-title">{ props.title }</h1>
                </Reveal>
                <Reveal effect={RevealEffect::FadeUp(30)} timing={RevealTiming::new(600).delayed(500)} on_mount={true}>
                    <p class="hero-description">{ props.tagline }</p>
                </Reveal>
            </section>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    pub heading: &'static str,
    pub text: &'static str,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    html! {
        <section class="cta-section">
            <Reveal effect={RevealEffect::FadeUp(60)}>
                <div class="cta-content">
                    <h2>{ props.heading }</h2>
                    <p>{ props.text }</p>
                    <div class="cta-actions">
                        <Link<Route> to={Route::Contact} classes="cta-button">
                            {"get in touch"}
                        </Link<Route>>
                        <a href={format!("tel:{}", config::PHONE_TEL)} class="cta-phone">
                            { config::PHONE_DISPLAY }
                        </a>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_carry_business_name() {
        assert_eq!(page_title("Heating"), "Heating | AQUAFIX");
        assert_eq!(page_title(""), "AQUAFIX");
    }

    #[test]
    fn fragment_selects_anchor_otherwise_top() {
        assert_eq!(scroll_target(""), ScrollTarget::Top);
        assert_eq!(scroll_target("#"), ScrollTarget::Top);
        assert_eq!(scroll_target("#team"), ScrollTarget::Anchor("team".into()));
    }
}
