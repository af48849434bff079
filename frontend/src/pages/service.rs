use yew::prelude::*;

use crate::components::page::{use_page, CtaSection, PageHero};
use crate::content::ServiceContent;
use crate::motion::reveal::{Reveal, RevealEffect, RevealTiming, Side};

#[derive(Properties, PartialEq)]
pub struct ServicePageProps {
    pub content: ServiceContent,
}

/// Shared layout of the sanitary, heating, drainage and solar pages.
#[function_component(ServicePage)]
pub fn service_page(props: &ServicePageProps) -> Html {
    let content = props.content;
    use_page(content.title);

    html! {
        <div class="service-page">
            <PageHero title={content.title} tagline={content.tagline} images={content.hero_images} />

            <section class="content-section">
                <Reveal class="content-image" effect={RevealEffect::SlideFrom(Side::Left, 60)}>
                    <img src={content.feature_image} alt={content.title} loading="lazy" />
                </Reveal>
                <Reveal class="content-text" effect={RevealEffect::SlideFrom(Side::Right, 60)}>
                    <p class="content-intro">{ content.intro }</p>
                    <ul class="features-section">
                        { for content.features.iter().enumerate().map(|(i, feature)| html! {
                            <li key={*feature} class="feature-item">
                                <Reveal effect={RevealEffect::FadeUp(30)} timing={RevealTiming::new(500).staggered(i, 100)}>
                                    <span class="feature-check">{"✓"}</span>
                                    <span>{ *feature }</span>
                                </Reveal>
                            </li>
                        }) }
                    </ul>
                    <p class="content-closing">{ content.closing }</p>
                </Reveal>
            </section>

            <section class="offerings-section">
                <Reveal>
                    <h2 class="section-title">{ content.offerings_heading }</h2>
                </Reveal>
                <div class="offerings-grid">
                    { for content.offerings.iter().enumerate().map(|(i, offering)| html! {
                        <Reveal key={offering.title} timing={RevealTiming::new(700).staggered(i, 150)}>
                            <div class="offering-card">
                                <img src={offering.image} alt={offering.title} loading="lazy" />
                                <h3>{ offering.title }</h3>
                                <p>{ offering.description }</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <CtaSection
                heading="let's talk about your project"
                text="Book a visit and get a clear quote before any work starts."
            />
        </div>
    }
}
