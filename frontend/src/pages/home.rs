use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page::{use_page, CtaSection};
use crate::components::stat_counter::StatsBand;
use crate::components::team::TeamSection;
use crate::content;
use crate::motion::reveal::{Reveal, RevealEffect, RevealTiming, Side};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    use_page("");

    html! {
        <div class="home-page">
            <header class="home-hero">
                <img class="home-hero-image" src={content::HOME_HERO} alt="Modern bathroom" />
                <div class="home-hero-content">
                    <Reveal timing={RevealTiming::new(1000).delayed(200)} on_mount={true}>
                        <h1 class="hero-title">{"master plumbing"}<br />{"in vancouver"}</h1>
                    </Reveal>
                    <Reveal effect={RevealEffect::FadeUp(30)} timing={RevealTiming::new(800).delayed(500)} on_mount={true}>
                        <div class="hero-cta-group">
                            <Link<Route> to={Route::Contact} classes="hero-cta">
                                {"make appointment"}
                            </Link<Route>>
                            <a href="#learn-more" class="hero-secondary">{"learn more ↓"}</a>
                        </div>
                    </Reveal>
                </div>
            </header>

            <section class="services-section">
                <div class="services-grid">
                    { for content::HOME_SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Reveal key={service.title} timing={RevealTiming::new(800).staggered(i, 150)}>
                            <Link<Route> to={service.route} classes="service-card">
                                <img src={service.image} alt={service.title} loading="lazy" />
                                <div class="service-card-body">
                                    <h3>{ service.title }</h3>
                                    <p>{ service.description }</p>
                                    <span class="service-card-arrow">{"↗"}</span>
                                </div>
                            </Link<Route>>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="stats-section">
                <StatsBand stats={content::STATS}>
                    <div id="learn-more" class="about-section">
                        <Reveal effect={RevealEffect::SlideFrom(Side::Left, 40)}>
                            <h2 class="about-title">{"emergency / heating / drainage"}</h2>
                            <p class="about-text">
                                {"The company is a master plumbing business founded in 2015 in Vancouver. \
                                  Our team of certified professionals is specialized in all modern \
                                  technologies around plumbing, heating, and drainage systems."}
                            </p>
                            <Link<Route> to={Route::Contact} classes="about-button">
                                {"make appointment now"}
                            </Link<Route>>
                        </Reveal>
                    </div>
                </StatsBand>
            </section>

            <section class="references-strip">
                <div class="section-header">
                    <Reveal>
                        <h2 class="section-title">{"references"}</h2>
                    </Reveal>
                    <Link<Route> to={Route::References} classes="section-link">
                        {"see all projects ↗"}
                    </Link<Route>>
                </div>
                <div class="references-grid">
                    { for content::HOME_REFERENCES.iter().enumerate().map(|(i, image)| html! {
                        <Reveal key={i} effect={RevealEffect::ZoomOut(5)} timing={RevealTiming::new(700).staggered(i % 4, 100)}>
                            <img class="reference-image" src={*image} alt={format!("Reference project {}", i + 1)} loading="lazy" />
                        </Reveal>
                    }) }
                </div>
            </section>

            <CtaSection
                heading="let's fix it together"
                text="Leaks, renovations or a new heating system: one call and we're on our way."
            />

            <TeamSection members={content::TEAM} />

            <section class="testimonials-section">
                <Reveal>
                    <h2 class="section-title">{"what our clients say"}</h2>
                </Reveal>
                <div class="testimonials-grid">
                    { for content::TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <Reveal key={t.name} timing={RevealTiming::new(600).staggered(i, 100)}>
                            <article class="testimonial-card">
                                <h3>{ t.title }</h3>
                                <p>{ t.text }</p>
                                <div class="testimonial-author">
                                    <img src={t.image} alt={t.name} loading="lazy" />
                                    <div>
                                        <div class="testimonial-name">{ t.name }</div>
                                        <div class="testimonial-role">{ t.role }</div>
                                    </div>
                                </div>
                            </article>
                        </Reveal>
                    }) }
                </div>
            </section>
        </div>
    }
}
