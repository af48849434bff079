use yew::prelude::*;

use crate::components::page::{use_page, CtaSection, PageHero};
use crate::components::stat_counter::StatsBand;
use crate::components::team::TeamSection;
use crate::content;
use crate::motion::reveal::{Reveal, RevealEffect, RevealTiming, Side};

#[function_component(About)]
pub fn about() -> Html {
    use_page("About");

    html! {
        <div class="about-page">
            <PageHero
                title="ABOUT US"
                tagline="a family of certified master plumbers serving Vancouver since 2015."
                images={content::ABOUT_HERO}
            />

            <section class="story-section">
                <Reveal effect={RevealEffect::SlideFrom(Side::Left, 60)}>
                    <h2 class="section-title">{"our story"}</h2>
                </Reveal>
                <Reveal effect={RevealEffect::SlideFrom(Side::Right, 60)}>
                    <p>
                        {"What started as a two-person emergency service has grown into a full \
                          plumbing, heating, drainage and solar company. We still answer the phone \
                          ourselves, and we still treat every home like our own."}
                    </p>
                </Reveal>
            </section>

            <section class="stats-section">
                <StatsBand stats={content::STATS} />
            </section>

            <section class="values-section">
                <Reveal>
                    <h2 class="section-title">{"our values"}</h2>
                </Reveal>
                <div class="values-grid">
                    { for content::VALUES.iter().enumerate().map(|(i, value)| html! {
                        <Reveal key={value.title} timing={RevealTiming::new(600).staggered(i, 100)}>
                            <div class="value-card">
                                <span class="value-index">{ format!("0{}", i + 1) }</span>
                                <h3>{ value.title }</h3>
                                <p>{ value.description }</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <TeamSection members={content::TEAM} heading="meet the team" />

            <section class="timeline-section">
                <Reveal>
                    <h2 class="section-title">{"our journey"}</h2>
                </Reveal>
                <ol class="timeline">
                    { for content::TIMELINE.iter().enumerate().map(|(i, milestone)| {
                        let side = if i % 2 == 0 { Side::Left } else { Side::Right };
                        html! {
                            <li key={milestone.year} class="timeline-item">
                                <Reveal effect={RevealEffect::SlideFrom(side, 50)}>
                                    <span class="timeline-year">{ milestone.year }</span>
                                    <h3>{ milestone.title }</h3>
                                    <p>{ milestone.description }</p>
                                </Reveal>
                            </li>
                        }
                    }) }
                </ol>
            </section>

            <CtaSection
                heading="ready to start your project?"
                text="From a dripping tap to a full renovation, we're here to help."
            />
        </div>
    }
}
