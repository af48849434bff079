use yew::prelude::*;

use crate::components::category_carousel::CategoryCarousel;
use crate::components::page::{use_page, CtaSection, PageHero};
use crate::content;
use crate::motion::reveal::{Reveal, RevealEffect, RevealTiming};

#[function_component(References)]
pub fn references() -> Html {
    use_page("References");

    html! {
        <div class="references-page">
            <PageHero
                title="REFERENCES"
                tagline="a selection of bathrooms, heating rooms and drainage work we're proud of."
                images={content::REFERENCE_HERO}
            />

            <section class="carousel-section">
                { for content::REFERENCE_CATEGORIES.iter().enumerate().map(|(i, category)| html! {
                    <Reveal
                        key={category.label}
                        effect={RevealEffect::FadeUp(60)}
                        timing={RevealTiming::new(800).staggered(i, 200)}
                    >
                        <CategoryCarousel category={category.label} images={category.images} />
                    </Reveal>
                }) }
            </section>

            <CtaSection
                heading="your project could be next"
                text="Tell us what you have in mind and we'll plan it with you."
            />
        </div>
    }
}
