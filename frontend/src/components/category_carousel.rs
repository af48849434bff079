use gloo_timers::callback::Timeout;
use log::warn;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;
use crate::motion::carousel::{Carousel, Direction};

#[derive(Properties, PartialEq)]
pub struct CategoryCarouselProps {
    pub category: &'static str,
    pub images: &'static [&'static str],
}

#[styled_component(CategoryCarousel)]
pub fn category_carousel(props: &CategoryCarouselProps) -> Html {
    let carousel = use_mut_ref(|| Carousel::new(props.images.to_vec(), config::CAROUSEL_WINDOW));
    // Unmounting drops the pending timeout, which cancels the release.
    let settle = use_mut_ref(|| None::<Timeout>);
    let update = use_force_update();

    let step = {
        let carousel = carousel.clone();
        let settle = settle.clone();
        let update = update.clone();
        Callback::from(move |direction: Direction| {
            let advanced = match carousel.borrow_mut().as_mut() {
                Ok(model) => model.advance(direction),
                Err(_) => false,
            };
            if !advanced {
                return;
            }
            update.force_update();

            let carousel = carousel.clone();
            let update = update.clone();
            *settle.borrow_mut() = Some(Timeout::new(config::CAROUSEL_SETTLE_MS, move || {
                if let Ok(model) = carousel.borrow_mut().as_mut() {
                    model.release();
                }
                update.force_update();
            }));
        })
    };

    let state = carousel.borrow();
    let model = match &*state {
        Ok(model) => model,
        Err(err) => {
            warn!("{} carousel disabled: {}", props.category, err);
            return html! {};
        }
    };

    let root = css!(
        r#"
        display: flex;
        gap: 1.5rem;

        .carousel-label {
            flex-shrink: 0;
            width: 6rem;
            display: flex;
            align-items: center;
            justify-content: center;
            writing-mode: vertical-rl;
            transform: rotate(180deg);
            font-family: 'Playfair Display', serif;
            font-size: 1.5rem;
            font-weight: 700;
            letter-spacing: 0.05em;
            color: #fff;
        }

        .carousel-track {
            flex: 1;
            display: flex;
            gap: 1.5rem;
            overflow: hidden;
        }

        .carousel-slide {
            position: relative;
            flex: 1 1 0;
            border-radius: 30px;
            overflow: hidden;
            cursor: pointer;
        }

        .carousel-slide img {
            width: 100%;
            height: 500px;
            object-fit: cover;
            transition: transform 700ms ease-out;
        }

        .carousel-slide:hover img {
            transform: scale(1.05);
        }

        .carousel-slide-shade {
            position: absolute;
            inset: 0;
            background: rgba(0, 0, 0, 0.3);
            opacity: 0;
            transition: opacity 500ms ease;
        }

        .carousel-slide-badge {
            position: absolute;
            right: 1.5rem;
            bottom: 1.5rem;
            display: flex;
            align-items: center;
            justify-content: center;
            width: 3.5rem;
            height: 3.5rem;
            border-radius: 50%;
            background: #fff;
            color: #000;
            font-size: 1.5rem;
            opacity: 0;
            transform: translateY(1rem);
            transition: opacity 500ms ease, transform 500ms ease;
        }

        .carousel-slide:hover .carousel-slide-shade {
            opacity: 1;
        }

        .carousel-slide:hover .carousel-slide-badge {
            opacity: 1;
            transform: translateY(0);
        }

        @media (max-width: 1024px) {
            .carousel-label {
                width: 4rem;
                font-size: 1.25rem;
            }
            .carousel-slide img {
                height: 300px;
            }
        }
    "#
    );

    let index = model.current_index();
    let animating = model.is_animating();
    let slides: Html = model
        .visible_window()
        .into_iter()
        .enumerate()
        .map(|(i, image)| {
            html! {
                <div key={format!("{}-{}", index, i)} class="carousel-slide">
                    <img
                        src={*image}
                        alt={format!("{} project {}", props.category, i + 1)}
                        loading="lazy"
                    />
                    <div class="carousel-slide-shade"></div>
                    <span class="carousel-slide-badge">{"↗"}</span>
                </div>
            }
        })
        .collect();
    drop(state);

    let prev = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.emit(Direction::Prev))
    };
    let next = Callback::from(move |_: MouseEvent| step.emit(Direction::Next));

    html! {
        <div class="category-carousel">
            <div class={classes!(root, animating.then_some("is-animating"))}>
                <div class="carousel-label">{ props.category }</div>
                <div class="carousel-track">{ slides }</div>
            </div>
            <div class="carousel-controls">
                <button class="carousel-arrow" onclick={prev} aria-label="Previous slide">{"←"}</button>
                <button class="carousel-arrow" onclick={next} aria-label="Next slide">{"→"}</button>
            </div>
        </div>
    }
}
