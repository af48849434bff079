use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navbar::NAV_LINKS;
use crate::config;
use crate::motion::reveal::{Reveal, RevealEffect, RevealTiming};
use crate::Route;

const COMPANY_LINKS: &[(Route, &str)] = &[
    (Route::About, "about us"),
    (Route::References, "references"),
    (Route::Contact, "contact"),
];

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::BUSINESS_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-cta">
                <Reveal effect={RevealEffect::FadeUp(50)} timing={RevealTiming::new(800)}>
                    <div class="footer-cta-content">
                        <h2>{"Need a plumber you can count on?"}</h2>
                        <p>{"Tell us what's going on and we'll get back to you the same day."}</p>
                        <Link<Route> to={Route::Contact} classes="footer-cta-button">
                            {"make appointment now"}
                        </Link<Route>>
                    </div>
                </Reveal>
            </div>

            <div class="footer-columns">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        { config::BUSINESS_NAME }
                    </Link<Route>>
                    <p>{"Certified master plumbers for sanitary, heating, drainage and solar."}</p>
                </div>

                <div class="footer-column">
                    <h4>{"services"}</h4>
                    { for NAV_LINKS.iter().filter(|l| l.anchor.is_none() && l.route != Route::References).map(|link| html! {
                        <Link<Route> key={link.label} to={link.route} classes="footer-link">
                            { link.label }
                        </Link<Route>>
                    }) }
                </div>

                <div class="footer-column">
                    <h4>{"company"}</h4>
                    { for COMPANY_LINKS.iter().map(|(route, label)| html! {
                        <Link<Route> key={*label} to={*route} classes="footer-link">
                            { *label }
                        </Link<Route>>
                    }) }
                </div>

                <div class="footer-column">
                    <h4>{"contact"}</h4>
                    { for config::OFFICE_ADDRESS.iter().map(|line| html! { <p>{ *line }</p> }) }
                    <a href={format!("mailto:{}", config::EMAIL)} class="footer-link">{ config::EMAIL }</a>
                    <a href={format!("tel:{}", config::PHONE_TEL)} class="footer-link">{ config::PHONE_DISPLAY }</a>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{ copyright_line(year) }</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_business_and_year() {
        assert_eq!(copyright_line(2026), "© 2026 AQUAFIX. All rights reserved.");
    }
}
