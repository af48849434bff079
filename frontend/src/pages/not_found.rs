use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page::use_page;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page("Page not found");

    html! {
        <div class="not-found-page">
            <h1 class="hero-title">{"404"}</h1>
            <p class="hero-description">{"This page sprang a leak. Let's get you somewhere dry."}</p>
            <Link<Route> to={Route::Home} classes="cta-button">
                {"back to home"}
            </Link<Route>>
        </div>
    }
}
