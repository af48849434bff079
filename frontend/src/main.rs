use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact_form;
mod content;
mod error;
mod motion {
    pub mod carousel;
    pub mod count_up;
    pub mod easing;
    pub mod frame;
    pub mod reveal;
    pub mod visibility;
}
mod components {
    pub mod category_carousel;
    pub mod footer;
    pub mod navbar;
    pub mod page;
    pub mod stat_counter;
    pub mod team;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod references;
    pub mod service;
}

use components::{footer::Footer, navbar::Navbar};
use pages::{
    about::About, contact::Contact, home::Home, not_found::NotFound, references::References,
    service::ServicePage,
};

#[derive(Clone, Copy, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/sanitary")]
    Sanitary,
    #[at("/heating")]
    Heating,
    #[at("/drainage")]
    Drainage,
    #[at("/solar")]
    Solar,
    #[at("/references")]
    References,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Sanitary => {
            info!("Rendering Sanitary page");
            html! { <ServicePage content={content::SANITARY} /> }
        }
        Route::Heating => {
            info!("Rendering Heating page");
            html! { <ServicePage content={content::HEATING} /> }
        }
        Route::Drainage => {
            info!("Rendering Drainage page");
            html! { <ServicePage content={content::DRAINAGE} /> }
        }
        Route::Solar => {
            info!("Rendering Solar page");
            html! { <ServicePage content={content::SOLAR} /> }
        }
        Route::References => {
            info!("Rendering References page");
            html! { <References /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    // Only fails when a logger is already installed.
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_routes_have_stable_paths() {
        assert_eq!(Route::Sanitary.to_path(), "/sanitary");
        assert_eq!(Route::Solar.to_path(), "/solar");
        assert_eq!(Route::recognize("/heating"), Some(Route::Heating));
    }
}
