use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
    /// In-page section on the target route.
    pub anchor: Option<&'static str>,
}

impl NavLink {
    pub fn href(&self) -> String {
        match self.anchor {
            Some(anchor) => format!("{}#{}", self.route.to_path(), anchor),
            None => self.route.to_path(),
        }
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { route: Route::Sanitary, label: "sanitary", anchor: None },
    NavLink { route: Route::Heating, label: "heating", anchor: None },
    NavLink { route: Route::Drainage, label: "drainage", anchor: None },
    NavLink { route: Route::Solar, label: "solar", anchor: None },
    NavLink { route: Route::References, label: "references", anchor: None },
    NavLink { route: Route::Home, label: "team", anchor: Some("team") },
];

pub fn sticky_visible(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_SCROLL_THRESHOLD
}

#[derive(Properties, PartialEq)]
struct NavAnchorProps {
    link: NavLink,
    class: Classes,
    #[prop_or_default]
    onclick: Callback<MouseEvent>,
    #[prop_or_default]
    children: Children,
}

/// Router link, or a plain anchor when the target is a section of another page.
#[function_component(NavAnchor)]
fn nav_anchor(props: &NavAnchorProps) -> Html {
    let onclick = props.onclick.clone();
    match props.link.anchor {
        Some(_) => html! {
            <a href={props.link.href()} class={props.class.clone()} onclick={onclick}>
                { for props.children.iter() }
            </a>
        },
        None => html! {
            <span onclick={onclick}>
                <Link<Route> to={props.link.route} classes={props.class.clone()}>
                    { for props.children.iter() }
                </Link<Route>>
            </span>
        },
    }
}

#[derive(Properties, PartialEq)]
struct NavPillProps {
    on_navigate: Callback<MouseEvent>,
}

/// White pill of links; the hovered one gets the dark highlight.
#[function_component(NavPill)]
fn nav_pill(props: &NavPillProps) -> Html {
    let hovered = use_state(|| None::<&'static str>);

    html! {
        <div class="nav-pill">
            { for NAV_LINKS.iter().map(|link| {
                let label = link.label;
                let enter = {
                    let hovered = hovered.clone();
                    Callback::from(move |_: MouseEvent| hovered.set(Some(label)))
                };
                let leave = {
                    let hovered = hovered.clone();
                    Callback::from(move |_: MouseEvent| hovered.set(None))
                };
                let active = *hovered == Some(label);
                html! {
                    <div key={label} class="nav-pill-item" onmouseenter={enter} onmouseleave={leave}>
                        <NavAnchor
                            link={*link}
                            class={classes!("nav-pill-link", active.then_some("hovered"))}
                            onclick={props.on_navigate.clone()}
                        >
                            <span class="nav-pill-highlight"></span>
                            <span class="nav-pill-label">{ label }</span>
                        </NavAnchor>
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(ContactBar)]
fn contact_bar() -> Html {
    html! {
        <div class="contact-bar">
            <div class="contact-bar-content">
                <a href="#">{ config::ADDRESS_LINE }</a>
                <a href={format!("mailto:{}", config::EMAIL)}>{ config::EMAIL }</a>
                <a href={format!("tel:{}", config::PHONE_TEL)}>{ config::PHONE_DISPLAY }</a>
            </div>
        </div>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window
                            .as_ref()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        is_scrolled.set(sticky_visible(scroll_y));
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    if let Err(err) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("navbar scroll listener not attached: {:?}", err);
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <>
            <ContactBar />
            <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        { config::BUSINESS_NAME }
                    </Link<Route>>

                    <div class="nav-desktop">
                        <NavPill on_navigate={close_menu.clone()} />
                    </div>

                    <div class="nav-contact">
                        <Link<Route> to={Route::Contact} classes="nav-contact-button">
                            {"contact"}
                        </Link<Route>>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        if *menu_open {
                            <span class="burger-close">{"✕"}</span>
                        } else {
                            <>
                                <span></span>
                                <span></span>
                                <span></span>
                            </>
                        }
                    </button>
                </div>

                if *menu_open {
                    <div class="mobile-menu">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <NavAnchor
                                key={link.label}
                                link={*link}
                                class={classes!("mobile-menu-link")}
                                onclick={close_menu.clone()}
                            >
                                { link.label }
                            </NavAnchor>
                        }) }
                        <span onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Contact} classes="mobile-menu-contact">
                                {"contact"}
                            </Link<Route>>
                        </span>
                    </div>
                }
            </nav>
        </>
    }
}
