//! Declarative entrance effects for page sections.
//!
//! Each [`Reveal`] names an effect and a timing; it starts hidden and eases
//! into place when scrolled into view, or right after mounting for hero copy.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::motion::visibility::{use_in_view, ViewportOptions};

/// CSS rendition of GSAP's `power3.out`.
pub const POWER3_OUT: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";

// Long enough for the hidden state to be painted before it transitions.
const MOUNT_REVEAL_DELAY_MS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    FadeIn,
    /// Rises by this many pixels.
    FadeUp(u32),
    SlideFrom(Side, u32),
    /// Starts this many percent larger and settles to natural size.
    ZoomOut(u32),
}

impl RevealEffect {
    fn hidden_transform(&self) -> String {
        match *self {
            RevealEffect::FadeIn => "none".to_string(),
            RevealEffect::FadeUp(px) => format!("translateY({px}px)"),
            RevealEffect::SlideFrom(Side::Left, px) => format!("translateX(-{px}px)"),
            RevealEffect::SlideFrom(Side::Right, px) => format!("translateX({px}px)"),
            RevealEffect::ZoomOut(pct) => {
                let scaled = 100 + pct;
                format!("scale({}.{:02})", scaled / 100, scaled % 100)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl RevealTiming {
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self {
            duration_ms: self.duration_ms,
            delay_ms,
        }
    }

    /// Offsets the `index`th member of a group by `step_ms` per position.
    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        let offset = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms);
        self.delayed(self.delay_ms.saturating_add(offset))
    }
}

pub fn reveal_style(effect: RevealEffect, timing: RevealTiming, shown: bool) -> String {
    let (opacity, transform) = if shown {
        ("1", "none".to_string())
    } else {
        ("0", effect.hidden_transform())
    };
    let RevealTiming {
        duration_ms,
        delay_ms,
    } = timing;
    format!(
        "opacity: {opacity}; transform: {transform}; \
         transition: opacity {duration_ms}ms {POWER3_OUT} {delay_ms}ms, \
         transform {duration_ms}ms {POWER3_OUT} {delay_ms}ms;"
    )
}

/// Viewport options for scroll-triggered reveals; mount-triggered ones observe nothing.
pub fn scroll_trigger(on_mount: bool) -> Option<ViewportOptions> {
    (!on_mount).then(|| {
        ViewportOptions::threshold(config::REVEAL_THRESHOLD)
            .with_root_margin(config::REVEAL_ROOT_MARGIN)
    })
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(RevealEffect::FadeUp(40))]
    pub effect: RevealEffect,
    #[prop_or(RevealTiming::new(800))]
    pub timing: RevealTiming,
    /// Play as soon as the element mounts instead of waiting for scroll.
    #[prop_or_default]
    pub on_mount: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), scroll_trigger(props.on_mount));
    let mounted = use_state(|| false);
    {
        let setter = mounted.setter();
        use_effect_with_deps(
            move |on_mount: &bool| {
                let timeout = on_mount
                    .then(|| Timeout::new(MOUNT_REVEAL_DELAY_MS, move || setter.set(true)));
                move || drop(timeout)
            },
            props.on_mount,
        );
    }

    let shown = if props.on_mount { *mounted } else { in_view };

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={reveal_style(props.effect, props.timing, shown)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_scroll_reveals_watch_the_viewport() {
        assert_eq!(scroll_trigger(true), None);
        let options = scroll_trigger(false).unwrap();
        assert_eq!(options.threshold, 0.01);
        assert_eq!(options.root_margin, Some("0px 0px -20% 0px"));
    }

    #[test]
    fn hidden_fade_up_is_offset_and_transparent() {
        let style = reveal_style(RevealEffect::FadeUp(40), RevealTiming::new(800), false);
        assert!(style.starts_with("opacity: 0; transform: translateY(40px);"));
        assert!(style.contains("opacity 800ms cubic-bezier(0.215, 0.61, 0.355, 1) 0ms"));
    }

    #[test]
    fn shown_state_clears_transform() {
        let style = reveal_style(
            RevealEffect::SlideFrom(Side::Left, 60),
            RevealTiming::new(600),
            true,
        );
        assert!(style.starts_with("opacity: 1; transform: none;"));
    }

    #[test]
    fn slide_direction_sets_sign() {
        assert_eq!(
            RevealEffect::SlideFrom(Side::Left, 60).hidden_transform(),
            "translateX(-60px)"
        );
        assert_eq!(
            RevealEffect::SlideFrom(Side::Right, 60).hidden_transform(),
            "translateX(60px)"
        );
        assert_eq!(RevealEffect::ZoomOut(5).hidden_transform(), "scale(1.05)");
    }

    #[test]
    fn stagger_accumulates_on_base_delay() {
        let timing = RevealTiming::new(500).delayed(300).staggered(3, 100);
        assert_eq!(timing.delay_ms, 600);
        assert_eq!(timing.duration_ms, 500);
    }
}
