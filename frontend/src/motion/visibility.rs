use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::{MotionError, Result};

fn check_threshold(threshold: f64) -> Result<f64> {
    if threshold.is_finite() && threshold > 0.0 && threshold <= 1.0 {
        Ok(threshold)
    } else {
        Err(MotionError::InvalidArgument(format!(
            "visibility threshold must be in (0, 1], got {threshold}"
        )))
    }
}

/// One-shot "has this region been seen" latch. It never re-arms.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityGate {
    threshold: f64,
    fired: bool,
    disposed: bool,
}

impl VisibilityGate {
    pub fn new(threshold: f64) -> Result<Self> {
        Ok(Self {
            threshold: check_threshold(threshold)?,
            fired: false,
            disposed: false,
        })
    }

    pub fn configure(&mut self, threshold: f64) -> Result<()> {
        self.threshold = check_threshold(threshold)?;
        Ok(())
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feeds one visibility change. Returns `true` only for the notification that opens the gate.
    pub fn notify(&mut self, ratio: f64) -> bool {
        if self.fired || self.disposed || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

impl ViewportOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: None,
        }
    }

    pub fn with_root_margin(mut self, margin: &'static str) -> Self {
        self.root_margin = Some(margin);
        self
    }
}

/// A [`VisibilityGate`] fed by an `IntersectionObserver` on one element.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    gate: Rc<RefCell<VisibilityGate>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn observe(
        target: &Element,
        options: ViewportOptions,
        on_enter: impl Fn() + 'static,
    ) -> Result<Self> {
        let gate = Rc::new(RefCell::new(VisibilityGate::new(options.threshold)?));

        let callback = {
            let gate = gate.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let opened = gate.borrow_mut().notify(entry.intersection_ratio());
                    if opened {
                        observer.disconnect();
                        on_enter();
                        break;
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| MotionError::Unavailable(format!("{:?}", err)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            gate,
            _callback: callback,
        })
    }

    /// Stops monitoring. Safe to call repeatedly.
    pub fn dispose(&self) {
        let mut gate = self.gate.borrow_mut();
        if !gate.is_disposed() {
            gate.dispose();
            self.observer.disconnect();
        }
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Flips to `true` the first time `node` is visible enough and stays there.
/// `None` leaves the element unobserved.
#[hook]
pub fn use_in_view(node: NodeRef, options: Option<ViewportOptions>) -> bool {
    let in_view = use_state(|| false);
    {
        let setter = in_view.setter();
        use_effect_with_deps(
            move |(node, options): &(NodeRef, Option<ViewportOptions>)| {
                let observer = (*options).and_then(|options| {
                    let element = node.cast::<Element>()?;
                    ViewportObserver::observe(&element, options, move || setter.set(true))
                        .map_err(|err| warn!("viewport observer unavailable: {}", err))
                        .ok()
                });
                move || drop(observer)
            },
            (node, options),
        );
    }
    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_outside_unit_interval_is_rejected() {
        for bad in [0.0, -0.2, 1.5, f64::NAN, f64::INFINITY] {
            assert!(VisibilityGate::new(bad).is_err(), "{bad} accepted");
        }
        assert!(VisibilityGate::new(1.0).is_ok());
    }

    #[test]
    fn configure_keeps_old_threshold_on_error() {
        let mut gate = VisibilityGate::new(0.3).unwrap();
        assert!(gate.configure(2.0).is_err());
        assert_eq!(gate.threshold(), 0.3);
        gate.configure(0.5).unwrap();
        assert_eq!(gate.threshold(), 0.5);
    }

    #[test]
    fn fires_once_across_oscillation() {
        let mut gate = VisibilityGate::new(0.3).unwrap();
        let ratios = [0.0, 0.1, 0.29, 0.3, 0.0, 0.8, 0.1, 1.0, 0.31];
        let fired: Vec<bool> = ratios.iter().map(|r| gate.notify(*r)).collect();

        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(fired[3]);
        assert!(gate.has_fired());
    }

    #[test]
    fn never_visible_never_fires() {
        let mut gate = VisibilityGate::new(0.3).unwrap();
        for _ in 0..10 {
            assert!(!gate.notify(0.05));
        }
        assert!(!gate.has_fired());
    }

    #[test]
    fn disposed_gate_stays_shut() {
        let mut gate = VisibilityGate::new(0.3).unwrap();
        gate.dispose();
        gate.dispose();
        assert!(!gate.notify(1.0));
        assert!(!gate.has_fired());
    }

    #[test]
    fn viewport_options_builder() {
        let options = ViewportOptions::threshold(0.01).with_root_margin("0px 0px -20% 0px");
        assert_eq!(options.threshold, 0.01);
        assert_eq!(options.root_margin, Some("0px 0px -20% 0px"));
    }
}
