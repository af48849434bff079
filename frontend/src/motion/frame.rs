use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Handle returned by the host for a scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameId(pub i32);

/// "Run this on the next display refresh."
///
/// `request` returns `None` when the host refuses to schedule (no window, torn down
/// document). Callers treat that as a cancellation rather than an error.
pub trait FrameScheduler {
    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<FrameId>;
    fn cancel(&self, id: FrameId);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for Rc<T> {
    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<FrameId> {
        (**self).request(callback)
    }

    fn cancel(&self, id: FrameId) {
        (**self).cancel(id)
    }
}

/// `window.requestAnimationFrame` backed scheduler.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<FrameId> {
        let window = web_sys::window()?;
        // A cancelled frame never runs, so its one-shot closure stays allocated.
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        match window.request_animation_frame(closure.unchecked_ref()) {
            Ok(id) => Some(FrameId(id)),
            Err(err) => {
                warn!("requestAnimationFrame refused: {:?}", err);
                None
            }
        }
    }

    fn cancel(&self, id: FrameId) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.cancel_animation_frame(id.0) {
                warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{FrameId, FrameScheduler};

    type Queued = (FrameId, Box<dyn FnOnce(f64)>);

    /// Frames only advance when the test calls `run`.
    pub struct ManualFrames {
        queue: RefCell<Vec<Queued>>,
        next_id: Cell<i32>,
        honour_cancel: bool,
        cancelled: Cell<usize>,
    }

    impl ManualFrames {
        pub fn new() -> Rc<Self> {
            Rc::new(Self::build(true))
        }

        /// A host that still delivers frames after they were cancelled.
        pub fn ignoring_cancel() -> Rc<Self> {
            Rc::new(Self::build(false))
        }

        fn build(honour_cancel: bool) -> Self {
            Self {
                queue: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
                honour_cancel,
                cancelled: Cell::new(0),
            }
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        pub fn cancelled(&self) -> usize {
            self.cancelled.get()
        }

        /// Fires every frame queued before this call; returns how many ran.
        pub fn run(&self, timestamp: f64) -> usize {
            let due: Vec<Queued> = self.queue.borrow_mut().drain(..).collect();
            let count = due.len();
            for (_, callback) in due {
                callback(timestamp);
            }
            count
        }
    }

    impl FrameScheduler for ManualFrames {
        fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<FrameId> {
            let id = FrameId(self.next_id.get());
            self.next_id.set(id.0 + 1);
            self.queue.borrow_mut().push((id, callback));
            Some(id)
        }

        fn cancel(&self, id: FrameId) {
            self.cancelled.set(self.cancelled.get() + 1);
            if self.honour_cancel {
                self.queue.borrow_mut().retain(|(queued, _)| *queued != id);
            }
        }
    }

    /// A host with no display to refresh.
    pub struct DeniedFrames;

    impl FrameScheduler for DeniedFrames {
        fn request(&self, _callback: Box<dyn FnOnce(f64)>) -> Option<FrameId> {
            None
        }

        fn cancel(&self, _id: FrameId) {}
    }
}
