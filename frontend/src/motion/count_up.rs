//! Eased count-up for the statistics bands.
//!
//! [`CountUp`] is the pure state machine; [`CountUpDriver`] feeds it display
//! refreshes through a [`FrameScheduler`]; [`use_count_up`] wires both into a
//! component.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::error::{MotionError, Result};
use crate::motion::easing::{ease_out_quart, progress};
use crate::motion::frame::{BrowserFrames, FrameId, FrameScheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSpec {
    target: u32,
    duration_ms: u32,
    discrete: bool,
}

impl CounterSpec {
    /// `discrete` counters snap straight to `target` (years should not count up).
    pub fn new(target: u32, duration_ms: u32, discrete: bool) -> Result<Self> {
        if duration_ms == 0 {
            return Err(MotionError::InvalidArgument(format!(
                "counter duration must be positive (target {target})"
            )));
        }
        Ok(Self {
            target,
            duration_ms,
            discrete,
        })
    }

    /// What is shown before the counter is triggered.
    pub fn resting_value(&self) -> u32 {
        if self.discrete {
            self.target
        } else {
            0
        }
    }
}

/// Identifies one activation. Frames carrying an older generation are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    Continue,
    Complete,
    /// The frame belongs to a cancelled or superseded run; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct CountUp {
    spec: CounterSpec,
    displayed: u32,
    started_at: Option<f64>,
    active: bool,
    generation: u64,
}

impl CountUp {
    pub fn new(spec: CounterSpec) -> Self {
        Self {
            spec,
            displayed: spec.resting_value(),
            started_at: None,
            active: false,
            generation: 0,
        }
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts a fresh run. Returns the token the frame loop must present on every
    /// tick, or `None` when the counter jumped straight to its target.
    pub fn activate(&mut self) -> Option<Generation> {
        self.generation += 1;
        self.started_at = None;
        if self.spec.discrete {
            self.displayed = self.spec.target;
            self.active = false;
            return None;
        }
        self.displayed = 0;
        self.active = true;
        Some(Generation(self.generation))
    }

    /// Advances the run to `now_ms`. The first tick of a run stamps its start time.
    pub fn tick(&mut self, token: Generation, now_ms: f64) -> FrameStep {
        if !self.active || token.0 != self.generation {
            return FrameStep::Stale;
        }

        let started = *self.started_at.get_or_insert(now_ms);
        let p = progress(now_ms - started, self.spec.duration_ms);
        let target = self.spec.target;
        let value = (ease_out_quart(p) * f64::from(target)).floor() as u32;
        self.displayed = value.clamp(self.displayed, target);

        if p >= 1.0 {
            self.displayed = target;
            self.active = false;
            FrameStep::Complete
        } else {
            FrameStep::Continue
        }
    }

    /// Back to the untriggered rendering. Any outstanding token goes stale.
    pub fn deactivate(&mut self) {
        self.generation += 1;
        self.active = false;
        self.started_at = None;
        self.displayed = self.spec.resting_value();
    }

    /// Swaps in new parameters; partial progress is discarded.
    pub fn retarget(&mut self, spec: CounterSpec) {
        self.spec = spec;
        self.deactivate();
    }
}

struct DriverInner<S: FrameScheduler> {
    counter: RefCell<CountUp>,
    scheduler: S,
    pending: Cell<Option<FrameId>>,
    listener: Box<dyn Fn(u32)>,
}

impl<S: FrameScheduler + 'static> DriverInner<S> {
    fn notify(&self) {
        let value = self.counter.borrow().displayed();
        (self.listener)(value);
    }

    fn cancel_pending(&self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    fn schedule(inner: &Rc<Self>, token: Generation) {
        let weak = Rc::downgrade(inner);
        let id = inner.scheduler.request(Box::new(move |timestamp| {
            if let Some(inner) = weak.upgrade() {
                Self::on_frame(&inner, token, timestamp);
            }
        }));

        match id {
            Some(id) => inner.pending.set(Some(id)),
            None => {
                debug!("frame scheduling unavailable, cancelling counter");
                inner.pending.set(None);
                inner.counter.borrow_mut().deactivate();
                inner.notify();
            }
        }
    }

    fn on_frame(inner: &Rc<Self>, token: Generation, timestamp: f64) {
        let step = inner.counter.borrow_mut().tick(token, timestamp);
        match step {
            FrameStep::Stale => {}
            FrameStep::Continue => {
                inner.pending.set(None);
                inner.notify();
                Self::schedule(inner, token);
            }
            FrameStep::Complete => {
                inner.pending.set(None);
                inner.notify();
            }
        }
    }
}

/// Runs a [`CountUp`] on a frame scheduler and reports every displayed value.
///
/// Frame callbacks only hold a weak reference, so dropping the driver silences
/// them even if the host still delivers a frame.
pub struct CountUpDriver<S: FrameScheduler + 'static> {
    inner: Rc<DriverInner<S>>,
}

impl<S: FrameScheduler + 'static> CountUpDriver<S> {
    pub fn new(spec: CounterSpec, scheduler: S, listener: impl Fn(u32) + 'static) -> Self {
        Self {
            inner: Rc::new(DriverInner {
                counter: RefCell::new(CountUp::new(spec)),
                scheduler,
                pending: Cell::new(None),
                listener: Box::new(listener),
            }),
        }
    }

    pub fn activate(&self) {
        self.inner.cancel_pending();
        let token = self.inner.counter.borrow_mut().activate();
        self.inner.notify();
        if let Some(token) = token {
            DriverInner::schedule(&self.inner, token);
        }
    }

    /// No frame callback mutates the counter after this returns.
    pub fn deactivate(&self) {
        self.inner.cancel_pending();
        self.inner.counter.borrow_mut().deactivate();
        self.inner.notify();
    }

    pub fn retarget(&self, spec: CounterSpec) {
        self.inner.cancel_pending();
        self.inner.counter.borrow_mut().retarget(spec);
        self.inner.notify();
    }

    pub fn displayed(&self) -> u32 {
        self.inner.counter.borrow().displayed()
    }

    pub fn is_running(&self) -> bool {
        self.inner.pending.get().is_some()
    }
}

impl<S: FrameScheduler + 'static> Drop for CountUpDriver<S> {
    fn drop(&mut self) {
        self.inner.cancel_pending();
        self.inner.counter.borrow_mut().deactivate();
    }
}

/// Displayed value of a counter that runs while `start` is true and rests otherwise.
///
/// One driver lives as long as the component; a changed `spec` retargets it,
/// which restarts the run from its resting value.
#[hook]
pub fn use_count_up(spec: CounterSpec, start: bool) -> u32 {
    let displayed = use_state(|| spec.resting_value());
    let driver = use_mut_ref(|| None::<CountUpDriver<BrowserFrames>>);
    {
        let driver = driver.clone();
        let setter = displayed.setter();
        use_effect_with_deps(
            move |&(spec, start): &(CounterSpec, bool)| {
                let mut slot = driver.borrow_mut();
                let driver = match slot.take() {
                    Some(existing) => {
                        existing.retarget(spec);
                        existing
                    }
                    None => CountUpDriver::new(spec, BrowserFrames, move |value| {
                        setter.set(value)
                    }),
                };
                if start {
                    driver.activate();
                }
                *slot = Some(driver);
                || ()
            },
            (spec, start),
        );
    }
    use_effect_with_deps(
        move |_| {
            move || {
                driver.borrow_mut().take();
            }
        },
        (),
    );
    *displayed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::frame::testing::{DeniedFrames, ManualFrames};
    use proptest::prelude::*;

    fn spec(target: u32, duration_ms: u32) -> CounterSpec {
        CounterSpec::new(target, duration_ms, false).unwrap()
    }

    fn recording() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = CounterSpec::new(10, 0, false).unwrap_err();
        assert!(matches!(err, MotionError::InvalidArgument(_)));
    }

    #[test]
    fn resting_value_depends_on_discreteness() {
        assert_eq!(spec(500, 2500).resting_value(), 0);
        assert_eq!(CounterSpec::new(2015, 2500, true).unwrap().resting_value(), 2015);
    }

    #[test]
    fn samples_match_quartic_ease() {
        let mut counter = CountUp::new(spec(500, 2500));
        let token = counter.activate().unwrap();

        assert_eq!(counter.tick(token, 0.0), FrameStep::Continue);
        assert_eq!(counter.displayed(), 0);
        assert_eq!(counter.tick(token, 1250.0), FrameStep::Continue);
        assert_eq!(counter.displayed(), 468);
        assert_eq!(counter.tick(token, 2500.0), FrameStep::Complete);
        assert_eq!(counter.displayed(), 500);
        assert!(!counter.is_active());
    }

    #[test]
    fn start_time_comes_from_first_frame() {
        let mut counter = CountUp::new(spec(500, 2500));
        let token = counter.activate().unwrap();

        counter.tick(token, 10_000.0);
        counter.tick(token, 11_250.0);
        assert_eq!(counter.displayed(), 468);
    }

    #[test]
    fn discrete_counter_jumps_without_frames() {
        let mut counter = CountUp::new(CounterSpec::new(2015, 2500, true).unwrap());
        assert_eq!(counter.activate(), None);
        assert_eq!(counter.displayed(), 2015);
        assert!(!counter.is_active());
    }

    #[test]
    fn deactivate_resets_and_stales_the_token() {
        let mut counter = CountUp::new(spec(100, 1000));
        let token = counter.activate().unwrap();
        counter.tick(token, 0.0);
        counter.tick(token, 500.0);
        assert!(counter.displayed() > 0);

        counter.deactivate();
        assert_eq!(counter.displayed(), 0);
        assert_eq!(counter.tick(token, 900.0), FrameStep::Stale);
        assert_eq!(counter.displayed(), 0);
    }

    #[test]
    fn reactivation_supersedes_previous_run() {
        let mut counter = CountUp::new(spec(100, 1000));
        let first = counter.activate().unwrap();
        counter.tick(first, 0.0);
        let second = counter.activate().unwrap();

        assert_eq!(counter.tick(first, 999.0), FrameStep::Stale);
        assert_eq!(counter.displayed(), 0);
        assert_eq!(counter.tick(second, 50.0), FrameStep::Continue);
    }

    #[test]
    fn retarget_discards_progress() {
        let mut counter = CountUp::new(spec(100, 1000));
        let token = counter.activate().unwrap();
        counter.tick(token, 0.0);
        counter.tick(token, 800.0);

        counter.retarget(spec(40, 400));
        assert_eq!(counter.displayed(), 0);
        let token = counter.activate().unwrap();
        counter.tick(token, 0.0);
        assert_eq!(counter.tick(token, 400.0), FrameStep::Complete);
        assert_eq!(counter.displayed(), 40);
    }

    #[test]
    fn driver_runs_to_completion() {
        let frames = ManualFrames::new();
        let (seen, listener) = recording();
        let driver = CountUpDriver::new(spec(500, 2500), frames.clone(), listener);

        driver.activate();
        assert!(driver.is_running());
        for t in [0.0, 500.0, 1250.0, 2000.0, 2500.0] {
            assert_eq!(frames.run(t), 1);
        }

        assert_eq!(driver.displayed(), 500);
        assert!(!driver.is_running());
        assert_eq!(frames.pending(), 0);
        assert_eq!(seen.borrow().last(), Some(&500));
        assert!(seen.borrow().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn driver_deactivate_cancels_pending_frame() {
        let frames = ManualFrames::new();
        let (_, listener) = recording();
        let driver = CountUpDriver::new(spec(500, 2500), frames.clone(), listener);

        driver.activate();
        frames.run(0.0);
        frames.run(1000.0);
        driver.deactivate();

        assert_eq!(frames.pending(), 0);
        assert_eq!(frames.cancelled(), 1);
        assert_eq!(driver.displayed(), 0);
        assert!(!driver.is_running());
    }

    #[test]
    fn frame_delivered_after_cancel_does_not_write() {
        let frames = ManualFrames::ignoring_cancel();
        let (seen, listener) = recording();
        let driver = CountUpDriver::new(spec(500, 2500), frames.clone(), listener);

        driver.activate();
        frames.run(0.0);
        driver.deactivate();
        let writes = seen.borrow().len();

        assert_eq!(frames.run(2500.0), 1);
        assert_eq!(driver.displayed(), 0);
        assert_eq!(seen.borrow().len(), writes);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn frame_delivered_after_drop_is_ignored() {
        let frames = ManualFrames::ignoring_cancel();
        let (seen, listener) = recording();
        let driver = CountUpDriver::new(spec(500, 2500), frames.clone(), listener);
        driver.activate();
        frames.run(0.0);
        let writes = seen.borrow().len();

        drop(driver);
        frames.run(2500.0);
        assert_eq!(seen.borrow().len(), writes);
    }

    #[test]
    fn driver_retarget_restarts_from_rest() {
        let frames = ManualFrames::ignoring_cancel();
        let (seen, listener) = recording();
        let driver = CountUpDriver::new(spec(500, 2500), frames.clone(), listener);

        driver.activate();
        frames.run(0.0);
        frames.run(1250.0);
        assert_eq!(driver.displayed(), 468);

        driver.retarget(spec(40, 400));
        assert_eq!(frames.cancelled(), 1);
        assert!(!driver.is_running());
        assert_eq!(driver.displayed(), 0);

        let writes = seen.borrow().len();
        assert_eq!(frames.run(2500.0), 1);
        assert_eq!(driver.displayed(), 0);
        assert_eq!(seen.borrow().len(), writes);

        driver.activate();
        frames.run(3000.0);
        frames.run(3400.0);
        assert_eq!(driver.displayed(), 40);
        assert!(!driver.is_running());
        assert_eq!(seen.borrow().last(), Some(&40));
    }

    #[test]
    fn discrete_driver_never_schedules() {
        let frames = ManualFrames::new();
        let (seen, listener) = recording();
        let driver =
            CountUpDriver::new(CounterSpec::new(2015, 2500, true).unwrap(), frames.clone(), listener);

        driver.activate();
        assert_eq!(frames.pending(), 0);
        assert_eq!(*seen.borrow(), vec![2015]);
    }

    #[test]
    fn denied_scheduling_falls_back_to_resting_value() {
        let (seen, listener) = recording();
        let driver = CountUpDriver::new(spec(500, 2500), DeniedFrames, listener);

        driver.activate();
        assert!(!driver.is_running());
        assert_eq!(driver.displayed(), 0);
        assert_eq!(seen.borrow().last(), Some(&0));
    }

    proptest! {
        #[test]
        fn completed_run_lands_exactly_on_target(target in 0u32..1_000_000, duration in 1u32..10_000) {
            let mut counter = CountUp::new(spec(target, duration));
            let token = counter.activate().unwrap();
            counter.tick(token, 0.0);
            prop_assert_eq!(counter.tick(token, f64::from(duration)), FrameStep::Complete);
            prop_assert_eq!(counter.displayed(), target);
        }

        #[test]
        fn displayed_is_monotonic_and_bounded(
            target in 0u32..100_000,
            duration in 1u32..5_000,
            mut stamps in proptest::collection::vec(0.0f64..6_000.0, 1..40),
        ) {
            stamps.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let mut counter = CountUp::new(spec(target, duration));
            let token = counter.activate().unwrap();
            let mut last = 0;
            for t in stamps {
                counter.tick(token, t);
                let shown = counter.displayed();
                prop_assert!(shown >= last);
                prop_assert!(shown <= target);
                last = shown;
            }
        }
    }
}
