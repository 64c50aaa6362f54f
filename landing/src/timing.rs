// Browser timers owned by components
//
// Every timeout/interval a component arms lands in a `TimerSet` stored in the
// component's reactive owner, and `on_cleanup` cancels the set. Unmounting a
// section therefore stops all of its callbacks.

use std::time::Duration;

use ikul_core::timeline::{Timeline, advance};
use ikul_core::{CancelTimer, TimerSet};
use leptos::prelude::*;
use tracing::warn;

/// A Leptos timer handle.
#[derive(Clone, Copy, Debug)]
pub enum BrowserTimer {
    Timeout(TimeoutHandle),
    Interval(IntervalHandle),
}

impl CancelTimer for BrowserTimer {
    fn cancel(&self) {
        match self {
            BrowserTimer::Timeout(handle) => handle.clear(),
            BrowserTimer::Interval(handle) => handle.clear(),
        }
    }
}

/// Timers owned by one component.
pub type Timers = StoredValue<TimerSet<BrowserTimer>>;

/// A timer set cancelled when the current owner is cleaned up.
pub fn use_timers() -> Timers {
    let timers = StoredValue::new(TimerSet::new());
    on_cleanup(move || timers.update_value(TimerSet::cancel_all));
    timers
}

/// Arm a one-shot timer owned by `timers`.
pub fn schedule(timers: Timers, delay: Duration, callback: impl FnOnce() + 'static) {
    match set_timeout_with_handle(callback, delay) {
        Ok(handle) => timers.update_value(|set| set.push(BrowserTimer::Timeout(handle))),
        Err(err) => warn!(?err, "could not arm timeout"),
    }
}

/// Play `timeline` from now, writing phases into `set_phase`.
pub fn play<P>(timeline: &Timeline<P>, set_phase: WriteSignal<P>, timers: Timers)
where
    P: Clone + Ord + Send + Sync + 'static,
{
    for cue in timeline.cues() {
        let next = cue.phase.clone();
        schedule(timers, cue.at, move || {
            set_phase.update(|current| {
                advance(current, next);
            });
        });
    }
}

/// Play `timeline` from mount; the returned signal holds the active phase.
pub fn use_timeline<P>(timeline: Timeline<P>) -> ReadSignal<P>
where
    P: Clone + Ord + Send + Sync + 'static,
{
    let (phase, set_phase) = signal(timeline.initial().clone());
    play(&timeline, set_phase, use_timers());
    phase
}

/// Call `tick` every `period` until the owner is cleaned up.
pub fn use_interval(period: Duration, tick: impl Fn() + 'static) {
    let timers = use_timers();
    match set_interval_with_handle(tick, period) {
        Ok(handle) => timers.update_value(|set| set.push(BrowserTimer::Interval(handle))),
        Err(err) => warn!(?err, "could not arm interval"),
    }
}
