use cadence_core::interval::{self, IntervalInput, IntervalMs};
use cadence_core::timer;
use cadence_core::{disposable_effect, on_unmount, remember_state, request_recompose};
use web_time::Duration;

/// Ticks every `input` milliseconds and returns how many ticks this
/// component instance has seen.
///
/// `input` is a single interval or a set of candidates, of which the
/// smallest non-negative one wins. A negative interval, an empty set, or an
/// all-negative set means no timer runs and the count stays put. The count
/// resets with the instance, and no tick lands after the instance is
/// disposed.
pub fn use_interval(input: impl Into<IntervalInput>) -> u64 {
    use_interval_clamped(input, 0)
}

/// `use_interval` with a lower bound: an effective interval below
/// `threshold` milliseconds is raised to it.
pub fn use_interval_clamped(input: impl Into<IntervalInput>, threshold: IntervalMs) -> u64 {
    let ticks = remember_state(|| 0u64);
    let effective = interval::resolve(&input.into(), threshold);

    // Keyed on the effective interval: a change cancels the pending timer
    // and arms a fresh one; disposal cancels outright.
    disposable_effect(effective, {
        let ticks = ticks.clone();
        move || match effective {
            Some(ms) => {
                let period = Duration::from_millis(ms as u64);
                let handle = timer::schedule_repeating(period, move || {
                    *ticks.borrow_mut() += 1;
                    request_recompose();
                });
                on_unmount(move || handle.cancel())
            }
            None => on_unmount(|| {}),
        }
    });

    let count = *ticks.borrow();
    count
}
