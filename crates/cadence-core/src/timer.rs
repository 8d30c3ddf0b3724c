//! Per-thread repeating-timer service.
//!
//! A repeating timer here is a one-shot that `pump` re-arms after each
//! fire, so every tick waits the full period from the moment it fired.
//! The host loop owns the cadence: sleep until [`next_deadline`], then
//! call [`pump`] with the current clock reading.
//!
//! Cancellation is synchronous: a handle canceled before `pump` observes
//! its deadline guarantees the callback never runs.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use web_time::{Duration, Instant};

use crate::clock;
use crate::error::RuntimeError;

new_key_type! { pub struct TimerKey; }

struct Entry {
    deadline: Instant,
    period: Duration,
    callback: Rc<dyn Fn()>,
}

thread_local! {
    static TIMERS: RefCell<SlotMap<TimerKey, Entry>> = RefCell::new(SlotMap::with_key());
    static PUMPING: Cell<bool> = const { Cell::new(false) };
}

/// Opaque handle to a scheduled timer.
#[derive(Clone)]
pub struct TimerHandle {
    key: TimerKey,
}

impl TimerHandle {
    /// Removes the timer. Idempotent; after this the callback never runs.
    pub fn cancel(&self) {
        TIMERS.with(|t| {
            t.borrow_mut().remove(self.key);
        });
    }

    pub fn is_live(&self) -> bool {
        TIMERS.with(|t| t.borrow().contains_key(self.key))
    }
}

/// Arms a timer that fires every `period`, starting one period from now.
pub fn schedule_repeating(period: Duration, callback: impl Fn() + 'static) -> TimerHandle {
    let key = TIMERS.with(|t| {
        t.borrow_mut().insert(Entry {
            deadline: clock::now() + period,
            period,
            callback: Rc::new(callback),
        })
    });
    TimerHandle { key }
}

/// Earliest pending deadline, if any timer is armed.
pub fn next_deadline() -> Option<Instant> {
    TIMERS.with(|t| t.borrow().values().map(|e| e.deadline).min())
}

pub fn armed_count() -> usize {
    TIMERS.with(|t| t.borrow().len())
}

/// Fires every timer due at `now` and re-arms each one still live as a
/// fresh one-shot at `now + period`. Returns the number of fires.
///
/// Callbacks run outside the service borrow, so they may schedule or
/// cancel timers; a callback canceling its own timer suppresses the
/// re-arm. Calling `pump` from inside a callback is refused.
pub fn pump(now: Instant) -> Result<usize, RuntimeError> {
    if PUMPING.with(|p| p.get()) {
        return Err(RuntimeError::ReentrantPump);
    }
    PUMPING.with(|p| p.set(true));

    let due: SmallVec<[(TimerKey, Rc<dyn Fn()>); 4]> = TIMERS.with(|t| {
        t.borrow()
            .iter()
            .filter(|(_, e)| e.deadline <= now)
            .map(|(k, e)| (k, e.callback.clone()))
            .collect()
    });

    let mut fired = 0;
    for (key, callback) in due {
        // an earlier callback in this batch may have canceled it
        let live = TIMERS.with(|t| t.borrow().contains_key(key));
        if !live {
            continue;
        }

        callback();
        fired += 1;

        TIMERS.with(|t| {
            if let Some(e) = t.borrow_mut().get_mut(key) {
                e.deadline = now + e.period;
            }
        });
    }

    PUMPING.with(|p| p.set(false));
    Ok(fired)
}
