use std::cell::Cell;

use cadence_core::input::{KeyEvent, KeyPhase};
use cadence_core::keyboard;
use cadence_core::{disposable_effect, on_unmount, remember, request_recompose, signal};

/// One subscription per call-site, held for the instance lifetime.
fn use_key_listener(f: impl Fn(&KeyEvent) + 'static) {
    disposable_effect((), move || {
        let sub = keyboard::subscribe(f);
        on_unmount(move || sub.release())
    });
}

/// Invokes `f` for every key event: down, up, and press.
pub fn use_key_event(f: impl Fn(&KeyEvent) + 'static) {
    use_key_listener(f);
}

/// Invokes `f` for key-press events only.
pub fn use_key_press(f: impl Fn(&KeyEvent) + 'static) {
    use_key_listener(move |e| {
        if e.phase == KeyPhase::Press {
            f(e)
        }
    });
}

/// Invokes `f` when the escape key goes down (legacy key code 27).
pub fn use_escape(f: impl Fn() + 'static) {
    use_key_listener(move |e| {
        if e.phase == KeyPhase::Down && e.is_escape() {
            f()
        }
    });
}

/// Invokes `f` whenever the held-state of shift/meta/alt/control flips, as
/// observed on key-down and key-up events.
pub fn use_meta_change(f: impl Fn(bool) + 'static) {
    let held = remember(|| Cell::new(false));
    use_key_listener(move |e| {
        if e.phase == KeyPhase::Press {
            return;
        }
        let now_held = e.modifiers.any_held();
        if now_held != held.get() {
            held.set(now_held);
            f(now_held);
        }
    });
}

/// State-returning variant of [`use_meta_change`]: true exactly while any
/// of shift, platform-meta, alt, or control is held.
pub fn use_meta_state() -> bool {
    let held = remember(|| signal(false));
    {
        let held = held.clone();
        use_key_listener(move |e| {
            if e.phase == KeyPhase::Press {
                return;
            }
            let now_held = e.modifiers.any_held();
            if held.get() != now_held {
                held.set(now_held);
                request_recompose();
            }
        });
    }
    held.get()
}
