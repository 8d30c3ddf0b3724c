#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use web_time::{Duration, Instant};

    use crate::clock::{TestClock, set_clock};
    use crate::input::{Key, KeyEvent, Modifiers};
    use crate::interval::{IntervalInput, resolve};
    use crate::runtime::{Composition, remember, remember_with_key, take_recompose_request};
    use crate::scope::Scope;
    use crate::signal::signal;
    use crate::{RuntimeError, disposable_effect, keyboard, on_unmount, timer};

    fn install_test_clock() -> (TestClock, Instant) {
        let t0 = Instant::now();
        let clock = TestClock::start_at(t0);
        set_clock(Rc::new(clock.clone()));
        (clock, t0)
    }

    #[test]
    fn resolve_empty_set_is_no_timer() {
        assert_eq!(resolve(&IntervalInput::Earliest(vec![]), 0), None);
        assert_eq!(resolve(&IntervalInput::Earliest(vec![]), 1000), None);
    }

    #[test]
    fn resolve_all_negative_set_is_no_timer() {
        assert_eq!(resolve(&IntervalInput::Earliest(vec![-5, -1]), 0), None);
        assert_eq!(resolve(&IntervalInput::Earliest(vec![-5, -1]), 100), None);
    }

    #[test]
    fn resolve_picks_smallest_non_negative() {
        assert_eq!(resolve(&IntervalInput::Earliest(vec![300, 1000]), 0), Some(300));
        assert_eq!(
            resolve(&IntervalInput::Earliest(vec![1000, -20, 300]), 0),
            Some(300)
        );
    }

    #[test]
    fn resolve_discards_negative_single() {
        assert_eq!(resolve(&IntervalInput::Every(-300), 1000), None);
        assert_eq!(resolve(&IntervalInput::Every(-1), 0), None);
    }

    #[test]
    fn resolve_raises_to_threshold() {
        assert_eq!(resolve(&IntervalInput::Every(300), 1000), Some(1000));
        assert_eq!(resolve(&IntervalInput::Earliest(vec![300, 600]), 500), Some(500));
    }

    #[test]
    fn resolve_leaves_values_above_threshold() {
        assert_eq!(resolve(&IntervalInput::Every(1500), 1000), Some(1500));
        assert_eq!(resolve(&IntervalInput::Every(0), 0), Some(0));
    }

    #[test]
    fn resolve_takes_negative_threshold_verbatim() {
        assert_eq!(resolve(&IntervalInput::Every(300), -1000), Some(300));
        assert_eq!(resolve(&IntervalInput::Every(0), -1), Some(0));
    }

    #[test]
    fn resolve_is_idempotent() {
        let input = IntervalInput::Earliest(vec![700, -3, 200]);
        let a = resolve(&input, 250);
        let b = resolve(&input, 250);
        assert_eq!(a, b);
        assert_eq!(a, Some(250));
    }

    #[test]
    fn interval_input_conversions() {
        assert_eq!(IntervalInput::from(500), IntervalInput::Every(500));
        assert_eq!(
            IntervalInput::from([300, 1000]),
            IntervalInput::Earliest(vec![300, 1000])
        );
        assert_eq!(
            IntervalInput::from(vec![-1, 2]),
            IntervalInput::Earliest(vec![-1, 2])
        );
        assert_eq!(
            IntervalInput::from(&[250][..]),
            IntervalInput::Earliest(vec![250])
        );
    }

    #[test]
    fn timer_fires_once_per_period() {
        let (_, t0) = install_test_clock();

        let fires = Rc::new(Cell::new(0u32));
        let handle = timer::schedule_repeating(Duration::from_millis(1000), {
            let fires = fires.clone();
            move || fires.set(fires.get() + 1)
        });

        assert_eq!(timer::pump(t0 + Duration::from_millis(999)).unwrap(), 0);
        assert_eq!(timer::pump(t0 + Duration::from_millis(1000)).unwrap(), 1);
        // re-armed a full period after the fire
        assert_eq!(
            timer::next_deadline(),
            Some(t0 + Duration::from_millis(2000))
        );

        assert_eq!(timer::pump(t0 + Duration::from_millis(2500)).unwrap(), 1);
        assert_eq!(timer::pump(t0 + Duration::from_millis(3500)).unwrap(), 1);
        assert_eq!(fires.get(), 3);

        handle.cancel();
        assert_eq!(timer::pump(t0 + Duration::from_millis(10_000)).unwrap(), 0);
        assert_eq!(fires.get(), 3);
    }

    #[test]
    fn timer_cancel_before_pump_suppresses_callback() {
        let (_, t0) = install_test_clock();

        let fired = Rc::new(Cell::new(false));
        let handle = timer::schedule_repeating(Duration::from_millis(100), {
            let fired = fired.clone();
            move || fired.set(true)
        });

        handle.cancel();
        assert!(!handle.is_live());
        assert_eq!(timer::pump(t0 + Duration::from_millis(500)).unwrap(), 0);
        assert!(!fired.get());
    }

    #[test]
    fn timer_cancel_inside_callback_stops_rearm() {
        let (_, t0) = install_test_clock();

        let handle_slot: Rc<RefCell<Option<timer::TimerHandle>>> = Rc::new(RefCell::new(None));
        let handle = timer::schedule_repeating(Duration::from_millis(100), {
            let handle_slot = handle_slot.clone();
            move || {
                if let Some(h) = handle_slot.borrow().as_ref() {
                    h.cancel();
                }
            }
        });
        *handle_slot.borrow_mut() = Some(handle.clone());

        assert_eq!(timer::pump(t0 + Duration::from_millis(100)).unwrap(), 1);
        assert!(!handle.is_live());
        assert_eq!(timer::next_deadline(), None);
        assert_eq!(timer::pump(t0 + Duration::from_millis(1000)).unwrap(), 0);
    }

    #[test]
    fn timer_next_deadline_tracks_earliest() {
        let (_, t0) = install_test_clock();

        let a = timer::schedule_repeating(Duration::from_millis(700), || {});
        let b = timer::schedule_repeating(Duration::from_millis(300), || {});

        assert_eq!(timer::next_deadline(), Some(t0 + Duration::from_millis(300)));
        b.cancel();
        assert_eq!(timer::next_deadline(), Some(t0 + Duration::from_millis(700)));
        a.cancel();
        assert_eq!(timer::next_deadline(), None);
    }

    #[test]
    fn keyboard_fans_out_to_all_subscribers() {
        let a_hits = Rc::new(Cell::new(0u32));
        let b_hits = Rc::new(Cell::new(0u32));

        let a = keyboard::subscribe({
            let a_hits = a_hits.clone();
            move |_| a_hits.set(a_hits.get() + 1)
        });
        let b = keyboard::subscribe({
            let b_hits = b_hits.clone();
            move |_| b_hits.set(b_hits.get() + 1)
        });

        let ev = KeyEvent::down(Key::Character('x'), Modifiers::default());
        assert_eq!(keyboard::dispatch(&ev).unwrap(), 2);
        assert_eq!((a_hits.get(), b_hits.get()), (1, 1));

        a.release();
        assert_eq!(keyboard::dispatch(&ev).unwrap(), 1);
        assert_eq!((a_hits.get(), b_hits.get()), (1, 2));

        b.release();
        assert_eq!(keyboard::dispatch(&ev).unwrap(), 0);
    }

    #[test]
    fn keyboard_release_mid_dispatch_skips_listener() {
        // Each listener releases the other: whichever runs first wins, the
        // other must not run at all.
        let a_hits = Rc::new(Cell::new(0u32));
        let b_hits = Rc::new(Cell::new(0u32));
        let subs: Rc<RefCell<Vec<keyboard::KeySubscription>>> = Rc::new(RefCell::new(Vec::new()));

        let a = keyboard::subscribe({
            let hits = a_hits.clone();
            let subs = subs.clone();
            move |_| {
                hits.set(hits.get() + 1);
                for s in subs.borrow().iter() {
                    s.release();
                }
            }
        });
        let b = keyboard::subscribe({
            let hits = b_hits.clone();
            let subs = subs.clone();
            move |_| {
                hits.set(hits.get() + 1);
                for s in subs.borrow().iter() {
                    s.release();
                }
            }
        });
        subs.borrow_mut().push(a);
        subs.borrow_mut().push(b);

        let ev = KeyEvent::down(Key::Enter, Modifiers::default());
        assert_eq!(keyboard::dispatch(&ev).unwrap(), 1);
        assert_eq!(a_hits.get() + b_hits.get(), 1);
        assert_eq!(keyboard::listener_count(), 0);
    }

    #[test]
    fn keyboard_dispatch_refuses_reentry() {
        let inner: Rc<RefCell<Option<Result<usize, RuntimeError>>>> = Rc::new(RefCell::new(None));
        let sub = keyboard::subscribe({
            let inner = inner.clone();
            move |e| {
                *inner.borrow_mut() = Some(keyboard::dispatch(e));
            }
        });

        let ev = KeyEvent::press(Key::Space, Modifiers::default());
        assert_eq!(keyboard::dispatch(&ev).unwrap(), 1);
        assert_eq!(
            *inner.borrow(),
            Some(Err(RuntimeError::ReentrantDispatch))
        );
        sub.release();
    }

    #[test]
    fn legacy_codes_match_the_usual_table() {
        assert_eq!(Key::Escape.legacy_code(), Some(27));
        assert_eq!(Key::Enter.legacy_code(), Some(13));
        assert_eq!(Key::Character('a').legacy_code(), Some(65));
        assert_eq!(Key::Character('7').legacy_code(), Some(55));
        assert_eq!(Key::F(1).legacy_code(), Some(112));
        assert_eq!(Key::Character('é').legacy_code(), None);
        assert_eq!(Key::Other(27).legacy_code(), Some(27));

        let esc = KeyEvent::down(Key::Escape, Modifiers::default());
        assert!(esc.is_escape());
        let other = KeyEvent::down(Key::Other(27), Modifiers::default());
        assert!(other.is_escape());
    }

    #[test]
    fn modifiers_any_held() {
        assert!(!Modifiers::default().any_held());
        for mods in [
            Modifiers { shift: true, ..Default::default() },
            Modifiers { ctrl: true, ..Default::default() },
            Modifiers { alt: true, ..Default::default() },
            Modifiers { meta: true, ..Default::default() },
        ] {
            assert!(mods.any_held());
        }
    }

    #[test]
    fn signal_basics() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);

        let seen = Rc::new(Cell::new(0));
        sig.subscribe({
            let seen = seen.clone();
            move |v| seen.set(*v)
        });
        sig.set(7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn effect_runs_now_and_cleans_up_on_dispose() {
        let ran = Rc::new(Cell::new(false));
        let cleaned = Rc::new(Cell::new(0u32));

        let scope = Scope::new();
        scope.run({
            let ran = ran.clone();
            let cleaned = cleaned.clone();
            move || {
                let ran2 = ran.clone();
                let cleaned2 = cleaned.clone();
                let d = crate::effect(move || {
                    ran2.set(true);
                    on_unmount(move || cleaned2.set(cleaned2.get() + 1))
                });
                assert!(ran.get());
                // running the guard twice still cleans up once
                d.run();
                d.run();
            }
        });

        assert_eq!(cleaned.get(), 1);
        scope.dispose(); // disposer already spent, stays at 1
        assert_eq!(cleaned.get(), 1);
    }

    #[test]
    fn scope_explicit_dispose_runs_disposers() {
        let cleaned_up = Rc::new(Cell::new(false));

        let scope = Scope::new();
        let flag = cleaned_up.clone();
        scope.add_disposer(move || flag.set(true));

        assert!(!cleaned_up.get());
        scope.dispose();
        assert!(cleaned_up.get());
    }

    #[test]
    fn remember_slots_survive_recomposition() {
        let mut instance = Composition::new();

        let first = instance.compose(|| {
            let count = remember(|| RefCell::new(0i32));
            *count.borrow_mut() += 1;
            *count.borrow()
        });
        let second = instance.compose(|| {
            let count = remember(|| RefCell::new(0i32));
            *count.borrow_mut() += 1;
            *count.borrow()
        });

        assert_eq!((first, second), (1, 2));
        instance.dispose();
    }

    #[test]
    fn remember_slots_are_per_instance() {
        let mut a = Composition::new();
        let mut b = Composition::new();

        let body = || {
            let count = remember(|| RefCell::new(0i32));
            *count.borrow_mut() += 1;
            *count.borrow()
        };

        assert_eq!(a.compose(body), 1);
        assert_eq!(b.compose(body), 1); // fresh instance, fresh slot
        assert_eq!(a.compose(body), 2);

        a.dispose();
        b.dispose();
    }

    #[test]
    fn keyed_remember_returns_first_value() {
        let mut instance = Composition::new();
        instance.compose(|| {
            let val1 = remember_with_key("test", || 42);
            let val2 = remember_with_key("test", || 100);
            assert_eq!(*val1, 42);
            assert_eq!(*val2, 42); // not 100, key exists
        });
        instance.dispose();
    }

    #[test]
    fn disposable_effect_reruns_on_key_change_only() {
        let runs = Rc::new(Cell::new(0u32));
        let cleanups = Rc::new(Cell::new(0u32));

        let body = |key: i32, runs: Rc<Cell<u32>>, cleanups: Rc<Cell<u32>>| {
            disposable_effect(key, move || {
                runs.set(runs.get() + 1);
                on_unmount(move || cleanups.set(cleanups.get() + 1))
            });
        };

        let mut instance = Composition::new();
        instance.compose(|| body(1, runs.clone(), cleanups.clone()));
        assert_eq!((runs.get(), cleanups.get()), (1, 0));

        // same key: nothing happens
        instance.compose(|| body(1, runs.clone(), cleanups.clone()));
        assert_eq!((runs.get(), cleanups.get()), (1, 0));

        // key change: old cleanup, new run
        instance.compose(|| body(2, runs.clone(), cleanups.clone()));
        assert_eq!((runs.get(), cleanups.get()), (2, 1));

        // disposal runs the last cleanup
        instance.dispose();
        assert_eq!((runs.get(), cleanups.get()), (2, 2));
    }

    #[test]
    fn recompose_request_is_taken_once() {
        assert!(!take_recompose_request());
        crate::runtime::request_recompose();
        assert!(take_recompose_request());
        assert!(!take_recompose_request());
    }
}
