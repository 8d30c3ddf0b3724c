//! Headless host loop driving the hooks: a 250ms ticker plus keyboard
//! hooks fed from a scripted event stream. Real platforms pump actual key
//! events into `keyboard::dispatch`; the loop shape is the same.

use std::cell::Cell;
use std::rc::Rc;
use std::thread;

use cadence_core::input::{Key, KeyEvent, Modifiers};
use cadence_core::runtime::{Composition, take_recompose_request};
use cadence_core::{clock, keyboard, timer};
use cadence_hooks::{use_escape, use_interval, use_meta_state};
use web_time::{Duration, Instant};

struct TickerView {
    ticks: u64,
    meta_held: bool,
}

fn ticker_app(stop: Rc<Cell<bool>>) -> TickerView {
    let ticks = use_interval(250);
    let meta_held = use_meta_state();
    use_escape(move || stop.set(true));
    TickerView { ticks, meta_held }
}

fn render(view: &TickerView) {
    println!("tick {:>3}  meta_held={}", view.ticks, view.meta_held);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stop = Rc::new(Cell::new(false));
    let mut instance = Composition::new();

    // Scripted input: shift held for a moment, then escape ends the run.
    let shift = Modifiers {
        shift: true,
        ..Default::default()
    };
    let script: Vec<(u64, KeyEvent)> = vec![
        (600, KeyEvent::down(Key::Shift, shift)),
        (1100, KeyEvent::up(Key::Shift, Modifiers::default())),
        (2100, KeyEvent::down(Key::Escape, Modifiers::default())),
    ];
    let started = clock::now();
    let mut script = script.into_iter().peekable();

    let view = instance.compose({
        let stop = stop.clone();
        move || ticker_app(stop)
    });
    render(&view);

    while !stop.get() {
        let now = clock::now();

        while let Some(&(at, _)) = script.peek() {
            if started + Duration::from_millis(at) > now {
                break;
            }
            if let Some((_, event)) = script.next() {
                keyboard::dispatch(&event)?;
            }
        }
        if stop.get() {
            break;
        }

        timer::pump(now)?;

        if take_recompose_request() {
            let view = instance.compose({
                let stop = stop.clone();
                move || ticker_app(stop)
            });
            render(&view);
        }

        let mut wake: Option<Instant> = timer::next_deadline();
        if let Some((at, _)) = script.peek() {
            let event_at = started + Duration::from_millis(*at);
            wake = Some(wake.map_or(event_at, |w| w.min(event_at)));
        }
        match wake {
            Some(t) => thread::sleep(t.saturating_duration_since(clock::now())),
            None => break,
        }
    }

    instance.dispose();
    log::info!(
        "stopped; {} timers armed, {} key listeners attached",
        timer::armed_count(),
        keyboard::listener_count()
    );
    Ok(())
}
