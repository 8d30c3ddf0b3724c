//! Per-thread broadcast source for keyboard input.
//!
//! The platform pumps every key event into [`dispatch`]; each interested
//! component instance holds an opaque [`KeySubscription`] obtained from
//! [`subscribe`] and releases it on teardown. The source owns fan-out, so
//! no subscriber depends on another's lifecycle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::error::RuntimeError;
use crate::input::KeyEvent;

new_key_type! { pub struct ListenerKey; }

type Listener = Rc<dyn Fn(&KeyEvent)>;

thread_local! {
    static LISTENERS: RefCell<SlotMap<ListenerKey, Listener>> =
        RefCell::new(SlotMap::with_key());
    static DISPATCHING: Cell<bool> = const { Cell::new(false) };
}

/// Opaque handle to one attached listener. Releasing is explicit (hooks do
/// it from their scope disposer); dropping the handle leaves the listener
/// attached.
pub struct KeySubscription {
    key: ListenerKey,
}

impl KeySubscription {
    /// Detaches the listener. Idempotent; after this it is never invoked.
    pub fn release(&self) {
        LISTENERS.with(|l| {
            l.borrow_mut().remove(self.key);
        });
    }

    pub fn is_live(&self) -> bool {
        LISTENERS.with(|l| l.borrow().contains_key(self.key))
    }
}

/// Attaches `f` to the global key stream and returns its handle.
pub fn subscribe(f: impl Fn(&KeyEvent) + 'static) -> KeySubscription {
    let key = LISTENERS.with(|l| l.borrow_mut().insert(Rc::new(f)));
    KeySubscription { key }
}

pub fn listener_count() -> usize {
    LISTENERS.with(|l| l.borrow().len())
}

/// Fans `event` out to every listener attached when the dispatch started.
/// A listener released mid-dispatch is skipped; one attached mid-dispatch
/// sees only later events. Returns the number of listeners invoked.
pub fn dispatch(event: &KeyEvent) -> Result<usize, RuntimeError> {
    if DISPATCHING.with(|d| d.get()) {
        return Err(RuntimeError::ReentrantDispatch);
    }
    DISPATCHING.with(|d| d.set(true));

    let snapshot: SmallVec<[(ListenerKey, Listener); 8]> = LISTENERS.with(|l| {
        l.borrow()
            .iter()
            .map(|(k, f)| (k, f.clone()))
            .collect()
    });

    let mut delivered = 0;
    for (key, f) in snapshot {
        let live = LISTENERS.with(|l| l.borrow().contains_key(key));
        if !live {
            continue;
        }
        f(event);
        delivered += 1;
    }

    DISPATCHING.with(|d| d.set(false));
    Ok(delivered)
}
