use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;

thread_local! {
    static CURRENT: RefCell<Option<Rc<RefCell<Composer>>>> = const { RefCell::new(None) };
    static RECOMPOSE: Cell<bool> = const { Cell::new(false) };
}

/// Slot storage for one component instance. Slots are addressed by call
/// order within a composition pass, keyed slots by name.
#[derive(Default)]
pub struct Composer {
    slots: Vec<Box<dyn Any>>,
    cursor: usize,
    keyed_slots: HashMap<String, Box<dyn Any>>,
}

/// One live component instance: its slot storage plus the scope that owns
/// every cleanup registered by its hooks.
///
/// ```rust
/// use cadence_core::{Composition, remember_state};
///
/// let mut instance = Composition::new();
/// let n = instance.compose(|| {
///     let count = remember_state(|| 0i32);
///     *count.borrow_mut() += 1;
///     *count.borrow()
/// });
/// assert_eq!(n, 1);
/// let n = instance.compose(|| {
///     let count = remember_state(|| 0i32);
///     *count.borrow_mut() += 1;
///     *count.borrow()
/// });
/// assert_eq!(n, 2); // same slot, state survived recomposition
/// instance.dispose();
/// ```
pub struct Composition {
    composer: Rc<RefCell<Composer>>,
    scope: Scope,
}

impl Composition {
    pub fn new() -> Self {
        Self {
            composer: Rc::new(RefCell::new(Composer::default())),
            scope: Scope::new(),
        }
    }

    /// Runs one composition pass. Slot cursor restarts at zero, so hooks
    /// must be called in a stable order.
    pub fn compose<R>(&mut self, f: impl FnOnce() -> R) -> R {
        self.composer.borrow_mut().cursor = 0;
        let prev = CURRENT.with(|c| c.borrow_mut().replace(self.composer.clone()));
        let out = self.scope.run(f);
        CURRENT.with(|c| *c.borrow_mut() = prev);
        out
    }

    /// Tears the instance down, running every hook cleanup (timers cancel,
    /// key subscriptions release). No further fires can reach this instance.
    pub fn dispose(self) {
        self.scope.clone().dispose();
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::new()
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    let Some(composer) = CURRENT.with(|c| c.borrow().clone()) else {
        log::warn!("remember called outside a composition; value will not persist");
        return Rc::new(init());
    };

    let mut c = composer.borrow_mut();
    let cursor = c.cursor;
    c.cursor += 1;

    if cursor >= c.slots.len() {
        let rc: Rc<T> = Rc::new(init());
        c.slots.push(Box::new(rc.clone()));
        return rc;
    }

    if let Some(rc) = c.slots[cursor].downcast_ref::<Rc<T>>() {
        rc.clone()
    } else {
        // replace (else panics)
        log::warn!(
            "remember: slot {} type changed; replacing. \
             If this is due to conditional composition, prefer remember_with_key.",
            cursor
        );
        let rc: Rc<T> = Rc::new(init());
        c.slots[cursor] = Box::new(rc.clone());
        rc
    }
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let Some(composer) = CURRENT.with(|c| c.borrow().clone()) else {
        log::warn!("remember_with_key called outside a composition; value will not persist");
        return Rc::new(init());
    };

    let mut c = composer.borrow_mut();
    let key = key.into();

    if let Some(existing) = c.keyed_slots.get(&key) {
        if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
            return rc.clone();
        } else {
            log::warn!(
                "remember_with_key: key '{}' reused with a different type; replacing.",
                key
            );
        }
    }

    let rc: Rc<T> = Rc::new(init());
    c.keyed_slots.insert(key, Box::new(rc.clone()));
    rc
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

pub fn remember_state_with_key<T: 'static>(
    key: impl Into<String>,
    init: impl FnOnce() -> T,
) -> Rc<RefCell<T>> {
    remember_with_key(key, || RefCell::new(init()))
}

/// Asks the host loop for another composition pass. Timer and key callbacks
/// call this when they change remembered state.
pub fn request_recompose() {
    RECOMPOSE.with(|r| r.set(true));
}

/// Takes the pending recompose request, clearing it.
pub fn take_recompose_request() -> bool {
    RECOMPOSE.with(|r| r.replace(false))
}
