//! # Composition runtime for Cadence
//!
//! Cadence's hooks sit on a small reactive core instead of an explicit
//! widget tree. The pieces here:
//!
//! - `Composition` / `remember*` — lifecycle-aware storage bound to one
//!   component instance.
//! - `Scope` / `effect` / `scoped_effect` — side-effects with cleanup.
//! - `timer` — the per-thread repeating-timer service.
//! - `keyboard` — the per-thread broadcast key-event source.
//! - `interval` — pure effective-interval resolution.
//!
//! ## Remembered state
//!
//! Hook state is held in `remember_*` slots rather than globals:
//!
//! ```rust
//! use cadence_core::*;
//!
//! let mut instance = Composition::new();
//! instance.compose(|| {
//!     let count = remember_state(|| 0u64);
//!     *count.borrow_mut() += 1;
//! });
//! instance.dispose();
//! ```
//!
//! - `remember` and `remember_state` are order-based: the Nth call in a
//!   composition pass always refers to the Nth stored value.
//! - `remember_with_key` and `remember_state_with_key` are key-based and
//!   more stable across conditional branches.
//!
//! ## Effects and cleanup
//!
//! ```rust
//! use cadence_core::*;
//!
//! let mut instance = Composition::new();
//! instance.compose(|| {
//!     scoped_effect(|| {
//!         log::info!("mounted");
//!         on_unmount(|| log::info!("unmounted"))
//!     });
//! });
//! instance.dispose(); // runs the unmount cleanup
//! ```
//!
//! Long-running work (timers, key listeners) is built on `scoped_effect`
//! so everything cleans up when the instance that owns it disappears.
//!
//! ## Driving the runtime
//!
//! A host loop recomposes when [`take_recompose_request`] says something
//! changed, sleeps until [`timer::next_deadline`], and feeds the services:
//! `timer::pump(clock::now())` for time, `keyboard::dispatch` for input.

pub mod clock;
pub mod effects;
pub mod error;
pub mod input;
pub mod interval;
pub mod keyboard;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod tests;
pub mod timer;

pub use clock::*;
pub use effects::*;
pub use error::*;
pub use input::*;
pub use interval::{IntervalInput, IntervalMs};
pub use prelude::*;
pub use runtime::*;
pub use scope::*;
pub use signal::*;
