//! # Timing and keyboard hooks
//!
//! Convenience helpers for Cadence components: a periodic timer hook and a
//! family of keyboard subscription hooks. Each one registers its listener
//! (timer or key) when the component instance first composes and releases
//! it when the instance is disposed; recomposition never stacks a second
//! registration.
//!
//! ```rust
//! use cadence_core::Composition;
//! use cadence_hooks::{use_interval, use_meta_state};
//!
//! fn status_line() -> String {
//!     let ticks = use_interval(1000);
//!     let meta = use_meta_state();
//!     format!("uptime {ticks}s, modifier held: {meta}")
//! }
//!
//! let mut instance = Composition::new();
//! let line = instance.compose(status_line);
//! assert_eq!(line, "uptime 0s, modifier held: false");
//! instance.dispose();
//! ```
//!
//! The host loop drives everything: it pumps `cadence_core::timer` with the
//! current clock reading, feeds key events to `cadence_core::keyboard`, and
//! recomposes when `take_recompose_request()` reports a change.

pub mod interval;
pub mod keys;

pub use interval::{use_interval, use_interval_clamped};
pub use keys::{use_escape, use_key_event, use_key_press, use_meta_change, use_meta_state};
