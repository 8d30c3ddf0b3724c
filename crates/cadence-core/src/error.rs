use thiserror::Error;

/// Host-facing failures. Hook-facing surfaces never raise; invalid hook
/// input degrades to "no timer" / "no subscription" instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// `timer::pump` was called from inside a timer callback.
    #[error("timer pump re-entered from a timer callback")]
    ReentrantPump,
    /// `keyboard::dispatch` was called from inside a key listener.
    #[error("keyboard dispatch re-entered from a key listener")]
    ReentrantDispatch,
}
