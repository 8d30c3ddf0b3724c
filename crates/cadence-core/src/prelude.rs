pub use crate::clock::{Clock, SystemClock, TestClock, set_clock};
pub use crate::effects::{Dispose, disposable_effect, effect, on_unmount};
pub use crate::error::RuntimeError;
pub use crate::input::{Key, KeyEvent, KeyPhase, Modifiers};
pub use crate::interval::{IntervalInput, IntervalMs};
pub use crate::keyboard::KeySubscription;
pub use crate::runtime::{
    Composition, remember, remember_state, remember_state_with_key, remember_with_key,
    request_recompose, take_recompose_request,
};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::signal::{Signal, signal};
pub use crate::timer::TimerHandle;
