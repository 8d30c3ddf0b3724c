//! Effective-interval resolution.
//!
//! Intervals are signed milliseconds; negative values are "not applicable"
//! markers, never valid delays. A caller may hand over one interval or a
//! set of candidates, of which the smallest applicable one wins.

/// Signed milliseconds. Negative means "not applicable".
pub type IntervalMs = i64;

/// What a caller asked to tick on: a single interval, or the earliest of a
/// set of candidates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntervalInput {
    Every(IntervalMs),
    Earliest(Vec<IntervalMs>),
}

impl From<IntervalMs> for IntervalInput {
    fn from(ms: IntervalMs) -> Self {
        IntervalInput::Every(ms)
    }
}

impl From<Vec<IntervalMs>> for IntervalInput {
    fn from(set: Vec<IntervalMs>) -> Self {
        IntervalInput::Earliest(set)
    }
}

impl<const N: usize> From<[IntervalMs; N]> for IntervalInput {
    fn from(set: [IntervalMs; N]) -> Self {
        IntervalInput::Earliest(set.to_vec())
    }
}

impl From<&[IntervalMs]> for IntervalInput {
    fn from(set: &[IntervalMs]) -> Self {
        IntervalInput::Earliest(set.to_vec())
    }
}

/// Picks the effective delay for `input`, or `None` for "no timer".
///
/// A candidate set contributes its smallest non-negative element; an empty
/// or all-negative set resolves to no timer at all. A surviving value below
/// `threshold` is raised to it. The threshold is taken verbatim; a negative
/// one never raises anything.
pub fn resolve(input: &IntervalInput, threshold: IntervalMs) -> Option<IntervalMs> {
    let ms = match input {
        IntervalInput::Every(ms) => *ms,
        IntervalInput::Earliest(set) => set.iter().copied().filter(|ms| *ms >= 0).min()?,
    };
    if ms < 0 {
        return None;
    }
    Some(ms.max(threshold))
}
