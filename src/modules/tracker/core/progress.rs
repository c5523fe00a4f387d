//! Progress values and the rollup mean.
//!
//! The external representation is a single integer in {-1} ∪ [0, 100], where
//! -1 marks a cancelled item and is distinct from 0 ("not started"). Inside
//! the crate the value is carried as a tagged variant so the sentinel cannot
//! leak into arithmetic by accident; only [`aggregate_progress`] averages the
//! raw integers, which is the behavior the stored data depends on.

/// A validated progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Cancelled,
    Percent(u8),
}

impl Progress {
    /// Parses a raw integer, rejecting anything outside {-1} ∪ [0, 100].
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            -1 => Some(Self::Cancelled),
            0..=100 => Some(Self::Percent(raw as u8)),
            _ => None,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            Self::Cancelled => -1,
            Self::Percent(p) => i32::from(p),
        }
    }
}

/// Round-half-up arithmetic mean of the child progress values.
///
/// An empty slice means "no children" and reads as not started (0). Ties
/// round toward positive infinity, which matters for the negative means a
/// cancelled-heavy mix can produce.
pub fn aggregate_progress(children: &[i32]) -> i32 {
    if children.is_empty() {
        return 0;
    }
    let sum: i64 = children.iter().map(|&v| i64::from(v)).sum();
    let mean = sum as f64 / children.len() as f64;
    (mean + 0.5).floor() as i32
}

/// Effective progress of an activity: the subtask mean when subtasks exist,
/// otherwise the activity's own stored value.
pub fn effective_activity_progress(own: i32, subtask_values: &[i32]) -> i32 {
    if subtask_values.is_empty() {
        own
    } else {
        aggregate_progress(subtask_values)
    }
}
