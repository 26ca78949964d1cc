//! A single subtitle cue
//!
//! One cue is the product of exactly one grammar match: an index, a start
//! and end time, and the caption text (possibly multi-line). Cues are
//! immutable once created; editing operations return new values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::duration::Duration;

/// One subtitle entry.
///
/// The parser assigns `index` literally from the input; it is not validated
/// to be sequential or unique, and no ordering invariant is enforced between
/// `start` and `end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    pub index: u32,
    pub start: Duration,
    pub end: Duration,
    pub text: String,
}

impl Cue {
    /// Returns a new cue with both times shifted by the given offset.
    pub fn shift(&self, offset: Duration) -> Cue {
        Cue {
            index: self.index,
            start: self.start + offset,
            end: self.end + offset,
            text: self.text.clone(),
        }
    }
}

impl fmt::Display for Cue {
    /// Renders the cue as one SRT block: index line, timestamp range line
    /// with comma milliseconds, then the caption text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{} --> {}\n{}",
            self.index,
            self.start.to_timestamp(),
            self.end.to_timestamp(),
            self.text
        )
    }
}
