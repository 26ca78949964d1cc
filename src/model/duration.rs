//! Signed millisecond offsets for cue timing
//!
//! A [`Duration`] is the time value carried by cue start/end fields and by
//! shift operations. Two renderings exist side by side: the wire form
//! `HH:MM:SS,mmm` used when serializing cues back to SRT text, and the
//! human-readable `HH:MM:SS.mmm` form used by `Display`. Both render the
//! absolute value; the sign of a negative offset is not shown.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A signed time offset with millisecond resolution.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Duration(i64);

impl Duration {
    pub const fn from_millis(millis: i64) -> Self {
        Duration(millis)
    }

    pub const fn from_secs(secs: i64) -> Self {
        Duration(secs * 1_000)
    }

    /// Combines fixed-width timestamp fields into one offset.
    pub fn from_parts(hours: i64, minutes: i64, seconds: i64, millis: i64) -> Self {
        Duration(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Renders the wire form `HH:MM:SS,mmm` (comma separator), used when a
    /// cue is serialized back to SRT text.
    pub fn to_timestamp(&self) -> String {
        let (hours, minutes, seconds, millis) = self.fields();
        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }

    /// Absolute-value field decomposition shared by both renderings.
    fn fields(&self) -> (i64, i64, i64, i64) {
        let millis = self.0.abs();
        (
            millis / 3_600_000,
            millis / 60_000 % 60,
            millis / 1_000 % 60,
            millis % 1_000,
        )
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration(self.0 + rhs.0)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes, seconds, millis) = self.fields();
        write!(f, "{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
    }
}
