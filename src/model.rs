//! Cue data model: durations, cues, and the editable collection
//!
//! Everything here operates on already-parsed data; the grammar and all
//! positional error reporting live in the lexing and parsing areas.

pub mod cue;
pub mod duration;
pub mod subtitles;

pub use cue::Cue;
pub use duration::Duration;
pub use subtitles::Subtitles;
