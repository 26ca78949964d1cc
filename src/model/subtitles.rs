//! The ordered cue collection and its editing operations
//!
//! Editing is persistent-style: every operation returns a new collection and
//! never mutates in place. Removal renumbers the surviving cues to a
//! contiguous run starting at 1, in sequence order; this invariant is owned
//! here, not by the parser.

use std::collections::HashSet;
use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use crate::model::cue::Cue;
use crate::model::duration::Duration;

/// An ordered sequence of cues, in original appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtitles {
    pub cues: Vec<Cue>,
}

impl Subtitles {
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Returns a new collection with every cue shifted by the given offset.
    pub fn shift(&self, offset: Duration) -> Subtitles {
        Subtitles {
            cues: self.cues.iter().map(|cue| cue.shift(offset)).collect(),
        }
    }

    /// Returns a new collection without the cue at the given zero-based
    /// position. An out-of-range position returns the collection unchanged.
    pub fn remove_at(&self, position: usize) -> Subtitles {
        if position >= self.cues.len() {
            return self.clone();
        }

        let mut cues = self.cues.clone();
        cues.remove(position);
        Subtitles {
            cues: renumber(cues),
        }
    }

    /// Returns a new collection without the cues at the given zero-based
    /// positions. Out-of-range positions are ignored.
    pub fn remove_at_indices(&self, positions: &[usize]) -> Subtitles {
        let removed: HashSet<usize> = positions
            .iter()
            .copied()
            .filter(|&position| position < self.cues.len())
            .collect();

        let cues = self
            .cues
            .iter()
            .enumerate()
            .filter(|(i, _)| !removed.contains(i))
            .map(|(_, cue)| cue.clone())
            .collect();

        Subtitles {
            cues: renumber(cues),
        }
    }

    /// Serializes the collection in SRT wire form to the given writer and
    /// returns the number of bytes written.
    pub fn write<W: io::Write>(&self, writer: &mut W) -> io::Result<usize> {
        let output = self.to_string();
        writer.write_all(output.as_bytes())?;
        Ok(output.len())
    }
}

/// Reassigns indices to the contiguous run 1..=n, in sequence order.
fn renumber(mut cues: Vec<Cue>) -> Vec<Cue> {
    for (i, cue) in cues.iter_mut().enumerate() {
        cue.index = (i + 1) as u32;
    }
    cues
}

impl fmt::Display for Subtitles {
    /// Cue blocks joined by exactly one blank line, with no trailing
    /// separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cue) in self.cues.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", cue)?;
        }
        Ok(())
    }
}
