//! Caret-aware text insertion.
//!
//! Offsets are counted in characters, not bytes, so a caret reported by an
//! editing surface over non-ASCII text lands where the operator sees it.

use serde::{Deserialize, Serialize};

/// A selection inside an editable buffer, `start..end` in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caret {
    pub start: usize,
    pub end: usize,
}

impl Caret {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Caret with no selected range
    pub fn collapsed(position: usize) -> Self {
        Self::new(position, position)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Result of splicing text into a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// Buffer after the splice
    pub text: String,
    /// Caret position immediately after the inserted text
    pub caret: usize,
}

/// Splice `inserted` into `buffer` at `caret`, replacing any selected range.
///
/// Without a caret the text is appended and the caret moves to the new end.
/// Offsets past the end of the buffer are clamped and a reversed range is
/// normalized.
pub fn insert_at_cursor(buffer: &str, caret: Option<Caret>, inserted: &str) -> Insertion {
    let inserted_len = inserted.chars().count();

    let Some(caret) = caret else {
        let mut text = String::with_capacity(buffer.len() + inserted.len());
        text.push_str(buffer);
        text.push_str(inserted);
        return Insertion {
            caret: buffer.chars().count() + inserted_len,
            text,
        };
    };

    let char_len = buffer.chars().count();
    let start = caret.start.min(caret.end).min(char_len);
    let end = caret.start.max(caret.end).min(char_len);

    let start_byte = byte_offset(buffer, start);
    let end_byte = byte_offset(buffer, end);

    let mut text = String::with_capacity(buffer.len() + inserted.len());
    text.push_str(&buffer[..start_byte]);
    text.push_str(inserted);
    text.push_str(&buffer[end_byte..]);

    Insertion {
        text,
        caret: start + inserted_len,
    }
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices()
        .nth(chars)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}
