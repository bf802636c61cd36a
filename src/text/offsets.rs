//! Offset conversion between Rust string indices and editor offsets
//!
//! Rust slices strings by UTF-8 byte index, while the browser textarea and
//! `String.prototype.slice` count UTF-16 code units. Every offset that leaves
//! this crate is a UTF-16 offset.

/// Byte ↔ UTF-16 lookup table for one document
///
/// Built once per highlight cycle. Stores one entry per character boundary,
/// so lookups are a binary search.
#[derive(Debug, Clone)]
pub struct Utf16Offsets {
    /// (byte offset, utf16 offset) for every char boundary, including the end
    boundaries: Vec<(usize, usize)>,
}

impl Utf16Offsets {
    pub fn new(text: &str) -> Self {
        let mut boundaries = Vec::with_capacity(text.len() + 1);
        let mut utf16 = 0;
        for (byte, ch) in text.char_indices() {
            boundaries.push((byte, utf16));
            utf16 += ch.len_utf16();
        }
        boundaries.push((text.len(), utf16));
        Self { boundaries }
    }

    /// Document length in UTF-16 code units
    pub fn len_utf16(&self) -> usize {
        self.boundaries.last().map(|&(_, u)| u).unwrap_or(0)
    }

    /// Convert a byte offset to a UTF-16 offset
    ///
    /// Offsets that fall inside a multi-byte character resolve to the start
    /// of that character; offsets past the end clamp to the document length.
    pub fn to_utf16(&self, byte: usize) -> usize {
        match self.boundaries.binary_search_by_key(&byte, |&(b, _)| b) {
            Ok(idx) => self.boundaries[idx].1,
            Err(0) => 0,
            Err(idx) => self.boundaries[idx - 1].1,
        }
    }

    /// Byte offset of the character boundary following `byte`
    ///
    /// Used to force progress after an empty match. Returns `None` at the
    /// end of the document.
    pub fn next_boundary(&self, byte: usize) -> Option<usize> {
        let idx = match self.boundaries.binary_search_by_key(&byte, |&(b, _)| b) {
            Ok(idx) => idx + 1,
            Err(idx) => idx,
        };
        self.boundaries.get(idx).map(|&(b, _)| b)
    }
}

/// Length of a string in UTF-16 code units
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
