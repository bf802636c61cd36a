//! Document text handling
//!
//! The document is plain text owned by the editor surface. This module only
//! knows how to talk about positions in it.
//!
//! ## Modules
//!
//! - `offsets`: UTF-8 byte ↔ UTF-16 code unit conversion
//! - `range`: half-open offset ranges

pub mod offsets;
pub mod range;

pub use offsets::{utf16_len, Utf16Offsets};
pub use range::TextRange;
