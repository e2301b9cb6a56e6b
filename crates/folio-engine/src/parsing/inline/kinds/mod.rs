//! # Inline Kinds
//!
//! Inline constructs own their delimiters and the tags they are rewritten
//! to.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'`, plus the side-table placeholder format
//! - **`Style`**: the markup tags emitted for bold, italic, code and links
//!
//! All delimiter and tag constants live here, not scattered in the
//! transformer or tokenizer.

pub mod code_span;
pub mod style;

pub use code_span::CodeSpan;
pub use style::Style;
