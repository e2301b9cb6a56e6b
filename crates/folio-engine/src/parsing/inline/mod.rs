//! # Inline Transformation
//!
//! Turns one line of raw text into an [`InlineText`]: a string whose
//! structural characters are escaped and whose emphasis, code spans and
//! links have become markup tags.
//!
//! ## Modules
//!
//! - **`transform`**: `transform()`, the fixed escape/protect/emphasis/link/restore pipeline
//! - **`text`**: `InlineText` and the `InlineToken` view renderers consume
//! - **`kinds`**: owned delimiters and tags (CodeSpan, Style)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `**not bold**` `` becomes a single code
//! tag, and its content is never seen by the emphasis or link rules.

pub mod cursor;
pub mod kinds;
pub mod text;
pub mod transform;

pub use kinds::Style;
pub use text::{InlineText, InlineToken};
pub use transform::transform;
