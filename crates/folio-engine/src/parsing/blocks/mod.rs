//! # Block Segmentation
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding only local facts (fence, list item, heading, rule, blank, text)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` carries the parser
//!    mode (`Normal`, `InCodeBlock`, `InList`) across lines and emits `Block`s
//!    as they complete
//!
//! ## Modules
//!
//! - **`types`**: the `Block` enum handed to renderers
//! - **`kinds`**: block-specific types with owned delimiters (CodeFence, Heading, ListItem, ThematicBreak)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A list never spans a code fence; opening a fence closes the list
//! - Nothing is dropped at end of input: open lists and fences are flushed

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::Block;
