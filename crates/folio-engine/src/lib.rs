pub mod parsing;
pub mod writer;

// Re-export key types for easier usage
pub use parsing::{
    blocks::Block,
    inline::{InlineText, InlineToken, Style, transform},
    parse_str, segment,
};
pub use writer::to_markdown;
