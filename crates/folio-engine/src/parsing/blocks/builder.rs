use crate::parsing::inline::{InlineText, transform};

use super::{
    classify::{LineClass, LineKind},
    types::Block,
};

/// Parser mode carried from one line to the next.
///
/// Each mode owns the accumulator for the block it is building, so a list
/// and a code block can never be open at the same time.
#[derive(Debug)]
enum Mode {
    Normal,
    InCodeBlock {
        language: Option<String>,
        lines: Vec<String>,
    },
    InList {
        items: Vec<InlineText>,
    },
}

pub struct BlockBuilder {
    mode: Mode,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.in_code_block() {
            self.consume_code_line(c);
            return;
        }

        match &c.kind {
            LineKind::Fence(sig) => {
                self.flush_list();
                self.mode = Mode::InCodeBlock {
                    language: sig.info.clone(),
                    lines: vec![],
                };
            }
            LineKind::ListItem(text) => self.extend_list(transform(text)),
            LineKind::Heading { level, text } => {
                self.flush_list();
                self.emit(Block::Heading {
                    level: *level,
                    text: transform(text),
                });
            }
            LineKind::Rule => {
                self.flush_list();
                self.emit(Block::Rule);
            }
            LineKind::Blank => self.flush_list(),
            LineKind::Text(text) => {
                self.flush_list();
                self.emit(Block::Paragraph {
                    text: transform(text),
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.flush_code_block();
        self.out
    }

    fn in_code_block(&self) -> bool {
        matches!(self.mode, Mode::InCodeBlock { .. })
    }

    fn emit(&mut self, block: Block) {
        log::trace!("emit {} block #{}", block.kind_name(), self.out.len());
        self.out.push(block);
    }

    fn consume_code_line(&mut self, c: &LineClass<'_>) {
        if matches!(c.kind, LineKind::Fence(_)) {
            self.close_code_block();
            return;
        }
        if let Mode::InCodeBlock { lines, .. } = &mut self.mode {
            lines.push(c.raw.to_string());
        }
    }

    fn close_code_block(&mut self) {
        let prev = std::mem::replace(&mut self.mode, Mode::Normal);
        if let Mode::InCodeBlock { language, lines } = prev {
            self.emit(Block::CodeBlock {
                language,
                raw_lines: lines,
            });
        } else {
            self.mode = prev;
        }
    }

    fn flush_code_block(&mut self) {
        if let Mode::InCodeBlock { lines, .. } = &self.mode {
            // Unterminated fence: emit as code block anyway
            log::debug!("unterminated code fence, keeping {} line(s)", lines.len());
            self.close_code_block();
        }
    }

    fn extend_list(&mut self, item: InlineText) {
        if let Mode::InList { items } = &mut self.mode {
            items.push(item);
            return;
        }
        self.mode = Mode::InList { items: vec![item] };
    }

    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.mode, Mode::Normal);
        if let Mode::InList { items } = prev {
            if !items.is_empty() {
                self.emit(Block::List { items });
            }
        } else {
            self.mode = prev; // put back non-list mode
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
