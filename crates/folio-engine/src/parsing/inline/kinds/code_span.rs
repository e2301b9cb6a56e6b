/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no emphasis or link matching happens inside
/// them. While emphasis runs, each span is stood in for by a placeholder
/// shaped like an entity, `&code:N;`. Text reaching that stage has already
/// been escaped, so every literal `&` in it starts `&amp;`, `&lt;` or `&gt;`
/// and user text can never spell a placeholder.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
    pub const PLACEHOLDER_OPEN: &'static str = "&code:";
    pub const PLACEHOLDER_CLOSE: char = ';';

    pub fn placeholder(index: usize) -> String {
        format!(
            "{}{index}{}",
            Self::PLACEHOLDER_OPEN,
            Self::PLACEHOLDER_CLOSE
        )
    }
}
