use folio_engine::{Block, parse_str, segment, transform};
use pretty_assertions::assert_eq;

#[test]
fn fixture_release_notes() {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/release_notes.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let blocks = parse_str(&md);

    assert_eq!(
        blocks,
        vec![
            Block::heading(1, "Release Notes"),
            Block::paragraph("Version **2.1** brings *faster* parsing & fewer surprises."),
            Block::heading(2, "Highlights"),
            Block::list([
                "Code spans like `a < b` are kept intact",
                "Links such as [the guide](https://example.com/guide) keep their label",
                "Mixed markers share one list",
            ]),
            Block::code(
                Some("toml"),
                ["[render]", "page_size = \"a4\"   # *not* emphasis"]
            ),
            Block::Rule,
            Block::heading(3, "Known issues"),
            Block::paragraph("Unterminated `code and stray * markers stay literal."),
            Block::code(None, ["fn broken() {"]),
        ]
    );
}

#[test]
fn fixture_release_notes_inline_markup() {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/release_notes.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let blocks = parse_str(&md);
    let Block::List { items } = &blocks[3] else {
        panic!("expected List, got {:?}", blocks[3]);
    };
    let items: Vec<&str> = items.iter().map(|i| i.as_str()).collect();
    assert_eq!(
        items,
        vec![
            "Code spans like <code>a &lt; b</code> are kept intact",
            "Links such as <link>the guide</link> keep their label",
            "Mixed markers share one list",
        ]
    );
}

#[test]
fn plain_line_is_one_escaped_paragraph() {
    let blocks = segment(["Fish & chips <cheap>"]);
    assert_eq!(blocks.len(), 1);
    let Block::Paragraph { text } = &blocks[0] else {
        panic!("expected Paragraph");
    };
    assert_eq!(text.as_str(), "Fish &amp; chips &lt;cheap&gt;");
}

#[test]
fn fenced_block_is_not_transformed() {
    let blocks = segment(["```", "code", "```"]);
    assert_eq!(blocks, vec![Block::code(None, ["code"])]);

    let blocks = segment(["```", "**x** & <y>", "```"]);
    assert_eq!(blocks, vec![Block::code(None, ["**x** & <y>"])]);
}

#[test]
fn list_followed_by_blank_line() {
    let blocks = segment(["- a", "- b", ""]);
    assert_eq!(blocks, vec![Block::list(["a", "b"])]);
}

#[test]
fn title_then_section_carries_page_break() {
    let blocks = segment(["# Title", "## Section"]);
    assert_eq!(
        blocks,
        vec![Block::heading(1, "Title"), Block::heading(2, "Section")]
    );
    assert!(!blocks[0].page_break_before());
    assert!(blocks[1].page_break_before());
}

#[test]
fn rule_alone() {
    assert_eq!(segment(["---"]), vec![Block::Rule]);
}

#[test]
fn list_marker_inside_code_is_code() {
    let blocks = segment(["```", "- item", "```"]);
    assert_eq!(blocks, vec![Block::code(None, ["- item"])]);
}

#[test]
fn independent_spans() {
    assert_eq!(transform("*x* and *y*").as_str(), "<i>x</i> and <i>y</i>");
    assert_eq!(
        transform("`a` and `b`").as_str(),
        "<code>a</code> and <code>b</code>"
    );
}

#[test]
fn parses_are_independent() {
    // An unterminated fence in one document must not leak into the next.
    let first = parse_str("```\nopen");
    let second = parse_str("- item");
    assert_eq!(first, vec![Block::code(None, ["open"])]);
    assert_eq!(second, vec![Block::list(["item"])]);
}
