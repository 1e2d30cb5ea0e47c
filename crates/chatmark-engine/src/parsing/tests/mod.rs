//! Behavioural tests for `segment` and `resolve` together.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Document,
    blocks::Block,
    inline::InlineNode,
    resolve, segment,
    snapshot::{check_line, invariants},
};

fn plain(s: &str) -> InlineNode {
    InlineNode::PlainText(s.into())
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("\n")]
#[case("\n\n\n")]
#[case(" \t \n  \n\n ")]
fn blank_input_yields_empty_document(#[case] text: &str) {
    assert_eq!(segment(text), Document::default());
}

#[rstest]
#[case("#")]
#[case("**")]
#[case("[")]
#[case("](")]
#[case("- ")]
#[case("###")]
#[case("**[**](**)**")]
#[case("[[a](b)](c)")]
#[case("\n- \n#\n\n### \n")]
#[case("日本語 **太字** [リンク](https://例え.jp)")]
fn segment_is_total(#[case] text: &str) {
    let doc = segment(text);
    invariants(&doc);
}

#[test]
fn header_precedence() {
    let doc = segment("### Title");
    assert_eq!(
        doc.blocks,
        vec![Block::Header {
            level: 3,
            content: vec![plain("Title")]
        }]
    );
}

#[rstest]
#[case("# One", 1)]
#[case("## Two", 2)]
#[case("### Three", 3)]
fn header_levels(#[case] text: &str, #[case] level: u8) {
    let doc = segment(text);
    assert!(matches!(doc.blocks[..], [Block::Header { level: l, .. }] if l == level));
}

#[test]
fn hash_without_space_is_paragraph() {
    assert_eq!(
        segment("#").blocks,
        vec![Block::Paragraph {
            lines: vec![vec![plain("#")]]
        }]
    );
}

#[test]
fn bullet_round_trip() {
    let doc = segment("- item one\n- item two");
    assert_eq!(
        doc.blocks,
        vec![
            Block::BulletItem {
                content: vec![plain("item one")]
            },
            Block::BulletItem {
                content: vec![plain("item two")]
            },
        ]
    );
}

#[test]
fn empty_bullet() {
    assert_eq!(
        segment("- ").blocks,
        vec![Block::BulletItem { content: vec![] }]
    );
}

#[test]
fn soft_breaks_stay_separate_lines() {
    let doc = segment("first line\nsecond line");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            lines: vec![vec![plain("first line")], vec![plain("second line")]]
        }]
    );
}

#[test]
fn blank_line_runs_separate_paragraphs() {
    let doc = segment("one\n\n\ntwo");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Paragraph {
                lines: vec![vec![plain("one")]]
            },
            Block::Paragraph {
                lines: vec![vec![plain("two")]]
            },
        ]
    );
}

#[test]
fn whitespace_line_inside_paragraph_is_forced_break() {
    let doc = segment("one\n   \ntwo");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            lines: vec![vec![plain("one")], vec![], vec![plain("two")]]
        }]
    );
}

#[test]
fn trailing_newline_adds_nothing() {
    assert_eq!(segment("hello\n"), segment("hello"));
}

#[test]
fn whitespace_line_between_bullets_is_blank_block() {
    let doc = segment("- a\n \n- b");
    assert_eq!(
        doc.blocks,
        vec![
            Block::BulletItem {
                content: vec![plain("a")]
            },
            Block::Blank,
            Block::BulletItem {
                content: vec![plain("b")]
            },
        ]
    );
}

#[test]
fn header_interrupts_paragraph() {
    let doc = segment("intro\n## Risks\nbody");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Paragraph {
                lines: vec![vec![plain("intro")]]
            },
            Block::Header {
                level: 2,
                content: vec![plain("Risks")]
            },
            Block::Paragraph {
                lines: vec![vec![plain("body")]]
            },
        ]
    );
}

#[test]
fn inline_markup_inside_blocks() {
    let doc = segment("# **Big** news\n- see [report](https://x.io/r)");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Header {
                level: 1,
                content: vec![InlineNode::Bold("Big".into()), plain(" news")]
            },
            Block::BulletItem {
                content: vec![
                    plain("see "),
                    InlineNode::Link {
                        text: "report".into(),
                        url: "https://x.io/r".into()
                    }
                ]
            },
        ]
    );
}

#[test]
fn segment_is_idempotent() {
    let text = "## Outlook\n\n**Strong** demand.\n- [a](b)\n\n \nend";
    assert_eq!(segment(text), segment(text));
}

#[test]
fn link_precedence_over_bold() {
    let nodes = resolve("[x](y) and **[z](w)**");
    assert!(nodes.iter().all(|n| !matches!(n, InlineNode::Bold(_))));
    assert_eq!(
        nodes
            .iter()
            .filter(|n| matches!(n, InlineNode::Link { .. }))
            .count(),
        2
    );
}

#[test]
fn malformed_bold_is_inert() {
    assert_eq!(resolve("**unterminated"), vec![plain("**unterminated")]);
}

#[test]
fn empty_link_text_fallback_marker() {
    assert_eq!(
        resolve("[](http://x)"),
        vec![InlineNode::Link {
            text: String::new(),
            url: "http://x".into()
        }]
    );
}

#[rstest]
#[case("")]
#[case("plain")]
#[case("**a** **b**")]
#[case("**a****b**")]
#[case("***a***")]
#[case("**a*b**")]
#[case("**[x](y)**")]
#[case("[x](y) and **z**")]
#[case("[a **b](c) d**")]
#[case("**a [b**](u) **c**")]
#[case("[](http://x)")]
#[case("[x]()")]
#[case("[[a](b)](c)")]
#[case("a ](b) [c](d")]
#[case("ünï **cödé** [ł](ŋ) ✓")]
fn resolve_partitions_line(#[case] line: &str) {
    check_line(line, &resolve(line));
}

#[test]
fn serialized_shape() {
    let doc = segment("# Hi\n- [a](b)\n\n**x** y\n \nz\n\n- c\n \n- d");
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "blocks": [
                { "header": { "level": 1, "content": [ { "plain_text": "Hi" } ] } },
                { "bullet_item": { "content": [ { "link": { "text": "a", "url": "b" } } ] } },
                { "paragraph": { "lines": [
                    [ { "bold": "x" }, { "plain_text": " y" } ],
                    [],
                    [ { "plain_text": "z" } ]
                ] } },
                { "bullet_item": { "content": [ { "plain_text": "c" } ] } },
                "blank",
                { "bullet_item": { "content": [ { "plain_text": "d" } ] } }
            ]
        })
    );
}
