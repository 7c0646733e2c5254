use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};
use regex::Regex;
use lazy_static::lazy_static;

use crate::markdown::types::TocEntry;

lazy_static! {
    // Trailing attribute list such as `{#install .wide}`
    static ref ATTR_LIST_REGEX: Regex = Regex::new(
        r"[ ]+\{:?[ ]*[^}\n ][^\n]*[ ]*\}[ ]*$"
    ).unwrap();
}

/// Extract the table of contents from markdown, in document order.
/// Only markdown headings count; `<hN>` inside raw HTML blocks does not.
pub fn extract_toc<'o>(markdown: &str, options: &Options<'o>) -> Vec<TocEntry> {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, options);

    root.descendants()
        .filter_map(|node| {
            let level = match node.data.borrow().value {
                NodeValue::Heading(ref heading) => heading.level as usize,
                _ => return None,
            };

            Some(TocEntry {
                level,
                name: strip_attr_list(&heading_text(node)),
            })
        })
        .collect()
}

/// Plain text of a heading: text and code spans, inline HTML dropped
fn heading_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();

    for child in node.descendants() {
        match child.data.borrow().value {
            NodeValue::Text(ref literal) => text.push_str(literal),
            NodeValue::Code(ref code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }

    text.trim().to_string()
}

fn strip_attr_list(text: &str) -> String {
    ATTR_LIST_REGEX.replace(text, "").trim().to_string()
}
