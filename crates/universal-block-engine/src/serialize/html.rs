use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, BlockContent};
use crate::parsing::is_void_element;

/// Characters not allowed in an emitted attribute name.
static INVALID_ATTR_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("static regex"));

/// Serializes a forest back into HTML, one top-level block per line.
///
/// Control fields are not HTML-visible and are dropped; use the markup
/// serializer to keep them.
pub fn to_html(forest: &[Block]) -> String {
    forest
        .iter()
        .map(block_to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn block_to_html(block: &Block) -> String {
    let tag = &block.tag_name;
    let attrs = attribute_string(block);

    if block.is_self_closing() || is_void_element(tag) {
        return format!("<{tag}{attrs} />");
    }

    let inner = match &block.content {
        BlockContent::Text(text) => html_escape::encode_text(text).into_owned(),
        BlockContent::Html(html) => html.clone(),
        BlockContent::Blocks(children) => to_html(children),
        BlockContent::Empty | BlockContent::SelfClosing => String::new(),
    };

    format!("<{tag}{attrs}>{inner}</{tag}>")
}

/// ` class="…"` followed by every generic attribute, each with a leading space.
fn attribute_string(block: &Block) -> String {
    let mut out = String::new();
    if !block.class_name.is_empty() {
        push_attr(&mut out, "class", &block.class_name);
    }
    for (name, value) in block.attributes.iter() {
        let name = sanitize_attr_name(name);
        if name.is_empty() {
            log::debug!("dropping attribute with no valid name characters on <{}>", block.tag_name);
            continue;
        }
        push_attr(&mut out, &name, value);
    }
    out
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_quoted_attribute(value));
    out.push('"');
}

/// Strips everything outside `[A-Za-z0-9_-]`.
pub fn sanitize_attr_name(name: &str) -> String {
    INVALID_ATTR_NAME_CHARS.replace_all(name, "").into_owned()
}
