//! Block-markup writer.
//!
//! Every block becomes an HTML comment delimiter carrying its attribute
//! object as JSON:
//!
//! ```text
//! <!-- wp:universal-block/element {"tagName":"img","contentType":"empty","selfClosing":true} /-->
//! <!-- wp:universal-block/element {"tagName":"div","contentType":"blocks"} -->
//! ...children...
//! <!-- /wp:universal-block/element -->
//! ```
//!
//! Unlike HTML output this format keeps every block field.

use crate::block::{Block, record::BlockAttrs};

/// Block kind used when none is configured.
pub const DEFAULT_BLOCK_NAME: &str = "universal-block/element";

/// Options shared by the markup writer and reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupOptions {
    /// Block kind written after `wp:`, e.g. `universal-block/element`.
    pub block_name: String,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            block_name: DEFAULT_BLOCK_NAME.to_string(),
        }
    }
}

impl MarkupOptions {
    /// Block kinds are lower-case in markup, so `name` is trimmed and lower-cased.
    pub fn new(block_name: impl AsRef<str>) -> Self {
        Self {
            block_name: block_name.as_ref().trim().to_ascii_lowercase(),
        }
    }
}

pub fn to_markup(forest: &[Block]) -> String {
    to_markup_with(forest, &MarkupOptions::default())
}

/// Serializes a forest; top-level blocks are separated by a blank line.
pub fn to_markup_with(forest: &[Block], options: &MarkupOptions) -> String {
    forest
        .iter()
        .map(|block| block_to_markup(block, options))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn block_to_markup(block: &Block, options: &MarkupOptions) -> String {
    let name = &options.block_name;
    let data = encode_attrs(&BlockAttrs::from_block(block));

    let children = block.children();
    if children.is_empty() {
        return format!("<!-- wp:{name} {data} /-->");
    }

    let inner = children
        .iter()
        .map(|child| block_to_markup(child, options))
        .collect::<Vec<_>>()
        .join("\n");
    format!("<!-- wp:{name} {data} -->\n{inner}\n<!-- /wp:{name} -->")
}

fn encode_attrs(attrs: &BlockAttrs) -> String {
    match serde_json::to_string(attrs) {
        Ok(json) => escape_for_comment(&json),
        Err(err) => {
            // Plain strings, bools and maps with string keys always serialize.
            log::error!("failed to encode block attributes for <{}>: {err}", attrs.tag_name);
            "{}".to_string()
        }
    }
}

/// Escapes JSON so it can sit inside an HTML comment.
///
/// `--`, `<`, `>`, `&` and escaped quotes become `\u` escapes, which JSON
/// readers decode back to the same characters.
pub fn escape_for_comment(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut chars = json.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => out.push_str("\\u0022"),
                Some(escaped) => {
                    out.push('\\');
                    out.push(escaped);
                }
                None => out.push('\\'),
            },
            '-' if chars.peek() == Some(&'-') => {
                chars.next();
                out.push_str("\\u002d\\u002d");
            }
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            c => out.push(c),
        }
    }
    out
}
