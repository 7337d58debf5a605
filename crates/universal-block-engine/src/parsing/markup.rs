//! Block-markup reader, the inverse of `serialize::markup`.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::block::{Block, BlockError, record::BlockAttrs};
use crate::serialize::MarkupOptions;

/// Opener, void opener or closer delimiter.
///
/// The attribute object cannot contain `-->` because the writer escapes `--`
/// and `>` inside JSON strings, so the lazy match ends at the real delimiter.
static DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<!--\s+(?P<closer>/)?wp:(?P<name>[a-z][a-z0-9_-]*(?:/[a-z][a-z0-9_-]*)?)\s+(?:(?P<attrs>\{.*?\})\s+)?(?P<void>/)?-->",
    )
    .expect("static regex")
});

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("unknown block `{name}` at byte {offset}")]
    UnknownBlock { name: String, offset: usize },

    #[error("block opener at byte {offset} has no attribute object")]
    MissingAttributes { offset: usize },

    #[error("invalid block attributes at byte {offset}: {source}")]
    InvalidAttributes {
        offset: usize,
        source: serde_json::Error,
    },

    #[error("invalid block at byte {offset}: {source}")]
    InvalidBlock { offset: usize, source: BlockError },

    #[error("closing delimiter at byte {offset} has no matching opener")]
    UnexpectedCloser { offset: usize },

    #[error("<{tag}> opened at byte {offset} is never closed")]
    Unclosed { tag: String, offset: usize },

    #[error("unexpected content at byte {offset}: {snippet:?}")]
    StrayContent { offset: usize, snippet: String },
}

struct OpenBlock {
    attrs: BlockAttrs,
    children: Vec<Block>,
    offset: usize,
}

pub fn parse_markup(text: &str) -> Result<Vec<Block>, MarkupError> {
    parse_markup_with(text, &MarkupOptions::default())
}

/// Reads a forest back from block markup.
///
/// Only whitespace may separate delimiters, and every delimiter must name
/// `options.block_name`.
pub fn parse_markup_with(text: &str, options: &MarkupOptions) -> Result<Vec<Block>, MarkupError> {
    let mut stack: Vec<OpenBlock> = Vec::new();
    let mut forest = Vec::new();
    let mut cursor = 0;

    for caps in DELIMITER.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let offset = whole.start();
        check_gap(text, cursor, offset)?;
        cursor = whole.end();

        let name = &caps["name"];
        if !name.eq_ignore_ascii_case(&options.block_name) {
            return Err(MarkupError::UnknownBlock {
                name: name.to_string(),
                offset,
            });
        }

        if caps.name("closer").is_some() {
            let open = stack
                .pop()
                .ok_or(MarkupError::UnexpectedCloser { offset })?;
            let block = open
                .attrs
                .into_block(open.children)
                .map_err(|source| MarkupError::InvalidBlock {
                    offset: open.offset,
                    source,
                })?;
            attach(&mut stack, &mut forest, block);
            continue;
        }

        let json = caps
            .name("attrs")
            .ok_or(MarkupError::MissingAttributes { offset })?
            .as_str();
        let attrs: BlockAttrs = serde_json::from_str(json)
            .map_err(|source| MarkupError::InvalidAttributes { offset, source })?;

        if caps.name("void").is_some() {
            let block = attrs
                .into_block(Vec::new())
                .map_err(|source| MarkupError::InvalidBlock { offset, source })?;
            attach(&mut stack, &mut forest, block);
        } else {
            stack.push(OpenBlock {
                attrs,
                children: Vec::new(),
                offset,
            });
        }
    }

    check_gap(text, cursor, text.len())?;

    if let Some(open) = stack.pop() {
        return Err(MarkupError::Unclosed {
            tag: open.attrs.tag_name,
            offset: open.offset,
        });
    }

    Ok(forest)
}

fn attach(stack: &mut [OpenBlock], forest: &mut Vec<Block>, block: Block) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(block),
        None => forest.push(block),
    }
}

fn check_gap(text: &str, start: usize, end: usize) -> Result<(), MarkupError> {
    let gap = &text[start..end];
    let trimmed = gap.trim_start();
    if trimmed.is_empty() {
        return Ok(());
    }
    Err(MarkupError::StrayContent {
        offset: end - trimmed.len(),
        snippet: trimmed.trim_end().chars().take(40).collect(),
    })
}
