//! # HTML → Block Tree
//!
//! Parsing runs in two phases over an html5ever DOM:
//!
//! 1. **Classification** (`content_type`, `attributes`): each element is given a
//!    `ContentType` from its direct children, and its attribute list is split into
//!    class name, style, control directives and generic attributes
//!
//! 2. **Construction** (`builder`): a `BlockBuilder` walks the fragment's top-level nodes,
//!    recursing only into `blocks` content
//!
//! ## Modules
//!
//! - **`dom`**: html5ever parsing and DOM helpers (`textContent`, `innerHTML`)
//! - **`content_type`**: `ContentTypeClassifier`
//! - **`attributes`**: `AttributeClassifier` producing an `AttributeSet`
//! - **`tags`**: void elements and `BuildOptions`
//! - **`builder`**: `BlockBuilder`
//! - **`markup`**: reader for the block-markup text format
//!
//! ## Key Invariants
//!
//! - Building never fails: malformed HTML is repaired by the parser
//! - Self-closing tags always yield `BlockContent::SelfClosing`
//! - `<svg>` subtrees are kept as one `html` block

pub mod attributes;
pub mod builder;
pub mod content_type;
pub mod dom;
pub mod markup;
pub mod tags;

#[cfg(test)]
mod tests;

use crate::block::Block;

pub use attributes::{AttributeClassifier, AttributeSet};
pub use builder::BlockBuilder;
pub use content_type::ContentTypeClassifier;
pub use markup::{MarkupError, parse_markup, parse_markup_with};
pub use tags::{BuildOptions, VOID_ELEMENTS, is_void_element};

/// Parses an HTML fragment into a block forest with default options.
pub fn build_forest(html: &str) -> Vec<Block> {
    build_forest_with(html, &BuildOptions::default())
}

/// Parses an HTML fragment into a block forest.
///
/// Empty or whitespace-only input yields an empty forest.
pub fn build_forest_with(html: &str, options: &BuildOptions) -> Vec<Block> {
    // Handles are only valid while `dom` is alive
    let dom = dom::parse_fragment(html);
    match dom::fragment_root(&dom) {
        Some(root) => BlockBuilder::new(options).build_children(&root),
        None => {
            log::warn!("parser produced no fragment root; returning an empty forest");
            Vec::new()
        }
    }
}
