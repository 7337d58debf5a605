//! # Block Model
//!
//! The typed record produced by the HTML builder and consumed by both
//! serializers.
//!
//! ## Modules
//!
//! - **`attributes`**: `Attributes`, the ordered pass-through attribute bag
//! - **`controls`**: `ControlFields` and the `ControlAttr` vocabulary
//! - **`record`**: the camelCase attribute object shared by the markup format
//!   and JSON interchange, plus the validating conversion back into a `Block`
//!
//! ## Key Invariants
//!
//! - Text/HTML content exists only on `text`/`html` blocks and children only on
//!   `blocks` blocks; `BlockContent` makes any other combination unrepresentable
//! - A self-closing block has no content and no children
//! - `class` and `style` never appear as keys of `Block::attributes`

pub mod attributes;
pub mod controls;
pub mod record;

use serde::{Deserialize, Serialize};

pub use attributes::Attributes;
pub use controls::{ControlAttr, ControlFields};
pub use record::BlockError;

/// Reserved attribute key the `style` attribute is stored under.
pub const STYLE_KEY: &str = "data-style";

/// What a block holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Empty,
    Text,
    Html,
    Blocks,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Empty => "empty",
            ContentType::Text => "text",
            ContentType::Html => "html",
            ContentType::Blocks => "blocks",
        }
    }
}

/// The payload of a block, tagged by content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockContent {
    /// Void or configured self-closing element. Always `ContentType::Empty`.
    SelfClosing,
    Empty,
    /// Trimmed, decoded text.
    Text(String),
    /// Raw inner-HTML markup.
    Html(String),
    Blocks(Vec<Block>),
}

impl BlockContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            BlockContent::SelfClosing | BlockContent::Empty => ContentType::Empty,
            BlockContent::Text(_) => ContentType::Text,
            BlockContent::Html(_) => ContentType::Html,
            BlockContent::Blocks(_) => ContentType::Blocks,
        }
    }
}

/// A node of the block forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "record::BlockRecord", try_from = "record::BlockRecord")]
pub struct Block {
    /// Lower-cased tag or custom-element name.
    pub tag_name: String,
    /// Value of the `class` attribute; empty when there is none.
    pub class_name: String,
    pub attributes: Attributes,
    pub controls: ControlFields,
    pub content: BlockContent,
}

impl Block {
    /// An empty block with no attributes.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            class_name: String::new(),
            attributes: Attributes::new(),
            controls: ControlFields::default(),
            content: BlockContent::Empty,
        }
    }

    pub fn text(tag_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(tag_name).with_content(BlockContent::Text(text.into()))
    }

    pub fn html(tag_name: impl Into<String>, html: impl Into<String>) -> Self {
        Self::new(tag_name).with_content(BlockContent::Html(html.into()))
    }

    pub fn blocks(tag_name: impl Into<String>, children: Vec<Block>) -> Self {
        Self::new(tag_name).with_content(BlockContent::Blocks(children))
    }

    pub fn self_closing(tag_name: impl Into<String>) -> Self {
        Self::new(tag_name).with_content(BlockContent::SelfClosing)
    }

    pub fn with_content(mut self, content: BlockContent) -> Self {
        self.content = content;
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn with_controls(mut self, controls: ControlFields) -> Self {
        self.controls = controls;
        self
    }

    pub fn content_type(&self) -> ContentType {
        self.content.content_type()
    }

    pub fn is_self_closing(&self) -> bool {
        matches!(self.content, BlockContent::SelfClosing)
    }

    /// Text or HTML payload, if the block carries one.
    pub fn inner_content(&self) -> Option<&str> {
        match &self.content {
            BlockContent::Text(s) | BlockContent::Html(s) => Some(s),
            _ => None,
        }
    }

    /// Child blocks; empty for every content type but `blocks`.
    pub fn children(&self) -> &[Block] {
        match &self.content {
            BlockContent::Blocks(children) => children,
            _ => &[],
        }
    }

    /// The `style` value, stored under [`STYLE_KEY`].
    pub fn style(&self) -> Option<&str> {
        self.attributes.get(STYLE_KEY)
    }
}
