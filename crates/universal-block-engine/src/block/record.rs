//! The serialized attribute object of a block.
//!
//! [`BlockAttrs`] is the data blob carried inside markup delimiters; it holds
//! every field except children, which the markup format expresses by nesting.
//! [`BlockRecord`] adds `innerBlocks` for JSON interchange.
//!
//! Turning a record back into a [`Block`] goes through [`BlockAttrs::into_block`],
//! the single place that rejects records violating the block invariants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Attributes, Block, BlockContent, ContentType, ControlFields};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("block has an empty tag name")]
    EmptyTagName,

    #[error("<{tag}> is self-closing but declares content type `{content_type}`")]
    SelfClosingWithContent {
        tag: String,
        content_type: &'static str,
    },

    #[error("<{tag}> of content type `{content_type}` cannot carry content")]
    UnexpectedContent {
        tag: String,
        content_type: &'static str,
    },

    #[error("<{tag}> of content type `{content_type}` cannot have child blocks")]
    UnexpectedChildren {
        tag: String,
        content_type: &'static str,
    },
}

/// Every block field except children, in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockAttrs {
    pub tag_name: String,
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "is_false")]
    pub self_closing: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub controls: ControlFields,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl BlockAttrs {
    pub fn from_block(block: &Block) -> Self {
        Self {
            tag_name: block.tag_name.clone(),
            content_type: block.content_type(),
            self_closing: block.is_self_closing(),
            class_name: block.class_name.clone(),
            attributes: block.attributes.clone(),
            content: block.inner_content().map(str::to_string),
            controls: block.controls.clone(),
        }
    }

    /// Rebuilds a block, attaching `children` when the record allows them.
    pub fn into_block(self, children: Vec<Block>) -> Result<Block, BlockError> {
        if self.tag_name.is_empty() {
            return Err(BlockError::EmptyTagName);
        }

        let content_type = self.content_type.as_str();
        let has_content = self.content.as_deref().is_some_and(|c| !c.is_empty());

        if self.content_type != ContentType::Blocks && !children.is_empty() {
            return Err(BlockError::UnexpectedChildren {
                tag: self.tag_name,
                content_type,
            });
        }

        let content = match (self.content_type, self.self_closing) {
            (ContentType::Empty, _) if has_content => {
                return Err(BlockError::UnexpectedContent {
                    tag: self.tag_name,
                    content_type,
                });
            }
            (ContentType::Empty, true) => BlockContent::SelfClosing,
            (ContentType::Empty, false) => BlockContent::Empty,
            (_, true) => {
                return Err(BlockError::SelfClosingWithContent {
                    tag: self.tag_name,
                    content_type,
                });
            }
            (ContentType::Text, false) => BlockContent::Text(self.content.unwrap_or_default()),
            (ContentType::Html, false) => BlockContent::Html(self.content.unwrap_or_default()),
            (ContentType::Blocks, false) => {
                if self.content.is_some() {
                    return Err(BlockError::UnexpectedContent {
                        tag: self.tag_name,
                        content_type,
                    });
                }
                BlockContent::Blocks(children)
            }
        };

        Ok(Block {
            tag_name: self.tag_name,
            class_name: self.class_name,
            attributes: self.attributes,
            controls: self.controls,
            content,
        })
    }
}

/// JSON form of a block: the attribute object plus nested `innerBlocks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRecord {
    #[serde(flatten)]
    pub attrs: BlockAttrs,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner_blocks: Vec<Block>,
}

impl From<Block> for BlockRecord {
    fn from(block: Block) -> Self {
        let attrs = BlockAttrs::from_block(&block);
        let inner_blocks = match block.content {
            BlockContent::Blocks(children) => children,
            _ => Vec::new(),
        };
        Self {
            attrs,
            inner_blocks,
        }
    }
}

impl TryFrom<BlockRecord> for Block {
    type Error = BlockError;

    fn try_from(record: BlockRecord) -> Result<Self, Self::Error> {
        record.attrs.into_block(record.inner_blocks)
    }
}
