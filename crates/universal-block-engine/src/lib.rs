//! # universal-block-engine
//!
//! Bidirectional conversion between HTML fragments and the block tree of the
//! universal block.
//!
//! ```text
//! HTML ─ html5ever ─▶ DOM ─ BlockBuilder ─▶ [Block] ─┬─ to_html ───▶ HTML
//!                                                     └─ to_markup ─▶ <!-- wp:… -->
//!                                                                       │
//!                               [Block] ◀──────────── parse_markup ─────┘
//! ```
//!
//! Every call is a pure transformation: no global state, no I/O. Building
//! and serializing never fail; only reading markup back can.

pub mod block;
pub mod parsing;
pub mod serialize;
pub mod snapshot;

// Re-export key types for easier usage
pub use block::{
    Attributes, Block, BlockContent, BlockError, ContentType, ControlAttr, ControlFields,
    STYLE_KEY,
};
pub use parsing::{
    BuildOptions, MarkupError, build_forest, build_forest_with, parse_markup, parse_markup_with,
};
pub use serialize::{DEFAULT_BLOCK_NAME, MarkupOptions, to_html, to_markup, to_markup_with};
