//! # Block Tree → Text
//!
//! - **`html`**: HTML for previews and copy-as-HTML; drops control fields
//! - **`markup`**: the lossless block-markup format used to persist blocks

pub mod html;
pub mod markup;

pub use html::{block_to_html, sanitize_attr_name, to_html};
pub use markup::{
    DEFAULT_BLOCK_NAME, MarkupOptions, block_to_markup, escape_for_comment, to_markup,
    to_markup_with,
};
