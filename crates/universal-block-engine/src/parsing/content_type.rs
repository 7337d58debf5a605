use markup5ever_rcdom::{Handle, NodeData};

use crate::block::ContentType;

use super::dom;

/// Decides what kind of content an element holds from its direct children.
///
/// Priority:
/// 1. `<svg>` is always `html`; its subtree is never split into blocks
/// 2. no child nodes: `empty`
/// 3. element and non-blank text children: `html` (mixed content)
/// 4. only element children: `blocks`
/// 5. only non-blank text: `text`
/// 6. anything else (blank text, comments): `empty`
pub struct ContentTypeClassifier;

impl ContentTypeClassifier {
    pub fn classify(&self, node: &Handle) -> ContentType {
        if dom::element_name(node).as_deref() == Some("svg") {
            return ContentType::Html;
        }

        let children = node.children.borrow();
        if children.is_empty() {
            return ContentType::Empty;
        }

        let mut has_elements = false;
        let mut has_text = false;
        for child in children.iter() {
            match child.data {
                NodeData::Element { .. } => has_elements = true,
                NodeData::Text { ref contents } => {
                    if !contents.borrow().trim().is_empty() {
                        has_text = true;
                    }
                }
                _ => {}
            }
        }

        match (has_elements, has_text) {
            (true, true) => ContentType::Html,
            (true, false) => ContentType::Blocks,
            (false, true) => ContentType::Text,
            (false, false) => ContentType::Empty,
        }
    }
}
