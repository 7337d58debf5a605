use markup5ever_rcdom::{Handle, NodeData};

use crate::block::{Block, BlockContent, ContentType};

use super::{
    attributes::AttributeClassifier, content_type::ContentTypeClassifier, dom, tags::BuildOptions,
};

/// Tag of the synthetic block wrapping loose top-level text.
const TEXT_WRAPPER_TAG: &str = "p";

/// Walks a parsed DOM and produces blocks.
///
/// Recursion only happens for `blocks` content; `text` and `html` content is
/// captured as a string and never re-parsed.
pub struct BlockBuilder<'a> {
    options: &'a BuildOptions,
    content_types: ContentTypeClassifier,
    attributes: AttributeClassifier,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(options: &'a BuildOptions) -> Self {
        Self {
            options,
            content_types: ContentTypeClassifier,
            attributes: AttributeClassifier,
        }
    }

    /// Builds one block per significant child of `parent`, in document order.
    pub fn build_children(&self, parent: &Handle) -> Vec<Block> {
        parent
            .children
            .borrow()
            .iter()
            .filter_map(|child| self.build_node(child))
            .collect()
    }

    /// Comments, doctypes and blank text yield `None`.
    pub fn build_node(&self, node: &Handle) -> Option<Block> {
        match node.data {
            NodeData::Element { .. } => Some(self.build_element(node)),
            NodeData::Text { ref contents } => {
                let text = contents.borrow();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Block::text(TEXT_WRAPPER_TAG, trimmed))
                }
            }
            _ => None,
        }
    }

    fn build_element(&self, node: &Handle) -> Block {
        let tag_name = dom::element_name(node).unwrap_or_default();
        let raw_attrs = dom::element_attrs(node);
        let set = self
            .attributes
            .classify(raw_attrs.iter().map(|(n, v)| (n.as_str(), v.as_str())));

        let content = if self.options.is_self_closing(&tag_name) {
            if !node.children.borrow().is_empty() {
                log::debug!("<{tag_name}> is self-closing; dropping its child nodes");
            }
            BlockContent::SelfClosing
        } else {
            match self.content_types.classify(node) {
                ContentType::Empty => BlockContent::Empty,
                ContentType::Text => BlockContent::Text(dom::text_content(node).trim().to_string()),
                ContentType::Html => BlockContent::Html(dom::inner_html(node)),
                ContentType::Blocks => BlockContent::Blocks(self.build_children(node)),
            }
        };

        log::trace!("built <{tag_name}> as {}", content.content_type().as_str());

        Block {
            tag_name,
            class_name: set.class_name,
            attributes: set.attributes,
            controls: set.controls,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(html: &str, options: &BuildOptions) -> Vec<Block> {
        let dom = dom::parse_fragment(html);
        let root = dom::fragment_root(&dom).unwrap();
        BlockBuilder::new(options).build_children(&root)
    }

    #[test]
    fn loose_text_is_wrapped_in_paragraph() {
        let forest = build("  Hello there  <hr>", &BuildOptions::default());
        assert_eq!(
            forest,
            vec![Block::text("p", "Hello there"), Block::self_closing("hr")]
        );
    }

    #[test]
    fn text_content_is_trimmed() {
        let forest = build("<h1>\n   Title \n</h1>", &BuildOptions::default());
        assert_eq!(forest, vec![Block::text("h1", "Title")]);
    }

    #[test]
    fn configured_self_closing_tag_drops_children() {
        let options = BuildOptions::new().with_self_closing_tags(["my-icon"]);
        let forest = build(
            "<my-icon name=\"star\"><span>ignored</span></my-icon>",
            &options,
        );
        assert_eq!(
            forest,
            vec![Block::self_closing("my-icon").with_attribute("name", "star")]
        );
    }

    #[test]
    fn custom_tag_without_configuration_is_regular() {
        let forest = build("<my-icon name=\"star\"></my-icon>", &BuildOptions::default());
        assert_eq!(
            forest,
            vec![Block::new("my-icon").with_attribute("name", "star")]
        );
    }

    #[test]
    fn nested_blocks_skip_blank_text_and_comments() {
        let forest = build(
            "<ul>\n  <li>One</li>\n  <!-- two -->\n  <li>Three</li>\n</ul>",
            &BuildOptions::default(),
        );
        assert_eq!(
            forest,
            vec![Block::blocks(
                "ul",
                vec![Block::text("li", "One"), Block::text("li", "Three")]
            )]
        );
    }
}
