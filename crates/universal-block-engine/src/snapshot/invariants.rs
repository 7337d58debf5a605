use crate::block::{Block, BlockContent, ControlAttr};
use crate::parsing::is_void_element;

/// Validates builder output invariants, recursively.
///
/// Asserts that:
/// - Tag names are non-empty and lower-cased
/// - `class`, `style` and control attribute names never appear in `attributes`
/// - Void elements are self-closing
/// - `<svg>` is never split into child blocks
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(forest: &[Block]) {
    for block in forest {
        check_block(block);
    }
}

fn check_block(b: &Block) {
    assert!(!b.tag_name.is_empty(), "block with empty tag name: {b:?}");
    assert_eq!(
        b.tag_name,
        b.tag_name.to_ascii_lowercase(),
        "tag name not lower-cased: {}",
        b.tag_name
    );

    for key in b.attributes.keys() {
        assert!(
            key != "class" && key != "style",
            "<{}> leaks `{key}` into generic attributes",
            b.tag_name
        );
        assert!(
            ControlAttr::from_attr_name(key).is_none(),
            "<{}> leaks control attribute `{key}` into generic attributes",
            b.tag_name
        );
    }

    if is_void_element(&b.tag_name) {
        assert!(
            b.is_self_closing(),
            "void element <{}> is not self-closing",
            b.tag_name
        );
    }

    if b.tag_name == "svg" {
        assert!(
            !matches!(b.content, BlockContent::Blocks(_)),
            "<svg> was decomposed into child blocks"
        );
    }

    check(b.children());
}
