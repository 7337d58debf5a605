//! Thin helpers over the html5ever `RcDom`.
//!
//! Input is parsed as a fragment in a `<body>` context, so the tree builder
//! repairs markup and keeps custom tags as elements, while `<style>`, `<link>`
//! and other head-only tags stay where they were written.
//!
//! Dropping an `RcDom` empties every node it owns, including handles cloned
//! out of it. Keep the `RcDom` alive for as long as any handle is walked.

use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, QualName, local_name, ns, parse_fragment as parse_html_fragment};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

/// Parses `html` as the contents of a `<body>` element.
pub fn parse_fragment(html: &str) -> RcDom {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    parse_html_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new(), false)
        .from_utf8()
        .one(html.as_bytes())
}

/// The synthetic `<html>` element holding the fragment's top-level nodes.
pub fn fragment_root(dom: &RcDom) -> Option<Handle> {
    dom.document
        .children
        .borrow()
        .iter()
        .find(|child| is_element(child))
        .cloned()
}

/// Lower-cased local name of an element node.
pub fn element_name(handle: &Handle) -> Option<String> {
    match handle.data {
        NodeData::Element { ref name, .. } => Some(name.local.to_ascii_lowercase().to_string()),
        _ => None,
    }
}

/// Attribute `(name, value)` pairs of an element in source order.
///
/// Namespaced attributes (e.g. `xlink:href`) keep their prefix.
pub fn element_attrs(handle: &Handle) -> Vec<(String, String)> {
    match handle.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .map(|attr| {
                let local = attr.name.local.to_string();
                let name = match attr.name.prefix {
                    Some(ref prefix) => format!("{prefix}:{local}"),
                    None => local,
                };
                (name, attr.value.to_string())
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub fn is_element(handle: &Handle) -> bool {
    matches!(handle.data, NodeData::Element { .. })
}

/// Text of a text node, `None` for any other node.
pub fn text_of(handle: &Handle) -> Option<String> {
    match handle.data {
        NodeData::Text { ref contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

/// Concatenated text of all descendant text nodes, like DOM `textContent`.
pub fn text_content(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text(handle, &mut out);
    out
}

fn collect_text(handle: &Handle, out: &mut String) {
    for child in handle.children.borrow().iter() {
        match child.data {
            NodeData::Text { ref contents } => out.push_str(&contents.borrow()),
            NodeData::Element { .. } => collect_text(child, out),
            _ => {}
        }
    }
}

/// Serializes the children of `handle`, like DOM `innerHTML`.
pub fn inner_html(handle: &Handle) -> String {
    let parent = match handle.data {
        NodeData::Element { ref name, .. } => Some(name.clone()),
        _ => None,
    };
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(parent),
        ..Default::default()
    };

    let mut out = Vec::new();
    if let Err(err) = serialize(&mut out, &SerializableHandle::from(handle.clone()), opts) {
        log::warn!("inner HTML serialization failed: {err}");
    }
    String::from_utf8_lossy(&out).into_owned()
}
