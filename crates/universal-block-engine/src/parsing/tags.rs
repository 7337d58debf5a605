use std::collections::BTreeSet;

/// HTML void elements: never have content or an end tag.
pub const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Options for building a block forest from HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Extra tags treated as self-closing, stored lower-cased.
    self_closing_tags: BTreeSet<String>,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_self_closing_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.self_closing_tags
            .extend(tags.into_iter().map(|t| t.as_ref().trim().to_ascii_lowercase()));
        self
    }

    /// True for void elements and configured self-closing tags.
    pub fn is_self_closing(&self, tag: &str) -> bool {
        is_void_element(tag) || self.self_closing_tags.contains(tag)
    }
}
