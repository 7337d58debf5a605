use crate::block::{Attributes, ControlAttr, ControlFields, STYLE_KEY};

/// Result of splitting an element's attribute list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    pub class_name: String,
    pub controls: ControlFields,
    /// Generic attributes; `style` lives here under [`STYLE_KEY`].
    pub attributes: Attributes,
}

impl AttributeSet {
    pub fn style(&self) -> Option<&str> {
        self.attributes.get(STYLE_KEY)
    }

    /// Flattens the set back into an attribute list that classifies to the same split.
    pub fn reassemble(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if !self.class_name.is_empty() {
            out.push(("class".to_string(), self.class_name.clone()));
        }
        for (name, value) in self.controls.entries() {
            out.push((name.to_string(), value));
        }
        for (name, value) in self.attributes.iter() {
            out.push((name.to_string(), value.to_string()));
        }
        out
    }
}

/// Splits attributes into class, style, control directives and the rest.
///
/// Values are taken as given. The html5ever tokenizer has already decoded
/// entities once, so stored values are plain text and must be re-escaped on
/// output.
pub struct AttributeClassifier;

impl AttributeClassifier {
    pub fn classify<'a, I>(&self, attrs: I) -> AttributeSet
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut set = AttributeSet::default();

        for (name, value) in attrs {
            if name == "class" {
                set.class_name = value.to_string();
            } else if name == "style" {
                set.attributes.insert(STYLE_KEY, value);
            } else if let Some(attr) = ControlAttr::from_attr_name(name) {
                set.controls.set(attr, value);
            } else {
                set.attributes.insert(name, value);
            }
        }

        set
    }
}
