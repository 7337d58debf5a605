use serde::{Deserialize, Serialize};

/// Template-compiler directives lifted out of the generic attribute bag.
///
/// The engine never interprets these values; it only carries them through
/// the markup format byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_visibility: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_expression: Option<String>,
}

impl ControlFields {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Stores an already-decoded attribute value under its control field.
    pub fn set(&mut self, attr: ControlAttr, value: &str) {
        match attr {
            ControlAttr::LoopSource => self.loop_source = Some(value.to_string()),
            ControlAttr::LoopVariable => self.loop_variable = Some(value.to_string()),
            ControlAttr::ConditionalVisibility => {
                self.conditional_visibility = Some(is_truthy(value))
            }
            ControlAttr::ConditionalExpression => {
                self.conditional_expression = Some(value.to_string())
            }
            ControlAttr::SetVariable => self.set_variable = Some(value.to_string()),
            ControlAttr::SetExpression => self.set_expression = Some(value.to_string()),
        }
    }

    /// The set fields as `(canonicalName, value)` pairs, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        ControlAttr::ALL
            .iter()
            .filter_map(|attr| {
                let value = match attr {
                    ControlAttr::LoopSource => self.loop_source.clone(),
                    ControlAttr::LoopVariable => self.loop_variable.clone(),
                    ControlAttr::ConditionalVisibility => {
                        self.conditional_visibility.map(|b| b.to_string())
                    }
                    ControlAttr::ConditionalExpression => self.conditional_expression.clone(),
                    ControlAttr::SetVariable => self.set_variable.clone(),
                    ControlAttr::SetExpression => self.set_expression.clone(),
                }?;
                Some((attr.canonical_name(), value))
            })
            .collect()
    }
}

/// The fixed control-attribute vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAttr {
    LoopSource,
    LoopVariable,
    ConditionalVisibility,
    ConditionalExpression,
    SetVariable,
    SetExpression,
}

impl ControlAttr {
    pub const ALL: [ControlAttr; 6] = [
        ControlAttr::LoopSource,
        ControlAttr::LoopVariable,
        ControlAttr::ConditionalVisibility,
        ControlAttr::ConditionalExpression,
        ControlAttr::SetVariable,
        ControlAttr::SetExpression,
    ];

    /// Matches an HTML attribute name case-insensitively.
    pub fn from_attr_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.canonical_name().eq_ignore_ascii_case(name))
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            ControlAttr::LoopSource => "loopSource",
            ControlAttr::LoopVariable => "loopVariable",
            ControlAttr::ConditionalVisibility => "conditionalVisibility",
            ControlAttr::ConditionalExpression => "conditionalExpression",
            ControlAttr::SetVariable => "setVariable",
            ControlAttr::SetExpression => "setExpression",
        }
    }
}

/// Only `"true"` and `"1"` count as visible.
fn is_truthy(value: &str) -> bool {
    matches!(value, "true" | "1")
}
