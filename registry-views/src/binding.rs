//! Edit bindings and the events hosts send back through them.
//!
//! An editable node carries a [`Binding`]. When the user changes that node the
//! host builds a [`FieldEvent`] from the binding and the widget-level edit and
//! hands it to the edit view that produced the node.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies the value an editable node writes to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Binding {
    /// Record field key, e.g. `keywords`.
    pub field: String,
    /// Language pane within a multilingual field, e.g. `fre`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl Binding {
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            lang: None,
        }
    }

    /// Narrow this binding to one language pane.
    pub fn in_language(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

/// A change to a tag input.
///
/// Values arrive as raw JSON because host inputs are not guaranteed to hand
/// back strings; the tag-list widget coerces or drops them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", content = "values", rename_all = "kebab-case")]
pub enum TagEdit {
    /// Add new trailing entries.
    Append(Vec<Value>),
    /// Delete the entry at a position.
    Remove(usize),
    /// The host reports the whole new list.
    Replace(Vec<Value>),
}

/// A widget-level edit, before it is folded into the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WidgetEdit {
    SetText { value: String },
    Tags { edit: TagEdit },
}

/// A widget edit addressed to a binding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldEvent {
    pub binding: Binding,
    pub edit: WidgetEdit,
}

impl FieldEvent {
    pub fn set_text(binding: Binding, value: impl Into<String>) -> Self {
        Self {
            binding,
            edit: WidgetEdit::SetText {
                value: value.into(),
            },
        }
    }

    pub fn tags(binding: Binding, edit: TagEdit) -> Self {
        Self {
            binding,
            edit: WidgetEdit::Tags { edit },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn binding_omits_absent_language() {
        let json = serde_json::to_value(Binding::field("authors")).unwrap();
        assert_eq!(json, json!({ "field": "authors" }));
    }

    #[test]
    fn event_json_shape() {
        let event = FieldEvent::tags(
            Binding::field("keywords").in_language("fre"),
            TagEdit::Remove(1),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            json!({
                "binding": { "field": "keywords", "lang": "fre" },
                "edit": { "kind": "tags", "edit": { "op": "remove", "values": 1 } }
            })
        );
        let parsed: FieldEvent = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, event);
    }
}
