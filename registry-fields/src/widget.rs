//! Field widgets: render a typed field value, and fold widget edits back
//! into a new field value.

use registry_views::{Binding, HostPrimitives, Mode, TextStyle, ViewNode, WidgetEdit};

use crate::error::{FieldsError, Result};
use crate::language::Language;
use crate::types::{FieldDescriptor, FieldShape, FieldValue, GroupMember};

/// Everything a widget needs besides the value itself.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub mode: Mode,
    pub host: &'a dyn HostPrimitives,
    /// Decoded attachments above this size render as a note.
    pub max_attachment_bytes: usize,
}

impl RenderContext<'_> {
    /// The binding a field's widget gets: only editable fields in edit mode.
    pub fn binding_for(&self, desc: &FieldDescriptor) -> Option<Binding> {
        (self.mode.is_edit() && desc.editable).then(|| Binding::field(desc.key))
    }
}

/// Render one field value (without its row label).
pub fn render_value(desc: &FieldDescriptor, value: &FieldValue, cx: &RenderContext<'_>) -> ViewNode {
    let binding = cx.binding_for(desc);
    match value {
        FieldValue::Scalar(s) => text_node(s, desc.style, binding),
        FieldValue::Bilingual(m) => m.render(binding.as_ref(), |s, b| text_node(s, desc.style, b)),
        FieldValue::TagList(list) => list.render(cx.host, desc.icon, binding),
        FieldValue::BilingualTagList(m) => {
            m.render(binding.as_ref(), |list, b| list.render(cx.host, desc.icon, b))
        }
        FieldValue::Attachments(store) if store.is_empty() => ViewNode::Placeholder,
        FieldValue::Attachments(store) => ViewNode::stack(store.render(cx.max_attachment_bytes)),
        FieldValue::Group(group) => {
            let titles: &[GroupMember] = match desc.shape {
                FieldShape::Group(members) => members,
                _ => &[],
            };
            let rows = group
                .iter()
                .map(|(key, entry)| {
                    let title = titles
                        .iter()
                        .find(|m| m.key == key.as_str())
                        .map(|m| m.title)
                        .unwrap_or(key.as_str());
                    let content = match entry {
                        Some(text) => text_node(text, TextStyle::Plain, None),
                        None => ViewNode::Placeholder,
                    };
                    cx.host.property_row(title, content)
                })
                .collect();
            ViewNode::stack(rows)
        }
    }
}

/// A text node; read-only empty text becomes the placeholder glyph.
fn text_node(value: &str, style: TextStyle, binding: Option<Binding>) -> ViewNode {
    if binding.is_none() && value.trim().is_empty() {
        return ViewNode::Placeholder;
    }
    ViewNode::Text {
        value: value.to_string(),
        style,
        binding,
    }
}

/// Fold a widget edit into a new value for the field.
///
/// `lang` is the pane the edit came from; multilingual fields require it and
/// change only that language. The current value is never modified.
pub fn apply_edit(
    desc: &FieldDescriptor,
    current: &FieldValue,
    lang: Option<&str>,
    edit: &WidgetEdit,
) -> Result<FieldValue> {
    if !desc.editable {
        return Err(FieldsError::NotEditable {
            field: desc.key.to_string(),
        });
    }
    let pane = || -> Result<Language> {
        let code = lang.ok_or_else(|| FieldsError::LanguageRequired {
            field: desc.key.to_string(),
        })?;
        Language::from_code(code)
    };
    match (current, edit) {
        (FieldValue::Scalar(_), WidgetEdit::SetText { value }) => Ok(FieldValue::Scalar(value.clone())),
        (FieldValue::Bilingual(m), WidgetEdit::SetText { value }) => {
            Ok(FieldValue::Bilingual(m.with(pane()?, value.clone())))
        }
        (FieldValue::TagList(list), WidgetEdit::Tags { edit }) => Ok(FieldValue::TagList(list.apply(edit)?)),
        (FieldValue::BilingualTagList(m), WidgetEdit::Tags { edit }) => {
            Ok(FieldValue::BilingualTagList(m.edit(pane()?, |list| list.apply(edit))?))
        }
        (value, edit) => Err(FieldsError::shape_mismatch(
            desc.key,
            match edit {
                WidgetEdit::SetText { .. } => "text",
                WidgetEdit::Tags { .. } => "tag list",
            },
            value.kind(),
        )),
    }
}
