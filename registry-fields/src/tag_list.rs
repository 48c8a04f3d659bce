//! Tag-list field: an ordered sequence of free-text entries shown as chips.
//!
//! Entries are edited by appending and removing, never by rewriting an entry
//! in place. Duplicates are allowed; uniqueness is a validation concern.

use std::fmt;

use registry_views::{Binding, HostPrimitives, Icon, TagEdit, ViewNode};
use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::{FieldsError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn new(entries: Vec<String>) -> Self {
        Self(entries)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    /// Apply a tag-input edit, returning the new list.
    ///
    /// Untouched entries keep their relative order. Added values are coerced
    /// to strings; values that cannot be, or that are blank, are dropped.
    pub fn apply(&self, edit: &TagEdit) -> Result<TagList> {
        let next = match edit {
            TagEdit::Append(values) => {
                let mut entries = self.0.clone();
                entries.extend(values.iter().filter_map(coerce_entry));
                entries
            }
            TagEdit::Remove(index) => {
                if *index >= self.0.len() {
                    return Err(FieldsError::TagIndexOutOfRange {
                        index: *index,
                        len: self.0.len(),
                    });
                }
                let mut entries = self.0.clone();
                entries.remove(*index);
                entries
            }
            TagEdit::Replace(values) => values.iter().filter_map(coerce_entry).collect(),
        };
        trace!(before = self.0.len(), after = next.len(), "tag list edited");
        Ok(TagList(next))
    }

    /// Render as a chip row; editable only with a binding.
    pub fn render(&self, host: &dyn HostPrimitives, icon: Option<Icon>, binding: Option<Binding>) -> ViewNode {
        host.tag_input(&self.0, icon, binding)
    }
}

impl From<Vec<String>> for TagList {
    fn from(entries: Vec<String>) -> Self {
        Self(entries)
    }
}

impl<const N: usize> From<[&str; N]> for TagList {
    fn from(entries: [&str; N]) -> Self {
        Self(entries.into_iter().map(str::to_string).collect())
    }
}

/// Coerce a host-supplied value into a tag entry.
fn coerce_entry(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Stored lists are read leniently: scalars become strings, `null` entries
/// are skipped. Nested arrays or objects are a malformed record.
impl<'de> Deserialize<'de> for TagList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_seq(TagListVisitor)
    }
}

struct TagListVisitor;

impl<'de> Visitor<'de> for TagListVisitor {
    type Value = TagList;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of strings")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<TagList, A::Error> {
        let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(entry) = seq.next_element::<StoredEntry>()? {
            match entry {
                StoredEntry::Text(s) => entries.push(s),
                StoredEntry::Number(n) => entries.push(n.to_string()),
                StoredEntry::Bool(b) => entries.push(b.to_string()),
                StoredEntry::Null => {}
            }
        }
        Ok(TagList(entries))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_views::DefaultPrimitives;
    use rstest::rstest;
    use serde_json::json;

    fn abc() -> TagList {
        TagList::from(["a", "b", "c"])
    }

    #[test]
    fn remove_keeps_survivor_order() {
        let next = abc().apply(&TagEdit::Remove(1)).unwrap();
        assert_eq!(next, TagList::from(["a", "c"]));
    }

    #[test]
    fn remove_out_of_range_is_an_error() {
        let err = abc().apply(&TagEdit::Remove(3)).unwrap_err();
        assert!(matches!(err, FieldsError::TagIndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn append_adds_trailing_entries() {
        let next = abc().apply(&TagEdit::Append(vec![json!("d"), json!("a")])).unwrap();
        assert_eq!(next, TagList::from(["a", "b", "c", "d", "a"]));
    }

    #[rstest]
    #[case(json!(7), Some("7"))]
    #[case(json!(true), Some("true"))]
    #[case(json!("  "), None)]
    #[case(json!(null), None)]
    #[case(json!({ "x": 1 }), None)]
    fn append_coerces_or_drops(#[case] value: Value, #[case] expected: Option<&str>) {
        let next = TagList::default().apply(&TagEdit::Append(vec![value])).unwrap();
        let expected: Vec<String> = expected.into_iter().map(str::to_string).collect();
        assert_eq!(next.as_slice(), expected.as_slice());
    }

    #[test]
    fn replace_filters_invalid_entries() {
        let next = abc()
            .apply(&TagEdit::Replace(vec![json!("c"), json!(""), json!(null), json!("a")]))
            .unwrap();
        assert_eq!(next, TagList::from(["c", "a"]));
    }

    #[test]
    fn apply_never_mutates_the_original() {
        let original = abc();
        let _ = original.apply(&TagEdit::Remove(0)).unwrap();
        assert_eq!(original, abc());
    }

    #[test]
    fn stored_lists_deserialize_leniently() {
        let list: TagList = serde_json::from_value(json!(["ISO", 7000, null, false])).unwrap();
        assert_eq!(list, TagList::from(["ISO", "7000", "false"]));
        assert!(serde_json::from_value::<TagList>(json!([["nested"]])).is_err());
        assert!(serde_json::from_value::<TagList>(json!("ISO")).is_err());
    }

    #[test]
    fn render_is_in_stored_order() {
        let list = TagList::from(["z", "a"]);
        let node = list.render(&DefaultPrimitives, Some(Icon::User), None);
        assert_eq!(
            node,
            ViewNode::TagInput {
                values: vec!["z".into(), "a".into()],
                icon: Some(Icon::User),
                binding: None,
            }
        );
    }
}
