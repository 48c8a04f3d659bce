//! Field descriptors and the tagged field value.
//!
//! A record type declares its fields once as a list of [`FieldDescriptor`]s.
//! Raw JSON for a field is checked against the descriptor's [`FieldShape`] at
//! the record boundary and becomes a [`FieldValue`], so widgets never inspect
//! untyped data.

use indexmap::IndexMap;
use registry_views::{Icon, TextStyle};
use serde_json::Value;

use crate::attachment::AttachmentStore;
use crate::error::{FieldsError, Result};
use crate::multilingual::Multilingual;
use crate::tag_list::TagList;

/// A named, optional free-text member of a group field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupMember {
    pub key: &'static str,
    pub title: &'static str,
}

/// The shape a field value takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// A single string, no language split.
    Scalar,
    /// One string per language.
    Bilingual,
    /// An ordered list of strings.
    TagList,
    /// One list of strings per language.
    BilingualTagList,
    /// Attachment identifiers mapped to optional blobs.
    AttachmentMap,
    /// A fixed set of independently optional strings.
    Group(&'static [GroupMember]),
}

impl FieldShape {
    pub fn name(&self) -> &'static str {
        match self {
            FieldShape::Scalar => "scalar",
            FieldShape::Bilingual => "bilingual",
            FieldShape::TagList => "tag list",
            FieldShape::BilingualTagList => "bilingual tag list",
            FieldShape::AttachmentMap => "attachment map",
            FieldShape::Group(_) => "group",
        }
    }
}

/// Where a field is laid out in detail and edit views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Main,
    Aside,
}

/// Declares one field of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub shape: FieldShape,
    pub style: TextStyle,
    pub icon: Option<Icon>,
    pub editable: bool,
    pub required: bool,
    pub placement: Placement,
}

impl FieldDescriptor {
    pub const fn new(key: &'static str, title: &'static str, shape: FieldShape) -> Self {
        Self {
            key,
            title,
            shape,
            style: TextStyle::Plain,
            icon: None,
            editable: false,
            required: false,
            placement: Placement::Main,
        }
    }

    pub const fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub const fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub const fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Detail and edit views render a broken-item state when this field is absent.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn aside(mut self) -> Self {
        self.placement = Placement::Aside;
        self
    }
}

/// A field value, tagged by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(String),
    Bilingual(Multilingual<String>),
    TagList(TagList),
    BilingualTagList(Multilingual<TagList>),
    Attachments(AttachmentStore),
    Group(IndexMap<String, Option<String>>),
}

impl FieldValue {
    /// Check raw JSON against the descriptor's shape.
    ///
    /// `null` reads as the shape's empty value.
    pub fn from_json(desc: &FieldDescriptor, value: &Value) -> Result<Self> {
        let mismatch = || FieldsError::shape_mismatch(desc.key, desc.shape.name(), json_kind(value));
        Ok(match desc.shape {
            FieldShape::Scalar => match value {
                Value::Null => FieldValue::Scalar(String::new()),
                Value::String(s) => FieldValue::Scalar(s.clone()),
                _ => return Err(mismatch()),
            },
            FieldShape::Bilingual => FieldValue::Bilingual(parse(value).ok_or_else(mismatch)?),
            FieldShape::TagList => FieldValue::TagList(parse(value).ok_or_else(mismatch)?),
            FieldShape::BilingualTagList => {
                FieldValue::BilingualTagList(parse(value).ok_or_else(mismatch)?)
            }
            FieldShape::AttachmentMap => {
                FieldValue::Attachments(parse(value).ok_or_else(mismatch)?)
            }
            FieldShape::Group(members) => {
                let object = match value {
                    Value::Null => None,
                    Value::Object(object) => Some(object),
                    _ => return Err(mismatch()),
                };
                let mut group = IndexMap::with_capacity(members.len());
                for member in members {
                    let entry = match object.and_then(|o| o.get(member.key)) {
                        None | Some(Value::Null) => None,
                        Some(Value::String(s)) => Some(s.clone()),
                        Some(_) => return Err(mismatch()),
                    };
                    group.insert(member.key.to_string(), entry);
                }
                FieldValue::Group(group)
            }
        })
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(match self {
            FieldValue::Scalar(s) => Value::String(s.clone()),
            FieldValue::Bilingual(m) => serde_json::to_value(m)?,
            FieldValue::TagList(l) => serde_json::to_value(l)?,
            FieldValue::BilingualTagList(m) => serde_json::to_value(m)?,
            FieldValue::Attachments(a) => serde_json::to_value(a)?,
            FieldValue::Group(g) => serde_json::to_value(g)?,
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Scalar(_) => "scalar",
            FieldValue::Bilingual(_) => "bilingual",
            FieldValue::TagList(_) => "tag list",
            FieldValue::BilingualTagList(_) => "bilingual tag list",
            FieldValue::Attachments(_) => "attachment map",
            FieldValue::Group(_) => "group",
        }
    }
}

/// Deserialize, treating `null` as the empty value.
fn parse<T>(value: &Value) -> Option<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    if value.is_null() {
        return Some(T::default());
    }
    T::deserialize(value).ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
