//! `RecordSchema`: a complete item class built from a [`Record`] type.
//!
//! All three views share one layout routine, parameterized by [`Mode`]. The
//! field-descriptor list decides which rows appear, in which order, in which
//! column, and which of them accept edits.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use registry_fields::{
    apply_edit, render_value, FieldDescriptor, FieldValue, FieldsError, Language, Placement,
    RenderContext,
};
use registry_views::{DefaultPrimitives, FieldEvent, HostPrimitives, Mode, TextStyle, ViewNode};
use serde_json::Value;
use tracing::{debug, debug_span, warn};

use crate::class::{ChangeHandler, EditView, ItemClass};
use crate::error::{KitError, Result};
use crate::hooks::{AcceptAll, AcceptanceHooks};
use crate::merge::{merge_json, missing_required};
use crate::patch::apply_field_patch;
use crate::record::{ItemClassMeta, Record};
use crate::sort::{code_of, compare_by_field};

/// Decoded attachments larger than this render as a note.
pub const DEFAULT_MAX_ATTACHMENT_BYTES: usize = 8 * 1024 * 1024;

const BROKEN_ITEM_TITLE: &str = "Error displaying item";

/// Field values checked against their descriptors, in display order.
type CheckedFields = Vec<(&'static FieldDescriptor, FieldValue)>;

pub struct RecordSchema<R: Record> {
    meta: ItemClassMeta,
    defaults: Value,
    hooks: Arc<dyn AcceptanceHooks>,
    host: Arc<dyn HostPrimitives>,
    max_attachment_bytes: usize,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RecordSchema<R> {
    pub fn new() -> Result<Self> {
        Ok(Self {
            meta: R::meta(),
            defaults: serde_json::to_value(R::default())?,
            hooks: Arc::new(AcceptAll),
            host: Arc::new(DefaultPrimitives),
            max_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
            _record: PhantomData,
        })
    }

    /// Replace the identity/always-true acceptance hooks.
    pub fn with_hooks(mut self, hooks: impl AcceptanceHooks + 'static) -> Self {
        self.hooks = Arc::new(hooks);
        self
    }

    /// Render rows and chip inputs through the host's own primitives.
    pub fn with_host(mut self, host: Arc<dyn HostPrimitives>) -> Self {
        self.host = host;
        self
    }

    pub fn with_max_attachment_bytes(mut self, bytes: usize) -> Self {
        self.max_attachment_bytes = bytes;
        self
    }

    /// Merge a partial record onto the defaults.
    pub fn merge(&self, partial: &Value) -> Value {
        merge_json(&self.defaults, partial)
    }

    /// Check required fields, merge onto the defaults and read the typed record.
    pub fn typed(&self, item: &Value) -> Result<R> {
        let missing = missing_required(R::fields(), item);
        if !missing.is_empty() {
            return Err(KitError::missing(missing));
        }
        serde_json::from_value(self.merge(item)).map_err(|e| KitError::malformed(e.to_string()))
    }

    /// The record boundary: required fields present, every field the shape
    /// its descriptor declares.
    fn check(&self, item: &Value) -> Result<CheckedFields> {
        let missing = missing_required(R::fields(), item);
        if !missing.is_empty() {
            return Err(KitError::missing(missing));
        }
        let merged = self.merge(item);
        R::fields()
            .iter()
            .map(|desc| -> Result<(&'static FieldDescriptor, FieldValue)> {
                let raw = merged.get(desc.key).unwrap_or(&Value::Null);
                let value = FieldValue::from_json(desc, raw)
                    .map_err(|e| KitError::malformed(e.to_string()))?;
                Ok((desc, value))
            })
            .collect()
    }

    fn layout(&self, fields: &CheckedFields, mode: Mode) -> ViewNode {
        let cx = RenderContext {
            mode,
            host: self.host.as_ref(),
            max_attachment_bytes: self.max_attachment_bytes,
        };
        let rows = |placement: Placement| -> Vec<ViewNode> {
            fields
                .iter()
                .filter(|(desc, _)| desc.placement == placement)
                .map(|(desc, value)| self.host.property_row(desc.title, render_value(desc, value, &cx)))
                .collect()
        };
        let main = ViewNode::stack(rows(Placement::Main));
        let aside = rows(Placement::Aside);
        if aside.is_empty() {
            main
        } else {
            ViewNode::Split {
                main: Box::new(main),
                aside: Box::new(ViewNode::stack(aside)),
            }
        }
    }

    fn broken(&self, err: &KitError) -> ViewNode {
        warn!(class = %self.meta.id, %err, "rendering broken item");
        let (missing, detail) = match err {
            KitError::MalformedRecord { missing, reason } => (missing.clone(), reason.clone()),
            other => (Vec::new(), Some(other.to_string())),
        };
        ViewNode::BrokenItem {
            title: BROKEN_ITEM_TITLE.to_string(),
            missing,
            detail,
        }
    }
}

#[async_trait]
impl<R: Record> ItemClass for RecordSchema<R> {
    fn meta(&self) -> &ItemClassMeta {
        &self.meta
    }

    fn defaults(&self) -> Value {
        self.defaults.clone()
    }

    fn item_sorter(&self, a: &Value, b: &Value) -> Ordering {
        compare_by_field(a, b, R::CODE_FIELD)
    }

    /// Hands the payload to the hooks as-is. Undeclared keys, extra
    /// language panes and partial records reach the hook untouched.
    async fn sanitize_payload(&self, payload: Value) -> Result<Value> {
        self.hooks.sanitize(payload).await
    }

    async fn validate_payload(&self, payload: &Value) -> Result<bool> {
        let accepted = self.hooks.validate(payload).await?;
        debug!(class = %self.meta.id, accepted, "payload validated");
        Ok(accepted)
    }

    fn list_item_view(&self, item: &Value) -> ViewNode {
        let label = item
            .get(R::LABEL_FIELD)
            .and_then(|m| m.get(Language::PRIMARY.code()))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(|s| ViewNode::text(s, TextStyle::Plain))
            .unwrap_or(ViewNode::Placeholder);
        ViewNode::ListRow {
            code: code_of(item, R::CODE_FIELD).to_string(),
            label: Box::new(label),
        }
    }

    fn detail_view(&self, item: &Value) -> ViewNode {
        let _span = debug_span!("detail_view", class = %self.meta.id, code = code_of(item, R::CODE_FIELD)).entered();
        match self.check(item) {
            Ok(fields) => self.layout(&fields, Mode::Read),
            Err(err) => self.broken(&err),
        }
    }

    fn edit_view(&self, item: &Value, on_change: Option<ChangeHandler>) -> EditView {
        let _span = debug_span!("edit_view", class = %self.meta.id, code = code_of(item, R::CODE_FIELD)).entered();
        let fields = match self.check(item) {
            Ok(fields) => fields,
            Err(err) => return EditView::read_only(self.broken(&err)),
        };
        let Some(on_change) = on_change else {
            return EditView::read_only(self.layout(&fields, Mode::Read));
        };
        let node = self.layout(&fields, Mode::Edit);
        let original = item.clone();
        let class = self.meta.id.clone();
        EditView::editable(node, move |event: &FieldEvent| {
            let key = event.binding.field.as_str();
            let (desc, current) = fields
                .iter()
                .find(|(desc, _)| desc.key == key)
                .ok_or_else(|| FieldsError::UnknownField {
                    field: key.to_string(),
                })?;
            let value = apply_edit(desc, current, event.binding.lang.as_deref(), &event.edit)?;
            let next = apply_field_patch(&original, key, &value)?;
            debug!(class = %class, field = key, lang = ?event.binding.lang, "field edited");
            on_change(next.clone());
            Ok(next)
        })
    }
}
