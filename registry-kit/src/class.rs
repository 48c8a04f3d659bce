//! The item-class descriptor as the host sees it.
//!
//! [`ItemClass`] is object safe and speaks raw JSON, so a host can keep
//! descriptors for unrelated record types side by side in one
//! [`ItemClassRegistry`](crate::ItemClassRegistry).

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use registry_fields::FieldsError;
use registry_views::{FieldEvent, ViewNode};
use serde_json::Value;

use crate::error::{KitError, Result};
use crate::record::ItemClassMeta;

/// Receives the new whole-record value after a field edit.
pub type ChangeHandler = Arc<dyn Fn(Value) + Send + Sync>;

type Dispatcher = Box<dyn Fn(&FieldEvent) -> Result<Value> + Send + Sync>;

/// A record-class descriptor.
#[async_trait]
pub trait ItemClass: Send + Sync {
    fn meta(&self) -> &ItemClassMeta;

    /// The fully populated empty record.
    fn defaults(&self) -> Value;

    /// Total order used by the host's list view.
    fn item_sorter(&self, a: &Value, b: &Value) -> Ordering;

    async fn sanitize_payload(&self, payload: Value) -> Result<Value>;

    async fn validate_payload(&self, payload: &Value) -> Result<bool>;

    /// One list row. Reads only the code and label fields.
    fn list_item_view(&self, item: &Value) -> ViewNode;

    /// Read-only presentation of every field.
    fn detail_view(&self, item: &Value) -> ViewNode;

    /// The detail layout, editable when `on_change` is given.
    fn edit_view(&self, item: &Value, on_change: Option<ChangeHandler>) -> EditView;
}

/// A rendered edit view and the means to feed edits back into it.
pub struct EditView {
    node: ViewNode,
    dispatcher: Option<Dispatcher>,
}

impl EditView {
    pub fn read_only(node: ViewNode) -> Self {
        Self {
            node,
            dispatcher: None,
        }
    }

    pub fn editable(
        node: ViewNode,
        dispatcher: impl Fn(&FieldEvent) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            node,
            dispatcher: Some(Box::new(dispatcher)),
        }
    }

    pub fn node(&self) -> &ViewNode {
        &self.node
    }

    pub fn into_node(self) -> ViewNode {
        self.node
    }

    pub fn is_editable(&self) -> bool {
        self.dispatcher.is_some()
    }

    /// Fold a field event into a new record and report it to the change
    /// handler. Returns the new record.
    ///
    /// The view is not updated; the host re-renders with the new record.
    pub fn dispatch(&self, event: &FieldEvent) -> Result<Value> {
        match &self.dispatcher {
            Some(dispatch) => dispatch(event),
            None => Err(KitError::Fields(FieldsError::NotEditable {
                field: event.binding.field.clone(),
            })),
        }
    }
}

impl fmt::Debug for EditView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditView")
            .field("node", &self.node)
            .field("editable", &self.is_editable())
            .finish()
    }
}
