//! The extension's entry view: class lookup, rendering and commits, all
//! logged to an injected dispatcher.

use std::sync::Arc;

use registry_views::ViewNode;
use serde_json::Value;
use tracing::instrument::WithSubscriber;
use tracing::{debug, Dispatch};

use crate::class::{ChangeHandler, EditView};
use crate::commit::CommitGate;
use crate::error::Result;
use crate::registry::ItemClassRegistry;

/// What a host mounts for an extension.
///
/// Nothing here installs a global subscriber. Every call runs with the
/// `Dispatch` given at construction as its default, and restores the
/// caller's afterwards.
#[derive(Clone)]
pub struct RegistryView {
    classes: Arc<ItemClassRegistry>,
    dispatch: Dispatch,
    gate: Arc<CommitGate>,
}

impl RegistryView {
    pub fn new(classes: Arc<ItemClassRegistry>, dispatch: Dispatch) -> Self {
        Self {
            classes,
            dispatch,
            gate: Arc::new(CommitGate::new()),
        }
    }

    pub fn classes(&self) -> &ItemClassRegistry {
        &self.classes
    }

    /// Render `items` as list rows, ordered by the class's sorter.
    pub fn list_items(&self, class_id: &str, items: &[Value]) -> Result<Vec<ViewNode>> {
        tracing::dispatcher::with_default(&self.dispatch, || {
            let class = self.classes.require(class_id)?;
            let mut sorted: Vec<&Value> = items.iter().collect();
            sorted.sort_by(|a, b| class.item_sorter(a, b));
            debug!(class = class_id, count = sorted.len(), "listing items");
            Ok(sorted.into_iter().map(|item| class.list_item_view(item)).collect())
        })
    }

    pub fn detail(&self, class_id: &str, item: &Value) -> Result<ViewNode> {
        tracing::dispatcher::with_default(&self.dispatch, || {
            Ok(self.classes.require(class_id)?.detail_view(item))
        })
    }

    pub fn edit(&self, class_id: &str, item: &Value, on_change: Option<ChangeHandler>) -> Result<EditView> {
        tracing::dispatcher::with_default(&self.dispatch, || {
            Ok(self.classes.require(class_id)?.edit_view(item, on_change))
        })
    }

    /// Run the acceptance hooks for an edited record. See [`CommitGate::commit`].
    pub async fn commit(&self, class_id: &str, record_id: &str, payload: Value) -> Result<Value> {
        let class = self.classes.require(class_id)?.clone();
        let gate = self.gate.clone();
        let record_id = record_id.to_string();
        async move { gate.commit(class.as_ref(), &record_id, payload).await }
            .with_subscriber(self.dispatch.clone())
            .await
    }
}

impl std::fmt::Debug for RegistryView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryView")
            .field("classes", &self.classes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KitError;
    use crate::registry::tests::StubClass;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    struct CountEvents(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for CountEvents {
        fn on_event(&self, _event: &Event<'_>, _cx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn view(accept: bool) -> (RegistryView, Arc<AtomicUsize>) {
        let mut class = StubClass::new("symbols");
        class.accept = accept;
        let classes = ItemClassRegistry::new().with(class).unwrap();
        let count = Arc::new(AtomicUsize::new(0));
        let dispatch = Dispatch::new(tracing_subscriber::registry().with(CountEvents(count.clone())));
        (RegistryView::new(Arc::new(classes), dispatch), count)
    }

    #[test]
    fn list_items_sorts_and_logs_to_injected_dispatch() {
        let (view, count) = view(true);
        let rows = view
            .list_items("symbols", &[json!({ "id": "b" }), json!({ "id": "a" })])
            .unwrap();
        let codes: Vec<_> = rows
            .iter()
            .map(|row| match row {
                ViewNode::ListRow { code, .. } => code.as_str(),
                other => panic!("unexpected node {other:?}"),
            })
            .collect();
        assert_eq!(codes, ["a", "b"]);
        assert!(count.load(Ordering::SeqCst) > 0);
    }

    #[test]
    fn unknown_class_is_an_error() {
        let (view, _) = view(true);
        assert!(matches!(
            view.detail("codes", &json!({})),
            Err(KitError::UnknownItemClass { .. })
        ));
    }

    #[tokio::test]
    async fn rejected_commit_logs_to_injected_dispatch() {
        let (view, count) = view(false);
        let err = view.commit("symbols", "r1", json!({ "id": "a" })).await.unwrap_err();
        assert!(err.is_rejection());
        assert!(count.load(Ordering::SeqCst) > 0);
    }
}
