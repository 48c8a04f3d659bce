//! Layout primitives borrowed from the host.

use crate::binding::Binding;
use crate::icon::Icon;
use crate::node::ViewNode;

/// Primitives the host registry shell lends to item-class views.
///
/// Every field row in a detail or edit view goes through `property_row`, and
/// every chip row through `tag_input`, so hosts that want different chrome
/// only override these two.
pub trait HostPrimitives: Send + Sync {
    /// A labeled row around arbitrary content.
    fn property_row(&self, title: &str, content: ViewNode) -> ViewNode {
        ViewNode::PropertyRow {
            title: title.to_string(),
            content: Box::new(content),
        }
    }

    /// A chip row. Editable only when a binding is given.
    fn tag_input(&self, values: &[String], icon: Option<Icon>, binding: Option<Binding>) -> ViewNode {
        ViewNode::TagInput {
            values: values.to_vec(),
            icon,
            binding,
        }
    }
}

/// Primitives producing plain [`ViewNode`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPrimitives;

impl HostPrimitives for DefaultPrimitives {}
