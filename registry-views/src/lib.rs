//! View tree and host primitives for registry item classes
//!
//! `registry-views` is the rendering vocabulary shared by field widgets and
//! item-class descriptors. Render functions never draw anything themselves:
//! they return a [`ViewNode`] tree that the host registry shell turns into its
//! own widgets.
//!
//! # Architecture
//!
//! - **Pure output**: a render call is a function of its input record, nothing
//!   else is retained between calls
//! - **Bindings, not closures**: editable nodes carry a [`Binding`] naming the
//!   field (and language pane) they edit; the host reports changes back as a
//!   [`FieldEvent`]
//! - **Host primitives**: the labeled property row and the tag input are
//!   produced through [`HostPrimitives`] so a host can substitute its own

pub mod binding;
pub mod icon;
pub mod node;
pub mod primitives;

pub use binding::{Binding, FieldEvent, TagEdit, WidgetEdit};
pub use icon::Icon;
pub use node::{LanguagePane, Mode, TextStyle, ViewNode, PLACEHOLDER_GLYPH};
pub use primitives::{DefaultPrimitives, HostPrimitives};
