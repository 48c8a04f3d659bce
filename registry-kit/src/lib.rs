//! Record-class descriptors for a registry host.
//!
//! A host keeps one [`ItemClass`] per record type in an
//! [`ItemClassRegistry`] and asks it for defaults, ordering, acceptance and
//! views. Most record types don't implement [`ItemClass`] by hand: they
//! implement [`Record`] (a serde type plus a field-descriptor list) and wrap
//! it in a [`RecordSchema`].
//!
//! ```ignore
//! let schema = RecordSchema::<SymbolData>::new()?.with_hooks(MyHooks);
//! let extension = Extension::builder("ISO Symbols Registry")
//!     .requires_host("^1.0.0-beta1")
//!     .item_class(schema)?
//!     .build()?;
//! let view = extension.main_view(dispatch);
//! let rows = view.list_items("symbols", &records)?;
//! ```

pub mod class;
pub mod commit;
pub mod error;
pub mod extension;
pub mod hooks;
pub mod logging;
pub mod merge;
pub mod patch;
pub mod record;
pub mod registry;
pub mod schema;
pub mod sort;
pub mod view;

pub use class::{ChangeHandler, EditView, ItemClass};
pub use commit::CommitGate;
pub use error::{KitError, Result};
pub use extension::{
    DatasetInitializer, DatasetMigration, DatasetSeed, EmptyDataset, Extension, ExtensionBuilder,
};
pub use hooks::{AcceptAll, AcceptanceHooks};
pub use logging::Pretty;
pub use merge::{merge_json, merge_with_defaults, missing_required};
pub use patch::apply_field_patch;
pub use record::{ItemClassMeta, Record};
pub use registry::ItemClassRegistry;
pub use schema::{RecordSchema, DEFAULT_MAX_ATTACHMENT_BYTES};
pub use sort::{code_of, compare_by_field, locale_compare};
pub use view::RegistryView;
