//! Field shapes for registry item classes
//!
//! `registry-fields` owns the three recurring field abstractions a record type
//! is built from, plus the descriptor vocabulary that ties them to record keys.
//! It knows nothing about any particular record type; item classes declare
//! their fields as a `&'static [FieldDescriptor]`.
//!
//! # Architecture
//!
//! - **Multilingual**: one value per declared [`Language`], always complete
//! - **Tag lists**: ordered strings edited by append/remove only
//! - **Attachments**: opaque ids mapped to optional inline blobs
//! - **Typed once**: raw JSON becomes a [`FieldValue`] at the record boundary;
//!   widgets only ever see typed values

pub mod attachment;
pub mod error;
pub mod language;
pub mod multilingual;
pub mod tag_list;
pub mod types;
pub mod widget;

pub use attachment::{Attachment, AttachmentStore};
pub use error::{FieldsError, Result};
pub use language::Language;
pub use multilingual::Multilingual;
pub use tag_list::TagList;
pub use types::{FieldDescriptor, FieldShape, FieldValue, GroupMember, Placement};
pub use widget::{apply_edit, render_value, RenderContext};
