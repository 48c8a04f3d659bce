//! The typed side of an item class.

use registry_fields::FieldDescriptor;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Static identification of an item class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemClassMeta {
    pub title: String,
    pub description: String,
    pub id: String,
    #[serde(default)]
    pub alternative_names: Vec<String>,
}

/// A record type that can back a [`RecordSchema`](crate::RecordSchema).
///
/// `Default` is the empty record: every field present, every value empty.
/// The field list drives list, detail and edit rendering alike.
pub trait Record:
    Serialize + DeserializeOwned + Clone + PartialEq + Default + Send + Sync + 'static
{
    /// Field compared by the item sorter and shown as the list-row code.
    const CODE_FIELD: &'static str;

    /// Multilingual field whose primary-language value labels list rows.
    const LABEL_FIELD: &'static str;

    fn meta() -> ItemClassMeta;

    /// Every field in display order.
    fn fields() -> &'static [FieldDescriptor];
}
