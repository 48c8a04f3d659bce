//! The Symbol record.

use registry_fields::{AttachmentStore, FieldDescriptor, Multilingual, TagList};
use registry_kit::{ItemClassMeta, Record};
use serde::{Deserialize, Serialize};

use crate::fields::SYMBOL_FIELDS;

/// Metadata for one standardized graphical symbol.
///
/// Every field is always present. Absent fields deserialize to their empty
/// value; use the item class's merge to fill a partial record from JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SymbolData {
    pub identifier: String,
    pub title: Multilingual<String>,
    pub prefix: String,
    pub std: String,
    pub published_in: String,
    pub product_area: Multilingual<String>,
    pub description: Multilingual<String>,
    pub notes: Multilingual<String>,
    pub function: TagList,
    pub field_of_application: TagList,
    #[serde(rename = "relevantTCs")]
    pub relevant_tcs: TagList,
    pub relevant_publications: TagList,
    pub replacing: TagList,
    pub authors: TagList,
    pub remarks: Multilingual<String>,
    pub keywords: Multilingual<TagList>,
    pub preview: String,
    pub geometric_form: TagList,
    pub form: Form,
    pub attachments: AttachmentStore,
}

/// Geometric composition of a symbol. Each element is independently
/// optional; `None` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Form {
    pub arrows: Option<String>,
    pub arrows_double: Option<String>,
    pub barrels: Option<String>,
    pub circles: Option<String>,
    pub lines: Option<String>,
    pub objects_ordinary_users: Option<String>,
    pub objects_technical_users: Option<String>,
    pub objects_standardized: Option<String>,
    pub recognizable_objects: Option<String>,
    pub polygons: Option<String>,
    pub rectangles: Option<String>,
    pub shields: Option<String>,
    pub squares: Option<String>,
    pub triangles: Option<String>,
}

impl Record for SymbolData {
    const CODE_FIELD: &'static str = "identifier";
    const LABEL_FIELD: &'static str = "title";

    fn meta() -> ItemClassMeta {
        ItemClassMeta {
            title: "Symbol".to_string(),
            description: "Describes a symbol that can be placed on equipment (from automobiles \
                and home entertainment products to earth-moving machinery) to indicate how to \
                use it correctly and safely."
                .to_string(),
            id: crate::SYMBOLS_CLASS_ID.to_string(),
            alternative_names: Vec::new(),
        }
    }

    fn fields() -> &'static [FieldDescriptor] {
        SYMBOL_FIELDS
    }
}
