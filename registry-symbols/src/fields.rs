//! Symbol fields in display order.

use registry_fields::{FieldDescriptor, FieldShape, GroupMember};
use registry_views::{Icon, TextStyle};

const fn tags(key: &'static str, title: &'static str, icon: Icon) -> FieldDescriptor {
    FieldDescriptor::new(key, title, FieldShape::TagList)
        .icon(icon)
        .editable()
}

const fn long_text(key: &'static str, title: &'static str) -> FieldDescriptor {
    FieldDescriptor::new(key, title, FieldShape::Bilingual)
        .style(TextStyle::Block)
        .editable()
}

pub const FORM_MEMBERS: &[GroupMember] = &[
    GroupMember { key: "arrows", title: "Arrows" },
    GroupMember { key: "arrowsDouble", title: "Double arrows" },
    GroupMember { key: "barrels", title: "Barrels" },
    GroupMember { key: "circles", title: "Circles" },
    GroupMember { key: "lines", title: "Lines" },
    GroupMember { key: "objectsOrdinaryUsers", title: "Objects (ordinary users)" },
    GroupMember { key: "objectsTechnicalUsers", title: "Objects (technical users)" },
    GroupMember { key: "objectsStandardized", title: "Objects (standardized)" },
    GroupMember { key: "recognizableObjects", title: "Recognizable objects" },
    GroupMember { key: "polygons", title: "Polygons" },
    GroupMember { key: "rectangles", title: "Rectangles" },
    GroupMember { key: "shields", title: "Shields" },
    GroupMember { key: "squares", title: "Squares" },
    GroupMember { key: "triangles", title: "Triangles" },
];

/// Detail and edit views render these rows, in this order. Identifier, title,
/// description and keywords must be present or the item renders as broken.
pub const SYMBOL_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("identifier", "Identifier", FieldShape::Scalar)
        .style(TextStyle::Code)
        .required(),
    FieldDescriptor::new("title", "Title", FieldShape::Bilingual)
        .style(TextStyle::Input)
        .editable()
        .required(),
    FieldDescriptor::new("prefix", "Prefix", FieldShape::Scalar),
    FieldDescriptor::new("std", "Std.", FieldShape::Scalar),
    FieldDescriptor::new("publishedIn", "Published in", FieldShape::Scalar),
    long_text("productArea", "Product area"),
    long_text("description", "Description").required(),
    long_text("notes", "Notes"),
    tags("function", "Function", Icon::Locate),
    tags("fieldOfApplication", "Field of application", Icon::SearchAround),
    tags("relevantTCs", "Relevant TCs", Icon::People),
    tags("relevantPublications", "Relevant publications", Icon::Book),
    tags("replacing", "Replacing", Icon::Flows),
    tags("authors", "Authors", Icon::User),
    long_text("remarks", "Remarks"),
    FieldDescriptor::new("keywords", "Keywords", FieldShape::BilingualTagList)
        .icon(Icon::Tag)
        .editable()
        .required(),
    FieldDescriptor::new("preview", "Preview", FieldShape::Scalar),
    tags("geometricForm", "Geometric form", Icon::Shapes),
    FieldDescriptor::new("form", "Form", FieldShape::Group(FORM_MEMBERS)),
    FieldDescriptor::new("attachments", "Attachments", FieldShape::AttachmentMap)
        .icon(Icon::Paperclip)
        .aside(),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{Form, SymbolData};
    use serde_json::Value;
    use std::collections::BTreeSet;

    #[test]
    fn descriptors_cover_the_record_exactly() {
        let record = serde_json::to_value(SymbolData::default()).unwrap();
        let record_keys: BTreeSet<&str> = record.as_object().unwrap().keys().map(String::as_str).collect();
        let field_keys: BTreeSet<&str> = SYMBOL_FIELDS.iter().map(|d| d.key).collect();
        assert_eq!(record_keys, field_keys);
        assert_eq!(field_keys.len(), SYMBOL_FIELDS.len());
    }

    #[test]
    fn form_members_match_form() {
        let form = serde_json::to_value(Form::default()).unwrap();
        let Value::Object(form) = form else { panic!("form is an object") };
        let keys: Vec<&str> = form.keys().map(String::as_str).collect();
        let members: Vec<&str> = FORM_MEMBERS.iter().map(|m| m.key).collect();
        assert_eq!(keys.len(), members.len());
        assert!(members.iter().all(|m| keys.contains(m)));
    }

    #[test]
    fn required_fields() {
        let required: Vec<&str> = SYMBOL_FIELDS.iter().filter(|d| d.required).map(|d| d.key).collect();
        assert_eq!(required, ["identifier", "title", "description", "keywords"]);
    }
}
