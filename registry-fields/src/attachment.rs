//! Attachment store: inline binary blobs keyed by opaque identifiers.
//!
//! A key mapped to `null` is a reserved but empty slot. It renders as a
//! placeholder, never as an error.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use indexmap::IndexMap;
use registry_views::ViewNode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// An inline blob with its media type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    /// Base64-encoded content.
    pub data: String,
    pub mime: String,
}

impl Attachment {
    pub fn from_bytes(bytes: &[u8], mime: impl Into<String>) -> Self {
        Self {
            data: STANDARD.encode(bytes),
            mime: mime.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// `data:` URL the host can hand straight to an image element.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data)
    }

    /// Render this attachment's body.
    ///
    /// Blobs that fail to decode or exceed `max_bytes` render as a note.
    pub fn render(&self, max_bytes: usize) -> ViewNode {
        let bytes = match STANDARD.decode(self.data.as_bytes()) {
            Ok(bytes) => bytes.len(),
            Err(e) => {
                warn!(mime = %self.mime, %e, "attachment is not valid base64");
                return ViewNode::note(format!("Unreadable {} attachment", self.mime));
            }
        };
        if bytes > max_bytes {
            debug!(bytes, max_bytes, "attachment too large to inline");
            return ViewNode::note(format!("Attachment too large to display ({bytes} bytes)"));
        }
        if self.is_image() {
            ViewNode::Image {
                mime: self.mime.clone(),
                src: self.data_url(),
                bytes,
            }
        } else {
            ViewNode::File {
                mime: self.mime.clone(),
                bytes,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentStore(IndexMap<String, Option<Attachment>>);

impl AttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy with `id` set. `None` reserves an empty slot.
    pub fn with(&self, id: impl Into<String>, attachment: Option<Attachment>) -> Self {
        let mut next = self.clone();
        next.0.insert(id.into(), attachment);
        next
    }

    /// A copy without `id`.
    pub fn without(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.0.shift_remove(id);
        next
    }

    /// `None` if the key is absent, `Some(None)` for an empty slot.
    pub fn get(&self, id: &str) -> Option<Option<&Attachment>> {
        self.0.get(id).map(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Attachment>)> {
        self.0.iter().map(|(id, a)| (id.as_str(), a.as_ref()))
    }

    /// One labeled block per declared key.
    pub fn render(&self, max_bytes: usize) -> Vec<ViewNode> {
        self.iter()
            .map(|(id, attachment)| ViewNode::Attachment {
                id: id.to_string(),
                content: Box::new(match attachment {
                    Some(attachment) => attachment.render(max_bytes),
                    None => ViewNode::Placeholder,
                }),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn null_slot_renders_placeholder_block() {
        let store: AttachmentStore = serde_json::from_value(json!({ "fig1": null })).unwrap();
        let blocks = store.render(1024);
        assert_eq!(
            blocks,
            vec![ViewNode::Attachment {
                id: "fig1".into(),
                content: Box::new(ViewNode::Placeholder),
            }]
        );
    }

    #[test]
    fn null_is_distinct_from_absent() {
        let store = AttachmentStore::new().with("fig1", None);
        assert_eq!(store.get("fig1"), Some(None));
        assert_eq!(store.get("fig2"), None);
        assert_eq!(serde_json::to_value(&store).unwrap(), json!({ "fig1": null }));
    }

    #[test]
    fn image_renders_as_data_url() {
        let attachment = Attachment::from_bytes(PNG_HEADER, "image/png");
        let ViewNode::Image { mime, src, bytes } = attachment.render(1024) else {
            panic!("expected image");
        };
        assert_eq!(mime, "image/png");
        assert!(src.starts_with("data:image/png;base64,"));
        assert_eq!(bytes, PNG_HEADER.len());
    }

    #[test]
    fn non_image_renders_as_file() {
        let attachment = Attachment::from_bytes(b"%PDF-1.7", "application/pdf");
        assert!(matches!(attachment.render(1024), ViewNode::File { bytes: 8, .. }));
    }

    #[test]
    fn bad_or_oversized_blobs_render_notes() {
        let bad = Attachment {
            data: "not base64!".into(),
            mime: "image/png".into(),
        };
        assert!(matches!(bad.render(1024), ViewNode::Note { .. }));

        let big = Attachment::from_bytes(PNG_HEADER, "image/png");
        assert!(matches!(big.render(4), ViewNode::Note { .. }));
    }

    #[test]
    fn keys_keep_insertion_order() {
        let store = AttachmentStore::new()
            .with("z", None)
            .with("a", None)
            .without("missing");
        let ids: Vec<_> = store.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["z", "a"]);
    }
}
