//! The view tree returned by every render function.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::binding::Binding;
use crate::icon::Icon;

/// Glyph hosts show for an empty value.
pub const PLACEHOLDER_GLYPH: &str = "—";

/// Whether a layout is rendered for reading or editing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Read,
    Edit,
}

impl Mode {
    pub fn is_edit(self) -> bool {
        matches!(self, Mode::Edit)
    }
}

/// How a text value is presented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    /// Bare text inside a property row.
    Plain,
    /// Monospace identifier.
    Code,
    /// Single-line input look.
    Input,
    /// Multi-line formatted block.
    Block,
}

/// One language pane of a multilingual field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguagePane {
    pub code: String,
    pub content: ViewNode,
}

/// A node in the rendered view tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ViewNode {
    /// Vertical stack of children.
    Stack { children: Vec<ViewNode> },
    /// Main column plus a side column, stacked on narrow hosts.
    Split {
        main: Box<ViewNode>,
        aside: Box<ViewNode>,
    },
    /// Labeled property row.
    PropertyRow { title: String, content: Box<ViewNode> },
    /// Text in a given style. Editable when `binding` is set.
    Text {
        value: String,
        style: TextStyle,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        binding: Option<Binding>,
    },
    /// The empty-value glyph.
    Placeholder,
    /// Chip row. Disabled unless `binding` is set.
    TagInput {
        values: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<Icon>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        binding: Option<Binding>,
    },
    /// Equal-width side-by-side panes in language declaration order.
    LanguagePanes { panes: Vec<LanguagePane> },
    /// Labeled attachment block.
    Attachment { id: String, content: Box<ViewNode> },
    /// Inline image.
    Image { mime: String, src: String, bytes: usize },
    /// Non-image binary that can only be offered for download.
    File { mime: String, bytes: usize },
    /// Short explanatory text, e.g. why an attachment cannot be shown.
    Note { text: String },
    /// Row in the host's item list.
    ListRow { code: String, label: Box<ViewNode> },
    /// Record missing required fields.
    BrokenItem {
        title: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        missing: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
}

impl ViewNode {
    pub fn stack(children: Vec<ViewNode>) -> Self {
        ViewNode::Stack { children }
    }

    pub fn text(value: impl Into<String>, style: TextStyle) -> Self {
        ViewNode::Text {
            value: value.into(),
            style,
            binding: None,
        }
    }

    pub fn note(text: impl Into<String>) -> Self {
        ViewNode::Note { text: text.into() }
    }

    /// Direct children in render order.
    pub fn children(&self) -> Vec<&ViewNode> {
        match self {
            ViewNode::Stack { children } => children.iter().collect(),
            ViewNode::Split { main, aside } => vec![main.as_ref(), aside.as_ref()],
            ViewNode::PropertyRow { content, .. } | ViewNode::Attachment { content, .. } => {
                vec![content.as_ref()]
            }
            ViewNode::LanguagePanes { panes } => panes.iter().map(|p| &p.content).collect(),
            ViewNode::ListRow { label, .. } => vec![label.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Visit this node and every descendant, depth first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ViewNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// The binding of this node, if it is editable.
    pub fn binding(&self) -> Option<&Binding> {
        match self {
            ViewNode::Text { binding, .. } | ViewNode::TagInput { binding, .. } => {
                binding.as_ref()
            }
            _ => None,
        }
    }

    /// Every binding in the tree, in render order.
    pub fn bindings(&self) -> Vec<&Binding> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Some(b) = node.binding() {
                out.push(b);
            }
        });
        out
    }

    /// Find the property row with the given title.
    pub fn find_row(&self, title: &str) -> Option<&ViewNode> {
        let mut found = None;
        self.walk(&mut |node| {
            if found.is_none() {
                if let ViewNode::PropertyRow { title: t, content } = node {
                    if t == title {
                        found = Some(content.as_ref());
                    }
                }
            }
        });
        found
    }

    pub fn is_broken(&self) -> bool {
        matches!(self, ViewNode::BrokenItem { .. })
    }

    fn outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        match self {
            ViewNode::Stack { children } => {
                for child in children {
                    child.outline(f, depth)?;
                }
                Ok(())
            }
            ViewNode::Split { main, aside } => {
                main.outline(f, depth)?;
                writeln!(f, "{pad}|")?;
                aside.outline(f, depth)
            }
            ViewNode::PropertyRow { title, content } => {
                writeln!(f, "{pad}{title}:")?;
                content.outline(f, depth + 1)
            }
            ViewNode::Text { value, binding, .. } => {
                let marker = if binding.is_some() { "*" } else { "" };
                writeln!(f, "{pad}{value}{marker}")
            }
            ViewNode::Placeholder => writeln!(f, "{pad}{PLACEHOLDER_GLYPH}"),
            ViewNode::TagInput {
                values,
                icon,
                binding,
            } => {
                let icon = icon.map(|i| format!("({i}) ")).unwrap_or_default();
                let marker = if binding.is_some() { "*" } else { "" };
                writeln!(f, "{pad}{icon}[{}]{marker}", values.join(", "))
            }
            ViewNode::LanguagePanes { panes } => {
                for pane in panes {
                    writeln!(f, "{pad}<{}>", pane.code)?;
                    pane.content.outline(f, depth + 1)?;
                }
                Ok(())
            }
            ViewNode::Attachment { id, content } => {
                writeln!(f, "{pad}(paperclip) {id}")?;
                content.outline(f, depth + 1)
            }
            ViewNode::Image { mime, bytes, .. } => writeln!(f, "{pad}image {mime} ({bytes} bytes)"),
            ViewNode::File { mime, bytes } => writeln!(f, "{pad}file {mime} ({bytes} bytes)"),
            ViewNode::Note { text } => writeln!(f, "{pad}{text}"),
            ViewNode::ListRow { code, label } => {
                write!(f, "{pad}`{code}` ")?;
                label.outline(f, 0)
            }
            ViewNode::BrokenItem {
                title,
                missing,
                detail,
            } => {
                writeln!(f, "{pad}(heart-broken) {title}")?;
                if !missing.is_empty() {
                    writeln!(f, "{pad}missing: {}", missing.join(", "))?;
                }
                if let Some(detail) = detail {
                    writeln!(f, "{pad}{detail}")?;
                }
                Ok(())
            }
        }
    }
}

/// Indented plain-text outline, used in logs and tests.
impl fmt::Display for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.outline(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewNode {
        ViewNode::stack(vec![
            ViewNode::PropertyRow {
                title: "Identifier".into(),
                content: Box::new(ViewNode::text("ISO 7000-0001", TextStyle::Plain)),
            },
            ViewNode::PropertyRow {
                title: "Authors".into(),
                content: Box::new(ViewNode::TagInput {
                    values: vec!["a".into(), "b".into()],
                    icon: Some(Icon::User),
                    binding: Some(Binding::field("authors")),
                }),
            },
        ])
    }

    #[test]
    fn find_row_returns_content() {
        let node = sample();
        let row = node.find_row("Authors").unwrap();
        assert!(matches!(row, ViewNode::TagInput { .. }));
        assert!(node.find_row("Missing").is_none());
    }

    #[test]
    fn bindings_collects_editable_nodes_only() {
        let node = sample();
        let bindings = node.bindings();
        assert_eq!(bindings, vec![&Binding::field("authors")]);
    }

    #[test]
    fn outline_marks_editable_and_empty() {
        let node = ViewNode::stack(vec![sample(), ViewNode::Placeholder]);
        let text = node.to_string();
        assert!(text.contains("Identifier:\n  ISO 7000-0001\n"));
        assert!(text.contains("(user) [a, b]*"));
        assert!(text.ends_with("—\n"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(ViewNode::Placeholder).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "placeholder" }));
    }
}
