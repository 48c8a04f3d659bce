//! Icon names understood by the host.

use serde::{Deserialize, Serialize};

/// A leading icon for tag inputs, attachment labels and non-ideal states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    User,
    Locate,
    SearchAround,
    Flows,
    People,
    Book,
    Tag,
    Shapes,
    Paperclip,
    HeartBroken,
}

impl Icon {
    /// The host-side icon name.
    pub fn name(self) -> &'static str {
        match self {
            Icon::User => "user",
            Icon::Locate => "locate",
            Icon::SearchAround => "search-around",
            Icon::Flows => "flows",
            Icon::People => "people",
            Icon::Book => "book",
            Icon::Tag => "tag",
            Icon::Shapes => "shapes",
            Icon::Paperclip => "paperclip",
            Icon::HeartBroken => "heart-broken",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
