use serde::{Serialize, Deserialize};

/// Where a node came from in the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Heading,
    List,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Heading => "heading",
            NodeKind::List => "list",
        }
    }
}

/// One classified line of Markdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    /// Count of leading `#` for headings, always 1 for list items
    pub level: usize,
    pub title: String,
    pub kind: NodeKind,
}

impl OutlineNode {
    pub fn heading(level: usize, title: impl Into<String>) -> Self {
        Self { level, title: title.into(), kind: NodeKind::Heading }
    }

    pub fn list_item(title: impl Into<String>) -> Self {
        Self { level: 1, title: title.into(), kind: NodeKind::List }
    }
}

/// A node together with the descendants grouped beneath it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineGroup {
    pub node: OutlineNode,
    pub children: Vec<OutlineGroup>,
}

/// The grouped outline. The level-0 root is implicit; `groups` are its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineTree {
    pub groups: Vec<OutlineGroup>,
}

impl OutlineTree {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
