use serde::Deserialize;
use std::fmt;

use crate::renderer::format_tree;

/// Node shapes accepted in JSON tree input
///
/// A bare string is a leaf, `["label", [...]]` is a labelled node with
/// children, and `{"label": ..., "children": [...]}` is the object form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawNode {
    Leaf(String),
    Pair(String, Vec<RawNode>),
    Object {
        label: String,
        #[serde(default)]
        children: Vec<RawNode>,
    },
}

/// Owned labelled tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes, this one included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Number of levels in the tree; a lone node has height 1
    pub fn height(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::height)
            .max()
            .unwrap_or(0)
    }

    pub fn render(&self) -> String {
        format_tree(self, |node| &node.label, |node| node.children.iter())
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<RawNode> for TreeNode {
    fn from(raw: RawNode) -> Self {
        match raw {
            RawNode::Leaf(label) => TreeNode::leaf(label),
            RawNode::Pair(label, children) | RawNode::Object { label, children } => {
                TreeNode::branch(label, children.into_iter().map(TreeNode::from).collect())
            }
        }
    }
}
