use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::verdict::Classification;

/// Threshold node; each child is owned exclusively by its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub threshold: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(threshold: i32) -> Self {
        Self {
            threshold,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, left: TreeNode) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: TreeNode) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    fn depth(&self) -> usize {
        let left = self.left.as_deref().map_or(0, TreeNode::depth);
        let right = self.right.as_deref().map_or(0, TreeNode::depth);
        1 + left.max(right)
    }

    fn node_count(&self) -> usize {
        1 + self.left.as_deref().map_or(0, TreeNode::node_count)
            + self.right.as_deref().map_or(0, TreeNode::node_count)
    }

    fn write_indented(
        &self,
        f: &mut fmt::Formatter<'_>,
        indent: usize,
        branch: &str,
    ) -> fmt::Result {
        writeln!(f, "{:indent$}{branch}credit_score < {}", "", self.threshold)?;
        let child_indent = indent + 2;
        match &self.left {
            Some(left) => left.write_indented(f, child_indent, "yes: ")?,
            None => writeln!(f, "{:child_indent$}yes: {}", "", Classification::Rejected)?,
        }
        match &self.right {
            Some(right) => right.write_indented(f, child_indent, "no:  "),
            None => writeln!(f, "{:child_indent$}no:  {}", "", Classification::Approved),
        }
    }
}

/// Caller-owned binary threshold tree over credit score.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecisionTree {
    #[serde(default)]
    pub root: Option<TreeNode>,
}

impl DecisionTree {
    pub fn new(root: TreeNode) -> Self {
        Self { root: Some(root) }
    }

    /// A tree without a root; every score classifies as undecided.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Three-level tree: 600 at the root, 500/450 below it and 700/650/750 above it.
    pub fn reference() -> Self {
        Self::new(
            TreeNode::leaf(600)
                .with_left(TreeNode::leaf(500).with_left(TreeNode::leaf(450)))
                .with_right(
                    TreeNode::leaf(700)
                        .with_left(TreeNode::leaf(650))
                        .with_right(TreeNode::leaf(750)),
                ),
        )
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TreeLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TreeLoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn classify(&self, credit_score: i32) -> Classification {
        classify(self.root.as_ref(), credit_score)
    }

    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::depth)
    }

    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, TreeNode::node_count)
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => root.write_indented(f, 0, ""),
            None => writeln!(f, "(empty tree: {})", Classification::Undecided),
        }
    }
}

/// Walks the tree from `node`. Scores below a threshold go left, the rest go right; falling
/// off a missing child rejects on the left and approves on the right.
pub fn classify(node: Option<&TreeNode>, credit_score: i32) -> Classification {
    let Some(mut current) = node else {
        return Classification::Undecided;
    };

    loop {
        let next = if credit_score < current.threshold {
            match current.left.as_deref() {
                Some(left) => left,
                None => return Classification::Rejected,
            }
        } else {
            match current.right.as_deref() {
                Some(right) => right,
                None => return Classification::Approved,
            }
        };
        current = next;
    }
}

/// Failure to read a decision tree definition.
#[derive(Debug, thiserror::Error)]
pub enum TreeLoadError {
    #[error("failed to read decision tree: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid decision tree definition: {0}")]
    Json(#[from] serde_json::Error),
}
